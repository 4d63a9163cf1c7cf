use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error types for parsing and querying INI configuration
#[derive(Error, Debug)]
pub enum IniError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No .ini file found in {}", dir.display())]
    NoIniFileFound { dir: PathBuf },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Section [{0}] does not exist")]
    MissingSection(String),

    #[error("Key '{key}' does not exist in section [{section}]")]
    MissingKey { section: String, key: String },

    #[error("Malformed line {line}: {content}")]
    Malformed { line: usize, content: String },

    #[error("Value '{value}' of [{section}] {key} is not a valid {expected}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        expected: &'static str,
    },
}

impl IniError {
    /// Process exit status reported by the command line tool for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            IniError::FileNotFound(_) | IniError::Io { .. } | IniError::NoIniFileFound { .. } => 1,
            IniError::InvalidArgument(_) => 2,
            IniError::MissingSection(_) => 3,
            IniError::MissingKey { .. } => 4,
            IniError::Malformed { .. } => 5,
            IniError::InvalidValue { .. } => 6,
        }
    }

    /// Whether the error means the requested entry is absent, as opposed to a
    /// problem with the input or the call itself
    pub fn is_not_found(&self) -> bool {
        matches!(self, IniError::MissingSection(_) | IniError::MissingKey { .. })
    }
}
