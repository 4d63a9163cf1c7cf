//! INI file reader implementation
//!
//! Turns INI text into a [`ConfigStore`]. The reader is line-oriented and makes
//! a single forward pass:
//!
//! * blank lines and lines starting with `#` or `;` are comments
//! * `[name]` spanning the whole line switches the current section; the name
//!   is kept exactly as written between the brackets
//! * `key = value` splits on the first `=`, trimming both sides
//!
//! Anything else is skipped, unless the reader runs in [`ParseMode::Strict`].

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, error, info};

use crate::models::config_store::{ConfigStore, DEFAULT_SECTION};
use crate::models::error::IniError;

/// How the reader treats lines it cannot interpret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Drop unrecognised lines and assignments with an empty key
    #[default]
    Tolerant,
    /// Fail with [`IniError::Malformed`] on the first such line
    Strict,
}

/// What a single trimmed line turned out to be
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Comment,
    Section(&'a str),
    Entry(&'a str, &'a str),
    Invalid,
}

fn classify(line: &str) -> Line<'_> {
    let line = line.trim_ascii();
    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with('#') || line.starts_with(';') {
        return Line::Comment;
    }
    if line.len() > 2 && line.starts_with('[') && line.ends_with(']') {
        return Line::Section(&line[1..line.len() - 1]);
    }
    match line.split_once('=') {
        Some((key, value)) => {
            let key = key.trim_ascii();
            if key.is_empty() {
                Line::Invalid
            } else {
                Line::Entry(key, value.trim_ascii())
            }
        }
        None => Line::Invalid,
    }
}

/// INI reader; tolerant by default
#[derive(Debug, Clone, Default)]
pub struct IniReader {
    pub mode: ParseMode,
}

impl IniReader {
    /// Create a tolerant reader
    pub fn new() -> Self {
        IniReader {
            mode: ParseMode::Tolerant,
        }
    }

    /// Switch the reader to strict mode
    pub fn strict(mut self) -> Self {
        self.mode = ParseMode::Strict;
        self
    }

    /// Parse INI content into a new store
    pub fn parse(&self, content: &str) -> Result<ConfigStore, IniError> {
        let mut store = ConfigStore::new();
        self.parse_into(content, &mut store)?;
        Ok(store)
    }

    /// Parse INI content into a store owned by the caller
    ///
    /// Entries already present in `store` are overwritten when the content
    /// sets the same section and key.
    pub fn parse_into(&self, content: &str, store: &mut ConfigStore) -> Result<(), IniError> {
        self.read_into(content.as_bytes(), Path::new("<string>"), store)
    }

    /// Parse INI content from any buffered text stream
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ConfigStore, IniError> {
        let mut store = ConfigStore::new();
        self.read_into(reader, Path::new("<stream>"), &mut store)?;
        Ok(store)
    }

    /// Parse an INI file
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ConfigStore, IniError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            error!("Cannot load INI file: path is empty");
            return Err(IniError::InvalidArgument("file path is empty".to_string()));
        }
        if !path.exists() {
            error!("INI file {} does not exist", path.display());
            return Err(IniError::FileNotFound(path.to_path_buf()));
        }

        let file = File::open(path).map_err(|e| io_error(path, e))?;
        let mut store = ConfigStore::new();
        self.read_into(BufReader::new(file), path, &mut store)?;
        info!(
            "Loaded {} ({} sections, {} entries)",
            path.display(),
            store.section_count(),
            store.len()
        );
        Ok(store)
    }

    /// Line loop shared by every entry point
    ///
    /// Lines are split on raw `\n` bytes and decoded one at a time, so bytes
    /// that are not UTF-8 only affect the line they sit on.
    fn read_into<R: BufRead>(
        &self,
        reader: R,
        origin: &Path,
        store: &mut ConfigStore,
    ) -> Result<(), IniError> {
        let mut current_section = DEFAULT_SECTION.to_string();
        for (idx, raw) in reader.split(b'\n').enumerate() {
            let mut raw = raw.map_err(|e| io_error(origin, e))?;
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
            let number = idx + 1;
            let line = match String::from_utf8(raw) {
                Ok(line) => line,
                Err(e) => {
                    let lossy = String::from_utf8_lossy(e.as_bytes()).into_owned();
                    if self.mode == ParseMode::Strict {
                        error!("Line {} of {} is not valid UTF-8", number, origin.display());
                        return Err(IniError::Malformed {
                            line: number,
                            content: lossy.trim_ascii().to_string(),
                        });
                    }
                    debug!("Line {} of {} is not valid UTF-8", number, origin.display());
                    lossy
                }
            };
            self.apply_line(number, &line, &mut current_section, store)?;
        }
        Ok(())
    }

    fn apply_line(
        &self,
        number: usize,
        line: &str,
        current_section: &mut String,
        store: &mut ConfigStore,
    ) -> Result<(), IniError> {
        match classify(line) {
            Line::Blank | Line::Comment => {}
            Line::Section(name) => {
                *current_section = name.to_string();
            }
            Line::Entry(key, value) => store.set(current_section.as_str(), key, value),
            Line::Invalid => {
                if self.mode == ParseMode::Strict {
                    error!("Malformed line {}: {}", number, line.trim_ascii());
                    return Err(IniError::Malformed {
                        line: number,
                        content: line.trim_ascii().to_string(),
                    });
                }
                debug!("Skipping line {}: {}", number, line.trim_ascii());
            }
        }
        Ok(())
    }
}

fn io_error(path: &Path, source: io::Error) -> IniError {
    error!("Failed to read {}: {}", path.display(), source);
    IniError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Parse an INI file with the tolerant reader
pub fn parse_ini<P: AsRef<Path>>(path: P) -> Result<ConfigStore, IniError> {
    IniReader::new().parse_file(path)
}

/// Parse INI text with the tolerant reader
pub fn parse_ini_str(content: &str) -> Result<ConfigStore, IniError> {
    IniReader::new().parse(content)
}
