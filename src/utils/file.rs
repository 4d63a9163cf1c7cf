//! Locating the INI file to load

use std::env;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::models::config_store::ConfigStore;
use crate::models::error::IniError;
use crate::utils::ini_reader::IniReader;

/// Checks if a regular file exists at the given path
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_file()
}

fn is_ini_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    !name.starts_with('.') && name.ends_with(".ini") && path.is_file()
}

/// Pick the INI file to load
///
/// An explicit path wins when it exists. Otherwise `dir` is scanned one level
/// deep for `*.ini` files and the first by file name is used.
pub fn find_ini_file(explicit: Option<&Path>, dir: &Path) -> Result<PathBuf, IniError> {
    if let Some(path) = explicit {
        if file_exists(path) {
            debug!("Using INI file {}", path.display());
            return Ok(path.to_path_buf());
        }
        warn!(
            "INI file {} does not exist, searching {}",
            path.display(),
            dir.display()
        );
    }

    let Ok(entries) = std::fs::read_dir(dir) else {
        warn!("Cannot read directory {}", dir.display());
        return Err(IniError::NoIniFileFound {
            dir: dir.to_path_buf(),
        });
    };

    let mut candidates: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| is_ini_file(path))
        .collect();
    candidates.sort();

    match candidates.into_iter().next() {
        Some(path) => {
            debug!("Discovered INI file {}", path.display());
            Ok(path)
        }
        None => {
            warn!("No .ini file found in {}", dir.display());
            Err(IniError::NoIniFileFound {
                dir: dir.to_path_buf(),
            })
        }
    }
}

/// Discover an INI file relative to `dir` and parse it with `reader`
pub fn find_and_load_with(
    reader: &IniReader,
    explicit: Option<&Path>,
    dir: &Path,
) -> Result<ConfigStore, IniError> {
    let path = find_ini_file(explicit, dir)?;
    reader.parse_file(path)
}

/// Discover an INI file relative to `dir` and parse it
pub fn find_and_load_in(explicit: Option<&Path>, dir: &Path) -> Result<ConfigStore, IniError> {
    find_and_load_with(&IniReader::new(), explicit, dir)
}

/// Discover an INI file relative to the current directory and parse it
pub fn find_and_load(explicit: Option<&Path>) -> Result<ConfigStore, IniError> {
    let dir = env::current_dir().map_err(|source| IniError::Io {
        path: PathBuf::from("."),
        source,
    })?;
    find_and_load_in(explicit, &dir)
}
