//! Parsed INI content and the lookups performed against it
//!
//! Values are addressed by a `(section, key)` pair. Sections and keys keep the
//! order in which they were first seen so listings follow the source file.

use linked_hash_map::LinkedHashMap;
use log::warn;

use super::error::IniError;

/// Section that holds entries appearing before any `[section]` header
pub const DEFAULT_SECTION: &str = "default";

type Items = LinkedHashMap<String, String>;

/// Two-level mapping of section -> key -> value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    sections: LinkedHashMap<String, Items>,
}

impl ConfigStore {
    /// Create an empty store
    pub fn new() -> Self {
        ConfigStore {
            sections: LinkedHashMap::new(),
        }
    }

    /// Insert or overwrite a value. Later writes to the same key win but keep
    /// the key's original position. Empty keys are ignored.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        if key.is_empty() {
            return;
        }
        let items = self
            .sections
            .entry(section.to_string())
            .or_insert_with(Items::new);
        match items.get_mut(key) {
            Some(existing) => *existing = value.to_string(),
            None => {
                items.insert(key.to_string(), value.to_string());
            }
        }
    }

    /// Look up the value stored for `key` in `section`
    ///
    /// Fails with [`IniError::MissingSection`] when the section holds no keys
    /// at all and with [`IniError::MissingKey`] when it holds others but not
    /// this one. Both are also reported as a warning.
    pub fn get(&self, section: &str, key: &str) -> Result<&str, IniError> {
        if section.is_empty() {
            return Err(invalid_argument("section name is empty"));
        }
        if key.is_empty() {
            return Err(invalid_argument("key name is empty"));
        }

        let Some(items) = self.sections.get(section) else {
            warn!("Section [{}] not found", section);
            return Err(IniError::MissingSection(section.to_string()));
        };

        match items.get(key) {
            Some(value) => Ok(value.as_str()),
            None => {
                warn!("Key '{}' not found in section [{}]", key, section);
                Err(IniError::MissingKey {
                    section: section.to_string(),
                    key: key.to_string(),
                })
            }
        }
    }

    /// Get a value, falling back to `default` when the section or key is absent
    pub fn get_or(&self, section: &str, key: &str, default: &str) -> String {
        self.get(section, key).unwrap_or(default).to_string()
    }

    /// Get a boolean value. Accepts true/false, yes/no, on/off and 1/0.
    pub fn get_bool(&self, section: &str, key: &str) -> Result<bool, IniError> {
        let value = self.get(section, key)?;
        match value.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(invalid_value(section, key, value, "boolean")),
        }
    }

    /// Get an integer value
    pub fn get_int(&self, section: &str, key: &str) -> Result<i64, IniError> {
        let value = self.get(section, key)?;
        value
            .parse::<i64>()
            .map_err(|_| invalid_value(section, key, value, "integer"))
    }

    /// Check if a section holds at least one key
    pub fn section_exist(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Check if an item exists in the given section
    pub fn item_exist(&self, section: &str, key: &str) -> bool {
        self.sections
            .get(section)
            .map(|items| items.contains_key(key))
            .unwrap_or(false)
    }

    /// Section names in the order they first received a key
    pub fn sections(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }

    /// Keys of a section in file order
    pub fn keys(&self, section: &str) -> Result<Vec<&str>, IniError> {
        Ok(self.section(section)?.keys().map(String::as_str).collect())
    }

    /// All key/value pairs of a section in file order
    pub fn items(&self, section: &str) -> Result<Vec<(&str, &str)>, IniError> {
        Ok(self
            .section(section)?
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect())
    }

    /// Number of sections holding at least one key
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of stored entries across all sections
    pub fn len(&self) -> usize {
        self.sections.values().map(|items| items.len()).sum()
    }

    /// Whether no entries were stored
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn section(&self, section: &str) -> Result<&Items, IniError> {
        if section.is_empty() {
            return Err(invalid_argument("section name is empty"));
        }
        self.sections.get(section).ok_or_else(|| {
            warn!("Section [{}] not found", section);
            IniError::MissingSection(section.to_string())
        })
    }
}

fn invalid_argument(reason: &str) -> IniError {
    warn!("Invalid argument: {}", reason);
    IniError::InvalidArgument(reason.to_string())
}

fn invalid_value(section: &str, key: &str, value: &str, expected: &'static str) -> IniError {
    warn!(
        "Value '{}' of [{}] {} is not a valid {}",
        value, section, key, expected
    );
    IniError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        expected,
    }
}
