pub mod file;
pub mod ini_reader;

// Re-export common utilities
pub use file::{find_and_load, find_and_load_in, find_ini_file};
pub use ini_reader::{parse_ini, parse_ini_str, IniReader, ParseMode};
