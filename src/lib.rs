pub mod models;
pub mod utils;

// Re-export the store and its error type for easier access
pub use models::{ConfigStore, IniError, DEFAULT_SECTION};

// Re-export the loading entry points
pub use utils::{find_and_load, find_and_load_in, parse_ini, parse_ini_str, IniReader, ParseMode};
