pub mod config_store;
pub mod error;

pub use config_store::{ConfigStore, DEFAULT_SECTION};
pub use error::IniError;
