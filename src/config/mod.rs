//! # Configuration Management
//!
//! Settings are read once at startup from the environment (after loading an
//! optional `.env` file) and passed down explicitly; there is no global
//! settings cache.

pub mod settings;

pub use settings::Settings;

/// Load `.env` (if present) and then the settings from the environment
pub fn load() -> crate::Result<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(crate::Error::config_with_source("Failed to read .env file", Box::new(e)));
        }
    }
    Settings::from_env()
}
