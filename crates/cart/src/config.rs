//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MERCADITO_DATA_DIR` - Directory for the file-backed store (default: `./data`)
//! - `MERCADITO_CATALOG` - Path to the catalog JSON file (default: `<data dir>/catalog.json`)

use std::path::{Path, PathBuf};

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "./data";
const CATALOG_FILE: &str = "catalog.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart application configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Directory the file-backed store keeps its data in
    pub data_dir: PathBuf,
    /// Path to the product catalog JSON file
    pub catalog_path: PathBuf,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(require_non_empty(
            "MERCADITO_DATA_DIR",
            get_env_or_default("MERCADITO_DATA_DIR", DEFAULT_DATA_DIR),
        )?);

        let catalog_path = match get_optional_env("MERCADITO_CATALOG") {
            Some(value) => PathBuf::from(require_non_empty("MERCADITO_CATALOG", value)?),
            None => default_catalog_path(&data_dir),
        };

        Ok(Self {
            data_dir,
            catalog_path,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Require a non-empty value for a variable that is set.
fn require_non_empty(key: &str, value: String) -> Result<String, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be empty".to_string(),
        ));
    }
    Ok(value)
}

/// Catalog file next to the store data when no explicit path is given.
fn default_catalog_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CATALOG_FILE)
}
