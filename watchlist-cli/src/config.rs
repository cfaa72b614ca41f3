//! Configuration module
//!
//! Handles CLI configuration: where the watch-list is stored and how the
//! GitHub API is reached.

use std::path::PathBuf;
use std::time::Duration;

use watchlist_client::DEFAULT_API_URL;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// File the watch-list is mirrored to
    pub store_path: PathBuf,

    /// Base URL of the GitHub API
    pub api_url: String,

    /// Token used to authenticate lookups
    pub token: Option<String>,

    /// Timeout for a single lookup request
    pub timeout: Duration,
}

impl Config {
    /// Creates a configuration with defaults for everything but the store
    pub fn new(store_path: PathBuf) -> Self {
        Self {
            store_path,
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(10),
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.store_path.as_os_str().is_empty() {
            anyhow::bail!("store path cannot be empty");
        }

        if self.store_path.is_dir() {
            anyhow::bail!(
                "store path {} is a directory, expected a file",
                self.store_path.display()
            );
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api url must start with http:// or https://");
        }

        if self.timeout.is_zero() {
            anyhow::bail!("timeout must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(default_store_path())
    }
}

/// Default location of the store file, `<data dir>/watchlist/store.json`
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("watchlist")
        .join("store.json")
}
