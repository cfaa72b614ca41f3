//! Watchlist HTTP Client
//!
//! A small, type-safe client for the GitHub REST API, used to validate
//! repository names before they are added to the watch-list.
//!
//! The client implements [`RepositoryLookup`](watchlist_core::RepositoryLookup),
//! so it can be handed directly to a submission controller.
//!
//! # Example
//!
//! ```no_run
//! use watchlist_client::GithubClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GithubClient::new("https://api.github.com");
//!
//!     let repo = client.get_repository("facebook/react").await?;
//!     println!("Canonical name: {}", repo.name);
//!     Ok(())
//! }
//! ```

pub mod error;
mod repos;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Default GitHub API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// User agent sent with every request (GitHub rejects requests without one)
pub const USER_AGENT: &str = concat!("watchlist/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the GitHub REST API
#[derive(Debug, Clone)]
pub struct GithubClient {
    /// Base URL of the API (e.g., "https://api.github.com")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Optional token sent as a bearer credential
    token: Option<String>,
}

impl GithubClient {
    /// Create a new GitHub client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API (e.g., "https://api.github.com")
    ///
    /// # Example
    /// ```
    /// use watchlist_client::GithubClient;
    ///
    /// let client = GithubClient::new("https://api.github.com");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new GitHub client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use watchlist_client::GithubClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = GithubClient::with_client("https://api.github.com", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            token: None,
        }
    }

    /// Authenticate requests with `token`
    ///
    /// Unauthenticated requests are subject to a much lower rate limit.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests carry a token
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
