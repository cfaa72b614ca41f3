//! Repository endpoints

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;
use tracing::{debug, warn};
use watchlist_core::{Repository, RepositoryLookup};

use crate::GithubClient;
use crate::error::{ClientError, Result};

/// Fields of `GET /repos/{owner}/{repo}` the watch-list needs
#[derive(Debug, Deserialize)]
struct RepoResponse {
    full_name: String,
}

impl GithubClient {
    /// Fetch a repository by name
    ///
    /// # Arguments
    /// * `name` - Repository name in `owner/repo` form
    ///
    /// # Returns
    /// The repository under its canonical `full_name`, which may differ from
    /// `name` in casing or after a rename
    ///
    /// # Example
    /// ```no_run
    /// # use watchlist_client::GithubClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = GithubClient::new("https://api.github.com");
    /// let repo = client.get_repository("rust-lang/rust").await?;
    /// assert_eq!(repo.name, "rust-lang/rust");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_repository(&self, name: &str) -> Result<Repository> {
        validate_name(name)?;

        let url = format!("{}/repos/{}", self.base_url, name);
        let mut request = self
            .client
            .get(&url)
            .header(USER_AGENT, crate::USER_AGENT)
            .header(ACCEPT, "application/vnd.github+json");

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        debug!("GET {}", url);
        let response = request.send().await?;
        let repo: RepoResponse = self.handle_response(response).await?;

        Ok(Repository::new(repo.full_name))
    }
}

#[async_trait]
impl RepositoryLookup for GithubClient {
    async fn lookup(&self, name: &str) -> anyhow::Result<Repository> {
        match self.get_repository(name).await {
            Ok(repo) => Ok(repo),
            Err(e) => {
                if e.is_not_found() {
                    debug!("Repository {} does not exist", name);
                } else if e.is_server_error() {
                    warn!("GitHub failed to look up {}: {}", name, e);
                } else if e.is_client_error() {
                    warn!("GitHub refused lookup of {} (rate limit or token?): {}", name, e);
                }
                Err(e.into())
            }
        }
    }
}

/// Names must be `owner/repo`: two non-empty parts, no whitespace
fn validate_name(name: &str) -> Result<()> {
    let valid = match name.split_once('/') {
        Some((owner, repo)) => {
            !owner.is_empty()
                && !repo.is_empty()
                && !repo.contains('/')
                && !name.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        return Err(ClientError::InvalidRequest(format!(
            "'{}' is not of the form owner/repo",
            name
        )));
    }

    Ok(())
}
