//! Remote lookup contract
//!
//! The lookup validates a repository name against a remote service and
//! returns its canonical form, which may differ from what the user typed
//! (different casing, a renamed or transferred repository).

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::repository::Repository;

/// Resolves a repository name to its canonical entry
#[async_trait]
pub trait RepositoryLookup: Send + Sync {
    /// Look up a repository by name
    ///
    /// # Arguments
    /// * `name` - Name as entered by the user (e.g. "facebook/react")
    ///
    /// # Returns
    /// The canonical entry, or an error if the repository does not exist or
    /// the service could not be reached
    async fn lookup(&self, name: &str) -> Result<Repository>;
}
