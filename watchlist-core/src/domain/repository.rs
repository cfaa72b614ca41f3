//! Repository domain model
//!
//! Represents a single entry of the watch-list.

use serde::{Deserialize, Serialize};

/// A repository tracked by the watch-list
///
/// Entries are identified by `name` alone. They are never edited in place;
/// the list replaces them as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Repository {
    /// Canonical identifier as returned by the lookup (e.g. "owner/repo")
    pub name: String,
}

impl Repository {
    /// Create a new repository entry
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_record_shape() {
        let json = serde_json::to_string(&Repository::new("facebook/react")).unwrap();
        assert_eq!(json, r#"{"name":"facebook/react"}"#);
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let repo: Repository =
            serde_json::from_str(r#"{"name":"rust-lang/rust","stars":1}"#).unwrap();
        assert_eq!(repo, Repository::new("rust-lang/rust"));
    }
}
