//! Repository list manager
//!
//! Owns the authoritative in-memory watch-list and mirrors every committed
//! mutation to a persistent store (write-through). The store copy is only a
//! mirror: whenever the two diverge, the in-memory list wins until the next
//! write.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use crate::domain::repository::Repository;
use crate::error::ListError;
use crate::store::Store;

/// Store key holding the serialized list
pub const REPOSITORIES_KEY: &str = "repositories";

/// List manager shared between the submission controller and other callers
///
/// Every mutation happens while holding this one lock, which keeps the
/// append and its mirror write atomic for readers.
pub type SharedList = Arc<Mutex<ListManager>>;

/// Manager for the ordered, name-unique repository list
pub struct ListManager {
    entries: Vec<Repository>,
    store: Box<dyn Store>,
}

impl ListManager {
    /// Load the list mirrored in `store`
    ///
    /// A missing key yields an empty list. An unreadable or unparseable
    /// mirror is logged and also yields an empty list. Entries with an empty
    /// name or a name seen earlier in the mirror are dropped.
    pub fn load(store: impl Store + 'static) -> Self {
        let entries = match store.get(REPOSITORIES_KEY) {
            Ok(Some(raw)) => decode(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read stored repositories, starting empty: {}", e);
                Vec::new()
            }
        };

        debug!("Loaded {} repository(ies) from store", entries.len());

        Self {
            entries,
            store: Box::new(store),
        }
    }

    /// Wrap this manager for shared use
    pub fn into_shared(self) -> SharedList {
        Arc::new(Mutex::new(self))
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[Repository] {
        &self.entries
    }

    /// Whether an entry with exactly this name exists (case-sensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry and persist the list
    ///
    /// # Errors
    /// - `EmptyName` if the entry name is empty
    /// - `Duplicate` if an entry with the same name is already present
    pub fn add(&mut self, entry: Repository) -> Result<(), ListError> {
        if entry.name.is_empty() {
            return Err(ListError::EmptyName);
        }

        if self.contains(&entry.name) {
            return Err(ListError::Duplicate(entry.name));
        }

        info!("Added repository: {}", entry.name);
        self.entries.push(entry);
        self.persist();

        Ok(())
    }

    /// Remove the entry with this name and persist the list
    ///
    /// Removing a name that is not present changes nothing, including the
    /// stored mirror.
    ///
    /// # Returns
    /// `true` if an entry was removed
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(index) = self.entries.iter().position(|r| r.name == name) else {
            debug!("Repository not in list, nothing to remove: {}", name);
            return false;
        };

        self.entries.remove(index);
        self.persist();

        info!("Removed repository: {}", name);
        true
    }

    /// Empty the list and wipe the whole store
    ///
    /// This erases every key in the store, not only the list.
    pub fn clear(&mut self) {
        self.entries.clear();

        if let Err(e) = self.store.clear() {
            warn!("Failed to clear store: {}", e);
        }

        info!("Cleared repository list");
    }

    /// Write the current list to the store
    ///
    /// Durability is best-effort: a failed write is logged and the
    /// in-memory mutation stands.
    fn persist(&self) {
        let encoded = match serde_json::to_string(&self.entries) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Failed to encode repository list: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.set(REPOSITORIES_KEY, &encoded) {
            warn!("Failed to persist repository list: {}", e);
        }
    }
}

fn decode(raw: &str) -> Vec<Repository> {
    let stored: Vec<Repository> = match serde_json::from_str(raw) {
        Ok(stored) => stored,
        Err(e) => {
            warn!("Stored repository list is corrupt, starting empty: {}", e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    stored
        .into_iter()
        .filter(|r| !r.name.is_empty() && seen.insert(r.name.clone()))
        .collect()
}
