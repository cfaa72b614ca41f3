//! Remove command handler

use anyhow::Result;
use colored::*;

use super::open_list;
use crate::config::Config;

/// Remove repositories by name
///
/// Names that are not listed are reported but do not fail the command.
pub fn handle_remove(names: Vec<String>, config: &Config) -> Result<()> {
    let mut list = open_list(config);

    for name in &names {
        let name = name.trim();
        if list.remove(name) {
            println!("{} Removed {}", "✓".green(), name.bold());
        } else {
            println!("{} {} is not in the watch-list", "-".dimmed(), name.bold());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchlist_core::store::FileStore;
    use watchlist_core::{ListManager, Repository};

    #[test]
    fn test_remove_persists_and_ignores_unknown_names() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().join("store.json"));
        {
            let mut list = ListManager::load(FileStore::new(&config.store_path));
            list.add(Repository::new("a/one")).unwrap();
            list.add(Repository::new("b/two")).unwrap();
        }

        handle_remove(vec!["a/one".to_string(), "c/three".to_string()], &config).unwrap();

        let list = ListManager::load(FileStore::new(&config.store_path));
        assert_eq!(list.entries(), &[Repository::new("b/two")]);
    }
}
