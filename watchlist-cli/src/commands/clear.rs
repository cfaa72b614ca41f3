//! Clear command handler

use anyhow::{Context, Result};
use colored::*;
use dialoguer::Confirm;

use super::open_list;
use crate::config::Config;

/// Empty the watch-list and wipe the store file
///
/// Asks for confirmation unless `yes` is set, since this also erases any
/// other value kept in the same store.
pub fn handle_clear(yes: bool, config: &Config) -> Result<()> {
    let mut list = open_list(config);

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove all {} repository(ies) and wipe {}?",
                list.len(),
                config.store_path.display()
            ))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;

        if !confirmed {
            println!("{}", "Aborted.".yellow());
            return Ok(());
        }
    }

    list.clear();
    println!("{}", "Watch-list cleared.".green());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchlist_core::store::{FileStore, Store};
    use watchlist_core::{ListManager, Repository};

    #[test]
    fn test_clear_without_prompt_wipes_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().join("store.json"));
        let store = FileStore::new(&config.store_path);
        store.set("theme", "dark").unwrap();
        ListManager::load(store.clone()).add(Repository::new("a/one")).unwrap();

        handle_clear(true, &config).unwrap();

        assert!(!config.store_path.exists());
        assert!(ListManager::load(store).is_empty());
    }
}
