//! Add command handler
//!
//! Runs one submission per name through the submission controller, so every
//! name is checked, looked up and committed exactly as an interactive form
//! would.

use std::sync::Arc;

use anyhow::Result;
use colored::*;
use watchlist_core::SubmissionController;

use super::{build_client, open_list};
use crate::config::Config;

/// Add repositories to the watch-list
pub async fn handle_add(names: Vec<String>, config: &Config) -> Result<()> {
    let client = Arc::new(build_client(config)?);
    let controller = SubmissionController::new(open_list(config).into_shared(), client);

    let mut failed = 0;
    for name in &names {
        controller.set_input(name.as_str());

        match controller.submit().await {
            Ok(repo) => println!("{} Added {}", "✓".green(), repo.name.bold()),
            Err(kind) => {
                failed += 1;
                eprintln!(
                    "{} {}: {}",
                    "✗".red(),
                    controller.input().bold(),
                    kind.to_string().red()
                );
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} repository(ies) could not be added", failed, names.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use watchlist_core::ListManager;
    use watchlist_core::store::FileStore;

    #[tokio::test]
    async fn test_add_rejects_blank_name_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new(dir.path().join("store.json"));
        // nothing listens here; a lookup would fail rather than hang
        config.api_url = "http://127.0.0.1:9".to_string();
        config.timeout = Duration::from_secs(1);

        let result = handle_add(vec!["  ".to_string()], &config).await;

        assert!(result.is_err());
        let list = ListManager::load(FileStore::new(&config.store_path));
        assert!(list.is_empty());
    }
}
