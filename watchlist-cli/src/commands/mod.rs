//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod add;
mod clear;
mod list;
mod remove;

use anyhow::{Context, Result};
use clap::Subcommand;
use watchlist_client::GithubClient;
use watchlist_core::ListManager;
use watchlist_core::store::FileStore;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Look up repositories and add them to the watch-list
    Add {
        /// Repository names in owner/repo form
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Show the watch-list
    List,
    /// Remove repositories from the watch-list
    Remove {
        /// Repository names as shown by `list`
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Remove every repository and wipe the store
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Add { names } => add::handle_add(names, config).await,
        Commands::List => list::handle_list(config),
        Commands::Remove { names } => remove::handle_remove(names, config),
        Commands::Clear { yes } => clear::handle_clear(yes, config),
    }
}

/// Load the watch-list mirrored in the configured store file
fn open_list(config: &Config) -> ListManager {
    ListManager::load(FileStore::new(&config.store_path))
}

/// Build a GitHub client honoring the configured URL, token and timeout
fn build_client(config: &Config) -> Result<GithubClient> {
    let http_client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let client = GithubClient::with_client(&config.api_url, http_client);
    Ok(match &config.token {
        Some(token) => client.with_token(token),
        None => client,
    })
}
