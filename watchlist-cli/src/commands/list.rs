//! List command handler

use anyhow::Result;
use colored::*;

use super::open_list;
use crate::config::Config;

/// Print the watch-list in insertion order
pub fn handle_list(config: &Config) -> Result<()> {
    let list = open_list(config);

    if list.is_empty() {
        println!("{}", "No repositories in the watch-list.".yellow());
        return Ok(());
    }

    println!("{}", format!("Watching {} repository(ies):", list.len()).bold());
    println!();
    for (index, repo) in list.entries().iter().enumerate() {
        println!("  {:>3}. {}", index + 1, repo.name.cyan());
    }

    Ok(())
}
