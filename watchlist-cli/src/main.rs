//! Watchlist CLI
//!
//! Command-line interface for curating a personal watch-list of GitHub
//! repositories.

mod commands;
mod config;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::{Config, default_store_path};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use watchlist_client::DEFAULT_API_URL;

#[derive(Parser)]
#[command(name = "watchlist")]
#[command(about = "Keep a watch-list of GitHub repositories", long_about = None)]
struct Cli {
    /// File the watch-list is stored in
    #[arg(long, global = true, env = "WATCHLIST_STORE")]
    store: Option<PathBuf>,

    /// GitHub API URL
    #[arg(long, global = true, env = "WATCHLIST_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// GitHub token for authenticated lookups
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Lookup timeout in seconds
    #[arg(long, global = true, env = "WATCHLIST_TIMEOUT", default_value_t = 10)]
    timeout: u64,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Assemble the configuration from flags and their env fallbacks
    ///
    /// An empty token (e.g. `GITHUB_TOKEN=`) counts as no token.
    fn config(&self) -> Config {
        Config {
            store_path: self.store.clone().unwrap_or_else(default_store_path),
            api_url: self.api_url.clone(),
            token: self.token.clone().filter(|t| !t.is_empty()),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "watchlist_cli=debug,watchlist_core=debug,watchlist_client=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.config();
    config.validate()?;

    tracing::debug!("Using store {}", config.store_path.display());

    handle_command(cli.command, &config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ENV_VARS: [&str; 4] = [
        "WATCHLIST_STORE",
        "WATCHLIST_API_URL",
        "GITHUB_TOKEN",
        "WATCHLIST_TIMEOUT",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            // SAFETY: env-touching tests run serially
            unsafe { std::env::remove_var(var) };
        }
    }

    #[test]
    #[serial]
    fn test_defaults_apply() {
        clear_env();
        let cli = Cli::try_parse_from(["watchlist", "list"]).unwrap();
        let config = cli.config();

        assert_eq!(config.store_path, default_store_path());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.token, None);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    #[serial]
    fn test_flags_override_defaults() {
        clear_env();
        let cli = Cli::try_parse_from([
            "watchlist",
            "add",
            "facebook/react",
            "--store",
            "/tmp/wl.json",
            "--api-url",
            "http://localhost:8080",
            "--token",
            "secret",
            "--timeout",
            "3",
            "-v",
        ])
        .unwrap();
        let config = cli.config();

        assert_eq!(config.store_path, PathBuf::from("/tmp/wl.json"));
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Add { ref names } if names == &["facebook/react"]
        ));
    }

    #[test]
    #[serial]
    fn test_env_fallbacks() {
        clear_env();
        // SAFETY: env-touching tests run serially
        unsafe {
            std::env::set_var("WATCHLIST_STORE", "/tmp/env-store.json");
            std::env::set_var("WATCHLIST_API_URL", "http://127.0.0.1:9000");
            std::env::set_var("GITHUB_TOKEN", "from-env");
            std::env::set_var("WATCHLIST_TIMEOUT", "7");
        }

        let config = Cli::try_parse_from(["watchlist", "list"]).unwrap().config();
        let overridden = Cli::try_parse_from(["watchlist", "list", "--timeout", "2"])
            .unwrap()
            .config();
        clear_env();

        assert_eq!(config.store_path, PathBuf::from("/tmp/env-store.json"));
        assert_eq!(config.api_url, "http://127.0.0.1:9000");
        assert_eq!(config.token.as_deref(), Some("from-env"));
        assert_eq!(config.timeout, Duration::from_secs(7));
        assert_eq!(overridden.timeout, Duration::from_secs(2));
    }

    #[test]
    #[serial]
    fn test_empty_token_is_dropped() {
        clear_env();
        // SAFETY: env-touching tests run serially
        unsafe { std::env::set_var("GITHUB_TOKEN", "") };

        let from_env = Cli::try_parse_from(["watchlist", "list"]).unwrap().config();
        clear_env();
        let from_flag = Cli::try_parse_from(["watchlist", "list", "--token", ""])
            .unwrap()
            .config();

        assert_eq!(from_env.token, None);
        assert_eq!(from_flag.token, None);
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_is_rejected() {
        clear_env();
        assert!(Cli::try_parse_from(["watchlist", "list", "--timeout", "soon"]).is_err());
    }
}
