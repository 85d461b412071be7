//! Command-line interface.
//!
//! Parses arguments, resolves settings and dispatches to the command modules.

mod serve;
mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings_with_options, LoadOptions, Settings};

#[derive(Parser)]
#[command(name = "tribunals")]
#[command(about = "Web frontend for the tribunals search API")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Search API base URL (overrides config and TRIBUNALS_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

/// Default log filter when `RUST_LOG` is unset.
///
/// Verbose mode also enables request logs from `TraceLayer`, which emits at
/// debug level.
pub fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "tribunals=info,tower_http=debug"
    } else {
        "tribunals=warn"
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind to: PORT, HOST, or HOST:PORT (default: 127.0.0.1:3000)
        bind: Option<String>,
    },

    /// Query the search API health check
    Status {
        /// Print only the raw JSON body
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Apply command-line overrides on top of loaded settings.
    fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(ref url) = self.api_url {
            settings.api_url = url.clone();
        }
        if let Commands::Serve {
            bind: Some(ref bind),
        } = self.command
        {
            settings.bind = bind.clone();
        }
    }
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config.clone(),
    };
    let mut settings = load_settings_with_options(options).await?;
    cli.apply_to_settings(&mut settings);

    match cli.command {
        Commands::Serve { .. } => serve::cmd_serve(&settings).await,
        Commands::Status { json } => status::cmd_status(&settings, json).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::parse_from([
            "tribunals",
            "--api-url",
            "http://search:9000",
            "serve",
            "0.0.0.0:8080",
        ]);
        let mut settings = Settings::default();
        cli.apply_to_settings(&mut settings);

        assert_eq!(settings.api_url, "http://search:9000");
        assert_eq!(settings.bind, "0.0.0.0:8080");
    }

    #[test]
    fn test_default_log_filter() {
        assert_eq!(default_log_filter(false), "tribunals=warn");
        assert_eq!(
            default_log_filter(true),
            "tribunals=info,tower_http=debug"
        );
    }

    #[test]
    fn test_status_keeps_bind() {
        let cli = Cli::parse_from(["tribunals", "status", "--json", "-v"]);
        let mut settings = Settings::default();
        cli.apply_to_settings(&mut settings);

        assert!(cli.verbose);
        assert_eq!(settings, Settings::default());
        assert!(matches!(cli.command, Commands::Status { json: true }));
    }
}
