// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Folio - keyword-matching chat assistant for a personal portfolio site.
//!
//! This is the binary entry point for the Folio service.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod ask;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio_core::Mode;

/// Folio - keyword-matching chat assistant for a personal portfolio site.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP gateway.
    Serve,
    /// Ask the assistant a single question without starting a server.
    Ask {
        /// Persona to answer as (developer, designer, mentor, career).
        #[arg(long)]
        mode: Option<Mode>,
        /// JSON transcript to continue and update.
        #[arg(long, value_name = "FILE")]
        transcript: Option<PathBuf>,
        /// Flag the request as coming from agent mode.
        #[arg(long)]
        agent: bool,
        /// Name to send with the request.
        #[arg(long)]
        name: Option<String>,
        /// The message to send.
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let loaded = match &cli.config {
        Some(path) => folio_config::load_and_validate_path(path),
        None => folio_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            folio_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await,
        Some(Commands::Ask {
            mode,
            transcript,
            agent,
            name,
            message,
        }) => {
            let args = ask::AskArgs {
                mode,
                transcript,
                agent,
                name,
                message: message.join(" "),
            };
            ask::run_ask(&config, args).await
        }
        Some(Commands::Config) => match toml::to_string_pretty(&config) {
            Ok(rendered) => {
                print!("{rendered}");
                Ok(())
            }
            Err(e) => Err(folio_core::FolioError::Config(format!(
                "failed to render configuration: {e}"
            ))),
        },
        None => {
            println!("folio: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("folio: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        // Verify jemalloc is the global allocator by advancing the epoch.
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn cli_parses_ask() {
        let cli = Cli::try_parse_from([
            "folio",
            "ask",
            "--mode",
            "developer",
            "--agent",
            "what",
            "is",
            "your",
            "tech",
            "stack",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Ask {
                mode,
                agent,
                message,
                ..
            }) => {
                assert_eq!(mode, Some(Mode::Developer));
                assert!(agent);
                assert_eq!(message.join(" "), "what is your tech stack");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_rejects_unknown_mode() {
        let result = Cli::try_parse_from(["folio", "ask", "--mode", "pirate", "hi"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_accepts_global_config_flag() {
        let cli = Cli::try_parse_from(["folio", "serve", "--config", "/tmp/folio.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/folio.toml")));
        assert!(matches!(cli.command, Some(Commands::Serve)));
    }

    #[test]
    fn default_config_renders_as_toml() {
        let config = folio_config::load_and_validate_str("").unwrap();
        let rendered = toml::to_string_pretty(&config).unwrap();
        assert!(rendered.contains("[server]"));
        assert!(rendered.contains("base_path = \"/api/v1\""));
    }
}
