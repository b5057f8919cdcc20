//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands;
use regimed::config::Config;
use regimed::output::OutputMode;

/// regimed - Screen documents against compliance rules
#[derive(Parser, Debug)]
#[command(
    name = "regimed",
    version,
    about = "Screen documents against compliance rules",
    long_about = "Check PDF and text documents against a list of compliance rules.\n\n\
                  Rules are plain phrases, one per line. A rule is found when the\n\
                  document contains it, or when the two are similar enough."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./regimed.toml, then ~/.config/regimed/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Rules file, overriding config and REGIMED_RULES_FILE
    #[arg(short, long, global = true)]
    pub rules: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a .pdf or .txt document against the rules
    Check {
        /// Document to check
        file: PathBuf,

        /// Similarity threshold (0.0 - 1.0)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Exit with status 0 even when rules are missing
        #[arg(long)]
        no_fail: bool,
    },

    /// List the active rules
    Rules,

    /// Show the stored regulation snapshot
    Regulations,

    /// Serve the HTTP API
    #[cfg(feature = "server")]
    Serve {
        /// Address to bind (e.g. 127.0.0.1:8000)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Download regulation pages and refresh the snapshot
    #[cfg(feature = "scrape")]
    Scrape {
        /// Snapshot file to write
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(rules) = cli.rules {
        config.rules_file = rules;
    }

    match cli.command {
        Some(Command::Check {
            file,
            threshold,
            no_fail,
        }) => {
            if let Some(threshold) = threshold {
                config.threshold = threshold;
            }
            commands::check(&file, &config, no_fail, output_mode)
        },
        Some(Command::Rules) => commands::rules(&config, output_mode).map(|()| ExitCode::SUCCESS),
        Some(Command::Regulations) => {
            commands::regulations(&config, output_mode).map(|()| ExitCode::SUCCESS)
        },
        #[cfg(feature = "server")]
        Some(Command::Serve { bind }) => {
            if let Some(bind) = bind {
                config.bind = bind;
            }
            commands::serve(&config).map(|()| ExitCode::SUCCESS)
        },
        #[cfg(feature = "scrape")]
        Some(Command::Scrape { output }) => {
            if let Some(output) = output {
                config.regulations_file = output;
            }
            commands::scrape(&config, output_mode).map(|()| ExitCode::SUCCESS)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("regimed v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("regimed v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'regimed --help' for usage");
                println!("Run 'regimed check <file>' to check a document");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
