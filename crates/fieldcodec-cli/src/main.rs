//! fieldcodec CLI - Inspect seeded per-field postings format assignment
//!
//! Reproduces the field → format mapping a test harness would see for a
//! given seed, without running the harness.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::Level;

use fieldcodec_cli::commands::{self, ProviderArgs};

/// fieldcodec - Seeded per-field postings format assignment
#[derive(Parser)]
#[command(name = "fieldcodec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the format assigned to each field
    Assign {
        #[command(flatten)]
        provider: ProviderArgs,

        /// Field names, queried in the order given
        #[arg(required = true)]
        fields: Vec<String>,

        /// Output the full assignment report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the seed, pool order and registered formats
    Pool {
        #[command(flatten)]
        provider: ProviderArgs,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Count format selections over synthetic field names
    Histogram {
        #[command(flatten)]
        provider: ProviderArgs,

        /// Number of fields to assign
        #[arg(long, default_value_t = 10_000)]
        fields: usize,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Assign {
            provider,
            fields,
            json,
        } => commands::assign::run(&provider, &fields, json),
        Commands::Pool { provider, json } => commands::pool::run(&provider, json),
        Commands::Histogram {
            provider,
            fields,
            json,
        } => commands::histogram::run(&provider, fields, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_assign() {
        let cli = Cli::try_parse_from([
            "fieldcodec",
            "assign",
            "--seed",
            "42",
            "--exclude-expensive",
            "title",
            "body",
        ])
        .unwrap();
        match cli.command {
            Commands::Assign {
                provider,
                fields,
                json,
            } => {
                assert_eq!(provider.seed, 42);
                assert!(provider.exclude_expensive);
                assert_eq!(fields, vec!["title", "body"]);
                assert!(!json);
            }
            _ => panic!("expected assign command"),
        }
    }

    #[test]
    fn test_cli_rejects_config_with_profile() {
        let result = Cli::try_parse_from([
            "fieldcodec",
            "pool",
            "--seed",
            "1",
            "--config",
            "a.json",
            "--profile",
            "lightweight",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_histogram_defaults() {
        let cli = Cli::try_parse_from(["fieldcodec", "-vv", "histogram", "--seed", "7"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Histogram { fields, .. } => assert_eq!(fields, 10_000),
            _ => panic!("expected histogram command"),
        }
    }
}
