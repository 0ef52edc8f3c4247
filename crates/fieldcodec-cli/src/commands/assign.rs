//! Assign command implementation
//!
//! Prints the postings format a seeded provider assigns to each named field.

use anyhow::Result;
use colored::Colorize;
use fieldcodec_core::{AssignmentReport, RandomCodecProvider};
use std::process::ExitCode;

use super::setup::{build_provider, ProviderArgs};

/// Assigns formats to `fields` in the given order and returns the report.
pub fn assign_fields(provider: &RandomCodecProvider, fields: &[String]) -> Result<AssignmentReport> {
    for field in fields {
        provider.field_codec(field)?;
    }
    Ok(provider.report())
}

/// Run the assign command.
///
/// # Arguments
/// * `args` - Provider construction flags
/// * `fields` - Field names to assign, in query order
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(args: &ProviderArgs, fields: &[String], json_output: bool) -> Result<ExitCode> {
    let provider = build_provider(args)?;
    let report = assign_fields(&provider, fields)?;

    if json_output {
        println!("{}", report.to_json_pretty()?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Seed:".cyan().bold(), report.seed);
    println!("{} {}", "Pool:".cyan().bold(), report.pool.join(", "));
    println!();
    for field in fields {
        if let Some(format) = report.mappings.get(field) {
            println!("  {} {} {}", field.bold(), "->".dimmed(), format.green());
        }
    }
    Ok(ExitCode::SUCCESS)
}
