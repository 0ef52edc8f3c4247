//! Histogram command implementation
//!
//! Assigns `field0..fieldN` and shows how often each format was picked next
//! to its uniform share, which makes the SimpleText penalty visible.

use anyhow::{bail, Result};
use colored::Colorize;
use fieldcodec_core::{names, AssignmentReport, RandomCodecProvider};
use std::process::ExitCode;

use super::setup::{build_provider, ProviderArgs};

/// Assigns `count` synthetic field names and returns the report.
pub fn sample(provider: &RandomCodecProvider, count: usize) -> Result<AssignmentReport> {
    for i in 0..count {
        provider.field_codec(&format!("field{}", i))?;
    }
    Ok(provider.report())
}

/// Run the histogram command.
pub fn run(args: &ProviderArgs, count: usize, json_output: bool) -> Result<ExitCode> {
    if count == 0 {
        bail!("--fields must be at least 1");
    }
    let provider = build_provider(args)?;
    let report = sample(&provider, count)?;
    let counts = report.format_counts();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(ExitCode::SUCCESS);
    }

    let uniform = 100.0 / report.pool.len() as f64;
    println!("{} {}", "Seed:".cyan().bold(), report.seed);
    println!(
        "{} {} fields, uniform share {:.1}%",
        "Sample:".cyan().bold(),
        count,
        uniform
    );
    for name in &report.pool {
        let hits = counts.get(name).copied().unwrap_or(0);
        let share = 100.0 * hits as f64 / count as f64;
        let line = format!("  {:<12} {:>7} {:>6.1}%", name, hits, share);
        if name == names::SIMPLE_TEXT {
            println!("{}", line.yellow());
        } else {
            println!("{}", line);
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_counts_every_field() {
        let args = ProviderArgs {
            seed: 8,
            ..ProviderArgs::default()
        };
        let report = sample(&build_provider(&args).unwrap(), 200).unwrap();
        assert_eq!(report.mappings.len(), 200);
        assert_eq!(report.format_counts().values().sum::<usize>(), 200);
    }

    #[test]
    fn test_zero_fields_rejected() {
        let args = ProviderArgs::default();
        assert!(run(&args, 0, true).is_err());
    }
}
