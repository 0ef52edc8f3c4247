//! Pool command implementation
//!
//! Shows the seed, selectable pool order and registry contents of a provider.

use anyhow::Result;
use colored::Colorize;
use fieldcodec_core::FormatRegistry;
use serde::Serialize;
use std::process::ExitCode;

use super::setup::{build_provider, ProviderArgs};

/// JSON output for the pool command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolOutput {
    /// Seed drawn at construction
    pub seed: i32,
    /// Selectable formats in selection order
    pub pool: Vec<String>,
    /// Every format known to the base registry
    pub registered: Vec<String>,
}

/// Describes the provider built from `args`.
pub fn describe(args: &ProviderArgs) -> Result<PoolOutput> {
    let provider = build_provider(args)?;
    Ok(PoolOutput {
        seed: provider.seed(),
        pool: provider.pool_names(),
        registered: provider.registry().names(),
    })
}

/// Run the pool command.
pub fn run(args: &ProviderArgs, json_output: bool) -> Result<ExitCode> {
    let output = describe(args)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Seed:".cyan().bold(), output.seed);
    println!("{}", "Pool:".cyan().bold());
    for (i, name) in output.pool.iter().enumerate() {
        println!("  {} {}", format!("[{}]", i).dimmed(), name.green());
    }
    let registry_only: Vec<&str> = output
        .registered
        .iter()
        .filter(|name| !output.pool.contains(name))
        .map(String::as_str)
        .collect();
    if !registry_only.is_empty() {
        println!(
            "{} {}",
            "Registry only:".yellow().bold(),
            registry_only.join(", ")
        );
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_describe_lightweight() {
        let args = ProviderArgs {
            seed: 3,
            exclude_expensive: true,
            ..ProviderArgs::default()
        };
        let output = describe(&args).unwrap();
        let mut pool = output.pool.clone();
        pool.sort();
        assert_eq!(pool, vec!["Pulsing", "Standard"]);
        assert_eq!(output.registered, vec!["PreFlex", "Pulsing", "Standard"]);
    }
}
