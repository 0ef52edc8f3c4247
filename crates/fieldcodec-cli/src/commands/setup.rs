//! Shared provider construction for all commands.

use anyhow::{bail, Context, Result};
use clap::Args;
use fieldcodec_core::{create_rng, derive_run_seed, ProviderConfig, RandomCodecProvider};
use std::fs;
use std::path::Path;

/// Flags that determine which provider a command inspects.
#[derive(Debug, Clone, Default, Args)]
pub struct ProviderArgs {
    /// Harness seed used to initialize the random source
    #[arg(long)]
    pub seed: u64,

    /// Derive the run seed from `--seed` and this key (e.g. a test name)
    #[arg(long)]
    pub run_key: Option<String>,

    /// Path to a provider config file (JSON)
    #[arg(long, conflicts_with = "profile")]
    pub config: Option<String>,

    /// Built-in config profile (default, lightweight)
    #[arg(long, value_parser = ["default", "lightweight"])]
    pub profile: Option<String>,

    /// Leave the memory-expensive formats out of the pool
    #[arg(long)]
    pub exclude_expensive: bool,
}

impl ProviderArgs {
    /// The seed actually fed to the random source.
    pub fn effective_seed(&self) -> u64 {
        match &self.run_key {
            Some(key) => derive_run_seed(self.seed, key),
            None => self.seed,
        }
    }
}

/// Resolves the provider config from a file or profile, then applies
/// `--exclude-expensive` on top.
pub fn load_config(args: &ProviderArgs) -> Result<ProviderConfig> {
    let mut config = match (&args.config, &args.profile) {
        (Some(path), _) => {
            let path = Path::new(path);
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            ProviderConfig::from_json_str(&json)
                .with_context(|| format!("Invalid config file: {}", path.display()))?
        }
        (None, Some(profile)) => match ProviderConfig::by_name(profile) {
            Some(config) => config,
            None => bail!("Unknown profile: {}", profile),
        },
        (None, None) => ProviderConfig::default(),
    };
    if args.exclude_expensive {
        config.exclude_expensive = true;
    }
    Ok(config)
}

/// Builds the provider described by `args`.
pub fn build_provider(args: &ProviderArgs) -> Result<RandomCodecProvider> {
    let config = load_config(args)?;
    let seed = args.effective_seed();
    tracing::debug!(harness_seed = args.seed, seed, ?config, "building provider");

    let mut rng = create_rng(seed);
    RandomCodecProvider::with_config(&mut rng, config).context("Failed to build codec provider")
}
