//! CLI command implementations

pub mod assign;
pub mod histogram;
pub mod pool;

mod setup;

pub use setup::{build_provider, load_config, ProviderArgs};
