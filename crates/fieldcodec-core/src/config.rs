//! Provider configuration.
//!
//! This module provides:
//! - [`ProviderConfig`], the knobs that shape pool construction and selection
//! - Pre-defined profiles: default and lightweight
//! - JSON loading and validation

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, CodecResult};
use crate::format::names;
use crate::hash::HashScheme;

/// Configuration for a [`RandomCodecProvider`](crate::RandomCodecProvider).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderConfig {
    /// Skip the memory-expensive formats (SimpleText and Memory).
    pub exclude_expensive: bool,
    /// A penalized first draw is kept only when `seed % bias_modulus == 0`.
    pub bias_modulus: i32,
    /// Name of the format that is registry-visible but never selectable.
    pub legacy_format: String,
    /// Hash applied to field names.
    pub hash_scheme: HashScheme,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            exclude_expensive: false,
            bias_modulus: Self::DEFAULT_BIAS_MODULUS,
            legacy_format: names::PRE_FLEX.to_string(),
            hash_scheme: HashScheme::default(),
        }
    }
}

impl ProviderConfig {
    /// Default bias modulus: a penalized draw survives for one seed in five.
    pub const DEFAULT_BIAS_MODULUS: i32 = 5;

    /// Profile for runs that cannot afford SimpleText or Memory.
    pub fn lightweight() -> Self {
        Self {
            exclude_expensive: true,
            ..Self::default()
        }
    }

    /// Looks up a profile by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "lightweight" => Some(Self::lightweight()),
            _ => None,
        }
    }

    /// Parses and validates a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> CodecResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> CodecResult<()> {
        if self.bias_modulus <= 0 {
            return Err(CodecError::invalid_config(
                "bias_modulus",
                format!("must be positive, got {}", self.bias_modulus),
            ));
        }
        if self.legacy_format.is_empty() {
            return Err(CodecError::invalid_config(
                "legacy_format",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ProviderConfig::default();
        assert!(!config.exclude_expensive);
        assert_eq!(config.bias_modulus, 5);
        assert_eq!(config.legacy_format, "PreFlex");
        assert_eq!(config.hash_scheme, HashScheme::Blake3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_profiles_by_name() {
        assert_eq!(
            ProviderConfig::by_name("lightweight"),
            Some(ProviderConfig::lightweight())
        );
        assert_eq!(
            ProviderConfig::by_name("default"),
            Some(ProviderConfig::default())
        );
        assert_eq!(ProviderConfig::by_name("huge"), None);
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config =
            ProviderConfig::from_json_str(r#"{"hash_scheme": "utf16-polynomial"}"#).unwrap();
        assert_eq!(
            config,
            ProviderConfig {
                hash_scheme: HashScheme::Utf16Polynomial,
                ..ProviderConfig::default()
            }
        );
    }

    #[test]
    fn test_rejects_non_positive_modulus() {
        let err = ProviderConfig::from_json_str(r#"{"bias_modulus": 0}"#).unwrap_err();
        assert_eq!(err.code(), "CODEC_004");
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = ProviderConfig::from_json_str(r#"{"bias": 3}"#).unwrap_err();
        assert!(matches!(err, CodecError::Json(_)));
    }

    #[test]
    fn test_rejects_empty_legacy_name() {
        let config = ProviderConfig {
            legacy_format: String::new(),
            ..ProviderConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
