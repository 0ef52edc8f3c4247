//! Reproducibility reports.
//!
//! A harness that fails under a given seed logs an [`AssignmentReport`] so the
//! exact pool order and per-field formats can be compared against a rerun.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::CodecResult;
use crate::hash::HashScheme;

/// Seed, pool order and field assignments of a provider at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentReport {
    /// Seed drawn at construction.
    pub seed: i32,
    /// Whether the expensive formats were left out.
    pub exclude_expensive: bool,
    /// Hash applied to field names.
    pub hash_scheme: HashScheme,
    /// Pool format names in selection order.
    pub pool: Vec<String>,
    /// Field → format name, sorted by field.
    pub mappings: BTreeMap<String, String>,
}

impl AssignmentReport {
    /// Serializes to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> CodecResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a report from JSON.
    pub fn from_json_str(json: &str) -> CodecResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Counts how many fields were assigned to each format.
    ///
    /// Every pool format appears, with zero if nothing selected it.
    pub fn format_counts(&self) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> =
            self.pool.iter().map(|name| (name.clone(), 0)).collect();
        for format in self.mappings.values() {
            *counts.entry(format.clone()).or_default() += 1;
        }
        counts
    }

    /// Returns the fields whose assignment differs between two reports.
    ///
    /// Fields present in only one report are not compared.
    pub fn diverging_fields(&self, other: &AssignmentReport) -> Vec<String> {
        self.mappings
            .iter()
            .filter(|(field, format)| {
                other
                    .mappings
                    .get(*field)
                    .is_some_and(|theirs| theirs != *format)
            })
            .map(|(field, _)| field.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> AssignmentReport {
        AssignmentReport {
            seed: -42,
            exclude_expensive: false,
            hash_scheme: HashScheme::Blake3,
            pool: vec!["Pulsing".to_string(), "Standard".to_string(), "Memory".to_string()],
            mappings: [("body", "Pulsing"), ("id", "Standard"), ("title", "Pulsing")]
                .into_iter()
                .map(|(f, c)| (f.to_string(), c.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let report = sample();
        let json = report.to_json_pretty().unwrap();
        assert!(json.contains("\"hash_scheme\": \"blake3\""));
        assert_eq!(AssignmentReport::from_json_str(&json).unwrap(), report);
    }

    #[test]
    fn test_format_counts_include_unused() {
        let counts = sample().format_counts();
        assert_eq!(counts.get("Pulsing"), Some(&2));
        assert_eq!(counts.get("Standard"), Some(&1));
        assert_eq!(counts.get("Memory"), Some(&0));
    }

    #[test]
    fn test_diverging_fields() {
        let a = sample();
        let mut b = sample();
        b.mappings.insert("id".to_string(), "Memory".to_string());
        b.mappings.insert("extra".to_string(), "Memory".to_string());
        assert_eq!(a.diverging_fields(&b), vec!["id".to_string()]);
        assert!(a.diverging_fields(&a).is_empty());
    }
}
