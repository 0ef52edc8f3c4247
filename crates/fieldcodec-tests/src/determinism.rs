//! Determinism checks for field assignment.
//!
//! Builds several providers from the same harness seed, queries the same
//! fields in a different order each run, and compares the resulting
//! assignments.
//!
//! # Example
//!
//! ```
//! use fieldcodec_core::ProviderConfig;
//! use fieldcodec_tests::determinism::verify_assignment_determinism;
//! use fieldcodec_tests::fixtures::field_names;
//!
//! let result = verify_assignment_determinism(7, &ProviderConfig::default(), &field_names(50), 4);
//! result.assert_deterministic();
//! ```

use fieldcodec_core::{create_rng, AssignmentReport, ProviderConfig, RandomCodecProvider};
use rand::seq::SliceRandom;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether every run produced the same assignment.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Report from the first run.
    pub baseline: AssignmentReport,
    /// First run (0-indexed) that diverged, with its diverging fields.
    pub divergence: Option<(usize, Vec<String>)>,
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some((run, fields)) = &self.divergence {
            panic!(
                "Non-deterministic assignment detected!\n\
                 Runs: {}\n\
                 Seed: {}\n\
                 Run {} diverged on fields: {:?}",
                self.runs, self.baseline.seed, run, fields
            );
        }
    }
}

/// Builds `runs` providers from `harness_seed` and assigns `fields` in a
/// differently shuffled order each time.
///
/// Run 0 queries `fields` as given. Query orders are shuffled with an RNG
/// independent of the provider's own random source.
pub fn verify_assignment_determinism(
    harness_seed: u64,
    config: &ProviderConfig,
    fields: &[String],
    runs: usize,
) -> DeterminismResult {
    let runs = runs.max(1);
    let mut order_rng = create_rng(harness_seed.wrapping_add(1));
    let mut order: Vec<&String> = fields.iter().collect();

    let mut baseline = None;
    let mut divergence = None;
    for run in 0..runs {
        if run > 0 {
            order.shuffle(&mut order_rng);
        }
        let provider = RandomCodecProvider::with_config(&mut create_rng(harness_seed), config.clone())
            .expect("provider construction failed");
        for field in &order {
            provider
                .field_codec(field)
                .expect("field assignment failed");
        }
        let report = provider.report();

        match &baseline {
            None => baseline = Some(report),
            Some(first) => {
                let mut diverging = first.diverging_fields(&report);
                if first.seed != report.seed || first.pool != report.pool {
                    diverging.insert(0, "<pool>".to_string());
                }
                if divergence.is_none() && !diverging.is_empty() {
                    divergence = Some((run, diverging));
                }
            }
        }
    }

    let baseline = baseline.expect("at least one run");
    DeterminismResult {
        is_deterministic: divergence.is_none(),
        runs,
        baseline,
        divergence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::DOCUMENT_FIELDS;

    #[test]
    fn test_document_fields_are_deterministic() {
        let fields: Vec<String> = DOCUMENT_FIELDS.iter().map(|s| s.to_string()).collect();
        let result = verify_assignment_determinism(99, &ProviderConfig::default(), &fields, 5);
        assert!(result.is_deterministic);
        assert_eq!(result.runs, 5);
        assert_eq!(result.baseline.mappings.len(), fields.len());
    }
}
