//! fieldcodec Integration Test Infrastructure
//!
//! This crate holds cross-module tests for the seeded provider:
//!
//! - **Determinism**: identical assignments across runs and query orders
//! - Selection bias and lightweight exclusion
//! - Pool mutation and concurrent lookup
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p fieldcodec-tests
//! ```

pub mod determinism;
pub mod fixtures;
