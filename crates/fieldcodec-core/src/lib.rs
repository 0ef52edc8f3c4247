//! Seeded per-field postings format assignment.
//!
//! Index test harnesses randomize which postings format each field uses, but a
//! failing run must be reproducible from its seed alone. This crate builds a
//! seed-shuffled pool of formats and maps each field name onto it with a fixed
//! hash, so the assignment does not depend on the order fields are seen.
//!
//! # Example
//!
//! ```
//! use fieldcodec_core::{create_rng, RandomCodecProvider};
//!
//! let a = RandomCodecProvider::new(&mut create_rng(42), false).unwrap();
//! let b = RandomCodecProvider::new(&mut create_rng(42), false).unwrap();
//!
//! // Different discovery order, same assignment.
//! let title = a.field_codec("title").unwrap();
//! let body = a.field_codec("body").unwrap();
//! assert_eq!(b.field_codec("body").unwrap(), body);
//! assert_eq!(b.field_codec("title").unwrap(), title);
//! assert!(a.has_field_codec("anything"));
//! ```
//!
//! # Modules
//!
//! - [`config`]: Provider configuration and profiles
//! - [`error`]: Error types
//! - [`format`]: Postings format capability and built-in descriptors
//! - [`hash`]: Field-name hashing and pool index derivation
//! - [`provider`]: The seeded provider
//! - [`registry`]: Base name → format directory
//! - [`report`]: Reproducibility reports
//! - [`rng`]: Deterministic random sources

pub mod config;
pub mod error;
pub mod format;
pub mod hash;
pub mod provider;
pub mod registry;
pub mod report;
pub mod rng;

pub use config::ProviderConfig;
pub use error::{CodecError, CodecResult, RegistryError};
pub use format::{
    names, BlockSizes, FormatHandle, MemoryFormat, PostingsFormat, PreFlexFormat, PulsingFormat,
    SimpleTextFormat, StandardFormat,
};
pub use hash::{pool_index, HashScheme};
pub use provider::RandomCodecProvider;
pub use registry::{FormatRegistry, NamedFormatRegistry};
pub use report::AssignmentReport;
pub use rng::{create_rng, derive_run_seed};
