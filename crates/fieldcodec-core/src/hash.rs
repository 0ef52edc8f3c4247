//! Field-name hashing and pool index derivation.
//!
//! Assignment must not depend on `std::hash` (randomized per process) or on
//! any platform detail, so both schemes here are fixed functions of the
//! field name:
//!
//! - [`HashScheme::Blake3`]: the first four bytes of `BLAKE3(utf8(name))`,
//!   read little-endian as an `i32`.
//! - [`HashScheme::Utf16Polynomial`]: `h = 31 * h + unit` over the UTF-16 code
//!   units of the name with wrapping 32-bit arithmetic, starting from 0.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hash function applied to field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HashScheme {
    /// Truncated BLAKE3 over the UTF-8 bytes.
    #[default]
    Blake3,
    /// 31-multiplier polynomial over UTF-16 code units.
    Utf16Polynomial,
}

impl HashScheme {
    /// Hashes a field name with this scheme.
    pub fn hash(self, field: &str) -> i32 {
        match self {
            HashScheme::Blake3 => blake3_field_hash(field),
            HashScheme::Utf16Polynomial => utf16_polynomial_hash(field),
        }
    }

    /// Returns the scheme's config name.
    pub fn as_str(self) -> &'static str {
        match self {
            HashScheme::Blake3 => "blake3",
            HashScheme::Utf16Polynomial => "utf16-polynomial",
        }
    }
}

impl fmt::Display for HashScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Truncated BLAKE3 hash of the field name's UTF-8 bytes.
pub fn blake3_field_hash(field: &str) -> i32 {
    let hash = blake3::hash(field.as_bytes());
    let bytes = hash.as_bytes();
    i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Polynomial hash over UTF-16 code units.
pub fn utf16_polynomial_hash(field: &str) -> i32 {
    field
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Maps a seed and field hash onto a pool position.
///
/// Computes `|seed ^ hash| mod len`. The absolute value is taken as `u32`, so
/// `i32::MIN` maps to `2^31` instead of overflowing.
///
/// `len` must be non-zero.
pub fn pool_index(seed: i32, hash: i32, len: usize) -> usize {
    debug_assert!(len > 0, "pool_index called with an empty pool");
    (seed ^ hash).unsigned_abs() as usize % len
}
