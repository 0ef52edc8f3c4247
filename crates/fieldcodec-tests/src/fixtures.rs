//! Shared fixtures: field name sets and stand-in formats.

use fieldcodec_core::{FormatHandle, PostingsFormat};
use std::sync::Arc;

/// Field names typical of a document index.
pub const DOCUMENT_FIELDS: &[&str] = &[
    "id",
    "title",
    "body",
    "author",
    "tags",
    "created_at",
    "url",
    "summary",
    "language",
    "category",
    "",
    "Ünïcödé",
    "title_sort",
    "body.shingles",
];

/// `count` synthetic field names: `field0`, `field1`, ...
pub fn field_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("field{}", i)).collect()
}

/// Stand-in format with a fixed name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubFormat {
    pub name: String,
    pub penalized: bool,
}

impl PostingsFormat for StubFormat {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_bias_penalized(&self) -> bool {
        self.penalized
    }
}

/// Creates a non-penalized stub format handle.
pub fn stub(name: &str) -> FormatHandle {
    Arc::new(StubFormat {
        name: name.to_string(),
        penalized: false,
    })
}

/// Creates a penalized stub format handle.
pub fn penalized_stub(name: &str) -> FormatHandle {
    Arc::new(StubFormat {
        name: name.to_string(),
        penalized: true,
    })
}
