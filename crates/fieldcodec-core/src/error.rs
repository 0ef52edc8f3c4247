//! Error types for format registration and field assignment.

use thiserror::Error;

/// Result type for provider operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors raised by a [`FormatRegistry`](crate::registry::FormatRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A different format is already registered under this name.
    #[error("a different postings format is already registered as '{name}'")]
    DuplicateName {
        /// The contested format name.
        name: String,
    },

    /// No format is registered under this name.
    #[error("no postings format registered as '{name}'")]
    NotRegistered {
        /// The requested format name.
        name: String,
    },

    /// The name is registered, but to a different format instance.
    #[error("postings format '{name}' is registered as a different instance")]
    InstanceMismatch {
        /// The contested format name.
        name: String,
    },
}

/// Errors that can occur while building or querying a provider.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The selectable pool was empty when a field was first looked up.
    #[error("cannot assign a postings format to field '{field}': the format pool is empty")]
    EmptyPool {
        /// The field being assigned.
        field: String,
    },

    /// The forwarded registry call failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A configuration value is out of range.
    #[error("invalid config '{name}': {message}")]
    InvalidConfig {
        /// Config field name.
        name: String,
        /// Error message.
        message: String,
    },

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodecError {
    /// Creates an invalid config error.
    pub fn invalid_config(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            CodecError::EmptyPool { .. } => "CODEC_001",
            CodecError::Registry(RegistryError::DuplicateName { .. }) => "CODEC_002",
            CodecError::Registry(RegistryError::NotRegistered { .. }) => "CODEC_003",
            CodecError::Registry(RegistryError::InstanceMismatch { .. }) => "CODEC_006",
            CodecError::InvalidConfig { .. } => "CODEC_004",
            CodecError::Json(_) => "CODEC_005",
        }
    }

    /// Returns the error category.
    pub fn category(&self) -> &'static str {
        match self {
            CodecError::EmptyPool { .. } => "contract",
            CodecError::Registry(_) => "registry",
            CodecError::InvalidConfig { .. } | CodecError::Json(_) => "config",
        }
    }

    /// Returns true for precondition violations that indicate a misconfigured
    /// provider rather than a bad request.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, CodecError::EmptyPool { .. })
    }
}
