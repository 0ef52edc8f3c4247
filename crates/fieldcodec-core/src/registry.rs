//! Base name → format directory.
//!
//! The provider layers its selectable pool on top of a [`FormatRegistry`] and
//! forwards every register/unregister call to it. Index code that opens a
//! segment resolves the recorded format name through the registry, so the
//! legacy format lives here even though it is never assigned to new fields.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::RegistryError;
use crate::format::{FormatHandle, PostingsFormat};

/// Name-keyed format directory shared with the surrounding index code.
pub trait FormatRegistry: Send + Sync {
    /// Registers a format under its name.
    ///
    /// Registering the same handle twice is a no-op; registering a different
    /// format under a taken name fails.
    fn register(&self, format: FormatHandle) -> Result<(), RegistryError>;

    /// Removes `format` and returns the registered handle.
    ///
    /// Fails unless `format` is the very instance registered under its name.
    fn unregister(&self, format: &dyn PostingsFormat) -> Result<FormatHandle, RegistryError>;

    /// Looks up a format by name.
    fn lookup(&self, name: &str) -> Option<FormatHandle>;

    /// Returns the registered names in lexicographic order.
    fn names(&self) -> Vec<String>;
}

/// Whether `format` is the instance behind `handle`.
pub fn is_same_instance(handle: &FormatHandle, format: &dyn PostingsFormat) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(handle), format)
}

/// In-memory [`FormatRegistry`].
#[derive(Debug, Default)]
pub struct NamedFormatRegistry {
    formats: Mutex<BTreeMap<String, FormatHandle>>,
}

impl NamedFormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry behind an `Arc`, ready to share.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn len(&self) -> usize {
        self.formats.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.lock().is_empty()
    }
}

impl FormatRegistry for NamedFormatRegistry {
    fn register(&self, format: FormatHandle) -> Result<(), RegistryError> {
        let mut formats = self.formats.lock();
        match formats.get(format.name()) {
            Some(existing) if Arc::ptr_eq(existing, &format) => Ok(()),
            Some(_) => Err(RegistryError::DuplicateName {
                name: format.name().to_string(),
            }),
            None => {
                formats.insert(format.name().to_string(), format);
                Ok(())
            }
        }
    }

    fn unregister(&self, format: &dyn PostingsFormat) -> Result<FormatHandle, RegistryError> {
        let mut formats = self.formats.lock();
        let name = format.name();
        match formats.get(name) {
            None => Err(RegistryError::NotRegistered {
                name: name.to_string(),
            }),
            Some(existing) if !is_same_instance(existing, format) => {
                Err(RegistryError::InstanceMismatch {
                    name: name.to_string(),
                })
            }
            Some(_) => formats
                .remove(name)
                .ok_or_else(|| RegistryError::NotRegistered {
                    name: name.to_string(),
                }),
        }
    }

    fn lookup(&self, name: &str) -> Option<FormatHandle> {
        self.formats.lock().get(name).cloned()
    }

    fn names(&self) -> Vec<String> {
        self.formats.lock().keys().cloned().collect()
    }
}
