//! Seeded per-field postings format assignment.
//!
//! A [`RandomCodecProvider`] owns an ordered pool of selectable formats and a
//! cache of field assignments. The pool order and the per-field draws depend
//! only on the random source's state at construction, so fields can be
//! discovered in any order (hash sets, shuffled documents) and still land on
//! the same formats run after run.
//!
//! Selection for an unseen field:
//!
//! ```text
//! primary = |seed ^ hash(field)| mod pool_len
//! if pool[primary] is bias-penalized and seed % bias_modulus != 0:
//!     use |seed ^ hash(uppercase(field))| mod pool_len
//! ```
//!
//! The retry happens at most once, so the penalized format stays reachable.

use parking_lot::Mutex;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::config::ProviderConfig;
use crate::error::{CodecError, CodecResult};
use crate::format::{
    FormatHandle, MemoryFormat, PostingsFormat, PreFlexFormat, PulsingFormat, SimpleTextFormat,
    StandardFormat,
};
use crate::hash::pool_index;
use crate::registry::{is_same_instance, FormatRegistry, NamedFormatRegistry};
use crate::report::AssignmentReport;

/// Pool and cache, always mutated together under one lock.
#[derive(Default)]
struct ProviderState {
    pool: Vec<FormatHandle>,
    mappings: BTreeMap<String, FormatHandle>,
}

impl ProviderState {
    fn register(
        &mut self,
        registry: &dyn FormatRegistry,
        legacy_format: &str,
        format: FormatHandle,
    ) -> CodecResult<()> {
        let name = format.name();
        let pooled = name != legacy_format && !self.pool.iter().any(|f| f.name() == name);
        if pooled {
            self.pool.push(Arc::clone(&format));
        }
        if let Err(err) = registry.register(format) {
            if pooled {
                self.pool.pop();
            }
            return Err(err.into());
        }
        Ok(())
    }

    fn unregister(
        &mut self,
        registry: &dyn FormatRegistry,
        format: &dyn PostingsFormat,
    ) -> CodecResult<FormatHandle> {
        let position = self
            .pool
            .iter()
            .position(|f| is_same_instance(f, format));
        let removed = position.map(|index| self.pool.remove(index));
        match registry.unregister(format) {
            Ok(format) => Ok(format),
            Err(err) => {
                if let (Some(index), Some(format)) = (position, removed) {
                    self.pool.insert(index, format);
                }
                Err(err.into())
            }
        }
    }

    fn pool_names(&self) -> Vec<String> {
        self.pool.iter().map(|f| f.name().to_string()).collect()
    }
}

/// Assigns a postings format to every field, reproducibly from a seed.
pub struct RandomCodecProvider {
    seed: i32,
    config: ProviderConfig,
    registry: Arc<dyn FormatRegistry>,
    state: Mutex<ProviderState>,
}

impl RandomCodecProvider {
    /// Builds a provider with its own registry and default settings.
    ///
    /// # Arguments
    /// * `rng` - Random source; consumed only here
    /// * `exclude_expensive` - Leave SimpleText and Memory out of the pool
    pub fn new<R: Rng + ?Sized>(rng: &mut R, exclude_expensive: bool) -> CodecResult<Self> {
        let config = ProviderConfig {
            exclude_expensive,
            ..ProviderConfig::default()
        };
        Self::with_config(rng, config)
    }

    /// Builds a provider with its own registry.
    pub fn with_config<R: Rng + ?Sized>(rng: &mut R, config: ProviderConfig) -> CodecResult<Self> {
        Self::with_registry(rng, config, NamedFormatRegistry::shared())
    }

    /// Builds a provider on top of a shared base registry.
    ///
    /// Draws from `rng` in this order:
    /// 1. the seed (`i32`)
    /// 2. Standard block bounds (min, then max slack)
    /// 3. Pulsing block bounds (min, then max slack), then its frequency cutoff
    /// 4. the pool shuffle
    ///
    /// Registration order is Standard, PreFlex, Pulsing, SimpleText, Memory.
    /// With `config.exclude_expensive` set, formats reporting
    /// [`PostingsFormat::is_memory_expensive`] are skipped. Formats passed to
    /// [`register`](Self::register) later are never filtered.
    pub fn with_registry<R: Rng + ?Sized>(
        rng: &mut R,
        config: ProviderConfig,
        registry: Arc<dyn FormatRegistry>,
    ) -> CodecResult<Self> {
        config.validate()?;

        let seed: i32 = rng.gen();
        let mut state = ProviderState::default();
        let legacy = config.legacy_format.as_str();

        let standard = StandardFormat::from_rng(rng);
        let pulsing = PulsingFormat::from_rng(rng);
        let builtins: [FormatHandle; 5] = [
            Arc::new(standard),
            Arc::new(PreFlexFormat),
            Arc::new(pulsing),
            Arc::new(SimpleTextFormat),
            Arc::new(MemoryFormat),
        ];
        for format in builtins {
            if config.exclude_expensive && format.is_memory_expensive() {
                continue;
            }
            state.register(&*registry, legacy, format)?;
        }
        state.pool.shuffle(rng);

        tracing::debug!(
            seed,
            exclude_expensive = config.exclude_expensive,
            pool = ?state.pool_names(),
            "built codec provider"
        );

        Ok(Self {
            seed,
            config,
            registry,
            state: Mutex::new(state),
        })
    }

    /// Rebuilds a provider from a recorded seed and pool order.
    ///
    /// `formats` are registered in the given order and the pool is not
    /// shuffled, so a pool listed in an [`AssignmentReport`] is reproduced
    /// exactly.
    pub fn with_seed(
        seed: i32,
        formats: impl IntoIterator<Item = FormatHandle>,
        config: ProviderConfig,
        registry: Arc<dyn FormatRegistry>,
    ) -> CodecResult<Self> {
        config.validate()?;

        let mut state = ProviderState::default();
        for format in formats {
            state.register(&*registry, &config.legacy_format, format)?;
        }

        tracing::debug!(seed, pool = ?state.pool_names(), "replayed codec provider");

        Ok(Self {
            seed,
            config,
            registry,
            state: Mutex::new(state),
        })
    }

    /// Returns the name of the format assigned to `field`.
    ///
    /// The first lookup for a field selects and caches a format; later
    /// lookups return the cached one even if the pool has changed since.
    ///
    /// # Errors
    /// [`CodecError::EmptyPool`] if the field is unseen and the pool is empty.
    pub fn field_codec(&self, field: &str) -> CodecResult<String> {
        self.field_format(field).map(|f| f.name().to_string())
    }

    /// Returns the format handle assigned to `field`.
    pub fn field_format(&self, field: &str) -> CodecResult<FormatHandle> {
        let mut state = self.state.lock();
        if let Some(format) = state.mappings.get(field) {
            return Ok(Arc::clone(format));
        }

        let len = state.pool.len();
        if len == 0 {
            return Err(CodecError::EmptyPool {
                field: field.to_string(),
            });
        }

        let scheme = self.config.hash_scheme;
        let mut index = pool_index(self.seed, scheme.hash(field), len);
        let retried =
            state.pool[index].is_bias_penalized() && self.seed % self.config.bias_modulus != 0;
        if retried {
            index = pool_index(self.seed, scheme.hash(&field.to_uppercase()), len);
        }

        let format = Arc::clone(&state.pool[index]);
        tracing::trace!(field, format = format.name(), retried, "assigned postings format");
        state.mappings.insert(field.to_string(), Arc::clone(&format));
        Ok(format)
    }

    /// Every field has a format. Always returns `true`.
    pub fn has_field_codec(&self, _field: &str) -> bool {
        true
    }

    /// Registers a format with the base registry and, unless it is the legacy
    /// format or its name is already pooled, appends it to the pool.
    ///
    /// If the registry rejects the format the pool is left unchanged.
    pub fn register(&self, format: FormatHandle) -> CodecResult<()> {
        let name = format.name().to_string();
        let mut state = self.state.lock();
        state.register(&*self.registry, &self.config.legacy_format, format)?;
        tracing::debug!(format = %name, pool_len = state.pool.len(), "registered postings format");
        Ok(())
    }

    /// Removes a format from the pool and the base registry.
    ///
    /// `format` must be the registered instance itself; another instance with
    /// the same name is rejected and nothing changes. Fields already assigned
    /// to the format keep reporting it.
    pub fn unregister(&self, format: &dyn PostingsFormat) -> CodecResult<FormatHandle> {
        let mut state = self.state.lock();
        let removed = state.unregister(&*self.registry, format)?;
        tracing::debug!(
            format = format.name(),
            pool_len = state.pool.len(),
            "unregistered postings format"
        );
        Ok(removed)
    }

    /// The seed drawn at construction.
    pub fn seed(&self) -> i32 {
        self.seed
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// The base registry this provider forwards to.
    pub fn registry(&self) -> &Arc<dyn FormatRegistry> {
        &self.registry
    }

    /// Current pool names, in selection order.
    pub fn pool_names(&self) -> Vec<String> {
        self.state.lock().pool_names()
    }

    pub fn pool_len(&self) -> usize {
        self.state.lock().pool.len()
    }

    /// Snapshot of field → format name assignments made so far.
    pub fn mappings(&self) -> BTreeMap<String, String> {
        self.state
            .lock()
            .mappings
            .iter()
            .map(|(field, format)| (field.clone(), format.name().to_string()))
            .collect()
    }

    /// Snapshot of the seed, pool and assignments, taken under one lock.
    pub fn report(&self) -> AssignmentReport {
        let state = self.state.lock();
        AssignmentReport {
            seed: self.seed,
            exclude_expensive: self.config.exclude_expensive,
            hash_scheme: self.config.hash_scheme,
            pool: state.pool_names(),
            mappings: state
                .mappings
                .iter()
                .map(|(field, format)| (field.clone(), format.name().to_string()))
                .collect(),
        }
    }
}

impl fmt::Debug for RandomCodecProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomCodecProvider")
            .field("seed", &self.seed)
            .field("config", &self.config)
            .field("pool", &self.pool_names())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for RandomCodecProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        write!(f, "RandomCodecProvider: {{")?;
        for (i, (field, format)) in state.mappings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", field, format.name())?;
        }
        write!(f, "}}")
    }
}
