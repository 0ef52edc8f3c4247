//! Postings format descriptors.
//!
//! The provider never encodes anything itself. A format is an opaque named
//! capability: the provider needs its name and two cost classifications, and
//! the descriptors below carry whatever tuning parameters were drawn for them
//! at construction.

use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// Well-known format names.
pub mod names {
    /// General-purpose block-tree format.
    pub const STANDARD: &str = "Standard";
    /// Legacy read-only format.
    pub const PRE_FLEX: &str = "PreFlex";
    /// Standard format that inlines low-frequency postings.
    pub const PULSING: &str = "Pulsing";
    /// Plain-text debug format.
    pub const SIMPLE_TEXT: &str = "SimpleText";
    /// Fully in-memory format.
    pub const MEMORY: &str = "Memory";
}

/// A named postings format capability.
pub trait PostingsFormat: fmt::Debug + Send + Sync {
    /// Unique name of the format.
    fn name(&self) -> &str;

    /// Whether field assignment should draw this format less often than a
    /// uniform draw would.
    fn is_bias_penalized(&self) -> bool {
        false
    }

    /// Whether the format holds postings in memory or is otherwise too costly
    /// for lightweight runs.
    fn is_memory_expensive(&self) -> bool {
        false
    }
}

/// Shared handle to a registered format.
pub type FormatHandle = Arc<dyn PostingsFormat>;

/// Block-tree terms dictionary bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSizes {
    /// Minimum items per terms block.
    pub min_items_per_block: u32,
    /// Maximum items per terms block.
    pub max_items_per_block: u32,
}

impl BlockSizes {
    /// Draws block bounds: `min` in `[2, 100]`, then
    /// `max = 2 * max(floor, min - 1) + [0, 100)`.
    ///
    /// Consumes exactly two values from `rng`, `min` first.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, floor: u32) -> Self {
        let min_items_per_block = rng.gen_range(2..=100u32);
        let max_items_per_block =
            2 * (min_items_per_block - 1).max(floor) + rng.gen_range(0..100u32);
        Self {
            min_items_per_block,
            max_items_per_block,
        }
    }
}

/// General-purpose default format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardFormat {
    pub blocks: BlockSizes,
}

impl StandardFormat {
    pub fn new(blocks: BlockSizes) -> Self {
        Self { blocks }
    }

    /// Draws block bounds with a floor of 2.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(BlockSizes::draw(rng, 2))
    }
}

impl PostingsFormat for StandardFormat {
    fn name(&self) -> &str {
        names::STANDARD
    }
}

/// Legacy format kept for reading old segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreFlexFormat;

impl PostingsFormat for PreFlexFormat {
    fn name(&self) -> &str {
        names::PRE_FLEX
    }
}

/// Composite format that inlines postings of terms below a frequency cutoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PulsingFormat {
    /// Terms with at most this many documents are inlined.
    pub freq_cutoff: u32,
    pub blocks: BlockSizes,
}

impl PulsingFormat {
    pub fn new(freq_cutoff: u32, blocks: BlockSizes) -> Self {
        Self {
            freq_cutoff,
            blocks,
        }
    }

    /// Draws block bounds (floor 1) and then a cutoff in `[1, 20]`.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let blocks = BlockSizes::draw(rng, 1);
        let freq_cutoff = 1 + rng.gen_range(0..20u32);
        Self::new(freq_cutoff, blocks)
    }
}

impl PostingsFormat for PulsingFormat {
    fn name(&self) -> &str {
        names::PULSING
    }
}

/// Plain-text debug format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleTextFormat;

impl PostingsFormat for SimpleTextFormat {
    fn name(&self) -> &str {
        names::SIMPLE_TEXT
    }

    fn is_bias_penalized(&self) -> bool {
        true
    }

    fn is_memory_expensive(&self) -> bool {
        true
    }
}

/// All-in-memory format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryFormat;

impl PostingsFormat for MemoryFormat {
    fn name(&self) -> &str {
        names::MEMORY
    }

    fn is_memory_expensive(&self) -> bool {
        true
    }
}
