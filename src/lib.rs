// Public API exports
pub mod chunker;
pub mod markdown;
pub mod picker;
pub mod slicer;

// Re-export main types for convenience
pub use chunker::{partition_markdown, MarkdownOptions};
pub use markdown::{Block, TableRow};
pub use picker::{pick_from_end, pick_from_start, PickOptions, DEFAULT_TOKENS_TO_PICK};
pub use slicer::{partition_text, PaddedPartition, TextOptions};

/// Default token budget for one partition (configurable per call)
pub const DEFAULT_TOKENS_PER_PARTITION: usize = 1000;
