//! Uniform text slicer: partitions flat text into the minimum number of
//! equal-sized contiguous slices that all fit the token budget, with
//! optional padding excerpts copied across each boundary.

mod slice;

pub use slice::{partition_text, PaddedPartition, TextOptions};
