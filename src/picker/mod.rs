//! Greedy boundary picker: the shortest prefix or suffix of a text that
//! reaches a target token count.
//!
//! Grows the candidate one character at a time and re-measures after each
//! growth. The scan is deliberately linear rather than a binary search:
//! token counters are opaque and only assumed monotonic under
//! concatenation, never cheap or evenly distributed. Each growth step
//! re-measures from scratch, so the cost is quadratic in the picked
//! length; the picker is only ever applied to short boundary excerpts.

mod pick;

pub use pick::{pick_from_end, pick_from_start, PickOptions};

/// Default token target for a boundary pick.
pub const DEFAULT_TOKENS_TO_PICK: usize = 10;
