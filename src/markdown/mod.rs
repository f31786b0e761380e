//! Structured-document collaborator: a small block model over markdown.
//!
//! The partitioning core never touches raw markdown syntax itself; it works
//! on the ordered [`Block`] sequence produced by [`parse`] and turns block
//! groups back into text with [`write_block`] / [`write_blocks`].

mod block;
mod parse;
mod write;

pub use block::{Block, TableRow};
pub use parse::parse;
pub use write::{write_block, write_blocks, write_row};
