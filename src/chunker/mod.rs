//! Structure-aware markdown chunker.
//!
//! Walks the document's block sequence once, greedily packing body blocks
//! into token-bounded partitions. Headings are never carried as body
//! content; they feed a topic stack whose snapshot is prefixed to
//! every emitted partition, so each partition stays interpretable on its
//! own. A single block that exceeds the budget by itself is reduced by the
//! splitter fallback instead of failing.

mod splitter;
mod topic;

#[cfg(test)]
mod tests;

use crate::markdown::{self, write_block, write_blocks, Block};
use crate::DEFAULT_TOKENS_PER_PARTITION;
use splitter::split_oversized;
use topic::Topic;

/// Options for [`partition_markdown`].
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Synthetic top-level heading prefixed to every partition; shifts all
    /// document headings one level down.
    pub document_title: Option<String>,
    /// Upper bound on the measured size of each partition.
    pub tokens_per_partition: usize,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        MarkdownOptions {
            document_title: None,
            tokens_per_partition: DEFAULT_TOKENS_PER_PARTITION,
        }
    }
}

/// Partition a markdown document into serialized chunks of at most
/// `tokens_per_partition` tokens each, as measured by `count`.
///
/// Body blocks appear exactly once, in order. Each partition is prefixed
/// with the heading context in effect where its content appeared, so
/// headings recur across partitions by design. Partitions only exceed the
/// budget when a single irreducible unit (one word group, one table row
/// plus header) already does.
pub fn partition_markdown<F>(markdown: &str, count: F, options: &MarkdownOptions) -> Vec<String>
where
    F: Fn(&str) -> usize,
{
    let count: &dyn Fn(&str) -> usize = &count;
    let blocks = markdown::parse(markdown);
    let budget = options.tokens_per_partition;

    let mut topic = Topic::new(options.document_title.as_deref());
    let mut partitions: Vec<Vec<Block>> = Vec::new();
    let mut current: Vec<Block> = Vec::new();
    let mut current_size = 0usize;

    for block in blocks {
        let block_size = count(&write_block(&block));

        if current_size + block_size > budget {
            if !current.is_empty() {
                let mut partition = topic.headers();
                partition.append(&mut current);
                partitions.push(partition);
                current_size = 0;
            } else {
                // The block alone is over budget with nothing to flush:
                // reduce it and emit each piece under the current context.
                for sub_chunk in split_oversized(&block, count, budget) {
                    let mut partition = topic.headers();
                    partition.push(sub_chunk);
                    partitions.push(partition);
                }
                current.clear();
                current_size = 0;
                continue;
            }
        }

        match block {
            Block::Heading { level, text } => topic.observe(level, &text),
            body => {
                current.push(body);
                current_size += block_size;
            }
        }
    }

    if !current.is_empty() {
        let mut partition = topic.headers();
        partition.append(&mut current);
        partitions.push(partition);
    }

    partitions
        .iter()
        .map(|partition| write_blocks(partition))
        .collect()
}
