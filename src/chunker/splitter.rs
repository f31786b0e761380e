use crate::markdown::{write_block, write_row, Block, TableRow};

/// Reduce a block whose size alone exceeds the budget into sub-chunks that
/// can each head their own partition.
///
/// Tables are split row-wise first; anything else, or a table whose header
/// or single row cannot fit, degrades to word grouping over the block's
/// serialized text.
pub(super) fn split_oversized(
    block: &Block,
    count: &dyn Fn(&str) -> usize,
    tokens_per_partition: usize,
) -> Vec<Block> {
    if let Block::Table { rows } = block {
        if let Some(tables) = split_table(rows, count, tokens_per_partition) {
            return tables;
        }
    }

    split_words(&write_block(block), tokens_per_partition)
}

/// Split a table into smaller tables that each repeat the header row and
/// together hold every data row exactly once, in order.
///
/// Returns `None` when the table has no header, or when the header or any
/// single row is itself over budget; the caller falls back to word
/// grouping. The running size counts data rows only, mirroring the fact
/// that the repeated header is context rather than content.
fn split_table(
    rows: &[TableRow],
    count: &dyn Fn(&str) -> usize,
    tokens_per_partition: usize,
) -> Option<Vec<Block>> {
    let (header, data) = rows.split_first()?;

    if count(&write_row(header)) > tokens_per_partition {
        return None;
    }

    let mut tables = Vec::new();
    let mut group = vec![header.clone()];
    let mut group_size = 0;

    for row in data {
        let row_size = count(&write_row(row));

        if row_size > tokens_per_partition {
            return None;
        }

        if group_size + row_size > tokens_per_partition {
            tables.push(Block::Table {
                rows: std::mem::replace(&mut group, vec![header.clone()]),
            });
            group_size = 0;
        }

        group.push(row.clone());
        group_size += row_size;
    }

    if group.len() > 1 {
        tables.push(Block::Table { rows: group });
    }

    Some(tables)
}

/// Group the whitespace-separated words of `text` into paragraphs of at
/// most `tokens_per_partition` words each.
///
/// Word count stands in for the token counter on this path; a counter that
/// diverges from word count sees approximate budgets here. The final group
/// is always emitted, so a wordless text still yields one empty paragraph.
fn split_words(text: &str, tokens_per_partition: usize) -> Vec<Block> {
    let mut chunks = Vec::new();
    let mut words: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        if words.len() >= tokens_per_partition {
            chunks.push(Block::paragraph(words.join(" ")));
            words.clear();
        }
        words.push(word);
    }

    chunks.push(Block::paragraph(words.join(" ")));

    chunks
}
