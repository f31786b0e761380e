use serde::Serialize;

use crate::picker::{pick_from_end, pick_from_start, PickOptions};
use crate::DEFAULT_TOKENS_PER_PARTITION;

/// Options for [`partition_text`].
#[derive(Debug, Clone)]
pub struct TextOptions {
    /// Upper bound on the measured size of each slice.
    pub tokens_per_partition: usize,
    /// Token target for the padding excerpts copied from each neighbor.
    pub padding_tokens: usize,
}

impl Default for TextOptions {
    fn default() -> Self {
        TextOptions {
            tokens_per_partition: DEFAULT_TOKENS_PER_PARTITION,
            padding_tokens: 0,
        }
    }
}

/// One slice of the source text plus excerpts from its neighbors.
///
/// The `partition` fields of a result concatenate back to the original
/// text, in order. Paddings are `None` only where no neighbor exists; with
/// a zero padding target the interior paddings are `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaddedPartition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_start: Option<String>,
    pub partition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_end: Option<String>,
}

/// Partition `text` into the minimum number of equal-sized contiguous
/// slices that each measure within `tokens_per_partition`.
///
/// The slice count starts at one and grows until every slice fits; the
/// slice size is recomputed from scratch at each count, so a count of `n`
/// yields exactly `n` slices of `ceil(len / n)` characters (the trailing
/// ones may be empty). Once the count reaches the character count of the
/// text no finer slicing exists, and that slicing is accepted even if a
/// single character still measures over budget; this bounds the search for
/// counters that can never be satisfied.
pub fn partition_text<F>(text: &str, count: F, options: &TextOptions) -> Vec<PaddedPartition>
where
    F: Fn(&str) -> usize,
{
    let budget = options.tokens_per_partition;
    let char_len = text.chars().count();

    // Byte offset of every char boundary, including the end of the text.
    let mut bounds: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    bounds.push(text.len());

    let slice_at = |start_char: usize, end_char: usize| -> &str {
        let start = bounds[start_char.min(char_len)];
        let end = bounds[end_char.min(char_len)];
        &text[start..end]
    };

    let mut slices_amount = 1usize;
    loop {
        let slice_size = char_len.div_ceil(slices_amount);
        let mut slices: Vec<&str> = Vec::with_capacity(slices_amount);

        let mut all_within_budget = true;
        for i in 0..slices_amount {
            let start = i * slice_size;
            let slice = slice_at(start, start + slice_size);

            if count(slice) > budget {
                all_within_budget = false;
                break;
            }

            slices.push(slice);
        }

        if all_within_budget {
            return with_padding(&slices, &count, options.padding_tokens);
        }

        if slices_amount >= char_len.max(1) {
            // Single-character slices already exceed the budget; finer
            // slicing is impossible, so accept this one over budget.
            let slices: Vec<&str> = (0..slices_amount)
                .map(|i| slice_at(i * slice_size, (i + 1) * slice_size))
                .collect();
            return with_padding(&slices, &count, options.padding_tokens);
        }

        slices_amount += 1;
    }
}

fn with_padding<F>(slices: &[&str], count: &F, padding_tokens: usize) -> Vec<PaddedPartition>
where
    F: Fn(&str) -> usize,
{
    let pick = PickOptions {
        tokens_to_pick: padding_tokens,
    };
    let last = slices.len().saturating_sub(1);

    slices
        .iter()
        .enumerate()
        .map(|(i, slice)| PaddedPartition {
            padding_start: (i > 0).then(|| pick_from_end(slices[i - 1], count, &pick).to_string()),
            partition: (*slice).to_string(),
            padding_end: (i < last)
                .then(|| pick_from_start(slices[i + 1], count, &pick).to_string()),
        })
        .collect()
}
