use super::DEFAULT_TOKENS_TO_PICK;

/// Options for [`pick_from_start`] and [`pick_from_end`].
#[derive(Debug, Clone, Copy)]
pub struct PickOptions {
    /// Stop growing once the candidate measures at least this many tokens.
    pub tokens_to_pick: usize,
}

impl Default for PickOptions {
    fn default() -> Self {
        PickOptions {
            tokens_to_pick: DEFAULT_TOKENS_TO_PICK,
        }
    }
}

/// Return the shortest prefix of `text` whose measured size reaches
/// `tokens_to_pick`, or all of `text` if no prefix gets there.
pub fn pick_from_start<'a, F>(text: &'a str, count: F, options: &PickOptions) -> &'a str
where
    F: Fn(&str) -> usize,
{
    let mut picked = &text[..0];
    let mut tokens = 0;
    let mut ends = text.char_indices().map(|(i, c)| i + c.len_utf8());

    while tokens < options.tokens_to_pick {
        match ends.next() {
            Some(end) => {
                picked = &text[..end];
                tokens = count(picked);
            }
            None => break,
        }
    }

    picked
}

/// Return the shortest suffix of `text` whose measured size reaches
/// `tokens_to_pick`, or all of `text` if no suffix gets there.
pub fn pick_from_end<'a, F>(text: &'a str, count: F, options: &PickOptions) -> &'a str
where
    F: Fn(&str) -> usize,
{
    let mut picked = &text[text.len()..];
    let mut tokens = 0;
    let mut starts = text.char_indices().map(|(i, _)| i).rev();

    while tokens < options.tokens_to_pick {
        match starts.next() {
            Some(start) => {
                picked = &text[start..];
                tokens = count(picked);
            }
            None => break,
        }
    }

    picked
}
