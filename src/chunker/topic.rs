use crate::markdown::Block;

const MAX_DEPTH: usize = 6;

/// Tracks the heading hierarchy in effect at the current point of the
/// document, like a directory path: one slot per depth, where a new
/// heading at depth `d` invalidates everything nested below it.
#[derive(Debug)]
pub struct Topic {
    /// Slot `i` holds the latest heading seen at depth `i + 1`.
    slots: [Option<String>; MAX_DEPTH],
    title: Option<String>,
}

impl Topic {
    /// An empty topic, optionally rooted at a synthetic document title.
    pub fn new(title: Option<&str>) -> Self {
        Topic {
            slots: Default::default(),
            title: title.map(str::to_string),
        }
    }

    /// Record a heading, clearing every slot at its depth or deeper.
    pub fn observe(&mut self, level: u8, text: &str) {
        let depth = usize::from(level.clamp(1, 6));
        for slot in &mut self.slots[depth - 1..] {
            *slot = None;
        }
        self.slots[depth - 1] = Some(text.to_string());
    }

    /// Snapshot the current context as heading blocks, in depth order.
    ///
    /// When a title is set it becomes the sole depth-1 heading and every
    /// tracked heading is shifted one level down (clamped at 6).
    pub fn headers(&self) -> Vec<Block> {
        let shift = u8::from(self.title.is_some());
        let mut headers = Vec::new();

        if let Some(title) = &self.title {
            headers.push(Block::heading(1, title.clone()));
        }
        for (i, slot) in self.slots.iter().enumerate() {
            if let Some(text) = slot {
                headers.push(Block::heading(i as u8 + 1 + shift, text.clone()));
            }
        }

        headers
    }
}
