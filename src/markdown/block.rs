/// One top-level unit of document content.
///
/// A closed set of kinds: the partitioning core only distinguishes headings
/// (tracked as context, never carried as body) and tables (row-aware
/// splitting); everything else rides along as a [`Block::Paragraph`] holding
/// its verbatim markdown source, which keeps code fences, lists, and quotes
/// round-trippable without modeling them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A heading with depth 1..=6 and its inline text.
    Heading { level: u8, text: String },
    /// Any non-heading, non-table block, as raw markdown.
    Paragraph { text: String },
    /// A pipe table; the first row is the header row.
    Table { rows: Vec<TableRow> },
}

/// One row of a table, header or data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level: level.clamp(1, 6),
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }
}

impl TableRow {
    pub fn new(cells: Vec<String>) -> Self {
        TableRow { cells }
    }
}
