use super::block::{Block, TableRow};

/// Serialize a single block to markdown, without a trailing newline.
pub fn write_block(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => {
            format!("{} {}", "#".repeat(usize::from(*level)), text)
        }
        Block::Paragraph { text } => text.clone(),
        Block::Table { rows } => write_table(rows),
    }
}

/// Serialize a block sequence: blocks separated by blank lines, one
/// trailing newline.
pub fn write_blocks(blocks: &[Block]) -> String {
    let mut out = blocks
        .iter()
        .map(write_block)
        .collect::<Vec<_>>()
        .join("\n\n");
    out.push('\n');
    out
}

/// Serialize one table row on its own, cells at their natural width.
/// Used for measuring rows independently of any table's column layout.
pub fn write_row(row: &TableRow) -> String {
    let widths: Vec<usize> = row.cells.iter().map(|cell| cell.chars().count()).collect();
    padded_row(row, &widths)
}

fn write_table(rows: &[TableRow]) -> String {
    let columns = rows.iter().map(|row| row.cells.len()).max().unwrap_or(0);

    // Column width is the widest cell in that column, with the GFM minimum
    // of three so the delimiter row stays valid.
    let mut widths = vec![3usize; columns];
    for row in rows {
        for (i, cell) in row.cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut lines = Vec::new();
    if let Some((header, data)) = rows.split_first() {
        lines.push(padded_row(header, &widths));
        lines.push(delimiter_row(&widths));
        for row in data {
            lines.push(padded_row(row, &widths));
        }
    }
    lines.join("\n")
}

fn padded_row(row: &TableRow, widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (i, width) in widths.iter().enumerate() {
        let cell = row.cells.get(i).map(String::as_str).unwrap_or("");
        line.push(' ');
        line.push_str(cell);
        for _ in cell.chars().count()..*width {
            line.push(' ');
        }
        line.push_str(" |");
    }
    line
}

fn delimiter_row(widths: &[usize]) -> String {
    let mut line = String::from("|");
    for width in widths {
        line.push(' ');
        for _ in 0..*width {
            line.push('-');
        }
        line.push_str(" |");
    }
    line
}
