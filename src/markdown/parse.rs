use std::ops::Range;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};

use super::block::{Block, TableRow};

/// Parse markdown source into an ordered sequence of top-level blocks.
///
/// Headings and tables are lifted into their structured forms; every other
/// top-level block keeps its verbatim source span, so serialization
/// reproduces it exactly.
pub fn parse(source: &str) -> Vec<Block> {
    let parser = Parser::new_ext(source, Options::ENABLE_TABLES);
    let mut events = parser.into_offset_iter();
    let mut blocks = Vec::new();

    while let Some((event, range)) = events.next() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                let text = collect_inline(&mut events);
                blocks.push(Block::Heading {
                    level: heading_depth(level),
                    text,
                });
            }
            Event::Start(Tag::Table(_)) => {
                blocks.push(collect_table(&mut events));
            }
            Event::Start(_) => {
                skip_block(&mut events);
                blocks.push(raw_block(source, range));
            }
            // Thematic breaks are leaf events with no Start/End pair.
            Event::Rule => blocks.push(raw_block(source, range)),
            _ => {}
        }
    }

    blocks
}

fn raw_block(source: &str, range: Range<usize>) -> Block {
    Block::Paragraph {
        text: source[range].trim().to_string(),
    }
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Concatenate the inline text of the container whose `Start` was just
/// consumed, up to its matching `End`. Inline markup is flattened; code
/// spans keep their backticks.
fn collect_inline<'a, I>(events: &mut I) -> String
where
    I: Iterator<Item = (Event<'a>, Range<usize>)>,
{
    let mut text = String::new();
    let mut depth = 1usize;

    for (event, _) in events.by_ref() {
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Event::Text(t) => text.push_str(&t),
            Event::Code(code) => {
                text.push('`');
                text.push_str(&code);
                text.push('`');
            }
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }

    text
}

/// Consume events up to the `End` matching the `Start` that was just taken.
fn skip_block<'a, I>(events: &mut I)
where
    I: Iterator<Item = (Event<'a>, Range<usize>)>,
{
    let mut depth = 1usize;

    for (event, _) in events.by_ref() {
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            _ => {}
        }
    }
}

/// Collect a table's rows after its `Start` has been consumed. The header
/// row arrives inside `TableHead`; data rows inside `TableRow`.
fn collect_table<'a, I>(events: &mut I) -> Block
where
    I: Iterator<Item = (Event<'a>, Range<usize>)>,
{
    use pulldown_cmark::TagEnd;

    let mut rows = Vec::new();
    let mut cells = Vec::new();

    while let Some((event, _)) = events.next() {
        match event {
            Event::Start(Tag::TableCell) => cells.push(collect_inline(events)),
            Event::End(TagEnd::TableHead) | Event::End(TagEnd::TableRow) => {
                rows.push(TableRow::new(std::mem::take(&mut cells)));
            }
            Event::End(TagEnd::Table) => break,
            _ => {}
        }
    }

    Block::Table { rows }
}
