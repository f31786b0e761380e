use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use docpart::{partition_markdown, partition_text, MarkdownOptions, TextOptions};

/// Partition a document into token-bounded chunks.
#[derive(Parser)]
#[command(name = "docpart", version)]
struct Args {
    /// File to partition
    input: PathBuf,

    /// Treat the input as structured markdown or as flat text
    #[arg(long, value_enum, default_value_t = Mode::Markdown)]
    mode: Mode,

    /// Token budget per partition
    #[arg(long, default_value_t = docpart::DEFAULT_TOKENS_PER_PARTITION)]
    tokens_per_partition: usize,

    /// Token target for the padding excerpts (text mode only)
    #[arg(long, default_value_t = 0)]
    padding_tokens: usize,

    /// Synthetic top-level heading carried into every partition
    /// (markdown mode only)
    #[arg(long)]
    document_title: Option<String>,

    /// Built-in token counter to measure partitions with
    #[arg(long, value_enum, default_value_t = Counter::Words)]
    counter: Counter,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Markdown,
    Text,
}

#[derive(Clone, Copy, ValueEnum)]
enum Counter {
    /// Whitespace-separated word count
    Words,
    /// ~4 characters per token heuristic
    Chars,
}

/// Estimate token count for a piece of text: 1 token per ~4 characters,
/// never zero.
fn estimate_tokens(text: &str) -> usize {
    (text.len() / 4).max(1)
}

fn word_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}

fn main() -> Result<()> {
    let args = Args::parse();

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let count: fn(&str) -> usize = match args.counter {
        Counter::Words => word_tokens,
        Counter::Chars => estimate_tokens,
    };

    match args.mode {
        Mode::Markdown => {
            let options = MarkdownOptions {
                document_title: args.document_title,
                tokens_per_partition: args.tokens_per_partition,
            };
            for partition in partition_markdown(&text, count, &options) {
                println!("{}", serde_json::to_string(&partition)?);
            }
        }
        Mode::Text => {
            let options = TextOptions {
                tokens_per_partition: args.tokens_per_partition,
                padding_tokens: args.padding_tokens,
            };
            for partition in partition_text(&text, count, &options) {
                println!("{}", serde_json::to_string(&partition)?);
            }
        }
    }

    Ok(())
}
