use super::*;

/// Mirrors a tokenizer that counts space-separated segments, including the
/// empty segments produced by runs of spaces.
fn space_split(text: &str) -> usize {
    text.split(' ').count()
}

fn words(text: &str) -> usize {
    text.split_whitespace().count()
}

fn options(tokens_per_partition: usize) -> MarkdownOptions {
    MarkdownOptions {
        document_title: None,
        tokens_per_partition,
    }
}

#[test]
fn partitions_document_and_shifts_headings_under_the_title() {
    let text = "# Lorem ipsum\n\nDolor sit amet, consectetur adipiscing elit.\n\n## Lorem ipsum2\n\n2Dolor sit amet, consectetur adipiscing elit.";

    let result = partition_markdown(
        text,
        space_split,
        &MarkdownOptions {
            document_title: Some("EXAMPLE TITLE".to_string()),
            tokens_per_partition: 6,
        },
    );

    let expected = vec![
        "# EXAMPLE TITLE\n\n## Lorem ipsum\n\nDolor sit amet, consectetur adipiscing elit.\n",
        "# EXAMPLE TITLE\n\n## Lorem ipsum\n\n### Lorem ipsum2\n\n2Dolor sit amet, consectetur adipiscing elit.\n",
    ];
    assert_eq!(result, expected);
}

#[test]
fn word_splits_a_paragraph_that_alone_exceeds_the_budget() {
    let text = "# Lorem ipsum\n\nDolor sit amet, consectetur adipiscing elit.";

    let result = partition_markdown(text, space_split, &options(3));

    let expected = vec![
        "# Lorem ipsum\n\nDolor sit amet,\n",
        "# Lorem ipsum\n\nconsectetur adipiscing elit.\n",
    ];
    assert_eq!(result, expected);
}

#[test]
fn splits_an_oversized_table_by_rows_repeating_the_header() {
    let text = "
| Header 1 | Header 2 | Header 3 |
| -------- | -------- | -------- |
| Row 1    | Row 1    | Row 1    |
| Row 2    | Row 2    | Row 2    |
| Row 3    | Row 3    | Row 3    |
| Row 4    | Row 4    | Row 4    |
    ";
    // Two data rows' worth of tokens.
    let budget = words("| Row 1    | Row 1    | Row 1    | | Row 2    | Row 2    | Row 2    |");

    let result = partition_markdown(text, space_split, &options(budget));

    let expected = vec![
        "| Header 1 | Header 2 | Header 3 |\n| -------- | -------- | -------- |\n| Row 1    | Row 1    | Row 1    |\n| Row 2    | Row 2    | Row 2    |\n",
        "| Header 1 | Header 2 | Header 3 |\n| -------- | -------- | -------- |\n| Row 3    | Row 3    | Row 3    |\n| Row 4    | Row 4    | Row 4    |\n",
    ];
    assert_eq!(result, expected);
}

#[test]
fn falls_back_to_word_splitting_when_the_table_header_is_too_large() {
    let text = "
| Header 1 | Header 2 | Header 3 |
| -------- | -------- | -------- |
| Row 1    | Row 1    | Row 1    |
    ";

    let result = partition_markdown(text, space_split, &options(1));

    // One partition per word of the serialized table.
    assert_eq!(result.len(), words(text));
}

#[test]
fn falls_back_to_word_splitting_when_a_single_row_is_too_large() {
    let text = "
| Header | Header | Header |
| ------ | ------ | ------ |
| Row 2  | Row 2  | Row is to big! |
    ";
    let budget = space_split("| Header | Header | Header |");

    let result = partition_markdown(text, space_split, &options(budget));

    assert_eq!(result.len(), words(text).div_ceil(budget));
}

#[test]
fn empty_document_yields_no_partitions() {
    let result = partition_markdown("", space_split, &MarkdownOptions::default());

    assert!(result.is_empty());
}

#[test]
fn carries_heading_context_across_a_split() {
    let text = "# A\n\nbody1\n\n## B\n\nbody2";

    let result = partition_markdown(text, words, &options(2));

    let expected = vec!["# A\n\nbody1\n", "# A\n\n## B\n\nbody2\n"];
    assert_eq!(result, expected);
}

#[test]
fn same_depth_headings_replace_and_shallower_headings_clear_context() {
    let text = "# A\n\nb1\n\n## B\n\nb2\n\n## C\n\nb3\n\n# D\n\nb4";

    let result = partition_markdown(text, words, &options(2));

    let expected = vec![
        "# A\n\nb1\n",
        "# A\n\n## B\n\nb2\n",
        "# A\n\n## C\n\nb3\n",
        "# D\n\nb4\n",
    ];
    assert_eq!(result, expected);
}

#[test]
fn block_exactly_filling_the_budget_is_kept() {
    let text = "a b c\n\nd e f";

    let result = partition_markdown(text, words, &options(6));

    assert_eq!(result, vec!["a b c\n\nd e f\n"]);
}

#[test]
fn body_content_stays_within_budget_and_is_covered_once() {
    let text = "# Section one\n\n\
        The quick brown fox jumps over the lazy dog.\n\n\
        Pack my box with five dozen liquor jugs.\n\n\
        ## Subsection\n\n\
        Sphinx of black quartz, judge my vow.\n\n\
        How vexingly quick daft zebras jump.";

    let budget = 16;
    let result = partition_markdown(text, words, &options(budget));

    assert!(result.len() > 1);

    // The budget bounds the accumulated body blocks; the heading context
    // prefixed to each partition sits on top of it.
    let body = |partition: &str| -> String {
        partition
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join(" ")
    };
    let mut body_words = 0;
    for partition in &result {
        let count = words(&body(partition));
        assert!(count <= budget, "partition over budget: {partition:?}");
        body_words += count;
    }

    // Every body word appears exactly once across the partitions.
    assert_eq!(body_words, 9 + 8 + 7 + 6);
}

#[test]
fn oversized_header_only_table_is_dropped() {
    let text = "| Header | Header | Header |\n| ------ | ------ | ------ |\n";

    // The whole table (header plus delimiter line) measures over budget,
    // the header row on its own does not; splitting yields no sub-table
    // with actual data rows, so nothing is emitted.
    let result = partition_markdown(text, space_split, &options(8));

    assert!(result.is_empty());
}
