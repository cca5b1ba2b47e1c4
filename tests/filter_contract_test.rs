//! Cross-crate contract tests: the core truncation rules must hold unchanged
//! when the filter is invoked from a Tera template.

use serde_json::json;
use tera::{Context, Tera};
use truncwords::{
    register_filters, truncate_words_and_keep_lines, TemplateEngine, WordLimit, DEFAULT_MARKER,
};

fn tera() -> Tera {
    let mut tera = Tera::default();
    register_filters(&mut tera);
    tera
}

fn render(template: &str, context: serde_json::Value) -> String {
    let context = Context::from_value(context).unwrap();
    tera().render_str(template, &context).unwrap()
}

/// (input, words, marker, expected)
const CASES: &[(&str, i64, &str, &str)] = &[
    ("", 1, "...", ""),
    ("", 15, "...", ""),
    ("line one\nline two\n", 2, "...", "line one\n..."),
    ("noSpacesLine\nanother", 1, "~", "noSpacesLine\n~"),
    ("a b c d e", 0, "...", "a..."),
    ("one two", 3, "...", "one two"),
    ("\n\nfirst line\n\nsecond line", 3, "…", "first line\n\n second…"),
    ("a  b c", 2, "...", "a ..."),
];

#[test]
fn test_core_cases() {
    for &(input, words, marker, expected) in CASES {
        let out = truncate_words_and_keep_lines(Some(input), WordLimit::new(words), marker);
        assert_eq!(out.as_deref(), Some(expected), "input {input:?}, words {words}");
    }
}

#[test]
fn test_tera_matches_core() {
    for &(input, words, marker, expected) in CASES {
        let out = render(
            "{{ body | truncate_words_and_keep_lines(words=words, marker=marker) }}",
            json!({ "body": input, "words": words, "marker": marker }),
        );
        assert_eq!(out, expected, "input {input:?}, words {words}");
    }
}

#[test]
fn test_untruncated_output_is_verbatim() {
    let inputs = [
        "spaced   out\ttext",
        "\r\n\r\nwindows\r\nlines\r\n",
        "trailing space \n",
        "  leading",
    ];
    for input in inputs {
        let out = truncate_words_and_keep_lines(Some(input), WordLimit::new(100), DEFAULT_MARKER);
        assert_eq!(out.as_deref(), Some(input));
    }
}

#[test]
fn test_truncated_output_ends_with_marker_only() {
    let out = render(
        "{{ body | truncate_words_and_keep_lines(words=2, marker=\"[cut]\") }}",
        json!({ "body": "alpha beta gamma delta" }),
    );
    assert_eq!(out, "alpha beta[cut]");
}

#[test]
fn test_default_arguments() {
    let body = (1..=16).map(|n| format!("w{n}")).collect::<Vec<_>>().join(" ");
    let out = render(
        "{{ body | truncate_words_and_keep_lines }}",
        json!({ "body": body }),
    );
    let expected = (1..=15).map(|n| format!("w{n}")).collect::<Vec<_>>().join(" ");
    assert_eq!(out, format!("{expected}..."));
}

#[test]
fn test_string_word_limit_in_template() {
    let out = render(
        "{{ body | truncate_words_and_keep_lines(words=\"abc\") }}",
        json!({ "body": "a b c d e" }),
    );
    assert_eq!(out, "a...");
}

#[test]
fn test_null_body_renders_nothing() {
    let out = render(
        "<{{ body | truncate_words_and_keep_lines }}>",
        json!({ "body": null }),
    );
    assert_eq!(out, "<>");
}

#[test]
fn test_classic_filter_alongside() {
    let out = render(
        "{{ body | truncatewords(words=2) }}|{{ body | truncate_words_and_keep_lines(words=2) }}",
        json!({ "body": "first\nsecond third" }),
    );
    assert_eq!(out, "first second...|first\n second...");
}

#[test]
fn test_engine_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("summary.txt.tera"),
        "{{ body | truncate_words_and_keep_lines(words=1, marker=\"~\") }}",
    )
    .unwrap();

    let engine = TemplateEngine::load(dir.path()).unwrap();
    let mut context = Context::new();
    context.insert("body", "noSpacesLine\nanother");

    let rendered = engine.render_all(&context).unwrap();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].path, "summary.txt");
    assert_eq!(rendered[0].content, "noSpacesLine\n~");
}
