//! Markdown segmentation for responses that arrive unsegmented.

use std::sync::LazyLock;

use regex::Regex;

/// `---`, `***`, `___` and longer runs.
static RULE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*_]{3,}\s*$").unwrap());

static BLANK_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

const STRUCTURAL_PREFIXES: &[&str] = &["---", "***", "___", "#", "```", "<!--", "|", "!["];

/// Split on blank lines, trimming each paragraph and dropping empties.
pub fn split_paragraphs(markdown: &str) -> Vec<String> {
    BLANK_LINE_RE
        .split(markdown.trim())
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Line scanner that keeps fence markers, lines inside fenced code, and
/// horizontal rules as segments of their own. Blank lines end a paragraph.
pub fn split_with_basic_processing(markdown: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut in_code_block = false;

    fn flush(paragraph: &mut Vec<&str>, segments: &mut Vec<String>) {
        if !paragraph.is_empty() {
            segments.push(paragraph.join("\n"));
            paragraph.clear();
        }
    }

    for line in markdown.split('\n') {
        let line = line.trim_end();
        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            in_code_block = !in_code_block;
            flush(&mut paragraph, &mut segments);
            segments.push(line.to_string());
            continue;
        }
        if in_code_block {
            segments.push(line.to_string());
            continue;
        }
        if RULE_RE.is_match(trimmed) {
            flush(&mut paragraph, &mut segments);
            segments.push(line.to_string());
            continue;
        }
        if trimmed.is_empty() {
            flush(&mut paragraph, &mut segments);
            continue;
        }
        paragraph.push(line);
    }
    flush(&mut paragraph, &mut segments);

    segments
}

/// Single-line headings, rules, fences, HTML comments, table rows and images.
///
/// Blank text counts as structural. Multi-line segments never do.
pub fn is_structural(text: &str) -> bool {
    if text.trim().is_empty() {
        return true;
    }
    if text.contains('\n') {
        return false;
    }
    let trimmed = text.trim();
    STRUCTURAL_PREFIXES.iter().any(|p| trimmed.starts_with(p)) || RULE_RE.is_match(trimmed)
}
