//! Transcript header parsing: "Executives:" / "Analysts:" name lists.
//!
//! Header blocks run from their marker up to the next recognized header
//! keyword (or end of text). The `regex` crate has no look-ahead, so block
//! ends are located with a separate terminator scan instead of the
//! non-greedy-plus-lookahead idiom.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use ect_model::TranscriptMeta;

use crate::normalize::normalize_transcript;

static EXEC_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)executives?\s*:\s*").expect("exec header pattern"));

static ANALYST_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)analysts\s*:\s*").expect("analyst header pattern"));

static EXEC_TERMINATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(analysts?\s*:|operator\s*:|q\s*&\s*a|question[- ]and[- ]answer)")
        .expect("exec terminator pattern")
});

static ANALYST_TERMINATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(operator\s*:|q\s*&\s*a|question[- ]and[- ]answer)")
        .expect("analyst terminator pattern")
});

/// "Name - Title" pairs inside a header block. Only the name is kept; the
/// required non-space after the dash rejects a dangling trailing dash.
static NAME_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z][A-Za-z.'\- ]+?)\s*-\s*\S").expect("name-dash pattern"));

static LIST_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[;|]").expect("list separator pattern"));

/// Locate a header block: full span (marker through body) and the body span.
fn header_block(text: &str, marker: &Regex, terminator: &Regex) -> Option<(Range<usize>, Range<usize>)> {
    let found = marker.find(text)?;
    let body_start = found.end();
    let body_end = terminator
        .find(&text[body_start..])
        .map(|t| body_start + t.start())
        .unwrap_or(text.len());
    Some((found.start()..body_end, body_start..body_end))
}

fn parse_people(body: &str) -> Vec<String> {
    let names: Vec<String> = NAME_DASH
        .captures_iter(body)
        .map(|cap| cap[1].trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    if !names.is_empty() {
        return names;
    }
    // No "Name - Title" pairs; treat the block as a bare separator-delimited list.
    LIST_SEPARATOR
        .split(body)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn extract_block(text: &str, marker: &Regex, terminator: &Regex) -> (String, Vec<String>) {
    match header_block(text, marker, terminator) {
        Some((_, body)) => {
            let raw = text[body].trim().to_string();
            let names = parse_people(&raw);
            (raw, names)
        }
        None => (String::new(), Vec::new()),
    }
}

/// Parse executive/analyst name lists from a transcript header when present.
///
/// Missing headers yield empty lists, never an error.
pub fn extract_transcript_metadata(text: &str) -> TranscriptMeta {
    let normalized = normalize_transcript(text);
    let (executive_list_raw, executive_names) =
        extract_block(&normalized, &EXEC_HEADER, &EXEC_TERMINATOR);
    let (analyst_list_raw, analyst_names) =
        extract_block(&normalized, &ANALYST_HEADER, &ANALYST_TERMINATOR);
    TranscriptMeta {
        executive_list_raw,
        analyst_list_raw,
        executive_names,
        analyst_names,
    }
}

/// Remove header blocks so their name lists cannot produce false speaker
/// matches during segmentation.
pub(crate) fn strip_header_sections(text: &str) -> String {
    let mut cleaned = text.to_string();
    while let Some((span, _)) = header_block(&cleaned, &EXEC_HEADER, &EXEC_TERMINATOR) {
        cleaned.replace_range(span, " ");
    }
    while let Some((span, _)) = header_block(&cleaned, &ANALYST_HEADER, &ANALYST_TERMINATOR) {
        cleaned.replace_range(span, " ");
    }
    normalize_transcript(&cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_title_pairs() {
        let text = "Executives: Jane Doe - CEO Analysts: John Smith - Big Bank Operator: Welcome.";
        let meta = extract_transcript_metadata(text);
        assert_eq!(meta.executive_names, vec!["Jane Doe"]);
        assert_eq!(meta.analyst_names, vec!["John Smith"]);
        assert_eq!(meta.executive_count(), 1);
        assert_eq!(meta.analyst_count(), 1);
        assert!(meta.executive_list_raw.contains("Jane Doe"));
    }

    #[test]
    fn semicolon_separated_pairs() {
        let text = "Executives: Jane Doe - CEO; Bob Roe - CFO Operator: Welcome.";
        let meta = extract_transcript_metadata(text);
        assert_eq!(meta.executive_names, vec!["Jane Doe", "Bob Roe"]);
    }

    #[test]
    fn bare_name_list_falls_back_to_separators() {
        let text = "Executives: Jane Doe; Bob Roe | Ann Poe Operator: Welcome.";
        let meta = extract_transcript_metadata(text);
        assert_eq!(meta.executive_names, vec!["Jane Doe", "Bob Roe", "Ann Poe"]);
    }

    #[test]
    fn missing_headers_yield_empty_lists() {
        let meta = extract_transcript_metadata("No header here at all.");
        assert!(meta.executive_names.is_empty());
        assert!(meta.analyst_names.is_empty());
        assert!(meta.executive_list_raw.is_empty());
    }

    #[test]
    fn strip_removes_both_blocks() {
        let text = "Executives: Jane Doe - CEO Analysts: John Smith - Big Bank Operator: Welcome. Jane Doe: Hello.";
        let stripped = strip_header_sections(&normalize_transcript(text));
        assert!(!stripped.contains("Executives"));
        assert!(!stripped.contains("Big Bank"));
        assert!(stripped.contains("Operator: Welcome."));
        assert!(stripped.contains("Jane Doe: Hello."));
    }
}
