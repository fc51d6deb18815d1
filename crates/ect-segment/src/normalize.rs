//! Whitespace and marker normalization for raw transcript text.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

static SPACE_TAB_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("space run pattern"));

static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("newline run pattern"));

// A Q&A marker immediately followed by an operator/analyst label would hide
// the label from the speaker scan; insert a sentence break between them.
static QA_LABEL_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(q\s*&\s*a)\s+(operator|analyst|analysts)\s*:").expect("qa label pattern")
});

/// Collapse all whitespace runs to single spaces and trim.
///
/// Idempotent: normalizing already-normalized text yields the same text.
/// Empty input yields an empty string.
pub fn normalize_transcript(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let cleaned = text.replace('\r', "\n");
    let cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ");
    cleaned.trim().to_string()
}

/// Normalization variant used before speaker-label scanning.
///
/// Keeps single line breaks (labels anchor on them) while collapsing
/// horizontal whitespace and blank-line runs, and restores a sentence
/// boundary between a Q&A marker and a directly following speaker label.
pub fn normalize_for_segmentation(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let cleaned = text.replace('\r', "\n");
    let cleaned = SPACE_TAB_RUN.replace_all(&cleaned, " ");
    let cleaned = NEWLINE_RUN.replace_all(&cleaned, "\n");
    let cleaned = QA_LABEL_BREAK.replace_all(&cleaned, "${1}. ${2}:");
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn collapses_whitespace_and_trims() {
        let text = "  Good\r\nafternoon\t\t and   welcome.\n\n\n";
        assert_eq!(normalize_transcript(text), "Good afternoon and welcome.");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize_transcript(""), "");
        assert_eq!(normalize_for_segmentation(""), "");
    }

    #[test]
    fn segmentation_variant_keeps_single_newlines() {
        let text = "Line one.\n\n\nLine two.";
        assert_eq!(normalize_for_segmentation(text), "Line one.\nLine two.");
    }

    #[test]
    fn qa_marker_is_separated_from_following_label() {
        let text = "remarks. Q&A Operator: begin";
        let normalized = normalize_for_segmentation(text);
        assert!(normalized.contains("Q&A. Operator:"));
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(text in "[ \\t\\r\\nA-Za-z0-9.:?!&\\-]{0,200}") {
            let once = normalize_transcript(&text);
            prop_assert_eq!(normalize_transcript(&once), once);
        }
    }
}
