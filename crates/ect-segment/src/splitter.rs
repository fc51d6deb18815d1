//! Q&A section boundary detection.
//!
//! An ordered list of explicit Q&A markers is tried first; when none match,
//! weaker operator/analyst-turn cues are used. Callers treat "no boundary"
//! as an all-prepared transcript, never as an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::normalize_transcript;

/// Explicit Q&A-introduction markers, in priority order. The first pattern
/// that matches anywhere wins, at its earliest occurrence.
static QA_MARKERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)question[- ]and[- ]answer",
        r"(?i)question\s+and\s+answer",
        r"(?i)q\s*&\s*a",
        r"(?i)q&a",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("qa marker pattern"))
    .collect()
});

/// Operator/analyst cues that often introduce Q&A when no marker exists.
static QA_FALLBACK_CUES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(operator:|analyst\s+q:|analyst:)").expect("qa cue pattern"));

pub(crate) fn qa_start_in_normalized(text: &str) -> Option<usize> {
    for pattern in QA_MARKERS.iter() {
        if let Some(found) = pattern.find(text) {
            return Some(found.start());
        }
    }
    QA_FALLBACK_CUES.find(text).map(|found| found.start())
}

/// Return the byte offset where Q&A likely starts in the normalized form of
/// `text`, or `None` when no marker or cue is found.
pub fn find_qa_start(text: &str) -> Option<usize> {
    qa_start_in_normalized(&normalize_transcript(text))
}

/// Split a raw transcript into `(prepared_text, qa_text)`.
///
/// The Q&A half is empty when no boundary is found.
pub fn split_prepared_and_qa(text: &str) -> (String, String) {
    let normalized = normalize_transcript(text);
    match qa_start_in_normalized(&normalized) {
        Some(index) => {
            let prepared = normalized[..index].trim().to_string();
            let qa = normalized[index..].trim().to_string();
            (prepared, qa)
        }
        None => (normalized, String::new()),
    }
}
