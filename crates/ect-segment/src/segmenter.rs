//! Heuristic speaker-turn segmentation.
//!
//! Scans header-stripped, normalized text for "Capitalized Label:" speaker
//! markers, carves the text between consecutive markers into segments, and
//! tags each with role, section, and an optional leading timestamp. When no
//! valid labels exist the transcript degrades to a two-segment
//! prepared/Q&A fallback.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use ect_model::{Section, Segment, SegmentSource, SpeakerRole};

use crate::header::strip_header_sections;
use crate::normalize::normalize_for_segmentation;
use crate::roles::classify_speaker_role;
use crate::splitter::{qa_start_in_normalized, split_prepared_and_qa};

/// Speaker labels: a capitalized run of 2-71 label characters followed by a
/// colon, anchored at text start or after sentence-ending punctuation. The
/// anchor is consumed (no look-behind in the `regex` crate) and subtracted
/// back out when computing boundaries.
static SPEAKER_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\A|[.?!\n])\s*([A-Z][\w.'&/\- ]{1,70})\s*:\s*").expect("speaker label pattern")
});

/// Leading `[hh:mm:ss]` / `[mm:ss]` timestamp, brackets optional.
static LEADING_TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\[?(\d{1,2}:\d{2}(?::\d{2})?)\]?\s*").expect("timestamp pattern")
});

/// Labels that are section headers rather than speakers.
const IGNORE_LABELS: [&str; 5] = [
    "executives",
    "executive",
    "analysts",
    "q&a",
    "question-and-answer",
];

/// Short all-caps labels that are real speakers despite the acronym filter.
const KNOWN_SHORT_LABELS: [&str; 8] = ["CEO", "CFO", "COO", "CIO", "CTO", "CMO", "CSO", "IR"];

/// Convert "mm:ss" or "hh:mm:ss" into seconds since call start.
pub(crate) fn parse_time_to_seconds(time_str: &str) -> Option<f64> {
    let parts: Vec<i64> = time_str
        .split(':')
        .map(|part| part.parse::<i64>().ok())
        .collect::<Option<Vec<_>>>()?;
    match parts[..] {
        [minutes, seconds] => Some((minutes * 60 + seconds) as f64),
        [hours, minutes, seconds] => Some((hours * 3600 + minutes * 60 + seconds) as f64),
        _ => None,
    }
}

/// Strip a leading timestamp token, returning (display, seconds, remainder).
fn extract_timestamp(text: &str) -> (Option<String>, Option<f64>, String) {
    let Some(caps) = LEADING_TIMESTAMP.captures(text) else {
        return (None, None, text.to_string());
    };
    let ts = caps[1].to_string();
    let remainder = text[caps.get(0).expect("match").end()..].trim().to_string();
    let seconds = parse_time_to_seconds(&ts);
    (Some(ts), seconds, remainder)
}

fn is_valid_label(label: &str) -> bool {
    let cleaned = label.trim();
    if cleaned.is_empty() {
        return false;
    }
    let lower = cleaned.to_lowercase();
    if IGNORE_LABELS.contains(&lower.as_str()) {
        return false;
    }
    if matches!(lower.as_str(), "operator" | "analyst" | "analysts") {
        return true;
    }
    if KNOWN_SHORT_LABELS.contains(&cleaned.to_uppercase().as_str()) {
        return true;
    }
    if cleaned.len() > 70 {
        return false;
    }
    if cleaned.split_whitespace().count() > 5 {
        return false;
    }
    // Short all-caps acronyms (tickers, section markers) are not speakers.
    if cleaned.len() <= 4 && cleaned.chars().all(|ch| !ch.is_lowercase()) {
        return false;
    }
    cleaned.contains(' ') || cleaned.contains('.') || cleaned.contains('-')
}

struct LabelMatch {
    /// Boundary where the previous segment ends (anchor punctuation excluded).
    boundary: usize,
    /// Where this speaker's text begins (after the colon).
    body_start: usize,
    label: String,
}

fn find_speaker_labels(text: &str) -> Vec<LabelMatch> {
    SPEAKER_LABEL
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0).expect("match");
            let label = caps[1].trim().to_string();
            if !is_valid_label(&label) {
                return None;
            }
            // The anchor class consumed one punctuation char unless the match
            // sits at the very start of the text.
            let first = text[whole.start()..].chars().next();
            let anchor_len = match first {
                Some(ch @ ('.' | '?' | '!' | '\n')) => ch.len_utf8(),
                _ => 0,
            };
            Some(LabelMatch {
                boundary: whole.start() + anchor_len,
                body_start: whole.end(),
                label,
            })
        })
        .collect()
}

/// Two-segment prepared/Q&A split used when no speaker labels are found.
fn fallback_segments(text: &str) -> Vec<Segment> {
    let (prepared, qa) = split_prepared_and_qa(text);
    let mut segments = Vec::new();
    if !prepared.is_empty() {
        segments.push(Segment {
            segment_index: 0,
            speaker_name: "Unknown".to_string(),
            speaker_role: SpeakerRole::Other,
            section: Section::Prepared,
            start_char: 0,
            end_char: prepared.len(),
            text: prepared.clone(),
            start_time: None,
            end_time: None,
            start_time_seconds: None,
            end_time_seconds: None,
            source: SegmentSource::Fallback,
        });
    }
    if !qa.is_empty() {
        segments.push(Segment {
            segment_index: segments.len(),
            speaker_name: "Unknown".to_string(),
            speaker_role: SpeakerRole::Other,
            section: Section::Qa,
            start_char: prepared.len(),
            end_char: prepared.len() + qa.len(),
            text: qa,
            start_time: None,
            end_time: None,
            start_time_seconds: None,
            end_time_seconds: None,
            source: SegmentSource::Fallback,
        });
    }
    segments
}

/// Split a transcript into speaker segments using heuristic labels.
///
/// Executive/analyst name lists (from the transcript's own header) sharpen
/// role classification; pass empty slices when unavailable.
pub fn segment_transcript_text(
    text: &str,
    executive_names: &[String],
    analyst_names: &[String],
) -> Vec<Segment> {
    let normalized = normalize_for_segmentation(text);
    let normalized = strip_header_sections(&normalized);
    let qa_start = qa_start_in_normalized(&normalized);
    let labels = find_speaker_labels(&normalized);

    if labels.is_empty() {
        debug!("no valid speaker labels; using prepared/qa fallback split");
        return fallback_segments(&normalized);
    }

    let mut segments = Vec::new();
    for (idx, label) in labels.iter().enumerate() {
        let start = label.body_start;
        let end = labels
            .get(idx + 1)
            .map(|next| next.boundary)
            .unwrap_or(normalized.len());
        let segment_text = normalized[start..end].trim();
        if segment_text.is_empty() {
            continue;
        }

        let (start_time, start_time_seconds, cleaned_text) = extract_timestamp(segment_text);
        let speaker_role = classify_speaker_role(&label.label, executive_names, analyst_names);
        let section = match qa_start {
            Some(boundary) if start >= boundary => Section::Qa,
            _ => Section::Prepared,
        };
        segments.push(Segment {
            segment_index: segments.len(),
            speaker_name: label.label.clone(),
            speaker_role,
            section,
            text: cleaned_text,
            start_char: start,
            end_char: end,
            start_time,
            end_time: None,
            start_time_seconds,
            end_time_seconds: None,
            source: SegmentSource::Heuristic,
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minute_and_hour_timestamps() {
        assert_eq!(parse_time_to_seconds("01:23"), Some(83.0));
        assert_eq!(parse_time_to_seconds("00:01:23"), Some(83.0));
        assert_eq!(parse_time_to_seconds("1:02:03"), Some(3723.0));
        assert_eq!(parse_time_to_seconds("abc"), None);
    }

    #[test]
    fn extracts_bracketed_timestamp() {
        let (ts, seconds, rest) = extract_timestamp("[00:01:23] What about guidance?");
        assert_eq!(ts.as_deref(), Some("00:01:23"));
        assert_eq!(seconds, Some(83.0));
        assert_eq!(rest, "What about guidance?");
    }

    #[test]
    fn label_validity_rules() {
        assert!(is_valid_label("Operator"));
        assert!(is_valid_label("Jane Doe"));
        assert!(is_valid_label("CEO"));
        assert!(is_valid_label("J. Smith"));
        assert!(!is_valid_label(""));
        assert!(!is_valid_label("Executives"));
        assert!(!is_valid_label("Q&A"));
        assert!(!is_valid_label("NYSE")); // short all-caps acronym
        assert!(!is_valid_label("One Two Three Four Five Six")); // too many words
        assert!(!is_valid_label("Single")); // no space, period, or hyphen
    }

    #[test]
    fn carves_segments_between_labels() {
        let text = "Operator: Welcome to the call. Jane Doe: Thanks, everyone.";
        let segments = segment_transcript_text(text, &[], &[]);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].speaker_name, "Operator");
        assert_eq!(segments[0].speaker_role, SpeakerRole::Operator);
        assert_eq!(segments[0].text, "Welcome to the call.");
        assert_eq!(segments[1].speaker_name, "Jane Doe");
        assert_eq!(segments[1].text, "Thanks, everyone.");
        assert!(segments.iter().all(|s| s.source == SegmentSource::Heuristic));
    }

    #[test]
    fn no_labels_falls_back_to_two_segments() {
        let text = "Opening remarks only. Then a Question-and-Answer Session followed.";
        let segments = segment_transcript_text(text, &[], &[]);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].section, Section::Prepared);
        assert_eq!(segments[0].speaker_name, "Unknown");
        assert_eq!(segments[0].source, SegmentSource::Fallback);
        assert_eq!(segments[1].section, Section::Qa);
    }

    #[test]
    fn no_labels_no_marker_yields_single_prepared_segment() {
        let segments = segment_transcript_text("Just remarks with nothing else.", &[], &[]);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].section, Section::Prepared);
        assert_eq!(segments[0].speaker_role, SpeakerRole::Other);
    }

    #[test]
    fn empty_text_yields_no_segments() {
        assert!(segment_transcript_text("", &[], &[]).is_empty());
    }

    #[test]
    fn segment_indexes_are_strictly_increasing() {
        let text = "Operator: One. Jane Doe: Two. Analyst: Three.";
        let segments = segment_transcript_text(text, &[], &[]);
        for (idx, segment) in segments.iter().enumerate() {
            assert_eq!(segment.segment_index, idx);
        }
    }
}
