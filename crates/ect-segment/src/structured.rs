//! Structured-input adapter: pre-segmented speaker turns.
//!
//! Data sources that already split calls into speaker turns use heterogeneous
//! field names. A fixed candidate-order search resolves each logical field,
//! then role and section are re-derived with the shared classifier. Section
//! tracking is an explicit one-way prepared -> qa state machine driven by
//! role events instead of character offsets.

use serde_json::Value;
use tracing::debug;

use ect_model::{EventRecord, RawTurn, Section, Segment, SegmentSource, SpeakerRole};

use crate::roles::classify_speaker_role;
use crate::segmenter::parse_time_to_seconds;
use crate::splitter::split_prepared_and_qa;

const TEXT_FIELDS: [&str; 4] = ["text", "content", "segment_text", "body"];
const ROLE_FIELDS: [&str; 5] = ["speaker_role", "speaker", "speaker_name", "role", "speaker_title"];
const NAME_FIELDS: [&str; 3] = ["speaker_name", "speaker", "speaker_role"];
const START_TIME_FIELDS: [&str; 4] = ["timestamp", "start_time", "start", "begin"];
const END_TIME_FIELDS: [&str; 3] = ["end_time", "end", "finish"];

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        _ => None,
    }
}

/// First candidate field present with a scalar value, in declared order.
fn resolve_field(turn: &RawTurn, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find_map(|field| turn.get(*field).and_then(value_to_string))
}

/// Like [`resolve_field`], but skips empty/whitespace-only values.
fn resolve_non_empty(turn: &RawTurn, candidates: &[&str]) -> Option<String> {
    candidates.iter().find_map(|field| {
        turn.get(*field)
            .and_then(value_to_string)
            .filter(|value| !value.trim().is_empty())
    })
}

/// Normalize structured turns into the common [`Segment`] schema.
///
/// Blank-text turns are dropped. Character offsets are meaningless on this
/// path and emitted as zero. The prepared -> qa transition fires on the first
/// analyst turn, or on an operator turn once at least one segment has been
/// emitted (an operator's very first turn is treated as a greeting, not the
/// Q&A hand-off; a tunable heuristic).
pub fn segments_from_structured(
    turns: &[RawTurn],
    executive_names: &[String],
    analyst_names: &[String],
) -> Vec<Segment> {
    let mut qa_started = false;
    let mut output: Vec<Segment> = Vec::new();

    for turn in turns {
        let text = resolve_field(turn, &TEXT_FIELDS).unwrap_or_default();
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        let role_label = resolve_field(turn, &ROLE_FIELDS).unwrap_or_default();
        let speaker_role = classify_speaker_role(&role_label, executive_names, analyst_names);
        if speaker_role == SpeakerRole::Analyst {
            qa_started = true;
        }
        if speaker_role == SpeakerRole::Operator && !output.is_empty() {
            qa_started = true;
        }
        let section = if qa_started { Section::Qa } else { Section::Prepared };

        let start_time = resolve_non_empty(turn, &START_TIME_FIELDS);
        let end_time = resolve_non_empty(turn, &END_TIME_FIELDS);
        let speaker_name = resolve_field(turn, &NAME_FIELDS).unwrap_or_else(|| role_label.clone());

        output.push(Segment {
            segment_index: output.len(),
            speaker_name,
            speaker_role,
            section,
            text: text.to_string(),
            start_char: 0,
            end_char: 0,
            start_time_seconds: start_time.as_deref().and_then(parse_time_to_seconds),
            end_time_seconds: end_time.as_deref().and_then(parse_time_to_seconds),
            start_time,
            end_time,
            source: SegmentSource::Structured,
        });
    }
    output
}

/// Concatenate structured turns into `(prepared_text, qa_text)`.
///
/// Operator turns mark section boundaries but are excluded from both text
/// blocks; here the transition fires once any prepared text exists.
fn split_by_turns(turns: &[RawTurn]) -> (String, String) {
    let mut prepared_parts: Vec<String> = Vec::new();
    let mut qa_parts: Vec<String> = Vec::new();
    let mut qa_started = false;

    for turn in turns {
        let text = match resolve_field(turn, &TEXT_FIELDS) {
            Some(value) => value,
            None => continue,
        };
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        let role_label = resolve_field(turn, &ROLE_FIELDS).unwrap_or_default();
        match classify_speaker_role(&role_label, &[], &[]) {
            SpeakerRole::Analyst => {
                qa_started = true;
                qa_parts.push(text.to_string());
            }
            SpeakerRole::Operator => {
                if !prepared_parts.is_empty() {
                    qa_started = true;
                }
            }
            _ => {
                if qa_started {
                    qa_parts.push(text.to_string());
                } else {
                    prepared_parts.push(text.to_string());
                }
            }
        }
    }

    (
        prepared_parts.join("\n").trim().to_string(),
        qa_parts.join("\n").trim().to_string(),
    )
}

/// Return `(prepared_text, qa_text)`, preferring structured segments when the
/// record carries them and falling back to the heuristic transcript split.
pub fn extract_sections(record: &EventRecord) -> (String, String) {
    if let Some(turns) = record.structured_turns() {
        return split_by_turns(turns);
    }
    debug!(ticker = %record.ticker, "no structured segments; splitting raw transcript");
    split_prepared_and_qa(record.transcript_text())
}
