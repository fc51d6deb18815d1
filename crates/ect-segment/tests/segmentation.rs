//! End-to-end segmentation over a realistic transcript.

use ect_model::{Section, SegmentSource, SpeakerRole};
use ect_segment::{extract_transcript_metadata, segment_transcript_text, split_prepared_and_qa};

const TRANSCRIPT: &str = "Executives: Jane Doe - CEO Analysts: John Smith - Big Bank \
     Operator: Welcome to the call. \
     Jane Doe: Prepared remarks go here. \
     Q&A Operator: We will begin the Q&A. \
     Analyst: [00:01:23] What about guidance? \
     Jane Doe: We raised guidance.";

#[test]
fn segments_full_call_with_metadata_and_timestamps() {
    let meta = extract_transcript_metadata(TRANSCRIPT);
    assert_eq!(meta.executive_names, vec!["Jane Doe"]);
    assert_eq!(meta.analyst_names, vec!["John Smith"]);

    let segments =
        segment_transcript_text(TRANSCRIPT, &meta.executive_names, &meta.analyst_names);

    assert!(!segments.is_empty(), "expected at least one segment");
    assert!(
        segments
            .iter()
            .any(|s| s.speaker_role == SpeakerRole::Operator)
    );
    assert!(segments.iter().any(|s| s.section == Section::Qa));
    assert!(
        segments
            .iter()
            .any(|s| s.start_time.as_deref() == Some("00:01:23"))
    );
    assert!(
        segments
            .iter()
            .any(|s| s.speaker_role == SpeakerRole::Management)
    );
    assert!(segments.iter().all(|s| s.source == SegmentSource::Heuristic));
}

#[test]
fn header_names_never_become_speakers() {
    let segments = segment_transcript_text(TRANSCRIPT, &[], &[]);
    // "John Smith" appears only in the stripped analyst header.
    assert!(segments.iter().all(|s| s.speaker_name != "John Smith"));
}

#[test]
fn sections_are_monotonic_once_qa_begins() {
    let segments = segment_transcript_text(TRANSCRIPT, &[], &[]);
    let first_qa = segments.iter().position(|s| s.section == Section::Qa);
    if let Some(first_qa) = first_qa {
        assert!(
            segments[first_qa..]
                .iter()
                .all(|s| s.section == Section::Qa)
        );
    }
}

#[test]
fn timestamp_text_is_stripped_from_segment_body() {
    let segments = segment_transcript_text(TRANSCRIPT, &[], &[]);
    let timed = segments
        .iter()
        .find(|s| s.start_time.is_some())
        .expect("one timed segment");
    assert!(timed.text.starts_with("What about guidance?"));
    assert_eq!(timed.start_time_seconds, Some(83.0));
}

#[test]
fn split_matches_segmenter_boundary_semantics() {
    let (prepared, qa) = split_prepared_and_qa(TRANSCRIPT);
    assert!(prepared.contains("Prepared remarks go here."));
    assert!(qa.contains("What about guidance?"));
}
