pub mod error;
pub mod event;
pub mod metadata;
pub mod segment;

pub use error::{ModelError, Result};
pub use event::{EventRecord, RawTurn};
pub use metadata::TranscriptMeta;
pub use segment::{Section, Segment, SegmentSource, SpeakerRole};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_serializes() {
        let segment = Segment {
            segment_index: 0,
            speaker_name: "Jane Doe".to_string(),
            speaker_role: SpeakerRole::Management,
            section: Section::Prepared,
            text: "Prepared remarks go here.".to_string(),
            start_char: 12,
            end_char: 37,
            start_time: None,
            end_time: None,
            start_time_seconds: None,
            end_time_seconds: None,
            source: SegmentSource::Heuristic,
        };
        let json = serde_json::to_string(&segment).expect("serialize segment");
        let round: Segment = serde_json::from_str(&json).expect("deserialize segment");
        assert_eq!(round.speaker_role, SpeakerRole::Management);
        assert_eq!(round.section, Section::Prepared);
        assert_eq!(round.source, SegmentSource::Heuristic);
    }

    #[test]
    fn event_record_parses_minimal_input() {
        let json = r#"{"ticker": "ABC", "transcript": "Intro. Q&A Analyst: Hello"}"#;
        let record: EventRecord = serde_json::from_str(json).expect("deserialize event");
        assert_eq!(record.ticker, "ABC");
        assert!(record.segments.is_none());
        assert_eq!(record.event_id(), "ABC|unknown");
    }
}
