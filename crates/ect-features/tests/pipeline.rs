//! End-to-end feature derivation over a small event batch.

use chrono::NaiveDate;
use serde_json::json;

use ect_features::{
    PipelineOptions, SentimentScore, SentimentScorer, events_frame, process_event, process_events,
    segments_frame,
};
use ect_model::{EventRecord, RawTurn};

const TRANSCRIPT: &str = "\
Executives: Jane Roe - Chief Executive Officer; Mark Day - CFO
Analysts: Sam Lee - Big Bank

Operator: Good morning and welcome to the Alpha Bio earnings call.
Jane Roe: Thank you. We completed enrollment in our Phase 3 trial and \
expect top-line data next quarter. We raised guidance for the full year.
Q&A
Operator: We will now take questions.
Sam Lee: Could you walk us through the FDA feedback? Any adverse events?
Mark Day: Nothing serious to report. We may see approximately two months of delay.";

fn text_record() -> EventRecord {
    EventRecord {
        ticker: "ALFA".to_string(),
        company: Some("Alpha Bio".to_string()),
        earnings_date: NaiveDate::from_ymd_opt(2024, 5, 7),
        year: Some(2024),
        quarter: Some(2),
        transcript: Some(TRANSCRIPT.to_string()),
        segments: None,
    }
}

fn turn(speaker: &str, role: &str, text: &str) -> RawTurn {
    let value = json!({ "speaker_name": speaker, "speaker_role": role, "text": text });
    match value {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}

fn structured_record() -> EventRecord {
    EventRecord {
        ticker: "BETA".to_string(),
        company: None,
        earnings_date: NaiveDate::from_ymd_opt(2024, 5, 8),
        year: Some(2024),
        quarter: Some(2),
        transcript: None,
        segments: Some(vec![
            turn("Operator", "operator", "Welcome to the Beta Pharma call."),
            turn("Ana Ruiz", "CEO", "We initiated the trial as planned."),
            turn("Lee Wong", "analyst", "Is the PDUFA date still on track?"),
        ]),
    }
}

struct WordBalance;

impl SentimentScorer for WordBalance {
    fn score(&self, text: &str) -> SentimentScore {
        let words = text.split_whitespace().count().max(1) as f64;
        let positive = text.matches("raised").count() as f64 / words;
        let negative = text.matches("delay").count() as f64 / words;
        SentimentScore {
            positive,
            negative,
            neutral: 1.0 - positive - negative,
        }
    }
}

#[test]
fn full_text_event_produces_sections_segments_and_signals() {
    let features = process_event(&text_record(), PipelineOptions::default(), None);

    assert_eq!(features.event_id, "ALFA|2024-05-07");
    assert_eq!(features.meta.executive_names.len(), 2);
    assert_eq!(features.meta.analyst_names, vec!["Sam Lee".to_string()]);
    assert!(features.segments.len() >= 4);
    assert!(!features.prepared_text.is_empty());
    assert!(features.qa_text.contains("FDA feedback"));

    // Q&A is the default signal source.
    assert!(features.signals.regulatory_mention.flag);
    assert!(features.signals.safety_signal.flag);
    assert!(!features.signals.guidance_change.flag);

    // "may", "approximately" hedge; "fda", "adverse events", "delay" risk.
    assert!(features.stats.hedge_terms >= 2);
    assert!(features.stats.risk_terms >= 3);
    assert!(features.stats.hedge_rate > 0.0);
}

#[test]
fn structured_event_flows_through_the_same_pipeline() {
    let features = process_event(&structured_record(), PipelineOptions::default(), None);

    assert_eq!(features.segments.len(), 3);
    assert!(
        features
            .segments
            .iter()
            .all(|s| s.source == ect_model::SegmentSource::Structured)
    );
    assert!(features.qa_text.contains("PDUFA"));
    assert!(features.signals.regulatory_mention.flag);
}

#[test]
fn sentiment_scorer_adds_tone_shift() {
    let scorer = WordBalance;
    let features = process_events(
        &[text_record(), structured_record()],
        PipelineOptions::default(),
        Some(&scorer),
    );

    let sentiment = features[0].sentiment.expect("scored event");
    // Prepared remarks raise guidance; Q&A mentions a delay.
    assert!(sentiment.prepared.net() > 0.0);
    assert!(sentiment.qa.net() < 0.0);
    assert!(sentiment.tone_shift < 0.0);
}

#[test]
fn frames_cover_the_batch() {
    let scorer = WordBalance;
    let records = vec![text_record(), structured_record()];
    let features = process_events(&records, PipelineOptions::default(), Some(&scorer));

    let events = events_frame(&features).unwrap();
    assert_eq!(events.height(), 2);
    assert!(events.column("tone_shift").is_ok());

    let segments = segments_frame(&features).unwrap();
    let expected: usize = features.iter().map(|f| f.segments.len()).sum();
    assert_eq!(segments.height(), expected);

    let sources = segments.column("source").unwrap().str().unwrap();
    assert!(sources.into_iter().flatten().any(|s| s == "structured"));
    assert!(sources.into_iter().flatten().any(|s| s == "heuristic"));
}

#[test]
fn event_frame_column_names_are_stable() {
    let features = process_events(&[text_record()], PipelineOptions::default(), None);
    let frame = events_frame(&features).unwrap();
    let names: Vec<&str> = frame.get_column_names_str();
    insta::assert_json_snapshot!(names, @r#"
    [
      "event_id",
      "ticker",
      "company",
      "earnings_date",
      "year",
      "quarter",
      "prepared_text",
      "qa_text",
      "executive_list_raw",
      "analyst_list_raw",
      "executive_names",
      "analyst_names",
      "executive_count",
      "analyst_count",
      "segment_count",
      "speaker_count",
      "has_timestamps",
      "trial_update_count",
      "trial_update_flag",
      "trial_update_phrases",
      "trial_update_snippets",
      "guidance_change_count",
      "guidance_change_flag",
      "guidance_change_phrases",
      "guidance_change_snippets",
      "safety_signal_count",
      "safety_signal_flag",
      "safety_signal_phrases",
      "safety_signal_snippets",
      "regulatory_mention_count",
      "regulatory_mention_flag",
      "regulatory_mention_phrases",
      "regulatory_mention_snippets",
      "signal_total_count",
      "signal_types_present",
      "qa_word_count",
      "qa_hedge_terms",
      "qa_risk_terms",
      "qa_hedge_rate",
      "qa_risk_rate"
    ]
    "#);
}
