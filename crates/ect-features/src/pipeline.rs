//! Per-event feature derivation: segmentation, section split, signal scan,
//! lexicon rates, and optional sentiment.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use ect_model::{EventRecord, Segment, TranscriptMeta};
use ect_segment::{
    extract_sections, extract_transcript_metadata, segment_transcript_text,
    segments_from_structured,
};
use ect_signal::{SignalFeatures, TextStats, compute_text_stats, extract_signal_features};

use crate::sentiment::{SectionSentiment, SentimentScorer};

/// Which section feeds the signal pattern scan. Lexicon rates always come
/// from the Q&A section, where hedging language concentrates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignalText {
    #[default]
    Qa,
    Prepared,
}

impl SignalText {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalText::Qa => "qa_text",
            SignalText::Prepared => "prepared_text",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    pub signal_text: SignalText,
}

/// Everything derived from one event record.
#[derive(Debug, Clone, Serialize)]
pub struct EventFeatures {
    pub event_id: String,
    pub ticker: String,
    pub company: Option<String>,
    pub earnings_date: Option<NaiveDate>,
    pub year: Option<i32>,
    pub quarter: Option<u32>,
    pub meta: TranscriptMeta,
    pub segments: Vec<Segment>,
    pub prepared_text: String,
    pub qa_text: String,
    pub signals: SignalFeatures,
    /// Hedge/risk lexicon rates over the Q&A section.
    pub stats: TextStats,
    pub sentiment: Option<SectionSentiment>,
}

impl EventFeatures {
    /// Distinct non-empty speaker names across all segments.
    pub fn speaker_count(&self) -> usize {
        let mut names: Vec<&str> = self
            .segments
            .iter()
            .map(|segment| segment.speaker_name.as_str())
            .filter(|name| !name.is_empty())
            .collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    }

    pub fn has_timestamps(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| segment.start_time.is_some())
    }
}

/// Derive the full feature set for one event.
///
/// Structured turns win over the raw transcript for segmentation and the
/// section split; the header metadata always comes from the raw transcript.
pub fn process_event(
    record: &EventRecord,
    options: PipelineOptions,
    scorer: Option<&dyn SentimentScorer>,
) -> EventFeatures {
    let transcript = record.transcript_text();
    let meta = extract_transcript_metadata(transcript);

    let segments = match record.structured_turns() {
        Some(turns) => {
            segments_from_structured(turns, &meta.executive_names, &meta.analyst_names)
        }
        None => segment_transcript_text(transcript, &meta.executive_names, &meta.analyst_names),
    };

    let (prepared_text, qa_text) = extract_sections(record);
    let signal_source = match options.signal_text {
        SignalText::Qa => qa_text.as_str(),
        SignalText::Prepared => prepared_text.as_str(),
    };
    let signals = extract_signal_features(signal_source);
    let stats = compute_text_stats(&qa_text);
    let sentiment =
        scorer.map(|scorer| SectionSentiment::from_sections(scorer, &prepared_text, &qa_text));

    let event_id = record.event_id();
    debug!(
        event_id = %event_id,
        segments = segments.len(),
        signal_total = signals.total_count,
        "derived event features"
    );

    EventFeatures {
        event_id,
        ticker: record.ticker.clone(),
        company: record.company.clone(),
        earnings_date: record.earnings_date,
        year: record.year,
        quarter: record.quarter,
        meta,
        segments,
        prepared_text,
        qa_text,
        signals,
        stats,
        sentiment,
    }
}

/// Derive features for a batch of events in parallel, preserving input order.
pub fn process_events(
    records: &[EventRecord],
    options: PipelineOptions,
    scorer: Option<&dyn SentimentScorer>,
) -> Vec<EventFeatures> {
    records
        .par_iter()
        .map(|record| process_event(record, options, scorer))
        .collect()
}
