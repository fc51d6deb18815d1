//! Tabular views over derived features.
//!
//! Two frames cover the two natural grains: one row per segment (long form,
//! keyed by `event_id`) and one row per event (wide form, with list-valued
//! fields JSON-encoded so the frames stay Parquet-friendly).

use anyhow::Result;
use polars::prelude::*;
use serde::Serialize;

use ect_signal::SignalKind;

use crate::pipeline::EventFeatures;

fn json_column<T: Serialize>(values: &[T]) -> Result<String> {
    Ok(serde_json::to_string(values)?)
}

fn iso_date(features: &EventFeatures) -> Option<String> {
    features
        .earnings_date
        .map(|date| date.format("%Y-%m-%d").to_string())
}

/// One row per segment across all events, ordered by event then
/// `segment_index`.
pub fn segments_frame(events: &[EventFeatures]) -> Result<DataFrame> {
    let mut event_id = Vec::new();
    let mut ticker = Vec::new();
    let mut company = Vec::new();
    let mut earnings_date = Vec::new();
    let mut year = Vec::new();
    let mut quarter = Vec::new();
    let mut segment_index = Vec::new();
    let mut speaker_name = Vec::new();
    let mut speaker_role = Vec::new();
    let mut section = Vec::new();
    let mut source = Vec::new();
    let mut text = Vec::new();
    let mut start_char = Vec::new();
    let mut end_char = Vec::new();
    let mut start_time = Vec::new();
    let mut end_time = Vec::new();
    let mut start_time_seconds = Vec::new();
    let mut end_time_seconds = Vec::new();

    for features in events {
        for segment in &features.segments {
            event_id.push(features.event_id.clone());
            ticker.push(features.ticker.clone());
            company.push(features.company.clone());
            earnings_date.push(iso_date(features));
            year.push(features.year);
            quarter.push(features.quarter);
            segment_index.push(segment.segment_index as u32);
            speaker_name.push(segment.speaker_name.clone());
            speaker_role.push(segment.speaker_role.as_str());
            section.push(segment.section.as_str());
            source.push(segment.source.as_str());
            text.push(segment.text.clone());
            start_char.push(segment.start_char as u32);
            end_char.push(segment.end_char as u32);
            start_time.push(segment.start_time.clone());
            end_time.push(segment.end_time.clone());
            start_time_seconds.push(segment.start_time_seconds);
            end_time_seconds.push(segment.end_time_seconds);
        }
    }

    DataFrame::new(vec![
        Column::new("event_id".into(), event_id),
        Column::new("ticker".into(), ticker),
        Column::new("company".into(), company),
        Column::new("earnings_date".into(), earnings_date),
        Column::new("year".into(), year),
        Column::new("quarter".into(), quarter),
        Column::new("segment_index".into(), segment_index),
        Column::new("speaker_name".into(), speaker_name),
        Column::new("speaker_role".into(), speaker_role),
        Column::new("section".into(), section),
        Column::new("source".into(), source),
        Column::new("text".into(), text),
        Column::new("start_char".into(), start_char),
        Column::new("end_char".into(), end_char),
        Column::new("start_time".into(), start_time),
        Column::new("end_time".into(), end_time),
        Column::new("start_time_seconds".into(), start_time_seconds),
        Column::new("end_time_seconds".into(), end_time_seconds),
    ])
    .map_err(Into::into)
}

/// One row per event: keys, section texts, header metadata, signal features,
/// and Q&A lexicon rates. Sentiment columns appear only when at least one
/// event was scored.
pub fn events_frame(events: &[EventFeatures]) -> Result<DataFrame> {
    let mut columns = vec![
        Column::new(
            "event_id".into(),
            events
                .iter()
                .map(|e| e.event_id.clone())
                .collect::<Vec<_>>(),
        ),
        Column::new(
            "ticker".into(),
            events.iter().map(|e| e.ticker.clone()).collect::<Vec<_>>(),
        ),
        Column::new(
            "company".into(),
            events
                .iter()
                .map(|e| e.company.clone())
                .collect::<Vec<_>>(),
        ),
        Column::new(
            "earnings_date".into(),
            events.iter().map(iso_date).collect::<Vec<_>>(),
        ),
        Column::new(
            "year".into(),
            events.iter().map(|e| e.year).collect::<Vec<_>>(),
        ),
        Column::new(
            "quarter".into(),
            events.iter().map(|e| e.quarter).collect::<Vec<_>>(),
        ),
        Column::new(
            "prepared_text".into(),
            events
                .iter()
                .map(|e| e.prepared_text.clone())
                .collect::<Vec<_>>(),
        ),
        Column::new(
            "qa_text".into(),
            events
                .iter()
                .map(|e| e.qa_text.clone())
                .collect::<Vec<_>>(),
        ),
        Column::new(
            "executive_list_raw".into(),
            events
                .iter()
                .map(|e| e.meta.executive_list_raw.clone())
                .collect::<Vec<_>>(),
        ),
        Column::new(
            "analyst_list_raw".into(),
            events
                .iter()
                .map(|e| e.meta.analyst_list_raw.clone())
                .collect::<Vec<_>>(),
        ),
        Column::new(
            "executive_names".into(),
            events
                .iter()
                .map(|e| json_column(&e.meta.executive_names))
                .collect::<Result<Vec<_>>>()?,
        ),
        Column::new(
            "analyst_names".into(),
            events
                .iter()
                .map(|e| json_column(&e.meta.analyst_names))
                .collect::<Result<Vec<_>>>()?,
        ),
        Column::new(
            "executive_count".into(),
            events
                .iter()
                .map(|e| e.meta.executive_count() as u32)
                .collect::<Vec<_>>(),
        ),
        Column::new(
            "analyst_count".into(),
            events
                .iter()
                .map(|e| e.meta.analyst_count() as u32)
                .collect::<Vec<_>>(),
        ),
        Column::new(
            "segment_count".into(),
            events
                .iter()
                .map(|e| e.segments.len() as u32)
                .collect::<Vec<_>>(),
        ),
        Column::new(
            "speaker_count".into(),
            events
                .iter()
                .map(|e| e.speaker_count() as u32)
                .collect::<Vec<_>>(),
        ),
        Column::new(
            "has_timestamps".into(),
            events
                .iter()
                .map(EventFeatures::has_timestamps)
                .collect::<Vec<_>>(),
        ),
    ];

    for kind in SignalKind::ALL {
        let summaries: Vec<_> = events.iter().map(|e| e.signals.summary(kind)).collect();
        columns.push(Column::new(
            format!("{kind}_count").into(),
            summaries.iter().map(|s| s.count as u32).collect::<Vec<_>>(),
        ));
        columns.push(Column::new(
            format!("{kind}_flag").into(),
            summaries.iter().map(|s| s.flag).collect::<Vec<_>>(),
        ));
        columns.push(Column::new(
            format!("{kind}_phrases").into(),
            summaries
                .iter()
                .map(|s| json_column(&s.phrases))
                .collect::<Result<Vec<_>>>()?,
        ));
        columns.push(Column::new(
            format!("{kind}_snippets").into(),
            summaries
                .iter()
                .map(|s| json_column(&s.snippets))
                .collect::<Result<Vec<_>>>()?,
        ));
    }
    columns.push(Column::new(
        "signal_total_count".into(),
        events
            .iter()
            .map(|e| e.signals.total_count as u32)
            .collect::<Vec<_>>(),
    ));
    columns.push(Column::new(
        "signal_types_present".into(),
        events
            .iter()
            .map(|e| json_column(&e.signals.types_present))
            .collect::<Result<Vec<_>>>()?,
    ));

    columns.push(Column::new(
        "qa_word_count".into(),
        events
            .iter()
            .map(|e| e.stats.word_count as u32)
            .collect::<Vec<_>>(),
    ));
    columns.push(Column::new(
        "qa_hedge_terms".into(),
        events
            .iter()
            .map(|e| e.stats.hedge_terms as u32)
            .collect::<Vec<_>>(),
    ));
    columns.push(Column::new(
        "qa_risk_terms".into(),
        events
            .iter()
            .map(|e| e.stats.risk_terms as u32)
            .collect::<Vec<_>>(),
    ));
    columns.push(Column::new(
        "qa_hedge_rate".into(),
        events
            .iter()
            .map(|e| e.stats.hedge_rate)
            .collect::<Vec<_>>(),
    ));
    columns.push(Column::new(
        "qa_risk_rate".into(),
        events.iter().map(|e| e.stats.risk_rate).collect::<Vec<_>>(),
    ));

    if events.iter().any(|e| e.sentiment.is_some()) {
        let sentiment: Vec<_> = events.iter().map(|e| e.sentiment).collect();
        columns.push(Column::new(
            "prep_sent_pos".into(),
            sentiment
                .iter()
                .map(|s| s.map(|v| v.prepared.positive))
                .collect::<Vec<_>>(),
        ));
        columns.push(Column::new(
            "prep_sent_neg".into(),
            sentiment
                .iter()
                .map(|s| s.map(|v| v.prepared.negative))
                .collect::<Vec<_>>(),
        ));
        columns.push(Column::new(
            "prep_sent_neu".into(),
            sentiment
                .iter()
                .map(|s| s.map(|v| v.prepared.neutral))
                .collect::<Vec<_>>(),
        ));
        columns.push(Column::new(
            "prep_sent_score".into(),
            sentiment
                .iter()
                .map(|s| s.map(|v| v.prepared.net()))
                .collect::<Vec<_>>(),
        ));
        columns.push(Column::new(
            "qa_sent_pos".into(),
            sentiment
                .iter()
                .map(|s| s.map(|v| v.qa.positive))
                .collect::<Vec<_>>(),
        ));
        columns.push(Column::new(
            "qa_sent_neg".into(),
            sentiment
                .iter()
                .map(|s| s.map(|v| v.qa.negative))
                .collect::<Vec<_>>(),
        ));
        columns.push(Column::new(
            "qa_sent_neu".into(),
            sentiment
                .iter()
                .map(|s| s.map(|v| v.qa.neutral))
                .collect::<Vec<_>>(),
        ));
        columns.push(Column::new(
            "qa_sent_score".into(),
            sentiment
                .iter()
                .map(|s| s.map(|v| v.qa.net()))
                .collect::<Vec<_>>(),
        ));
        columns.push(Column::new(
            "tone_shift".into(),
            sentiment
                .iter()
                .map(|s| s.map(|v| v.tone_shift))
                .collect::<Vec<_>>(),
        ));
    }

    DataFrame::new(columns).map_err(Into::into)
}
