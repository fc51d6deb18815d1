use std::fs::{self, File};
use std::io::Read;
use std::time::Instant;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::ParquetWriter;
use tracing::{info, info_span, warn};

use ect_cli::input::read_events;
use ect_features::{
    EventFeatures, PipelineOptions, SignalText, events_frame, process_events, segments_frame,
};

use crate::cli::{FeaturesArgs, SignalsArgs, TextColumnArg};
use crate::summary::print_signal_report;
use crate::types::{EventPreview, FeaturesResult};

const PREVIEW_EVENTS: usize = 3;
const PREVIEW_CHARS: usize = 120;

pub fn run_features(args: &FeaturesArgs) -> Result<FeaturesResult> {
    let span = info_span!("features", events_file = %args.events_file.display());
    let _guard = span.enter();

    let records = read_events(&args.events_file)?;
    if records.is_empty() {
        warn!("events file contains no records");
    }

    let options = PipelineOptions {
        signal_text: match args.text_column {
            TextColumnArg::QaText => SignalText::Qa,
            TextColumnArg::PreparedText => SignalText::Prepared,
        },
    };

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("progress template")?,
    );
    progress.set_message(format!("deriving features for {} events", records.len()));
    progress.enable_steady_tick(std::time::Duration::from_millis(100));

    let start = Instant::now();
    let features = process_events(&records, options, None);
    progress.finish_and_clear();

    let segment_count: usize = features.iter().map(|f| f.segments.len()).sum();
    info!(
        event_count = features.len(),
        segment_count,
        signal_source = options.signal_text.as_str(),
        duration_ms = start.elapsed().as_millis(),
        "feature derivation complete"
    );

    let mut events_path = None;
    let mut segments_path = None;
    if !args.dry_run {
        fs::create_dir_all(&args.output_dir)
            .with_context(|| format!("create output dir {}", args.output_dir.display()))?;

        let mut events_df = events_frame(&features)?;
        let path = args.output_dir.join("events_with_features.parquet");
        let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;
        ParquetWriter::new(file)
            .finish(&mut events_df)
            .with_context(|| format!("write {}", path.display()))?;
        events_path = Some(path);

        let mut segments_df = segments_frame(&features)?;
        let path = args.output_dir.join("transcript_segments.parquet");
        let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;
        ParquetWriter::new(file)
            .finish(&mut segments_df)
            .with_context(|| format!("write {}", path.display()))?;
        segments_path = Some(path);
    }

    Ok(FeaturesResult {
        output_dir: args.output_dir.clone(),
        events_path,
        segments_path,
        event_count: features.len(),
        segment_count,
        preview: features.iter().take(PREVIEW_EVENTS).map(preview).collect(),
    })
}

pub fn run_signals(args: &SignalsArgs) -> Result<()> {
    let text = match &args.text {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("read text from stdin")?;
            buffer
        }
    };
    print_signal_report(&text);
    Ok(())
}

fn preview(features: &EventFeatures) -> EventPreview {
    let signal_types = features
        .signals
        .types_present
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    EventPreview {
        event_id: features.event_id.clone(),
        segment_count: features.segments.len(),
        speaker_count: features.speaker_count(),
        signal_total: features.signals.total_count,
        signal_types,
        qa_word_count: features.stats.word_count,
        qa_preview: truncate_chars(&features.qa_text, PREVIEW_CHARS),
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_is_char_safe() {
        let text = "caf\u{e9}".repeat(50);
        let cut = truncate_chars(&text, 10);
        assert_eq!(cut.chars().count(), 13); // 10 kept plus "..."
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn short_text_is_not_truncated() {
        assert_eq!(truncate_chars("short", 120), "short");
    }
}
