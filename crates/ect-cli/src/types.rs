use std::path::PathBuf;

/// Outcome of the `features` command, consumed by the summary printer.
pub struct FeaturesResult {
    pub output_dir: PathBuf,
    pub events_path: Option<PathBuf>,
    pub segments_path: Option<PathBuf>,
    pub event_count: usize,
    pub segment_count: usize,
    pub preview: Vec<EventPreview>,
}

/// Condensed per-event row for the console summary table.
pub struct EventPreview {
    pub event_id: String,
    pub segment_count: usize,
    pub speaker_count: usize,
    pub signal_total: usize,
    pub signal_types: String,
    pub qa_word_count: usize,
    pub qa_preview: String,
}
