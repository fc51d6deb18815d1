//! Event file loading.
//!
//! Two layouts are accepted: a single JSON array of event objects, or JSON
//! Lines with one event object per line. The array form is detected by the
//! first non-whitespace byte.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use ect_model::EventRecord;

/// Load event records from a JSON array or JSONL file.
pub fn read_events(path: &Path) -> Result<Vec<EventRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read events file {}", path.display()))?;
    let records = parse_events(&raw)
        .with_context(|| format!("parse events file {}", path.display()))?;
    debug!(
        path = %path.display(),
        event_count = records.len(),
        "loaded event records"
    );
    Ok(records)
}

fn parse_events(raw: &str) -> Result<Vec<EventRecord>> {
    if raw.trim_start().starts_with('[') {
        return serde_json::from_str(raw).context("parse JSON array");
    }
    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).with_context(|| format!("parse event on line {}", index + 1))
        })
        .collect()
}
