use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One speaker turn as delivered by a structured data source.
///
/// Field names vary wildly between providers ("text" vs "content" vs "body",
/// "speaker" vs "speaker_name", ...), so turns are kept as loosely-typed JSON
/// maps and resolved into the canonical [`crate::Segment`] shape by the
/// structured-input adapter.
pub type RawTurn = serde_json::Map<String, serde_json::Value>;

/// A single earnings-call event: identifying keys plus the raw transcript.
///
/// Immutable input to the engine; everything downstream is derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub ticker: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub earnings_date: Option<NaiveDate>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub quarter: Option<u32>,
    /// Raw transcript text. Absent or empty transcripts degrade to empty
    /// outputs rather than errors.
    #[serde(default)]
    pub transcript: Option<String>,
    /// Pre-segmented speaker turns, when the source provides them.
    #[serde(default)]
    pub segments: Option<Vec<RawTurn>>,
}

impl EventRecord {
    /// Stable event key of the form `TICKER|YYYY-MM-DD`, with "unknown" when
    /// the earnings date is missing.
    pub fn event_id(&self) -> String {
        match self.earnings_date {
            Some(date) => format!("{}|{}", self.ticker, date.format("%Y-%m-%d")),
            None => format!("{}|unknown", self.ticker),
        }
    }

    /// Raw transcript text, or an empty string when absent.
    pub fn transcript_text(&self) -> &str {
        self.transcript.as_deref().unwrap_or("")
    }

    /// Structured turns, when present and non-empty.
    pub fn structured_turns(&self) -> Option<&[RawTurn]> {
        match self.segments.as_deref() {
            Some(turns) if !turns.is_empty() => Some(turns),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_id_includes_iso_date() {
        let record = EventRecord {
            ticker: "XYZ".to_string(),
            company: None,
            earnings_date: NaiveDate::from_ymd_opt(2023, 5, 4),
            year: Some(2023),
            quarter: Some(2),
            transcript: None,
            segments: None,
        };
        assert_eq!(record.event_id(), "XYZ|2023-05-04");
    }

    #[test]
    fn empty_structured_turns_are_ignored() {
        let record = EventRecord {
            ticker: "XYZ".to_string(),
            company: None,
            earnings_date: None,
            year: None,
            quarter: None,
            transcript: Some("text".to_string()),
            segments: Some(vec![]),
        };
        assert!(record.structured_turns().is_none());
    }
}
