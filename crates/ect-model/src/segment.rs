use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Role category for a speaker turn.
///
/// Classification is heuristic: exact cues ("analyst", "operator") win over
/// known-name matches, which win over the management-title lexicon. Anything
/// unresolved lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakerRole {
    Management,
    Analyst,
    Operator,
    Other,
}

impl SpeakerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeakerRole::Management => "management",
            SpeakerRole::Analyst => "analyst",
            SpeakerRole::Operator => "operator",
            SpeakerRole::Other => "other",
        }
    }
}

impl fmt::Display for SpeakerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SpeakerRole {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "management" => Ok(SpeakerRole::Management),
            "analyst" => Ok(SpeakerRole::Analyst),
            "operator" => Ok(SpeakerRole::Operator),
            "other" => Ok(SpeakerRole::Other),
            _ => Err(ModelError::UnknownRole(s.to_string())),
        }
    }
}

/// Call section a segment belongs to.
///
/// Within one transcript the section is monotonic: once Q&A starts, later
/// segments stay `Qa` unless the source data itself interleaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Prepared,
    Qa,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Prepared => "prepared",
            Section::Qa => "qa",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Section {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prepared" => Ok(Section::Prepared),
            "qa" => Ok(Section::Qa),
            _ => Err(ModelError::UnknownSection(s.to_string())),
        }
    }
}

/// Which path produced a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentSource {
    /// Speaker-label scan over normalized text.
    Heuristic,
    /// Pre-segmented speaker turns supplied by the data source.
    Structured,
    /// Two-segment prepared/Q&A split when no speaker labels were found.
    Fallback,
}

impl SegmentSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentSource::Heuristic => "heuristic",
            SegmentSource::Structured => "structured",
            SegmentSource::Fallback => "fallback",
        }
    }
}

impl fmt::Display for SegmentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SegmentSource {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "heuristic" => Ok(SegmentSource::Heuristic),
            "structured" => Ok(SegmentSource::Structured),
            "fallback" => Ok(SegmentSource::Fallback),
            _ => Err(ModelError::UnknownSource(s.to_string())),
        }
    }
}

/// One contiguous speaker turn within a transcript.
///
/// `start_char`/`end_char` are UTF-8 byte offsets into the normalized
/// transcript text. Both are zero for structured-input segments, where the
/// original character positions are not recoverable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Sequence position within the transcript, starting at zero.
    pub segment_index: usize,
    /// Free-text speaker label; "Unknown" for fallback segments.
    pub speaker_name: String,
    pub speaker_role: SpeakerRole,
    pub section: Section,
    pub text: String,
    pub start_char: usize,
    pub end_char: usize,
    /// Display form of a leading timestamp, e.g. "00:01:23".
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// Seconds since call start, derived from `start_time`.
    pub start_time_seconds: Option<f64>,
    pub end_time_seconds: Option<f64>,
    pub source: SegmentSource,
}
