//! Pluggable sentiment scoring for transcript sections.
//!
//! Model-backed scorers (a classifier service, an ONNX runtime, ...) live
//! outside this crate; the pipeline only depends on the [`SentimentScorer`]
//! interface and runs fine without one.

use serde::Serialize;

/// Aggregate sentiment probabilities for one text span.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SentimentScore {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl SentimentScore {
    /// Net tone: positive minus negative.
    pub fn net(&self) -> f64 {
        self.positive - self.negative
    }
}

/// Scores a block of text. Implementations must be callable from worker
/// threads, hence the `Sync` bound.
pub trait SentimentScorer: Sync {
    fn score(&self, text: &str) -> SentimentScore;
}

/// Per-section sentiment plus the prepared-to-Q&A tone shift.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SectionSentiment {
    pub prepared: SentimentScore,
    pub qa: SentimentScore,
    /// Q&A net tone minus prepared net tone.
    pub tone_shift: f64,
}

impl SectionSentiment {
    /// Score both sections. Blank sections get an all-zero score without
    /// touching the scorer.
    pub fn from_sections(scorer: &dyn SentimentScorer, prepared: &str, qa: &str) -> Self {
        let score_or_zero = |text: &str| {
            if text.trim().is_empty() {
                SentimentScore::default()
            } else {
                scorer.score(text)
            }
        };
        let prepared = score_or_zero(prepared);
        let qa = score_or_zero(qa);
        SectionSentiment {
            prepared,
            qa,
            tone_shift: qa.net() - prepared.net(),
        }
    }
}
