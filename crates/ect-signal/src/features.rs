//! Aggregation of signal matches into per-category feature summaries.

use serde::Serialize;

use crate::patterns::{SignalKind, find_signal_matches};

/// How many evidence snippets to keep per category.
const MAX_SNIPPETS: usize = 3;

/// Per-category aggregate for one text span.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignalSummary {
    /// Raw match count, duplicates included.
    pub count: usize,
    pub flag: bool,
    /// Distinct matched phrases, first-seen order, case preserved.
    pub phrases: Vec<String>,
    /// Up to the first three snippets, deduplicated after truncation.
    pub snippets: Vec<String>,
}

/// Signal feature vector for one text span. Category fields follow library
/// declaration order, as does `types_present`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignalFeatures {
    pub trial_update: SignalSummary,
    pub guidance_change: SignalSummary,
    pub safety_signal: SignalSummary,
    pub regulatory_mention: SignalSummary,
    /// Total raw match count across all categories.
    pub total_count: usize,
    /// Categories with at least one match, in library order.
    pub types_present: Vec<SignalKind>,
}

impl SignalFeatures {
    pub fn summary(&self, kind: SignalKind) -> &SignalSummary {
        match kind {
            SignalKind::TrialUpdate => &self.trial_update,
            SignalKind::GuidanceChange => &self.guidance_change,
            SignalKind::SafetySignal => &self.safety_signal,
            SignalKind::RegulatoryMention => &self.regulatory_mention,
        }
    }

    fn summary_mut(&mut self, kind: SignalKind) -> &mut SignalSummary {
        match kind {
            SignalKind::TrialUpdate => &mut self.trial_update,
            SignalKind::GuidanceChange => &mut self.guidance_change,
            SignalKind::SafetySignal => &mut self.safety_signal,
            SignalKind::RegulatoryMention => &mut self.regulatory_mention,
        }
    }
}

/// Keep first-seen order while dropping exact (case-sensitive) duplicates.
fn dedupe_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

/// Aggregate all signal matches in `text` into a feature vector.
pub fn extract_signal_features(text: &str) -> SignalFeatures {
    let matches = find_signal_matches(text);
    let mut features = SignalFeatures::default();

    let mut phrases: Vec<Vec<String>> = vec![Vec::new(); SignalKind::ALL.len()];
    let mut snippets: Vec<Vec<String>> = vec![Vec::new(); SignalKind::ALL.len()];
    for found in matches {
        let slot = SignalKind::ALL
            .iter()
            .position(|kind| *kind == found.signal)
            .expect("kind in library order");
        phrases[slot].push(found.phrase);
        snippets[slot].push(found.snippet);
    }

    for (slot, kind) in SignalKind::ALL.iter().enumerate() {
        let count = phrases[slot].len();
        let mut kept_snippets = std::mem::take(&mut snippets[slot]);
        kept_snippets.truncate(MAX_SNIPPETS);
        features.total_count += count;
        if count > 0 {
            features.types_present.push(*kind);
        }
        let summary = features.summary_mut(*kind);
        summary.count = count;
        summary.flag = count > 0;
        summary.phrases = dedupe_preserving_order(std::mem::take(&mut phrases[slot]));
        summary.snippets = dedupe_preserving_order(kept_snippets);
    }
    features
}
