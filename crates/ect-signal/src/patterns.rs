//! Signal pattern library and match extraction.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Signal categories, in library declaration order. Feature output preserves
/// this order, not match order or alphabetical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    TrialUpdate,
    GuidanceChange,
    SafetySignal,
    RegulatoryMention,
}

impl SignalKind {
    pub const ALL: [SignalKind; 4] = [
        SignalKind::TrialUpdate,
        SignalKind::GuidanceChange,
        SignalKind::SafetySignal,
        SignalKind::RegulatoryMention,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::TrialUpdate => "trial_update",
            SignalKind::GuidanceChange => "guidance_change",
            SignalKind::SafetySignal => "safety_signal",
            SignalKind::RegulatoryMention => "regulatory_mention",
        }
    }

    /// Raw pattern list for this category, in priority order.
    fn patterns(&self) -> &'static [&'static str] {
        match self {
            SignalKind::TrialUpdate => &[
                r"\bphase\s+(?:i|ii|iii|iv|1|2|3|4)(?:[ab]?)\s*(?:/|and)?\s*(?:i|ii|iii|iv|1|2|3|4)?\b",
                r"\b(pivotal|registrational)\s+(trial|study)\b",
                r"\btop[- ]line\s+data\b",
                r"\b(data|results)\s+(readout|read-out)\b",
                r"\b(interim|final)\s+analysis\b",
                r"\benroll(?:ment)?\s+(?:complete|completed|finish(?:ed)?|fully)\b",
                r"\bfirst\s+patient\s+(?:dosed|enrolled|treated)\b",
                r"\b(initiated|initiation|start(?:ed)?|launch(?:ed)?)\s+(?:the\s+)?(?:trial|study|enrollment)\b",
                r"\b(dose[- ]escalation|expansion)\s+cohort\b",
            ],
            SignalKind::GuidanceChange => &[
                r"\b(raise|raised|increase|increased|boost|boosted|lift|lifted)\s+(?:our\s+)?(guidance|outlook|forecast)\b",
                r"\b(lower|lowered|reduce|reduced|cut|cutting|decrease|decreased)\s+(?:our\s+)?(guidance|outlook|forecast)\b",
                r"\b(reaffirm|reiterat(?:e|ed)|maintain|maintained|keep|kept)\s+(?:our\s+)?(guidance|outlook|forecast)\b",
                r"\b(update|updated|narrow|narrowed|widen|widened|withdraw|withdrew|suspend|suspended)\s+(?:our\s+)?(guidance|outlook|forecast)\b",
            ],
            SignalKind::SafetySignal => &[
                r"\b(serious\s+adverse\s+event|adverse\s+event|adverse\s+events)\b",
                r"\b(safety\s+signal|safety\s+concern|safety\s+issue)\b",
                r"\b(dose[- ]limiting\s+toxicity|dlt)\b",
                r"\b(tolerability|toxicity|toxicities)\b",
                r"\b(treatment[- ]related|drug[- ]related)\s+(death|fatalit(?:y|ies))\b",
                r"\bpatient\s+death\b",
            ],
            SignalKind::RegulatoryMention => &[
                r"\b(fda|ema|mhra|pmda|health\s+canada)\b",
                r"\b(bla|nda|snda|maa|ind)\b",
                r"\b(pdufa|crl|complete\s+response\s+letter)\b",
                r"\b(adcom|advisory\s+committee)\b",
                r"\b(approval|approved|accelerated\s+approval|priority\s+review|fast\s+track|breakthrough\s+therapy)\b",
                r"\b(regulatory\s+filing|submission|filed\s+our|label(?:ing)?)\b",
                r"\b(clinical\s+hold)\b",
            ],
        }
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One regex hit inside a scanned text span. Ephemeral: aggregated away into
/// [`crate::SignalFeatures`].
#[derive(Debug, Clone, Serialize)]
pub struct SignalMatch {
    pub signal: SignalKind,
    pub phrase: String,
    /// Byte offsets of the phrase within the scanned text.
    pub start: usize,
    pub end: usize,
    /// Phrase plus a fixed window of surrounding context, newline-collapsed.
    pub snippet: String,
}

/// Compiled pattern library, built once per process. A malformed built-in
/// pattern is a programming error and fails at first use.
static LIBRARY: LazyLock<Vec<(SignalKind, Vec<Regex>)>> = LazyLock::new(|| {
    SignalKind::ALL
        .iter()
        .map(|kind| {
            let compiled = kind
                .patterns()
                .iter()
                .map(|pattern| {
                    Regex::new(&format!("(?i){pattern}")).expect("built-in signal pattern")
                })
                .collect();
            (*kind, compiled)
        })
        .collect()
});

const SNIPPET_WINDOW: usize = 80;

/// Context window around a match, clipped to text bounds and collapsed to a
/// single line. Byte offsets are widened outward to char boundaries so
/// multi-byte text never splits.
fn build_snippet(text: &str, start: usize, end: usize) -> String {
    let mut left = start.saturating_sub(SNIPPET_WINDOW);
    while left > 0 && !text.is_char_boundary(left) {
        left -= 1;
    }
    let mut right = usize::min(end + SNIPPET_WINDOW, text.len());
    while right < text.len() && !text.is_char_boundary(right) {
        right += 1;
    }
    text[left..right].trim().replace('\n', " ")
}

/// Scan `text` for every signal pattern, in category order, pattern order,
/// and document order. Deterministic for identical input.
pub fn find_signal_matches(text: &str) -> Vec<SignalMatch> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut matches = Vec::new();
    for (kind, patterns) in LIBRARY.iter() {
        for pattern in patterns {
            for found in pattern.find_iter(text) {
                matches.push(SignalMatch {
                    signal: *kind,
                    phrase: found.as_str().to_string(),
                    start: found.start(),
                    end: found.end(),
                    snippet: build_snippet(text, found.start(), found.end()),
                });
            }
        }
    }
    matches
}
