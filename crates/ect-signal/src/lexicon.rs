//! Hedging and biotech-risk lexicon rates.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Modal/uncertainty vocabulary.
pub const HEDGE_TERMS: [&str; 13] = [
    "may",
    "might",
    "could",
    "uncertain",
    "uncertainty",
    "visibility",
    "approximately",
    "around",
    "potentially",
    "possible",
    "expect",
    "believe",
    "should",
];

/// Biotech-specific risk vocabulary; multi-word phrases count as one hit.
pub const RISK_TERMS: [&str; 18] = [
    "fda",
    "trial hold",
    "clinical hold",
    "adverse event",
    "adverse events",
    "safety signal",
    "black box",
    "recall",
    "delay",
    "setback",
    "pdufa",
    "crl",
    "phase i",
    "phase ii",
    "phase iii",
    "enrollment",
    "dropout",
    "serious adverse",
];

fn compile_terms(terms: &[&str]) -> Vec<Regex> {
    terms
        .iter()
        .map(|term| {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term))).expect("lexicon term pattern")
        })
        .collect()
}

static HEDGE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_terms(&HEDGE_TERMS));
static RISK_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_terms(&RISK_TERMS));

fn count_hits(text: &str, patterns: &[Regex]) -> usize {
    if text.is_empty() {
        return 0;
    }
    patterns
        .iter()
        .map(|pattern| pattern.find_iter(text).count())
        .sum()
}

/// Lexicon rate record for one text span.
///
/// Rates are hit counts divided by whitespace word count, and exactly 0.0
/// when the word count is zero.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct TextStats {
    pub word_count: usize,
    pub hedge_terms: usize,
    pub risk_terms: usize,
    pub hedge_rate: f64,
    pub risk_rate: f64,
}

/// Count whole-word hedge/risk lexicon hits and normalize by word count.
pub fn compute_text_stats(text: &str) -> TextStats {
    let word_count = text.split_whitespace().count();
    let hedge_terms = count_hits(text, &HEDGE_PATTERNS);
    let risk_terms = count_hits(text, &RISK_PATTERNS);
    let (hedge_rate, risk_rate) = if word_count == 0 {
        (0.0, 0.0)
    } else {
        (
            hedge_terms as f64 / word_count as f64,
            risk_terms as f64 / word_count as f64,
        )
    };
    TextStats {
        word_count,
        hedge_terms,
        risk_terms,
        hedge_rate,
        risk_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_hedge_and_risk_terms() {
        let stats =
            compute_text_stats("We may experience an FDA clinical hold and might face an adverse event.");
        assert!(stats.hedge_terms >= 2); // may, might
        assert!(stats.risk_terms >= 2); // fda, clinical hold, adverse event
    }

    #[test]
    fn clean_text_has_zero_counts() {
        let stats = compute_text_stats("Clear outlook with no issues mentioned.");
        assert_eq!(stats.hedge_terms, 0);
        assert_eq!(stats.risk_terms, 0);
        assert_eq!(stats.hedge_rate, 0.0);
        assert_eq!(stats.risk_rate, 0.0);
    }

    #[test]
    fn empty_text_has_zero_rates_not_nan() {
        let stats = compute_text_stats("");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.hedge_rate, 0.0);
        assert_eq!(stats.risk_rate, 0.0);
    }

    #[test]
    fn whole_word_matching_only() {
        // "mayor" must not count as "may"; "recalled" must not count as "recall".
        let stats = compute_text_stats("The mayor recalled the festival.");
        assert_eq!(stats.hedge_terms, 0);
        assert_eq!(stats.risk_terms, 0);
    }

    #[test]
    fn overlapping_lexicon_entries_count_separately() {
        let stats = compute_text_stats("A serious adverse event occurred.");
        // "adverse event" and "serious adverse" are distinct entries.
        assert_eq!(stats.risk_terms, 2);
    }

    #[test]
    fn rates_are_normalized_by_word_count() {
        let stats = compute_text_stats("may may may may");
        assert_eq!(stats.word_count, 4);
        assert_eq!(stats.hedge_terms, 4);
        assert!((stats.hedge_rate - 1.0).abs() < 1e-12);
    }
}
