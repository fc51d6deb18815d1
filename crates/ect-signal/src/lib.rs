//! Domain signal extraction for earnings-call text.
//!
//! A fixed library of case-insensitive patterns maps four signal categories
//! (trial updates, guidance changes, safety signals, regulatory mentions) to
//! phrase-level matches with evidence snippets, aggregated into per-category
//! feature summaries. A separate lexicon calculator derives hedging/risk
//! language rates from the same text.
//!
//! All pattern tables are compiled once into process-wide read-only state;
//! extraction is pure and deterministic.

pub mod features;
pub mod lexicon;
pub mod patterns;

pub use features::{SignalFeatures, SignalSummary, extract_signal_features};
pub use lexicon::{HEDGE_TERMS, RISK_TERMS, TextStats, compute_text_stats};
pub use patterns::{SignalKind, SignalMatch, find_signal_matches};
