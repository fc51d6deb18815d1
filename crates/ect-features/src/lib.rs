//! Event-level feature derivation for earnings-call transcripts.
//!
//! [`pipeline::process_event`] runs the whole chain for one event record:
//! header metadata, speaker segmentation, prepared/Q&A section split, signal
//! pattern scan, and Q&A lexicon rates, with an optional sentiment pass via
//! the [`sentiment::SentimentScorer`] seam. [`pipeline::process_events`] fans
//! the same work out over a thread pool while preserving input order, and
//! [`frame`] turns the results into Parquet-friendly data frames.

pub mod frame;
pub mod pipeline;
pub mod sentiment;

pub use frame::{events_frame, segments_frame};
pub use pipeline::{EventFeatures, PipelineOptions, SignalText, process_event, process_events};
pub use sentiment::{SectionSentiment, SentimentScore, SentimentScorer};
