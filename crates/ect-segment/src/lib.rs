//! Transcript segmentation: normalization, section boundary detection,
//! speaker-role classification, and speaker-turn carving.
//!
//! Two paths produce [`ect_model::Segment`] lists:
//!
//! - **heuristic**: scan normalized text for "Label:" speaker markers
//!   ([`segmenter::segment_transcript_text`]), falling back to a plain
//!   prepared/Q&A split when no labels are found;
//! - **structured**: trust pre-segmented speaker turns from the data source
//!   ([`structured::segments_from_structured`]), re-deriving role and section
//!   with the same classifier.
//!
//! All functions are total over their inputs: empty or malformed text yields
//! empty output, never an error.

pub mod header;
pub mod normalize;
pub mod roles;
pub mod segmenter;
pub mod splitter;
pub mod structured;

pub use header::extract_transcript_metadata;
pub use normalize::normalize_transcript;
pub use roles::classify_speaker_role;
pub use segmenter::segment_transcript_text;
pub use splitter::{find_qa_start, split_prepared_and_qa};
pub use structured::{extract_sections, segments_from_structured};
