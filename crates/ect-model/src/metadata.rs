use serde::{Deserialize, Serialize};

/// Header metadata parsed from one transcript.
///
/// Derived once per transcript from the "Executives:" / "Analysts:" header
/// blocks and consumed by the role classifier for that same transcript only.
/// Missing headers yield empty lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranscriptMeta {
    /// Raw text of the executives header block, before name parsing.
    pub executive_list_raw: String,
    /// Raw text of the analysts header block.
    pub analyst_list_raw: String,
    pub executive_names: Vec<String>,
    pub analyst_names: Vec<String>,
}

impl TranscriptMeta {
    pub fn executive_count(&self) -> usize {
        self.executive_names.len()
    }

    pub fn analyst_count(&self) -> usize {
        self.analyst_names.len()
    }
}
