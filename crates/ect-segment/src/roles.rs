//! Speaker-role classification from raw label strings.

use ect_model::SpeakerRole;

/// Title fragments that mark a speaker as management.
pub const MANAGEMENT_TITLES: [&str; 16] = [
    "ceo",
    "cfo",
    "coo",
    "cio",
    "cto",
    "cmo",
    "cso",
    "president",
    "vice president",
    "vp",
    "chairman",
    "chief",
    "executive",
    "founder",
    "investor relations",
    "ir",
];

/// Classify a raw speaker label.
///
/// Rule order, first match wins: explicit "analyst"/"operator" cues, known
/// analyst names, known executive names, management-title lexicon, `Other`.
/// Name matching is case-insensitive substring containment, so header names
/// like "Jane Doe" match labels like "Jane Doe - CEO".
pub fn classify_speaker_role(
    label: &str,
    executive_names: &[String],
    analyst_names: &[String],
) -> SpeakerRole {
    let label_lower = label.trim().to_lowercase();
    if label_lower.is_empty() {
        return SpeakerRole::Other;
    }

    if label_lower.contains("analyst") {
        return SpeakerRole::Analyst;
    }
    if label_lower.contains("operator") {
        return SpeakerRole::Operator;
    }

    for name in analyst_names {
        if !name.is_empty() && label_lower.contains(&name.to_lowercase()) {
            return SpeakerRole::Analyst;
        }
    }
    for name in executive_names {
        if !name.is_empty() && label_lower.contains(&name.to_lowercase()) {
            return SpeakerRole::Management;
        }
    }

    if MANAGEMENT_TITLES
        .iter()
        .any(|title| label_lower.contains(title))
    {
        return SpeakerRole::Management;
    }

    SpeakerRole::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyst_cue_wins_over_name_lists() {
        let executives = vec!["Jane Analyst".to_string()];
        assert_eq!(
            classify_speaker_role("Jane Analyst", &executives, &[]),
            SpeakerRole::Analyst
        );
    }

    #[test]
    fn ceo_label_is_management() {
        assert_eq!(classify_speaker_role("CEO", &[], &[]), SpeakerRole::Management);
    }

    #[test]
    fn known_executive_name_is_management() {
        let executives = vec!["Jane Doe".to_string()];
        assert_eq!(
            classify_speaker_role("jane doe", &executives, &[]),
            SpeakerRole::Management
        );
    }

    #[test]
    fn known_analyst_name_beats_executive_list() {
        let executives = vec!["John Smith".to_string()];
        let analysts = vec!["John Smith".to_string()];
        assert_eq!(
            classify_speaker_role("John Smith", &executives, &analysts),
            SpeakerRole::Analyst
        );
    }

    #[test]
    fn blank_label_is_other() {
        assert_eq!(classify_speaker_role("   ", &[], &[]), SpeakerRole::Other);
        assert_eq!(classify_speaker_role("", &[], &[]), SpeakerRole::Other);
    }

    #[test]
    fn unmatched_label_is_other() {
        assert_eq!(
            classify_speaker_role("Some Guest", &[], &[]),
            SpeakerRole::Other
        );
    }
}
