//! Validator / field highlighter: clean value or flagged placeholder.
//!
//! There is no error path here. A field is "missing" when it is absent or
//! empty after trimming; the group-level agency fields additionally check
//! that a multi-project group agrees on a single value. Either way the
//! result is a renderable segment; absent data is ordinary business state.

use super::types::{FlagKind, Segment};

/// Field labels as they appear in tooltips (`"<LABEL> MISSING!"`).
pub const AGENCY_LONG_LABEL: &str = "FUNDING AGENCY LONG NAME";
pub const AGENCY_SHORT_LABEL: &str = "FUNDING AGENCY SHORT NAME";
pub const PROJECT_NAME_LABEL: &str = "PROJECT SHORT NAME";
pub const PROJECT_NUMBER_LABEL: &str = "PROJECT NUMBER";
pub const PROJECT_TYPE_LABEL: &str = "PROJECT TYPE";

/// Validate a single record field.
///
/// Returns the raw value, or `"???"` with a `"<LABEL> MISSING!"` tooltip
/// when the value is absent or empty after trimming.
pub fn required_field(value: Option<&str>, label: &str) -> Segment {
    match value {
        Some(v) if !v.trim().is_empty() => Segment::Text(v.to_string()),
        _ => Segment::flagged(FlagKind::Missing, format!("{} MISSING!", label)),
    }
}

/// Validate a group-level field across the records of a multi-project
/// agency group.
///
/// Distinct values are collected exactly as stored (no normalization), in
/// first-occurrence order. Exactly one distinct value falls through to the
/// missing-field rule on that value; more than one flags the slot and lists
/// every distinct value in the tooltip. Long and short agency names go
/// through this independently.
pub fn group_field<'a, I>(values: I, label: &str) -> Segment
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut distinct: Vec<&str> = Vec::new();
    for value in values {
        let v = value.unwrap_or("");
        if !distinct.contains(&v) {
            distinct.push(v);
        }
    }

    if distinct.len() > 1 {
        Segment::flagged(FlagKind::Mismatch, format!("MISMATCHING {}S: {:?}", label, distinct))
    } else {
        required_field(distinct.first().copied(), label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::types::FLAG_PLACEHOLDER;

    #[test]
    fn test_required_field_passes_value_through() {
        let segment = required_field(Some("Agency B Corp"), AGENCY_LONG_LABEL);
        assert_eq!(segment, Segment::Text("Agency B Corp".to_string()));
    }

    #[test]
    fn test_required_field_flags_absent() {
        let segment = required_field(None, PROJECT_NUMBER_LABEL);
        assert_eq!(
            segment,
            Segment::Flagged {
                kind: FlagKind::Missing,
                display: FLAG_PLACEHOLDER.to_string(),
                tooltip: "PROJECT NUMBER MISSING!".to_string(),
            }
        );
    }

    #[test]
    fn test_required_field_flags_whitespace_only() {
        let segment = required_field(Some("   "), PROJECT_TYPE_LABEL);
        assert!(matches!(segment, Segment::Flagged { kind: FlagKind::Missing, .. }));
    }

    #[test]
    fn test_group_field_single_value_is_clean() {
        let segment = group_field([Some("Agency B Corp"), Some("Agency B Corp")], AGENCY_LONG_LABEL);
        assert_eq!(segment, Segment::Text("Agency B Corp".to_string()));
    }

    #[test]
    fn test_group_field_mismatch_lists_values_in_first_occurrence_order() {
        let segment = group_field([Some("B Corp"), Some("A Corp"), Some("B Corp")], AGENCY_LONG_LABEL);
        assert_eq!(
            segment,
            Segment::Flagged {
                kind: FlagKind::Mismatch,
                display: FLAG_PLACEHOLDER.to_string(),
                tooltip: "MISMATCHING FUNDING AGENCY LONG NAMES: [\"B Corp\", \"A Corp\"]".to_string(),
            }
        );
    }

    #[test]
    fn test_group_field_all_missing_falls_back_to_missing_rule() {
        let segment = group_field([None, Some(""), None], AGENCY_SHORT_LABEL);
        assert!(matches!(segment, Segment::Flagged { kind: FlagKind::Missing, .. }));
    }

    #[test]
    fn test_group_field_mixed_missing_and_value_is_a_mismatch() {
        let segment = group_field([Some("XYZ"), None], AGENCY_SHORT_LABEL);
        assert_eq!(
            segment,
            Segment::Flagged {
                kind: FlagKind::Mismatch,
                display: FLAG_PLACEHOLDER.to_string(),
                tooltip: "MISMATCHING FUNDING AGENCY SHORT NAMES: [\"XYZ\", \"\"]".to_string(),
            }
        );
    }
}
