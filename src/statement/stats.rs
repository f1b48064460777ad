//! Statistics over the flags embedded in a compiled statement.
//!
//! The console summary line and the JSON export both consume these
//! counts rather than re-scanning segments themselves.

use super::types::{FlagKind, Segment, Statement};

/// Counts of data-quality flags in one statement, by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct FlagSummary {
    pub missing: usize,
    pub mismatch: usize,
    pub integrity: usize,
    pub total: usize,
}

impl FlagSummary {
    /// True when the statement carries no flags at all.
    pub fn is_clean(&self) -> bool {
        self.total == 0
    }
}

/// Count the flags in a compiled statement.
///
/// # Arguments
/// * `statement` - The compiled statement to scan
///
/// # Returns
/// A `FlagSummary` with per-kind counts and the overall total.
pub fn summarize_flags(statement: &Statement) -> FlagSummary {
    let mut summary = FlagSummary::default();
    for segment in statement.segments() {
        if let Segment::Flagged { kind, .. } = segment {
            summary.total += 1;
            match kind {
                FlagKind::Missing => summary.missing += 1,
                FlagKind::Mismatch => summary.mismatch += 1,
                FlagKind::Integrity => summary.integrity += 1,
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::compile;
    use crate::types::ProjectRecord;

    #[test]
    fn test_empty_statement_is_clean() {
        let summary = summarize_flags(&Statement::new());
        assert_eq!(summary, FlagSummary::default());
        assert!(summary.is_clean());
    }

    #[test]
    fn test_counts_by_kind() {
        let mut stmt = Statement::new();
        stmt.push_text("x");
        stmt.push(Segment::flagged(FlagKind::Missing, "A MISSING!".to_string()));
        stmt.push(Segment::flagged(FlagKind::Missing, "B MISSING!".to_string()));
        stmt.push(Segment::flagged(FlagKind::Mismatch, "MISMATCHING C: [..]".to_string()));

        let summary = summarize_flags(&stmt);
        assert_eq!(summary.missing, 2);
        assert_eq!(summary.mismatch, 1);
        assert_eq!(summary.integrity, 0);
        assert_eq!(summary.total, 3);
        assert!(!summary.is_clean());
    }

    #[test]
    fn test_counts_compiled_statement() {
        // A default record misses all five statement fields.
        let stmt = compile(&[ProjectRecord::default()]);
        let summary = summarize_flags(&stmt);
        assert_eq!(summary.missing, 5);
        assert_eq!(summary.total, 5);
    }
}
