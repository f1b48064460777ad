/// Core data structures for the project catalog
///
/// This module defines the primary data structures used throughout fundstmt
/// for representing catalog entries and their funding metadata.

use chrono::NaiveDate;

/// One funded project entry from the catalog.
///
/// Every textual field is optional: an empty cell in the catalog CSV and an
/// absent cell mean the same thing, "missing data". Missing data is normal
/// business state, not a load error; the statement compiler degrades it to
/// inline flags instead of refusing to render.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct ProjectRecord {
    /// Group the project primarily belongs to (selection preset key)
    pub group: Option<String>,

    /// Project short name, e.g. "RelAI"
    pub project_short_name: Option<String>,

    /// Project or grant number, e.g. "01IS18025A"
    pub project_number: Option<String>,

    /// Project type, e.g. "grant"
    pub project_type: Option<String>,

    /// Project long name (carried from the catalog; not rendered in the
    /// statement)
    pub project_long_name: Option<String>,

    /// Funding agency short name, the grouping key
    pub funding_agency_short_name: Option<String>,

    /// Funding agency long name
    pub funding_agency_long_name: Option<String>,

    /// Project start date, "YYYY-MM-DD"
    pub start_date: Option<String>,

    /// Project end date, "YYYY-MM-DD"; drives catalog sort order
    pub end_date: Option<String>,

    /// Hidden entries are skipped by the loader. The compiler tolerates one
    /// slipping through and treats it like any other record.
    pub hidden: bool,
}

impl ProjectRecord {
    /// Grouping key: the agency short name exactly as stored, or "" when missing.
    pub fn agency_key(&self) -> &str {
        self.funding_agency_short_name.as_deref().unwrap_or("")
    }

    /// Sort key for end-date-descending catalog order.
    ///
    /// Unparseable or missing dates yield `None` and are ordered after every
    /// dated record; the loader keeps file order among them (stable sort).
    pub fn end_date_key(&self) -> Option<NaiveDate> {
        self.end_date.as_deref().and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    /// "start -- end" period string for the catalog listing.
    pub fn display_period(&self) -> String {
        format!(
            "{} -- {}",
            self.start_date.as_deref().unwrap_or("?"),
            self.end_date.as_deref().unwrap_or("?")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agency_key_missing_is_empty() {
        let record = ProjectRecord::default();
        assert_eq!(record.agency_key(), "");

        let record = ProjectRecord {
            funding_agency_short_name: Some("DFG".to_string()),
            ..Default::default()
        };
        assert_eq!(record.agency_key(), "DFG");
    }

    #[test]
    fn test_end_date_key_parses_iso_dates() {
        let record = ProjectRecord { end_date: Some("2023-12-31".to_string()), ..Default::default() };
        assert_eq!(record.end_date_key(), NaiveDate::from_ymd_opt(2023, 12, 31));
    }

    #[test]
    fn test_end_date_key_tolerates_garbage() {
        let record = ProjectRecord { end_date: Some("soon".to_string()), ..Default::default() };
        assert_eq!(record.end_date_key(), None);

        let record = ProjectRecord::default();
        assert_eq!(record.end_date_key(), None);
    }

    #[test]
    fn test_display_period_fills_missing_ends() {
        let record = ProjectRecord {
            start_date: Some("2019-01-01".to_string()),
            end_date: None,
            ..Default::default()
        };
        assert_eq!(record.display_period(), "2019-01-01 -- ?");
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = ProjectRecord {
            group: Some("ml".to_string()),
            project_short_name: Some("Proj1".to_string()),
            funding_agency_short_name: Some("ABC".to_string()),
            hidden: false,
            ..Default::default()
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: ProjectRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
