//! Grouper: partitions selected records by funding agency.
//!
//! Iteration order of the result equals first-occurrence order of each
//! agency across the input list; that order drives the order of agencies
//! in the final sentence.

use crate::types::ProjectRecord;

/// The records selected for one funding agency.
#[derive(Debug)]
pub struct AgencyGroup<'a> {
    /// Agency short name exactly as stored (missing names key as "")
    pub agency: &'a str,
    /// Selected records for this agency, in input order
    pub projects: Vec<&'a ProjectRecord>,
}

/// Partition `records` by funding-agency short name.
///
/// Exact string match on the stored value: no normalization, no case
/// folding. Two records disagreeing only in the long name land in the same
/// group; the validator flags that disagreement later. Records with a
/// missing short name group under the empty key and get flagged the same
/// way. Empty input yields an empty vec; there is no error path.
pub fn group_by_agency(records: &[ProjectRecord]) -> Vec<AgencyGroup<'_>> {
    let mut groups: Vec<AgencyGroup> = Vec::new();

    for record in records {
        let key = record.agency_key();
        match groups.iter_mut().find(|g| g.agency == key) {
            Some(group) => group.projects.push(record),
            None => groups.push(AgencyGroup { agency: key, projects: vec![record] }),
        }
    }

    groups
}
