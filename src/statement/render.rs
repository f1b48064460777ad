//! Renderer: assembles the statement sentence from agency groups.
//!
//! The grammar is a set of explicit branches: agency separators, "and "
//! on the final entry, per-type pluralization and bracketing, comma/" and"
//! chaining between type segments, one terminating period. Flags from the
//! validator embed inline; rendering always runs to completion.

use log::debug;

use super::fields::{
    AGENCY_LONG_LABEL, AGENCY_SHORT_LABEL, PROJECT_NAME_LABEL, PROJECT_NUMBER_LABEL,
    PROJECT_TYPE_LABEL, group_field, required_field,
};
use super::group::{AgencyGroup, group_by_agency};
use super::types::{FlagKind, Segment, Statement};
use crate::types::ProjectRecord;

/// Fixed opening of every statement.
pub const STATEMENT_OPENING: &str = "This work was supported by";

/// Compile the selected records into a funding statement.
///
/// Pure and synchronous: the same input list produces byte-identical
/// output, and bad data never aborts the sentence; it surfaces as inline
/// flags instead.
pub fn compile(records: &[ProjectRecord]) -> Statement {
    let groups = group_by_agency(records);
    debug!("compiling statement: {} records, {} agency groups", records.len(), groups.len());

    let mut stmt = Statement::new();
    stmt.push_text(STATEMENT_OPENING);

    // Nothing selected yet: opening phrase plus ellipsis, no period.
    if groups.is_empty() {
        stmt.push_text("...");
        return stmt;
    }

    let last = groups.len() - 1;
    for (i, group) in groups.iter().enumerate() {
        // "; " plus a line break between entries; the break alone also
        // separates the opening phrase from the first entry.
        if i > 0 {
            stmt.push_text("; ");
        }
        stmt.push_break();
        if groups.len() > 1 && i == last {
            stmt.push_text("and ");
        }
        render_group(&mut stmt, group);
    }
    stmt.push_text(".");

    stmt
}

fn render_group(stmt: &mut Statement, group: &AgencyGroup) {
    match group.projects.as_slice() {
        // Unreachable while the grouper only creates groups out of records;
        // render a loud diagnostic instead of trusting that.
        [] => stmt.push(Segment::Flagged {
            kind: FlagKind::Integrity,
            display: format!("ERROR WITH {}: 0 PROJECTS SELECTED, STILL LISTED?", group.agency),
            tooltip: format!("{:?}", group.projects),
        }),
        [only] => render_single_project(stmt, only),
        _ => render_project_list(stmt, group),
    }
}

/// `the {long} ({short}) as {type} {name} ({number})`, flags in any slot.
fn render_single_project(stmt: &mut Statement, record: &ProjectRecord) {
    stmt.push_text("the ");
    stmt.push(required_field(record.funding_agency_long_name.as_deref(), AGENCY_LONG_LABEL));
    stmt.push_text(" (");
    stmt.push(required_field(record.funding_agency_short_name.as_deref(), AGENCY_SHORT_LABEL));
    stmt.push_text(") as ");
    stmt.push(required_field(record.project_type.as_deref(), PROJECT_TYPE_LABEL));
    stmt.push_text(" ");
    stmt.push(required_field(record.project_short_name.as_deref(), PROJECT_NAME_LABEL));
    stmt.push_text(" (");
    stmt.push(required_field(record.project_number.as_deref(), PROJECT_NUMBER_LABEL));
    stmt.push_text(")");
}

/// Multi-project entry: group-checked agency names, then the project list
/// partitioned by project type in first-occurrence order.
fn render_project_list(stmt: &mut Statement, group: &AgencyGroup) {
    stmt.push_text("the ");
    stmt.push(group_field(
        group.projects.iter().map(|p| p.funding_agency_long_name.as_deref()),
        AGENCY_LONG_LABEL,
    ));
    stmt.push_text(" (");
    stmt.push(group_field(
        group.projects.iter().map(|p| p.funding_agency_short_name.as_deref()),
        AGENCY_SHORT_LABEL,
    ));
    stmt.push_text(") as");

    // Partition by the stored type value; records with a missing type share
    // the "" bucket and render a single flagged type name.
    let mut type_buckets: Vec<(&str, Vec<&ProjectRecord>)> = Vec::new();
    for &record in &group.projects {
        let ty = record.project_type.as_deref().unwrap_or("");
        match type_buckets.iter_mut().find(|(t, _)| *t == ty) {
            Some((_, bucket)) => bucket.push(record),
            None => type_buckets.push((ty, vec![record])),
        }
    }

    let last = type_buckets.len() - 1;
    for (t_idx, (ty, bucket)) in type_buckets.iter().enumerate() {
        // Exactly one connector rule per segment: " and" before the last of
        // two or more types, "," before middles, nothing before the first.
        if type_buckets.len() > 1 && t_idx == last {
            stmt.push_text(" and");
        } else if t_idx > 0 {
            stmt.push_text(",");
        }

        stmt.push_text(" ");
        stmt.push(required_field(Some(*ty), PROJECT_TYPE_LABEL));
        if bucket.len() > 1 {
            stmt.push_text("s");
        }
        stmt.push_text(" ");

        if bucket.len() > 1 {
            stmt.push_text("[");
        }
        for (p_idx, &record) in bucket.iter().enumerate() {
            if p_idx > 0 {
                stmt.push_text(", ");
            }
            stmt.push(required_field(record.project_short_name.as_deref(), PROJECT_NAME_LABEL));
            stmt.push_text(" (");
            stmt.push(required_field(record.project_number.as_deref(), PROJECT_NUMBER_LABEL));
            stmt.push_text(")");
        }
        if bucket.len() > 1 {
            stmt.push_text("]");
        }
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
