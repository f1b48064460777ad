/// Catalog loading and selection module
///
/// This module handles:
/// - Reading the project catalog from a semicolon-delimited CSV file
/// - Normalizing blank cells to absent values
/// - Dropping hidden rows and ordering by project end date
/// - Resolving the CLI selection into concrete records
use crate::cli::CliArgs;
use crate::types::ProjectRecord;
use log::debug;
use std::cmp::Ordering;
use std::path::Path;

/// Load the visible project catalog.
///
/// Blank cells become absent values, hidden rows are dropped, and the
/// result is sorted by project end date, newest first. Rows without a
/// parseable end date keep their file order at the end.
pub fn load_catalog(path: &Path) -> Result<Vec<ProjectRecord>, String> {
    debug!("Loading project catalog from {:?}", path);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_path(path)
        .map_err(|e| format!("Failed to open catalog {}: {}", path.display(), e))?;

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read catalog header: {}", e))?
        .clone();

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row = result.map_err(|e| format!("Failed to read catalog row {}: {}", idx + 1, e))?;
        let record = parse_row(&row, &headers);
        if record.hidden {
            debug!("Skipping hidden catalog row {}", idx + 1);
            continue;
        }
        if let Some(raw) = record.end_date.as_deref() {
            if record.end_date_key().is_none() {
                debug!(
                    "Catalog row {} end date {:?} did not parse; sorting it last",
                    idx + 1,
                    raw
                );
            }
        }
        records.push(record);
    }

    records.sort_by(|a, b| match (a.end_date_key(), b.end_date_key()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    debug!("Loaded {} visible catalog records", records.len());
    Ok(records)
}

/// Parse one catalog row, matching columns by header name.
fn parse_row(row: &csv::StringRecord, headers: &csv::StringRecord) -> ProjectRecord {
    let get_field = |col_name: &str| -> Option<String> {
        headers
            .iter()
            .position(|h| h.trim() == col_name)
            .and_then(|idx| row.get(idx))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    ProjectRecord {
        group: get_field("GROUP"),
        project_short_name: get_field("P_NAME"),
        project_number: get_field("P_NO"),
        project_type: get_field("P_TYPE"),
        project_long_name: get_field("P_LONGNAME"),
        funding_agency_short_name: get_field("FA_NAME"),
        funding_agency_long_name: get_field("FA_LONGNAME"),
        start_date: get_field("P_START"),
        end_date: get_field("P_END"),
        // Any non-blank marker hides the row.
        hidden: get_field("P_HIDDEN").is_some(),
    }
}

/// Resolve the CLI selection into catalog records.
///
/// Selectors combine as a union, duplicates collapse, and the result
/// keeps catalog order regardless of how the selectors were written.
pub fn resolve_selection(catalog: &[ProjectRecord], args: &CliArgs) -> Result<Vec<ProjectRecord>, String> {
    if args.all {
        debug!("Selecting all {} catalog records", catalog.len());
        return Ok(catalog.to_vec());
    }

    let mut picked = vec![false; catalog.len()];

    for index in &args.select {
        // 1-based positions, as shown by --list.
        if *index == 0 || *index > catalog.len() {
            return Err(format!(
                "Selection index {} is out of range (catalog has {} visible projects)",
                index,
                catalog.len()
            ));
        }
        picked[index - 1] = true;
    }

    for name in &args.projects {
        let mut found = false;
        for (i, record) in catalog.iter().enumerate() {
            if record.project_short_name.as_deref() == Some(name.as_str()) {
                picked[i] = true;
                found = true;
            }
        }
        if !found {
            return Err(format!("No catalog project named '{}'", name));
        }
    }

    for group in &args.groups {
        let mut found = false;
        for (i, record) in catalog.iter().enumerate() {
            if record.group.as_deref() == Some(group.as_str()) {
                picked[i] = true;
                found = true;
            }
        }
        if !found {
            return Err(format!("No catalog group named '{}'", group));
        }
    }

    let selected: Vec<ProjectRecord> =
        catalog.iter().zip(&picked).filter(|(_, p)| **p).map(|(r, _)| r.clone()).collect();

    debug!("Selection resolved to {} of {} records", selected.len(), catalog.len());
    Ok(selected)
}
