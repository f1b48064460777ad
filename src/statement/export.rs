//! Statement export functions for HTML and JSON formats.
//!
//! This module writes the compiled statement to files, either as a
//! standalone HTML page for browser inspection or as a JSON report
//! for downstream tooling.

use super::stats::summarize_flags;
use super::types::Statement;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export the statement as JSON.
///
/// The report carries the rendered HTML fragment, the plain-text form,
/// the structured segments, and the flag summary.
///
/// # Arguments
/// * `statement` - The compiled statement
/// * `output_path` - Path to write the JSON file
/// * `selected` - Number of records the statement covers
pub fn export_json_report(
    statement: &Statement,
    output_path: &Path,
    selected: usize,
) -> std::io::Result<()> {
    use serde_json::json;

    let summary = summarize_flags(statement);

    let report = json!({
        "generated": chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        "selected_projects": selected,
        "html": statement.to_html(),
        "text": statement.to_text(),
        "segments": statement.segments(),
        "flags": summary,
    });

    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(file, &report)?;

    Ok(())
}

/// Export the statement as a standalone HTML page.
///
/// Self-contained: a tiny document around the statement fragment, so the
/// flag tooltips can be inspected in a browser before pasting.
///
/// # Arguments
/// * `statement` - The compiled statement
/// * `output_path` - Path to write the HTML file
pub fn export_html_page(statement: &Statement, output_path: &Path) -> std::io::Result<()> {
    let mut file = File::create(output_path)?;

    writeln!(file, "<!DOCTYPE html>")?;
    writeln!(file, "<html lang=\"en\">")?;
    writeln!(file, "<head>")?;
    writeln!(file, "<meta charset=\"utf-8\">")?;
    writeln!(file, "<title>Funding statement</title>")?;
    writeln!(file, "</head>")?;
    writeln!(file, "<body>")?;
    writeln!(file, "<!-- Generated: {} -->", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(file, "<p>")?;
    writeln!(file, "{}", statement.to_html())?;
    writeln!(file, "</p>")?;
    writeln!(file, "</body>")?;
    writeln!(file, "</html>")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::compile;
    use crate::types::ProjectRecord;

    fn sample_statement() -> Statement {
        let record = ProjectRecord {
            funding_agency_short_name: Some("DFG".to_string()),
            funding_agency_long_name: Some("German Research Foundation".to_string()),
            project_type: Some("grant".to_string()),
            project_short_name: Some("Alpha".to_string()),
            project_number: Some("101".to_string()),
            ..ProjectRecord::default()
        };
        compile(&[record])
    }

    #[test]
    fn test_json_report_structure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let stmt = sample_statement();
        export_json_report(&stmt, &path, 1).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["selected_projects"], 1);
        assert_eq!(value["html"], serde_json::Value::String(stmt.to_html()));
        assert_eq!(value["text"], serde_json::Value::String(stmt.to_text()));
        assert_eq!(value["flags"]["total"], 0);
        assert!(value["segments"].is_array());
    }

    #[test]
    fn test_json_report_counts_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let stmt = compile(&[ProjectRecord::default()]);
        export_json_report(&stmt, &path, 1).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["flags"]["missing"], 5);
        assert_eq!(value["flags"]["total"], 5);
    }

    #[test]
    fn test_html_page_contains_fragment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statement.html");
        let stmt = sample_statement();
        export_html_page(&stmt, &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("<!DOCTYPE html>"));
        assert!(raw.contains(&stmt.to_html()));
        assert!(raw.trim_end().ends_with("</html>"));
    }
}
