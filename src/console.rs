/// Console rendering module - Pure output concerns
///
/// This module handles all console output formatting including:
/// - The annotated statement view with footnoted flags
/// - The numbered catalog listing that --select indices refer to
/// - Text truncation and padding
/// - Color terminal output
///
/// It accepts compiled statements from the statement module and renders
/// them to any `std::io::Write` destination.
use crate::statement::{summarize_flags, FlagSummary, Segment, Statement};
use crate::types::ProjectRecord;
use std::io::{self, Write};
use std::sync::OnceLock;
use term::color::Color;
use terminal_size::{Width, terminal_size};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

//
// Console Width
//

// Width override, set once from --console-width.
static WIDTH_OVERRIDE: OnceLock<usize> = OnceLock::new();

/// Override the detected console width (set from --console-width; also the
/// hook reproducible tests use).
pub fn set_console_width(width: usize) {
    let _ = WIDTH_OVERRIDE.set(width); // Ignore error if already set
}

/// Console width: the override if set, else the terminal, else 120.
fn console_width() -> usize {
    if let Some(w) = WIDTH_OVERRIDE.get() {
        return *w;
    }
    if let Some((Width(w), _)) = terminal_size() {
        w as usize
    } else {
        120
    }
}

//
// Text Formatting Utilities
//

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Fit a string to an exact display width, truncating with ".." on overflow
pub fn fit_cell(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current <= width {
        return format!("{}{}", s, " ".repeat(width - current));
    }

    let marker = if width >= 2 { 2 } else { 0 };
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(1);
        if used + w > width - marker {
            break;
        }
        out.push(c);
        used += w;
    }
    if marker > 0 {
        out.push_str("..");
        used += marker;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

//
// Statement Rendering
//

/// Writer for the annotated statement view - configurable for color/plain text
pub struct StatementWriter<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> StatementWriter<W> {
    /// Create a new statement writer
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Write text, optionally with color
    fn write_colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.use_colors {
            if let Some(ref mut t) = term::stdout() {
                let _ = t.fg(color);
                let _ = t.write_all(text.as_bytes());
                let _ = t.reset();
                Ok(())
            } else {
                write!(self.writer, "{}", text)
            }
        } else {
            write!(self.writer, "{}", text)
        }
    }

    /// Write the statement with `[n]` flag markers, followed by the
    /// numbered tooltip footnotes and a one-line flag summary.
    pub fn write_statement(&mut self, statement: &Statement) -> io::Result<()> {
        let mut footnotes: Vec<String> = Vec::new();

        for segment in statement.segments() {
            match segment {
                Segment::Text(text) => write!(self.writer, "{}", text)?,
                Segment::LineBreak => writeln!(self.writer)?,
                Segment::Flagged { display, tooltip, .. } => {
                    footnotes.push(tooltip.clone());
                    let marked = format!("{}[{}]", display, footnotes.len());
                    self.write_colored(&marked, term::color::BRIGHT_RED)?;
                }
            }
        }
        writeln!(self.writer)?;

        if !footnotes.is_empty() {
            writeln!(self.writer)?;
            for (i, tooltip) in footnotes.iter().enumerate() {
                writeln!(self.writer, "  [{}] {}", i + 1, tooltip)?;
            }
        }

        writeln!(self.writer)?;
        writeln!(self.writer, "{}", format_flag_summary(&summarize_flags(statement)))?;
        Ok(())
    }
}

/// One-line flag summary, e.g. `3 flags: 2 missing, 1 mismatching`
pub fn format_flag_summary(summary: &FlagSummary) -> String {
    if summary.is_clean() {
        return "No data problems found".to_string();
    }

    let mut parts = Vec::new();
    if summary.missing > 0 {
        parts.push(format!("{} missing", summary.missing));
    }
    if summary.mismatch > 0 {
        parts.push(format!("{} mismatching", summary.mismatch));
    }
    if summary.integrity > 0 {
        parts.push(format!("{} integrity", summary.integrity));
    }

    let noun = if summary.total == 1 { "flag" } else { "flags" };
    format!("{} {}: {}", summary.total, noun, parts.join(", "))
}

/// Print the annotated statement to stdout
pub fn print_statement(statement: &Statement, use_colors: bool) {
    let mut writer = StatementWriter::new(io::stdout(), use_colors);
    let _ = writer.write_statement(statement);
}

//
// Catalog Listing
//

/// Column widths for the catalog listing
struct ListingWidths {
    index: usize,
    name: usize,
    number: usize,
    kind: usize,
    agency: usize,
    group: usize,
    period: usize,
}

impl ListingWidths {
    fn new(total: usize) -> Self {
        // Fixed columns plus one space between each; the project name
        // column absorbs whatever remains.
        let index = 4;
        let number = 10;
        let kind = 12;
        let agency = 10;
        let group = 10;
        let period = 24;
        let gaps = 6;

        let fixed = index + number + kind + agency + group + period + gaps;
        let name = if total > fixed + 12 { total - fixed } else { 12 };

        ListingWidths { index, name, number, kind, agency, group, period }
    }
}

/// Format the numbered catalog listing as a string.
///
/// Positions are 1-based and match what --select expects.
pub fn format_catalog_listing(records: &[ProjectRecord]) -> String {
    let w = ListingWidths::new(console_width());
    let mut out = String::new();

    out.push_str(&format!(
        "{} {} {} {} {} {} {}\n",
        fit_cell("#", w.index),
        fit_cell("Project", w.name),
        fit_cell("Number", w.number),
        fit_cell("Type", w.kind),
        fit_cell("Agency", w.agency),
        fit_cell("Group", w.group),
        fit_cell("Period", w.period),
    ));

    let rule_width = w.index + w.name + w.number + w.kind + w.agency + w.group + w.period + 6;
    out.push_str(&format!("{}\n", "-".repeat(rule_width)));

    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!(
            "{} {} {} {} {} {} {}\n",
            fit_cell(&(i + 1).to_string(), w.index),
            fit_cell(record.project_short_name.as_deref().unwrap_or(""), w.name),
            fit_cell(record.project_number.as_deref().unwrap_or(""), w.number),
            fit_cell(record.project_type.as_deref().unwrap_or(""), w.kind),
            fit_cell(record.funding_agency_short_name.as_deref().unwrap_or(""), w.agency),
            fit_cell(record.group.as_deref().unwrap_or(""), w.group),
            fit_cell(&record.display_period(), w.period),
        ));
    }

    out
}

/// Print the numbered catalog listing to stdout
pub fn print_catalog_listing(records: &[ProjectRecord]) {
    print!("{}", format_catalog_listing(records));
}

#[cfg(test)]
#[path = "console_test.rs"]
mod console_test;
