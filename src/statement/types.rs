//! Rendering model for the funding statement.
//!
//! The compiler never aborts on bad data: every problem becomes a flagged
//! segment that renders inline, so the sentence is always fully produced.
//! The segment list doubles as the structured output form consumed by the
//! console writer, the JSON report, and the tests.

/// Display value of a flagged field slot.
pub const FLAG_PLACEHOLDER: &str = "???";

/// What kind of data problem a flag reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    /// A required field is empty or absent
    Missing,
    /// A group-level field disagrees across the group's records
    Mismatch,
    /// An agency group reached the renderer with zero records
    Integrity,
}

/// A fragment of the rendered statement.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Segment {
    /// Plain sentence text, rendered verbatim (entity-escaped in HTML)
    Text(String),

    /// Line break before an agency entry
    LineBreak,

    /// Inline data-quality flag: display value plus explanatory tooltip
    Flagged {
        kind: FlagKind,
        display: String,
        tooltip: String,
    },
}

impl Segment {
    /// Standard field flag: `"???"` plus the given tooltip.
    pub fn flagged(kind: FlagKind, tooltip: String) -> Segment {
        Segment::Flagged { kind, display: FLAG_PLACEHOLDER.to_string(), tooltip }
    }
}

/// The assembled funding statement: an ordered list of segments.
///
/// Built once per invocation by `compile`; holds no state beyond the
/// segments themselves.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Statement {
    segments: Vec<Segment>,
}

impl Statement {
    pub fn new() -> Self {
        Self { segments: Vec::new() }
    }

    /// Append plain text, merging into a trailing text segment so the
    /// structured form stays one segment per uninterrupted sentence run.
    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Text(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(Segment::Text(text.to_string()));
        }
    }

    /// Append a line break.
    pub fn push_break(&mut self) {
        self.segments.push(Segment::LineBreak);
    }

    /// Append any segment; text segments go through the merging path.
    pub fn push(&mut self, segment: Segment) {
        match segment {
            Segment::Text(text) => self.push_text(&text),
            other => self.segments.push(other),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Serialize to the HTML fragment handed to the display layer.
    ///
    /// Data-derived text is entity-escaped; flags become red tooltip spans.
    /// Equal statements serialize to identical bytes.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(self.segments.len() * 24);
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(&escape_html(text)),
                Segment::LineBreak => out.push_str("<br>"),
                Segment::Flagged { display, tooltip, .. } => {
                    out.push_str("<span style=\"color: red\" title=\"");
                    out.push_str(&escape_html(tooltip));
                    out.push_str("\">");
                    out.push_str(&escape_html(display));
                    out.push_str("</span>");
                }
            }
        }
        out
    }

    /// Markup-free rendition: flags collapse to their display value,
    /// breaks to newlines. Tooltips are not included (the console writer
    /// prints them as footnotes instead).
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::LineBreak => out.push('\n'),
                Segment::Flagged { display, .. } => out.push_str(display),
            }
        }
        out
    }
}

/// Minimal entity escape for text embedded in the HTML fragment.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
