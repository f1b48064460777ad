//! Statement compilation module - grouping, validation, and rendering.
//!
//! This module handles:
//! - Partitioning selected records by funding agency
//! - Validating required and group-level fields into inline flags
//! - Rendering the grammatically correct statement sentence
//! - Flag statistics for the console summary and exports
//! - Export to HTML and JSON files
//!
//! Console rendering of the statement is handled by the console module.
//!
//! # Module Organization
//!
//! - `types` - Core statement types (Segment, Statement, FlagKind)
//! - `group` - Agency grouping in first-occurrence order
//! - `fields` - Field validation producing flagged placeholders
//! - `render` - The sentence grammar
//! - `stats` - Flag counts by kind
//! - `export` - HTML page and JSON report files

mod export;
mod fields;
mod group;
mod render;
mod stats;
mod types;

// Re-export types
pub use types::{Segment, Statement};

// Re-export the compiler entry point
pub use render::compile;

// Re-export stats functions
pub use stats::{summarize_flags, FlagSummary};

// Re-export export functions
pub use export::{export_html_page, export_json_report};
