use clap::Parser;
use std::path::PathBuf;

/// Default catalog filename looked up in the working directory.
pub const DEFAULT_CATALOG: &str = "projects.csv";

#[derive(Parser, Debug, Clone)]
#[command(name = "fundstmt")]
#[command(about = "Generate grammatically correct funding statements from a project catalog")]
#[command(version)]
pub struct CliArgs {
    /// Path to the project catalog (semicolon-delimited CSV)
    #[arg(long, short = 'C', value_name = "PATH", default_value = DEFAULT_CATALOG)]
    pub catalog: PathBuf,

    /// List the visible catalog projects and exit
    #[arg(long, short = 'l')]
    pub list: bool,

    /// Select projects by catalog position as shown by --list (1-based)
    /// Can specify multiple: --select 1 3 4
    #[arg(long, short = 's', value_name = "INDEX", num_args = 1..)]
    pub select: Vec<usize>,

    /// Select projects by short name
    /// Can specify multiple: --projects Alpha Beta
    #[arg(long, value_name = "NAME", num_args = 1..)]
    pub projects: Vec<String>,

    /// Select every project in these catalog groups
    #[arg(long, value_name = "GROUP", num_args = 1..)]
    pub groups: Vec<String>,

    /// Select every visible project in the catalog
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Print the raw HTML fragment instead of the annotated console view
    #[arg(long)]
    pub html: bool,

    /// Print the plain-text sentence instead of the annotated console view
    #[arg(long)]
    pub text: bool,

    /// Write a standalone HTML page to this path
    #[arg(long = "output-html", value_name = "PATH")]
    pub output_html: Option<PathBuf>,

    /// Write a JSON report to this path
    #[arg(long = "output-json", value_name = "PATH")]
    pub output_json: Option<PathBuf>,

    /// Disable colored console output
    #[arg(long)]
    pub no_color: bool,

    /// Override console width for testing (default: auto-detect)
    #[arg(long, value_name = "COLUMNS")]
    pub console_width: Option<usize>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.html && self.text {
            return Err("Cannot specify both --html and --text".to_string());
        }

        if self.list && self.has_selection() {
            return Err("--list shows the whole catalog and does not take a selection".to_string());
        }

        if self.all && (!self.select.is_empty() || !self.projects.is_empty() || !self.groups.is_empty()) {
            return Err("--all already selects every project; drop --select/--projects/--groups".to_string());
        }

        if !self.list && !self.has_selection() {
            return Err(
                "Nothing selected. Use --select, --projects, --groups or --all, or --list to see the catalog"
                    .to_string(),
            );
        }

        Ok(())
    }

    /// Is any selector present, including --all?
    pub fn has_selection(&self) -> bool {
        self.all || !self.select.is_empty() || !self.projects.is_empty() || !self.groups.is_empty()
    }
}
