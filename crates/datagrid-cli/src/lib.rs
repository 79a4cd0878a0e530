//! Shared CLI definitions for datagrid.
//!
//! Used by the main binary and by the build script (manpage) and
//! gen_docs binary (command-line-options markdown).

use clap::{CommandFactory, Parser, ValueEnum};

/// How the resulting page is written to stdout
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned plain-text columns followed by a page summary line
    #[default]
    Table,
    /// The full view snapshot as pretty-printed JSON
    Json,
}

/// A `--filter` argument, split into its three parts.
///
/// The operator is kept as text; the library owns the operator vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterArg {
    pub column: String,
    pub operator: String,
    pub value: String,
}

impl std::str::FromStr for FilterArg {
    type Err = String;

    /// Parse `COL:OPERATOR:VALUE`. Only the first two colons separate fields,
    /// so the value may itself contain colons.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let column = parts.next().unwrap_or_default().trim();
        let operator = parts.next().map(str::trim);
        let value = parts.next();
        match (operator, value) {
            (Some(operator), Some(value)) if !column.is_empty() && !operator.is_empty() => {
                Ok(FilterArg {
                    column: column.to_string(),
                    operator: operator.to_string(),
                    value: value.to_string(),
                })
            }
            _ => Err(format!(
                "invalid filter '{}': expected COLUMN:OPERATOR:VALUE, e.g. lifecycle:greaterThan:100",
                s
            )),
        }
    }
}

/// Command-line arguments for datagrid
#[derive(Clone, Parser, Debug)]
#[command(
    name = "datagrid",
    version,
    about = "Filter, search, sort and page a JSON grid document",
    long_about = "Loads a grid document (headers and rows) from a JSON file, replays the \
                  view actions given as flags in a fixed order (sorts, filters, cleared \
                  filters, search, page size, page) and prints the resulting page."
)]
pub struct Args {
    /// Path to the grid document (JSON with `headers` and `rows`).
    /// Not required with --generate-config
    #[arg(required_unless_present = "generate_config", value_name = "PATH")]
    pub path: Option<std::path::PathBuf>,

    /// Toggle the sort on a column. Repeat to toggle several times, in order
    #[arg(long = "sort", value_name = "COL")]
    pub sort: Vec<String>,

    /// Apply a column filter as COLUMN:OPERATOR:VALUE (repeatable).
    /// Operators: equals, startsWith, endsWith, contains, lessThan, greaterThan
    #[arg(long = "filter", value_name = "COL:OP:VALUE")]
    pub filter: Vec<FilterArg>,

    /// Clear the filter on a column after all --filter flags are applied (repeatable)
    #[arg(long = "clear-filter", value_name = "COL")]
    pub clear_filter: Vec<String>,

    /// Free-text search across the searchable columns
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Rows per page (overrides the document and config defaults)
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,

    /// 1-based page to show
    #[arg(long = "page", value_name = "N")]
    pub page: Option<usize>,

    /// Output format
    #[arg(long = "output", value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Enable debug logging to stderr
    #[arg(long = "debug", action)]
    pub debug: bool,

    /// Generate default configuration file at ~/.config/datagrid/config.toml
    #[arg(long = "generate-config", action)]
    pub generate_config: bool,

    /// Force overwrite existing config file when using --generate-config
    #[arg(long = "force", requires = "generate_config", action)]
    pub force: bool,
}

/// Escape `|` and newlines for use in markdown table cells.
fn escape_table_cell(s: &str) -> String {
    s.replace('|', "\\|").replace(['\n', '\r'], " ")
}

fn value_placeholder(arg: &clap::Arg) -> String {
    arg.get_value_names()
        .map(|names| {
            names
                .iter()
                .map(|n: &clap::builder::Str| format!("<{}>", n.as_ref() as &str))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}

/// Render command-line options as markdown.
///
/// Used by the gen_docs binary; output is written to stdout.
pub fn render_options_markdown() -> String {
    let mut cmd = Args::command();
    cmd.build();

    let mut out = String::from("# Command Line Options\n\n");

    out.push_str("## Usage\n\n```\n");
    out.push_str(&cmd.render_usage().to_string());
    out.push_str("\n```\n\n");

    out.push_str("## Options\n\n");
    out.push_str("| Option | Description |\n");
    out.push_str("|--------|-------------|\n");

    for arg in cmd.get_arguments() {
        let id = arg.get_id().as_ref().to_string();
        if id == "help" || id == "version" {
            continue;
        }

        let option_str = if arg.is_positional() {
            let placeholder = value_placeholder(arg);
            if arg.is_required_set() {
                placeholder
            } else {
                format!("[{placeholder}]")
            }
        } else {
            let mut parts = Vec::new();
            if let Some(s) = arg.get_short() {
                parts.push(format!("-{s}"));
            }
            if let Some(l) = arg.get_long() {
                parts.push(format!("--{l}"));
            }
            let op = parts.join(", ");
            let placeholder = if arg.get_action().takes_values() {
                value_placeholder(arg)
            } else {
                String::new()
            };
            if placeholder.is_empty() {
                op
            } else {
                format!("{op} {placeholder}")
            }
        };

        let help = arg
            .get_help()
            .map(|h| escape_table_cell(&h.to_string()))
            .unwrap_or_else(|| "-".to_string());

        out.push_str(&format!("| `{option_str}` | {help} |\n"));
    }

    out
}
