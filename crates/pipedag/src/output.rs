//! Output formatting for CLI commands.
//!
//! Summaries are printed either as an aligned table of the three facts or as
//! JSON for programmatic use.
//!
//! Semantic Color Theme:
//!   - Success: green (graph is a DAG)
//!   - Error:   red   (graph has a cycle)
//!   - Muted:   dimmed (field labels)

use crate::domain::PipelineSummary;
use colored::Colorize;
use std::env;
use std::io::{self, IsTerminal, Write};

/// Width of the label column in the summary table.
const LABEL_WIDTH: usize = 17;

/// Configuration for output formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    #[must_use]
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Create an `OutputConfig` by reading from the environment.
    ///
    /// Reads:
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `PIPEDAG_COLOR`: Set to "0" or "false" to disable colors (default: true)
    ///
    /// Colors are also disabled when stdout is not a terminal.
    #[must_use]
    pub fn from_env() -> Self {
        let no_color = env::var_os("NO_COLOR").is_some();
        let disabled = env::var("PIPEDAG_COLOR")
            .is_ok_and(|v| matches!(v.to_ascii_lowercase().as_str(), "0" | "false"));

        Self::new(!no_color && !disabled && io::stdout().is_terminal())
    }
}

/// Render a summary as a human-readable table.
#[must_use]
pub fn render_summary(summary: &PipelineSummary, config: &OutputConfig) -> String {
    let verdict = if summary.is_dag { "Yes" } else { "No" };
    let verdict = match (config.use_colors, summary.is_dag) {
        (false, _) => verdict.to_string(),
        (true, true) => verdict.green().bold().to_string(),
        (true, false) => verdict.red().bold().to_string(),
    };

    let rows = [
        ("Number of Nodes", summary.num_nodes.to_string()),
        ("Number of Edges", summary.num_edges.to_string()),
        ("Is DAG", verdict),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        let label = format!("{label:<LABEL_WIDTH$}");
        let label = if config.use_colors {
            label.dimmed().to_string()
        } else {
            label
        };
        out.push_str(&label);
        out.push_str(&value);
        out.push('\n');
    }
    out
}

/// Print a summary to stdout as text or JSON.
pub fn print_summary(
    summary: &PipelineSummary,
    json: bool,
    config: &OutputConfig,
) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer(&mut stdout, summary)?;
        writeln!(stdout)
    } else {
        write!(stdout, "{}", render_summary(summary, config))
    }
}
