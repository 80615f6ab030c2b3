//! CLI argument structs.

use clap::Parser;
use std::path::PathBuf;

/// Arguments for the `check` command
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Pipeline document to analyze
    ///
    /// A JSON object with `nodes` and `edges` arrays. Reads stdin when
    /// omitted or given as `-`.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}
