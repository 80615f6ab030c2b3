//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `check`: Analyze a pipeline document and report node count, edge count
//!   and whether the graph is a DAG
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! pipedag check pipeline.json
//! cat pipeline.json | pipedag check --json
//! ```

mod args;
mod execute;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use args::CheckArgs;

/// Pipedag - structural analysis of pipeline graphs
///
/// Reads a pipeline document (`{"nodes": [...], "edges": [...]}`) and reports
/// how many nodes and edges it has and whether it is a directed acyclic graph.
#[derive(Parser, Debug)]
#[command(name = "pipedag")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Analyze a pipeline document
    ///
    /// Prints the number of nodes, the number of edges and whether the graph
    /// is a DAG. Edges that reference unknown nodes are counted but do not
    /// take part in cycle detection.
    Check(CheckArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    #[must_use]
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Check(args) => execute::execute_check(args, self.json).await,
        }
    }
}
