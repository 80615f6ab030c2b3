//! Command execution logic.

use anyhow::{Context, Result};

use super::args::CheckArgs;
use crate::graph::analyze;
use crate::input::{Source, load_pipeline};
use crate::output::{OutputConfig, print_summary};

/// Execute the check command
pub async fn execute_check(args: &CheckArgs, json: bool) -> Result<()> {
    let source = Source::from_arg(args.file.as_deref());
    let pipeline = load_pipeline(&source).await?;

    let summary = analyze(&pipeline);

    print_summary(&summary, json, &OutputConfig::from_env())
        .context("Failed to write summary")?;

    Ok(())
}
