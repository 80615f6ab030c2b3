//! Pipedag CLI binary.

use anyhow::Result;
use pipedag::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the pipedag CLI.
///
/// Uses tokio's `current_thread` runtime; the only I/O is reading one document.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so `--json` output stays machine-readable.
    // Example: RUST_LOG=pipedag=debug pipedag check pipeline.json
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pipedag=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Pipedag CLI completed successfully");
    Ok(())
}
