//! Error types for pipedag operations.
//!
//! The analyzer itself cannot fail. These errors cover getting a pipeline
//! document into memory: reading it and parsing it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for loading pipeline documents.
#[derive(Debug, Error)]
pub enum Error {
    /// The document could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Where the document was read from (`-` for stdin)
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: io::Error,
    },

    /// The document is not a valid pipeline.
    #[error("invalid pipeline in {}: {source}", path.display())]
    Json {
        /// Where the document was read from (`-` for stdin)
        path: PathBuf,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

/// A specialized Result type for pipedag operations.
pub type Result<T> = std::result::Result<T, Error>;
