//! Loading pipeline documents from files or stdin.

use crate::domain::Pipeline;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// Where a pipeline document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Read from standard input
    Stdin,
    /// Read from a file on disk
    File(PathBuf),
}

impl Source {
    /// Interpret a CLI path argument; `None` and `-` both mean stdin.
    #[must_use]
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            None => Self::Stdin,
            Some(p) if p.as_os_str() == "-" => Self::Stdin,
            Some(p) => Self::File(p.to_path_buf()),
        }
    }

    /// Path used when reporting errors
    #[must_use]
    pub fn display_path(&self) -> PathBuf {
        match self {
            Self::Stdin => PathBuf::from("-"),
            Self::File(path) => path.clone(),
        }
    }
}

/// Parse a pipeline from JSON text.
///
/// `origin` is only used to label errors.
pub fn parse_pipeline(text: &str, origin: &Path) -> Result<Pipeline> {
    serde_json::from_str(text).map_err(|source| Error::Json {
        path: origin.to_path_buf(),
        source,
    })
}

/// Read and parse a pipeline document.
pub async fn load_pipeline(source: &Source) -> Result<Pipeline> {
    let path = source.display_path();
    let io_error = |source: std::io::Error| Error::Io {
        path: path.clone(),
        source,
    };

    let text = match source {
        Source::Stdin => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .map_err(io_error)?;
            buf
        }
        Source::File(file) => tokio::fs::read_to_string(file).await.map_err(io_error)?,
    };

    tracing::debug!(path = %path.display(), bytes = text.len(), "Read pipeline document");

    parse_pipeline(&text, &path)
}
