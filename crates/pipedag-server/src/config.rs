//! Server configuration.
//!
//! Settings are layered: built-in defaults, then an optional YAML file, then
//! command-line flags (each of which can also come from an environment
//! variable). Later layers win.
//!
//! ```yaml
//! host: 0.0.0.0
//! port: 8000
//! allowed_origins:
//!   - http://localhost:3000
//! allow_credentials: true
//! max_body_bytes: 0   # no limit
//! ```

use crate::error::{Error, Result};
use axum::http::HeaderValue;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default listen address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default CORS origin: the pipeline builder's development server.
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Default request-body limit in bytes; `0` means unlimited.
pub const DEFAULT_MAX_BODY_BYTES: usize = 0;

/// Origin value that admits any caller.
pub const ANY_ORIGIN: &str = "*";

/// Effective server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address or hostname to listen on
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Origins permitted to call the API from a browser
    pub allowed_origins: Vec<String>,

    /// Whether browsers may send credentials with cross-origin requests
    pub allow_credentials: bool,

    /// Largest accepted request body in bytes; `0` disables the limit
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: vec![DEFAULT_ORIGIN.to_string()],
            allow_credentials: true,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Command-line arguments for `pipedag-server`
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "pipedag-server")]
#[command(author, version, about, long_about = None)]
pub struct ServerArgs {
    /// YAML configuration file
    #[arg(short, long, env = "PIPEDAG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address or hostname to listen on [default: 127.0.0.1]
    #[arg(long, env = "PIPEDAG_HOST")]
    pub host: Option<String>,

    /// Port to listen on [default: 8000]
    #[arg(short, long, env = "PIPEDAG_PORT")]
    pub port: Option<u16>,

    /// Origin permitted to make cross-origin requests (repeatable)
    ///
    /// Replaces the configured list when given. Use `*` to allow any origin,
    /// which requires `--no-credentials`.
    #[arg(
        long = "allowed-origin",
        env = "PIPEDAG_ALLOWED_ORIGINS",
        value_delimiter = ','
    )]
    pub allowed_origins: Vec<String>,

    /// Do not allow credentials on cross-origin requests
    #[arg(long)]
    pub no_credentials: bool,

    /// Largest accepted request body in bytes, 0 for no limit [default: 0]
    #[arg(long, env = "PIPEDAG_MAX_BODY_BYTES")]
    pub max_body_bytes: Option<usize>,
}

impl ServerArgs {
    /// Parse arguments from the command line and environment
    #[must_use]
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }
}

impl ServerConfig {
    /// Read configuration from a YAML file.
    ///
    /// Fields missing from the file keep their defaults.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_yaml::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build the effective configuration from command-line arguments.
    pub fn load(args: &ServerArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };

        config.apply(args);
        config.validate()?;
        Ok(config)
    }

    /// Apply explicit command-line overrides.
    pub fn apply(&mut self, args: &ServerArgs) {
        if let Some(host) = &args.host {
            self.host.clone_from(host);
        }
        if let Some(port) = args.port {
            self.port = port;
        }
        if !args.allowed_origins.is_empty() {
            self.allowed_origins.clone_from(&args.allowed_origins);
        }
        if args.no_credentials {
            self.allow_credentials = false;
        }
        if let Some(limit) = args.max_body_bytes {
            self.max_body_bytes = limit;
        }
    }

    /// Check that the configuration describes a usable CORS policy.
    pub fn validate(&self) -> Result<()> {
        if self.allowed_origins.is_empty() {
            return Err(Error::Config(
                "at least one allowed origin is required".to_string(),
            ));
        }

        if self.allow_credentials && self.allows_any_origin() {
            return Err(Error::Config(format!(
                "origin '{ANY_ORIGIN}' cannot be combined with credentials; \
                 list origins explicitly or disable credentials"
            )));
        }

        self.origin_header_values().map(|_| ())
    }

    /// Whether the wildcard origin is configured
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == ANY_ORIGIN)
    }

    /// Request-body limit, or `None` when unlimited
    #[must_use]
    pub fn body_limit(&self) -> Option<usize> {
        (self.max_body_bytes > 0).then_some(self.max_body_bytes)
    }

    /// Allowed origins as header values.
    pub fn origin_header_values(&self) -> Result<Vec<HeaderValue>> {
        self.allowed_origins
            .iter()
            .filter(|o| o.as_str() != ANY_ORIGIN)
            .map(|o| HeaderValue::from_str(o).map_err(|_| Error::InvalidOrigin(o.clone())))
            .collect()
    }
}
