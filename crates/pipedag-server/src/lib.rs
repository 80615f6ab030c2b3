//! HTTP server for pipeline graph analysis.
//!
//! A pipeline builder submits its graph as JSON and gets back the node count,
//! the edge count and whether the graph is a DAG. The analysis itself lives in
//! the `pipedag` crate; this crate is the transport around it.
//!
//! # Routes
//!
//! - `GET /` - liveness check, returns `{"Ping": "Pong"}`
//! - `POST /pipelines/parse` - analyze a pipeline, returns
//!   `{"num_nodes": .., "num_edges": .., "is_dag": ..}`
//!
//! # Architecture
//!
//! Handlers hold no state. Every request deserializes its own pipeline,
//! builds and drops its own graph, so requests are processed in parallel
//! without locking. Malformed bodies are rejected by the JSON extractor before
//! the analyzer runs.

pub mod app;
pub mod config;
pub mod error;
pub mod routes;

pub use app::{router, serve};
pub use config::{ServerArgs, ServerConfig};
pub use error::{ApiError, Error, Result};
