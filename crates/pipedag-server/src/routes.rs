//! Request handlers.

use crate::error::ApiError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use pipedag::domain::{Pipeline, PipelineSummary};
use pipedag::graph::analyze;
use serde_json::{Value, json};

/// Liveness check.
pub async fn ping() -> Json<Value> {
    Json(json!({ "Ping": "Pong" }))
}

/// Analyze a submitted pipeline.
///
/// A body that does not deserialize into a [`Pipeline`] (for example a node
/// without an `id`) is rejected before analysis.
pub async fn parse_pipeline(
    payload: Result<Json<Pipeline>, JsonRejection>,
) -> Result<Json<PipelineSummary>, ApiError> {
    let Json(pipeline) = payload?;

    Ok(Json(analyze(&pipeline)))
}
