//! Domain types for pipeline graphs.
//!
//! These are the fixed-shape records a pipeline builder submits. Deserializing
//! into them is the validation step: a node without a string `id` is rejected,
//! while any extra attributes the builder attaches (positions, handles, node
//! data) are ignored.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier of a node within a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a new node ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A node in a submitted pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for the node
    pub id: NodeId,
}

impl Node {
    /// Create a node with the given ID
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self { id: id.into() }
    }
}

/// A directed edge between two nodes
///
/// Either endpoint may be absent. An edge whose endpoints do not both name a
/// known node is kept for counting but takes no part in cycle detection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Edge {
    /// ID of the node the edge leaves
    #[serde(
        default,
        deserialize_with = "lenient_endpoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub source: Option<NodeId>,

    /// ID of the node the edge enters
    #[serde(
        default,
        deserialize_with = "lenient_endpoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub target: Option<NodeId>,
}

impl Edge {
    /// Create an edge from `source` to `target`
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: Some(source.into()),
            target: Some(target.into()),
        }
    }

    /// Both endpoints, if both are present
    #[must_use]
    pub fn endpoints(&self) -> Option<(&NodeId, &NodeId)> {
        Some((self.source.as_ref()?, self.target.as_ref()?))
    }
}

/// Accept any JSON value for an edge endpoint.
///
/// Only strings can ever match a node ID, so `null`, numbers, objects and the
/// like all collapse to `None` instead of failing the whole request.
fn lenient_endpoint<'de, D>(deserializer: D) -> Result<Option<NodeId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(NodeId(s)),
        _ => None,
    })
}

/// A submitted pipeline: nodes plus directed edges
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pipeline {
    /// Nodes in submission order
    pub nodes: Vec<Node>,

    /// Edges in submission order
    pub edges: Vec<Edge>,
}

impl Pipeline {
    /// Create a pipeline from nodes and edges
    #[must_use]
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }
}

/// Structural facts about a pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSummary {
    /// Number of node records submitted
    pub num_nodes: usize,

    /// Number of edge records submitted, including dangling ones
    pub num_edges: usize,

    /// Whether the graph contains no directed cycle
    pub is_dag: bool,
}
