//! Pipeline graph construction and cycle detection.
//!
//! The graph is built fresh for every analysis and borrows its identifiers
//! from the submitted records, so nothing outlives the call. Node IDs are
//! mapped to dense indices in first-seen order; adjacency lists keep edges in
//! submission order.
//!
//! Cycle detection is a depth-first search that tracks which nodes are on the
//! current path. The descent runs on an explicit frame stack rather than the
//! call stack, so long chains cannot overflow it.

use crate::domain::{Edge, Node, Pipeline, PipelineSummary};
use std::collections::HashMap;

/// Traversal state of a node during cycle detection.
///
/// `OnStack` and `Done` together form the visited set; `OnStack` alone is the
/// set of nodes on the active path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

/// Adjacency view of a pipeline.
///
/// Only edges whose source and target both name a known node are stored.
/// Everything else is counted in [`PipelineGraph::dangling_edges`] and
/// otherwise ignored.
#[derive(Debug, Clone)]
pub struct PipelineGraph<'a> {
    /// Distinct node IDs in first-seen order
    ids: Vec<&'a str>,
    /// Reverse lookup from ID to index in `ids`
    index: HashMap<&'a str, usize>,
    /// Outgoing neighbours per node, in edge submission order
    successors: Vec<Vec<usize>>,
    dangling_edges: usize,
}

impl<'a> PipelineGraph<'a> {
    /// Build the adjacency view from node and edge records.
    ///
    /// Every node ID gets an (initially empty) successor list. An edge is
    /// appended to its source's list only if both endpoints are known IDs.
    #[must_use]
    pub fn build(nodes: &'a [Node], edges: &'a [Edge]) -> Self {
        let mut ids = Vec::with_capacity(nodes.len());
        let mut index = HashMap::with_capacity(nodes.len());

        for node in nodes {
            let id = node.id.as_str();
            index.entry(id).or_insert_with(|| {
                ids.push(id);
                ids.len() - 1
            });
        }

        let mut successors = vec![Vec::new(); ids.len()];
        let mut dangling_edges = 0;

        for edge in edges {
            let resolved = edge.endpoints().and_then(|(source, target)| {
                Some((*index.get(source.as_str())?, *index.get(target.as_str())?))
            });

            match resolved {
                Some((source, target)) => successors[source].push(target),
                None => dangling_edges += 1,
            }
        }

        Self {
            ids,
            index,
            successors,
            dangling_edges,
        }
    }

    /// Number of distinct node IDs in the graph
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of edges kept for traversal
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    /// Number of edges dropped because an endpoint was absent or unknown
    #[must_use]
    pub fn dangling_edges(&self) -> usize {
        self.dangling_edges
    }

    /// Targets of the kept outgoing edges of `id`, in submission order.
    ///
    /// Returns `None` if `id` is not a node of this graph.
    pub fn successors<'s>(
        &'s self,
        id: &str,
    ) -> Option<impl Iterator<Item = &'a str> + use<'s, 'a>> {
        let node = *self.index.get(id)?;
        Some(self.successors[node].iter().map(|&next| self.ids[next]))
    }

    /// Whether the graph contains no directed cycle.
    #[must_use]
    pub fn is_dag(&self) -> bool {
        self.find_back_edge().is_none()
    }

    /// Depth-first search for an edge that closes a cycle.
    ///
    /// Start points are taken in node order, skipping anything an earlier
    /// descent already reached, so every component is covered. Each frame on
    /// `stack` holds a node and the position of the next neighbour to try,
    /// which reproduces the recursive visit order exactly. Returns the first
    /// back-edge found as `(from, to)` indices.
    fn find_back_edge(&self) -> Option<(usize, usize)> {
        let mut marks = vec![Mark::Unvisited; self.ids.len()];
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for start in 0..self.ids.len() {
            if marks[start] != Mark::Unvisited {
                continue;
            }

            marks[start] = Mark::OnStack;
            stack.push((start, 0));

            while let Some(frame) = stack.last_mut() {
                let (node, cursor) = *frame;

                let Some(&next) = self.successors[node].get(cursor) else {
                    marks[node] = Mark::Done;
                    stack.pop();
                    continue;
                };
                frame.1 += 1;

                match marks[next] {
                    Mark::Unvisited => {
                        marks[next] = Mark::OnStack;
                        stack.push((next, 0));
                    }
                    Mark::OnStack => return Some((node, next)),
                    Mark::Done => {}
                }
            }
        }

        None
    }
}

/// Check whether the given nodes and edges form a directed acyclic graph.
///
/// Edges with an absent or unknown endpoint are ignored.
#[must_use]
pub fn is_directed_acyclic_graph(nodes: &[Node], edges: &[Edge]) -> bool {
    PipelineGraph::build(nodes, edges).is_dag()
}

/// Summarize a pipeline: record counts plus the DAG verdict.
///
/// The counts are taken from the records as submitted, so dangling edges and
/// duplicate node IDs are included in them.
#[must_use]
pub fn analyze(pipeline: &Pipeline) -> PipelineSummary {
    let graph = PipelineGraph::build(&pipeline.nodes, &pipeline.edges);
    let back_edge = graph.find_back_edge();

    if let Some((from, to)) = back_edge {
        tracing::debug!(
            from = graph.ids[from],
            to = graph.ids[to],
            "Cycle closed by back-edge"
        );
    }

    let summary = PipelineSummary {
        num_nodes: pipeline.nodes.len(),
        num_edges: pipeline.edges.len(),
        is_dag: back_edge.is_none(),
    };

    tracing::debug!(
        num_nodes = summary.num_nodes,
        num_edges = summary.num_edges,
        dangling_edges = graph.dangling_edges(),
        is_dag = summary.is_dag,
        "Analyzed pipeline"
    );

    summary
}
