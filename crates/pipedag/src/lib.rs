//! Pipedag - structural analysis of pipeline graphs.
//!
//! A pipeline is a list of nodes and a list of directed edges, as produced by
//! a visual pipeline builder. This crate answers three questions about it:
//! how many nodes, how many edges, and whether the graph is a directed acyclic
//! graph (DAG).
//!
//! # Example
//!
//! ```
//! use pipedag::domain::{Edge, Node, Pipeline};
//! use pipedag::graph::analyze;
//!
//! let pipeline = Pipeline::new(
//!     vec![Node::new("1"), Node::new("2"), Node::new("3")],
//!     vec![Edge::new("1", "2"), Edge::new("2", "3")],
//! );
//!
//! let summary = analyze(&pipeline);
//! assert_eq!(summary.num_nodes, 3);
//! assert_eq!(summary.num_edges, 2);
//! assert!(summary.is_dag);
//! ```

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod domain;
pub mod error;
pub mod graph;
pub mod input;

// Public CLI module (needed by binary)
pub mod cli;

// Terminal rendering for the CLI
pub mod output;
