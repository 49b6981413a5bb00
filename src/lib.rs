//! Edge SSSP - Single-Source Shortest Path Distances over Edge Lists
//!
//! This library computes single-source shortest-path distances over weighted,
//! directed graphs with non-negative edge weights, using Dijkstra's algorithm.
//!
//! Graphs are ingested as flat edge lists: the node set is the deduplicated,
//! ascending-sorted union of every identifier appearing as an edge endpoint,
//! and the solver returns one distance per node in that same order. A node
//! with no path from the source is reported as unreachable rather than with a
//! fake large distance.

pub mod algorithm;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, DistanceTable, ShortestPathAlgorithm};
/// Re-export main types for convenient use
pub use graph::edge_list::{Edge, EdgeList};

/// Error types for the library
#[derive(Debug)]
pub enum Error {
    Schema {
        sources: usize,
        targets: usize,
        weights: usize,
    },

    InvalidArgument(String),

    UnknownNode(String),

    NegativeWeight {
        source: String,
        target: String,
        weight: String,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Schema {
                sources,
                targets,
                weights,
            } => write!(
                f,
                "Edge columns have mismatched lengths: {sources} sources, {targets} targets, {weights} weights"
            ),
            Error::InvalidArgument(arg) => write!(f, "Invalid scalar argument: {arg}"),
            Error::UnknownNode(node) => write!(f, "Source node {node} not found in graph"),
            Error::NegativeWeight {
                source,
                target,
                weight,
            } => write!(
                f,
                "Negative edge weight: {weight} on edge {source} -> {target}"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
