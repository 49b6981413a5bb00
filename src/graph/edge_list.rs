use std::fmt::{Debug, Display};

use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};

use crate::graph::traits::Graph;
use crate::{Error, Result};

/// A single directed edge carrying a weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge<N, W> {
    pub source: N,
    pub target: N,
    pub weight: W,
}

/// A directed graph stored as a flat edge list
///
/// The node set is derived from the edges: every identifier appearing as a
/// source or target belongs to the graph, deduplicated and kept in ascending
/// order. Nodes with no incident edges can be registered explicitly with
/// [`EdgeList::add_node`].
///
/// Self-loops and parallel edges between the same pair of nodes are allowed;
/// weight validation happens when a solver consumes the graph, not here.
#[derive(Debug, Clone)]
pub struct EdgeList<N, W> {
    /// Distinct node identifiers in ascending order
    nodes: Vec<N>,

    /// All edges in insertion order
    edges: Vec<Edge<N, W>>,
}

impl<N, W> EdgeList<N, W>
where
    N: Copy + Ord + Debug + Display,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty edge list
    pub fn new() -> Self {
        EdgeList {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Builds a graph from an iterator of edges
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge<N, W>>,
    {
        let mut graph = EdgeList::new();
        for edge in edges {
            graph.add_edge(edge.source, edge.target, edge.weight);
        }
        graph
    }

    /// Builds a graph from three parallel columns of sources, targets and weights
    ///
    /// The columns must all have the same length; a mismatch means the input
    /// does not have the source/target/weight shape and fails with
    /// [`Error::Schema`].
    pub fn from_columns(sources: Vec<N>, targets: Vec<N>, weights: Vec<W>) -> Result<Self> {
        if sources.len() != targets.len() || sources.len() != weights.len() {
            return Err(Error::Schema {
                sources: sources.len(),
                targets: targets.len(),
                weights: weights.len(),
            });
        }

        let edges = sources
            .into_iter()
            .zip(targets)
            .zip(weights)
            .map(|((source, target), weight)| Edge {
                source,
                target,
                weight,
            });

        Ok(EdgeList::from_edges(edges))
    }

    /// Appends a directed edge, registering both endpoints in the node set
    pub fn add_edge(&mut self, source: N, target: N, weight: W) {
        self.add_node(source);
        self.add_node(target);
        self.edges.push(Edge {
            source,
            target,
            weight,
        });
    }

    /// Registers a node with no incident edges
    ///
    /// Returns false if the node was already part of the node set.
    pub fn add_node(&mut self, node: N) -> bool {
        match self.nodes.binary_search(&node) {
            Ok(_) => false,
            Err(pos) => {
                self.nodes.insert(pos, node);
                true
            }
        }
    }

}

impl<N, W> Default for EdgeList<N, W>
where
    N: Copy + Ord + Debug + Display,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        EdgeList::new()
    }
}

impl<N, W> Graph<N, W> for EdgeList<N, W>
where
    N: Copy + Ord + Debug + Display,
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn nodes(&self) -> &[N] {
        &self.nodes
    }

    fn node_index(&self, node: N) -> Option<usize> {
        self.nodes.binary_search(&node).ok()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Edge<N, W>> + '_> {
        Box::new(self.edges.iter().copied())
    }
}
