use std::fmt::{Debug, Display};
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::Result;

/// Finalized distances from a single solver invocation
///
/// Holds one entry per node in the graph's node set, in ascending node order.
/// A `None` distance marks a node with no path from the source.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable<N, W> {
    /// Node set in ascending order
    nodes: Vec<N>,

    /// Distance from the source for each node, parallel to `nodes`
    distances: Vec<Option<W>>,

    /// Source node the distances were computed from
    source: N,
}

impl<N, W> DistanceTable<N, W>
where
    N: Copy + Ord + Debug + Display,
    W: Float + Zero + Debug + Copy,
{
    pub(crate) fn new(nodes: Vec<N>, distances: Vec<Option<W>>, source: N) -> Self {
        debug_assert_eq!(nodes.len(), distances.len());
        DistanceTable {
            nodes,
            distances,
            source,
        }
    }

    /// Returns the source node the table was computed from
    pub fn source(&self) -> N {
        self.source
    }

    /// Returns the node set in ascending order
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Returns the distances in ascending node order, `None` for unreachable nodes
    pub fn distances(&self) -> &[Option<W>] {
        &self.distances
    }

    /// Returns the number of nodes in the table
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the table covers no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the distance from the source to the node
    ///
    /// `None` means the node is unreachable or not part of the graph.
    pub fn distance(&self, node: N) -> Option<W> {
        self.nodes
            .binary_search(&node)
            .ok()
            .and_then(|index| self.distances[index])
    }

    /// Returns true if a path from the source to the node exists
    pub fn is_reachable(&self, node: N) -> bool {
        self.distance(node).is_some()
    }

    /// Iterates `(node, distance)` pairs in ascending node order
    pub fn iter(&self) -> impl Iterator<Item = (N, Option<W>)> + '_ {
        self.nodes
            .iter()
            .copied()
            .zip(self.distances.iter().copied())
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: Copy + Ord + Debug + Display,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<N, W>,
{
    /// Compute shortest-path distances from a source node to every node in the graph
    ///
    /// Preconditions are checked before the main loop runs: every weight must
    /// be a non-negative comparable scalar, and the source must belong to the
    /// graph's node set. A violation aborts the invocation with the specific
    /// error; no partial distance table is ever returned.
    fn shortest_distances(&self, graph: &G, source: N) -> Result<DistanceTable<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
