use std::fmt::{Debug, Display};

use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::{DistanceTable, ShortestPathAlgorithm};
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over an edge-list graph
///
/// Label-setting with a linear frontier scan: each iteration settles the
/// closest unvisited node and relaxes its outgoing edges. Selection is O(n)
/// per iteration, so a full run is O(n² + m) with no priority queue. Node
/// identifiers are mapped to dense indices into the sorted node set once, and
/// all working state lives in flat arrays keyed by those indices.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Rejects weights Dijkstra cannot run on: NaN and negative values
    fn validate_weights<N, W, G>(graph: &G) -> Result<()>
    where
        N: Copy + Ord + Debug + Display,
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<N, W>,
    {
        for edge in graph.edges() {
            if edge.weight.is_nan() {
                return Err(Error::InvalidArgument(format!(
                    "weight on edge {} -> {} is NaN",
                    edge.source, edge.target
                )));
            }
            if edge.weight < W::zero() {
                return Err(Error::NegativeWeight {
                    source: edge.source.to_string(),
                    target: edge.target.to_string(),
                    weight: format!("{:?}", edge.weight),
                });
            }
        }
        Ok(())
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: Copy + Ord + Debug + Display,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_distances(&self, graph: &G, source: N) -> Result<DistanceTable<N, W>> {
        // Precondition checks, all before the main loop
        let source_index = graph
            .node_index(source)
            .ok_or_else(|| Error::UnknownNode(source.to_string()))?;
        Self::validate_weights(graph)?;

        let nodes = graph.nodes().to_vec();
        let n = nodes.len();

        debug!(
            "dijkstra over {} nodes / {} edges, source {}",
            n,
            graph.edge_count(),
            source
        );

        // Group edges by source index once; endpoints are guaranteed to be in
        // the node set by the Graph contract
        let mut adjacency: Vec<Vec<(usize, W)>> = vec![Vec::new(); n];
        for edge in graph.edges() {
            if let (Ok(u), Ok(v)) = (
                nodes.binary_search(&edge.source),
                nodes.binary_search(&edge.target),
            ) {
                adjacency[u].push((v, edge.weight));
            }
        }

        // Unset distance doubles as the unreachable sentinel
        let mut dist: Vec<Option<W>> = vec![None; n];
        dist[source_index] = Some(W::zero());

        let mut in_frontier = vec![true; n];
        let mut remaining = n;

        while remaining > 0 {
            // Select the unvisited node with the smallest finite distance;
            // ties go to the lowest index
            let mut current: Option<(usize, W)> = None;
            for i in 0..n {
                if !in_frontier[i] {
                    continue;
                }
                if let Some(d) = dist[i] {
                    match current {
                        Some((_, best)) if best <= d => {}
                        _ => current = Some((i, d)),
                    }
                }
            }

            // No finite distance left: every node still in the frontier is
            // unreachable and keeps its sentinel
            let Some((u, dist_u)) = current else {
                break;
            };

            in_frontier[u] = false;
            remaining -= 1;
            trace!("settled node {} at distance {:?}", nodes[u], dist_u);

            for &(v, weight) in &adjacency[u] {
                let alt = dist_u + weight;
                let closer = match dist[v] {
                    None => true,
                    Some(d) => alt < d,
                };
                if closer {
                    dist[v] = Some(alt);
                }
            }
        }

        Ok(DistanceTable::new(nodes, dist, source))
    }
}
