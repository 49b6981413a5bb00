use crate::graph::EdgeList;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a uniform random directed multigraph with n nodes and m edges
/// Endpoints are drawn uniformly, so self-loops and parallel edges can occur
pub fn generate_gnm(n: u32, m: usize, max_weight: f64) -> EdgeList<u32, OrderedFloat<f64>> {
    assert!(n > 0, "n must be positive");
    assert!(max_weight > 0.0, "max_weight must be positive");

    let mut graph = EdgeList::new();
    let mut rng = rand::thread_rng();

    // Register every node up front so isolated nodes survive
    for node in 0..n {
        graph.add_node(node);
    }

    for _ in 0..m {
        let source = rng.gen_range(0..n);
        let target = rng.gen_range(0..n);
        let weight = OrderedFloat(rng.gen_range(0.0..max_weight));
        graph.add_edge(source, target, weight);
    }

    graph
}

/// Generates a layered graph with `depth` layers of `width` nodes each
/// Every node in layer i connects to every node in layer i+1 with a random
/// weight in 1.0..10.0, so all layers past the first are reachable from any
/// node in layer 0
pub fn generate_layered(width: u32, depth: u32) -> EdgeList<u32, OrderedFloat<f64>> {
    assert!(width > 0, "width must be positive");
    assert!(depth > 1, "depth must be at least 2");

    let mut graph = EdgeList::new();
    let mut rng = rand::thread_rng();

    for layer in 0..depth - 1 {
        for i in 0..width {
            for j in 0..width {
                let source = layer * width + i;
                let target = (layer + 1) * width + j;
                let weight = OrderedFloat(rng.gen_range(1.0..10.0));
                graph.add_edge(source, target, weight);
            }
        }
    }

    graph
}
