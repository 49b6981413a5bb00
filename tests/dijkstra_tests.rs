use edge_sssp::algorithm::dijkstra::Dijkstra;
use edge_sssp::algorithm::traits::ShortestPathAlgorithm;
use edge_sssp::graph::EdgeList;
use edge_sssp::Error;
use ordered_float::OrderedFloat;

// Classic six-node routing example: nine undirected links stored as eighteen
// directed edges.
fn reference_graph() -> EdgeList<u32, OrderedFloat<f64>> {
    let mut graph = EdgeList::new();
    let links = [
        (1, 2, 7.0),
        (1, 3, 9.0),
        (1, 6, 14.0),
        (2, 3, 10.0),
        (2, 4, 15.0),
        (3, 4, 11.0),
        (3, 6, 2.0),
        (4, 5, 6.0),
        (5, 6, 9.0),
    ];
    for (a, b, w) in links {
        graph.add_edge(a, b, OrderedFloat(w));
        graph.add_edge(b, a, OrderedFloat(w));
    }
    graph
}

#[test]
fn distances_from_node_1() {
    let graph = reference_graph();
    let table = Dijkstra::new().shortest_distances(&graph, 1).unwrap();

    assert_eq!(table.nodes(), &[1, 2, 3, 4, 5, 6]);
    assert_eq!(table.source(), 1);

    let expected = [0.0, 7.0, 9.0, 20.0, 20.0, 11.0];
    for (i, (node, dist)) in table.iter().enumerate() {
        assert_eq!(
            dist,
            Some(OrderedFloat(expected[i])),
            "wrong distance for node {}",
            node
        );
    }
}

#[test]
fn distances_from_node_3() {
    let graph = reference_graph();
    let table = Dijkstra::new().shortest_distances(&graph, 3).unwrap();

    let expected = [9.0, 10.0, 0.0, 11.0, 11.0, 2.0];
    for (i, (node, dist)) in table.iter().enumerate() {
        assert_eq!(
            dist,
            Some(OrderedFloat(expected[i])),
            "wrong distance for node {}",
            node
        );
    }
}

#[test]
fn source_distance_is_always_zero() {
    let graph = reference_graph();
    for source in 1..=6 {
        let table = Dijkstra::new().shortest_distances(&graph, source).unwrap();
        assert_eq!(table.distance(source), Some(OrderedFloat(0.0)));
    }
}

#[test]
fn single_isolated_node() {
    let mut graph: EdgeList<u32, OrderedFloat<f64>> = EdgeList::new();
    graph.add_node(42);

    let table = Dijkstra::new().shortest_distances(&graph, 42).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.distance(42), Some(OrderedFloat(0.0)));
}

#[test]
fn disconnected_node_is_unreachable() {
    let mut graph: EdgeList<u32, OrderedFloat<f64>> = EdgeList::new();
    graph.add_node(1);
    graph.add_node(2);

    let table = Dijkstra::new().shortest_distances(&graph, 1).unwrap();
    assert_eq!(table.distance(1), Some(OrderedFloat(0.0)));
    assert_eq!(table.distance(2), None);
    assert!(!table.is_reachable(2));
}

#[test]
fn unreachable_component_keeps_sentinel() {
    let mut graph = EdgeList::new();
    graph.add_edge(1, 2, OrderedFloat(1.0));
    graph.add_edge(3, 4, OrderedFloat(1.0));

    let table = Dijkstra::new().shortest_distances(&graph, 1).unwrap();
    assert_eq!(table.distance(2), Some(OrderedFloat(1.0)));
    assert_eq!(table.distance(3), None);
    assert_eq!(table.distance(4), None);
}

#[test]
fn sink_node_is_settled_without_relaxations() {
    let mut graph = EdgeList::new();
    graph.add_edge(1, 2, OrderedFloat(2.0));
    graph.add_edge(2, 3, OrderedFloat(3.0));

    let table = Dijkstra::new().shortest_distances(&graph, 1).unwrap();
    assert_eq!(table.distance(3), Some(OrderedFloat(5.0)));
}

#[test]
fn parallel_edges_keep_the_minimum() {
    let mut graph = EdgeList::new();
    graph.add_edge(1, 2, OrderedFloat(5.0));
    graph.add_edge(1, 2, OrderedFloat(2.0));
    graph.add_edge(1, 2, OrderedFloat(9.0));

    let table = Dijkstra::new().shortest_distances(&graph, 1).unwrap();
    assert_eq!(table.distance(2), Some(OrderedFloat(2.0)));
}

#[test]
fn self_loops_never_change_a_distance() {
    let mut graph = EdgeList::new();
    graph.add_edge(1, 1, OrderedFloat(3.0));
    graph.add_edge(1, 2, OrderedFloat(4.0));

    let table = Dijkstra::new().shortest_distances(&graph, 1).unwrap();
    assert_eq!(table.distance(1), Some(OrderedFloat(0.0)));
    assert_eq!(table.distance(2), Some(OrderedFloat(4.0)));
}

#[test]
fn unknown_source_is_rejected() {
    let graph = reference_graph();
    let err = Dijkstra::new().shortest_distances(&graph, 99).unwrap_err();
    assert!(matches!(err, Error::UnknownNode(_)), "got {:?}", err);
}

#[test]
fn empty_graph_has_no_valid_source() {
    let graph: EdgeList<u32, OrderedFloat<f64>> = EdgeList::new();
    let err = Dijkstra::new().shortest_distances(&graph, 1).unwrap_err();
    assert!(matches!(err, Error::UnknownNode(_)), "got {:?}", err);
}

#[test]
fn negative_weight_is_rejected() {
    let mut graph = EdgeList::new();
    graph.add_edge(1, 2, OrderedFloat(4.0));
    graph.add_edge(2, 3, OrderedFloat(-1.0));

    let err = Dijkstra::new().shortest_distances(&graph, 1).unwrap_err();
    assert!(matches!(err, Error::NegativeWeight { .. }), "got {:?}", err);
}

#[test]
fn nan_weight_is_rejected() {
    let mut graph = EdgeList::new();
    graph.add_edge(1, 2, OrderedFloat(f64::NAN));

    let err = Dijkstra::new().shortest_distances(&graph, 1).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)), "got {:?}", err);
}

#[test]
fn zero_weight_edges_are_valid() {
    let mut graph = EdgeList::new();
    graph.add_edge(1, 2, OrderedFloat(0.0));
    graph.add_edge(2, 3, OrderedFloat(0.0));

    let table = Dijkstra::new().shortest_distances(&graph, 1).unwrap();
    assert_eq!(table.distance(3), Some(OrderedFloat(0.0)));
}
