use classic_sssp::algorithm::{RecordingObserver, SolverEvent};
use classic_sssp::graph::generators::{generate_dag, generate_random};
use classic_sssp::graph::{topological_order, AdjacencyGraph, Graph, MutableGraph};
use classic_sssp::{
    BellmanFord, DagShortestPath, Dijkstra, Error, RunStatus, ShortestPathAlgorithm,
};
use ordered_float::OrderedFloat;

// Test helper: the 4-vertex directed example graph
fn create_diamond() -> AdjacencyGraph<f64> {
    AdjacencyGraph::from_edges(
        4,
        true,
        vec![(0, 1, 1.0), (0, 2, 4.0), (1, 2, 2.0), (1, 3, 6.0), (2, 3, 3.0)],
    )
    .unwrap()
}

// Test helper: DAG with vertices r, s, t, x, y, z = 0..6 and negative weights
fn create_weighted_dag() -> AdjacencyGraph<f64> {
    AdjacencyGraph::from_edges(
        6,
        true,
        vec![
            (0, 1, 5.0),
            (0, 2, 3.0),
            (1, 2, 2.0),
            (1, 3, 6.0),
            (2, 3, 7.0),
            (2, 4, 4.0),
            (2, 5, 2.0),
            (3, 4, -1.0),
            (3, 5, 1.0),
            (4, 5, -2.0),
        ],
    )
    .unwrap()
}

#[test]
fn test_diamond_all_solvers() {
    let graph = create_diamond();
    let expected_pred = vec![None, Some(0), Some(1), Some(2)];

    let bf = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();
    let dijkstra = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let dag = DagShortestPath::new().compute_shortest_paths(&graph, 0).unwrap();

    for result in [&bf, &dijkstra, &dag] {
        assert_eq!(result.distances, vec![0.0, 1.0, 3.0, 6.0]);
        assert_eq!(result.predecessors, expected_pred);
        assert_eq!(result.status, RunStatus::Converged);
        assert_eq!(result.path_to(3), Some(vec![0, 1, 2, 3]));
    }
}

#[test]
fn test_bellman_ford_reports_negative_cycle() {
    let graph: AdjacencyGraph<f64> =
        AdjacencyGraph::from_edges(3, true, vec![(0, 1, -1.0), (1, 2, -1.0), (2, 0, -1.0)])
            .unwrap();

    let mut observer = RecordingObserver::new();
    let result = BellmanFord::new()
        .compute_with_observer(&graph, 0, &mut observer)
        .unwrap();

    assert!(!result.converged(), "negative cycle must be reported");
    assert!(matches!(result.status, RunStatus::NegativeCycle { .. }));
    assert!(observer
        .events
        .iter()
        .any(|e| matches!(e, SolverEvent::NegativeCycleDetected { .. })));
}

#[test]
fn test_unreachable_negative_cycle_is_ignored() {
    let graph: AdjacencyGraph<f64> = AdjacencyGraph::from_edges(
        4,
        true,
        vec![(0, 1, 2.0), (2, 3, -1.0), (3, 2, -1.0)],
    )
    .unwrap();

    let result = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();
    assert!(result.converged());
    assert_eq!(result.distance(1), Some(2.0));
    assert_eq!(result.distance(2), None);
    assert_eq!(result.path_to(3), None);
}

#[test]
fn test_bellman_ford_early_exit_matches_full_run() {
    for seed in 0..5 {
        let graph = generate_random::<f64>(50, 3.0, -2.0..20.0, seed).unwrap();
        let full = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();
        let early = BellmanFord::new()
            .with_early_exit(true)
            .compute_shortest_paths(&graph, 0)
            .unwrap();
        assert_eq!(full.distances, early.distances);
        assert_eq!(full.status, early.status);
    }
}

#[test]
fn test_dijkstra_matches_bellman_ford_on_random_graphs() {
    for seed in 0..10 {
        let graph = generate_random::<f64>(80, 3.0, 0.0..25.0, seed).unwrap();
        let bf = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();
        let dijkstra = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

        assert!(bf.converged());
        assert_eq!(bf.distances, dijkstra.distances, "seed {}", seed);

        // Every predecessor link is tight
        for v in 0..graph.vertex_count() {
            if let Some(u) = dijkstra.predecessors[v] {
                let w = graph.get_edge_weight(u, v).unwrap();
                assert_eq!(dijkstra.distances[u] + w, dijkstra.distances[v]);
            }
        }
    }
}

#[test]
fn test_dijkstra_with_ordered_float_weights() {
    let graph: AdjacencyGraph<OrderedFloat<f64>> = AdjacencyGraph::from_edges(
        3,
        false,
        vec![(0, 1, OrderedFloat(1.5)), (1, 2, OrderedFloat(2.5)), (0, 2, OrderedFloat(5.0))],
    )
    .unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, 2).unwrap();
    assert_eq!(result.distance(0), Some(OrderedFloat(4.0)));
    assert_eq!(result.path_to(0), Some(vec![2, 1, 0]));
}

#[test]
fn test_dijkstra_settles_in_distance_order() {
    let graph = create_diamond();
    let mut observer = RecordingObserver::new();
    Dijkstra::new()
        .compute_with_observer(&graph, 0, &mut observer)
        .unwrap();

    assert_eq!(observer.settled_order(), vec![0, 1, 2, 3]);
    assert_eq!(observer.relaxations(), 5);
}

#[test]
fn test_relaxation_never_raises_distances() {
    let graph = generate_random::<f64>(60, 4.0, -3.0..30.0, 99).unwrap();
    let mut observer = RecordingObserver::new();
    BellmanFord::new()
        .compute_with_observer(&graph, 0, &mut observer)
        .unwrap();

    for event in &observer.events {
        if let SolverEvent::EdgeRelaxed { old, new, .. } = event {
            assert!(new < old, "relaxation raised a distance: {:?}", event);
        }
    }
}

#[test]
fn test_dijkstra_rejects_negative_weights() {
    let graph: AdjacencyGraph<f64> =
        AdjacencyGraph::from_edges(3, true, vec![(0, 1, 2.0), (1, 2, -1.0)]).unwrap();

    match Dijkstra::new().compute_shortest_paths(&graph, 0) {
        Err(Error::NegativeWeight { from, to, weight }) => {
            assert_eq!((from, to), (1, 2));
            assert_eq!(weight, -1.0);
        }
        other => panic!("expected NegativeWeight, got {:?}", other),
    }

    // Without validation the run completes; the distances are unspecified
    let result = Dijkstra::new()
        .with_weight_validation(false)
        .compute_shortest_paths(&graph, 0);
    assert!(result.is_ok());
}

#[test]
fn test_invalid_source_is_rejected() {
    let graph = create_diamond();
    for result in [
        BellmanFord::new().compute_shortest_paths(&graph, 4),
        Dijkstra::new().compute_shortest_paths(&graph, 4),
        DagShortestPath::new().compute_shortest_paths(&graph, 4),
    ] {
        assert!(matches!(result, Err(Error::InvalidVertex { vertex: 4, vertex_count: 4 })));
    }
}

#[test]
fn test_dag_shortest_path_with_negative_weights() {
    let graph = create_weighted_dag();
    let result = DagShortestPath::new().compute_shortest_paths(&graph, 1).unwrap();

    assert_eq!(result.distance(0), None);
    assert_eq!(result.distances[1..], [0.0, 2.0, 6.0, 5.0, 3.0]);
    assert_eq!(
        result.predecessors,
        vec![None, None, Some(1), Some(1), Some(3), Some(4)]
    );
    assert_eq!(result.path_to(5), Some(vec![1, 3, 4, 5]));
}

#[test]
fn test_dag_matches_bellman_ford_on_random_dags() {
    for seed in 0..10 {
        let (graph, order) = generate_dag::<f64>(70, 3.0, -10.0..20.0, seed).unwrap();
        let source = order[0];

        let bf = BellmanFord::new().compute_shortest_paths(&graph, source).unwrap();
        let given = DagShortestPath::new()
            .with_order(order.clone())
            .compute_shortest_paths(&graph, source)
            .unwrap();
        let derived = DagShortestPath::new()
            .compute_shortest_paths(&graph, source)
            .unwrap();

        assert!(bf.converged());
        assert_eq!(bf.distances, given.distances, "seed {}", seed);
        assert_eq!(bf.distances, derived.distances, "seed {}", seed);
    }
}

#[test]
fn test_dag_rejects_bad_orders() {
    let graph = create_diamond();

    let backwards = DagShortestPath::new().with_order(vec![3, 2, 1, 0]);
    assert!(matches!(
        backwards.compute_shortest_paths(&graph, 0),
        Err(Error::InvalidTopologicalOrder(_))
    ));

    let short = DagShortestPath::new().with_order(vec![0, 1, 2]);
    assert!(matches!(
        short.compute_shortest_paths(&graph, 0),
        Err(Error::InvalidTopologicalOrder(_))
    ));

    let repeated = DagShortestPath::new().with_order(vec![0, 1, 1, 3]);
    assert!(matches!(
        repeated.compute_shortest_paths(&graph, 0),
        Err(Error::InvalidTopologicalOrder(_))
    ));
}

#[test]
fn test_topological_order_respects_edges() {
    let graph = create_weighted_dag();
    let order = topological_order(&graph).unwrap();

    assert_eq!(order.len(), graph.vertex_count());
    let mut rank = vec![0; order.len()];
    for (i, &v) in order.iter().enumerate() {
        rank[v] = i;
    }
    for (u, v, _) in graph.edges() {
        assert!(rank[u] < rank[v], "edge ({}, {}) goes backwards", u, v);
    }
}

#[test]
fn test_topological_order_detects_cycles() {
    let graph: AdjacencyGraph<f32> =
        AdjacencyGraph::from_edges(3, true, vec![(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]).unwrap();
    assert!(matches!(topological_order(&graph), Err(Error::NotAcyclic { .. })));

    let dag = DagShortestPath::new().compute_shortest_paths(&graph, 0);
    assert!(matches!(dag, Err(Error::NotAcyclic { .. })));
}

#[test]
fn test_edge_insertion_rules() {
    let mut directed: AdjacencyGraph<f32> = AdjacencyGraph::directed(3).unwrap();
    assert!(directed.insert_edge(0, 1, 1.0).unwrap());
    assert!(!directed.insert_edge(0, 1, 7.0).unwrap(), "duplicate edge must be ignored");
    assert_eq!(directed.get_edge_weight(0, 1), Some(1.0));
    assert!(!directed.has_edge(1, 0));
    assert_eq!(directed.edge_count(), 1);

    let mut undirected: AdjacencyGraph<f32> = AdjacencyGraph::undirected(3).unwrap();
    assert!(undirected.insert_edge(0, 2, 4.0).unwrap());
    assert_eq!(undirected.get_edge_weight(2, 0), Some(4.0));
    assert!(undirected.insert_edge(1, 1, 2.0).unwrap());
    assert_eq!(undirected.neighbors(1).to_vec(), vec![(1usize, 2.0f32)]);
    assert_eq!(undirected.edge_count(), 3);

    assert!(matches!(
        undirected.insert_edge(0, 3, 1.0),
        Err(Error::InvalidVertex { vertex: 3, vertex_count: 3 })
    ));
}
