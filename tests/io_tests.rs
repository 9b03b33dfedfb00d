use classic_sssp::graph::{AdjacencyGraph, Graph};
use classic_sssp::io::{
    format_adjacency, format_chain, AllPairsListing, AllPairsReport, GraphInput, MatrixDump,
    ResultsTable, SingleSourceReport,
};
use classic_sssp::{BellmanFord, Dijkstra, Error, FloydWarshall, ShortestPathAlgorithm};

const DIAMOND: &str = "1 4
0 1 1
0 2 4
1 2 2
1 3 6
2 3 3
";

#[test]
fn test_parse_header_and_edges() {
    let input = GraphInput::parse(DIAMOND).unwrap();
    assert!(input.directed);
    assert_eq!(input.vertex_count, 4);
    assert_eq!(input.edges.len(), 5);
    assert_eq!(input.edges[3], (1, 3, 6.0));

    // Records are token based, line breaks do not matter
    let flat = GraphInput::parse("0 3 0 1 2.5 1 2 0.5").unwrap();
    assert!(!flat.directed);
    assert_eq!(flat.edges, vec![(0, 1, 2.5), (1, 2, 0.5)]);
}

#[test]
fn test_parse_errors() {
    assert!(matches!(GraphInput::parse(""), Err(Error::Parse { record: 0, .. })));
    assert!(matches!(GraphInput::parse("x 4"), Err(Error::Parse { record: 0, .. })));
    assert!(matches!(GraphInput::parse("1"), Err(Error::Parse { record: 0, .. })));
    assert!(matches!(
        GraphInput::parse("1 3\n0 1 1\n1 2"),
        Err(Error::Parse { record: 2, .. })
    ));
    assert!(matches!(GraphInput::parse("2 3"), Err(Error::Parse { record: 0, .. })));
    assert!(matches!(GraphInput::parse("-1 3"), Err(Error::Parse { record: 0, .. })));
    assert!(matches!(
        GraphInput::parse("1 3\n0 1.5 1"),
        Err(Error::Parse { record: 1, .. })
    ));
    assert!(matches!(
        GraphInput::parse("1 3\n0 2 heavy"),
        Err(Error::Parse { record: 1, .. })
    ));
}

#[test]
fn test_out_of_range_vertices() {
    let input = GraphInput::parse("1 3\n0 1 1\n0 7 2\n1 2 3").unwrap();

    assert!(matches!(
        input.to_adjacency::<f32>(),
        Err(Error::InvalidVertex { vertex: 7, vertex_count: 3 })
    ));

    let matrix = input.to_matrix::<f64>().unwrap();
    assert_eq!(matrix.edge_count(), 2, "out-of-range record must be skipped");
    assert_eq!(matrix.weight(1, 2), 3.0);
}

#[test]
fn test_negative_vertices() {
    let input = GraphInput::parse("1 3\n-1 2 1\n0 1 5\n2 -4 1").unwrap();
    assert_eq!(input.edges[0], (-1, 2, 1.0));

    assert!(matches!(
        input.to_adjacency::<f32>(),
        Err(Error::InvalidVertex { vertex_count: 3, .. })
    ));

    let mut matrix = input.to_matrix::<f64>().unwrap();
    assert_eq!(matrix.edge_count(), 1);
    assert_eq!(matrix.weight(0, 1), 5.0);
    assert_eq!(matrix.distance(2, 0), None);

    FloydWarshall::new().run(&mut matrix).unwrap();
    assert_eq!(matrix.reconstruct_path(0, 1).unwrap(), Some(vec![0, 1]));
}

#[test]
fn test_undirected_input_builds_mirrored_lists() {
    let input = GraphInput::parse("0 3\n0 1 1.5\n1 2 2\n0 1 9").unwrap();
    let graph: AdjacencyGraph<f32> = input.to_adjacency().unwrap();

    assert!(!graph.is_directed());
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.get_edge_weight(1, 0), Some(1.5));
    assert_eq!(format_adjacency(&graph), "[0] ~> [1, 1.5]\n[1] ~> [0, 1.5] ~> [2, 2]\n[2] ~> [1, 2]\n");
}

#[test]
fn test_results_table_and_chain() {
    let graph: AdjacencyGraph<f32> = GraphInput::parse("1 5\n0 1 1\n0 2 4\n1 2 2\n1 3 6\n2 3 3")
        .unwrap()
        .to_adjacency()
        .unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(format_chain(&result, 3), "3 <~ 2 <~ 1 <~ 0");
    assert_eq!(format_chain(&result, 0), "0");

    let table = ResultsTable(&result).to_string();
    assert_eq!(table.lines().count(), 2 + 5);
    let row3 = table.lines().nth(2 + 3).unwrap();
    assert!(row3.contains("6.000"), "row was {:?}", row3);
    assert!(row3.ends_with("3 <~ 2 <~ 1 <~ 0"));
    let row4 = table.lines().nth(2 + 4).unwrap();
    assert!(row4.contains("INF") && row4.contains("NULL"), "row was {:?}", row4);
}

#[test]
fn test_negative_cycle_is_reported_in_table() {
    let graph: AdjacencyGraph<f32> = GraphInput::parse("1 3\n0 1 -1\n1 2 -1\n2 0 -1")
        .unwrap()
        .to_adjacency()
        .unwrap();
    let result = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();

    assert!(ResultsTable(&result).to_string().contains("negative cycle detected"));
    let report = SingleSourceReport::new("Bellman-Ford", &result);
    assert!(!report.converged);
    assert!(report.negative_cycle_edge.is_some());
}

#[test]
fn test_single_source_json() {
    let graph: AdjacencyGraph<f64> = GraphInput::parse("1 5\n0 1 1\n0 2 4\n1 2 2\n1 3 6\n2 3 3")
        .unwrap()
        .to_adjacency()
        .unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let json = SingleSourceReport::new("Dijkstra", &result).to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["algorithm"], "Dijkstra");
    assert_eq!(value["converged"], true);
    assert_eq!(value["vertices"][3]["distance"], 6.0);
    assert_eq!(value["vertices"][3]["predecessor"], 2);
    assert_eq!(value["vertices"][3]["path"], serde_json::json!([0, 1, 2, 3]));
    assert!(value["vertices"][4]["distance"].is_null());
    assert!(value["vertices"][4]["path"].is_null());
}

#[test]
fn test_all_pairs_rendering() {
    let mut graph = GraphInput::parse("0 3\n0 1 2\n1 2 2\n0 2 10")
        .unwrap()
        .to_matrix::<f64>()
        .unwrap();

    let before = MatrixDump(&graph).to_string();
    assert!(!before.contains("INF"), "triangle is complete");
    assert!(before.contains("NULL"));

    FloydWarshall::new().run(&mut graph).unwrap();

    let listing = AllPairsListing(&graph).to_string();
    assert!(listing.contains("0 ~> 1 ~> 2"));

    let report = AllPairsReport::new(&graph, vec![(0, 2), (2, 2)]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(value["pairs"][0]["distance"], 4.0);
    assert_eq!(value["pairs"][0]["path"], serde_json::json!([0, 1, 2]));
    assert_eq!(value["pairs"][1]["path"], serde_json::json!([2]));
}
