use std::time::{Duration, Instant};
use ordered_float::OrderedFloat;
use classic_sssp::algorithm::ShortestPathAlgorithm;
use classic_sssp::graph::generators::{generate_dag, generate_random};
use classic_sssp::graph::{AdjacencyGraph, Graph, MatrixGraph};
use classic_sssp::{BellmanFord, DagShortestPath, Dijkstra, FloydWarshall};

type Weight = OrderedFloat<f64>;

// Function to benchmark a single-source algorithm on a graph
fn benchmark_algorithm<A>(algorithm: &A, graph: &AdjacencyGraph<Weight>, source: usize) -> Duration
where
    A: ShortestPathAlgorithm<Weight, AdjacencyGraph<Weight>>,
{
    println!("Running {} on graph with {} vertices...", algorithm.name(), graph.vertex_count());

    let start = Instant::now();
    let result = match algorithm.compute_shortest_paths(graph, source) {
        Ok(result) => result,
        Err(e) => {
            println!("  - failed: {}", e);
            return start.elapsed();
        }
    };
    let duration = start.elapsed();

    let reachable = (0..graph.vertex_count()).filter(|&v| result.is_reachable(v)).count();
    println!("  - Found {} reachable vertices in {:?}", reachable, duration);

    duration
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![100, 500, 1_000, 2_000];
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs Bellman-Ford vs DAG vs Floyd-Warshall");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let bellman_ford = BellmanFord::new();
    let bellman_ford_early = BellmanFord::new().with_early_exit(true);

    let mut results = Vec::new();

    for (i, &size) in graph_sizes.iter().enumerate() {
        println!("\nGenerating random graphs with {} vertices...", size);
        let seed = 42 + i as u64;
        let graph = match generate_random::<Weight>(size, edge_factor, 1.0..100.0, seed) {
            Ok(graph) => graph,
            Err(e) => {
                println!("Could not generate graph: {}", e);
                continue;
            }
        };
        let (dag, order) = match generate_dag::<Weight>(size, edge_factor, -50.0..100.0, seed) {
            Ok(generated) => generated,
            Err(e) => {
                println!("Could not generate DAG: {}", e);
                continue;
            }
        };

        let dijkstra_time = benchmark_algorithm(&dijkstra, &graph, 0);
        let bellman_ford_time = benchmark_algorithm(&bellman_ford, &graph, 0);
        let early_time = benchmark_algorithm(&bellman_ford_early, &graph, 0);
        let dag_time = benchmark_algorithm(&DagShortestPath::new().with_order(order.clone()), &dag, order[0]);

        println!("Running Floyd-Warshall on graph with {} vertices...", size);
        let start = Instant::now();
        let floyd_time = match MatrixGraph::from_graph(&graph)
            .and_then(|mut matrix| FloydWarshall::new().run(&mut matrix))
        {
            Ok(()) => start.elapsed(),
            Err(e) => {
                println!("  - failed: {}", e);
                start.elapsed()
            }
        };
        println!("  - Finished in {:?}", floyd_time);

        results.push((size, dijkstra_time, bellman_ford_time, early_time, dag_time, floyd_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<14} | {:<14} | {:<14} | {:<14} | {:<14}",
        "Vertices", "Dijkstra (ms)", "B-F (ms)", "B-F early (ms)", "DAG (ms)", "F-W (ms)"
    );
    println!("-----------------------------------------------------");

    for (size, dijkstra, bf, early, dag, floyd) in &results {
        println!(
            "{:<10} | {:<14} | {:<14} | {:<14} | {:<14} | {:<14}",
            size,
            dijkstra.as_millis(),
            bf.as_millis(),
            early.as_millis(),
            dag.as_millis(),
            floyd.as_millis()
        );
    }
}
