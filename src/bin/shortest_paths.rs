use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};

use classic_sssp::graph::{AdjacencyGraph, Graph};
use classic_sssp::io::{
    format_adjacency, format_pairs, AllPairsListing, AllPairsReport, GraphInput, MatrixDump,
    ResultsTable, SingleSourceReport,
};
use classic_sssp::{
    BellmanFord, DagShortestPath, Dijkstra, FloydWarshall, Result, ShortestPathAlgorithm,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    BellmanFord,
    Dijkstra,
    Dag,
    FloydWarshall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "shortest_paths")]
#[command(about = "Read a weighted graph (`directed n` header, then `u v weight` records) and run a shortest path algorithm on it.", long_about = None)]
struct Cli {
    /// Algorithm to run
    #[arg(value_enum)]
    algorithm: Algorithm,

    /// Source vertex for single-source algorithms
    #[arg(short, long, default_value_t = 0)]
    source: usize,

    /// Input file; standard input when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Pair to reconstruct after Floyd-Warshall (repeatable); all pairs when omitted
    #[arg(long, num_args = 2, value_names = ["FROM", "TO"], action = ArgAction::Append)]
    pair: Vec<usize>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Stop Bellman-Ford after a pass without updates
    #[arg(long)]
    early_exit: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn read_input(path: Option<&PathBuf>) -> Result<GraphInput> {
    match path {
        Some(path) => GraphInput::read(BufReader::new(File::open(path)?)),
        None => GraphInput::read(io::stdin().lock()),
    }
}

fn run_single_source(cli: &Cli, input: &GraphInput) -> Result<()> {
    let graph: AdjacencyGraph<f32> = input.to_adjacency()?;

    let solver: Box<dyn ShortestPathAlgorithm<f32, AdjacencyGraph<f32>>> = match cli.algorithm {
        Algorithm::BellmanFord => Box::new(BellmanFord::new().with_early_exit(cli.early_exit)),
        Algorithm::Dijkstra => Box::new(Dijkstra::new()),
        Algorithm::Dag => Box::new(DagShortestPath::new()),
        Algorithm::FloydWarshall => unreachable!("handled by run_all_pairs"),
    };

    let result = solver.compute_shortest_paths(&graph, cli.source)?;

    match cli.format {
        Format::Table => {
            println!("Input graph:");
            print!("{}", format_adjacency(&graph));
            println!();
            println!("{} from source {}:", solver.name(), cli.source);
            print!("{}", ResultsTable(&result));
            if cli.algorithm == Algorithm::BellmanFord {
                println!("Bellman-Ford converged: {}", result.converged());
            }
        }
        Format::Json => {
            println!("{}", SingleSourceReport::new(solver.name(), &result).to_json()?);
        }
    }
    Ok(())
}

fn run_all_pairs(cli: &Cli, input: &GraphInput) -> Result<()> {
    let mut graph = input.to_matrix::<f64>()?;

    let pairs: Vec<(usize, usize)> = if cli.pair.is_empty() {
        let n = graph.vertex_count();
        (0..n).flat_map(|i| (0..n).map(move |j| (i, j))).collect()
    } else {
        cli.pair.chunks_exact(2).map(|p| (p[0], p[1])).collect()
    };
    for &(i, j) in &pairs {
        graph.check_vertex(i)?;
        graph.check_vertex(j)?;
    }

    if cli.format == Format::Table {
        println!("Input matrices:");
        println!("{}", MatrixDump(&graph));
    }

    let solver = FloydWarshall::new();
    solver.run(&mut graph)?;

    match cli.format {
        Format::Table => {
            println!("{} result:", solver.name());
            println!("{}", MatrixDump(&graph));
            if cli.pair.is_empty() {
                print!("{}", AllPairsListing(&graph));
            } else {
                let mut out = String::new();
                // Writing into a String cannot fail
                let _ = format_pairs(&graph, pairs, &mut out);
                print!("{}", out);
            }
        }
        Format::Json => {
            println!("{}", AllPairsReport::new(&graph, pairs)?.to_json()?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = read_input(cli.input.as_ref()).and_then(|input| match cli.algorithm {
        Algorithm::FloydWarshall => run_all_pairs(&cli, &input),
        _ => run_single_source(&cli, &input),
    });

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
