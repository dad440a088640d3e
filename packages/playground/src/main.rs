use std::fmt::Display;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use mstviz::{
    Algorithm, Comparison, Frame, Graph, LatexDisplay, NodeKey, Playback, RandomGraphConfig, Run,
    Session, Weight, graph_from_edge_list, parse_edge_list, prim_forest, random_graph,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "playground")]
#[command(about = "Step through Kruskal's and Prim's runs and compare them")]
#[command(version)]
struct Args {
    /// Graph to run on
    #[arg(value_enum, default_value = "textbook")]
    example: Example,

    /// Node key Prim grows from (smallest key when omitted)
    #[arg(long, short = 's')]
    start: Option<String>,

    /// Seed for the random example
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Node count for the random and edge-list examples
    #[arg(long, short = 'n')]
    nodes: Option<usize>,

    /// Edge list for the edge-list example, e.g. "(0,1,19),(1,2,15)"
    #[arg(long, short = 'e')]
    edges: Option<String>,

    /// JSON file with random graph settings
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Also complete Prim's run into a spanning forest
    #[arg(long)]
    forest: bool,

    /// Print runs and comparison as JSON instead of LaTeX
    #[arg(long)]
    json: bool,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Example {
    Textbook,
    Disconnected,
    Random,
    EdgeList,
}

fn textbook_graph() -> Result<Graph<String, i64>> {
    Ok(Graph::from_edges([
        ("a", "b", 7),
        ("a", "c", 1),
        ("a", "d", 4),
        ("b", "e", 6),
        ("b", "f", 5),
        ("c", "d", 1),
        ("c", "g", 3),
        ("d", "h", 2),
        ("e", "f", 6),
        ("e", "h", 5),
        ("e", "i", 3),
        ("f", "i", 4),
        ("f", "l", 7),
        ("g", "h", 5),
        ("g", "j", 3),
        ("h", "j", 4),
        ("i", "k", 7),
        ("j", "k", 8),
        ("k", "l", 6),
    ])?)
}

fn disconnected_graph() -> Result<Graph<String, i64>> {
    Ok(Graph::from_nodes_and_edges(
        ["A", "B", "C", "D", "E"],
        [("A", "B", 1), ("C", "D", 2), ("D", "E", 1), ("C", "E", 4)],
    )?)
}

fn load_config(args: &Args) -> Result<RandomGraphConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => RandomGraphConfig::default(),
    };
    if let Some(nodes) = args.nodes {
        config.min_nodes = nodes;
        config.max_nodes = nodes;
    }
    config.validate()?;
    Ok(config)
}

fn numeric_start(start: Option<&String>) -> Result<Option<usize>> {
    start
        .map(|s| s.parse().with_context(|| format!("start node {s:?} is not a number")))
        .transpose()
}

#[derive(Serialize)]
struct Report<'a, K, W> {
    runs: Vec<&'a Run<K, W>>,
    comparison: &'a Comparison<W>,
}

fn describe<K, W>(frame: &Frame<'_, K, W>) -> String
where
    K: NodeKey + Display,
    W: Weight + Display,
{
    match frame {
        Frame::Vertex(key) => format!("visit {key}"),
        Frame::Edge(step) => format!(
            "#{:<3} ({}, {}) w={} {:?}, total {}",
            step.index + 1,
            step.from,
            step.to,
            step.weight,
            step.decision,
            step.total
        ),
        Frame::Finished(result) => match result.warning() {
            Some(warning) => format!("done, weight {} ({warning})", result.total_weight),
            None => format!("done, weight {}", result.total_weight),
        },
    }
}

fn play<K, W>(run: &Run<K, W>)
where
    K: NodeKey + Display,
    W: Weight + Display,
{
    println!("{}:", run.algorithm());
    for frame in Playback::new(run) {
        println!("  {}", describe(&frame));
    }
}

fn present<K, W>(graph: &Graph<K, W>, start: Option<K>, args: &Args) -> Result<()>
where
    K: NodeKey + Display + Serialize,
    W: Weight + Display + Serialize,
{
    let mut session = Session::new(graph);
    session.run_kruskal()?;
    session.run_prim(start)?;

    let Some(comparison) = session.comparison() else {
        bail!("no runs to compare");
    };
    let runs: Vec<&Run<K, W>> = [Algorithm::Kruskal, Algorithm::Prim]
        .into_iter()
        .filter_map(|a| session.last(a))
        .collect();

    if args.json {
        let report = Report {
            runs,
            comparison: &comparison,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Graph:\n{}\n", graph.to_latex());
    for run in &runs {
        play(run);
        println!("{} trace:\n{}", run.algorithm(), run.trace.to_latex());
        println!("{} result:\n{}\n", run.algorithm(), run.result.to_latex());
    }
    println!("Comparison:\n{}", comparison.to_latex());

    if args.forest {
        let forest = prim_forest(graph)?;
        println!("\nPrim's spanning forest: {} tree(s)", forest.len());
        for run in &forest {
            if let Some(root) = run.trace.start() {
                println!("  from {root}: weight {}", run.result.total_weight);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("mstviz={0},playground={0}", args.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(example = ?args.example, "starting playground");

    match args.example {
        Example::Textbook => present(&textbook_graph()?, args.start.clone(), &args),
        Example::Disconnected => present(&disconnected_graph()?, args.start.clone(), &args),
        Example::Random => {
            let config = load_config(&args)?;
            let mut rng = StdRng::seed_from_u64(args.seed);
            let graph = random_graph(&mut rng, &config)?;
            present(&graph, numeric_start(args.start.as_ref())?, &args)
        }
        Example::EdgeList => {
            let Some(text) = &args.edges else {
                bail!("the edge-list example needs --edges");
            };
            let nodes = args.nodes.context("the edge-list example needs --nodes")?;
            let edges = parse_edge_list(text, nodes)?;
            let graph = graph_from_edge_list(nodes, &edges, 1)?;
            present(&graph, numeric_start(args.start.as_ref())?, &args)
        }
    }
}
