mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use error::CliResult;
use gk_algo::{
    Bipartition, Order, PathOutcome, SearchConfig, SpanningTree, bellman_ford, bfs, bipartite,
    choose_euler_start, dfs, dijkstra, euler_status, find_hamiltonian_cycle_with,
    find_hamiltonian_path_with, fleury_walk, hierholzer_walk, kruskal, max_flow, prim,
    rotate_cycle,
};
use gk_core::NodeId;
use gk_graph::Graph;
use gk_snapshot::Format;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gk")]
#[command(about = "graphkit CLI - run graph algorithms on snapshot files", long_about = None)]
struct Cli {
    /// Log algorithm progress at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Snapshot format (inferred from the file extension by default)
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Yaml,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Format::Json,
            FormatArg::Yaml => Format::Yaml,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print nodes, adjacency lists and the weight matrix
    Show {
        /// Path to the graph snapshot
        graph: PathBuf,
    },
    /// Breadth-first visiting order
    Bfs {
        graph: PathBuf,
        start: u32,
        /// Visit larger neighbor ids first
        #[arg(long)]
        descending: bool,
    },
    /// Depth-first visiting order
    Dfs {
        graph: PathBuf,
        start: u32,
        /// Visit larger neighbor ids first
        #[arg(long)]
        descending: bool,
    },
    /// Shortest path with non-negative weights
    Dijkstra { graph: PathBuf, start: u32, end: u32 },
    /// Shortest path with signed weights and negative-cycle detection
    BellmanFord { graph: PathBuf, start: u32, end: u32 },
    /// Minimum spanning tree grown from the first node
    Prim { graph: PathBuf },
    /// Minimum spanning tree (forest) by sorted edges
    Kruskal { graph: PathBuf },
    /// Eulerian trails and circuits
    #[command(subcommand)]
    Euler(EulerCommands),
    /// Hamiltonian cycles and paths
    #[command(subcommand)]
    Hamilton(HamiltonCommands),
    /// Maximum flow using edge weights as capacities
    MaxFlow {
        graph: PathBuf,
        source: u32,
        sink: u32,
    },
    /// Two-colour the graph
    Bipartite { graph: PathBuf },
    /// Rewrite a snapshot, converting between JSON and YAML by extension
    Convert { input: PathBuf, output: PathBuf },
}

#[derive(Subcommand)]
enum EulerCommands {
    /// Classify the graph
    Status { graph: PathBuf },
    /// Build the walk with Fleury's algorithm
    Fleury {
        graph: PathBuf,
        /// Start node (circuits only; paths always use the odd/unbalanced start)
        #[arg(long)]
        start: Option<u32>,
    },
    /// Build the walk with Hierholzer's algorithm
    Hierholzer {
        graph: PathBuf,
        /// Start node (circuits only; paths always use the odd/unbalanced start)
        #[arg(long)]
        start: Option<u32>,
    },
}

#[derive(Subcommand)]
enum HamiltonCommands {
    /// Search for a closed Hamiltonian cycle
    Cycle {
        graph: PathBuf,
        /// Rotate a found cycle to begin at this node
        #[arg(long)]
        start: Option<u32>,
        #[command(flatten)]
        limit: LimitArgs,
    },
    /// Search for an open Hamiltonian path
    Path {
        graph: PathBuf,
        #[command(flatten)]
        limit: LimitArgs,
    },
}

#[derive(clap::Args)]
struct LimitArgs {
    /// Refuse graphs with more nodes than this
    #[arg(long, default_value_t = 20)]
    max_nodes: usize,
    /// Search graphs of any size
    #[arg(long, conflicts_with = "max_nodes")]
    unbounded: bool,
}

impl LimitArgs {
    fn config(&self) -> SearchConfig {
        let max_nodes = (!self.unbounded).then_some(self.max_nodes);
        SearchConfig::default().with_max_nodes(max_nodes)
    }
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let format = cli.format.map(Format::from);
    let load = |path: &Path| load_graph(path, format);

    match cli.command {
        Commands::Show { graph } => cmd_show(&load(&graph)?),
        Commands::Bfs {
            graph,
            start,
            descending,
        } => {
            let order = bfs(&load(&graph)?, NodeId::from(start), order(descending));
            print_order("BFS", start, &order);
            Ok(())
        }
        Commands::Dfs {
            graph,
            start,
            descending,
        } => {
            let order = dfs(&load(&graph)?, NodeId::from(start), order(descending));
            print_order("DFS", start, &order);
            Ok(())
        }
        Commands::Dijkstra { graph, start, end } => {
            let outcome = dijkstra(&load(&graph)?, NodeId::from(start), NodeId::from(end))?;
            print_path_outcome(start, end, &outcome);
            Ok(())
        }
        Commands::BellmanFord { graph, start, end } => {
            let outcome = bellman_ford(&load(&graph)?, NodeId::from(start), NodeId::from(end))?;
            print_path_outcome(start, end, &outcome);
            Ok(())
        }
        Commands::Prim { graph } => {
            print_tree("Prim", &prim(&load(&graph)?)?);
            Ok(())
        }
        Commands::Kruskal { graph } => {
            print_tree("Kruskal", &kruskal(&load(&graph)?)?);
            Ok(())
        }
        Commands::Euler(euler_cmd) => match euler_cmd {
            EulerCommands::Status { graph } => cmd_euler_status(&load(&graph)?),
            EulerCommands::Fleury { graph, start } => {
                cmd_euler_walk(&load(&graph)?, start, EulerMethod::Fleury)
            }
            EulerCommands::Hierholzer { graph, start } => {
                cmd_euler_walk(&load(&graph)?, start, EulerMethod::Hierholzer)
            }
        },
        Commands::Hamilton(ham_cmd) => match ham_cmd {
            HamiltonCommands::Cycle {
                graph,
                start,
                limit,
            } => cmd_hamilton_cycle(&load(&graph)?, start, &limit.config()),
            HamiltonCommands::Path { graph, limit } => {
                cmd_hamilton_path(&load(&graph)?, &limit.config())
            }
        },
        Commands::MaxFlow {
            graph,
            source,
            sink,
        } => {
            let flow = max_flow(&load(&graph)?, NodeId::from(source), NodeId::from(sink))?;
            println!("Max flow {} -> {}: {}", flow.source, flow.sink, flow.value);
            Ok(())
        }
        Commands::Bipartite { graph } => {
            cmd_bipartite(&load(&graph)?);
            Ok(())
        }
        Commands::Convert { input, output } => {
            let graph = load(&input)?;
            match format {
                Some(f) => gk_snapshot::save_as(&output, &graph, f)?,
                None => gk_snapshot::save(&output, &graph)?,
            }
            println!("✓ Wrote {}", output.display());
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_graph(path: &Path, format: Option<Format>) -> CliResult<Graph> {
    let graph = match format {
        Some(f) => gk_snapshot::load_as(path, f)?,
        None => gk_snapshot::load(path)?,
    };
    Ok(graph)
}

fn order(descending: bool) -> Order {
    if descending {
        Order::Descending
    } else {
        Order::Ascending
    }
}

fn join_ids(ids: &[NodeId], sep: &str) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

fn print_order(name: &str, start: u32, order: &[NodeId]) {
    if order.is_empty() {
        println!("{name}: node {start} is not in the graph");
    } else {
        println!("{name} from {start}: {}", join_ids(order, " "));
    }
}

fn print_path_outcome(start: u32, end: u32, outcome: &PathOutcome) {
    match outcome {
        PathOutcome::Found(path) => {
            println!("Path: {}", join_ids(&path.nodes, " -> "));
            println!("Total weight: {}", path.total_weight);
        }
        PathOutcome::Unreachable => println!("No path from {start} to {end}"),
        PathOutcome::NegativeCycle => println!("Negative cycle reachable from {start}"),
    }
}

fn print_tree(name: &str, tree: &SpanningTree) {
    println!("{name} spanning tree ({} edges):", tree.edges.len());
    for e in &tree.edges {
        println!("  {} - {} ({})", e.u, e.v, e.weight);
    }
    println!("Total weight: {}", tree.total_weight);
}

fn cmd_show(graph: &Graph) -> CliResult<()> {
    println!(
        "{} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    for node in graph.nodes() {
        println!("  node {} at ({}, {})", node.id, node.x, node.y);
    }

    println!("Adjacency:");
    for (id, neighbors) in graph.adjacency(false) {
        let list = neighbors
            .iter()
            .map(|(v, w)| format!("{v}({w})"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {id}: [{list}]");
    }

    println!("Weight matrix:");
    let ids = graph.index().node_ids();
    let matrix = graph.matrix();
    println!("  {:>6} {}", "", row(ids.iter().map(|id| id.to_string())));
    for (i, id) in ids.iter().enumerate() {
        let cells = matrix.row(i).iter().map(|w| w.to_string()).collect::<Vec<_>>();
        println!("  {:>6} {}", id.to_string(), row(cells.into_iter()));
    }
    Ok(())
}

fn row(cells: impl Iterator<Item = String>) -> String {
    cells.map(|c| format!("{c:>6}")).collect::<Vec<_>>().join(" ")
}

enum EulerMethod {
    Fleury,
    Hierholzer,
}

fn cmd_euler_status(graph: &Graph) -> CliResult<()> {
    let status = euler_status(graph);
    println!("{} ({})", status.description, status.kind);
    if let Some(start) = status.suggested_start {
        println!("Suggested start: {start}");
    }
    Ok(())
}

fn cmd_euler_walk(graph: &Graph, start: Option<u32>, method: EulerMethod) -> CliResult<()> {
    let status = euler_status(graph);
    println!("Detected: {}", status.description);
    if !status.is_eulerian() {
        return Ok(());
    }

    let start = choose_euler_start(graph, &status, start.map(NodeId::from))?;
    let walk = match method {
        EulerMethod::Fleury => fleury_walk(graph, start)?,
        EulerMethod::Hierholzer => hierholzer_walk(graph, start)?,
    };
    println!("Walk from {start}: {}", join_ids(&walk, " -> "));
    Ok(())
}

fn cmd_hamilton_cycle(graph: &Graph, start: Option<u32>, config: &SearchConfig) -> CliResult<()> {
    let Some(mut cycle) = find_hamiltonian_cycle_with(graph, config)? else {
        println!("No Hamiltonian cycle");
        return Ok(());
    };

    if let Some(start) = start.map(NodeId::from) {
        match rotate_cycle(&cycle, start) {
            Some(rotated) => cycle = rotated,
            None => tracing::warn!(start = %start, "start node is not on the cycle"),
        }
    }
    println!("Hamiltonian cycle: {}", join_ids(&cycle, " -> "));
    Ok(())
}

fn cmd_hamilton_path(graph: &Graph, config: &SearchConfig) -> CliResult<()> {
    match find_hamiltonian_path_with(graph, config)? {
        Some(path) => println!("Hamiltonian path: {}", join_ids(&path, " -> ")),
        None => println!("No Hamiltonian path"),
    }
    Ok(())
}

fn cmd_bipartite(graph: &Graph) {
    match bipartite(graph) {
        Some(parts) => {
            println!("Bipartite");
            println!("  left:  {}", join_ids(&parts.left(), " "));
            println!("  right: {}", join_ids(&parts.right(), " "));
            println!("  colours: {}", format_colouring(&parts));
        }
        None => println!("Not bipartite"),
    }
}

/// `id:colour` pairs in slot order, colour 0 for the left side.
fn format_colouring(parts: &Bipartition) -> String {
    parts
        .iter()
        .map(|(id, side)| format!("{id}:{}", side.color()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_hamilton_limits() {
        let cli = Cli::try_parse_from(["gk", "hamilton", "cycle", "g.json", "--max-nodes", "8"])
            .unwrap();
        let Commands::Hamilton(HamiltonCommands::Cycle { limit, start, .. }) = cli.command else {
            panic!("expected hamilton cycle");
        };
        assert_eq!(start, None);
        assert_eq!(limit.config().max_nodes, Some(8));

        let cli = Cli::try_parse_from(["gk", "hamilton", "path", "g.json", "--unbounded"]).unwrap();
        let Commands::Hamilton(HamiltonCommands::Path { limit, .. }) = cli.command else {
            panic!("expected hamilton path");
        };
        assert_eq!(limit.config().max_nodes, None);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["gk", "bfs", "g.txt", "3", "--descending", "-v", "--format", "yaml"])
            .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.format, Some(FormatArg::Yaml)));
        assert!(matches!(
            cli.command,
            Commands::Bfs { start: 3, descending: true, .. }
        ));
    }

    #[test]
    fn join_ids_formats_paths() {
        let ids = [NodeId::from(0), NodeId::from(4), NodeId::from(2)];
        assert_eq!(join_ids(&ids, " -> "), "0 -> 4 -> 2");
        assert_eq!(join_ids(&[], " "), "");
    }

    #[test]
    fn colouring_lists_every_node() {
        let mut graph = Graph::new();
        let a = graph.add_node(0.0, 0.0).unwrap();
        let b = graph.add_node(1.0, 0.0).unwrap();
        let c = graph.add_node(2.0, 0.0).unwrap();
        graph.add_edge(a, b, 1.0, false).unwrap();
        graph.add_edge(b, c, 1.0, false).unwrap();

        let parts = bipartite(&graph).unwrap();
        assert_eq!(format_colouring(&parts), "0:0 1:1 2:0");
    }
}
