use std::collections::VecDeque;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use undigraph_core::{
    BreadthFirstPaths, ConnectedComponents, DepthFirstPaths, Graph, Paths, Result,
    MAX_VERTEX_COUNT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Run all generators and benchmark each
    All,
    /// Fractal branching tree (deep paths)
    Lsystem,
    /// Preferential attachment via edge sampling (hub-and-spoke)
    Scalefree,
    /// Watts-Strogatz ring lattice + shortcuts
    Smallworld,
    /// Erdos-Renyi uniform random edges
    Random,
    /// Two dense cliques connected by a thin bridge
    Barbell,
    /// Diffusion-limited aggregation (organic branching)
    Dla,
    /// A single long path (worst case for DFS depth)
    Chain,
}

/// Time DFS, BFS, and component labeling over synthetic undirected graphs.
#[derive(Debug, Parser)]
#[command(name = "undigraph-bench", version)]
struct Args {
    #[arg(value_enum, default_value = "all")]
    mode: Mode,

    /// Number of vertices per generated graph
    #[arg(default_value_t = 1_000_000, value_parser = parse_node_count)]
    node_count: usize,
}

const MIN_NODE_COUNT: usize = 16;

fn parse_node_count(s: &str) -> std::result::Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|e| format!("invalid vertex count '{s}': {e}"))?;
    if (MIN_NODE_COUNT..=MAX_VERTEX_COUNT).contains(&n) {
        Ok(n)
    } else {
        Err(format!(
            "vertex count must be between {MIN_NODE_COUNT} and {MAX_VERTEX_COUNT}, got {n}"
        ))
    }
}

type Generator = fn(usize) -> Result<Graph>;

fn main() -> Result<()> {
    let args = Args::parse();

    println!("undigraph-bench");
    println!("===============");
    println!();

    let generators: Vec<(&str, Generator)> = match args.mode {
        Mode::Lsystem => vec![("L-system tree", gen_lsystem)],
        Mode::Scalefree => vec![("Scale-free (edge sampling)", gen_scale_free)],
        Mode::Smallworld => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        Mode::Random => vec![("Erdos-Renyi random", gen_random)],
        Mode::Barbell => vec![("Barbell (clique-bridge-clique)", gen_barbell)],
        Mode::Dla => vec![("DLA (organic branching)", gen_dla)],
        Mode::Chain => vec![("Chain", gen_chain)],
        Mode::All => vec![
            ("L-system tree", gen_lsystem as Generator),
            ("Scale-free (edge sampling)", gen_scale_free),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (clique-bridge-clique)", gen_barbell),
            ("DLA (organic branching)", gen_dla),
            ("Chain", gen_chain),
        ],
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, args.node_count)?;
    }
    Ok(())
}

fn run_benchmark(name: &str, generator: Generator, node_count: usize) -> Result<()> {
    println!("--- {} ---", name);
    println!("Target: {} vertices", node_count);

    let t = Instant::now();
    let graph = generator(node_count)?;
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s: {} vertices, {} edges, ~{:.0}MB",
        gen_time.as_secs_f64(),
        graph.vertex_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );
    println!();
    println!("{:>12} {:>12} {:>10}", "analysis", "result", "time");
    println!("{:->12} {:->12} {:->10}", "", "", "");

    let t = Instant::now();
    let dfs = DepthFirstPaths::new(&graph, 0)?;
    print_row("dfs reached", dfs.reached_count(), t);

    let t = Instant::now();
    let bfs = BreadthFirstPaths::new(&graph, 0)?;
    print_row("bfs reached", bfs.reached_count(), t);

    let t = Instant::now();
    let cc = ConnectedComponents::new(&graph);
    print_row("components", cc.count(), t);

    // Path lengths: vertex 0 to the last vertex
    let far = graph.vertex_count() - 1;
    println!();
    match bfs.distance_to(far)? {
        Some(d) => {
            let t = Instant::now();
            let dfs_len = dfs.path_to(far)?.len() - 1;
            println!(
                "Path 0 → {}: bfs {} hops, dfs {} hops ({:.1}ms to rebuild)",
                far,
                d,
                dfs_len,
                t.elapsed().as_secs_f64() * 1000.0
            );
        }
        None => println!("Path 0 → {}: unreachable", far),
    }
    println!();
    Ok(())
}

fn print_row(label: &str, value: usize, started: Instant) {
    println!(
        "{:>12} {:>12} {:>8.1}ms",
        label,
        value,
        started.elapsed().as_secs_f64() * 1000.0
    );
}

// ---------------------------------------------------------------------------
// Generators: all O(n) or O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    /// Uniform-ish value in `0..max`. `max` must be non-zero.
    fn next(&mut self, max: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        // The remainder is below `max`, so narrowing back is lossless.
        ((self.0 >> 33) % max as u64) as usize
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// L-system fractal tree: every vertex spawns three children, breadth first.
fn gen_lsystem(node_count: usize) -> Result<Graph> {
    let branching = 3usize;
    let mut graph = Graph::with_capacity(node_count, branching + 1);

    let mut next_id: usize = 1;
    let mut frontier: Vec<usize> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                let child = next_id;
                next_id += 1;
                graph.add_edge(parent, child)?;
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }

    Ok(graph)
}

/// Scale-free via edge-list sampling (O(edges), not O(n²)).
///
/// Preferential attachment by picking a random existing edge endpoint, so
/// high-degree vertices are picked more often.
fn gen_scale_free(node_count: usize) -> Result<Graph> {
    let edges_per_node = 10usize;
    let mut graph = Graph::with_capacity(node_count, 2 * edges_per_node);
    let mut rng = FastRng::new(12345);

    let endpoint_hint = node_count.checked_mul(2 * edges_per_node).unwrap_or(0);
    let mut edge_endpoints: Vec<usize> = Vec::with_capacity(endpoint_hint);

    // Seed: small clique
    let seed = 5usize;
    for i in 0..seed {
        for j in (i + 1)..seed {
            graph.add_edge(i, j)?;
            edge_endpoints.push(i);
            edge_endpoints.push(j);
        }
    }

    for new_node in seed..node_count {
        let attach = edges_per_node.min(new_node);
        for _ in 0..attach {
            let idx = rng.next(edge_endpoints.len());
            let target = edge_endpoints[idx];
            if target != new_node {
                graph.add_edge(new_node, target)?;
                edge_endpoints.push(new_node);
                edge_endpoints.push(target);
            }
        }
    }

    Ok(graph)
}

/// Small-world (Watts-Strogatz): ring lattice with K neighbors per side,
/// each lattice edge rewired to a random endpoint with probability p.
fn gen_small_world(node_count: usize) -> Result<Graph> {
    let k = 10usize;
    let p = 0.05f64;
    let mut graph = Graph::with_capacity(node_count, 2 * k);
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = (i + j) % node_count;
            let target = if rng.next_f64() < p {
                let rewired = rng.next(node_count);
                if rewired != i { rewired } else { neighbor }
            } else {
                neighbor
            };
            graph.add_edge(i, target)?;
        }
    }

    Ok(graph)
}

/// Erdos-Renyi: ~10 uniform random edges per vertex, no structure.
fn gen_random(node_count: usize) -> Result<Graph> {
    let target_edges = node_count.saturating_mul(10);
    let mut graph = Graph::with_capacity(node_count, 20);
    let mut rng = FastRng::new(54321);

    for _ in 0..target_edges {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            graph.add_edge(from, to)?;
        }
    }

    Ok(graph)
}

/// Barbell: two dense clusters joined by a chain of ten bridge vertices.
///
/// Worst case for "find path through bottleneck": every path between the
/// halves crosses the bridge.
fn gen_barbell(node_count: usize) -> Result<Graph> {
    let bridge_len = 10usize;
    let clique_size = (node_count - bridge_len) / 2;
    let mut graph = Graph::with_capacity(node_count, 40);
    let mut rng = FastRng::new(99999);

    // Cluster A: 0..clique_size, ~20 random edges per vertex
    for i in 0..clique_size {
        for _ in 0..20usize.min(clique_size - 1) {
            let target = rng.next(clique_size);
            if target != i {
                graph.add_edge(i, target)?;
            }
        }
    }

    // Bridge: chain from the last vertex of A through to the first of B
    let bridge_start = clique_size;
    for i in 0..bridge_len {
        let id = bridge_start + i;
        graph.add_edge(id - 1, id)?;
    }
    let b_start = bridge_start + bridge_len;
    graph.add_edge(b_start - 1, b_start)?;

    // Cluster B: any vertices left over after rounding land here
    let b_size = node_count - b_start;
    for i in 0..b_size {
        for _ in 0..20usize.min(b_size - 1) {
            let target = rng.next(b_size);
            if target != i {
                graph.add_edge(b_start + i, b_start + target)?;
            }
        }
    }

    Ok(graph)
}

/// DLA (Diffusion-Limited Aggregation): each new vertex attaches to a recent
/// "surface" vertex, with an occasional long-range second edge.
fn gen_dla(node_count: usize) -> Result<Graph> {
    let mut graph = Graph::with_capacity(node_count, 3);
    let mut rng = FastRng::new(77777);

    // VecDeque for O(1) pop_front when evicting oldest surface vertices.
    let mut surface: VecDeque<usize> = VecDeque::with_capacity(10001);
    surface.push_back(0);
    let surface_max = 10000usize;

    for new_node in 1..node_count {
        let attach_to = surface[rng.next(surface.len())];
        graph.add_edge(new_node, attach_to)?;

        // 10% chance of a second connection (creates loops / shortcuts)
        if rng.next(10) == 0 && new_node > 1 {
            let other = rng.next(new_node);
            if other != attach_to {
                graph.add_edge(new_node, other)?;
            }
        }

        surface.push_back(new_node);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }

    Ok(graph)
}

/// One path 0 - 1 - ... - n-1. DFS depth equals the vertex count.
fn gen_chain(node_count: usize) -> Result<Graph> {
    Graph::from_edge_list(node_count, (1..node_count).map(|i| (i - 1, i)))
}
