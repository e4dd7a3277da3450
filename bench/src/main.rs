use country_routing_core::{BorderGraph, Route, Router, RoutingResult};
use std::sync::Arc;
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let country_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: country-routing-bench [mode] [country_count]");
        println!();
        println!("Modes:");
        println!("  all          Run all generators and benchmark each (default)");
        println!("  grid         One square continent, 4 borders per country");
        println!("  archipelago  Many small islands of varying size");
        println!("  chain        A single line of countries (deepest possible routes)");
        println!("  random       Sparse random symmetric borders");
        println!("  barbell      Two grid continents joined by a thin land bridge");
        println!();
        println!("Default country_count: 100000");
        return;
    }

    println!("country-routing-bench");
    println!("=====================");
    println!();

    let generators: Vec<(&str, fn(u64) -> Borders)> = match mode {
        "grid" => vec![("Grid continent", gen_grid)],
        "archipelago" => vec![("Archipelago", gen_archipelago)],
        "chain" => vec![("Chain", gen_chain)],
        "random" => vec![("Random sparse", gen_random)],
        "barbell" => vec![("Barbell (grid-bridge-grid)", gen_barbell)],
        "all" => vec![
            ("Grid continent", gen_grid as fn(u64) -> Borders),
            ("Archipelago", gen_archipelago),
            ("Chain", gen_chain),
            ("Random sparse", gen_random),
            ("Barbell (grid-bridge-grid)", gen_barbell),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, country_count);
    }
}

fn run_benchmark(name: &str, generator: fn(u64) -> Borders, country_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} countries", country_count);

    let t = Instant::now();
    let borders = generator(country_count);
    let gen_time = t.elapsed();

    let t = Instant::now();
    let graph = match BorderGraph::from_borders(borders.records()) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Failed to build graph: {}", e);
            return;
        }
    };
    let graph_time = t.elapsed();

    let t = Instant::now();
    let router = Router::new(graph);
    let island_time = t.elapsed();

    let graph = router.graph();
    let islands = router.islands();
    println!(
        "Generated in {:.2}s, graph built in {:.2}s: {} countries, {} borders, ~{:.0}MB",
        gen_time.as_secs_f64(),
        graph_time.as_secs_f64(),
        graph.node_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );
    println!(
        "Islands built in {:.1}ms: {} islands, largest {}",
        island_time.as_secs_f64() * 1000.0,
        islands.island_count(),
        islands.largest()
    );

    // Route queries: the two ends of the id range plus random pairs.
    let n = graph.node_count() as u64;
    if n == 0 {
        println!();
        return;
    }
    let mut rng = FastRng::new(2024);
    let mut pairs: Vec<(u64, u64)> = vec![(0, n - 1)];
    pairs.extend((0..5).map(|_| (rng.next(n), rng.next(n))));

    println!();
    println!(
        "{:>10} {:>10} {:>8} {:>12} {:>12}",
        "from", "to", "hops", "cold", "warm"
    );
    println!("{:->10} {:->10} {:->8} {:->12} {:->12}", "", "", "", "", "");

    for (from, to) in pairs {
        let (from, to) = (code(from), code(to));

        let t = Instant::now();
        let cold = router.route(&from, &to);
        let cold_time = t.elapsed();

        let t = Instant::now();
        let warm = router.route(&from, &to);
        let warm_time = t.elapsed();

        let note = warm_note(&cold, &warm);

        let hops = match cold {
            Ok(Some(route)) => route.hops().to_string(),
            Ok(None) => "-".to_string(),
            Err(e) => {
                eprintln!("{}", e);
                "error".to_string()
            }
        };
        println!(
            "{:>10} {:>10} {:>8} {:>10.3}ms {:>10.3}ms{}",
            from,
            to,
            hops,
            cold_time.as_secs_f64() * 1000.0,
            warm_time.as_secs_f64() * 1000.0,
            note
        );
    }
    println!("Cached routes: {}", router.cached_routes());
    println!();
}

type RouteOutcome = RoutingResult<Option<Arc<Route>>>;

/// Flag warm timings that were not served from the cache. Only a `Some`
/// route is cached; `None` and errors are recomputed on every query.
fn warm_note(cold: &RouteOutcome, warm: &RouteOutcome) -> &'static str {
    match (cold, warm) {
        (Ok(Some(c)), Ok(Some(w))) if Arc::ptr_eq(c, w) => "",
        (Ok(None), Ok(None)) | (Err(_), Err(_)) => " (uncached)",
        _ => " (MISMATCH)",
    }
}

// ---------------------------------------------------------------------------
// Generators: O(countries + borders), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
}

fn code(id: u64) -> String {
    format!("C{}", id)
}

/// Symmetric border lists under construction, indexed by country number.
struct Borders(Vec<Vec<u64>>);

impl Borders {
    fn new(country_count: u64) -> Self {
        Self(vec![Vec::new(); country_count as usize])
    }

    fn add(&mut self, a: u64, b: u64) {
        if a != b {
            self.0[a as usize].push(b);
            self.0[b as usize].push(a);
        }
    }

    fn records(&self) -> impl Iterator<Item = (String, Vec<String>)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(i, borders)| (code(i as u64), borders.iter().map(|&b| code(b)).collect()))
    }
}

/// Square grid continent with `side * side` countries, rounded down.
fn grid(borders: &mut Borders, offset: u64, side: u64) {
    for row in 0..side {
        for col in 0..side {
            let id = offset + row * side + col;
            if col + 1 < side {
                borders.add(id, id + 1);
            }
            if row + 1 < side {
                borders.add(id, id + side);
            }
        }
    }
}

fn gen_grid(country_count: u64) -> Borders {
    let side = (country_count as f64).sqrt() as u64;
    let mut borders = Borders::new(side * side);
    grid(&mut borders, 0, side);
    borders
}

/// Islands of 1..=32 countries, each a small chain with a few shortcuts.
/// Exercises the cross-island rejection path.
fn gen_archipelago(country_count: u64) -> Borders {
    let mut borders = Borders::new(country_count);
    let mut rng = FastRng::new(31337);

    let mut start = 0u64;
    while start < country_count {
        let size = (1 + rng.next(32)).min(country_count - start);
        for i in 1..size {
            borders.add(start + i - 1, start + i);
            if i > 1 && rng.next(4) == 0 {
                borders.add(start + i, start + rng.next(i));
            }
        }
        start += size;
    }

    borders
}

/// One long line: every route is as deep as it can get.
fn gen_chain(country_count: u64) -> Borders {
    let mut borders = Borders::new(country_count);
    for i in 1..country_count {
        borders.add(i - 1, i);
    }
    borders
}

/// ~3 random borders per country. Some countries stay isolated.
fn gen_random(country_count: u64) -> Borders {
    let mut borders = Borders::new(country_count);
    let mut rng = FastRng::new(54321);
    for _ in 0..country_count * 3 / 2 {
        let a = rng.next(country_count);
        let b = rng.next(country_count);
        borders.add(a, b);
    }
    borders
}

/// Two grid continents joined by a chain of 10 bridge countries.
///
/// Worst case for "find the route through the bottleneck".
fn gen_barbell(country_count: u64) -> Borders {
    let bridge_len = 10u64;
    let side = ((country_count.saturating_sub(bridge_len) / 2) as f64).sqrt() as u64;
    let half = side * side;
    let mut borders = Borders::new(half * 2 + bridge_len);
    if half == 0 {
        return borders;
    }

    grid(&mut borders, 0, side);
    let bridge_start = half;
    for i in 0..bridge_len {
        let id = bridge_start + i;
        let prev = if i == 0 { half - 1 } else { id - 1 };
        borders.add(prev, id);
    }
    let b_start = bridge_start + bridge_len;
    grid(&mut borders, b_start, side);
    borders.add(b_start - 1, b_start);

    borders
}
