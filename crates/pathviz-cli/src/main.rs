//! Terminal front end: optionally generate a maze, run a search, and replay
//! both as ASCII frames.
//!
//! Run: cargo run -- --maze prims --algorithm astar --speed fast

mod playback;

use std::io;

use clap::Parser;
use pathviz_core::Grid;
use pathviz_maze::{MazeGen, MazeKind, apply_steps};
use pathviz_search::Algorithm;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use crate::playback::{Player, Speed};

#[derive(Parser, Debug)]
#[command(author, version, about = "Visualize grid searches and maze generation")]
struct Args {
    /// Grid height in cells.
    #[arg(long, default_value_t = 21)]
    rows: i32,
    /// Grid width in cells.
    #[arg(long, default_value_t = 41)]
    cols: i32,
    /// Search to run: bfs, dfs, dijkstra or astar.
    #[arg(long, short, default_value = "astar")]
    algorithm: Algorithm,
    /// Generate a maze first: recursive, prims or kruskals.
    #[arg(long, short)]
    maze: Option<MazeKind>,
    /// Playback pace.
    #[arg(long, value_enum, default_value_t)]
    speed: Speed,
    /// Seed for the maze generator. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Print only the final board.
    #[arg(long)]
    no_animate: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = Args::parse();

    let mut grid = Grid::new(args.rows, args.cols)?;
    let stdout = io::stdout().lock();
    let mut player = Player::new(stdout, args.speed, !args.no_animate);

    if let Some(kind) = args.maze {
        let seed = args.seed.unwrap_or_else(rand::random);
        log::info!("generating {kind} maze with seed {seed}");
        let steps = MazeGen::with_rng(StdRng::seed_from_u64(seed)).generate(kind, &grid)?;
        player.maze(&grid, &steps)?;
        apply_steps(&mut grid, &steps);
    }

    let solution = args.algorithm.solve(&mut grid);
    let canvas = player.search(&grid, &solution)?;
    if args.no_animate {
        player.show(&canvas)?;
    }

    let outcome = &solution.outcome;
    if outcome.path_found {
        println!(
            "{}: visited {} cells, path of {} cells",
            args.algorithm,
            outcome.visited_in_order.len(),
            solution.path.len()
        );
    } else {
        println!(
            "{}: visited {} cells, no path",
            args.algorithm,
            outcome.visited_in_order.len()
        );
    }
    Ok(())
}

/// Route `log` records through a `tracing` subscriber, filtered by `RUST_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
