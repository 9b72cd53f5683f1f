use std::time::Instant;

use anyhow::Context;
use log::{debug, info};
use rand::prelude::*;

mod error;
#[allow(dead_code)]
mod generators;
#[allow(dead_code)]
mod grids;
mod renderer;

use generators::backtracker::Backtracker;
use generators::Generator;
use grids::wall_grid::WallGrid;
use renderer::Geometry;

const DEFAULT_DIMS: (usize, usize) = (32, 32);
const WALL_THICKNESS: u32 = 8;
const OPEN_SPACE: u32 = 24;
const OUTPUT_PATH: &str = "maze.png";

// set to reproduce a previous run, the seed of every run is logged
const SEED_VAR: &str = "MAZE_SEED";

fn seed() -> anyhow::Result<u64> {
    match std::env::var(SEED_VAR) {
        Ok(seed) => seed
            .trim()
            .parse()
            .with_context(|| format!("{} is not a valid seed: {:?}", SEED_VAR, seed)),
        Err(_) => Ok(thread_rng().gen()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let seed = seed()?;
    info!("seed: {}", seed);

    let stopwatch = Instant::now();
    let grid = WallGrid::with_dims(DEFAULT_DIMS.0, DEFAULT_DIMS.1)?;
    let mut maze_generator = Backtracker::new(grid, StdRng::seed_from_u64(seed));
    maze_generator.generate_maze();
    let grid = maze_generator.into_grid();
    info!(
        "Generated {}x{} maze with {} passages in {:?}.",
        grid.width(),
        grid.height(),
        grid.open_edge_count(),
        stopwatch.elapsed()
    );
    debug!("\n{}", grid);

    let stopwatch = Instant::now();
    let image = renderer::render(&grid, Geometry::new(WALL_THICKNESS, OPEN_SPACE)?)?;
    image
        .save(OUTPUT_PATH)
        .with_context(|| format!("failed to write {}", OUTPUT_PATH))?;
    info!("Generated image {} in {:?}.", OUTPUT_PATH, stopwatch.elapsed());

    Ok(())
}
