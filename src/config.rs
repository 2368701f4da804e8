//! Startup configuration.
//!
//! `Cli` is what the user typed; `Config` is the validated result the rest
//! of the program runs on.

use anyhow::{Result, ensure};
use clap::Parser;

use crate::domain::Boundary;

/// Slowest and fastest evolution rates, in generations per second
pub const MIN_EVOLUTION_RATE: f32 = 1.0;
pub const MAX_EVOLUTION_RATE: f32 = 60.0;

/// Largest window side the windowing backend can represent
const MAX_WINDOW_SIZE: u32 = i32::MAX as u32;

/// Conway's Game of Life. Set up the grid by clicking and dragging over
/// cells, then start the evolution by pressing space.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Width and height of the window in pixels
    #[arg(short = 'w', long, default_value_t = 800)]
    pub window_size: u32,

    /// Number of rows and columns of cells in the grid
    #[arg(short = 'g', long, default_value_t = 40)]
    pub grid_size: usize,

    /// Number of columns, overriding --grid-size
    #[arg(long)]
    pub columns: Option<usize>,

    /// Number of rows, overriding --grid-size
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of times per second that the system evolves (1 to 60)
    #[arg(short = 'e', long, default_value_t = 8.0)]
    pub evo_rate: f32,

    /// Maximum frame rate
    #[arg(short = 'f', long, default_value_t = 60.0)]
    pub fps: f32,

    /// Wrap neighbors around opposite edges instead of clipping at the border
    #[arg(long)]
    pub wrap: bool,

    /// Seed the grid randomly, DENSITY being the fraction of alive cells
    #[arg(short = 'r', long, value_name = "DENSITY")]
    pub random: Option<f64>,

    /// Seed for the random number generator, for reproducible grids
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Validated run configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub window_size: u32,
    pub columns: usize,
    pub rows: usize,
    pub cell_size: u32,
    pub evolution_rate: f32,
    pub max_fps: f32,
    pub boundary: Boundary,
    pub random_density: Option<f64>,
    pub seed: Option<u64>,
}

impl Config {
    /// Check the raw flags and derive the cell size in pixels
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let columns = cli.columns.unwrap_or(cli.grid_size);
        let rows = cli.rows.unwrap_or(cli.grid_size);

        ensure!(cli.window_size > 0, "window size must be positive");
        ensure!(
            cli.window_size <= MAX_WINDOW_SIZE,
            "window size must be at most {} pixels, got {}",
            MAX_WINDOW_SIZE,
            cli.window_size
        );
        ensure!(columns > 0, "number of columns must be positive");
        ensure!(rows > 0, "number of rows must be positive");

        let longest = columns.max(rows);
        ensure!(
            longest <= cli.window_size as usize,
            "a {}x{} grid does not fit in a {} pixel window: cells would be smaller than one pixel",
            columns,
            rows,
            cli.window_size
        );

        ensure!(
            (MIN_EVOLUTION_RATE..=MAX_EVOLUTION_RATE).contains(&cli.evo_rate),
            "evolution rate must be between {} and {} per second, got {}",
            MIN_EVOLUTION_RATE,
            MAX_EVOLUTION_RATE,
            cli.evo_rate
        );
        ensure!(
            cli.fps.is_finite() && cli.fps > 0.0,
            "frame rate must be a positive number, got {}",
            cli.fps
        );
        if let Some(density) = cli.random {
            ensure!(
                (0.0..=1.0).contains(&density),
                "random density must be between 0 and 1, got {}",
                density
            );
        }

        Ok(Self {
            window_size: cli.window_size,
            columns,
            rows,
            cell_size: cli.window_size / longest as u32,
            evolution_rate: cli.evo_rate,
            max_fps: cli.fps,
            boundary: if cli.wrap { Boundary::Toroidal } else { Boundary::Bounded },
            random_density: cli.random,
            seed: cli.seed,
        })
    }

    /// Window size in pixels that exactly fits the grid
    pub fn window_dimensions(&self) -> (u32, u32) {
        (
            self.columns as u32 * self.cell_size,
            self.rows as u32 * self.cell_size,
        )
    }
}
