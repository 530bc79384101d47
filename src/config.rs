//! Command-line options for the `mazeweave` binary.

use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};

use crate::solvers::Strategy;

// Fits a standard 80x24 terminal along with the status lines
const DEFAULT_WIDTH: u16 = 18;
const DEFAULT_HEIGHT: u16 = 10;
const DEFAULT_TICK_MS: u64 = 30;

/// Top-level options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "mazeweave",
    about = "Generate a random perfect maze and watch it get solved, or solve it yourself."
)]
pub struct Cli {
    /// Number of columns.
    #[arg(
        long,
        default_value_t = DEFAULT_WIDTH,
        value_parser = clap::value_parser!(u16).range(1..=255),
    )]
    pub width: u16,

    /// Number of rows.
    #[arg(
        long,
        default_value_t = DEFAULT_HEIGHT,
        value_parser = clap::value_parser!(u16).range(1..=255),
    )]
    pub height: u16,

    /// Seed for the random source. The same seed replays the same mazes.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between search steps while auto-solving.
    #[arg(
        long = "tick-ms",
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    pub tick_ms: u64,

    /// Directory the log file is written to.
    #[arg(long = "log-dir", default_value = ".")]
    pub log_dir: PathBuf,

    /// Solve without the terminal UI, print the result and exit.
    #[arg(long, value_enum)]
    pub solve: Option<StrategyArg>,
}

impl Cli {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Search strategies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Bfs,
    Dfs,
    Astar,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Bfs => Strategy::BreadthFirst,
            StrategyArg::Dfs => Strategy::DepthFirst,
            StrategyArg::Astar => Strategy::AStar,
        }
    }
}
