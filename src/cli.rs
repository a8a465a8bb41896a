use crate::direction::Direction;
use crate::error::Result;
use crate::grid::{parse_grid, Grid};
use crate::simulation::{Renderer, Runner};
use clap::Parser;
use std::time::Duration;

/// CLI arguments for the Langton's Ant simulation
#[derive(Parser, Debug)]
#[command(name = "langtons_ant", about = "🐜 Langton's Ant on a toroidal grid")]
pub struct Args {
    /// Side length of the square, initially blank grid
    #[arg(
        short = 's',
        long = "size",
        value_parser = parse_size,
        required_unless_present = "pattern",
        conflicts_with = "pattern"
    )]
    pub size: Option<usize>,

    /// Delay before each step, in seconds
    #[arg(short = 'd', long = "delay", value_parser = parse_delay, default_value = "0.5")]
    pub delay: Duration,

    /// Number of steps to run
    #[arg(short = 'e', long = "epochs", default_value_t = 111)]
    pub epochs: u32,

    /// Load the initial grid from a pattern file ('#' on, '.' off)
    #[arg(short = 'p', long = "pattern")]
    pub pattern: Option<String>,

    /// Start position as X,Y (wrapped onto the grid)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub start: Option<Vec<i64>>,

    /// Initial heading: up, right, down or left (random if omitted)
    #[arg(long)]
    pub direction: Option<Direction>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep previous frames on screen
    #[arg(long, default_value_t = false)]
    pub no_clear: bool,

    /// Disable colours
    #[arg(long, default_value_t = false)]
    pub plain: bool,
}

impl Args {
    /// Initial grid: the pattern file if given, otherwise a blank square
    pub fn grid(&self) -> Result<Grid> {
        match (&self.pattern, self.size) {
            (Some(path), _) => parse_grid(path),
            (None, Some(size)) => Grid::blank(size, size),
            // only reachable when built without clap
            (None, None) => Grid::blank(0, 0),
        }
    }

    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }

    pub fn runner(&self) -> Runner {
        let renderer = if self.plain {
            Renderer::plain()
        } else {
            Renderer::default()
        };
        Runner::new(self.delay, self.epochs, !self.no_clear, renderer)
    }
}

fn parse_size(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("grid size must be a positive integer".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_delay(s: &str) -> std::result::Result<Duration, String> {
    let secs: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err("delay must be a non-negative number of seconds".to_string());
    }
    Ok(Duration::from_secs_f64(secs))
}
