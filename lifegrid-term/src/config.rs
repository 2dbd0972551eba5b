use clap::Parser;
use std::{path::PathBuf, time::Duration};

/// Plays Conway's Game of Life on a bounded grid in the terminal.
#[derive(Parser, Clone, Debug, PartialEq)]
#[command(name = "lifegrid-term")]
pub struct Config {
    /// RLE file to start from
    pub pattern: Option<PathBuf>,

    /// Grid size as WIDTHxHEIGHT; for a pattern file, defaults to the size in its header
    #[arg(long, value_parser = parse_size)]
    pub size: Option<(i64, i64)>,

    /// Stop after this many generations
    #[arg(long)]
    pub generations: Option<usize>,

    /// Pause before the first step, in milliseconds
    #[arg(long, value_parser = parse_millis, default_value = "1000")]
    pub first_pause: Duration,

    /// Pause between later steps, in milliseconds
    #[arg(long, value_parser = parse_millis, default_value = "250")]
    pub pause: Duration,

    /// Fill the grid randomly with this density instead of using a pattern
    #[arg(long, value_parser = parse_density)]
    pub random: Option<f64>,

    /// Seed for the random fill
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run without pauses, then print every generation before the last one
    #[arg(long)]
    pub history: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: None,
            size: None,
            generations: None,
            first_pause: Duration::from_millis(1000),
            pause: Duration::from_millis(250),
            random: None,
            seed: None,
            history: false,
        }
    }
}

fn parse_size(value: &str) -> Result<(i64, i64), String> {
    let invalid = || format!("expected WIDTHxHEIGHT, got {:?}", value);
    let mut parts = value.splitn(2, |c: char| c == 'x' || c == 'X');
    let width = parts.next().ok_or_else(invalid)?.trim();
    let height = parts.next().ok_or_else(invalid)?.trim();
    Ok((
        width.parse().map_err(|_| invalid())?,
        height.parse().map_err(|_| invalid())?,
    ))
}

fn parse_millis(value: &str) -> Result<Duration, String> {
    value
        .parse()
        .map(Duration::from_millis)
        .map_err(|e| format!("invalid number of milliseconds {:?}: {}", value, e))
}

fn parse_density(value: &str) -> Result<f64, String> {
    let density: f64 = value
        .parse()
        .map_err(|e| format!("invalid density {:?}: {}", value, e))?;
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(format!("density should be between 0 and 1, got {}", density))
    }
}
