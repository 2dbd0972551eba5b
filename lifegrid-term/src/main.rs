mod config;

use clap::Parser;
use config::Config;
use lifegrid::{ca_formats::rle::Rle, Cell, StopReason, World};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    error::Error,
    fs,
    io::{self, Write},
    thread::sleep,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Clears the screen and moves the cursor to the top left corner.
const CLEAR: &str = "\x1B[2J\x1B[1;1H";
const SAMPLE: [(i64, i64); 5] = [(2, 3), (3, 2), (1, 1), (2, 1), (3, 1)];
const SAMPLE_SIZE: (i64, i64) = (5, 5);
const SOUP_SIZE: (i64, i64) = (40, 20);

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();

    let mut world = load_world(&config)?;
    info!(
        width = world.width(),
        height = world.height(),
        population = world.population(),
        "loaded world"
    );
    let stdout = io::stdout();
    let reason = if config.history {
        let reason = world.run(config.generations);
        print_history(&world, &mut stdout.lock())?;
        reason
    } else {
        play(&mut world, &config, &mut stdout.lock())?
    };
    info!(
        ?reason,
        generation = world.get_generation(),
        population = world.population(),
        "finished"
    );
    Ok(())
}

fn load_world(config: &Config) -> Result<World, Box<dyn Error>> {
    let world = if let Some(path) = &config.pattern {
        let text = fs::read_to_string(path)?;
        let rle = Rle::new(text.as_str())?;
        match config.size {
            Some((width, height)) => World::from_rle_with_size(width, height, rle)?,
            None => World::from_rle(rle)?,
        }
    } else if let Some(density) = config.random {
        let (width, height) = config.size.unwrap_or(SOUP_SIZE);
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let cells: Vec<Cell> = (0..width)
            .flat_map(|x| (0..height).map(move |y| Cell::new(x, y)))
            .filter(|_| rng.gen_bool(density))
            .collect();
        World::new(width, height, cells)?
    } else {
        let (width, height) = config.size.unwrap_or(SAMPLE_SIZE);
        World::new(width, height, SAMPLE.iter().copied())?
    };
    Ok(world)
}

/// Draws every generation until the world reaches a stop condition.
fn play<W: Write>(world: &mut World, config: &Config, out: &mut W) -> io::Result<StopReason> {
    let mut pause = config.first_pause;
    loop {
        draw(world, out)?;
        if let Some(reason) = world.stop_reason(config.generations) {
            return Ok(reason);
        }
        sleep(pause);
        pause = config.pause;
        world.step();
    }
}

/// Prints the board of every generation in the history, oldest first.
fn print_history<W: Write>(world: &World, out: &mut W) -> io::Result<()> {
    for (generation, board) in world.render_history().enumerate() {
        writeln!(out, "Gen: {}\tPop: {}", generation, board.population())?;
        writeln!(out, "{}", board)?;
    }
    out.flush()
}

fn draw<W: Write>(world: &World, out: &mut W) -> io::Result<()> {
    write!(out, "{}{}", CLEAR, world.render_current())?;
    writeln!(
        out,
        "Gen: {}\tPop: {}",
        world.get_generation(),
        world.population()
    )?;
    out.flush()
}
