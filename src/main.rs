use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use rusty_maze::ascii_utils::visualize_maze_ascii;
use rusty_maze::json_utils::maze_to_json_string;
use rusty_maze::{generate_maze, generate_maze_seeded, GeneratorConfig, OutputFormat};

#[derive(Parser)]
#[command(author, version, about = "Generate a perfect maze with Eller's algorithm", long_about = None)]
struct Args {
    /// Number of rows (overrides RUSTY_MAZE_ROWS)
    #[arg(short = 'r', long = "rows")]
    rows: Option<usize>,

    /// Number of columns (overrides RUSTY_MAZE_COLUMNS)
    #[arg(short = 'c', long = "columns")]
    columns: Option<usize>,

    /// Seed for reproducible mazes (overrides RUSTY_MAZE_SEED)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Output format: ascii or json (overrides RUSTY_MAZE_FORMAT)
    #[arg(short = 'f', long = "format")]
    format: Option<OutputFormat>,
}

fn main() -> Result<()> {
    // RUST_LOG si défini, sinon INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let args = Args::parse();
    let mut config = GeneratorConfig::from_env().context("Failed to read configuration")?;
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(columns) = args.columns {
        config.columns = columns;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    config.validate()?;

    info!(
        "Generating {}x{} maze (seed: {:?}, format: {})",
        config.rows, config.columns, config.seed, config.format
    );

    let maze = match config.seed {
        Some(seed) => generate_maze_seeded(config.rows, config.columns, seed),
        None => generate_maze(config.rows, config.columns),
    }
    .context("Maze generation failed")?;

    match config.format {
        OutputFormat::Ascii => print!("{}", visualize_maze_ascii(&maze)),
        OutputFormat::Json => println!("{}", maze_to_json_string(&maze)?),
    }

    Ok(())
}
