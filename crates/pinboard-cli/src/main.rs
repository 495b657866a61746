//! Pinboard layout tool.
//!
//! Loads a board file, snaps every note to the grid for a given container
//! width and prints the resulting layout as JSON.

use anyhow::Context;
use clap::Parser;
use kurbo::Size;
use pinboard_core::{Board, Breakpoint, LayoutConfig, StickyNote};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::path::PathBuf;

/// Lay out a Pinboard board on a responsive grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// board file (JSON) to lay out
    board: PathBuf,

    /// layout configuration file (JSON); defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// container width in pixels, selects the grid breakpoint
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// snap exactly to grid intersections without scattering
    #[arg(long, default_value_t = false)]
    exact: bool,

    /// seed for the placement scatter, for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Serialize)]
struct LayoutReport {
    grid_size: f64,
    breakpoint: Breakpoint,
    canvas: Size,
    notes: Vec<StickyNote>,
}

fn layout(board: &mut Board, config: &LayoutConfig, args: &CliArgs) -> LayoutReport {
    let breakpoint = Breakpoint::from_width(args.width);
    let grid_size = config.grid.cell_size(breakpoint);
    log::info!("Using {:?} grid ({}px) for width {}", breakpoint, grid_size, args.width);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    board.snap_all(grid_size, args.exact, &mut rng);

    LayoutReport {
        grid_size,
        breakpoint,
        canvas: board.canvas_size(&config.canvas),
        notes: board.notes.clone(),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => LayoutConfig::load(path)?,
        None => LayoutConfig::default(),
    };
    let mut board = Board::load(&args.board)?;
    log::info!("Loaded {} notes from {}", board.len(), args.board.display());

    let report = layout(&mut board, &config, &args);
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize layout")?;
    println!("{}", json);
    Ok(())
}
