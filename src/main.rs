// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point: analyze the disk grid for a key.

use anyhow::Result;
use clap::Parser;
use knot_grid::grid::build;
use knot_grid::{knot_hash, DiskReport};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Corner shown by --print-grid.
const PREVIEW_SIZE: usize = 8;

#[derive(Parser, Debug)]
#[command(author, version, about = "Count used squares and regions of a knot-hash disk grid", long_about = None)]
struct Args {
    /// Grid generation key
    key: String,

    /// Log progress to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    /// Print the top-left 8x8 corner of the grid before the counts
    #[arg(long)]
    print_grid: bool,

    /// Print the knot hash of KEY in hex instead of analyzing a grid
    #[arg(long, conflicts_with = "print_grid")]
    digest: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.digest {
        println!("{}", knot_hash(&args.key)?);
        return Ok(());
    }

    info!(key = %args.key, "building disk grid");
    let grid = build(&args.key)?;
    if args.print_grid {
        print!("{}", grid.render_corner(PREVIEW_SIZE, PREVIEW_SIZE));
    }

    let report = DiskReport::of_grid(&grid);
    info!(set_bits = report.set_bits, regions = report.regions, "analysis complete");
    print!("{}", report);
    Ok(())
}
