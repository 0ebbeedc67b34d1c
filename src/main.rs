//! # Upcurve - Playlist Curve Shaping
//!
//! Reads a playlist file of scored tracks, rearranges it so the composite
//! values follow a chosen curve from first track to last, and writes it back.
//!
//! ## Usage
//!
//! ```bash
//! # See the curves
//! upcurve curves --positions 8
//!
//! # Shape playlist.csv into a mid-playlist peak
//! upcurve reorder negative-quadratic
//!
//! # Preview without writing
//! upcurve reorder 1 --dry-run
//!
//! # Track IDs in the new order
//! upcurve export-ids > ids.txt
//! ```

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use upcurve::config::RuntimeConfig;
use upcurve::curve::CurveSelector;
use upcurve::playlist::{self, CsvPlaylist, IdListSink, TableSink, TrackScoreProvider, TrackSink};
use upcurve::{cli, completion};

fn print_curves(positions: Option<usize>) -> Result<()> {
    let mut out = io::stdout().lock();
    for curve in CurveSelector::ALL {
        writeln!(out, "{}. {:<20} f(t) = {}", curve.number(), curve.name(), curve.formula())?;

        if let Some(n) = positions.filter(|&n| n > 0) {
            let values: Vec<String> = curve
                .target_values(n)
                .iter()
                .map(|value| format!("{value:.3}"))
                .collect();
            writeln!(out, "   {}", values.join(" "))?;
        }
    }
    Ok(())
}

/// Main entry point for Upcurve.
///
/// Initializes logging, loads the runtime config, parses command-line
/// arguments, and routes commands to the library.
///
/// # Logging
///
/// Controlled via `RUST_LOG`:
/// - `RUST_LOG=debug upcurve reorder 3` - Enable debug logging
/// - `RUST_LOG=upcurve::reorder=trace upcurve reorder 3` - Show computed permutations
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();
    let runtime = RuntimeConfig::load()?;
    let playlist_path = args.input.unwrap_or(runtime.playlist_path);
    debug!("Using playlist file {}", playlist_path.display());

    match args.command {
        cli::Command::Reorder { curve, output, dry_run } => {
            let curve = curve.unwrap_or(runtime.default_curve);
            let mut source = CsvPlaylist::open(&playlist_path)?;

            if dry_run {
                info!("Dry run: printing {curve} order without writing");
                let mut sink = TableSink::new(io::stdout().lock());
                playlist::reorder_playlist(&mut source, &mut sink, curve)?;
            } else {
                let mut sink = match output {
                    Some(path) => CsvPlaylist::open(&path)?,
                    None => source.clone(),
                };
                let count = playlist::reorder_playlist(&mut source, &mut sink, curve)?;
                println!(
                    "Reordered {count} tracks toward {curve}, saved to {}",
                    sink.path().display()
                );
            }
        }
        cli::Command::Curves { positions } => {
            print_curves(positions)?;
        }
        cli::Command::List => {
            let tracks = CsvPlaylist::open(&playlist_path)?.tracks()?;
            TableSink::new(io::stdout().lock()).submit(&tracks)?;
        }
        cli::Command::ExportIds { output } => {
            let tracks = CsvPlaylist::open(&playlist_path)?.tracks()?;
            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    IdListSink::new(BufWriter::new(file)).submit(&tracks)?;
                    info!("Wrote {} track IDs to {}", tracks.len(), path.display());
                }
                None => IdListSink::new(io::stdout().lock()).submit(&tracks)?,
            }
        }
        cli::Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(
                completion::shell_to_completion_shell(shell),
                &mut cmd,
                &mut io::stdout(),
            );
        }
    }

    Ok(())
}
