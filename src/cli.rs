//! # Command-Line Interface Module
//!
//! Defines the command-line interface for Upcurve using Clap derive macros.
//!
//! ## Commands
//!
//! - `reorder`: Rearrange a playlist file toward a target curve
//! - `curves`: List the available curves
//! - `list`: Print a playlist in its current order
//! - `export-ids`: Write track IDs in playlist order
//! - `completion`: Generate shell completions
//!
//! ## Examples
//!
//! ```bash
//! upcurve reorder negative-quadratic
//! upcurve reorder 5 --input mix.csv --output mix-shaped.csv
//! upcurve curves --positions 10
//! ```

use crate::curve::CurveSelector;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "upcurve")]
#[command(about = "Upcurve: reshape playlists into uplifting curves")]
#[command(version)]
pub struct Args {
    /// Playlist CSV file (overrides the config file)
    #[arg(long, short, global = true, env = "UPCURVE_PLAYLIST", value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Enumeration of all available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rearrange the playlist toward a target curve
    ///
    /// Sorts tracks so their composite values follow the shape of the chosen
    /// curve from first to last track, then writes the playlist back. The
    /// input file is overwritten unless --output is given.
    Reorder {
        /// Curve name or menu number (1-6); see `upcurve curves`
        ///
        /// Defaults to the `default_curve` from the config file.
        curve: Option<CurveSelector>,

        /// Write the result here instead of over the input
        #[arg(long, short, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Print the new order without writing anything
        #[arg(long, conflicts_with = "output")]
        dry_run: bool,
    },

    /// List the available curves
    Curves {
        /// Also show each curve's target values for this many tracks
        #[arg(long, short)]
        positions: Option<usize>,
    },

    /// Print the playlist in its current order
    List,

    /// Write track IDs in playlist order, one per line
    ///
    /// This is the list a new playlist on the music service is built from.
    ExportIds {
        /// Write to this file instead of stdout
        #[arg(long, short, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    ///
    /// Usage: upcurve completion bash > ~/.local/share/bash-completion/completions/upcurve
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_reorder_accepts_names_and_numbers() {
        let args = Args::try_parse_from(["upcurve", "reorder", "negative-quadratic"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Reorder { curve: Some(CurveSelector::NegativeQuadratic), .. }
        ));

        let args = Args::try_parse_from(["upcurve", "reorder", "5", "--dry-run"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Reorder { curve: Some(CurveSelector::PositiveCubic), dry_run: true, .. }
        ));
    }

    #[test]
    fn test_reorder_rejects_unknown_curve() {
        assert!(Args::try_parse_from(["upcurve", "reorder", "7"]).is_err());
        assert!(Args::try_parse_from(["upcurve", "reorder", "sideways"]).is_err());
    }

    #[test]
    fn test_dry_run_conflicts_with_output() {
        let err = Args::try_parse_from([
            "upcurve", "reorder", "1", "--dry-run", "--output", "x.csv",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_global_input_flag() {
        let args = Args::try_parse_from(["upcurve", "list", "--input", "mix.csv"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("mix.csv")));
    }
}
