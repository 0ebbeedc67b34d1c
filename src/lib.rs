//! Reshape playlists so their intensity follows a chosen curve.
//!
//! Core modules:
//! - [`curve`] - The six target curve shapes
//! - [`reorder`] - Curve-fitting reordering of scored sequences
//! - [`error`] - Reordering failures
//!
//! ### Supporting Modules
//!
//! - [`track`] - Playlist file rows
//! - [`playlist`] - Track providers and sinks (CSV file, ID list, table)
//! - [`config`] - Configuration file and directory management
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//!
//! ## Quick Start Example
//!
//! ```
//! use upcurve::curve::CurveSelector;
//! use upcurve::reorder::{reorder, ScoredItem};
//!
//! let tracks = vec![
//!     ScoredItem::new("Intro", 0.10),
//!     ScoredItem::new("Anthem", 0.90),
//!     ScoredItem::new("Groove", 0.45),
//! ];
//!
//! // Quiet first, build toward the biggest track.
//! let shaped = reorder(tracks, CurveSelector::PositiveLinear)?;
//! let names: Vec<&str> = shaped.iter().map(|t| t.payload).collect();
//! assert_eq!(names, ["Intro", "Groove", "Anthem"]);
//! # Ok::<(), upcurve::error::ReorderError>(())
//! ```
//!
//! ## How Reordering Works
//!
//! Each position `x` of an `n`-track playlist gets a target value
//! `f((x + 1) / n)` from the chosen curve. Tracks are then dealt out so
//! that the k-th lowest score lands on the position with the k-th lowest
//! target value. Only rank order matters, so scores need not share the
//! curve's range; they only have to be finite.
//!
//! Equal scores never trade places with each other: a tied group fills its
//! positions in original order.
//!
//! ## Error Handling
//!
//! The reorderer returns [`error::ReorderError`] and rejects empty input,
//! non-finite scores, and unknown curve selectors before doing any work.
//! File and configuration helpers return `anyhow::Result` with context.

pub mod cli;
pub mod completion;
pub mod config;
pub mod curve;
pub mod error;
pub mod playlist;
pub mod reorder;
pub mod track;

pub use curve::CurveSelector;
pub use error::ReorderError;
pub use reorder::{permutation, reorder, reorder_by, CurveReorderer, ScoredItem};
