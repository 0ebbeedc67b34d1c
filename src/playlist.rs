//! Playlist sources and destinations around the reorderer.
//!
//! The reorderer itself never touches files. This module provides the two
//! seams it is plugged between:
//!
//! - [`TrackScoreProvider`] - yields tracks in their current order
//! - [`TrackSink`] - receives tracks in their new order
//!
//! [`CsvPlaylist`] implements both for the five-column playlist file, so the
//! usual workflow reads and rewrites the same file. [`IdListSink`] emits the
//! ordered track IDs a remote playlist would be built from, and
//! [`TableSink`] prints a human-readable listing.

use crate::curve::CurveSelector;
use crate::reorder::CurveReorderer;
use crate::track::{Track, COLUMNS};
use anyhow::{bail, Context, Result};
use log::{debug, info};
use path_absolutize::Absolutize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Anything that can hand over a playlist's tracks in order
pub trait TrackScoreProvider {
    /// Return every track, in current playlist order
    ///
    /// # Errors
    ///
    /// Returns an error if the tracks cannot be read
    fn tracks(&mut self) -> Result<Vec<Track>>;
}

/// Anything that can persist or transmit an ordered playlist
pub trait TrackSink {
    /// Accept `tracks` in their final order
    ///
    /// # Errors
    ///
    /// Returns an error if the tracks cannot be written
    fn submit(&mut self, tracks: &[Track]) -> Result<()>;
}

/// Playlist stored as a CSV file with the columns in [`COLUMNS`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvPlaylist {
    path: PathBuf,
}

impl CsvPlaylist {
    /// Use the file at `path` as a playlist.
    ///
    /// Nothing is read or created yet; a missing file is only reported when
    /// tracks are requested, so the same path can serve as an output.
    ///
    /// # Platform Behavior
    ///
    /// Relative paths are resolved against the current directory without
    /// touching the filesystem, so symlinks are kept as given.
    ///
    /// # Returns
    ///
    /// * `Ok(CsvPlaylist)` - Playlist bound to the absolute path
    /// * `Err(anyhow::Error)` - If the current directory cannot be determined
    ///
    /// # Errors
    ///
    /// Returns an error if a relative path cannot be resolved
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use upcurve::playlist::{CsvPlaylist, TrackScoreProvider};
    ///
    /// let mut playlist = CsvPlaylist::open(Path::new("playlist.csv"))?;
    /// println!("{} tracks", playlist.tracks()?.len());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn open(path: &Path) -> Result<Self> {
        let path = path
            .absolutize()
            .with_context(|| format!("Failed to resolve playlist path {}", path.display()))?
            .into_owned();
        debug!("Playlist file resolved to {}", path.display());
        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TrackScoreProvider for CsvPlaylist {
    fn tracks(&mut self) -> Result<Vec<Track>> {
        if !self.path.exists() {
            bail!(
                "Playlist file '{}' not found. Create a playlist CSV file first.",
                self.path.display()
            );
        }

        let mut reader = csv::Reader::from_path(&self.path)
            .with_context(|| format!("Failed to open playlist file {}", self.path.display()))?;

        let mut tracks = Vec::new();
        for (row, record) in reader.deserialize::<Track>().enumerate() {
            // Row 1 is the header line.
            let track = record.with_context(|| {
                format!("Malformed row {} in {}", row + 2, self.path.display())
            })?;
            tracks.push(track);
        }

        info!("Read {} tracks from {}", tracks.len(), self.path.display());
        Ok(tracks)
    }
}

impl TrackSink for CsvPlaylist {
    /// Replace the file with `tracks`.
    ///
    /// Rows go to a temporary file in the same directory, which is renamed
    /// over the playlist only once every row is written. A failed write
    /// leaves the existing playlist untouched.
    fn submit(&mut self, tracks: &[Track]) -> Result<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let temp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
        let mut writer = csv::Writer::from_writer(temp);

        // Written explicitly so an empty playlist still gets its header line.
        writer.write_record(COLUMNS)?;
        for track in tracks {
            let composite = track.composite_value.map(|value| value.to_string()).unwrap_or_default();
            writer
                .write_record([
                    track.name.as_str(),
                    track.artist.as_str(),
                    track.id.as_str(),
                    track.date_added.as_str(),
                    composite.as_str(),
                ])
                .with_context(|| format!("Failed to write track {} ({})", track.name, track.id))?;
        }
        let temp = writer.into_inner().map_err(|e| {
            anyhow::anyhow!("Failed to flush playlist rows for {}: {}", self.path.display(), e.error())
        })?;
        temp.persist(&self.path)
            .with_context(|| format!("Failed to replace playlist file {}", self.path.display()))?;

        info!("Wrote {} tracks to {}", tracks.len(), self.path.display());
        Ok(())
    }
}

/// Writes one track ID per line, in playlist order
#[derive(Debug)]
pub struct IdListSink<W: Write> {
    out: W,
}

impl<W: Write> IdListSink<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TrackSink for IdListSink<W> {
    fn submit(&mut self, tracks: &[Track]) -> Result<()> {
        for track in tracks {
            writeln!(self.out, "{}", track.id).context("Failed to write track ID")?;
        }
        self.out.flush().context("Failed to flush track IDs")?;
        Ok(())
    }
}

/// Prints a numbered listing: position, composite value, title, artist
#[derive(Debug)]
pub struct TableSink<W: Write> {
    out: W,
}

impl<W: Write> TableSink<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TrackSink for TableSink<W> {
    fn submit(&mut self, tracks: &[Track]) -> Result<()> {
        let width = tracks.len().to_string().len();
        for (idx, track) in tracks.iter().enumerate() {
            let value = track
                .composite_value
                .map_or_else(|| "-".to_string(), |value| format!("{value:.3}"));
            writeln!(
                self.out,
                "{:>width$}. {value:>7}  {} - {}",
                idx + 1,
                track.name,
                track.artist,
            )
            .context("Failed to print playlist")?;
        }
        self.out.flush().context("Failed to flush playlist listing")?;
        Ok(())
    }
}

/// Read from `provider`, reorder toward `curve`, hand the result to `sink`.
///
/// Nothing reaches the sink if the reorder fails, so a playlist with a
/// missing or non-finite composite value is never partially rewritten.
///
/// # Returns
///
/// * `Ok(usize)` - Number of tracks handed to the sink
/// * `Err(anyhow::Error)` - First failure from the provider, reorderer, or sink
///
/// # Errors
///
/// Returns an error if reading, reordering, or writing fails. Reorder
/// failures carry a [`ReorderError`](crate::error::ReorderError) that can be
/// recovered with `downcast_ref`.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use upcurve::curve::CurveSelector;
/// use upcurve::playlist::{reorder_playlist, CsvPlaylist};
///
/// let mut playlist = CsvPlaylist::open(Path::new("playlist.csv"))?;
/// let mut output = playlist.clone();
/// let count = reorder_playlist(&mut playlist, &mut output, CurveSelector::NegativeQuadratic)?;
/// println!("Reordered {count} tracks");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn reorder_playlist<P, S>(provider: &mut P, sink: &mut S, curve: CurveSelector) -> Result<usize>
where
    P: TrackScoreProvider + ?Sized,
    S: TrackSink + ?Sized,
{
    let tracks = provider.tracks()?;
    let count = tracks.len();

    let reordered = CurveReorderer::new(curve)
        .reorder(tracks.into_iter().map(Track::into_scored).collect())
        .with_context(|| format!("Cannot reorder playlist toward {curve}"))?;

    let tracks: Vec<Track> = reordered.into_iter().map(|item| item.payload).collect();
    sink.submit(&tracks)?;

    info!("Reordered {count} tracks toward {curve}");
    Ok(count)
}
