//! End-to-end generation of one radio station mod.
//!
//! Order matters: the album is validated before anything touches the disk,
//! directories exist before any write, and the script files are written
//! only after every track has been attempted.

mod error;
mod layout;

use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::Settings;
use crate::cover::{self, CoverSource};
use crate::library::{Album, Track, accepted_tracks};
use crate::modfiles::write_mod_files;
use crate::transcode::{TranscodeOutcome, Transcoder, convert_track};

pub use error::PipelineError;
pub use layout::OutputTree;

/// Inputs of a single run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Candidate files, in playlist order. Non-audio files are dropped.
    pub candidates: Vec<PathBuf>,
    pub album: String,
    pub output_root: PathBuf,
    pub cover: CoverSource,
}

/// Result of one track's conversion.
#[derive(Debug)]
pub struct TrackResult {
    pub track: Track,
    pub output: PathBuf,
    /// `Err` holds the logged failure message.
    pub outcome: Result<TranscodeOutcome, String>,
}

/// Summary of what a run produced.
#[derive(Debug)]
pub struct RunReport {
    pub album: String,
    /// How the cover was obtained, e.g. "black placeholder".
    pub cover: String,
    pub tracks: Vec<TrackResult>,
    /// Texture and script files, in write order.
    pub written: Vec<PathBuf>,
}

impl RunReport {
    /// Tracks referenced by the script files whose audio file was not produced.
    pub fn missing_audio(&self) -> impl Iterator<Item = &TrackResult> {
        self.tracks.iter().filter(|t| t.outcome.is_err())
    }
}

pub fn run(
    request: &RunRequest,
    settings: &Settings,
    transcoder: &dyn Transcoder,
) -> Result<RunReport, PipelineError> {
    let album = Album::new(&request.album, accepted_tracks(&request.candidates))?;
    if album.tracks().is_empty() {
        warn!("No audio files found; the station will have no songs");
    }
    for name in album.unkeyable_names() {
        warn!("{name:?} contains whitespace; the game will not resolve its localisation key");
    }

    let tree = OutputTree::new(&request.output_root, &settings.output.game_dir, album.name());
    tree.create()?;

    let mut written = Vec::new();

    let resolved = cover::resolve(&request.cover, album.tracks());
    let art_path = tree.album_art_path();
    cover::write_album_art(&art_path, &resolved, &settings.cover.template_path)?;
    written.push(art_path);

    let mut tracks = Vec::with_capacity(album.tracks().len());
    for track in album.tracks() {
        let output = tree.track_output(track);
        info!(
            "Converting {} > {}",
            track.path.display(),
            track.output_file_name()
        );
        let outcome = convert_track(transcoder, track, &output).map_err(|e| {
            warn!("Error converting {}: {e}", track.path.display());
            e.to_string()
        });
        tracks.push(TrackResult {
            track: track.clone(),
            output,
            outcome,
        });
    }

    written.extend(write_mod_files(&tree, &album)?);

    let report = RunReport {
        album: album.name().to_string(),
        cover: resolved.to_string(),
        tracks,
        written,
    };

    for missing in report.missing_audio() {
        warn!(
            "Song {:?} is listed in the station but {} was not produced",
            missing.track.id,
            missing.output.display()
        );
    }
    info!(
        album = %report.album,
        tracks = report.tracks.len(),
        failed = report.missing_audio().count(),
        cover = %report.cover,
        "Station written to {}",
        tree.base().display()
    );

    Ok(report)
}
