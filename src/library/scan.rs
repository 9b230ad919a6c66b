use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{AUDIO_EXTENSIONS, Track};

/// How the input paths given on the command line are interpreted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum InputMode {
    /// A single audio file.
    File,
    /// An explicit list of audio files.
    Files,
    /// Folders walked recursively.
    Folder,
}

pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            AUDIO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Expand the input paths into candidate files, preserving the given order.
///
/// Folders are walked recursively with entries sorted by file name so that
/// reruns produce the same playlist order. The directory `skip` (the mod's
/// own output tree) is never descended into, so a rerun does not pick up
/// the songs it wrote last time.
pub fn collect_candidates(
    paths: &[PathBuf],
    mode: InputMode,
    settings: &LibrarySettings,
    skip: &Path,
) -> Vec<PathBuf> {
    match mode {
        InputMode::File | InputMode::Files => paths.to_vec(),
        InputMode::Folder => {
            let skip = fs::canonicalize(skip).unwrap_or_else(|_| skip.to_path_buf());
            paths
                .iter()
                .flat_map(|dir| walk_files(dir, settings, &skip))
                .collect()
        }
    }
}

fn is_same_dir(path: &Path, other: &Path) -> bool {
    path == other || fs::canonicalize(path).is_ok_and(|p| p == other)
}

fn walk_files(dir: &Path, settings: &LibrarySettings, skip: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && is_same_dir(e.path(), skip)))
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() || entry.path().is_file())
        .map(|entry| entry.into_path())
        .collect()
}

/// Keep the candidates on the audio allow-list. Anything else is dropped
/// without a trace in any later stage.
pub fn accepted_tracks(candidates: &[PathBuf]) -> Vec<Track> {
    let tracks: Vec<Track> = candidates
        .iter()
        .filter(|p| is_audio_file(p))
        .filter_map(|p| {
            let track = Track::from_path(p);
            if track.is_none() {
                warn!("Skipping {}: file name is not usable as a song id", p.display());
            }
            track
        })
        .collect();
    debug!(
        candidates = candidates.len(),
        accepted = tracks.len(),
        "filtered input files"
    );
    tracks
}
