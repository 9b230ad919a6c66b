use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::error::LibraryError;

/// Audio extensions accepted as input (lowercase, without dot).
pub const AUDIO_EXTENSIONS: [&str; 6] = ["mp3", "wav", "flac", "ogg", "aac", "m4a"];

/// Extension of the container the game loads music from.
pub const TARGET_EXTENSION: &str = "ogg";

/// Characters that break either the file system or the game's script parser.
const RESERVED_NAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// One accepted input audio file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub path: PathBuf,
    /// File stem, used as the song identifier in every generated file.
    pub id: String,
    /// Lowercased extension without the dot.
    pub extension: String,
}

impl Track {
    /// Build a track from a path, or `None` when it has no usable stem or
    /// extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let id = path.file_stem()?.to_str()?.to_string();
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        if id.is_empty() {
            return None;
        }
        Some(Self {
            path: path.to_path_buf(),
            id,
            extension,
        })
    }

    /// Name of the transcoded file inside the album's music directory.
    pub fn output_file_name(&self) -> String {
        format!("{}.{}", self.id, TARGET_EXTENSION)
    }

    /// Whether the source is already in the game's audio container.
    pub fn is_target_format(&self) -> bool {
        self.extension == TARGET_EXTENSION
    }
}

/// A named, ordered set of tracks that becomes one radio station.
#[derive(Debug, Clone)]
pub struct Album {
    name: String,
    tracks: Vec<Track>,
}

impl Album {
    /// Validate the name and the track identifiers, keeping track order.
    pub fn new(name: &str, tracks: Vec<Track>) -> Result<Self, LibraryError> {
        validate_album_name(name)?;

        let mut seen: HashMap<&str, &Path> = HashMap::new();
        for track in &tracks {
            if let Some(first) = seen.insert(&track.id, &track.path) {
                return Err(LibraryError::DuplicateTrackId {
                    id: track.id.clone(),
                    first: first.to_path_buf(),
                    second: track.path.clone(),
                });
            }
        }

        Ok(Self {
            name: name.to_string(),
            tracks,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Album name and song ids that contain whitespace. They are written as
    /// unquoted localisation keys, which the game splits at whitespace.
    pub fn unkeyable_names(&self) -> Vec<&str> {
        std::iter::once(self.name.as_str())
            .chain(self.tracks.iter().map(|t| t.id.as_str()))
            .filter(|n| n.contains(char::is_whitespace))
            .collect()
    }

    /// Sprite and texture identifier shared by the `.gfx`, `.gui` and `.dds`.
    pub fn art_sprite(&self) -> String {
        format!("GFX_{}_album_art", self.name)
    }
}

/// Check that `name` is usable as a directory name and a file stem.
/// Inner whitespace is allowed here; see [`Album::unkeyable_names`].
pub fn validate_album_name(name: &str) -> Result<(), LibraryError> {
    if name.is_empty() {
        return Err(LibraryError::invalid_album_name(name, "name is empty"));
    }
    if name == "." || name == ".." {
        return Err(LibraryError::invalid_album_name(
            name,
            "name is a relative path component",
        ));
    }
    if let Some(c) = name.chars().find(|c| RESERVED_NAME_CHARS.contains(c)) {
        return Err(LibraryError::invalid_album_name(
            name,
            format!("contains reserved character {c:?}"),
        ));
    }
    if name.trim() != name {
        return Err(LibraryError::invalid_album_name(
            name,
            "has leading or trailing whitespace",
        ));
    }
    if name.chars().any(char::is_control) {
        return Err(LibraryError::invalid_album_name(
            name,
            "contains a control character",
        ));
    }
    Ok(())
}
