use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while assembling an album from input files.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The album name cannot be used as a directory name and game identifier.
    #[error("invalid album name {name:?}: {reason}")]
    InvalidAlbumName { name: String, reason: String },

    /// Two accepted tracks map to the same in-game song identifier.
    #[error("tracks {} and {} both map to song id {id:?}", first.display(), second.display())]
    DuplicateTrackId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },
}

impl LibraryError {
    pub fn invalid_album_name(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidAlbumName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
