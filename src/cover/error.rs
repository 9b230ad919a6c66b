use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoverError {
    /// Reading tags from an audio file failed.
    #[error("failed to read tags from {}: {source}", path.display())]
    Tags {
        path: PathBuf,
        #[source]
        source: lofty::error::LoftyError,
    },

    /// An image could not be opened or decoded.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Writing the texture failed.
    #[error("failed to write texture {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
