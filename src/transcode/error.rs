use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while producing one track's audio file.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// The encoder process could not be started.
    #[error("failed to run {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The encoder ran but reported failure.
    #[error("converting {} failed ({status}): {stderr}", input.display())]
    Failed {
        input: PathBuf,
        status: String,
        stderr: String,
    },

    /// Copying an already-converted file failed.
    #[error("failed to copy {}: {source}", path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
