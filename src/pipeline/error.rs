use std::path::PathBuf;

use thiserror::Error;

use crate::cover::CoverError;
use crate::library::LibraryError;
use crate::modfiles::ModFileError;

/// Failures that stop a run. Per-track problems are not errors at this
/// level; they end up in the `RunReport`.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Library(#[from] LibraryError),

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Cover(#[from] CoverError),

    #[error(transparent)]
    ModFile(#[from] ModFileError),
}
