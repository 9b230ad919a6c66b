//! Getting each track into the game's audio container.
//!
//! `convert_track` decides whether a track needs work at all; the actual
//! re-encoding goes through a [`Transcoder`], normally [`FfmpegTranscoder`].

mod error;
mod ffmpeg;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::library::Track;

pub use error::TranscodeError;
pub use ffmpeg::FfmpegTranscoder;

/// Something that can re-encode an audio file into the target container.
pub trait Transcoder {
    /// Returns the name of this transcoder implementation.
    fn name(&self) -> &str;

    /// Decode `input` and write it re-encoded to `output`, replacing any
    /// existing file.
    fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError>;
}

/// What happened to one track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscodeOutcome {
    /// Source and destination are the same file.
    Skipped,
    /// Source was already in the target container and was copied as is.
    Copied,
    /// Source was re-encoded.
    Encoded,
}

/// Produce `output` from `track`, touching the source as little as possible.
pub fn convert_track(
    transcoder: &dyn Transcoder,
    track: &Track,
    output: &Path,
) -> Result<TranscodeOutcome, TranscodeError> {
    if same_file(&track.path, output) {
        debug!("{} is already in place", output.display());
        return Ok(TranscodeOutcome::Skipped);
    }

    if track.is_target_format() {
        fs::copy(&track.path, output).map_err(|source| TranscodeError::Copy {
            path: track.path.clone(),
            source,
        })?;
        return Ok(TranscodeOutcome::Copied);
    }

    transcoder.transcode(&track.path, output)?;
    Ok(TranscodeOutcome::Encoded)
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
