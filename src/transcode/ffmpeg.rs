use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::TranscodeSettings;

use super::error::TranscodeError;
use super::Transcoder;

/// Transcoder that shells out to the `ffmpeg` binary.
pub struct FfmpegTranscoder {
    settings: TranscodeSettings,
}

impl FfmpegTranscoder {
    pub fn new(settings: TranscodeSettings) -> Self {
        Self { settings }
    }

    /// Builds ffmpeg arguments for an audio-only conversion.
    ///
    /// Paths are passed through as `OsString` so non-UTF-8 names survive.
    fn build_args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-y".into(), // overwrite output
            "-i".into(),
            input.as_os_str().to_os_string(),
            // drop embedded cover streams, the game only wants audio
            "-vn".into(),
            "-c:a".into(),
            self.settings.codec.as_str().into(),
        ];

        if let Some(q) = self.settings.quality {
            args.push(OsString::from("-q:a"));
            args.push(OsString::from(q.to_string()));
        }

        args.push(OsString::from("-loglevel"));
        args.push(OsString::from(&self.settings.log_level));
        args.extend(self.settings.extra_args.iter().map(OsString::from));
        args.push(output.as_os_str().to_os_string());
        args
    }
}

impl Transcoder for FfmpegTranscoder {
    fn name(&self) -> &str {
        "ffmpeg"
    }

    fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError> {
        let args = self.build_args(input, output);
        debug!(
            "running {} {:?}",
            self.settings.ffmpeg_path.display(),
            args
        );

        let result = Command::new(&self.settings.ffmpeg_path)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| TranscodeError::Spawn {
                program: self.settings.ffmpeg_path.clone(),
                source,
            })?;

        if !result.status.success() {
            return Err(TranscodeError::Failed {
                input: input.to_path_buf(),
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}
