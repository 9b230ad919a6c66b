use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/hoi4-radio/config.toml` or `~/.config/hoi4-radio/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `HOI4_RADIO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub output: OutputSettings,
    pub cover: CoverSettings,
    pub transcode: TranscodeSettings,
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory created under the output root that mirrors the game's
    /// install layout (`music/`, `interface/`, `localisation/`, `gfx/`).
    pub game_dir: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            game_dir: "Hearts of Iron IV".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CoverSettings {
    /// Overlay drawn over the right half of the station texture.
    /// Only the right half of this image is used.
    pub template_path: PathBuf,
}

impl Default for CoverSettings {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from("radio_station_cover_template.png"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TranscodeSettings {
    /// ffmpeg binary, looked up on `PATH` when not absolute.
    pub ffmpeg_path: PathBuf,
    /// Audio encoder passed to `-c:a`.
    pub codec: String,
    /// Variable bitrate quality passed to `-q:a` (-1..=10 for libvorbis).
    pub quality: Option<i32>,
    /// ffmpeg `-loglevel`.
    pub log_level: String,
    /// Extra arguments inserted right before the output path.
    pub extra_args: Vec<String>,
}

impl Default for TranscodeSettings {
    fn default() -> Self {
        Self {
            ffmpeg_path: PathBuf::from("ffmpeg"),
            codec: "libvorbis".to_string(),
            quality: Some(5),
            log_level: "error".to_string(),
            extra_args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Whether to follow symlinks when walking an input folder.
    pub follow_links: bool,
}
