use std::fs;
use std::path::{Path, PathBuf};

use crate::library::Track;

use super::error::PipelineError;

/// The mod's directory layout under the output root:
///
/// ```text
/// <output>/<game>/music/<album>/
/// <output>/<game>/interface/
/// <output>/<game>/localisation/english/
/// <output>/<game>/gfx/
/// ```
#[derive(Debug, Clone)]
pub struct OutputTree {
    base: PathBuf,
    album: String,
}

impl OutputTree {
    pub fn new(output_root: &Path, game_dir: &str, album: &str) -> Self {
        Self {
            base: output_root.join(game_dir),
            album: album.to_string(),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn music_dir(&self) -> PathBuf {
        self.base.join("music").join(&self.album)
    }

    pub fn interface_dir(&self) -> PathBuf {
        self.base.join("interface")
    }

    pub fn localisation_dir(&self) -> PathBuf {
        self.base.join("localisation").join("english")
    }

    pub fn gfx_dir(&self) -> PathBuf {
        self.base.join("gfx")
    }

    pub fn dirs(&self) -> [PathBuf; 4] {
        [
            self.music_dir(),
            self.interface_dir(),
            self.localisation_dir(),
            self.gfx_dir(),
        ]
    }

    /// Create every directory of the layout. Existing directories are fine.
    pub fn create(&self) -> Result<(), PipelineError> {
        for dir in self.dirs() {
            fs::create_dir_all(&dir).map_err(|source| PipelineError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    pub fn track_output(&self, track: &Track) -> PathBuf {
        self.music_dir().join(track.output_file_name())
    }

    pub fn playlist_path(&self) -> PathBuf {
        self.music_dir().join(format!("{}.txt", self.album))
    }

    pub fn asset_path(&self) -> PathBuf {
        self.music_dir().join(format!("{}.asset", self.album))
    }

    pub fn localisation_path(&self) -> PathBuf {
        self.localisation_dir()
            .join(format!("{}_l_english.yml", self.album))
    }

    pub fn gui_path(&self) -> PathBuf {
        self.interface_dir().join(format!("{}.gui", self.album))
    }

    pub fn gfx_path(&self) -> PathBuf {
        self.interface_dir().join(format!("{}.gfx", self.album))
    }

    pub fn album_art_path(&self) -> PathBuf {
        self.gfx_dir()
            .join(format!("GFX_{}_album_art.dds", self.album))
    }
}
