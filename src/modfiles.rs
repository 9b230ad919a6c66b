//! The five script files that register an album as a radio station.
//!
//! They reference each other by song id, album name and sprite name, so
//! they are always rendered and written together.

mod templates;

use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::library::Album;
use crate::pipeline::OutputTree;

use templates::{render_asset, render_gfx, render_gui, render_localisation, render_playlist};

#[derive(Debug, Error)]
#[error("failed to write {}: {source}", path.display())]
pub struct ModFileError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Render and write all mod files, overwriting earlier output.
/// Returns the written paths in a fixed order.
pub fn write_mod_files(tree: &OutputTree, album: &Album) -> Result<Vec<PathBuf>, ModFileError> {
    let files = [
        (tree.playlist_path(), render_playlist(album)),
        (tree.asset_path(), render_asset(album)),
        (tree.localisation_path(), render_localisation(album)),
        (tree.gui_path(), render_gui(album)),
        (tree.gfx_path(), render_gfx(album)),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (path, contents) in files {
        fs::write(&path, contents).map_err(|source| ModFileError {
            path: path.clone(),
            source,
        })?;
        info!("Created {}", path.display());
        written.push(path);
    }
    Ok(written)
}
