//! Station cover art: resolving a source image and baking the two-panel
//! texture the station picker displays.
//!
//! The left panel is the plain cover, the right panel is the same cover
//! with the right half of the overlay template drawn on top. Both panels are
//! `PANEL_WIDTH` x `PANEL_HEIGHT` and the game is told the sprite has two
//! frames.

mod composite;
mod dds;
mod error;
mod resolve;

pub use composite::write_album_art;
pub use error::CoverError;
pub use resolve::{CoverSource, METADATA_SENTINEL, resolve};

pub const PANEL_WIDTH: u32 = 162;
pub const PANEL_HEIGHT: u32 = 130;

#[cfg(test)]
mod tests;
