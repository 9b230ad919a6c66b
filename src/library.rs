//! Input tracks and the album they form.
//!
//! `scan` turns user-supplied paths into candidate files and filters them
//! against the audio allow-list; `model` holds the validated `Album`.

mod error;
mod model;
mod scan;

pub use error::LibraryError;
pub use model::*;
pub use scan::{InputMode, accepted_tracks, collect_candidates};
