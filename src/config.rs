//! Configuration loader and schema types.
//!
//! This module exposes the settings that shape a run (output layout, cover
//! template, ffmpeg invocation, folder scanning) and helpers to load them
//! from disk and the environment.

mod load;
mod schema;

pub use schema::*;
