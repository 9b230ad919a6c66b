use std::fmt;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use lofty::picture::PictureType;
use lofty::prelude::*;
use tracing::{debug, info, warn};

use crate::library::Track;

use super::error::CoverError;

/// Literal accepted in place of a cover path to mean "use embedded art".
pub const METADATA_SENTINEL: &str = "metadata";

/// Extensions whose tag formats carry embedded pictures we look at
/// (ID3v2 `APIC`, FLAC `PICTURE`, Vorbis `METADATA_BLOCK_PICTURE`).
const TAGGED_EXTENSIONS: [&str; 3] = ["mp3", "flac", "ogg"];

/// Where the station cover should come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverSource {
    /// An image file chosen by the user. Falls back to embedded art when it
    /// cannot be decoded.
    Explicit(PathBuf),
    /// The first picture embedded in the tracks' tags.
    Metadata,
    /// Skip lookup and use the placeholder.
    None,
}

impl CoverSource {
    /// Interpret the `--image` argument.
    pub fn from_arg(arg: &str) -> Self {
        let arg = arg.trim();
        if arg.is_empty() {
            Self::None
        } else if arg.eq_ignore_ascii_case(METADATA_SENTINEL) {
            Self::Metadata
        } else {
            Self::Explicit(PathBuf::from(arg))
        }
    }
}

/// The cover actually used for this run.
#[derive(Debug, Clone)]
pub enum ResolvedCover {
    Explicit { path: PathBuf, image: DynamicImage },
    Embedded { track: PathBuf, image: DynamicImage },
    Placeholder,
}

impl ResolvedCover {
    pub fn image(&self) -> Option<&DynamicImage> {
        match self {
            Self::Explicit { image, .. } | Self::Embedded { image, .. } => Some(image),
            Self::Placeholder => None,
        }
    }
}

impl fmt::Display for ResolvedCover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit { path, .. } => write!(f, "cover image {}", path.display()),
            Self::Embedded { track, .. } => write!(f, "embedded art of {}", track.display()),
            Self::Placeholder => f.write_str("black placeholder"),
        }
    }
}

/// Resolve `source` to a single image. Never fails: every problem is logged
/// and the next fallback is tried.
pub fn resolve(source: &CoverSource, tracks: &[Track]) -> ResolvedCover {
    match source {
        CoverSource::Explicit(path) => match image::open(path) {
            Ok(image) => {
                info!("Using provided cover image: {}", path.display());
                return ResolvedCover::Explicit {
                    path: path.clone(),
                    image,
                };
            }
            Err(e) => {
                warn!("Error processing provided cover {}: {e}", path.display());
            }
        },
        CoverSource::Metadata => {}
        CoverSource::None => return ResolvedCover::Placeholder,
    }

    match first_embedded_cover(tracks) {
        Some((track, image)) => {
            info!("Using cover embedded in {}", track.display());
            ResolvedCover::Embedded { track, image }
        }
        None => {
            info!("No cover found in metadata. Using black placeholder.");
            ResolvedCover::Placeholder
        }
    }
}

/// Return the first decodable embedded picture in track order. Later
/// tracks are not opened once one is found.
pub fn first_embedded_cover(tracks: &[Track]) -> Option<(PathBuf, DynamicImage)> {
    tracks
        .iter()
        .filter(|t| TAGGED_EXTENSIONS.contains(&t.extension.as_str()))
        .find_map(|t| match embedded_cover(&t.path) {
            Ok(Some(image)) => Some((t.path.clone(), image)),
            Ok(None) => {
                debug!("no embedded picture in {}", t.path.display());
                None
            }
            Err(e) => {
                warn!("Error extracting cover from {}: {e}", t.path.display());
                None
            }
        })
}

fn embedded_cover(path: &Path) -> Result<Option<DynamicImage>, CoverError> {
    let tagged = lofty::read_from_path(path).map_err(|source| CoverError::Tags {
        path: path.to_path_buf(),
        source,
    })?;

    // Front cover wins; otherwise the first picture of the first tag.
    let picture = tagged
        .tags()
        .iter()
        .flat_map(|tag| tag.pictures())
        .min_by_key(|p| p.pic_type() != PictureType::CoverFront);

    match picture {
        Some(p) => Ok(Some(image::load_from_memory(p.data())?)),
        None => Ok(None),
    }
}
