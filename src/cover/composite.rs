use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use tracing::{info, warn};

use super::error::CoverError;
use super::resolve::ResolvedCover;
use super::{PANEL_HEIGHT, PANEL_WIDTH, dds};

/// Plain black panel used when no cover could be resolved.
pub fn placeholder() -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        PANEL_WIDTH,
        PANEL_HEIGHT,
        Rgba([0, 0, 0, 255]),
    ))
}

/// Load the overlay template, logging and returning `None` when it is unusable.
pub fn load_template(path: &Path) -> Option<DynamicImage> {
    match image::open(path) {
        Ok(img) => Some(img),
        Err(e) => {
            warn!(
                "Cover template {} unusable, right panel gets no overlay: {e}",
                path.display()
            );
            None
        }
    }
}

/// Build the 2-panel texture: `[cover | cover + overlay]`.
///
/// Only the right half of `overlay` is used, stretched to one panel and
/// alpha-composited over the cover.
pub fn compose_texture(cover: &DynamicImage, overlay: Option<&DynamicImage>) -> RgbaImage {
    let panel = cover
        .resize_exact(PANEL_WIDTH, PANEL_HEIGHT, FilterType::Lanczos3)
        .to_rgba8();

    let mut framed = panel.clone();
    if let Some(overlay) = overlay {
        let (w, h) = overlay.dimensions();
        let right = overlay
            .crop_imm(w / 2, 0, w - w / 2, h)
            .resize_exact(PANEL_WIDTH, PANEL_HEIGHT, FilterType::Lanczos3)
            .to_rgba8();
        imageops::overlay(&mut framed, &right, 0, 0);
    }

    let mut texture = RgbaImage::new(PANEL_WIDTH * 2, PANEL_HEIGHT);
    imageops::replace(&mut texture, &panel, 0, 0);
    imageops::replace(&mut texture, &framed, i64::from(PANEL_WIDTH), 0);
    texture
}

/// Composite the resolved cover (or the placeholder) and write it as DDS.
pub fn write_album_art(
    output: &Path,
    cover: &ResolvedCover,
    template_path: &Path,
) -> Result<(), CoverError> {
    let fallback;
    let source = match cover.image() {
        Some(img) => img,
        None => {
            fallback = placeholder();
            &fallback
        }
    };

    let overlay = load_template(template_path);
    let texture = compose_texture(source, overlay.as_ref());

    dds::write(output, &texture).map_err(|source| CoverError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!("Saved: {}", output.display());
    Ok(())
}
