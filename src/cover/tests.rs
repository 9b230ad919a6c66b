use super::composite::compose_texture;
use super::resolve::{ResolvedCover, first_embedded_cover};
use super::*;
use crate::library::Track;
use image::{DynamicImage, GenericImageView, ImageFormat, Rgba, RgbaImage};
use lofty::config::WriteOptions;
use lofty::picture::{Picture, PictureType};
use lofty::prelude::*;
use lofty::tag::{Tag, TagType};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn solid(w: u32, h: u32, px: [u8; 4]) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, Rgba(px)))
}

fn png_bytes(px: [u8; 4]) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    solid(8, 8, px).write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// Eight silent MPEG-1 Layer III frames (128 kbps, 44.1 kHz, 417 bytes each).
fn write_mp3(path: &Path) {
    let mut frame = vec![0u8; 417];
    frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
    fs::write(path, frame.repeat(8)).unwrap();
}

fn picture(kind: PictureType, description: &str, px: [u8; 4]) -> Picture {
    let mut p = Picture::from_reader(&mut Cursor::new(png_bytes(px))).unwrap();
    p.set_pic_type(kind);
    p.set_description(Some(description.to_string()));
    p
}

/// An mp3 whose ID3v2 tag holds a red "other" picture before a green front cover.
fn write_tagged_mp3(path: &Path) {
    write_mp3(path);
    let mut tag = Tag::new(TagType::Id3v2);
    tag.push_picture(picture(PictureType::Other, "booklet", RED));
    tag.push_picture(picture(PictureType::CoverFront, "front", GREEN));
    tag.save_to_path(path, WriteOptions::default()).unwrap();
}

const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];

fn region_is(img: &RgbaImage, x0: u32, x1: u32, px: [u8; 4]) -> bool {
    (0..img.height()).all(|y| (x0..x1).all(|x| img.get_pixel(x, y).0 == px))
}

#[test]
fn cover_source_from_arg() {
    assert_eq!(CoverSource::from_arg("metadata"), CoverSource::Metadata);
    assert_eq!(CoverSource::from_arg("METADATA"), CoverSource::Metadata);
    assert_eq!(CoverSource::from_arg("  "), CoverSource::None);
    assert_eq!(
        CoverSource::from_arg("art/cover.png"),
        CoverSource::Explicit(PathBuf::from("art/cover.png"))
    );
}

#[test]
fn compose_texture_without_overlay_repeats_cover() {
    let texture = compose_texture(&solid(500, 500, [10, 20, 30, 255]), None);
    assert_eq!(texture.dimensions(), (PANEL_WIDTH * 2, PANEL_HEIGHT));
    assert!(region_is(&texture, 0, PANEL_WIDTH * 2, [10, 20, 30, 255]));
}

#[test]
fn compose_texture_uses_right_half_of_overlay_on_right_panel_only() {
    // Left half opaque green (must be ignored), right half opaque red.
    let mut overlay = RgbaImage::from_pixel(40, 10, Rgba([0, 255, 0, 255]));
    for y in 0..10 {
        for x in 20..40 {
            overlay.put_pixel(x, y, Rgba([255, 0, 0, 255]));
        }
    }
    let overlay = DynamicImage::ImageRgba8(overlay);

    let texture = compose_texture(&solid(162, 130, [0, 0, 255, 255]), Some(&overlay));
    assert!(region_is(&texture, 0, PANEL_WIDTH, [0, 0, 255, 255]));
    assert!(region_is(&texture, PANEL_WIDTH, PANEL_WIDTH * 2, [255, 0, 0, 255]));
}

#[test]
fn compose_texture_transparent_overlay_leaves_cover_visible() {
    let overlay = solid(64, 64, [255, 255, 255, 0]);
    let texture = compose_texture(&solid(100, 80, [200, 100, 50, 255]), Some(&overlay));
    assert!(region_is(&texture, PANEL_WIDTH, PANEL_WIDTH * 2, [200, 100, 50, 255]));
}

#[test]
fn dds_header_describes_uncompressed_bgra() {
    let mut img = RgbaImage::new(2, 1);
    img.put_pixel(0, 0, Rgba([1, 2, 3, 4]));
    img.put_pixel(1, 0, Rgba([5, 6, 7, 8]));

    let mut bytes = Vec::new();
    dds::encode(&mut bytes, &img).unwrap();

    assert_eq!(bytes.len(), 128 + 2 * 4);
    assert_eq!(&bytes[..4], b"DDS ");
    assert_eq!(u32::from_le_bytes(bytes[4..8].try_into().unwrap()), 124);
    assert_eq!(u32::from_le_bytes(bytes[12..16].try_into().unwrap()), 1);
    assert_eq!(u32::from_le_bytes(bytes[16..20].try_into().unwrap()), 2);
    assert_eq!(u32::from_le_bytes(bytes[20..24].try_into().unwrap()), 8);
    assert_eq!(&bytes[128..], &[3, 2, 1, 4, 7, 6, 5, 8]);
    assert_eq!(dds::decode(&bytes).unwrap(), img);
}

#[test]
fn resolve_none_is_placeholder() {
    assert!(matches!(
        resolve(&CoverSource::None, &[]),
        ResolvedCover::Placeholder
    ));
}

#[test]
fn resolve_explicit_png() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cover.png");
    solid(32, 32, [9, 8, 7, 255]).save(&path).unwrap();

    match resolve(&CoverSource::Explicit(path.clone()), &[]) {
        ResolvedCover::Explicit { path: p, image } => {
            assert_eq!(p, path);
            assert_eq!(image.dimensions(), (32, 32));
        }
        other => panic!("expected explicit cover, got {other}"),
    }
}

#[test]
fn resolve_broken_explicit_falls_back_through_metadata_to_placeholder() {
    let dir = tempdir().unwrap();
    let bad = dir.path().join("cover.png");
    fs::write(&bad, b"not a png").unwrap();
    let song = dir.path().join("song.mp3");
    fs::write(&song, b"not an mp3").unwrap();
    let tracks = vec![Track::from_path(&song).unwrap()];

    assert!(matches!(
        resolve(&CoverSource::Explicit(bad), &tracks),
        ResolvedCover::Placeholder
    ));
}

#[test]
fn first_embedded_cover_skips_untagged_formats_and_unreadable_files() {
    let dir = tempdir().unwrap();
    let mut tracks = Vec::new();
    for name in ["a.wav", "b.mp3", "c.flac", "d.ogg", "e.m4a"] {
        let p = dir.path().join(name);
        fs::write(&p, b"garbage").unwrap();
        tracks.push(Track::from_path(&p).unwrap());
    }
    assert!(first_embedded_cover(&tracks).is_none());
}

#[test]
fn write_album_art_placeholder_is_two_black_panels() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("GFX_Nightwatch_album_art.dds");

    write_album_art(
        &out,
        &ResolvedCover::Placeholder,
        Path::new("/definitely/missing/template.png"),
    )
    .unwrap();

    let texture = dds::decode(&fs::read(&out).unwrap()).unwrap();
    assert_eq!(texture.dimensions(), (324, 130));
    assert!(region_is(&texture, 0, 324, [0, 0, 0, 255]));
}

#[test]
fn write_album_art_left_panel_is_the_explicit_cover() {
    let dir = tempdir().unwrap();
    let cover_path = dir.path().join("cover.png");
    solid(300, 300, [40, 80, 120, 255]).save(&cover_path).unwrap();
    let template = dir.path().join("template.png");
    solid(324, 130, [255, 255, 255, 255]).save(&template).unwrap();

    let cover = resolve(&CoverSource::Explicit(cover_path), &[]);
    let out = dir.path().join("art.dds");
    write_album_art(&out, &cover, &template).unwrap();

    let texture = dds::decode(&fs::read(&out).unwrap()).unwrap();
    assert!(region_is(&texture, 0, PANEL_WIDTH, [40, 80, 120, 255]));
    assert!(region_is(&texture, PANEL_WIDTH, 324, [255, 255, 255, 255]));
}

#[test]
fn first_embedded_cover_prefers_front_cover_of_first_tagged_track() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("01 plain.mp3");
    write_mp3(&plain);
    let tagged = dir.path().join("02 tagged.mp3");
    write_tagged_mp3(&tagged);
    let tracks = vec![
        Track::from_path(&plain).unwrap(),
        Track::from_path(&tagged).unwrap(),
    ];

    let (from, image) = first_embedded_cover(&tracks).unwrap();
    assert_eq!(from, tagged);
    assert_eq!(image.dimensions(), (8, 8));
    assert_eq!(image.get_pixel(0, 0).0, GREEN);
}

#[test]
fn resolve_metadata_uses_embedded_art() {
    let dir = tempdir().unwrap();
    let song = dir.path().join("song.mp3");
    write_tagged_mp3(&song);
    let tracks = vec![Track::from_path(&song).unwrap()];

    match resolve(&CoverSource::Metadata, &tracks) {
        ResolvedCover::Embedded { track, image } => {
            assert_eq!(track, song);
            assert_eq!(image.get_pixel(4, 4).0, GREEN);
        }
        other => panic!("expected embedded cover, got {other}"),
    }
}

#[test]
fn resolve_broken_explicit_falls_back_to_embedded_art() {
    let dir = tempdir().unwrap();
    let song = dir.path().join("song.mp3");
    write_tagged_mp3(&song);
    let tracks = vec![Track::from_path(&song).unwrap()];

    let cover = resolve(
        &CoverSource::Explicit(dir.path().join("missing.png")),
        &tracks,
    );
    assert!(matches!(cover, ResolvedCover::Embedded { .. }));

    let out = dir.path().join("art.dds");
    write_album_art(&out, &cover, Path::new("/definitely/missing/template.png")).unwrap();
    let texture = dds::decode(&fs::read(&out).unwrap()).unwrap();
    assert!(region_is(&texture, 0, 324, GREEN));
}
