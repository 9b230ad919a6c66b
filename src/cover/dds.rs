//! Minimal writer for uncompressed 32-bit DDS textures.
//!
//! Layout: `"DDS "` magic, a 124 byte `DDS_HEADER` and BGRA8 rows, top
//! row first. No mipmaps.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};
use image::RgbaImage;

pub const MAGIC: &[u8; 4] = b"DDS ";
pub const HEADER_SIZE: u32 = 124;
const PIXEL_FORMAT_SIZE: u32 = 32;

const DDSD_CAPS: u32 = 0x1;
const DDSD_HEIGHT: u32 = 0x2;
const DDSD_WIDTH: u32 = 0x4;
const DDSD_PITCH: u32 = 0x8;
const DDSD_PIXELFORMAT: u32 = 0x1000;

const DDPF_ALPHAPIXELS: u32 = 0x1;
const DDPF_RGB: u32 = 0x40;

const DDSCAPS_TEXTURE: u32 = 0x1000;

const R_MASK: u32 = 0x00FF_0000;
const G_MASK: u32 = 0x0000_FF00;
const B_MASK: u32 = 0x0000_00FF;
const A_MASK: u32 = 0xFF00_0000;

/// Encode `image` as an uncompressed DDS into `w`.
pub fn encode<W: Write>(mut w: W, image: &RgbaImage) -> io::Result<()> {
    let (width, height) = image.dimensions();

    w.write_all(MAGIC)?;
    w.write_u32::<LittleEndian>(HEADER_SIZE)?;
    w.write_u32::<LittleEndian>(
        DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PITCH | DDSD_PIXELFORMAT,
    )?;
    w.write_u32::<LittleEndian>(height)?;
    w.write_u32::<LittleEndian>(width)?;
    w.write_u32::<LittleEndian>(width * 4)?;
    w.write_u32::<LittleEndian>(0)?; // depth
    w.write_u32::<LittleEndian>(0)?; // mipmap count
    for _ in 0..11 {
        w.write_u32::<LittleEndian>(0)?;
    }

    w.write_u32::<LittleEndian>(PIXEL_FORMAT_SIZE)?;
    w.write_u32::<LittleEndian>(DDPF_RGB | DDPF_ALPHAPIXELS)?;
    w.write_u32::<LittleEndian>(0)?; // fourcc
    w.write_u32::<LittleEndian>(32)?;
    w.write_u32::<LittleEndian>(R_MASK)?;
    w.write_u32::<LittleEndian>(G_MASK)?;
    w.write_u32::<LittleEndian>(B_MASK)?;
    w.write_u32::<LittleEndian>(A_MASK)?;

    w.write_u32::<LittleEndian>(DDSCAPS_TEXTURE)?;
    for _ in 0..4 {
        // caps2, caps3, caps4, reserved2
        w.write_u32::<LittleEndian>(0)?;
    }

    for px in image.pixels() {
        let [r, g, b, a] = px.0;
        w.write_all(&[b, g, r, a])?;
    }
    w.flush()
}

/// Write `image` to `path`, replacing any existing file.
pub fn write(path: &Path, image: &RgbaImage) -> io::Result<()> {
    let file = File::create(path)?;
    encode(BufWriter::new(file), image)
}

/// Decode a texture produced by [`encode`].
#[cfg(test)]
pub fn decode(bytes: &[u8]) -> Option<RgbaImage> {
    use byteorder::{ByteOrder, LittleEndian as LE};

    if bytes.len() < 128 || &bytes[..4] != MAGIC {
        return None;
    }
    let height = LE::read_u32(&bytes[12..16]);
    let width = LE::read_u32(&bytes[16..20]);
    let data = &bytes[128..];
    if data.len() != (width * height * 4) as usize {
        return None;
    }
    let rgba: Vec<u8> = data
        .chunks_exact(4)
        .flat_map(|c| [c[2], c[1], c[0], c[3]])
        .collect();
    RgbaImage::from_raw(width, height, rgba)
}
