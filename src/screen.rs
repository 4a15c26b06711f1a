use anyhow::{Context, Result};
use bytemuck::cast_slice;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::colour::Colour;

/// Anything the rasterizer can draw into.
pub trait PixelSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// `colour` is packed `0xAARRGGBB`. Callers guarantee `x < width` and `y < height`.
    fn set_pixel_colour(&mut self, x: u32, y: u32, colour: u32);
}

/// Rounds `(x, y)` to the nearest pixel and writes it if it lands on the surface.
///
/// Returns whether the pixel was written.
#[inline]
pub fn plot<S: PixelSurface + ?Sized>(surface: &mut S, x: f32, y: f32, colour: u32) -> bool {
    let x = x.round();
    let y = y.round();
    // NaN fails both comparisons and is skipped too
    if !(x >= 0.0 && y >= 0.0 && x < surface.width() as f32 && y < surface.height() as f32) {
        log::trace!("skipping off-surface pixel ({x}, {y})");
        return false;
    }
    surface.set_pixel_colour(x as u32, y as u32, colour);
    true
}

/// In-memory RGBA8 frame buffer.
pub struct ScreenSpace {
    pub width: u32,
    pub height: u32,
    // One little-endian RGBA word per pixel so the bytes can go straight to a window texture
    rgba: Vec<u32>,
}

impl ScreenSpace {
    pub fn new(width: u32, height: u32) -> Self {
        let size_calc = (width * height) as usize;
        Self {
            width,
            height,
            rgba: vec![rgba_word(Colour::BLACK.packed()); size_calc],
        }
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height { return None }
        let [r, g, b, _a] = self.rgba[(y * self.width + x) as usize].to_le_bytes();
        Some(Colour::new(r, g, b).packed())
    }

    pub fn clear(&mut self, colour: Colour) {
        self.rgba.fill(rgba_word(colour.packed()));
    }

    /// Raw RGBA bytes, row-major from the top-left corner.
    pub fn rgba(&self) -> &[u8] {
        cast_slice(&self.rgba)
    }

    /// Binary PPM (P6).
    pub fn write_ppm<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file = BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        );
        write!(file, "P6\n{} {}\n255\n", self.width, self.height)?;
        for pixel in self.rgba().chunks_exact(4) {
            file.write_all(&pixel[..3])?;
        }
        file.flush()?;
        log::info!("Saved {}", path.display());
        Ok(())
    }

    /// 24-bit uncompressed BMP, rows stored bottom-up.
    pub fn write_bmp<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let width = self.width;
        let height = self.height;
        let row_stride = (3 * width + 3) & !3;
        let pixel_array_size = row_stride * height;
        let file_size = 54 + pixel_array_size;
        let mut file = BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        );
        file.write_all(b"BM")?;
        file.write_all(&file_size.to_le_bytes())?;
        file.write_all(&[0u8; 4])?;
        file.write_all(&54u32.to_le_bytes())?;
        file.write_all(&40u32.to_le_bytes())?;
        file.write_all(&(width as i32).to_le_bytes())?;
        file.write_all(&(height as i32).to_le_bytes())?;
        file.write_all(&1u16.to_le_bytes())?;
        file.write_all(&24u16.to_le_bytes())?;
        file.write_all(&[0u8; 4])?;
        file.write_all(&pixel_array_size.to_le_bytes())?;
        // resolution and palette fields
        file.write_all(&[0u8; 16])?;
        let padding = vec![0u8; (row_stride - width * 3) as usize];
        for y in (0..height).rev() {
            for x in 0..width {
                let [r, g, b, _a] = self.rgba[(y * width + x) as usize].to_le_bytes();
                file.write_all(&[b, g, r])?;
            }
            file.write_all(&padding)?;
        }
        file.flush()?;
        log::info!("Saved {}", path.display());
        Ok(())
    }
}

impl PixelSurface for ScreenSpace {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_pixel_colour(&mut self, x: u32, y: u32, colour: u32) {
        if x >= self.width || y >= self.height { return; }
        self.rgba[(y * self.width + x) as usize] = rgba_word(colour);
    }
}

fn rgba_word(packed: u32) -> u32 {
    let alpha = (packed >> 24) as u8;
    let Colour { red, green, blue } = Colour::from_packed(packed);
    u32::from_le_bytes([red, green, blue, alpha])
}
