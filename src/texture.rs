use std::path::Path;
use image::{DynamicImage, GenericImageView};
use thiserror::Error;

use crate::colour::Colour;

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("Error decoding texture image: {0}")]
    Image(#[from] image::ImageError),
    #[error("Texture image has no pixels ({width}x{height})")]
    Empty { width: u32, height: u32 },
}

/// A decoded texture image: packed `0xAARRGGBB` samples in one flat row-major array.
pub struct TextureMap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u32>,
}

impl TextureMap {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let img: DynamicImage = image::open(path)?;
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(TextureError::Empty { width, height });
        }
        let pixels = img
            .to_rgb8()
            .pixels()
            .map(|p| Colour::new(p[0], p[1], p[2]).packed())
            .collect();
        log::debug!("Loaded {width}x{height} texture from {}", path.display());
        Ok(Self { width, height, pixels })
    }
}

/// Row-major grid of samples, indexed `rows[y][x]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<Vec<u32>>,
}

/// Splits a flat texture map into rows. A short pixel array keeps only its complete rows.
pub fn load_texture(texture_map: &TextureMap) -> Texture {
    let width = texture_map.width as usize;
    let rows: Vec<Vec<u32>> = texture_map
        .pixels
        .chunks_exact(width.max(1))
        .take(texture_map.height as usize)
        .map(|row| row.to_vec())
        .collect();
    if rows.len() < texture_map.height as usize {
        log::warn!("Texture map has {} of {} rows", rows.len(), texture_map.height);
    }
    Texture { width, height: rows.len(), rows }
}

impl Texture {
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> u32) -> Self {
        let rows = (0..height)
            .map(|y| (0..width).map(|x| f(x, y)).collect())
            .collect();
        Texture { width, height, rows }
    }

    /// Black and white squares of `cell` pixels.
    pub fn checkerboard(width: usize, height: usize, cell: usize) -> Self {
        let cell = cell.max(1);
        Texture::from_fn(width, height, |x, y| {
            if (x / cell + y / cell) % 2 == 0 { Colour::WHITE.packed() } else { Colour::BLACK.packed() }
        })
    }

    /// Nearest sample: coordinates are truncated, then clamped to the grid edges.
    pub fn sample(&self, u: f32, v: f32) -> u32 {
        if self.width == 0 || self.height == 0 {
            return Colour::BLACK.packed();
        }
        // `as` saturates, so negatives and NaN land on zero
        let x = (u as usize).min(self.width - 1);
        let y = (v as usize).min(self.height - 1);
        self.rows[y][x]
    }
}
