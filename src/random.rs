use rand::Rng;

use crate::colour::Colour;
use crate::point2d::CanvasPoint;
use crate::triangle::CanvasTriangle;

pub fn random_colour<R: Rng>(rng: &mut R) -> Colour {
    Colour::new(rng.gen_range(0..=255), rng.gen_range(0..=255), rng.gen_range(0..=255))
}

/// Triangle with integer vertices anywhere on a `width` x `height` canvas.
pub fn random_triangle<R: Rng>(rng: &mut R, width: u32, height: u32) -> CanvasTriangle {
    let mut vertex = || {
        CanvasPoint::new(rng.gen_range(0..width.max(1)) as f32, rng.gen_range(0..height.max(1)) as f32)
    };
    CanvasTriangle::new(vertex(), vertex(), vertex())
}
