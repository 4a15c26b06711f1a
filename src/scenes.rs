//! The exercise drawings shown by the demo window.

use rand::Rng;

use crate::colour::Colour;
use crate::geometry::barycentric;
use crate::interpolate::{interpolate_single_floats, interpolate_three_element_values};
use crate::line::draw_line;
use crate::point2d::{CanvasPoint, Point2D};
use crate::screen::PixelSurface;
use crate::triangle::CanvasTriangle;

pub fn draw_red_noise<S: PixelSurface + ?Sized, R: Rng>(surface: &mut S, rng: &mut R) {
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            surface.set_pixel_colour(x, y, Colour::new(rng.gen_range(0..=255), 0, 0).packed());
        }
    }
}

/// White on the left fading to black on the right.
pub fn draw_greyscale<S: PixelSurface + ?Sized>(surface: &mut S) {
    let levels = interpolate_single_floats(255.0, 0.0, surface.width() as usize);
    for y in 0..surface.height() {
        for (x, level) in levels.iter().enumerate() {
            let grey = level.round() as u8;
            surface.set_pixel_colour(x as u32, y, Colour::new(grey, grey, grey).packed());
        }
    }
}

/// Red, blue, green and yellow corners (clockwise from top left) blended across the surface.
pub fn draw_colour_gradient<S: PixelSurface + ?Sized>(surface: &mut S) {
    let (width, height) = (surface.width() as usize, surface.height() as usize);
    let first_column = interpolate_three_element_values(Colour::RED.into(), Colour::YELLOW.into(), height);
    let last_column = interpolate_three_element_values(Colour::BLUE.into(), Colour::GREEN.into(), height);
    for (y, (&left, &right)) in first_column.iter().zip(&last_column).enumerate() {
        for (x, colour) in interpolate_three_element_values(left, right, width).into_iter().enumerate() {
            surface.set_pixel_colour(x as u32, y as u32, colour.to_colour().packed());
        }
    }
}

/// A triangle spanning the surface with each vertex weight driving one channel; black outside.
pub fn draw_barycentric<S: PixelSurface + ?Sized>(surface: &mut S) {
    let (width, height) = (surface.width() as f32, surface.height() as f32);
    let v0 = Point2D::new(0.0, height);
    let v1 = Point2D::new(width / 2.0, 0.0);
    let v2 = Point2D::new(width, height);
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            let colour = match barycentric(v0, v1, v2, Point2D::new(x as f32, y as f32)) {
                Some(weights) if weights.min_element() >= 0.0 => (weights * 255.0).to_colour(),
                _ => Colour::BLACK,
            };
            surface.set_pixel_colour(x, y, colour.packed());
        }
    }
}

/// Lines from both top corners to the centre, a vertical centre line and a horizontal middle third.
pub fn draw_line_pattern<S: PixelSurface + ?Sized>(surface: &mut S) {
    let (width, height) = (surface.width() as f32, surface.height() as f32);
    let centre = CanvasPoint::new((width / 2.0).floor(), (height / 2.0).floor());
    let lines = [
        (CanvasPoint::new(0.0, 0.0), centre),
        (CanvasPoint::new(width - 1.0, 0.0), centre),
        (CanvasPoint::new(centre.x, 0.0), CanvasPoint::new(centre.x, height - 1.0)),
        (CanvasPoint::new((width / 3.0).floor(), centre.y), CanvasPoint::new((2.0 * width / 3.0).floor(), centre.y)),
    ];
    for (from, to) in lines {
        draw_line(surface, from, to, Colour::WHITE);
    }
}

/// Reference triangle for a 320x240 canvas, with texture points in the reference texture's pixel space.
pub fn textured_demo_triangle() -> CanvasTriangle {
    CanvasTriangle::new(
        CanvasPoint::textured(160.0, 10.0, 195.0, 5.0),
        CanvasPoint::textured(300.0, 230.0, 395.0, 380.0),
        CanvasPoint::textured(10.0, 150.0, 65.0, 330.0),
    )
}
