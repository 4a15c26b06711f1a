//! Scanline triangle rasterization.
//!
//! Triangles are split into a half above and a half below their middle vertex, and each half is
//! filled one integer row at a time. The top half covers rows `[ceil(p0.y), ceil(p1.y))` and the
//! bottom half `[ceil(p1.y), floor(p2.y)]`, so every row of the triangle is drawn once.

use crate::colour::Colour;
use crate::geometry::is_degenerate;
use crate::line::{draw_line, draw_textured_line};
use crate::point2d::CanvasPoint;
use crate::screen::PixelSurface;
use crate::texture::Texture;
use crate::triangle::{CanvasTriangle, point_on_scanline};

pub fn draw_stroked_triangle<S: PixelSurface + ?Sized>(surface: &mut S, triangle: &CanvasTriangle, colour: Colour) {
    draw_line(surface, triangle.v0(), triangle.v1(), colour);
    draw_line(surface, triangle.v1(), triangle.v2(), colour);
    draw_line(surface, triangle.v2(), triangle.v0(), colour);
}

/// Solid fill, then an optional outline over the original edges.
pub fn draw_filled_triangle<S: PixelSurface + ?Sized>(
    surface: &mut S,
    triangle: &CanvasTriangle,
    colour: Colour,
    outline: Option<Colour>,
) {
    log::trace!("filled triangle {:?} colour {:?}", triangle.vertices, colour);
    let rows = surface.height();
    for_each_row(triangle, rows, |left, right| draw_line(surface, left, right, colour));
    if let Some(outline) = outline {
        draw_stroked_triangle(surface, triangle, outline);
    }
}

/// Affine texture mapping: every vertex's texture point is carried down the edges and across each row.
pub fn draw_textured_triangle<S: PixelSurface + ?Sized>(
    surface: &mut S,
    triangle: &CanvasTriangle,
    texture: &Texture,
    outline: Option<Colour>,
) {
    log::trace!("textured triangle {:?}", triangle.vertices);
    if triangle.vertices.iter().any(|v| v.texture_point.is_none()) {
        log::debug!("textured triangle has vertices without texture points, sampling the texture origin for them");
    }
    let rows = surface.height();
    for_each_row(triangle, rows, |left, right| draw_textured_line(surface, left, right, texture));
    if let Some(outline) = outline {
        draw_stroked_triangle(surface, triangle, outline);
    }
}

/// Calls `row` with the two boundary points of every integer row inside the triangle, limited to `0..surface_rows`.
fn for_each_row(triangle: &CanvasTriangle, surface_rows: u32, mut row: impl FnMut(CanvasPoint, CanvasPoint)) {
    if is_degenerate(triangle) {
        return
    }
    let (top, bottom) = triangle.split();
    let clamp = |y: f32| (y as i64).clamp(0, surface_rows as i64);

    // Apex at top.v0, flat edge top.v1-top.v2
    for y in clamp(top.v0().y.ceil())..clamp(top.v1().y.ceil()) {
        let y = y as f32;
        row(point_on_scanline(y, top.v0(), top.v1()), point_on_scanline(y, top.v0(), top.v2()));
    }

    // Flat edge bottom.v0-bottom.v1, apex at bottom.v2
    for y in clamp(bottom.v0().y.ceil())..clamp(bottom.v2().y.floor() + 1.0) {
        let y = y as f32;
        row(point_on_scanline(y, bottom.v0(), bottom.v2()), point_on_scanline(y, bottom.v1(), bottom.v2()));
    }
}
