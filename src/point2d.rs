use std::ops::{Add, Sub, Mul, Div};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub fn new(x: f32, y: f32) -> Self {
        Point2D { x, y }
    }
}

impl Add for Point2D {
    type Output = Point2D;
    fn add(self, other: Point2D) -> Point2D {
        Point2D { x: self.x + other.x, y: self.y + other.y }
    }
}

impl Sub for Point2D {
    type Output = Point2D;
    fn sub(self, other: Point2D) -> Point2D {
        Point2D { x: self.x - other.x, y: self.y - other.y }
    }
}

impl Mul<f32> for Point2D {
    type Output = Point2D;
    fn mul(self, scalar: f32) -> Point2D {
        Point2D { x: self.x * scalar, y: self.y * scalar }
    }
}

impl Div<f32> for Point2D {
    type Output = Point2D;
    fn div(self, scalar: f32) -> Point2D {
        Point2D { x: self.x / scalar, y: self.y / scalar }
    }
}

#[inline(always)]
pub fn dot2(a: Point2D, b: Point2D) -> f32 {
    a.x * b.x + a.y * b.y
}

#[inline(always)]
pub fn perp(vec: Point2D) -> Point2D {
    Point2D { x: vec.y, y: -vec.x }
}

/// Number of unit steps needed to walk `delta` without either axis moving more than one pixel.
#[inline(always)]
pub fn chebyshev_steps(delta: Point2D) -> f32 {
    delta.x.abs().max(delta.y.abs())
}

/// A vertex on the canvas, optionally carrying a position in texture-pixel space.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
    pub texture_point: Option<Point2D>,
}

impl CanvasPoint {
    pub fn new(x: f32, y: f32) -> Self {
        CanvasPoint { x, y, texture_point: None }
    }

    pub fn textured(x: f32, y: f32, u: f32, v: f32) -> Self {
        CanvasPoint { x, y, texture_point: Some(Point2D { x: u, y: v }) }
    }

    pub fn position(&self) -> Point2D {
        Point2D { x: self.x, y: self.y }
    }
}
