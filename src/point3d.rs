use std::ops::{Add, Sub, Mul, Div};

use crate::colour::Colour;

/// Three-element vector, used for colour ramps and barycentric weights.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3D {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Point3D { x, y, z }
    }

    /// Reads the components as red, green and blue in `0..=255`, rounded to the nearest level.
    pub fn to_colour(self) -> Colour {
        Colour::new(
            self.x.round().clamp(0.0, 255.0) as u8,
            self.y.round().clamp(0.0, 255.0) as u8,
            self.z.round().clamp(0.0, 255.0) as u8,
        )
    }

    pub fn min_element(self) -> f32 {
        self.x.min(self.y).min(self.z)
    }
}

impl From<Colour> for Point3D {
    fn from(colour: Colour) -> Point3D {
        Point3D { x: colour.red as f32, y: colour.green as f32, z: colour.blue as f32 }
    }
}

impl Add for Point3D {
    type Output = Point3D;
    fn add(self, other: Point3D) -> Point3D {
        Point3D { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z }
    }
}

impl Sub for Point3D {
    type Output = Point3D;
    fn sub(self, other: Point3D) -> Point3D {
        Point3D { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z }
    }
}

impl Mul<f32> for Point3D {
    type Output = Point3D;
    fn mul(self, scalar: f32) -> Point3D {
        Point3D { x: self.x * scalar, y: self.y * scalar, z: self.z * scalar }
    }
}

impl Div<f32> for Point3D {
    type Output = Point3D;
    fn div(self, scalar: f32) -> Point3D {
        Point3D { x: self.x / scalar, y: self.y / scalar, z: self.z / scalar }
    }
}
