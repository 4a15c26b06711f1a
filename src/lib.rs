//! Scanline software rasterizer: lines, stroked and filled triangles, and affine texture mapping
//! into any [`PixelSurface`](screen::PixelSurface).

pub mod colour;
pub mod geometry;
pub mod interpolate;
pub mod line;
pub mod point2d;
pub mod point3d;
pub mod random;
pub mod raster;
pub mod scenes;
pub mod screen;
pub mod texture;
pub mod triangle;

pub use colour::Colour;
pub use point2d::{CanvasPoint, Point2D};
pub use raster::{draw_filled_triangle, draw_stroked_triangle, draw_textured_triangle};
pub use screen::{PixelSurface, ScreenSpace};
pub use texture::{Texture, TextureMap, load_texture};
pub use triangle::CanvasTriangle;
