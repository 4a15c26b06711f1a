use crate::point2d::CanvasPoint;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasTriangle {
    pub vertices: [CanvasPoint; 3],
}

impl CanvasTriangle {
    pub fn new(v0: CanvasPoint, v1: CanvasPoint, v2: CanvasPoint) -> Self {
        CanvasTriangle { vertices: [v0, v1, v2] }
    }

    pub fn v0(&self) -> CanvasPoint { self.vertices[0] }
    pub fn v1(&self) -> CanvasPoint { self.vertices[1] }
    pub fn v2(&self) -> CanvasPoint { self.vertices[2] }

    /// Vertices ordered by ascending y. Equal heights keep their original order.
    pub fn sorted_by_y(&self) -> [CanvasPoint; 3] {
        let [mut a, mut b, mut c] = self.vertices;
        if b.y < a.y { std::mem::swap(&mut a, &mut b); }
        if c.y < b.y { std::mem::swap(&mut b, &mut c); }
        if b.y < a.y { std::mem::swap(&mut a, &mut b); }
        [a, b, c]
    }

    /// Cuts the triangle along the horizontal line through its middle vertex.
    ///
    /// Returns `(top, bottom)`, where `top` is `(p0, p1, mid)` and `bottom` is `(p1, mid, p2)`
    /// for the y-sorted vertices `p0, p1, p2`. `mid` lies on the long edge `p0`-`p2`, so `p1`-`mid`
    /// is the horizontal edge shared by both halves. Either half may have zero height.
    pub fn split(&self) -> (CanvasTriangle, CanvasTriangle) {
        let [p0, p1, p2] = self.sorted_by_y();
        let mid = point_on_scanline(p1.y, p0, p2);
        (CanvasTriangle::new(p0, p1, mid), CanvasTriangle::new(p1, mid, p2))
    }
}

/// The point on segment `p1`-`p2` at height `y`.
///
/// One interpolation parameter drives both x and the texture point, so texture coordinates stay
/// in step with screen position along the edge. A horizontal segment yields `p1`'s x.
pub fn point_on_scanline(y: f32, p1: CanvasPoint, p2: CanvasPoint) -> CanvasPoint {
    let dy = p2.y - p1.y;
    let proportion = if dy == 0.0 { 0.0 } else { (y - p1.y) / dy };
    let x = proportion * (p2.x - p1.x) + p1.x;
    let texture_point = match (p1.texture_point, p2.texture_point) {
        (Some(t1), Some(t2)) => Some((t2 - t1) * proportion + t1),
        _ => None,
    };
    CanvasPoint { x, y, texture_point }
}
