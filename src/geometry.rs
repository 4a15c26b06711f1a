use crate::point2d::{Point2D, perp, dot2};
use crate::point3d::Point3D;
use crate::triangle::CanvasTriangle;

/// Area of `t1, t2, p`, signed by which side of the `t1->t2` edge `p` falls on.
pub fn signed_triangle_area(t1: Point2D, t2: Point2D, p: Point2D) -> f32 {
    let ap = p - t1;
    let t1t2perp: Point2D = perp(t2 - t1);
    dot2(ap, t1t2perp) / 2.0
}

pub fn triangle_area(triangle: &CanvasTriangle) -> f32 {
    let [a, b, c] = triangle.vertices.map(|v| v.position());
    signed_triangle_area(a, b, c).abs()
}

/// True when the triangle's area is within float rounding of zero for its size and position.
pub fn is_degenerate(triangle: &CanvasTriangle) -> bool {
    let [a, b, c] = triangle.vertices.map(|v| v.position());
    let longest = [b - a, c - b, a - c]
        .iter()
        .map(|e| dot2(*e, *e).sqrt())
        .fold(0.0f32, f32::max);
    let extent = [a, b, c]
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(longest, f32::max);
    triangle_area(triangle) <= 4.0 * f32::EPSILON * longest * extent
}

/// Weights of `p` relative to `a`, `b` and `c`, summing to one.
///
/// All three are non-negative exactly when `p` is inside the triangle. `None` for a zero-area triangle.
pub fn barycentric(a: Point2D, b: Point2D, c: Point2D, p: Point2D) -> Option<Point3D> {
    let area = signed_triangle_area(a, b, c);
    if area == 0.0 {
        return None
    }
    let inv_area = 1.0 / area;
    Some(Point3D {
        x: signed_triangle_area(b, c, p) * inv_area,
        y: signed_triangle_area(c, a, p) * inv_area,
        z: signed_triangle_area(a, b, p) * inv_area,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point2d::CanvasPoint;

    #[test]
    fn area_of_right_triangle() {
        let t = CanvasTriangle::new(CanvasPoint::new(0.0, 0.0), CanvasPoint::new(4.0, 0.0), CanvasPoint::new(0.0, 4.0));
        assert_eq!(triangle_area(&t), 8.0);
    }

    #[test]
    fn collinear_triangle_has_no_area() {
        let t = CanvasTriangle::new(CanvasPoint::new(0.0, 0.0), CanvasPoint::new(2.0, 2.0), CanvasPoint::new(5.0, 5.0));
        assert_eq!(triangle_area(&t), 0.0);
        let [a, b, c] = t.vertices.map(|v| v.position());
        assert_eq!(barycentric(a, b, c, Point2D::new(1.0, 1.0)), None);
    }

    #[test]
    fn off_lattice_collinear_points_are_degenerate() {
        let on_line = |x: f32| CanvasPoint::new(x, 0.37 * x + 1.1);
        let t = CanvasTriangle::new(on_line(0.0), on_line(0.13), on_line(50.0));
        assert!(is_degenerate(&t));

        let thin = CanvasTriangle::new(CanvasPoint::new(0.0, 0.0), CanvasPoint::new(50.0, 0.0), CanvasPoint::new(25.0, 0.5));
        assert!(!is_degenerate(&thin));
        let point = CanvasTriangle::new(CanvasPoint::new(3.0, 3.0), CanvasPoint::new(3.0, 3.0), CanvasPoint::new(3.0, 3.0));
        assert!(is_degenerate(&point));
    }

    #[test]
    fn barycentric_weights_at_vertices_and_centroid() {
        let (a, b, c) = (Point2D::new(0.0, 0.0), Point2D::new(6.0, 0.0), Point2D::new(0.0, 6.0));
        assert_eq!(barycentric(a, b, c, a), Some(Point3D::new(1.0, 0.0, 0.0)));
        assert_eq!(barycentric(a, b, c, c), Some(Point3D::new(0.0, 0.0, 1.0)));
        let w = barycentric(a, b, c, Point2D::new(2.0, 2.0)).unwrap();
        for weight in [w.x, w.y, w.z] {
            assert!((weight - 1.0 / 3.0).abs() < 1e-6);
        }
        let outside = barycentric(a, b, c, Point2D::new(7.0, 7.0)).unwrap();
        assert!(outside.min_element() < 0.0);
    }
}
