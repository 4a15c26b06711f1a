use crate::point3d::Point3D;

/// `count` evenly spaced values from `from` to `to`, both ends included.
///
/// A single value is just `from`; zero values is an empty ramp.
pub fn interpolate_single_floats(from: f32, to: f32, count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![from],
        _ => {
            let spacing = (to - from) / (count - 1) as f32;
            (0..count).map(|i| from + spacing * i as f32).collect()
        }
    }
}

/// Component-wise version of [`interpolate_single_floats`].
pub fn interpolate_three_element_values(from: Point3D, to: Point3D, count: usize) -> Vec<Point3D> {
    match count {
        0 => Vec::new(),
        1 => vec![from],
        _ => {
            let spacing = (to - from) / (count - 1) as f32;
            (0..count).map(|i| from + spacing * i as f32).collect()
        }
    }
}
