use crate::colour::Colour;
use crate::point2d::{CanvasPoint, Point2D, chebyshev_steps};
use crate::screen::{PixelSurface, plot};
use crate::texture::Texture;

/// Solid line with uniform stepping along the dominant axis.
pub fn draw_line<S: PixelSurface + ?Sized>(surface: &mut S, from: CanvasPoint, to: CanvasPoint, colour: Colour) {
    let colour = colour.packed();
    let delta = to.position() - from.position();
    let num_steps = chebyshev_steps(delta);
    if num_steps == 0.0 {
        plot(surface, from.x, from.y, colour);
        return;
    }
    let step = delta / num_steps;
    let Some((first, last)) = visible_steps(&*surface, from.position(), step, num_steps as usize) else {
        return;
    };
    for i in first..=last {
        let p = from.position() + step * i as f32;
        plot(surface, p.x, p.y, colour);
    }
}

/// First and last step index that can land on the surface, with one step of slack either side.
fn visible_steps<S: PixelSurface + ?Sized>(surface: &S, start: Point2D, step: Point2D, num_steps: usize) -> Option<(usize, usize)> {
    let (x_first, x_last) = axis_steps(start.x, step.x, num_steps, surface.width())?;
    let (y_first, y_last) = axis_steps(start.y, step.y, num_steps, surface.height())?;
    let (first, last) = (x_first.max(y_first), x_last.min(y_last));
    (first <= last).then_some((first, last))
}

fn axis_steps(start: f32, step: f32, num_steps: usize, size: u32) -> Option<(usize, usize)> {
    // pixels round, so the surface covers (-0.5, size - 0.5) on this axis
    let (lo, hi) = (-0.5, size as f64 - 0.5);
    let (start, step) = (start as f64, step as f64);
    if step == 0.0 {
        return (start >= lo - 1.0 && start <= hi + 1.0).then_some((0, num_steps));
    }
    let (a, b) = ((lo - start) / step, (hi - start) / step);
    let first = a.min(b).floor() - 1.0;
    let last = a.max(b).ceil() + 1.0;
    if last < 0.0 || first > num_steps as f64 {
        return None;
    }
    Some((first.max(0.0) as usize, (last as usize).min(num_steps)))
}

/// Samples the texture along the segment between the two texture points, one sample per texel step.
pub fn textured_line_samples(from: CanvasPoint, to: CanvasPoint, texture: &Texture) -> Vec<u32> {
    let from = clamp_to_texture(from.texture_point.unwrap_or_default(), texture);
    let to = clamp_to_texture(to.texture_point.unwrap_or_default(), texture);
    let delta = to - from;
    let num_steps = chebyshev_steps(delta);
    if num_steps == 0.0 {
        return vec![texture.sample(from.x, from.y)];
    }
    let step = delta / num_steps;
    (0..=num_steps as usize)
        .map(|i| {
            let t = from + step * i as f32;
            texture.sample(t.x, t.y)
        })
        .collect()
}

/// Pulls a texture point onto the texel grid. NaN lands on zero.
fn clamp_to_texture(point: Point2D, texture: &Texture) -> Point2D {
    let max_x = texture.width.saturating_sub(1) as f32;
    let max_y = texture.height.saturating_sub(1) as f32;
    Point2D::new(point.x.max(0.0).min(max_x), point.y.max(0.0).min(max_y))
}

/// Screen-space line coloured from the texture.
///
/// Screen and texture space are stepped independently; each screen step picks the texture
/// sample at the same fraction of the way along, rounded down.
pub fn draw_textured_line<S: PixelSurface + ?Sized>(surface: &mut S, from: CanvasPoint, to: CanvasPoint, texture: &Texture) {
    let delta = to.position() - from.position();
    let num_steps = chebyshev_steps(delta);
    if num_steps == 0.0 {
        let texel = from.texture_point.unwrap_or_default();
        plot(surface, from.x, from.y, texture.sample(texel.x, texel.y));
        return;
    }
    let step = delta / num_steps;
    let samples = textured_line_samples(from, to, texture);
    let last = samples.len() - 1;
    let scale = samples.len() as f32 / num_steps;
    let Some((first, last_step)) = visible_steps(&*surface, from.position(), step, num_steps as usize) else {
        return;
    };
    for i in first..=last_step {
        let p = from.position() + step * i as f32;
        let index = ((scale * i as f32) as usize).min(last);
        plot(surface, p.x, p.y, samples[index]);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Surface that remembers every write in order.
    pub(crate) struct RecordingSurface {
        pub width: u32,
        pub height: u32,
        pub writes: Vec<(u32, u32, u32)>,
    }

    impl RecordingSurface {
        pub fn new(width: u32, height: u32) -> Self {
            RecordingSurface { width, height, writes: Vec::new() }
        }
    }

    impl PixelSurface for RecordingSurface {
        fn width(&self) -> u32 {
            self.width
        }
        fn height(&self) -> u32 {
            self.height
        }
        fn set_pixel_colour(&mut self, x: u32, y: u32, colour: u32) {
            self.writes.push((x, y, colour));
        }
    }

    #[test]
    fn coincident_endpoints_write_one_pixel() {
        let mut surface = RecordingSurface::new(8, 8);
        draw_line(&mut surface, CanvasPoint::new(0.0, 0.0), CanvasPoint::new(0.0, 0.0), Colour::RED);
        assert_eq!(surface.writes, vec![(0, 0, Colour::RED.packed())]);
    }

    #[test]
    fn write_count_and_bounds() {
        let cases = [
            ((1.0, 1.0), (30.0, 12.0)),
            ((30.0, 40.0), (2.0, 3.0)),
            ((5.3, 7.8), (5.3, 60.1)),
            ((0.0, 10.0), (63.0, 10.0)),
            ((12.4, 2.2), (19.9, 50.6)),
        ];
        for ((x0, y0), (x1, y1)) in cases {
            let mut surface = RecordingSurface::new(64, 64);
            draw_line(&mut surface, CanvasPoint::new(x0, y0), CanvasPoint::new(x1, y1), Colour::GREEN);
            let steps = (x1 - x0).abs().max((y1 - y0).abs());
            assert_eq!(surface.writes.len(), steps.floor() as usize + 1);
            let (min_x, max_x) = (x0.round().min(x1.round()) as u32, x0.round().max(x1.round()) as u32);
            let (min_y, max_y) = (y0.round().min(y1.round()) as u32, y0.round().max(y1.round()) as u32);
            for &(x, y, _) in &surface.writes {
                assert!((min_x..=max_x).contains(&x) && (min_y..=max_y).contains(&y), "({x}, {y}) escaped");
            }
        }
    }

    #[test]
    fn diagonal_line_hits_every_pixel() {
        let mut surface = RecordingSurface::new(8, 8);
        draw_line(&mut surface, CanvasPoint::new(0.0, 0.0), CanvasPoint::new(3.0, 3.0), Colour::WHITE);
        let pixels: Vec<(u32, u32)> = surface.writes.iter().map(|&(x, y, _)| (x, y)).collect();
        assert_eq!(pixels, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn off_surface_parts_are_skipped() {
        let mut surface = RecordingSurface::new(4, 4);
        draw_line(&mut surface, CanvasPoint::new(-3.0, 1.0), CanvasPoint::new(6.0, 1.0), Colour::WHITE);
        let xs: Vec<u32> = surface.writes.iter().map(|&(x, _, _)| x).collect();
        assert_eq!(xs, vec![0, 1, 2, 3]);
    }

    #[test]
    fn far_off_surface_run_is_clipped() {
        let mut surface = RecordingSurface::new(4, 4);
        let (from, to) = (CanvasPoint::new(-100_000.0, 2.0), CanvasPoint::new(3.0, 2.0));
        draw_line(&mut surface, from, to, Colour::WHITE);
        let xs: Vec<u32> = surface.writes.iter().map(|&(x, _, _)| x).collect();
        assert_eq!(xs, vec![0, 1, 2, 3]);

        let num_steps = 100_003;
        let (first, last) = visible_steps(&surface, from.position(), Point2D::new(1.0, 0.0), num_steps).unwrap();
        assert_eq!(last, num_steps);
        assert!(last - first < 10, "{first}..={last}");
    }

    #[test]
    fn line_entirely_off_surface_has_no_steps() {
        let surface = RecordingSurface::new(4, 4);
        assert_eq!(visible_steps(&surface, Point2D::new(0.0, 50.0), Point2D::new(1.0, 0.0), 1000), None);
        assert_eq!(visible_steps(&surface, Point2D::new(10.0, 0.0), Point2D::new(1.0, 0.0), 1000), None);
    }

    #[test]
    fn texture_points_outside_the_image_are_clamped() {
        let texture = Texture::from_fn(4, 4, |x, y| (y * 4 + x) as u32);
        let samples = textured_line_samples(
            CanvasPoint::textured(0.0, 0.0, 0.0, 0.0),
            CanvasPoint::textured(1.0, 0.0, 1e8, 0.0),
            &texture,
        );
        assert_eq!(samples, vec![0, 1, 2, 3]);

        let samples = textured_line_samples(
            CanvasPoint::textured(0.0, 0.0, -50.0, f32::NAN),
            CanvasPoint::textured(1.0, 0.0, -1e9, 1e9),
            &texture,
        );
        assert_eq!(samples, vec![0, 4, 8, 12]);

        let mut surface = RecordingSurface::new(4, 4);
        draw_textured_line(
            &mut surface,
            CanvasPoint::textured(0.0, 1.0, 0.0, 0.0),
            CanvasPoint::textured(1.0, 1.0, 1e8, 0.0),
            &texture,
        );
        assert_eq!(surface.writes, vec![(0, 1, 0), (1, 1, 3)]);
    }

    #[test]
    fn textured_samples_follow_texture_steps() {
        let texture = Texture::from_fn(8, 8, |x, y| (y * 8 + x) as u32);
        let samples = textured_line_samples(
            CanvasPoint::textured(0.0, 0.0, 1.0, 2.0),
            CanvasPoint::textured(100.0, 0.0, 5.0, 2.0),
            &texture,
        );
        assert_eq!(samples, vec![17, 18, 19, 20, 21]);
    }

    #[test]
    fn textured_line_stretches_samples_over_screen_steps() {
        // two texels stretched over a five-pixel run
        let texture = Texture::from_fn(2, 1, |x, _| x as u32);
        let mut surface = RecordingSurface::new(8, 8);
        draw_textured_line(
            &mut surface,
            CanvasPoint::textured(0.0, 0.0, 0.0, 0.0),
            CanvasPoint::textured(4.0, 0.0, 1.0, 0.0),
            &texture,
        );
        let colours: Vec<u32> = surface.writes.iter().map(|&(_, _, c)| c).collect();
        // index = floor(2 / 4 * i)
        assert_eq!(colours, vec![0, 0, 1, 1, 1]);
    }

    #[test]
    fn textured_line_with_fixed_texel_is_uniform() {
        let texture = Texture::from_fn(4, 4, |x, y| (y * 4 + x) as u32);
        let mut surface = RecordingSurface::new(8, 8);
        draw_textured_line(
            &mut surface,
            CanvasPoint::textured(0.0, 3.0, 2.0, 1.0),
            CanvasPoint::textured(6.0, 3.0, 2.0, 1.0),
            &texture,
        );
        assert_eq!(surface.writes.len(), 7);
        assert!(surface.writes.iter().all(|&(_, y, c)| y == 3 && c == 6));
    }

    #[test]
    fn textured_single_pixel_uses_from_texel() {
        let texture = Texture::from_fn(4, 4, |x, y| (y * 4 + x) as u32);
        let mut surface = RecordingSurface::new(8, 8);
        let p = CanvasPoint::textured(2.0, 2.0, 3.0, 1.0);
        draw_textured_line(&mut surface, p, p, &texture);
        assert_eq!(surface.writes, vec![(2, 2, 7)]);
    }
}
