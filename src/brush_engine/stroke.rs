use crate::brush_engine::brush::Brush;
use crate::canvas::raster::Raster;
use crate::utils::{
    profiler::ScopeTimer,
    vector::{Vec2, distance},
};

/// Tracks one pointer-down-to-up gesture: the image-space path and its last point.
pub struct StrokeState {
    pub last_pos: Option<Vec2>,
    path: Vec<Vec2>,
    stroke_timer: Option<ScopeTimer>,
}

impl StrokeState {
    /// Create an empty stroke state and start the profiling timer.
    pub fn new() -> Self {
        Self {
            last_pos: None,
            path: Vec::new(),
            stroke_timer: Some(ScopeTimer::new("stroke")),
        }
    }

    /// Add a new sample to the stroke.
    ///
    /// The first sample is stamped directly; later samples stamp the segment
    /// from the previous sample so fast pointer motion leaves no gaps.
    pub fn add_point(&mut self, raster: &mut Raster, brush: &Brush, pos: Vec2) {
        match self.last_pos {
            Some(prev) => stroke_segment(raster, brush, prev, pos),
            None => brush.dab(raster, pos),
        }
        self.path.push(pos);
        self.last_pos = Some(pos);
    }

    /// Image-space samples collected so far.
    pub fn path(&self) -> &[Vec2] {
        &self.path
    }

    /// Reset the stroke state and emit the profiling metric.
    pub fn end(&mut self) {
        self.last_pos = None;
        self.path.clear();
        // Drop the timer so stroke-level duration is reported when the stroke ends.
        self.stroke_timer.take();
    }
}

impl Default for StrokeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Stamp every unit step from `from` towards `to`.
///
/// Stamps land at `from + dir * i` for integer `i` in `0..=d`. When `d` is not
/// a whole number the end point gets its own stamp so the segment is covered
/// right up to `to`.
pub fn stroke_segment(raster: &mut Raster, brush: &Brush, from: Vec2, to: Vec2) {
    let d = distance(from, to);
    let angle = (to - from).angle();
    let (sin, cos) = angle.sin_cos();

    let steps = d.floor() as u32;
    for i in 0..=steps {
        let t = i as f32;
        brush.dab(raster, Vec2::new(from.x + cos * t, from.y + sin * t));
    }

    if d - steps as f32 > f32::EPSILON {
        brush.dab(raster, to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush_engine::brush::BlendMode;
    use crate::utils::color::Rgb;
    use image::Rgba;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    #[test]
    fn horizontal_stroke_has_no_gaps() {
        let mut raster = Raster::filled(120, 40, WHITE);
        let brush = Brush::new(20.0, Rgb::BLACK, 1.0, BlendMode::Normal);
        let mut stroke = StrokeState::new();
        stroke.add_point(&mut raster, &brush, Vec2::new(0.0, 0.0));
        stroke.add_point(&mut raster, &brush, Vec2::new(100.0, 0.0));

        for x in 0..=100 {
            for y in 0..=10 {
                assert_eq!(raster.get(x, y), Some(BLACK), "gap at ({x}, {y})");
            }
        }
        assert_eq!(raster.get(50, 11), Some(WHITE));
        assert_eq!(stroke.path().len(), 2);
    }

    #[test]
    fn diagonal_stroke_covers_the_path() {
        let mut raster = Raster::filled(64, 64, WHITE);
        let brush = Brush::new(4.0, Rgb::BLACK, 1.0, BlendMode::Normal);
        let from = Vec2::new(3.3, 5.1);
        let to = Vec2::new(57.8, 41.6);
        stroke_segment(&mut raster, &brush, from, to);

        // Every pixel within 1.5 of the segment must be covered: stamps are at
        // most 1 apart, so coverage holds for r - 0.5.
        let dir = (to - from) / distance(from, to);
        for y in 0..64 {
            for x in 0..64 {
                let p = Vec2::new(x as f32, y as f32);
                let rel = p - from;
                let t = (rel.x * dir.x + rel.y * dir.y).clamp(0.0, distance(from, to));
                let closest = from + dir * t;
                if distance(p, closest) <= 1.5 {
                    assert_eq!(raster.get(x, y), Some(BLACK), "gap at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn zero_length_segment_stamps_once() {
        let mut raster = Raster::filled(10, 10, WHITE);
        let brush = Brush::new(2.0, Rgb::BLACK, 1.0, BlendMode::Normal);
        stroke_segment(&mut raster, &brush, Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0));
        assert_eq!(raster.get(5, 5), Some(BLACK));
        assert_eq!(raster.get(8, 8), Some(WHITE));
    }

    #[test]
    fn end_clears_the_path() {
        let mut raster = Raster::filled(10, 10, WHITE);
        let brush = Brush::new(2.0, Rgb::BLACK, 1.0, BlendMode::Eraser);
        let mut stroke = StrokeState::new();
        stroke.add_point(&mut raster, &brush, Vec2::new(1.0, 1.0));
        stroke.add_point(&mut raster, &brush, Vec2::new(6.0, 1.0));
        stroke.end();
        assert!(stroke.last_pos.is_none());
        assert!(stroke.path().is_empty());
        assert_eq!(raster.get(4, 1), Some(Rgba([0, 0, 0, 0])));
    }
}
