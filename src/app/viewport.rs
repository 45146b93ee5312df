use crate::config::{FIT_MARGIN, MAX_SCALE, MIN_SCALE, WHEEL_ZOOM_FACTOR, ZOOM_STEP};
use crate::utils::vector::Vec2;

/// Pan/zoom transform between display space and image space.
///
/// `scale` is private so that every write goes through [`ViewState::set_scale`],
/// which keeps it inside `MIN_SCALE..=MAX_SCALE`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    scale: f32,
    pub pan: Vec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pan: Vec2::ZERO,
        }
    }
}

fn clamp_scale(scale: f32) -> f32 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

impl ViewState {
    pub fn new(scale: f32, pan: Vec2) -> Self {
        Self {
            scale: clamp_scale(scale),
            pan,
        }
    }

    /// Centre an image of `image_size` inside a display area, at
    /// `FIT_MARGIN` of the best-fit scale. A non-positive display area yields
    /// the identity view.
    pub fn fit(image_size: Vec2, display_size: Vec2) -> Self {
        if display_size.x <= 0.0 || display_size.y <= 0.0 || image_size.x <= 0.0 || image_size.y <= 0.0 {
            return Self::default();
        }
        let fit = (display_size.x / image_size.x).min(display_size.y / image_size.y);
        let scale = clamp_scale(fit * FIT_MARGIN);
        let pan = Vec2::new(
            (display_size.x - image_size.x * scale) / 2.0,
            (display_size.y - image_size.y * scale) / 2.0,
        );
        Self { scale, pan }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = clamp_scale(scale);
    }

    /// Zoom level as a whole percentage, for labels.
    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    /// Display-space point to image-space point.
    pub fn to_image(&self, display: Vec2) -> Vec2 {
        (display - self.pan) / self.scale
    }

    /// Image-space point to display-space point.
    pub fn to_display(&self, image: Vec2) -> Vec2 {
        image * self.scale + self.pan
    }

    /// Continuous zoom from a wheel event. Negative `delta_y` (wheel up) zooms in.
    pub fn wheel(&mut self, delta_y: f32) {
        self.zoom_by(-delta_y * WHEEL_ZOOM_FACTOR);
    }

    pub fn zoom_by(&mut self, delta: f32) {
        self.set_scale(self.scale + delta);
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(-ZOOM_STEP);
    }

    /// Back to 100%. Pan is left where it is.
    pub fn reset_zoom(&mut self) {
        self.set_scale(1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn converts_display_to_image() {
        let view = ViewState::new(2.0, Vec2::new(10.0, 20.0));
        assert_eq!(view.to_image(Vec2::new(30.0, 60.0)), Vec2::new(10.0, 20.0));
        assert_eq!(view.to_display(Vec2::new(10.0, 20.0)), Vec2::new(30.0, 60.0));
    }

    #[test]
    fn fit_centres_at_ninety_percent() {
        let view = ViewState::fit(Vec2::new(200.0, 100.0), Vec2::new(400.0, 400.0));
        assert!((view.scale() - 1.8).abs() < 1e-6);
        assert!((view.pan.x - 20.0).abs() < 1e-4);
        assert!((view.pan.y - 110.0).abs() < 1e-4);
    }

    #[test]
    fn fit_clamps_tiny_and_huge_scales() {
        let tiny = ViewState::fit(Vec2::new(100_000.0, 100_000.0), Vec2::new(100.0, 100.0));
        assert_eq!(tiny.scale(), MIN_SCALE);
        let huge = ViewState::fit(Vec2::new(2.0, 2.0), Vec2::new(4000.0, 4000.0));
        assert_eq!(huge.scale(), MAX_SCALE);
    }

    #[test]
    fn fit_without_display_area_is_identity() {
        assert_eq!(ViewState::fit(Vec2::new(10.0, 10.0), Vec2::ZERO), ViewState::default());
    }

    #[test]
    fn wheel_saturates_at_max() {
        let mut view = ViewState::default();
        for _ in 0..10 {
            view.wheel(-1000.0);
            assert!(view.scale() <= MAX_SCALE);
        }
        assert_eq!(view.scale(), 5.0);
    }

    #[test]
    fn wheel_down_zooms_out() {
        let mut view = ViewState::default();
        view.wheel(100.0);
        assert!((view.scale() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn buttons_step_by_a_tenth() {
        let mut view = ViewState::default();
        view.zoom_in();
        assert!((view.scale() - 1.1).abs() < 1e-6);
        view.zoom_out();
        view.zoom_out();
        assert!((view.scale() - 0.9).abs() < 1e-6);
        assert_eq!(view.zoom_percent(), 90);
    }

    #[test]
    fn reset_keeps_pan() {
        let mut view = ViewState::new(3.0, Vec2::new(-40.0, 12.5));
        view.reset_zoom();
        assert_eq!(view.scale(), 1.0);
        assert_eq!(view.pan, Vec2::new(-40.0, 12.5));
    }

    proptest! {
        #[test]
        fn scale_always_within_bounds(deltas in proptest::collection::vec(-1.0e6f32..1.0e6, 1..50)) {
            let mut view = ViewState::default();
            for d in deltas {
                view.wheel(d);
                prop_assert!(view.scale() >= MIN_SCALE && view.scale() <= MAX_SCALE);
                view.zoom_by(d);
                prop_assert!(view.scale() >= MIN_SCALE && view.scale() <= MAX_SCALE);
            }
        }
    }
}
