use crate::canvas::raster::Raster;
use crate::utils::{
    color::{Color, Rgb},
    vector::Vec2,
};

/// Blending strategy for how a stamp affects the destination.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlendMode {
    /// Source-over with the brush color at the brush opacity.
    Normal,
    /// Full-strength alpha removal; opacity is ignored.
    Eraser,
}

/// Round, hard-edged brush used by both the paint and eraser tools.
#[derive(Clone, Debug, PartialEq)]
pub struct Brush {
    pub diameter: f32,
    pub color: Rgb,
    pub opacity: f32, // 0..1
    pub blend_mode: BlendMode,
}

impl Brush {
    pub fn new(diameter: f32, color: Rgb, opacity: f32, blend_mode: BlendMode) -> Self {
        Self {
            diameter,
            color,
            opacity,
            blend_mode,
        }
    }

    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }

    /// Stamp a filled circle centred at `center`.
    ///
    /// A pixel is covered when its integer coordinate lies within the radius
    /// of the centre. The bounding box is clipped to the raster.
    pub fn dab(&self, raster: &mut Raster, center: Vec2) {
        let r = self.radius();
        let r_sq = r * r;

        let canvas_w = raster.width() as i32;
        let canvas_h = raster.height() as i32;

        let min_x = ((center.x - r).floor() as i32).max(0);
        let max_x = ((center.x + r).ceil() as i32).min(canvas_w - 1);
        let min_y = ((center.y - r).floor() as i32).max(0);
        let max_y = ((center.y + r).ceil() as i32).min(canvas_h - 1);

        if min_x > max_x || min_y > max_y {
            return;
        }

        let src_color = Color::from_rgb(self.color, self.opacity);

        for gy in min_y..=max_y {
            let dy = gy as f32 - center.y;
            for gx in min_x..=max_x {
                let dx = gx as f32 - center.x;
                if dx * dx + dy * dy > r_sq {
                    continue;
                }
                match self.blend_mode {
                    BlendMode::Normal => raster.blend_pixel(gx, gy, src_color),
                    BlendMode::Eraser => raster.erase_pixel(gx, gy),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn dab_covers_a_disc() {
        let mut raster = Raster::filled(21, 21, WHITE);
        let brush = Brush::new(10.0, Rgb::BLACK, 1.0, BlendMode::Normal);
        brush.dab(&mut raster, Vec2::new(10.0, 10.0));

        assert_eq!(raster.get(10, 10), Some(Rgba([0, 0, 0, 255])));
        assert_eq!(raster.get(15, 10), Some(Rgba([0, 0, 0, 255])));
        assert_eq!(raster.get(10, 5), Some(Rgba([0, 0, 0, 255])));
        assert_eq!(raster.get(16, 10), Some(WHITE));
        assert_eq!(raster.get(14, 14), Some(WHITE));
    }

    #[test]
    fn opacity_blends_with_destination() {
        let mut raster = Raster::filled(5, 5, WHITE);
        let brush = Brush::new(1.0, Rgb::BLACK, 0.5, BlendMode::Normal);
        brush.dab(&mut raster, Vec2::new(2.0, 2.0));
        assert_eq!(raster.get(2, 2), Some(Rgba([128, 128, 128, 255])));
    }

    #[test]
    fn eraser_ignores_opacity() {
        let mut raster = Raster::filled(5, 5, WHITE);
        let brush = Brush::new(2.0, Rgb::BLACK, 0.1, BlendMode::Eraser);
        brush.dab(&mut raster, Vec2::new(2.0, 2.0));
        assert_eq!(raster.get(2, 2), Some(Rgba([0, 0, 0, 0])));
        assert_eq!(raster.get(3, 2), Some(Rgba([0, 0, 0, 0])));
        assert_eq!(raster.get(0, 0), Some(WHITE));
    }

    #[test]
    fn dab_partially_outside_is_clipped() {
        let mut raster = Raster::filled(4, 4, WHITE);
        let brush = Brush::new(6.0, Rgb::BLACK, 1.0, BlendMode::Normal);
        brush.dab(&mut raster, Vec2::new(-1.0, -1.0));
        assert_eq!(raster.get(0, 0), Some(Rgba([0, 0, 0, 255])));
        assert_eq!(raster.get(3, 3), Some(WHITE));

        brush.dab(&mut raster, Vec2::new(-50.0, 80.0));
    }
}
