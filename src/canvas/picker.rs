use crate::canvas::raster::Raster;
use crate::utils::{color::Rgb, vector::Vec2};

/// Read the RGB color under an image-space point, ignoring alpha.
///
/// Returns `None` when the point falls outside the raster.
pub fn sample(raster: &Raster, pos: Vec2) -> Option<Rgb> {
    let (x, y) = pos.to_pixel()?;
    let x = i32::try_from(x).ok()?;
    let y = i32::try_from(y).ok()?;
    let [r, g, b, _] = raster.get(x, y)?.0;
    Some(Rgb::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn samples_rgb_and_drops_alpha() {
        let mut raster = Raster::filled(4, 4, Rgba([1, 2, 3, 255]));
        raster.put_pixel(2, 1, Rgba([200, 100, 50, 7]));
        assert_eq!(sample(&raster, Vec2::new(2.9, 1.2)), Some(Rgb::new(200, 100, 50)));
        assert_eq!(sample(&raster, Vec2::new(0.0, 0.0)), Some(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn outside_points_sample_nothing() {
        let raster = Raster::filled(4, 4, Rgba([1, 2, 3, 255]));
        assert_eq!(sample(&raster, Vec2::new(-0.2, 1.0)), None);
        assert_eq!(sample(&raster, Vec2::new(4.0, 1.0)), None);
        assert_eq!(sample(&raster, Vec2::new(1.0, 4.5)), None);
    }
}
