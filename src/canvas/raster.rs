use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::canvas::history::HistorySnapshot;
use crate::error::{EditorError, Result};
use crate::utils::color::{Color, alpha_over};
use crate::utils::profiler::ScopeTimer;

/// Fixed-size RGBA pixel buffer being edited.
///
/// Dimensions are taken from the source image and never change for the
/// lifetime of the raster. Every mutation bumps [`Raster::revision`] so hosts
/// know when to re-upload their display texture.
#[derive(Clone, Debug)]
pub struct Raster {
    pixels: RgbaImage,
    revision: u64,
}

impl Raster {
    /// Wrap an already decoded image.
    pub fn from_image(pixels: RgbaImage) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(EditorError::EmptyImage { width, height });
        }
        Ok(Self {
            pixels,
            revision: 0,
        })
    }

    /// Decode encoded source bytes (PNG, JPEG, WEBP, ...) into a raster.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(bytes).map_err(EditorError::Decode)?;
        Self::from_image(decoded.to_rgba8())
    }

    /// Solid raster, mostly useful for tests and benches.
    pub fn filled(width: u32, height: u32, color: Rgba<u8>) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width.max(1), height.max(1), color),
            revision: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    fn in_bounds(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some((x, y))
    }

    /// Pixel at `(x, y)`, or `None` outside the raster.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba<u8>> {
        self.in_bounds(x, y).map(|(x, y)| *self.pixels.get_pixel(x, y))
    }

    /// Source-over blend `src` onto one pixel. Out-of-bounds writes are dropped.
    pub fn blend_pixel(&mut self, x: i32, y: i32, src: Color) {
        if let Some((x, y)) = self.in_bounds(x, y) {
            let dst = self.pixels.get_pixel_mut(x, y);
            *dst = alpha_over(src, Color::from_rgba8(*dst)).to_rgba8();
            self.touch();
        }
    }

    /// Overwrite one pixel. Out-of-bounds writes are dropped.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if let Some((x, y)) = self.in_bounds(x, y) {
            self.pixels.put_pixel(x, y, color);
            self.touch();
        }
    }

    /// Clear one pixel to fully transparent.
    pub fn erase_pixel(&mut self, x: i32, y: i32) {
        self.put_pixel(x, y, Rgba([0, 0, 0, 0]));
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Mutable raw RGBA bytes. Counts as a mutation.
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        self.touch();
        &mut self.pixels
    }

    /// Record that pixels changed.
    pub fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Deep copy of the current pixels.
    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot::new(self.pixels.clone())
    }

    /// Overwrite every pixel with the contents of `snapshot`.
    pub fn restore(&mut self, snapshot: &HistorySnapshot) {
        let _timer = ScopeTimer::new("restore_snapshot");
        let src = snapshot.pixels();
        if src.dimensions() != self.dimensions() {
            log::warn!(
                "ignoring snapshot of size {:?} for raster of size {:?}",
                src.dimensions(),
                self.dimensions()
            );
            return;
        }
        self.as_raw_mut().copy_from_slice(src.as_raw());
    }

    /// Lossless PNG encoding of the current pixels.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let _timer = ScopeTimer::new("encode_png");
        let mut buf = Cursor::new(Vec::new());
        self.pixels
            .write_to(&mut buf, ImageFormat::Png)
            .map_err(EditorError::Encode)?;
        Ok(buf.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_access_is_ignored() {
        let mut raster = Raster::filled(4, 3, Rgba([9, 9, 9, 255]));
        assert_eq!(raster.get(-1, 0), None);
        assert_eq!(raster.get(4, 0), None);
        assert_eq!(raster.get(3, 2), Some(Rgba([9, 9, 9, 255])));

        let before = raster.revision();
        raster.erase_pixel(10, 10);
        raster.blend_pixel(-3, 1, Color::rgba(0, 0, 0, 255));
        assert_eq!(raster.revision(), before);
    }

    #[test]
    fn empty_images_are_rejected() {
        let err = Raster::from_image(RgbaImage::new(0, 5)).unwrap_err();
        assert!(matches!(err, EditorError::EmptyImage { width: 0, height: 5 }));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = Raster::decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, EditorError::Decode(_)));
    }

    #[test]
    fn png_round_trip_preserves_pixels() {
        let mut raster = Raster::filled(3, 2, Rgba([10, 20, 30, 40]));
        raster.erase_pixel(1, 1);
        let bytes = raster.encode_png().unwrap();
        let decoded = Raster::decode(&bytes).unwrap();
        assert_eq!(decoded.as_raw(), raster.as_raw());
    }

    #[test]
    fn snapshot_is_a_deep_copy() {
        let mut raster = Raster::filled(2, 2, Rgba([255, 255, 255, 255]));
        let snap = raster.snapshot();
        raster.erase_pixel(0, 0);
        assert_eq!(*snap.pixels().get_pixel(0, 0), Rgba([255, 255, 255, 255]));

        raster.restore(&snap);
        assert_eq!(raster.get(0, 0), Some(Rgba([255, 255, 255, 255])));
    }
}
