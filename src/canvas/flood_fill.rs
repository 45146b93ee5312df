use image::Rgba;

use crate::canvas::history::History;
use crate::canvas::raster::Raster;
use crate::config::{FILL_NOOP_THRESHOLD, TOLERANCE_SCALE};
use crate::utils::profiler::ScopeTimer;
use crate::utils::vector::Vec2;

/// What a bucket fill did to the raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillOutcome {
    /// The region was recolored.
    Filled { pixels: usize },
    /// The seed already has the fill color, nothing was written.
    AlreadyFilled,
    /// The seed lies outside the raster.
    OutOfBounds,
}

/// Tolerance-gated scan-line bucket fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloodFill {
    /// Written verbatim into every matching pixel.
    pub color: Rgba<u8>,
    /// 0-100 setting; a pixel matches when its RGBA distance to the seed is at most `2 * tolerance`.
    pub tolerance: u32,
}

impl FloodFill {
    pub fn new(color: Rgba<u8>, tolerance: u32) -> Self {
        Self { color, tolerance }
    }

    /// Checkpoint the raster into `history`, then fill from `start`.
    pub fn apply(&self, raster: &mut Raster, history: &mut History, start: Vec2) -> FillOutcome {
        history.push(raster.snapshot());
        let outcome = self.fill(raster, start);
        match outcome {
            FillOutcome::Filled { pixels } => log::debug!("bucket fill recolored {pixels} pixels"),
            FillOutcome::AlreadyFilled => log::debug!("bucket fill skipped, seed already has fill color"),
            FillOutcome::OutOfBounds => log::debug!("bucket fill skipped, seed {start:?} outside raster"),
        }
        outcome
    }

    /// Fill the region connected to `start` without touching history.
    pub fn fill(&self, raster: &mut Raster, start: Vec2) -> FillOutcome {
        let _timer = ScopeTimer::new("flood_fill");

        let (width, height) = raster.dimensions();
        let Some((sx, sy)) = start
            .to_pixel()
            .filter(|&(x, y)| x < width && y < height)
        else {
            return FillOutcome::OutOfBounds;
        };

        let (w, h) = (width as usize, height as usize);
        let (sx, sy) = (sx as usize, sy as usize);
        let target = pixel_at(raster.as_raw(), sy * w + sx);

        if nearly_equal(target, self.color.0) {
            return FillOutcome::AlreadyFilled;
        }

        let limit = self.tolerance as f32 * TOLERANCE_SCALE;
        let limit_sq = limit * limit;
        let matches = |data: &[u8], idx: usize| distance_sq(pixel_at(data, idx), target) as f32 <= limit_sq;

        let fill = self.color.0;
        let data = raster.as_raw_mut();
        // Marks written pixels so a fill color inside the tolerance cannot be revisited.
        let mut filled = vec![false; w * h];
        let mut stack: Vec<(usize, usize)> = Vec::with_capacity(1024);
        let mut count = 0usize;
        stack.push((sx, sy));

        while let Some((x, mut y)) = stack.pop() {
            let mut idx = y * w + x;
            if filled[idx] || !matches(data, idx) {
                continue;
            }

            // Climb to the top of this column run.
            while y > 0 && !filled[idx - w] && matches(data, idx - w) {
                y -= 1;
                idx -= w;
            }

            let mut reach_left = false;
            let mut reach_right = false;

            while y < h && !filled[idx] && matches(data, idx) {
                data[idx * 4..idx * 4 + 4].copy_from_slice(&fill);
                filled[idx] = true;
                count += 1;

                if x > 0 {
                    let left = idx - 1;
                    if !filled[left] && matches(data, left) {
                        if !reach_left {
                            stack.push((x - 1, y));
                            reach_left = true;
                        }
                    } else {
                        reach_left = false;
                    }
                }

                if x + 1 < w {
                    let right = idx + 1;
                    if !filled[right] && matches(data, right) {
                        if !reach_right {
                            stack.push((x + 1, y));
                            reach_right = true;
                        }
                    } else {
                        reach_right = false;
                    }
                }

                y += 1;
                idx += w;
            }
        }

        FillOutcome::Filled { pixels: count }
    }
}

#[inline(always)]
fn pixel_at(data: &[u8], idx: usize) -> [u8; 4] {
    let o = idx * 4;
    [data[o], data[o + 1], data[o + 2], data[o + 3]]
}

#[inline(always)]
fn distance_sq(a: [u8; 4], b: [u8; 4]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&p, &q)| {
            let d = p as i32 - q as i32;
            (d * d) as u32
        })
        .sum()
}

/// True when every channel differs by less than [`FILL_NOOP_THRESHOLD`].
fn nearly_equal(a: [u8; 4], b: [u8; 4]) -> bool {
    a.iter()
        .zip(b.iter())
        .all(|(&p, &q)| p.abs_diff(q) < FILL_NOOP_THRESHOLD)
}
