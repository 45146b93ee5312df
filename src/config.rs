//! Editor-wide constants and parameter ranges.

use std::ops::RangeInclusive;

use crate::utils::color::Rgb;

/// Maximum number of raster snapshots kept for undo.
pub const HISTORY_CAPACITY: usize = 20;

pub const MIN_SCALE: f32 = 0.1;
pub const MAX_SCALE: f32 = 5.0;
/// Scale change per unit of wheel delta.
pub const WHEEL_ZOOM_FACTOR: f32 = 0.001;
/// Scale change for the discrete zoom buttons.
pub const ZOOM_STEP: f32 = 0.1;
/// Fraction of the best-fit scale used when a session opens.
pub const FIT_MARGIN: f32 = 0.9;

/// Per-channel distance under which a fill is considered a no-op.
pub const FILL_NOOP_THRESHOLD: u8 = 5;
/// Multiplier from the 0-100 tolerance setting to a 4-channel Euclidean distance.
pub const TOLERANCE_SCALE: f32 = 2.0;

pub const DIAMETER_RANGE: RangeInclusive<u32> = 1..=100;
pub const OPACITY_RANGE: RangeInclusive<f32> = 0.1..=1.0;
pub const TOLERANCE_RANGE: RangeInclusive<u32> = 0..=100;

pub const DEFAULT_COLOR: Rgb = Rgb::WHITE;
pub const DEFAULT_DIAMETER: u32 = 10;
pub const DEFAULT_OPACITY: f32 = 1.0;
pub const DEFAULT_TOLERANCE: u32 = 30;
