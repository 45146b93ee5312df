pub mod flood_fill;
pub mod history;
pub mod picker;
pub mod raster;

pub use flood_fill::{FillOutcome, FloodFill};
pub use history::{History, HistorySnapshot};
pub use raster::Raster;
