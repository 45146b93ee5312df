pub mod app;
pub mod brush_engine;
pub mod canvas;
pub mod config;
pub mod error;
pub mod ui;
pub mod utils;

pub use app::{EditorApp, EditorSession, SessionCallbacks, ShortcutHub, Tool};
pub use canvas::Raster;
pub use error::{EditorError, Result};
