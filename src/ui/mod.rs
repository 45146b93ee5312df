//! egui panels around the editing canvas.
pub mod toolbar;
