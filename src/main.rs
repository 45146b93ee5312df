use std::path::PathBuf;

use touchup::app::parse_launch_args;
use touchup::{EditorApp, Raster};

fn pick_input() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open image to touch up")
        .add_filter("Images", &["png", "jpg", "jpeg", "webp", "bmp"])
        .pick_file()
}

/// Launch the native editor window.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = parse_launch_args(std::env::args().skip(1));
    let Some(input) = options.input.clone().or_else(pick_input) else {
        log::info!("no image selected");
        return Ok(());
    };

    let bytes = match std::fs::read(&input) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::error!("failed to read {}: {err}", input.display());
            return Ok(());
        }
    };
    let raster = match Raster::decode(&bytes) {
        Ok(raster) => raster,
        Err(err) => {
            log::error!("failed to open {}: {err}", input.display());
            return Ok(());
        }
    };
    let output = options.output_for(&input);

    let native = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "touchup",
        native,
        Box::new(|cc| Ok(Box::new(EditorApp::new(cc, raster, output)))),
    )
}
