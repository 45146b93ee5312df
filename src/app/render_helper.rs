use crate::app::editor_app::EditorApp;
use crate::app::tools::CursorHint;
use crate::utils::profiler::ScopeTimer;
use crate::utils::vector::Vec2;
use eframe::egui::{self, Color32, TextureOptions};

/// Re-upload the raster texture when its pixels changed since the last upload.
pub fn update_texture(app: &mut EditorApp, ctx: &egui::Context) {
    let raster = app.session.raster();
    let revision = raster.revision();
    if app.texture.is_some() && app.texture_revision == Some(revision) {
        return;
    }

    let _timer = ScopeTimer::new("texture_set");
    let (w, h) = raster.dimensions();
    let image = egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], raster.as_raw());
    match app.texture.as_mut() {
        Some(texture) => texture.set(image, TextureOptions::NEAREST),
        None => {
            app.texture = Some(ctx.load_texture("edited_raster", image, TextureOptions::NEAREST));
        }
    }
    app.texture_revision = Some(revision);
}

/// Draw the raster at the current pan/zoom inside `rect`.
pub fn paint_canvas(app: &EditorApp, ui: &egui::Ui, rect: egui::Rect) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, Color32::from_gray(12));

    let Some(texture) = &app.texture else {
        return;
    };
    let view = app.session.view();
    let (w, h) = app.session.raster().dimensions();
    let min = view.to_display(Vec2::ZERO);
    let max = view.to_display(Vec2::new(w as f32, h as f32));
    let image_rect = egui::Rect::from_min_max(
        rect.min + egui::vec2(min.x, min.y),
        rect.min + egui::vec2(max.x, max.y),
    );
    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    painter.image(texture.id(), image_rect, uv, Color32::WHITE);
}

pub fn cursor_icon(hint: CursorHint) -> egui::CursorIcon {
    match hint {
        CursorHint::Crosshair => egui::CursorIcon::Crosshair,
        CursorHint::Grab => egui::CursorIcon::Grab,
        CursorHint::Grabbing => egui::CursorIcon::Grabbing,
        CursorHint::Alias => egui::CursorIcon::Alias,
    }
}
