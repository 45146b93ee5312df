use crate::app::editor_app::EditorApp;
use crate::app::tools::Tool;
use crate::config::{DIAMETER_RANGE, OPACITY_RANGE, TOLERANCE_RANGE};
use crate::utils::color::Rgb;
use eframe::egui;

/// Left panel with tool selection, tool parameters, zoom and save/cancel.
pub fn tool_panel(app: &mut EditorApp, ctx: &egui::Context) {
    egui::SidePanel::left("tool_panel")
        .resizable(false)
        .min_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Hand Edit");
            ui.label("Touch up inconsistencies");
            ui.separator();

            tool_buttons(app, ui);
            ui.separator();
            tool_settings(app, ui);
            ui.separator();
            zoom_controls(app, ui);
            ui.separator();

            let can_undo = app.session.can_undo();
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.session.undo();
            }
            ui.label(format!("History: {}", app.session.history_len()));

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    app.save();
                }
                if ui.button("Cancel").clicked() {
                    app.cancel();
                }
            });
            ui.small(format!("Saves to {}", app.output.display()));
            if let Some(status) = &app.status {
                ui.colored_label(egui::Color32::LIGHT_RED, status);
            }
        });
}

fn tool_buttons(app: &mut EditorApp, ui: &mut egui::Ui) {
    let active = app.session.tools().tool();
    for tool in Tool::ALL {
        if ui.selectable_label(active == tool, tool.label()).clicked() {
            app.session.select_tool(tool);
        }
    }
}

fn tool_settings(app: &mut EditorApp, ui: &mut egui::Ui) {
    let tools = app.session.tools_mut();

    ui.horizontal(|ui| {
        let mut rgb = tools.color().to_array();
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            tools.set_color(Rgb::from(rgb));
        }
        let response = ui.add(egui::TextEdit::singleline(&mut app.hex_input).desired_width(72.0));
        if response.lost_focus() {
            tools.set_color(Rgb::from_hex(app.hex_input.trim()));
        }
        if !response.has_focus() {
            app.hex_input = tools.color().to_hex();
        }
    });

    let mut diameter = tools.diameter();
    if ui
        .add(egui::Slider::new(&mut diameter, DIAMETER_RANGE).text("Size"))
        .changed()
    {
        tools.set_diameter(diameter);
    }

    let mut opacity = tools.opacity();
    if ui
        .add(egui::Slider::new(&mut opacity, OPACITY_RANGE).text("Opacity"))
        .changed()
    {
        tools.set_opacity(opacity);
    }

    let mut tolerance = tools.tolerance();
    if ui
        .add(egui::Slider::new(&mut tolerance, TOLERANCE_RANGE).text("Tolerance"))
        .changed()
    {
        tools.set_tolerance(tolerance);
    }
}

fn zoom_controls(app: &mut EditorApp, ui: &mut egui::Ui) {
    ui.label(format!("Zoom Level: {}%", app.session.view().zoom_percent()));
    ui.horizontal(|ui| {
        if ui.button("−").clicked() {
            app.session.zoom_out();
        }
        if ui.button("+").clicked() {
            app.session.zoom_in();
        }
        if ui.button("Reset").clicked() {
            app.session.reset_zoom();
        }
    });
}
