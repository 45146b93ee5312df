use std::path::PathBuf;

use eframe::egui::{self, TextureHandle};

use crate::app::render_helper;
use crate::app::session::{EditorSession, SessionCallbacks};
use crate::app::shortcuts::{KeyEvent, ShortcutHub};
use crate::canvas::raster::Raster;
use crate::ui;
use crate::utils::vector::Vec2;

/// Desktop host around one [`EditorSession`].
pub struct EditorApp {
    pub session: EditorSession,
    pub shortcuts: ShortcutHub,
    pub texture: Option<TextureHandle>,
    pub texture_revision: Option<u64>,
    pub status: Option<String>,
    /// Text of the hex color field while it is being edited.
    pub hex_input: String,
    pub output: PathBuf,
    first_frame: bool,
}

impl EditorApp {
    /// Open `raster` for editing; saving writes PNG bytes to `output`.
    pub fn new(_cc: &eframe::CreationContext<'_>, raster: Raster, output: PathBuf) -> Self {
        let shortcuts = ShortcutHub::new();
        let save_path = output.clone();
        let callbacks = SessionCallbacks::new(
            move |bytes| match std::fs::write(&save_path, &bytes) {
                Ok(()) => log::info!("wrote {} bytes to {}", bytes.len(), save_path.display()),
                Err(err) => log::error!("failed to write {}: {err}", save_path.display()),
            },
            || log::info!("edits discarded"),
        );
        // The real display size is only known once the canvas panel is laid out.
        let session = EditorSession::from_raster(raster, Vec2::ZERO, callbacks, &shortcuts);

        let hex_input = session.tools().color().to_hex();

        Self {
            session,
            shortcuts,
            texture: None,
            texture_revision: None,
            status: None,
            hex_input,
            output,
            first_frame: true,
        }
    }

    pub fn save(&mut self) {
        if let Err(err) = self.session.save() {
            log::error!("save failed: {err}");
            self.status = Some(format!("Save failed: {err}"));
        }
    }

    pub fn cancel(&mut self) {
        if let Err(err) = self.session.cancel() {
            log::warn!("cancel ignored: {err}");
        }
    }

    fn forward_keys(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|i| i.events.clone());
        for event in events {
            let egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } = event
            else {
                continue;
            };
            let Some(key_event) = key_event(key, modifiers) else {
                continue;
            };
            if self.shortcuts.dispatch(&key_event) {
                ctx.input_mut(|i| i.consume_key(modifiers, key));
            }
        }
        self.session.process_shortcuts();
    }

    fn canvas_ui(&mut self, ui: &mut egui::Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        if self.first_frame {
            self.session.fit_view(Vec2::new(rect.width(), rect.height()));
            self.first_frame = false;
        }

        let (pressed, released, moving, pointer, scroll_y) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.is_moving(),
                i.pointer.interact_pos(),
                i.raw_scroll_delta.y,
            )
        });

        if let Some(pos) = pointer {
            let local = Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y);
            if pressed && response.hovered() {
                self.session.pointer_down(local);
            } else if moving && self.session.is_dragging() {
                self.session.pointer_move(local);
            }
        }
        if released && self.session.is_dragging() {
            self.session.pointer_up();
        }
        if scroll_y != 0.0 && response.hovered() {
            // egui scrolls up with positive y; wheel deltas are the other way round.
            self.session.wheel(-scroll_y);
        }

        render_helper::update_texture(self, ui.ctx());
        render_helper::paint_canvas(self, ui, rect);

        if response.hovered() {
            ui.ctx()
                .set_cursor_icon(render_helper::cursor_icon(self.session.cursor()));
        }
        if self.session.is_dragging() {
            ui.ctx().request_repaint();
        }
    }
}

/// Map an egui key press to the host key event, `None` for non-character keys.
fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> Option<KeyEvent> {
    let mut chars = key.name().chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let c = if modifiers.shift {
        c.to_ascii_uppercase()
    } else {
        c.to_ascii_lowercase()
    };
    Some(KeyEvent {
        key: c,
        ctrl: modifiers.ctrl,
        meta: modifiers.mac_cmd,
        shift: modifiers.shift,
    })
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) && self.session.is_open() {
            self.cancel();
        }

        self.forward_keys(ctx);
        ui::toolbar::tool_panel(self, ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.canvas_ui(ui));

        if !self.session.is_open() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
