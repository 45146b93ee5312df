use std::fmt;
use std::sync::mpsc::Receiver;

use crate::app::input_handler::{EditTarget, ToolController};
use crate::app::shortcuts::{EditorCommand, KeyChord, ShortcutHub, Subscription};
use crate::app::tools::{CursorHint, Tool, ToolConfig};
use crate::app::viewport::ViewState;
use crate::canvas::{history::History, raster::Raster};
use crate::error::{EditorError, Result};
use crate::utils::vector::Vec2;

/// Save/cancel contract back to whoever opened the editor.
///
/// Exactly one of the two callbacks runs, at most once.
pub struct SessionCallbacks {
    on_save: Box<dyn FnOnce(Vec<u8>)>,
    on_cancel: Box<dyn FnOnce()>,
}

impl SessionCallbacks {
    pub fn new(on_save: impl FnOnce(Vec<u8>) + 'static, on_cancel: impl FnOnce() + 'static) -> Self {
        Self {
            on_save: Box::new(on_save),
            on_cancel: Box::new(on_cancel),
        }
    }
}

impl fmt::Debug for SessionCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCallbacks").finish_non_exhaustive()
    }
}

/// One hand-editing session over a single image.
///
/// Owns the raster and every piece of editor state. Input arrives as
/// display-space pointer events; the session ends with [`save`](Self::save)
/// or [`cancel`](Self::cancel), after which input is ignored.
pub struct EditorSession {
    raster: Raster,
    view: ViewState,
    tools: ToolConfig,
    history: History,
    controller: ToolController,
    callbacks: Option<SessionCallbacks>,
    undo_shortcut: Option<(Subscription, Receiver<EditorCommand>)>,
}

impl EditorSession {
    /// Decode `source` and start a session fitted to `display_size`.
    pub fn open(
        source: &[u8],
        display_size: Vec2,
        callbacks: SessionCallbacks,
        shortcuts: &ShortcutHub,
    ) -> Result<Self> {
        let raster = Raster::decode(source)?;
        Ok(Self::from_raster(raster, display_size, callbacks, shortcuts))
    }

    /// Start a session over an already decoded raster.
    pub fn from_raster(
        raster: Raster,
        display_size: Vec2,
        callbacks: SessionCallbacks,
        shortcuts: &ShortcutHub,
    ) -> Self {
        let (width, height) = raster.dimensions();
        let view = ViewState::fit(Vec2::new(width as f32, height as f32), display_size);

        let mut history = History::new();
        history.push(raster.snapshot());

        let undo_shortcut = shortcuts.subscribe(KeyChord::UNDO, EditorCommand::Undo);

        log::info!(
            "editor session opened: {width}x{height}, initial zoom {}%",
            view.zoom_percent()
        );

        Self {
            raster,
            view,
            tools: ToolConfig::default(),
            history,
            controller: ToolController::new(),
            callbacks: Some(callbacks),
            undo_shortcut: Some(undo_shortcut),
        }
    }

    pub fn is_open(&self) -> bool {
        self.callbacks.is_some()
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn tools(&self) -> &ToolConfig {
        &self.tools
    }

    /// Tool parameters; setters clamp their input.
    pub fn tools_mut(&mut self) -> &mut ToolConfig {
        &mut self.tools
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.tools.set_tool(tool);
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    pub fn cursor(&self) -> CursorHint {
        self.tools.tool().cursor(self.is_dragging())
    }

    fn edit_target(&mut self) -> Option<(EditTarget<'_>, &mut ToolController)> {
        if self.callbacks.is_none() {
            log::warn!("input ignored, editor session already ended");
            return None;
        }
        Some((
            EditTarget {
                raster: &mut self.raster,
                view: &mut self.view,
                tools: &mut self.tools,
                history: &mut self.history,
            },
            &mut self.controller,
        ))
    }

    pub fn pointer_down(&mut self, display: Vec2) {
        if let Some((target, controller)) = self.edit_target() {
            controller.pointer_down(target, display);
        }
    }

    pub fn pointer_move(&mut self, display: Vec2) {
        if let Some((target, controller)) = self.edit_target() {
            controller.pointer_move(target, display);
        }
    }

    pub fn pointer_up(&mut self) {
        if let Some((target, controller)) = self.edit_target() {
            controller.pointer_up(target);
        }
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.view.wheel(delta_y);
    }

    pub fn zoom_in(&mut self) {
        self.view.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.view.zoom_out();
    }

    pub fn reset_zoom(&mut self) {
        self.view.reset_zoom();
    }

    /// Re-centre the raster in a display area of the given size.
    pub fn fit_view(&mut self, display_size: Vec2) {
        let (width, height) = self.raster.dimensions();
        self.view = ViewState::fit(Vec2::new(width as f32, height as f32), display_size);
    }

    /// Step back one history entry. Returns `false` when already at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        match self.history.undo() {
            Some(snapshot) => {
                self.raster.restore(snapshot);
                log::debug!("undo, {} history entries left", self.history.len());
                true
            }
            None => false,
        }
    }

    /// Run commands delivered by the keyboard shortcut hub. Returns how many ran.
    pub fn process_shortcuts(&mut self) -> usize {
        let commands: Vec<EditorCommand> = match &self.undo_shortcut {
            Some((_, receiver)) => receiver.try_iter().collect(),
            None => return 0,
        };
        for command in &commands {
            match command {
                EditorCommand::Undo => {
                    self.undo();
                }
            }
        }
        commands.len()
    }

    /// Encode the raster as PNG, hand it to `on_save` and end the session.
    ///
    /// If encoding fails the session stays open and nothing is delivered.
    pub fn save(&mut self) -> Result<()> {
        if !self.is_open() {
            return Err(EditorError::SessionClosed);
        }
        let bytes = self.raster.encode_png()?;
        let callbacks = self.close().ok_or(EditorError::SessionClosed)?;
        log::info!("editor session saved ({} bytes)", bytes.len());
        (callbacks.on_save)(bytes);
        Ok(())
    }

    /// Discard all edits, notify `on_cancel` and end the session.
    pub fn cancel(&mut self) -> Result<()> {
        let callbacks = self.close().ok_or(EditorError::SessionClosed)?;
        log::info!("editor session cancelled");
        (callbacks.on_cancel)();
        Ok(())
    }

    fn close(&mut self) -> Option<SessionCallbacks> {
        let callbacks = self.callbacks.take()?;
        // Releases the undo listener.
        self.undo_shortcut = None;
        self.controller = ToolController::new();
        Some(callbacks)
    }
}
