use crate::app::tools::{Tool, ToolConfig};
use crate::app::viewport::ViewState;
use crate::brush_engine::brush::Brush;
use crate::brush_engine::stroke::StrokeState;
use crate::canvas::{flood_fill::FillOutcome, history::History, picker, raster::Raster};
use crate::utils::vector::Vec2;

/// Everything a gesture may read or mutate, borrowed from the session for one event.
pub struct EditTarget<'a> {
    pub raster: &'a mut Raster,
    pub view: &'a mut ViewState,
    pub tools: &'a mut ToolConfig,
    pub history: &'a mut History,
}

/// Gesture in progress between pointer-down and pointer-up.
pub enum Gesture {
    Idle,
    /// Dragging the view. `anchor` is the pointer position minus the pan at press time.
    Panning { anchor: Vec2 },
    /// Painting or erasing. The brush is fixed for the whole stroke.
    Stroking { stroke: StrokeState, brush: Brush },
}

impl Gesture {
    pub fn is_dragging(&self) -> bool {
        !matches!(self, Gesture::Idle)
    }
}

/// Routes pointer events to the engine matching the active tool.
pub struct ToolController {
    gesture: Gesture,
}

impl Default for ToolController {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolController {
    pub fn new() -> Self {
        Self {
            gesture: Gesture::Idle,
        }
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Start a gesture at a display-space position.
    pub fn pointer_down(&mut self, target: EditTarget<'_>, display: Vec2) {
        if self.is_dragging() {
            // Lost the previous release; close that gesture out first.
            self.finish(target.raster, target.history);
        }

        let pos = target.view.to_image(display);
        match target.tools.tool() {
            Tool::Pan => {
                self.gesture = Gesture::Panning {
                    anchor: display - target.view.pan,
                };
            }
            Tool::Bucket => {
                let fill = target.tools.flood_fill();
                if let FillOutcome::Filled { pixels } = fill.apply(target.raster, target.history, pos) {
                    log::info!("filled {pixels} pixels at ({:.1}, {:.1})", pos.x, pos.y);
                }
            }
            Tool::Brush | Tool::Eraser => {
                let Some(brush) = target.tools.brush() else {
                    return;
                };
                let mut stroke = StrokeState::new();
                stroke.add_point(target.raster, &brush, pos);
                self.gesture = Gesture::Stroking { stroke, brush };
            }
            Tool::Picker => match picker::sample(target.raster, pos) {
                Some(color) => {
                    log::debug!("picked {color} at ({:.1}, {:.1})", pos.x, pos.y);
                    target.tools.adopt_picked(color);
                }
                None => log::debug!("pick outside raster at ({:.1}, {:.1})", pos.x, pos.y),
            },
        }
    }

    /// Continue the current gesture. Ignored while idle.
    pub fn pointer_move(&mut self, target: EditTarget<'_>, display: Vec2) {
        match &mut self.gesture {
            Gesture::Idle => {}
            Gesture::Panning { anchor } => {
                target.view.pan = display - *anchor;
            }
            Gesture::Stroking { stroke, brush } => {
                let pos = target.view.to_image(display);
                stroke.add_point(target.raster, brush, pos);
            }
        }
    }

    /// End the current gesture. A finished stroke records one history snapshot.
    pub fn pointer_up(&mut self, target: EditTarget<'_>) {
        self.finish(target.raster, target.history);
    }

    fn finish(&mut self, raster: &Raster, history: &mut History) {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Idle | Gesture::Panning { .. } => {}
            Gesture::Stroking { mut stroke, .. } => {
                log::debug!("stroke finished with {} samples", stroke.path().len());
                stroke.end();
                history.push(raster.snapshot());
            }
        }
    }
}
