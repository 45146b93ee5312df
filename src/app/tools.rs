use crate::brush_engine::brush::{BlendMode, Brush};
use crate::canvas::flood_fill::FloodFill;
use crate::config::{
    DEFAULT_COLOR, DEFAULT_DIAMETER, DEFAULT_OPACITY, DEFAULT_TOLERANCE, DIAMETER_RANGE,
    OPACITY_RANGE, TOLERANCE_RANGE,
};
use crate::utils::color::Rgb;

/// The five mutually exclusive editing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Brush,
    Eraser,
    Bucket,
    Picker,
    Pan,
}

/// Pointer cursor a host should show for the active tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Crosshair,
    Grab,
    Grabbing,
    Alias,
}

impl Tool {
    pub const ALL: [Tool; 5] = [Tool::Brush, Tool::Bucket, Tool::Eraser, Tool::Picker, Tool::Pan];

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Brush => "Round Brush",
            Tool::Eraser => "Eraser",
            Tool::Bucket => "Paint Bucket",
            Tool::Picker => "Color Picker",
            Tool::Pan => "Pan / Move",
        }
    }

    pub fn cursor(&self, dragging: bool) -> CursorHint {
        match self {
            Tool::Pan if dragging => CursorHint::Grabbing,
            Tool::Pan => CursorHint::Grab,
            Tool::Picker | Tool::Brush | Tool::Eraser => CursorHint::Crosshair,
            Tool::Bucket => CursorHint::Alias,
        }
    }
}

/// Active tool and its parameters. Setters clamp into the allowed ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolConfig {
    tool: Tool,
    color: Rgb,
    diameter: u32,
    opacity: f32,
    tolerance: u32,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            tool: Tool::Brush,
            color: DEFAULT_COLOR,
            diameter: DEFAULT_DIAMETER,
            opacity: DEFAULT_OPACITY,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl ToolConfig {
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn tolerance(&self) -> u32 {
        self.tolerance
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub fn set_diameter(&mut self, diameter: u32) {
        self.diameter = diameter.clamp(*DIAMETER_RANGE.start(), *DIAMETER_RANGE.end());
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = if opacity.is_nan() {
            DEFAULT_OPACITY
        } else {
            opacity.clamp(*OPACITY_RANGE.start(), *OPACITY_RANGE.end())
        };
    }

    pub fn set_tolerance(&mut self, tolerance: u32) {
        self.tolerance = tolerance.clamp(*TOLERANCE_RANGE.start(), *TOLERANCE_RANGE.end());
    }

    /// Promote a sampled color to the paint color and return to the brush.
    pub fn adopt_picked(&mut self, color: Rgb) {
        self.color = color;
        self.tool = Tool::Brush;
    }

    /// Brush for the active tool, if it paints or erases.
    pub fn brush(&self) -> Option<Brush> {
        let mode = match self.tool {
            Tool::Brush => BlendMode::Normal,
            Tool::Eraser => BlendMode::Eraser,
            Tool::Bucket | Tool::Picker | Tool::Pan => return None,
        };
        Some(Brush::new(self.diameter as f32, self.color, self.opacity, mode))
    }

    /// Bucket fill with the paint color at `round(opacity * 255)` alpha.
    pub fn flood_fill(&self) -> FloodFill {
        let alpha = (self.opacity * 255.0).round() as u8;
        FloodFill::new(self.color.with_alpha(alpha), self.tolerance)
    }
}
