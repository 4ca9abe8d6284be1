//! Draw lists
//!
//! Screens describe a frame as an ordered list of [`DrawCommand`]s. Building
//! the list touches no GPU state, so what a screen draws can be inspected in
//! tests; the [`painter`](super::painter) turns the list into egui shapes.

use std::sync::Arc;

use egui::{Align2, Color32, Pos2, Rect};

use crate::assets::Surface;

/// A single drawing operation, in logical pixels
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Filled rectangle with rounded corners
    FillRect {
        rect: Rect,
        color: Color32,
        corner_radius: f32,
    },
    /// Rectangle outline drawn inside `rect`
    StrokeRect {
        rect: Rect,
        color: Color32,
        width: f32,
        corner_radius: f32,
    },
    /// Single line of text
    Text {
        text: String,
        pos: Pos2,
        anchor: Align2,
        size: f32,
        color: Color32,
    },
    /// Image drawn at its native size with its top-left corner at `pos`
    Image { surface: Arc<Surface>, pos: Pos2 },
    /// Straight line segment
    Line {
        from: Pos2,
        to: Pos2,
        width: f32,
        color: Color32,
    },
    /// Circle, filled and/or outlined
    Circle {
        center: Pos2,
        radius: f32,
        fill: Option<Color32>,
        stroke: Option<(f32, Color32)>,
    },
}

/// Ordered draw commands for one frame plus the clear color
#[derive(Debug, Clone)]
pub struct DrawList {
    clear: Color32,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Creates an empty list that clears the frame to `clear`
    pub fn new(clear: Color32) -> Self {
        Self {
            clear,
            commands: Vec::with_capacity(64),
        }
    }

    pub fn clear_color(&self) -> Color32 {
        self.clear
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color32, corner_radius: f32) {
        self.push(DrawCommand::FillRect {
            rect,
            color,
            corner_radius,
        });
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Color32, width: f32, corner_radius: f32) {
        self.push(DrawCommand::StrokeRect {
            rect,
            color,
            width,
            corner_radius,
        });
    }

    pub fn text(
        &mut self,
        text: impl Into<String>,
        pos: Pos2,
        anchor: Align2,
        size: f32,
        color: Color32,
    ) {
        self.push(DrawCommand::Text {
            text: text.into(),
            pos,
            anchor,
            size,
            color,
        });
    }

    pub fn image(&mut self, surface: Arc<Surface>, pos: Pos2) {
        self.push(DrawCommand::Image { surface, pos });
    }

    pub fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        self.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    pub fn circle(
        &mut self,
        center: Pos2,
        radius: f32,
        fill: Option<Color32>,
        stroke: Option<(f32, Color32)>,
    ) {
        self.push(DrawCommand::Circle {
            center,
            radius,
            fill,
            stroke,
        });
    }

    /// Iterates over the text of every text command, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
