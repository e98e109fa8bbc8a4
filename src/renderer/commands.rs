//! Draw command definitions recorded by [`PaintContext`](super::PaintContext).

use crate::widgets::Color;

/// Stroke style for track segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Line width in pixels
    pub width: f32,
    /// Line color
    pub color: Color,
}

impl Stroke {
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Host-owned image used in place of the circular thumb.
///
/// The picker only needs its size; `id` is whatever handle the host uses to
/// find the pixels again when asked to draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbImage {
    pub id: u64,
    pub width: f32,
    pub height: f32,
}

impl ThumbImage {
    pub fn new(id: u64, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }
}

/// A single draw operation in surface-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Straight stroked line.
    Line {
        from: (f32, f32),
        to: (f32, f32),
        stroke: Stroke,
    },

    /// Stroked cubic Bezier curve.
    Cubic {
        from: (f32, f32),
        ctrl1: (f32, f32),
        ctrl2: (f32, f32),
        to: (f32, f32),
        stroke: Stroke,
    },

    /// Filled circle.
    Circle {
        center: (f32, f32),
        radius: f32,
        color: Color,
    },

    /// Custom thumb image centered on a point.
    Image { image: ThumbImage, center: (f32, f32) },
}

impl DrawCommand {
    /// Stroke of a line or curve command.
    pub fn stroke(&self) -> Option<Stroke> {
        match self {
            DrawCommand::Line { stroke, .. } | DrawCommand::Cubic { stroke, .. } => Some(*stroke),
            DrawCommand::Circle { .. } | DrawCommand::Image { .. } => None,
        }
    }
}
