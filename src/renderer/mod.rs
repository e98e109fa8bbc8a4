//! Drawing contract between the picker and the host surface.
//!
//! The picker never rasterizes anything itself. It issues lines, cubic curves,
//! circles and thumb images through [`Canvas`]; the host maps those onto
//! whatever 2D API it has. [`PaintContext`] is a canvas that just records the
//! commands, used for headless rendering and in tests.

mod commands;

pub use commands::{DrawCommand, Stroke, ThumbImage};

use crate::layout::Size;
use crate::widgets::Color;

pub trait Canvas {
    /// Current drawable size of the surface.
    fn size(&self) -> Size;

    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), stroke: Stroke);

    fn draw_cubic(
        &mut self,
        from: (f32, f32),
        ctrl1: (f32, f32),
        ctrl2: (f32, f32),
        to: (f32, f32),
        stroke: Stroke,
    );

    fn draw_circle(&mut self, center: (f32, f32), radius: f32, color: Color);

    fn draw_image(&mut self, image: &ThumbImage, center: (f32, f32));
}

/// Canvas that records every draw call in order.
#[derive(Debug, Clone, Default)]
pub struct PaintContext {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl PaintContext {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::with_capacity(8),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Clear recorded commands for reuse, preserving allocated capacity
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for PaintContext {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn draw_cubic(
        &mut self,
        from: (f32, f32),
        ctrl1: (f32, f32),
        ctrl2: (f32, f32),
        to: (f32, f32),
        stroke: Stroke,
    ) {
        self.commands.push(DrawCommand::Cubic {
            from,
            ctrl1,
            ctrl2,
            to,
            stroke,
        });
    }

    fn draw_circle(&mut self, center: (f32, f32), radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_image(&mut self, image: &ThumbImage, center: (f32, f32)) {
        self.commands.push(DrawCommand::Image {
            image: *image,
            center,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_context_records_in_order() {
        let mut ctx = PaintContext::new(Size::new(100.0, 40.0));
        let stroke = Stroke::new(2.0, Color::GRAY);

        ctx.draw_line((0.0, 20.0), (50.0, 20.0), stroke);
        ctx.draw_circle((50.0, 20.0), 8.0, Color::WHITE);

        assert_eq!(ctx.commands().len(), 2);
        assert_eq!(ctx.commands()[0].stroke(), Some(stroke));
        assert_eq!(ctx.commands()[1].stroke(), None);

        ctx.clear();
        assert!(ctx.commands().is_empty());
        assert_eq!(ctx.size(), Size::new(100.0, 40.0));
    }
}
