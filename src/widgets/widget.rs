use std::time::Duration;

use crate::invalidation::ChangeFlags;
use crate::layout::{Constraints, Size};
use crate::renderer::Canvas;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Packed `0xAARRGGBB`, the layout most platform color ints use.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            r: ((argb >> 16) & 0xFF) as f32 / 255.0,
            g: ((argb >> 8) & 0xFF) as f32 / 255.0,
            b: (argb & 0xFF) as f32 / 255.0,
            a: ((argb >> 24) & 0xFF) as f32 / 255.0,
        }
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Color = Color::from_argb(0xFF88_8888);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// Pointer input in surface-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    /// The host took the pointer away (gesture stolen, window lost focus)
    PointerCancel,
}

impl Event {
    /// Get the coordinates from this event, if any
    pub fn coords(&self) -> Option<(f32, f32)> {
        match self {
            Event::PointerDown { x, y }
            | Event::PointerMove { x, y }
            | Event::PointerUp { x, y } => Some((*x, *y)),
            Event::PointerCancel => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

/// Contract between a widget and the host surface that owns it.
///
/// The host measures, lays out, routes pointer events, ticks animations once
/// per frame and repaints whenever [`needs_paint`](Widget::needs_paint) is set.
pub trait Widget {
    /// Advance animations by `elapsed` since the previous frame.
    /// Returns true if any animations are still active and need another frame.
    fn advance_animations(&mut self, elapsed: Duration) -> bool {
        let _ = elapsed;
        false
    }

    fn measure(&self, constraints: Constraints) -> Size;
    fn layout(&mut self, size: Size);
    fn paint(&self, canvas: &mut dyn Canvas);
    fn event(&mut self, event: &Event) -> EventResponse {
        let _ = event;
        EventResponse::Ignored
    }

    fn mark_dirty(&mut self, flags: ChangeFlags);
    fn needs_layout(&self) -> bool;
    fn needs_paint(&self) -> bool;
    fn clear_dirty(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex(0xFF0000);
        assert_eq!(color, Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_color_from_argb() {
        let color = Color::from_argb(0x80FF_0000);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.b, 0.0);
        assert!((color.a - 128.0 / 255.0).abs() < f32::EPSILON);

        assert_eq!(Color::from_argb(0xFF38_ACEC), Color::from_hex(0x38ACEC));
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default(), Color::TRANSPARENT);
    }

    #[test]
    fn test_event_coords() {
        assert_eq!(
            Event::PointerDown { x: 3.0, y: 4.0 }.coords(),
            Some((3.0, 4.0))
        );
        assert_eq!(Event::PointerCancel.coords(), None);
    }
}
