//! Pointer handling: thumb selection, drag clamping and stretch shaping.
//!
//! The controller only mutates thumb positions. Side effects that involve the
//! rest of the picker (listener callbacks, springs, redraws) are reported back
//! as a [`TouchOutcome`] for the picker to carry out.

use super::config::{ElasticBehavior, PickerConfig};
use super::curve::StretchCurve;
use super::thumb::{PerThumb, Thumb, ThumbState};
use crate::layout::TrackGeometry;
use crate::widgets::Event;

/// Separation (in pixels) around one thumb width that counts as touching.
const TOUCHING_TOLERANCE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Thumb),
}

/// What a pointer event did, for the picker to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchOutcome {
    /// Not ours; let the host route it elsewhere
    Ignored,
    /// A thumb was grabbed
    Started(Thumb),
    /// The grabbed thumb moved
    Moved(Thumb),
    /// The grabbed thumb was let go
    Released(Thumb),
}

/// Everything the controller reads besides the thumbs themselves.
#[derive(Debug, Clone, Copy)]
pub struct TouchContext<'a> {
    pub geometry: &'a TrackGeometry,
    pub config: &'a PickerConfig,
}

#[derive(Debug, Clone, Default)]
pub struct TouchController {
    state: DragState,
}

impl TouchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn active_thumb(&self) -> Option<Thumb> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(thumb) => Some(thumb),
        }
    }

    /// Drop any drag in progress, returning the thumb that was held.
    pub fn reset(&mut self) -> Option<Thumb> {
        let held = self.active_thumb();
        self.state = DragState::Idle;
        held
    }

    pub fn handle(
        &mut self,
        event: &Event,
        thumbs: &mut PerThumb<ThumbState>,
        ctx: TouchContext<'_>,
    ) -> TouchOutcome {
        match (self.state, *event) {
            (DragState::Idle, Event::PointerDown { x, y }) => {
                let Some(thumb) = hit_test(x, y, thumbs, ctx) else {
                    return TouchOutcome::Ignored;
                };
                thumbs.get_mut(thumb).selected = true;
                self.state = DragState::Dragging(thumb);
                TouchOutcome::Started(thumb)
            }
            (DragState::Dragging(thumb), Event::PointerMove { x, y }) => {
                drag(thumb, x, y, thumbs, ctx);
                TouchOutcome::Moved(thumb)
            }
            (DragState::Dragging(thumb), Event::PointerUp { .. } | Event::PointerCancel) => {
                thumbs.get_mut(thumb).selected = false;
                self.state = DragState::Idle;
                TouchOutcome::Released(thumb)
            }
            // A second pointer going down mid-drag, or stray moves/ups while idle
            _ => TouchOutcome::Ignored,
        }
    }
}

/// Thumb under the pointer, start thumb first.
pub fn hit_test(
    x: f32,
    y: f32,
    thumbs: &PerThumb<ThumbState>,
    ctx: TouchContext<'_>,
) -> Option<Thumb> {
    let curve = StretchCurve::new(ctx.geometry, ctx.config.elastic_behavior);
    Thumb::BOTH.into_iter().find(|thumb| {
        let (cx, cy) = curve.anchor(thumbs.get(*thumb));
        let (dx, dy) = (x - cx, y - cy);
        match &ctx.config.thumb_image {
            Some(image) => {
                dx.abs() < image.width.abs() / 2.0 && dy.abs() < image.height.abs() / 2.0
            }
            // Twice the visual radius, so small thumbs stay easy to grab
            None => {
                let reach = ctx.config.thumb_radius * 2.0;
                dx * dx + dy * dy <= reach * reach
            }
        }
    })
}

/// Pixel interval the dragged thumb may move in: the track edge on one side,
/// the other thumb (plus one thumb width) on the other.
pub fn drag_bounds(
    thumb: Thumb,
    thumbs: &PerThumb<ThumbState>,
    geometry: &TrackGeometry,
) -> (f32, f32) {
    match thumb {
        Thumb::Start => (
            geometry.track_start_x,
            thumbs.end.x - geometry.thumb_width,
        ),
        Thumb::End => (
            thumbs.start.x + geometry.thumb_width,
            geometry.track_end_x,
        ),
    }
}

fn drag(thumb: Thumb, x: f32, y: f32, thumbs: &mut PerThumb<ThumbState>, ctx: TouchContext<'_>) {
    let geometry = ctx.geometry;
    let (lower, upper) = drag_bounds(thumb, thumbs, geometry);
    let new_x = x.max(lower).min(upper);

    thumbs.get_mut(thumb).x = new_x;
    thumbs.enforce_ordering(thumb, geometry.thumb_width);

    let touching = (thumbs.separation() - geometry.thumb_width).abs() < TOUCHING_TOLERANCE;
    if touching {
        thumbs.get_mut(thumb.other()).y_offset = 0.0;
    }
    let y_offset = if touching || ctx.config.elastic_behavior == ElasticBehavior::Rigid {
        0.0
    } else {
        let stretch_range = ctx.config.stretch_range;
        let offset = (y - geometry.track_y).max(-stretch_range).min(stretch_range);
        shape_stretch(offset, new_x, lower, upper, stretch_range)
    };
    thumbs.get_mut(thumb).y_offset = y_offset;

    log::trace!("Dragging {thumb:?} to x={new_x:.1}, y_offset={y_offset:.1}");
}

/// Largest deflection allowed for a thumb at `x` within `[lower, upper]`.
///
/// Zero at either bound, rising linearly to `stretch_range` halfway between
/// them, so a thumb pinned against an edge or the other thumb barely bends
/// the track while one in open space can pull it the full range.
pub fn stretch_limit(x: f32, lower: f32, upper: f32, stretch_range: f32) -> f32 {
    let travel = upper - lower;
    if travel <= 0.0 {
        return 0.0;
    }
    let edge_distance = (x - lower).min(upper - x).max(0.0);
    (2.0 * stretch_range * edge_distance / travel).min(stretch_range)
}

/// Clamp a raw offset to [`stretch_limit`], symmetrically above and below the baseline.
pub fn shape_stretch(offset: f32, x: f32, lower: f32, upper: f32, stretch_range: f32) -> f32 {
    let limit = stretch_limit(x, lower, upper, stretch_range);
    offset.max(-limit).min(limit)
}
