//! The rubber range picker widget.
//!
//! A dual-thumb range slider whose track bends while a thumb is dragged off
//! the baseline and springs back flat once it is released.
//!
//! # Lifecycle
//!
//! Thumb pixel positions are the source of truth and logical values are
//! derived from them, so nothing can be placed before the host has sized the
//! surface. Values set before the first [`layout`](Widget::layout) are parked
//! (one per thumb, last write wins) and applied exactly once when the track
//! geometry resolves. Thumbs with nothing parked start at the minimum.
//!
//! # Example
//! ```ignore
//! let mut picker = RangePicker::new(PickerConfig::new().range(0, 100))?;
//! picker.set_current_end_value(80);
//! picker.layout(Size::new(320.0, 48.0));
//!
//! // Per frame:
//! let animating = picker.advance_animations(frame_time);
//! if picker.needs_paint() {
//!     picker.paint(&mut canvas);
//!     picker.clear_dirty();
//! }
//! ```

mod config;
mod curve;
mod mapper;
mod thumb;
mod touch;

pub use config::{ElasticBehavior, PickerConfig};
pub use curve::{SegmentRole, SegmentShape, StretchCurve, TrackPath, TrackSegment};
pub use mapper::ValueMapper;
pub use thumb::{PerThumb, Thumb, ThumbState};
pub use touch::{
    drag_bounds, hit_test, shape_stretch, stretch_limit, DragState, TouchContext,
    TouchController, TouchOutcome,
};

use std::time::Duration;

use config::{
    validate_damping_ratio, validate_image, validate_radius, validate_range,
    validate_stiffness, validate_stretch_range, validate_track_width,
};

use crate::animation::SpringReturn;
use crate::error::{PickerError, Result};
use crate::invalidation::ChangeFlags;
use crate::layout::{Constraints, Size, TrackGeometry};
use crate::renderer::{Canvas, Stroke, ThumbImage};
use crate::widgets::{impl_dirty_flags, Color, Event, EventResponse, Widget};

/// Receives value and tracking notifications from a [`RangePicker`].
///
/// All methods default to doing nothing.
pub trait RangePickerListener {
    fn on_progress_changed(&mut self, start_value: i32, end_value: i32, from_user: bool) {
        let _ = (start_value, end_value, from_user);
    }

    fn on_start_tracking_touch(&mut self, is_start_thumb: bool) {
        let _ = is_start_thumb;
    }

    fn on_stop_tracking_touch(&mut self, is_start_thumb: bool) {
        let _ = is_start_thumb;
    }
}

pub struct RangePicker {
    config: PickerConfig,
    /// Last size handed to `layout`, kept so thumb size changes can re-derive geometry
    size: Option<Size>,
    geometry: Option<TrackGeometry>,
    thumbs: PerThumb<ThumbState>,
    springs: PerThumb<SpringReturn>,
    pending: PerThumb<Option<i32>>,
    touch: TouchController,
    listener: Option<Box<dyn RangePickerListener>>,
    dirty_flags: ChangeFlags,
}

impl RangePicker {
    pub fn new(config: PickerConfig) -> Result<Self> {
        config.validate()?;
        let spring = SpringReturn::new(config.spring);
        Ok(Self {
            springs: PerThumb::new(spring.clone(), spring),
            config,
            size: None,
            geometry: None,
            thumbs: PerThumb::default(),
            pending: PerThumb::default(),
            touch: TouchController::new(),
            listener: None,
            dirty_flags: ChangeFlags::RELAYOUT,
        })
    }

    pub fn set_listener(&mut self, listener: impl RangePickerListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn min(&self) -> i32 {
        self.config.min_value
    }

    pub fn max(&self) -> i32 {
        self.config.max_value
    }

    pub fn elastic_behavior(&self) -> ElasticBehavior {
        self.config.elastic_behavior
    }

    pub fn thumb(&self, thumb: Thumb) -> &ThumbState {
        self.thumbs.get(thumb)
    }

    /// `None` until the surface has been laid out at a usable size.
    pub fn geometry(&self) -> Option<&TrackGeometry> {
        self.geometry.as_ref()
    }

    /// Thumb currently being dragged, if any.
    pub fn active_thumb(&self) -> Option<Thumb> {
        self.touch.active_thumb()
    }

    pub fn is_animating(&self) -> bool {
        self.springs.start.is_running() || self.springs.end.is_running()
    }

    /// Segments the track would be drawn with right now.
    pub fn track_path(&self) -> Option<TrackPath> {
        let geometry = self.geometry.as_ref()?;
        Some(StretchCurve::new(geometry, self.config.elastic_behavior).track_path(&self.thumbs))
    }

    // Values

    pub fn current_start_value(&self) -> i32 {
        self.current_value(Thumb::Start)
    }

    pub fn current_end_value(&self) -> i32 {
        self.current_value(Thumb::End)
    }

    pub fn current_value(&self, thumb: Thumb) -> i32 {
        match &self.geometry {
            Some(geometry) => self.mapper(geometry).x_to_value(self.thumbs.get(thumb).x, thumb),
            None => self.pending.get(thumb).unwrap_or(self.config.min_value),
        }
    }

    pub fn set_current_start_value(&mut self, value: i32) {
        self.set_current_value(Thumb::Start, value);
    }

    pub fn set_current_end_value(&mut self, value: i32) {
        self.set_current_value(Thumb::End, value);
    }

    /// Move `thumb` to `value` (clamped to the range), pushing the other
    /// thumb along if they would overlap.
    pub fn set_current_value(&mut self, thumb: Thumb, value: i32) {
        let value = value.clamp(self.config.min_value, self.config.max_value);
        if self.geometry.is_none() {
            log::debug!("Track not laid out yet, parking {thumb:?} value {value}");
            *self.pending.get_mut(thumb) = Some(value);
            return;
        }
        self.place(thumb, value);
        self.notify_progress(false);
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    pub fn set_min(&mut self, value: i32) -> Result<()> {
        validate_range(value, self.config.max_value)?;
        self.apply_range(value, self.config.max_value);
        Ok(())
    }

    pub fn set_max(&mut self, value: i32) -> Result<()> {
        validate_range(self.config.min_value, value)?;
        self.apply_range(self.config.min_value, value);
        Ok(())
    }

    // Appearance and physics

    pub fn set_elastic_behavior(&mut self, behavior: ElasticBehavior) {
        log::debug!("Elastic behavior set to {behavior:?}");
        self.config.elastic_behavior = behavior;
        if behavior == ElasticBehavior::Rigid {
            // Includes a thumb that is being dragged right now
            for thumb in Thumb::BOTH {
                self.springs.get_mut(thumb).cancel();
                self.thumbs.get_mut(thumb).y_offset = 0.0;
            }
        }
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    pub fn set_stretch_range(&mut self, stretch_range: f32) -> Result<()> {
        validate_stretch_range(stretch_range)?;
        log::debug!("Stretch range set to {stretch_range}");
        self.config.stretch_range = stretch_range;
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
        Ok(())
    }

    /// Resize the circular thumb, keeping both logical values.
    ///
    /// Stored offsets, including those of running springs, scale with the radius.
    pub fn set_thumb_radius(&mut self, radius: f32) -> Result<()> {
        validate_radius(radius)?;
        if self.config.thumb_image.is_some() {
            return Err(PickerError::RadiusWithThumbImage);
        }

        let previous = self.placed_values();
        let factor = radius / self.config.thumb_radius;
        log::debug!("Thumb radius {} -> {radius}", self.config.thumb_radius);
        self.config.thumb_radius = radius;
        for thumb in Thumb::BOTH {
            self.thumbs.get_mut(thumb).y_offset *= factor;
            self.springs.get_mut(thumb).rescale(factor);
        }
        self.refresh_geometry(previous);
        self.mark_dirty(ChangeFlags::RELAYOUT);
        Ok(())
    }

    /// Use an image instead of the circular thumb, or go back to circles with `None`.
    pub fn set_thumb_image(&mut self, image: Option<ThumbImage>) -> Result<()> {
        if let Some(image) = &image {
            validate_image(image)?;
        }
        let previous = self.placed_values();
        log::debug!("Thumb image set to {image:?}");
        self.config.thumb_image = image;
        self.refresh_geometry(previous);
        self.mark_dirty(ChangeFlags::RELAYOUT);
        Ok(())
    }

    pub fn set_normal_track_width(&mut self, width: f32) -> Result<()> {
        validate_track_width(width)?;
        log::debug!("Normal track width set to {width}");
        self.config.normal_track_width = width;
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
        Ok(())
    }

    pub fn set_highlight_track_width(&mut self, width: f32) -> Result<()> {
        validate_track_width(width)?;
        log::debug!("Highlight track width set to {width}");
        self.config.highlight_track_width = width;
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
        Ok(())
    }

    pub fn set_normal_track_color(&mut self, color: Color) {
        log::debug!("Normal track color set to {color:?}");
        self.config.normal_track_color = color;
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    pub fn set_highlight_track_color(&mut self, color: Color) {
        log::debug!("Highlight track color set to {color:?}");
        self.config.highlight_track_color = color;
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    pub fn set_highlight_thumb_on_touch_color(&mut self, color: Color) {
        log::debug!("Thumb touch color set to {color:?}");
        self.config.highlight_thumb_on_touch_color = color;
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    /// Applies to running springs immediately, without restarting them.
    pub fn set_damping_ratio(&mut self, damping_ratio: f32) -> Result<()> {
        validate_damping_ratio(damping_ratio)?;
        log::debug!("Spring damping ratio set to {damping_ratio}");
        self.config.spring.damping_ratio = damping_ratio;
        self.retarget_springs();
        Ok(())
    }

    /// Applies to running springs immediately, without restarting them.
    pub fn set_stiffness(&mut self, stiffness: f32) -> Result<()> {
        validate_stiffness(stiffness)?;
        log::debug!("Spring stiffness set to {stiffness}");
        self.config.spring.stiffness = stiffness;
        self.retarget_springs();
        Ok(())
    }

    // Internals

    fn mapper(&self, geometry: &TrackGeometry) -> ValueMapper {
        ValueMapper::new(self.config.min_value, self.config.max_value, *geometry)
    }

    /// Put `thumb` at `value` without notifying anyone. Geometry must be resolved.
    fn place(&mut self, thumb: Thumb, value: i32) {
        let Some(geometry) = self.geometry else {
            return;
        };
        self.thumbs.get_mut(thumb).x = self.mapper(&geometry).value_to_x(value, thumb);
        self.thumbs.enforce_ordering(thumb, geometry.thumb_width);
    }

    /// Switch to `min_value..=max_value`, keeping both values where they still fit.
    fn apply_range(&mut self, min_value: i32, max_value: i32) {
        if self.geometry.is_none() {
            // Only values the caller parked are kept; unset thumbs keep defaulting to the minimum
            for thumb in Thumb::BOTH {
                if let Some(value) = self.pending.get_mut(thumb) {
                    *value = (*value).clamp(min_value, max_value);
                }
            }
            self.config.min_value = min_value;
            self.config.max_value = max_value;
            log::debug!("Range is now {min_value}..={max_value}");
            return;
        }

        let start = self.current_start_value().clamp(min_value, max_value);
        let end = self.current_end_value().clamp(min_value, max_value);
        self.config.min_value = min_value;
        self.config.max_value = max_value;
        log::debug!("Range is now {min_value}..={max_value}");
        self.place(Thumb::Start, start);
        self.place(Thumb::End, end);
        self.notify_progress(false);
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    /// Current values, if the thumbs have been placed on a track.
    fn placed_values(&self) -> Option<PerThumb<i32>> {
        self.geometry
            .map(|_| PerThumb::new(self.current_start_value(), self.current_end_value()))
    }

    fn refresh_geometry(&mut self, previous: Option<PerThumb<i32>>) {
        let Some(size) = self.size else {
            return;
        };
        self.geometry = TrackGeometry::resolve(size, self.config.thumb_extent());

        match (self.geometry.is_some(), previous) {
            (false, Some(values)) => {
                log::debug!("Track no longer fits {}x{}, parking values", size.width, size.height);
                self.pending = PerThumb::new(Some(values.start), Some(values.end));
                self.abort_drag();
            }
            (false, None) => {
                log::debug!("Surface {}x{} too small for the track", size.width, size.height);
                self.abort_drag();
            }
            (true, Some(values)) => {
                self.place(Thumb::Start, values.start);
                self.place(Thumb::End, values.end);
            }
            (true, None) => self.place_initial(),
        }
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    /// First placement once the track is known: parked values, else the minimum.
    fn place_initial(&mut self) {
        let Some(geometry) = self.geometry else {
            return;
        };
        log::debug!(
            "Track resolved: x {}..{}, baseline {}",
            geometry.track_start_x,
            geometry.track_end_x,
            geometry.track_y
        );

        self.thumbs.start = ThumbState {
            x: geometry.track_start_x,
            ..self.thumbs.start
        };
        self.thumbs.end = ThumbState {
            x: geometry.track_start_x + geometry.thumb_width,
            ..self.thumbs.end
        };

        for thumb in Thumb::BOTH {
            if let Some(value) = self.pending.get_mut(thumb).take() {
                log::debug!("Applying parked {thumb:?} value {value}");
                self.set_current_value(thumb, value);
            }
        }
    }

    /// End a drag the host can no longer route events for.
    fn abort_drag(&mut self) {
        let Some(thumb) = self.touch.reset() else {
            return;
        };
        log::debug!("Track lost while dragging {thumb:?}");
        let state = self.thumbs.get_mut(thumb);
        state.selected = false;
        state.y_offset = 0.0;
        if let Some(listener) = self.listener.as_mut() {
            listener.on_stop_tracking_touch(thumb.is_start());
        }
    }

    fn retarget_springs(&mut self) {
        let spring = self.config.spring;
        for thumb in Thumb::BOTH {
            self.springs.get_mut(thumb).retarget(spring);
        }
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    fn notify_progress(&mut self, from_user: bool) {
        let (start, end) = (self.current_start_value(), self.current_end_value());
        if let Some(listener) = self.listener.as_mut() {
            listener.on_progress_changed(start, end, from_user);
        }
    }

    fn on_touch_outcome(&mut self, outcome: TouchOutcome) -> EventResponse {
        match outcome {
            TouchOutcome::Ignored => return EventResponse::Ignored,
            TouchOutcome::Started(thumb) => {
                log::debug!("Started dragging {thumb:?}");
                self.springs.get_mut(thumb).cancel();
                if let Some(listener) = self.listener.as_mut() {
                    listener.on_start_tracking_touch(thumb.is_start());
                }
            }
            TouchOutcome::Moved(thumb) => {
                // Touching thumbs flatten both sides, including one still springing back
                let other = thumb.other();
                if self.thumbs.get(other).y_offset == 0.0 {
                    self.springs.get_mut(other).cancel();
                }
                self.notify_progress(true);
            }
            TouchOutcome::Released(thumb) => {
                let from = self.thumbs.get(thumb).y_offset;
                log::debug!("Released {thumb:?}, springing back from {from:.1}");
                if let Some(listener) = self.listener.as_mut() {
                    listener.on_stop_tracking_touch(thumb.is_start());
                }
                if from != 0.0 {
                    self.springs.get_mut(thumb).start(from);
                }
            }
        }
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
        EventResponse::Handled
    }

    fn stroke(&self, role: SegmentRole) -> Stroke {
        match role {
            SegmentRole::Normal => {
                Stroke::new(self.config.normal_track_width, self.config.normal_track_color)
            }
            SegmentRole::Highlight => {
                Stroke::new(self.config.highlight_track_width, self.config.highlight_track_color)
            }
        }
    }

    fn paint_thumb(&self, canvas: &mut dyn Canvas, center: (f32, f32), selected: bool) {
        if let Some(image) = &self.config.thumb_image {
            canvas.draw_image(image, center);
            return;
        }

        let config = &self.config;
        canvas.draw_circle(center, config.thumb_radius, config.highlight_track_color);
        let inner = if selected {
            config.highlight_thumb_on_touch_color
        } else {
            config.highlight_track_color
        };
        let inner_radius = (config.thumb_radius - config.highlight_track_width).max(0.0);
        canvas.draw_circle(center, inner_radius, inner);
    }
}

impl Widget for RangePicker {
    fn advance_animations(&mut self, elapsed: Duration) -> bool {
        let dt = elapsed.as_secs_f32();
        let mut active = false;
        for thumb in Thumb::BOTH {
            let spring = self.springs.get_mut(thumb);
            if !spring.is_running() {
                continue;
            }
            let step = spring.step(dt);
            log::trace!("{thumb:?} spring at {:.2}", step.value);
            self.thumbs.get_mut(thumb).y_offset = step.value;
            if step.at_rest {
                log::debug!("{thumb:?} settled on the baseline");
            } else {
                active = true;
            }
            self.mark_dirty(ChangeFlags::NEEDS_PAINT);
        }
        active
    }

    /// Fills the offered width; tall enough for one thumb. A stretched track
    /// draws outside this box, so hosts should not clip the picker tightly.
    fn measure(&self, constraints: Constraints) -> Size {
        let extent = self.config.thumb_extent();
        constraints.constrain(Size::new(constraints.fill_width(), extent.height()))
    }

    fn layout(&mut self, size: Size) {
        if self.size == Some(size) {
            return;
        }
        let previous = self.placed_values();
        self.size = Some(size);
        self.refresh_geometry(previous);
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let Some(geometry) = &self.geometry else {
            return;
        };
        let curve = StretchCurve::new(geometry, self.config.elastic_behavior);

        let path = curve.track_path(&self.thumbs);
        for segment in path.segments() {
            let stroke = self.stroke(segment.role);
            match segment.shape {
                SegmentShape::Line { from, to } => canvas.draw_line(from, to, stroke),
                SegmentShape::Cubic {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                } => canvas.draw_cubic(from, ctrl1, ctrl2, to, stroke),
            }
        }

        for thumb in Thumb::BOTH {
            let state = self.thumbs.get(thumb);
            self.paint_thumb(canvas, curve.anchor(state), state.selected);
        }
    }

    fn event(&mut self, event: &Event) -> EventResponse {
        let Some(geometry) = self.geometry else {
            return EventResponse::Ignored;
        };
        let ctx = TouchContext {
            geometry: &geometry,
            config: &self.config,
        };
        let outcome = self.touch.handle(event, &mut self.thumbs, ctx);
        self.on_touch_outcome(outcome)
    }

    impl_dirty_flags!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, PaintContext};

    fn laid_out(config: PickerConfig) -> RangePicker {
        let mut picker = RangePicker::new(config).expect("valid config");
        picker.layout(Size::new(220.0, 80.0));
        picker
    }

    #[test]
    fn test_default_positions_after_layout() {
        let picker = laid_out(PickerConfig::new().thumb_radius(10.0));

        assert_eq!(picker.thumb(Thumb::Start).x, 10.0);
        assert_eq!(picker.thumb(Thumb::End).x, 30.0);
        assert_eq!(picker.current_start_value(), 0);
        assert_eq!(picker.current_end_value(), 0);
    }

    #[test]
    fn test_values_before_layout_are_parked() {
        let mut picker = RangePicker::new(PickerConfig::new().thumb_radius(10.0)).unwrap();
        picker.set_current_start_value(20);
        picker.set_current_end_value(70);
        picker.set_current_end_value(75);

        assert!(picker.geometry().is_none());
        assert_eq!(picker.current_start_value(), 20);
        assert_eq!(picker.current_end_value(), 75);

        picker.layout(Size::new(220.0, 80.0));

        assert_eq!(picker.current_start_value(), 20);
        assert_eq!(picker.current_end_value(), 75);
        assert_eq!(picker.pending, PerThumb::new(None, None));
    }

    #[test]
    fn test_resize_keeps_values() {
        let mut picker = laid_out(PickerConfig::new().thumb_radius(10.0));
        picker.set_current_start_value(25);
        picker.set_current_end_value(60);

        picker.layout(Size::new(500.0, 80.0));

        assert_eq!(picker.current_start_value(), 25);
        assert_eq!(picker.current_end_value(), 60);
    }

    #[test]
    fn test_collapsing_surface_parks_values() {
        let mut picker = laid_out(PickerConfig::new().thumb_radius(10.0));
        picker.set_current_start_value(40);
        picker.set_current_end_value(90);

        picker.layout(Size::zero());
        assert!(picker.geometry().is_none());
        assert_eq!(picker.current_end_value(), 90);

        picker.layout(Size::new(300.0, 80.0));
        assert_eq!(picker.current_start_value(), 40);
        assert_eq!(picker.current_end_value(), 90);
    }

    #[test]
    fn test_events_ignored_before_layout() {
        let mut picker = RangePicker::new(PickerConfig::default()).unwrap();
        let response = picker.event(&Event::PointerDown { x: 16.0, y: 16.0 });
        assert_eq!(response, EventResponse::Ignored);
    }

    #[test]
    fn test_thumb_radius_rejected_with_image() {
        let mut picker = laid_out(PickerConfig::new().thumb_image(ThumbImage::new(3, 20.0, 20.0)));
        let before = picker.config().clone();

        let err = picker.set_thumb_radius(12.0).unwrap_err();

        assert!(err.is_invalid_state());
        assert_eq!(picker.config(), &before);
    }

    #[test]
    fn test_thumb_radius_keeps_values_and_relayouts() {
        let mut picker = laid_out(PickerConfig::new().thumb_radius(10.0));
        picker.set_current_start_value(30);
        picker.set_current_end_value(80);
        picker.clear_dirty();

        picker.set_thumb_radius(20.0).unwrap();

        assert!(picker.needs_layout());
        assert_eq!(picker.geometry().unwrap().thumb_width, 40.0);
        assert_eq!(picker.current_start_value(), 30);
        assert_eq!(picker.current_end_value(), 80);
    }

    #[test]
    fn test_thumb_image_changes_track_bounds() {
        let mut picker = laid_out(PickerConfig::new().thumb_radius(10.0));
        picker.set_current_end_value(100);

        picker
            .set_thumb_image(Some(ThumbImage::new(9, 40.0, 30.0)))
            .unwrap();

        let geometry = picker.geometry().unwrap();
        assert_eq!(geometry.track_start_x, 20.0);
        assert_eq!(picker.thumb(Thumb::End).x, geometry.track_end_x);
        assert_eq!(picker.current_end_value(), 100);

        picker.set_thumb_image(None).unwrap();
        assert_eq!(picker.geometry().unwrap().thumb_width, 20.0);
    }

    #[test]
    fn test_measure_uses_thumb_height() {
        let picker = RangePicker::new(PickerConfig::new().thumb_radius(12.0)).unwrap();
        let size = picker.measure(Constraints::loose(Size::new(300.0, 100.0)));
        assert_eq!(size, Size::new(300.0, 24.0));
    }

    #[test]
    fn test_paint_draws_track_then_thumbs() {
        let mut picker = laid_out(PickerConfig::new().thumb_radius(10.0));
        picker.set_current_end_value(50);
        let mut canvas = PaintContext::new(Size::new(220.0, 80.0));

        picker.paint(&mut canvas);

        let commands = canvas.commands();
        assert_eq!(commands.len(), 7);
        assert!(commands[..3]
            .iter()
            .all(|c| matches!(c, DrawCommand::Line { .. })));
        assert!(commands[3..]
            .iter()
            .all(|c| matches!(c, DrawCommand::Circle { .. })));
        assert_eq!(
            commands[1].stroke().map(|s| s.width),
            Some(picker.config().highlight_track_width)
        );
    }

    #[test]
    fn test_selected_thumb_uses_touch_color() {
        let mut picker = laid_out(PickerConfig::new().thumb_radius(10.0));
        picker.event(&Event::PointerDown { x: 10.0, y: 40.0 });
        let mut canvas = PaintContext::new(Size::new(220.0, 80.0));

        picker.paint(&mut canvas);

        let touch_color = picker.config().highlight_thumb_on_touch_color;
        assert_eq!(
            canvas.commands()[4],
            DrawCommand::Circle {
                center: (10.0, 40.0),
                radius: 6.0,
                color: touch_color,
            }
        );
    }

    #[test]
    fn test_rigid_cancels_running_springs() {
        let mut picker = laid_out(PickerConfig::new().thumb_radius(10.0));
        picker.set_current_end_value(50);
        let end_x = picker.thumb(Thumb::End).x;
        picker.event(&Event::PointerDown { x: end_x, y: 40.0 });
        picker.event(&Event::PointerMove { x: end_x, y: 55.0 });
        picker.event(&Event::PointerUp { x: end_x, y: 55.0 });
        assert!(picker.is_animating());

        picker.set_elastic_behavior(ElasticBehavior::Rigid);

        assert!(!picker.is_animating());
        assert_eq!(picker.thumb(Thumb::End).y_offset, 0.0);
    }
}
