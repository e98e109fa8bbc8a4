//! Pixel geometry of the track, derived from the surface size and the thumb size.

use super::Size;

/// Half extents of a thumb around its anchor point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbExtent {
    pub half_width: f32,
    pub half_height: f32,
}

impl ThumbExtent {
    pub fn circle(radius: f32) -> Self {
        Self {
            half_width: radius,
            half_height: radius,
        }
    }

    pub fn rect(width: f32, height: f32) -> Self {
        Self {
            half_width: width.abs() / 2.0,
            half_height: height.abs() / 2.0,
        }
    }

    pub fn width(&self) -> f32 {
        self.half_width * 2.0
    }

    pub fn height(&self) -> f32 {
        self.half_height * 2.0
    }
}

/// Where the thumbs may travel and where the baseline sits.
///
/// Thumb anchors move within `[track_start_x, track_end_x]`, which is inset by
/// half a thumb from each surface edge so a thumb at either extreme stays
/// fully visible. The track itself is drawn across the whole surface width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub track_start_x: f32,
    pub track_end_x: f32,
    pub track_y: f32,
    pub width: f32,
    pub height: f32,
    pub thumb_width: f32,
}

impl TrackGeometry {
    /// Derive the geometry for a surface, or `None` while the surface is too
    /// small to hold both thumbs side by side.
    pub fn resolve(size: Size, thumb: ThumbExtent) -> Option<Self> {
        if size.is_empty() || !size.width.is_finite() || !size.height.is_finite() {
            return None;
        }

        let geometry = Self {
            track_start_x: thumb.half_width,
            track_end_x: size.width - thumb.half_width,
            track_y: size.height / 2.0,
            width: size.width,
            height: size.height,
            thumb_width: thumb.width(),
        };

        if geometry.track_start_x < geometry.track_end_x
            && geometry.thumb_width <= geometry.track_length()
        {
            Some(geometry)
        } else {
            None
        }
    }

    pub fn track_length(&self) -> f32 {
        self.track_end_x - self.track_start_x
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_circle_thumb() {
        let geometry = TrackGeometry::resolve(Size::new(220.0, 40.0), ThumbExtent::circle(10.0))
            .expect("surface is large enough");

        assert_eq!(geometry.track_start_x, 10.0);
        assert_eq!(geometry.track_end_x, 210.0);
        assert_eq!(geometry.track_y, 20.0);
        assert_eq!(geometry.thumb_width, 20.0);
        assert_eq!(geometry.track_length(), 200.0);
    }

    #[test]
    fn test_resolve_image_thumb() {
        let geometry =
            TrackGeometry::resolve(Size::new(300.0, 60.0), ThumbExtent::rect(24.0, 40.0))
                .expect("surface is large enough");

        assert_eq!(geometry.track_start_x, 12.0);
        assert_eq!(geometry.track_end_x, 288.0);
        assert_eq!(geometry.thumb_width, 24.0);
    }

    #[test]
    fn test_unsized_surface_is_unresolved() {
        assert!(TrackGeometry::resolve(Size::zero(), ThumbExtent::circle(16.0)).is_none());
    }

    #[test]
    fn test_surface_narrower_than_two_thumbs_is_unresolved() {
        // Track would be 28px long, thumbs are 32px wide
        assert!(TrackGeometry::resolve(Size::new(60.0, 40.0), ThumbExtent::circle(16.0)).is_none());
        assert!(TrackGeometry::resolve(Size::new(64.0, 40.0), ThumbExtent::circle(16.0)).is_some());
    }
}
