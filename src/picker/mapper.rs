//! Conversion between logical values and thumb pixel positions.
//!
//! Each thumb has its own usable pixel range, offset by one thumb width so the
//! two thumbs never overlap at the extremes:
//!
//! - start thumb: `[track_start_x, track_end_x - thumb_width]`
//! - end thumb:   `[track_start_x + thumb_width, track_end_x]`

use super::thumb::Thumb;
use crate::layout::TrackGeometry;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueMapper {
    min_value: i32,
    max_value: i32,
    geometry: TrackGeometry,
}

impl ValueMapper {
    /// Callers guarantee `min_value < max_value`.
    pub fn new(min_value: i32, max_value: i32, geometry: TrackGeometry) -> Self {
        Self {
            min_value,
            max_value,
            geometry,
        }
    }

    /// Pixel interval the anchor of `thumb` may occupy.
    pub fn usable_range(&self, thumb: Thumb) -> (f32, f32) {
        let g = &self.geometry;
        match thumb {
            Thumb::Start => (g.track_start_x, g.track_end_x - g.thumb_width),
            Thumb::End => (g.track_start_x + g.thumb_width, g.track_end_x),
        }
    }

    pub fn value_to_x(&self, value: i32, thumb: Thumb) -> f32 {
        let (lower, upper) = self.usable_range(thumb);
        let value = value.clamp(self.min_value, self.max_value);
        let fraction = (i64::from(value) - i64::from(self.min_value)) as f64 / self.span();
        (f64::from(lower) + fraction * (f64::from(upper) - f64::from(lower))) as f32
    }

    pub fn x_to_value(&self, x: f32, thumb: Thumb) -> i32 {
        let (lower, upper) = self.usable_range(thumb);
        if x <= lower {
            return self.min_value;
        }
        if x >= upper {
            return self.max_value;
        }
        let fraction = (f64::from(x) - f64::from(lower)) / (f64::from(upper) - f64::from(lower));
        let offset = (fraction * self.span()).round() as i64;
        let (min, max) = (i64::from(self.min_value), i64::from(self.max_value));
        (min + offset).clamp(min, max) as i32
    }

    fn span(&self) -> f64 {
        (i64::from(self.max_value) - i64::from(self.min_value)) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Size, ThumbExtent};

    fn geometry(width: f32, radius: f32) -> TrackGeometry {
        TrackGeometry::resolve(Size::new(width, 40.0), ThumbExtent::circle(radius))
            .expect("geometry resolves")
    }

    #[test]
    fn test_midpoint_of_start_range() {
        // Track 10..210, thumb 20px: start thumb travels 10..190
        let mapper = ValueMapper::new(0, 100, geometry(220.0, 10.0));
        assert_eq!(mapper.usable_range(Thumb::Start), (10.0, 190.0));
        assert_eq!(mapper.value_to_x(50, Thumb::Start), 100.0);
        assert_eq!(mapper.x_to_value(100.0, Thumb::Start), 50);
    }

    #[test]
    fn test_end_range_is_offset_by_thumb_width() {
        let mapper = ValueMapper::new(0, 100, geometry(220.0, 10.0));
        assert_eq!(mapper.usable_range(Thumb::End), (30.0, 210.0));
        assert_eq!(mapper.value_to_x(0, Thumb::End), 30.0);
        assert_eq!(mapper.value_to_x(100, Thumb::End), 210.0);
    }

    #[test]
    fn test_round_trip_every_value() {
        for (min, max) in [(0, 100), (-40, 7), (1_000, 1_003), (0, 1_000)] {
            let mapper = ValueMapper::new(min, max, geometry(333.0, 14.0));
            for thumb in Thumb::BOTH {
                for value in min..=max {
                    let x = mapper.value_to_x(value, thumb);
                    assert_eq!(
                        mapper.x_to_value(x, thumb),
                        value,
                        "{thumb:?} in {min}..={max}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_positions_clamp() {
        let mapper = ValueMapper::new(-5, 5, geometry(220.0, 10.0));
        assert_eq!(mapper.x_to_value(-1_000.0, Thumb::Start), -5);
        assert_eq!(mapper.x_to_value(1_000.0, Thumb::Start), 5);
        assert_eq!(mapper.x_to_value(30.0, Thumb::End), -5);
        assert_eq!(mapper.x_to_value(210.0, Thumb::End), 5);
    }

    #[test]
    fn test_out_of_range_values_clamp() {
        let mapper = ValueMapper::new(0, 10, geometry(220.0, 10.0));
        assert_eq!(mapper.value_to_x(-3, Thumb::Start), 10.0);
        assert_eq!(mapper.value_to_x(99, Thumb::Start), 190.0);
    }

    #[test]
    fn test_extreme_range_does_not_overflow() {
        let mapper = ValueMapper::new(i32::MIN, i32::MAX, geometry(220.0, 10.0));
        assert_eq!(mapper.x_to_value(10.0, Thumb::Start), i32::MIN);
        assert_eq!(mapper.x_to_value(190.0, Thumb::Start), i32::MAX);
        let middle = mapper.x_to_value(100.0, Thumb::Start);
        assert!(middle.abs() < 1_000);
    }
}
