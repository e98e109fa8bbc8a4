//! Picker configuration and its validation rules.

use crate::animation::SpringConfig;
use crate::error::{PickerError, Result};
use crate::layout::ThumbExtent;
use crate::renderer::ThumbImage;
use crate::widgets::Color;

/// How the track deforms while a thumb is pulled off the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElasticBehavior {
    /// Straight segments meeting at the thumbs
    Linear,
    /// Smooth S-shaped Bezier segments
    #[default]
    Cubic,
    /// Never deforms; thumbs stay on the baseline
    Rigid,
}

/// Every tunable of the picker. Units are surface pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    /// Maximum vertical deflection of a dragged thumb
    pub stretch_range: f32,
    /// Radius of the default circular thumb
    pub thumb_radius: f32,
    /// Replaces the circular thumb when set
    pub thumb_image: Option<ThumbImage>,
    pub normal_track_width: f32,
    pub highlight_track_width: f32,
    pub normal_track_color: Color,
    pub highlight_track_color: Color,
    /// Inner fill of a circular thumb while it is being dragged
    pub highlight_thumb_on_touch_color: Color,
    pub spring: SpringConfig,
    pub min_value: i32,
    pub max_value: i32,
    pub elastic_behavior: ElasticBehavior,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            stretch_range: 24.0,
            thumb_radius: 16.0,
            thumb_image: None,
            normal_track_width: 2.0,
            highlight_track_width: 4.0,
            normal_track_color: Color::GRAY,
            highlight_track_color: Color::from_argb(0xFF38_ACEC),
            highlight_thumb_on_touch_color: Color::from_argb(0xFF82_CAFA),
            spring: SpringConfig::DEFAULT,
            min_value: 0,
            max_value: 100,
            elastic_behavior: ElasticBehavior::Cubic,
        }
    }
}

impl PickerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stretch_range(mut self, stretch_range: f32) -> Self {
        self.stretch_range = stretch_range;
        self
    }

    pub fn thumb_radius(mut self, radius: f32) -> Self {
        self.thumb_radius = radius;
        self
    }

    pub fn thumb_image(mut self, image: ThumbImage) -> Self {
        self.thumb_image = Some(image);
        self
    }

    pub fn normal_track_width(mut self, width: f32) -> Self {
        self.normal_track_width = width;
        self
    }

    pub fn highlight_track_width(mut self, width: f32) -> Self {
        self.highlight_track_width = width;
        self
    }

    pub fn normal_track_color(mut self, color: Color) -> Self {
        self.normal_track_color = color;
        self
    }

    pub fn highlight_track_color(mut self, color: Color) -> Self {
        self.highlight_track_color = color;
        self
    }

    pub fn highlight_thumb_on_touch_color(mut self, color: Color) -> Self {
        self.highlight_thumb_on_touch_color = color;
        self
    }

    pub fn damping_ratio(mut self, damping_ratio: f32) -> Self {
        self.spring.damping_ratio = damping_ratio;
        self
    }

    pub fn stiffness(mut self, stiffness: f32) -> Self {
        self.spring.stiffness = stiffness;
        self
    }

    pub fn range(mut self, min_value: i32, max_value: i32) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    pub fn elastic_behavior(mut self, behavior: ElasticBehavior) -> Self {
        self.elastic_behavior = behavior;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_stretch_range(self.stretch_range)?;
        validate_radius(self.thumb_radius)?;
        if let Some(image) = &self.thumb_image {
            validate_image(image)?;
        }
        validate_track_width(self.normal_track_width)?;
        validate_track_width(self.highlight_track_width)?;
        validate_damping_ratio(self.spring.damping_ratio)?;
        validate_stiffness(self.spring.stiffness)?;
        validate_range(self.min_value, self.max_value)
    }

    /// Size of a thumb as laid out: the image when one is set, else the circle.
    pub fn thumb_extent(&self) -> ThumbExtent {
        match &self.thumb_image {
            Some(image) => ThumbExtent::rect(image.width, image.height),
            None => ThumbExtent::circle(self.thumb_radius),
        }
    }
}

// `!(x >= 0.0)` also rejects NaN.

pub(crate) fn validate_stretch_range(value: f32) -> Result<()> {
    if !(value >= 0.0) || !value.is_finite() {
        return Err(PickerError::InvalidStretchRange(value));
    }
    Ok(())
}

pub(crate) fn validate_radius(value: f32) -> Result<()> {
    if !(value > 0.0) || !value.is_finite() {
        return Err(PickerError::NonPositiveRadius(value));
    }
    Ok(())
}

pub(crate) fn validate_image(image: &ThumbImage) -> Result<()> {
    if !(image.width > 0.0 && image.height > 0.0)
        || !image.width.is_finite()
        || !image.height.is_finite()
    {
        return Err(PickerError::EmptyThumbImage {
            width: image.width,
            height: image.height,
        });
    }
    Ok(())
}

pub(crate) fn validate_track_width(value: f32) -> Result<()> {
    if !(value >= 0.0) || !value.is_finite() {
        return Err(PickerError::InvalidTrackWidth(value));
    }
    Ok(())
}

pub(crate) fn validate_damping_ratio(value: f32) -> Result<()> {
    if !(value >= 0.0) || !value.is_finite() {
        return Err(PickerError::NegativeDampingRatio(value));
    }
    Ok(())
}

pub(crate) fn validate_stiffness(value: f32) -> Result<()> {
    if !(value > 0.0) || !value.is_finite() {
        return Err(PickerError::NonPositiveStiffness(value));
    }
    Ok(())
}

pub(crate) fn validate_range(min_value: i32, max_value: i32) -> Result<()> {
    if min_value >= max_value {
        return Err(PickerError::InvertedRange {
            min: min_value,
            max: max_value,
        });
    }
    Ok(())
}
