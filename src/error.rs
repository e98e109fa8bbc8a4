use thiserror::Error;

/// Rejections reported by the picker's configuration setters.
///
/// A setter that returns an error leaves the picker untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PickerError {
    #[error("stretch range must be a non-negative number, got {0}")]
    InvalidStretchRange(f32),
    #[error("thumb radius must be positive, got {0}")]
    NonPositiveRadius(f32),
    #[error("track width must be a non-negative number, got {0}")]
    InvalidTrackWidth(f32),
    #[error("spring stiffness must be positive, got {0}")]
    NonPositiveStiffness(f32),
    #[error("damping ratio must be non-negative, got {0}")]
    NegativeDampingRatio(f32),
    #[error("min value {min} must be smaller than max value {max}")]
    InvertedRange { min: i32, max: i32 },
    #[error("thumb image must have a positive size, got {width}x{height}")]
    EmptyThumbImage { width: f32, height: f32 },
    #[error("thumb radius can not be set while an image is used as thumb")]
    RadiusWithThumbImage,
}

impl PickerError {
    /// True when the request was well-formed but the picker's current state forbids it.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, PickerError::RadiusWithThumbImage)
    }
}

pub type Result<T> = std::result::Result<T, PickerError>;
