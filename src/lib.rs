pub mod animation;
pub mod error;
pub mod invalidation;
pub mod layout;
pub mod picker;
pub mod renderer;
pub mod widgets;

pub use error::{PickerError, Result};
pub use picker::{RangePicker, RangePickerListener};

pub mod prelude {
    pub use crate::animation::{SpringConfig, SpringReturn};
    pub use crate::error::{PickerError, Result};
    pub use crate::invalidation::ChangeFlags;
    pub use crate::layout::{Constraints, Size, TrackGeometry};
    pub use crate::picker::{
        ElasticBehavior, PickerConfig, RangePicker, RangePickerListener, Thumb, ThumbState,
    };
    pub use crate::renderer::{Canvas, DrawCommand, PaintContext, Stroke, ThumbImage};
    pub use crate::widgets::{Color, Event, EventResponse, Widget};
}
