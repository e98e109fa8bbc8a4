mod constraints;
mod track;

pub use constraints::{Constraints, Size};
pub use track::{ThumbExtent, TrackGeometry};
