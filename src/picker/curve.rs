//! Track shape generation.
//!
//! The track is split at the two thumb anchors into a left, middle and right
//! segment. The middle one is the selected range and is stroked with the
//! highlight style; the outer two use the normal style.

use super::config::ElasticBehavior;
use super::thumb::{PerThumb, ThumbState};
use crate::layout::TrackGeometry;

/// Geometry of one drawable segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentShape {
    Line {
        from: (f32, f32),
        to: (f32, f32),
    },
    Cubic {
        from: (f32, f32),
        ctrl1: (f32, f32),
        ctrl2: (f32, f32),
        to: (f32, f32),
    },
}

impl SegmentShape {
    pub fn from(&self) -> (f32, f32) {
        match self {
            SegmentShape::Line { from, .. } | SegmentShape::Cubic { from, .. } => *from,
        }
    }

    pub fn to(&self) -> (f32, f32) {
        match self {
            SegmentShape::Line { to, .. } | SegmentShape::Cubic { to, .. } => *to,
        }
    }

    /// Cubic whose two control points share the horizontal midpoint, so the
    /// curve leaves `from` and enters `to` flat.
    fn s_curve(from: (f32, f32), to: (f32, f32)) -> Self {
        let mid_x = (from.0 + to.0) / 2.0;
        SegmentShape::Cubic {
            from,
            ctrl1: (mid_x, from.1),
            ctrl2: (mid_x, to.1),
            to,
        }
    }
}

/// Which stroke a segment is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRole {
    Normal,
    Highlight,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSegment {
    pub shape: SegmentShape,
    pub role: SegmentRole,
}

/// The three segments making up the track for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPath {
    pub left: TrackSegment,
    pub middle: TrackSegment,
    pub right: TrackSegment,
}

impl TrackPath {
    pub fn segments(&self) -> [&TrackSegment; 3] {
        [&self.left, &self.middle, &self.right]
    }

    /// True when every segment is a straight horizontal line.
    pub fn is_flat(&self) -> bool {
        self.segments().iter().all(|segment| match segment.shape {
            SegmentShape::Line { from, to } => from.1 == to.1,
            SegmentShape::Cubic { .. } => false,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StretchCurve<'a> {
    geometry: &'a TrackGeometry,
    behavior: ElasticBehavior,
}

impl<'a> StretchCurve<'a> {
    pub fn new(geometry: &'a TrackGeometry, behavior: ElasticBehavior) -> Self {
        Self { geometry, behavior }
    }

    /// Where a thumb is drawn. Rigid tracks keep thumbs on the baseline even
    /// while a stored offset is still non-zero.
    pub fn anchor(&self, thumb: &ThumbState) -> (f32, f32) {
        match self.behavior {
            ElasticBehavior::Rigid => (thumb.x, self.geometry.track_y),
            ElasticBehavior::Linear | ElasticBehavior::Cubic => {
                (thumb.x, self.geometry.track_y + thumb.y_offset)
            }
        }
    }

    pub fn track_path(&self, thumbs: &PerThumb<ThumbState>) -> TrackPath {
        let track_y = self.geometry.track_y;
        let track_start = (0.0, track_y);
        let track_end = (self.geometry.width, track_y);

        let resting = thumbs.start.y_offset == 0.0 && thumbs.end.y_offset == 0.0;
        if resting || self.behavior == ElasticBehavior::Rigid {
            return Self::assemble(
                SegmentShape::Line {
                    from: track_start,
                    to: (thumbs.start.x, track_y),
                },
                SegmentShape::Line {
                    from: (thumbs.start.x, track_y),
                    to: (thumbs.end.x, track_y),
                },
                SegmentShape::Line {
                    from: (thumbs.end.x, track_y),
                    to: track_end,
                },
            );
        }

        let start = self.anchor(&thumbs.start);
        let end = self.anchor(&thumbs.end);

        match self.behavior {
            ElasticBehavior::Cubic => Self::assemble(
                SegmentShape::s_curve(track_start, start),
                SegmentShape::s_curve(start, end),
                SegmentShape::s_curve(end, track_end),
            ),
            ElasticBehavior::Linear | ElasticBehavior::Rigid => Self::assemble(
                SegmentShape::Line {
                    from: track_start,
                    to: start,
                },
                SegmentShape::Line {
                    from: start,
                    to: end,
                },
                SegmentShape::Line {
                    from: end,
                    to: track_end,
                },
            ),
        }
    }

    fn assemble(left: SegmentShape, middle: SegmentShape, right: SegmentShape) -> TrackPath {
        TrackPath {
            left: TrackSegment {
                shape: left,
                role: SegmentRole::Normal,
            },
            middle: TrackSegment {
                shape: middle,
                role: SegmentRole::Highlight,
            },
            right: TrackSegment {
                shape: right,
                role: SegmentRole::Normal,
            },
        }
    }
}
