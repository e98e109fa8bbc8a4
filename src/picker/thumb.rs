/// Which of the two thumbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thumb {
    Start,
    End,
}

impl Thumb {
    pub const BOTH: [Thumb; 2] = [Thumb::Start, Thumb::End];

    pub fn is_start(self) -> bool {
        self == Thumb::Start
    }

    pub fn other(self) -> Thumb {
        match self {
            Thumb::Start => Thumb::End,
            Thumb::End => Thumb::Start,
        }
    }
}

/// Position of one thumb. `x` is the source of truth for its logical value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbState {
    /// Anchor x along the track, in pixels
    pub x: f32,
    /// Vertical displacement from the baseline; 0 means resting on the track
    pub y_offset: f32,
    /// True while the thumb is being dragged
    pub selected: bool,
}

/// One value per thumb, addressed by [`Thumb`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerThumb<T> {
    pub start: T,
    pub end: T,
}

impl<T> PerThumb<T> {
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    pub fn get(&self, thumb: Thumb) -> &T {
        match thumb {
            Thumb::Start => &self.start,
            Thumb::End => &self.end,
        }
    }

    pub fn get_mut(&mut self, thumb: Thumb) -> &mut T {
        match thumb {
            Thumb::Start => &mut self.start,
            Thumb::End => &mut self.end,
        }
    }
}

impl PerThumb<ThumbState> {
    /// Keep the thumbs at least `thumb_width` apart by pushing the thumb that
    /// was not just moved out of the way of `moved`.
    pub fn enforce_ordering(&mut self, moved: Thumb, thumb_width: f32) {
        match moved {
            Thumb::Start => self.end.x = self.end.x.max(self.start.x + thumb_width),
            Thumb::End => self.start.x = self.start.x.min(self.end.x - thumb_width),
        }
    }

    /// Distance between the two anchors.
    pub fn separation(&self) -> f32 {
        self.end.x - self.start.x
    }
}
