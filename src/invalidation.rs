use bitflags::bitflags;

bitflags! {
    /// Flags indicating what aspects of rendering need to be updated
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct ChangeFlags: u8 {
        /// Widget needs layout recalculation (thumb size changed)
        const NEEDS_LAYOUT = 0b01;
        /// Widget needs repainting (thumbs moved, colors changed, spring ticked)
        const NEEDS_PAINT  = 0b10;
    }
}

impl ChangeFlags {
    /// Flags raised by anything that changes the measured size of the widget.
    pub const RELAYOUT: ChangeFlags = ChangeFlags::NEEDS_LAYOUT.union(ChangeFlags::NEEDS_PAINT);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relayout_implies_paint() {
        assert!(ChangeFlags::RELAYOUT.contains(ChangeFlags::NEEDS_PAINT));
        assert!(ChangeFlags::RELAYOUT.contains(ChangeFlags::NEEDS_LAYOUT));
        assert!(ChangeFlags::default().is_empty());
    }
}
