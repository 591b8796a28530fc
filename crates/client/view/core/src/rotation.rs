//! Viewer-relative seat placement.

use std::f32::consts::FRAC_PI_2;

use game_board::Seat;

/// Where a seat lands on screen once the table is rotated so the viewer sits
/// at the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplaySlot {
    /// The viewer's own seat, nearest the bottom edge.
    Front,
    Right,
    /// Opposite the viewer.
    Far,
    Left,
}

impl DisplaySlot {
    /// Slots in rotation order, indexed by the mod-4 seat offset.
    pub const ALL: [Self; 4] = [Self::Front, Self::Right, Self::Far, Self::Left];

    /// The slot `seat` occupies from `viewer`'s perspective.
    ///
    /// Delegates to the engine's rotation primitive, so
    /// `DisplaySlot::of(viewer, viewer)` is always [`DisplaySlot::Front`].
    pub fn of(seat: Seat, viewer: Seat) -> Self {
        Self::ALL[seat.relative_to(viewer) as usize]
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Front => 0,
            Self::Right => 1,
            Self::Far => 2,
            Self::Left => 3,
        }
    }

    /// Rotation applied to this slot's tile rows, in radians (-90° per slot).
    pub fn rotation(self) -> f32 {
        -(self.index() as f32) * FRAC_PI_2
    }

    /// Unit offset from the board centre toward this slot.
    pub const fn unit_offset(self) -> (f32, f32) {
        match self {
            Self::Front => (0.0, 1.0),
            Self::Right => (1.0, 0.0),
            Self::Far => (0.0, -1.0),
            Self::Left => (-1.0, 0.0),
        }
    }
}
