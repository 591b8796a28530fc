//! Seat identifiers and the viewer-relative rotation primitive.

use std::fmt;

use crate::error::BoardError;

/// Number of seats at the table.
pub const SEAT_COUNT: usize = 4;

/// Absolute table position in `[0, 3]`.
///
/// Construction is the only range check the viewer ever needs: once a `Seat`
/// exists it is valid, so indexing per-seat arrays with it cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat(u8);

impl Seat {
    /// Seat 0, the reference position for dealer padding.
    pub const FIRST: Self = Self(0);

    /// All seats in table order.
    pub const ALL: [Self; SEAT_COUNT] = [Self(0), Self(1), Self(2), Self(3)];

    /// Creates a seat, rejecting indices outside `[0, 3]`.
    pub const fn new(index: u8) -> Result<Self, BoardError> {
        if index < SEAT_COUNT as u8 {
            Ok(Self(index))
        } else {
            Err(BoardError::SeatOutOfRange { index })
        }
    }

    /// Array index of this seat.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Mod-4 rotation primitive: the display offset of this seat in the
    /// reference frame of `viewer`.
    ///
    /// For any fixed `viewer` the mapping is a bijection on the four seats,
    /// and `viewer.relative_to(viewer)` is always 0.
    #[inline]
    pub const fn relative_to(self, viewer: Self) -> u8 {
        (self.0 + SEAT_COUNT as u8 - viewer.0) % SEAT_COUNT as u8
    }
}

impl Default for Seat {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u8> for Seat {
    type Error = BoardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0 + 1)
    }
}
