//! Board snapshots and the provider surface the viewer consumes.

use crate::moves::History;
use crate::seat::{Seat, SEAT_COUNT};
use crate::tile::Tile;

/// Fixed length of every per-seat tile array.
pub const RACK_SIZE: usize = 8;

/// One seat's tiles: the played field, the concealed half of the field, and
/// the hand.
///
/// `field` and `hidden_field` are parallel: a concealed slot in `field` finds
/// its true face at the same index of `hidden_field`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rack {
    pub field: [Tile; RACK_SIZE],
    pub hidden_field: [Tile; RACK_SIZE],
    pub hand: [Tile; RACK_SIZE],
}

impl Rack {
    /// A rack with every slot unoccupied.
    pub const fn empty() -> Self {
        Self {
            field: [Tile::Empty; RACK_SIZE],
            hidden_field: [Tile::Empty; RACK_SIZE],
            hand: [Tile::Empty; RACK_SIZE],
        }
    }
}

/// Full read-only view of the engine's state at one point in history.
///
/// The viewer reads a fresh snapshot on every rebuild and never caches or
/// mutates it.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    pub racks: [Rack; SEAT_COUNT],
    pub history: History,
}

impl BoardSnapshot {
    pub const fn new(racks: [Rack; SEAT_COUNT], history: History) -> Self {
        Self { racks, history }
    }

    /// An empty table with the given dealer and no moves.
    pub fn empty(dealer: Seat) -> Self {
        Self {
            racks: [Rack::empty(); SEAT_COUNT],
            history: History::new(dealer, Vec::new()),
        }
    }

    /// The rack belonging to `seat`.
    #[inline]
    pub fn rack(&self, seat: Seat) -> &Rack {
        &self.racks[seat.index()]
    }
}

/// Command surface of the external game-state engine.
///
/// Reads are cheap and side-effect free. `undo`/`redo` step the engine's own
/// history cursor; calling them without the matching capability is a no-op by
/// contract, so callers check `can_undo`/`can_redo` first and skip their own
/// follow-up work when the command cannot change state.
pub trait BoardProvider {
    /// Current state of the table.
    fn snapshot(&self) -> &BoardSnapshot;

    fn can_undo(&self) -> bool;
    fn can_redo(&self) -> bool;

    /// Steps one move back in history. No-op when `can_undo` is false.
    fn undo(&mut self);

    /// Steps one move forward in history. No-op when `can_redo` is false.
    fn redo(&mut self);
}
