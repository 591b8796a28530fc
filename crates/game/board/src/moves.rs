//! The move log as recorded by the engine.

use crate::seat::Seat;
use crate::tile::Rank;

/// A tile-play: one attack tile laid face-up and one block tile that may have
/// been laid face-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Play {
    /// The attacking tile, always shown.
    pub attack: Rank,
    /// The blocking tile.
    pub block: Rank,
    /// Whether the block was laid face-down.
    pub face_down: bool,
}

/// What a seat did on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveAction {
    Pass,
    Play(Play),
}

/// One entry of the move log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Seat that made the move.
    pub seat: Seat,
    pub action: MoveAction,
}

impl Move {
    pub const fn pass(seat: Seat) -> Self {
        Self {
            seat,
            action: MoveAction::Pass,
        }
    }

    pub const fn play(seat: Seat, attack: Rank, block: Rank, face_down: bool) -> Self {
        Self {
            seat,
            action: MoveAction::Play(Play {
                attack,
                block,
                face_down,
            }),
        }
    }
}

/// The complete history handed over by the engine: who dealt, and every move
/// in true chronological order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct History {
    /// The seat that acts first in round 0.
    pub dealer: Seat,
    /// Moves in the order they were played.
    pub moves: Vec<Move>,
}

impl History {
    pub const fn new(dealer: Seat, moves: Vec<Move>) -> Self {
        Self { dealer, moves }
    }
}
