//! A provider that replays precomputed snapshots.

use crate::board::{BoardProvider, BoardSnapshot};
use crate::error::BoardError;

/// [`BoardProvider`] backed by a sequence of snapshots computed upstream.
///
/// The engine serializes one snapshot per position in the game; this type
/// only moves a cursor across them. It holds no rules knowledge, which keeps
/// the viewer honest about where state mutation lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayBoard {
    states: Vec<BoardSnapshot>,
    cursor: usize,
}

impl ReplayBoard {
    /// Creates a replay positioned on the final snapshot, the way a finished
    /// game opens for review.
    pub fn new(states: Vec<BoardSnapshot>) -> Result<Self, BoardError> {
        if states.is_empty() {
            return Err(BoardError::EmptyReplay);
        }
        let cursor = states.len() - 1;
        Ok(Self { states, cursor })
    }

    /// Creates a replay positioned on the first snapshot.
    pub fn from_start(states: Vec<BoardSnapshot>) -> Result<Self, BoardError> {
        let mut replay = Self::new(states)?;
        replay.cursor = 0;
        Ok(replay)
    }

    /// Index of the snapshot currently presented.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl BoardProvider for ReplayBoard {
    fn snapshot(&self) -> &BoardSnapshot {
        &self.states[self.cursor]
    }

    fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    fn can_redo(&self) -> bool {
        self.cursor + 1 < self.states.len()
    }

    fn undo(&mut self) {
        if self.can_undo() {
            self.cursor -= 1;
        }
    }

    fn redo(&mut self) {
        if self.can_redo() {
            self.cursor += 1;
        }
    }
}
