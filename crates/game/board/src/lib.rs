//! Data model and command surface of the external game-state engine.
//!
//! `game-board` defines the types the viewer consumes: seats, tiles, the move
//! log, and per-seat racks, together with the [`BoardProvider`] trait through
//! which the engine is observed and stepped. The rules of the game (legality,
//! scoring, turn advancement) live upstream; nothing in this crate mutates
//! tile data.
pub mod board;
pub mod error;
pub mod moves;
pub mod replay;
pub mod seat;
pub mod tile;

pub use board::{BoardProvider, BoardSnapshot, Rack, RACK_SIZE};
pub use error::BoardError;
pub use moves::{History, Move, MoveAction, Play};
pub use replay::ReplayBoard;
pub use seat::{Seat, SEAT_COUNT};
pub use tile::{Rank, Tile};
