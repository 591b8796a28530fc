//! Construction errors for board data.
//!
//! Out-of-range indices signal a broken upstream engine, not a condition the
//! viewer can recover from; constructors reject them so downstream code never
//! sees an invalid seat or rank.

/// Errors raised while constructing board data from upstream values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardError {
    /// Seat index outside the fixed table range.
    #[error("seat index {index} outside the table range 0..=3")]
    SeatOutOfRange { index: u8 },

    /// Tile rank outside the playable range.
    #[error("tile rank {value} outside the playable range 1..=9")]
    RankOutOfRange { value: u8 },

    /// A replay needs at least the initial snapshot to stand on.
    #[error("replay requires at least one snapshot")]
    EmptyReplay,
}
