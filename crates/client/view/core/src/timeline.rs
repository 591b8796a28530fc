//! Column-aligned per-seat timeline reconstruction.
//!
//! The engine records moves as one interleaved log. The history strip instead
//! shows four rows, one per seat, where column index = round number. Padding
//! the seats before the dealer with one placeholder each is all the alignment
//! that is needed: from the dealer onward, every seat's n-th real entry falls
//! in round n.

use game_board::{History, Move, MoveAction, Play, Seat, SEAT_COUNT};

/// One cell of a seat's timeline row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineSlot {
    /// Round slot for a seat whose turn in round 0 comes after the dealer
    /// padding; nothing is drawn here.
    Placeholder,
    Pass,
    Play(Play),
}

impl TimelineSlot {
    /// True for slots backed by a real log entry.
    #[inline]
    pub const fn is_move(self) -> bool {
        !matches!(self, Self::Placeholder)
    }
}

/// One seat's ordered timeline row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineColumn {
    seat: Seat,
    slots: Vec<TimelineSlot>,
}

impl TimelineColumn {
    fn new(seat: Seat) -> Self {
        Self {
            seat,
            slots: Vec::new(),
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn slots(&self) -> &[TimelineSlot] {
        &self.slots
    }

    /// Number of rounds this seat has a slot for, real or placeholder.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Rebuilds the four per-seat rows from the interleaved move log.
///
/// Seats `0..dealer` each receive one leading placeholder, then every move is
/// appended to its seat's row in log order. Out-of-range seats cannot occur:
/// [`Seat`] is range-checked at construction, so a malformed log fails fast
/// upstream before it ever reaches this function.
pub fn build_columns(dealer: Seat, moves: &[Move]) -> [TimelineColumn; SEAT_COUNT] {
    let mut columns = Seat::ALL.map(TimelineColumn::new);

    // pad the seats that have not acted yet when round 0 begins
    for seat in &Seat::ALL[..dealer.index()] {
        columns[seat.index()].slots.push(TimelineSlot::Placeholder);
    }

    for entry in moves {
        let slot = match entry.action {
            MoveAction::Pass => TimelineSlot::Pass,
            MoveAction::Play(play) => TimelineSlot::Play(play),
        };
        columns[entry.seat.index()].slots.push(slot);
    }

    debug_assert_eq!(
        columns
            .iter()
            .flat_map(|column| column.slots.iter())
            .filter(|slot| slot.is_move())
            .count(),
        moves.len(),
        "every log entry must land in exactly one column"
    );
    debug_assert_eq!(
        columns
            .iter()
            .flat_map(|column| column.slots.iter())
            .filter(|slot| !slot.is_move())
            .count(),
        dealer.index(),
        "placeholder count must equal the dealer offset"
    );

    columns
}

/// Convenience wrapper taking the history as handed over by the engine.
pub fn build_columns_for(history: &History) -> [TimelineColumn; SEAT_COUNT] {
    build_columns(history.dealer, &history.moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_board::Rank;

    fn seat(index: u8) -> Seat {
        Seat::new(index).unwrap()
    }

    fn rank(value: u8) -> Rank {
        Rank::new(value).unwrap()
    }

    #[test]
    fn dealer_zero_inserts_no_placeholders() {
        let columns = build_columns(Seat::FIRST, &[]);
        assert!(columns.iter().all(TimelineColumn::is_empty));
    }

    #[test]
    fn empty_log_yields_only_placeholders() {
        let columns = build_columns(seat(3), &[]);
        assert_eq!(columns[0].slots(), &[TimelineSlot::Placeholder]);
        assert_eq!(columns[1].slots(), &[TimelineSlot::Placeholder]);
        assert_eq!(columns[2].slots(), &[TimelineSlot::Placeholder]);
        assert!(columns[3].is_empty());
    }

    #[test]
    fn aligns_the_documented_first_round() {
        // dealer = 1, log: s1 pass, s2 face-down play, s3 pass, s0 pass
        let moves = vec![
            Move::pass(seat(1)),
            Move::play(seat(2), rank(3), rank(5), true),
            Move::pass(seat(3)),
            Move::pass(seat(0)),
        ];
        let columns = build_columns(seat(1), &moves);

        assert_eq!(
            columns[0].slots(),
            &[TimelineSlot::Placeholder, TimelineSlot::Pass]
        );
        assert_eq!(columns[1].slots(), &[TimelineSlot::Pass]);
        assert!(matches!(
            columns[2].slots(),
            [TimelineSlot::Play(play)] if play.face_down
        ));
        assert_eq!(columns[3].slots(), &[TimelineSlot::Pass]);
    }

    #[test]
    fn slot_counts_match_the_log_for_every_dealer() {
        let moves = vec![
            Move::pass(seat(2)),
            Move::play(seat(3), rank(1), rank(1), false),
            Move::pass(seat(0)),
            Move::pass(seat(1)),
            Move::play(seat(2), rank(4), rank(2), true),
        ];

        for dealer in Seat::ALL {
            let columns = build_columns(dealer, &moves);
            let real: usize = columns
                .iter()
                .flat_map(|column| column.slots())
                .filter(|slot| slot.is_move())
                .count();
            let placeholders: usize = columns
                .iter()
                .flat_map(|column| column.slots())
                .filter(|slot| !slot.is_move())
                .count();
            assert_eq!(real, moves.len());
            assert_eq!(placeholders, dealer.index());
        }
    }

    #[test]
    fn round_index_is_the_slot_position() {
        let moves = vec![
            Move::pass(seat(1)),
            Move::pass(seat(2)),
            Move::pass(seat(3)),
            Move::pass(seat(0)),
            Move::pass(seat(1)),
        ];
        let columns = build_columns(seat(1), &moves);

        // seat 0's only real move happened in round 1
        assert_eq!(columns[0].slots()[1], TimelineSlot::Pass);
        assert_eq!(columns[0].slots()[0], TimelineSlot::Placeholder);
        // seat 1 has acted twice, rounds 0 and 1
        assert_eq!(columns[1].len(), 2);
    }
}
