//! End-to-end checks over the public surface: a replayed game driven through
//! a view session, composed into scenes.

use client_view_core::{
    build_columns, compose, Command, ElementKey, TextureKey, ViewConfig, ViewSession,
    VisibilityEngine,
};
use game_board::{BoardSnapshot, History, Move, Rank, ReplayBoard, Seat, Tile};

fn seat(index: u8) -> Seat {
    Seat::new(index).unwrap()
}

fn rank(value: u8) -> Rank {
    Rank::new(value).unwrap()
}

/// Opening, one pass, then a face-down play, as three replay positions.
fn replayed_game() -> ReplayBoard {
    let dealer = seat(1);

    let opening = {
        let mut snapshot = BoardSnapshot::empty(dealer);
        for rack in &mut snapshot.racks {
            for slot in 0..4 {
                rack.hand[slot] = Tile::Concealed(rank(1 + (slot as u8 % 2)));
            }
        }
        snapshot
    };

    let after_pass = {
        let mut snapshot = opening.clone();
        snapshot.history = History::new(dealer, vec![Move::pass(dealer)]);
        snapshot
    };

    let after_play = {
        let mut snapshot = after_pass.clone();
        snapshot.history = History::new(
            dealer,
            vec![
                Move::pass(dealer),
                Move::play(seat(2), rank(3), rank(5), true),
            ],
        );
        snapshot.racks[2].field[0] = Tile::Concealed(rank(5));
        snapshot.racks[2].hidden_field[0] = Tile::Concealed(rank(5));
        snapshot.racks[2].field[1] = Tile::Revealed(rank(3));
        snapshot.racks[2].hand[0] = Tile::Empty;
        snapshot.racks[2].hand[1] = Tile::Empty;
        snapshot
    };

    ReplayBoard::new(vec![opening, after_pass, after_play]).unwrap()
}

#[test]
fn placeholder_and_move_totals_hold_for_every_dealer() {
    let moves = vec![
        Move::pass(seat(1)),
        Move::play(seat(2), rank(3), rank(5), true),
        Move::pass(seat(3)),
        Move::pass(seat(0)),
    ];

    for dealer in Seat::ALL {
        let columns = build_columns(dealer, &moves);
        let real: usize = columns
            .iter()
            .map(|column| {
                column
                    .slots()
                    .iter()
                    .filter(|slot| slot.is_move())
                    .count()
            })
            .sum();
        let placeholders: usize = columns.iter().map(|column| column.len()).sum::<usize>() - real;
        assert_eq!(real, moves.len());
        assert_eq!(placeholders, dealer.index());
    }
}

#[test]
fn in_place_toggle_equals_a_fresh_compose() {
    let board = replayed_game();

    for viewer in Seat::ALL {
        for initial in [false, true] {
            let mut engine = VisibilityEngine::new(initial);
            let mut toggled = compose(&board, viewer, &mut engine);
            engine.toggle(&mut toggled);

            let mut fresh_engine = VisibilityEngine::new(!initial);
            let fresh = compose(&board, viewer, &mut fresh_engine);
            assert_eq!(toggled, fresh, "viewer {viewer} initial {initial}");
        }
    }
}

#[test]
fn stepping_history_walks_the_replay_both_ways() {
    let mut session = ViewSession::new(replayed_game(), ViewConfig::new(seat(0), true));
    let end_frame = session.scene().clone();

    // all the way back
    assert!(session.on_undo());
    assert!(session.on_undo());
    assert!(!session.on_undo(), "opening position cannot undo");
    let opening_frame = session.scene().clone();
    assert_ne!(opening_frame, end_frame);

    // and forward again
    assert!(session.on_redo());
    assert!(session.on_redo());
    assert!(!session.on_redo(), "final position cannot redo");
    assert_eq!(session.scene(), &end_frame);
}

#[test]
fn hidden_information_is_sealed_when_hide_is_requested() {
    let config = ViewConfig::from_params("0", Some("1")).unwrap();
    let session = ViewSession::new(replayed_game(), config);

    // every dark face in the frame belongs to an opponent and stays hidden
    let dark: Vec<_> = session
        .scene()
        .iter()
        .filter(|element| {
            matches!(
                element.key,
                ElementKey::Texture(TextureKey::TileFaceDark(_))
            )
        })
        .collect();
    assert!(!dark.is_empty());
    assert!(dark.iter().all(|element| !element.shown));
}

#[test]
fn toggling_through_the_session_reveals_and_conceals() {
    let config = ViewConfig::from_params("0", Some("1")).unwrap();
    let mut session = ViewSession::new(replayed_game(), config);
    let sealed = session.scene().clone();

    assert!(session.activate(Command::ToggleReveal));
    let revealed = session.scene().clone();
    assert_ne!(sealed, revealed);
    assert!(session
        .scene()
        .iter()
        .filter(|element| matches!(
            element.key,
            ElementKey::Texture(TextureKey::TileFaceDark(_))
        ))
        .all(|element| element.shown));

    assert!(session.activate(Command::ToggleReveal));
    assert_eq!(session.scene(), &sealed);
}

#[test]
fn rebuilds_read_state_fresh_from_the_provider() {
    let mut session = ViewSession::new(replayed_game(), ViewConfig::new(seat(2), true));

    // the final position shows seat 2's revealed attack tile
    let has_attack_face = |session: &ViewSession<ReplayBoard>| {
        session.scene().iter().any(|element| {
            element.key == ElementKey::Texture(TextureKey::TileFace(rank(3)))
        })
    };
    assert!(has_attack_face(&session));

    session.on_undo();
    assert!(
        !has_attack_face(&session),
        "undone position must not show the later play"
    );
}
