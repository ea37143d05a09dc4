/// End-to-end checks of the board interaction state machine against the
/// shakmaty oracle.

mod common;

use board_state::{Arrow, BoardEvent, EventOutput, InteractionError, LastMove, SelectionState, Theme};
use chess_core::{LegalMove, MoveOracle};
use common::{from_fen, run, sq, start, ORACLE};
use shakmaty::{Color, Piece, Role, Square};

#[test]
fn test_click_e2_then_e4() {
    let (state, outputs) = run(start(), vec![BoardEvent::Click(Square::E2)]);
    assert_eq!(outputs[0], EventOutput::Selection(Ok(Square::E2)));

    let dests = state.selection().destinations();
    assert!(dests.contains(&LegalMove { to: Square::E3, is_capture: false }));
    assert!(dests.contains(&LegalMove { to: Square::E4, is_capture: false }));

    let (state, outputs) = run(state, vec![BoardEvent::Click(Square::E4)]);
    assert!(outputs[0].accepted());
    assert_eq!(
        state.position().fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
    );
    assert_eq!(state.last_move(), Some(LastMove { from: Square::E2, to: Square::E4 }));
    assert_eq!(state.selection().armed(), None);
}

#[test]
fn test_idempotent_rearm() {
    let (first, _) = run(start(), vec![BoardEvent::Click(Square::G1)]);
    let (second, outputs) = run(first.clone(), vec![BoardEvent::Click(Square::G1)]);

    assert_eq!(outputs[0], EventOutput::Selection(Ok(Square::G1)));
    assert_eq!(first.selection(), second.selection());
    assert_eq!(second.selection().armed(), Some(Square::G1));
}

#[test]
fn test_move_atomicity() {
    let (state, outputs) = run(
        start(),
        vec![
            BoardEvent::Click(Square::D2),
            BoardEvent::RightClick(Square::A6),
            BoardEvent::RightClick(Square::H6),
            BoardEvent::ArrowsChanged(vec![Arrow::new(Square::D2, Square::D4)]),
            BoardEvent::Drop { from: Square::D2, to: Square::D4, piece: None },
        ],
    );

    assert!(outputs[4].accepted());
    assert_eq!(*state.selection(), SelectionState::default());
    assert!(state.annotations().is_empty());
    assert_eq!(state.last_move(), Some(LastMove { from: Square::D2, to: Square::D4 }));
    // Arrows are independent of moves
    assert_eq!(state.arrows(), &[Arrow::new(Square::D2, Square::D4)]);
}

#[test]
fn test_illegal_moves_leave_position_alone() {
    let pairs = [("e2", "e5"), ("g1", "g3"), ("e7", "e5"), ("a1", "a3"), ("e4", "e5")];
    for (from, to) in pairs {
        let before = start();
        let (after, outputs) = run(
            before.clone(),
            vec![BoardEvent::Drop { from: sq(from), to: sq(to), piece: None }],
        );
        assert_eq!(
            outputs[0],
            EventOutput::Move(Err(InteractionError::IllegalMove { from: sq(from), to: sq(to) }))
        );
        assert_eq!(after.position(), before.position(), "{from}{to}");
    }
}

#[test]
fn test_illegal_drop_keeps_selection_and_annotations() {
    let (state, _) = run(
        start(),
        vec![BoardEvent::Click(Square::E2), BoardEvent::RightClick(Square::C6)],
    );
    let (after, outputs) = run(
        state.clone(),
        vec![BoardEvent::Drop { from: Square::E2, to: Square::E6, piece: None }],
    );
    assert!(!outputs[0].accepted());
    assert_eq!(after, state);
}

#[test]
fn test_capture_flags_match_board() {
    // Italian-style middlegame with captures available for several pieces
    let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/3P1N2/PPP2PPP/RNBQK2R w KQkq - 1 5";
    let state = from_fen(fen);
    let mover = Color::White;

    for square in Square::ALL {
        let (armed, _) = run(state.clone(), vec![BoardEvent::Click(square)]);
        for dest in armed.selection().destinations() {
            let occupant = ORACLE.piece_at(armed.position(), dest.to).unwrap();
            let expected = occupant.is_some_and(|p| p.color != mover);
            assert_eq!(dest.is_capture, expected, "{square} -> {}", dest.to);
        }
    }

    let (armed, _) = run(state, vec![BoardEvent::Click(Square::C4)]);
    assert!(armed
        .selection()
        .destinations()
        .contains(&LegalMove { to: Square::F7, is_capture: true }));
}

#[test]
fn test_arrow_suppression() {
    let arrows = vec![Arrow::new(Square::E2, Square::E4), Arrow::new(Square::E2, Square::E4)];
    let (state, outputs) = run(
        start(),
        vec![
            BoardEvent::ArrowsChanged(arrows.clone()),
            BoardEvent::ArrowsChanged(arrows.clone()),
        ],
    );
    assert_eq!(outputs[0], EventOutput::Arrows(Ok(())));
    assert_eq!(outputs[1], EventOutput::Arrows(Err(InteractionError::StaleArrowUpdate)));
    assert_eq!(state.arrows(), arrows.as_slice());
}

#[test]
fn test_annotation_toggle_and_left_click_clear() {
    let (state, outputs) = run(
        start(),
        vec![
            BoardEvent::RightClick(Square::F5),
            BoardEvent::RightClick(Square::F5),
            BoardEvent::RightClick(Square::F5),
            BoardEvent::RightClick(Square::B3),
        ],
    );
    assert_eq!(outputs[2], EventOutput::Annotation { square: Square::F5, annotated: true });
    assert!(state.annotations().is_annotated(Square::F5));
    assert_eq!(state.annotations().squares().count(), 2);

    // Any left click dismisses all annotations, even on an empty square
    let (state, _) = run(state, vec![BoardEvent::Click(Square::D5)]);
    assert!(state.annotations().is_empty());
}

#[test]
fn test_drag_promotion_without_override() {
    let state = from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
    let pawn = Piece { color: Color::White, role: Role::Pawn };

    let (state, outputs) = run(
        state,
        vec![
            BoardEvent::PromotionQuery { from: Square::E7, to: Square::E8, piece: Some(pawn) },
            BoardEvent::Drop { from: Square::E7, to: Square::E8, piece: Some(pawn) },
        ],
    );
    assert_eq!(outputs[0], EventOutput::PromotionNeeded(true));
    let EventOutput::Move(Ok(record)) = &outputs[1] else {
        panic!("promotion drop rejected: {:?}", outputs[1]);
    };
    assert_eq!(record.promotion, Some(Role::Queen));
    assert_eq!(
        ORACLE.piece_at(state.position(), Square::E8).unwrap(),
        Some(Piece { color: Color::White, role: Role::Queen })
    );
}

#[test]
fn test_drag_promotion_with_chosen_piece() {
    let state = from_fen("3r4/4P3/8/8/8/8/k7/4K3 w - - 0 1");
    let knight = Piece { color: Color::White, role: Role::Knight };

    let (_, outputs) = run(
        state,
        vec![BoardEvent::Drop { from: Square::E7, to: Square::D8, piece: Some(knight) }],
    );
    let EventOutput::Move(Ok(record)) = &outputs[0] else {
        panic!("capture promotion rejected: {:?}", outputs[0]);
    };
    assert_eq!(record.promotion, Some(Role::Knight));
    assert_eq!(record.san, "exd8=N");
}

#[test]
fn test_click_promotion_uses_same_rule() {
    let (state, outputs) = run(
        from_fen("4k3/8/8/8/8/8/p7/4K3 b - - 0 1"),
        vec![BoardEvent::Click(Square::A2), BoardEvent::Click(Square::A1)],
    );
    let EventOutput::Move(Ok(record)) = &outputs[1] else {
        panic!("click promotion rejected: {:?}", outputs[1]);
    };
    assert_eq!(record.promotion, Some(Role::Queen));
    assert_eq!(state.last_move(), Some(LastMove { from: Square::A2, to: Square::A1 }));
}

#[test]
fn test_drag_begin_has_no_side_effect() {
    let (armed, _) = run(start(), vec![BoardEvent::Click(Square::E2)]);
    let (after, outputs) = run(
        armed.clone(),
        vec![BoardEvent::DragBegin { square: Square::E7 }, BoardEvent::DragBegin { square: Square::B1 }],
    );
    assert_eq!(outputs, vec![EventOutput::DragAllowed(false), EventOutput::DragAllowed(true)]);
    assert_eq!(after, armed);
}

#[test]
fn test_composed_styles_after_move() {
    let theme = Theme::default();
    let (state, _) = run(
        start(),
        vec![
            BoardEvent::Click(Square::E2),
            BoardEvent::Click(Square::E4),
            BoardEvent::Click(Square::E7),
        ],
    );
    let styles = state.square_styles(&theme);

    // Black's e-pawn is armed with two markers; last move squares stay lit
    assert_eq!(styles.len(), 5);
    for square in [Square::E2, Square::E4] {
        assert_eq!(styles[&square].background.as_deref(), Some(theme.last_move_color.as_str()));
    }
    assert_eq!(styles[&Square::E7].background.as_deref(), Some(theme.selection_color.as_str()));
    assert!(styles[&Square::E6].border_radius.is_some());
    assert!(styles[&Square::E5].border_radius.is_some());
}

#[test]
fn test_game_over_blocks_selection() {
    let (state, outputs) = run(
        from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"),
        vec![BoardEvent::DragBegin { square: Square::E1 }, BoardEvent::Click(Square::E1)],
    );
    assert_eq!(outputs[0], EventOutput::DragAllowed(false));
    assert_eq!(
        outputs[1],
        EventOutput::Selection(Err(InteractionError::EmptySquareSelection(Square::E1)))
    );
    assert_eq!(state.selection().armed(), None);
}
