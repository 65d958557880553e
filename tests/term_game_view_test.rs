use bitris::core::{ActivePiece, GameState};
use bitris::engine::Phase;
use bitris::term::{GameView, Viewport};
use bitris::types::PieceKind;

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::new(1);
    let snap = state.snapshot();
    let view = GameView::default();

    // 10 cells * 2 columns + border = 22 wide, 20 rows + border = 22 tall.
    let vp = Viewport::new(22, 22);
    let fb = view.render(&snap, Phase::Playing, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_filled_cell_as_two_chars_wide() {
    let mut state = GameState::new(1);
    state.board_mut().set(0, 9, true);
    // Square in the bottom-left corner, merged into the snapshot.
    state.set_active(ActivePiece::at(PieceKind::O, 0, 0));
    let snap = state.snapshot();

    let fb = GameView::default().render(&snap, Phase::Playing, Viewport::new(22, 22));

    // Floor row sits just above the bottom border.
    let floor = 20;
    for x in 1..=4 {
        assert_eq!(fb.get(x, floor).unwrap().ch, '█', "x={}", x);
        assert_eq!(fb.get(x, floor - 1).unwrap().ch, '█', "x={}", x);
    }
    assert_eq!(fb.get(19, floor).unwrap().ch, '█');
    assert_eq!(fb.get(20, floor).unwrap().ch, '█');
    assert_ne!(fb.get(5, floor).unwrap().ch, '█');
    assert_ne!(fb.get(1, floor - 2).unwrap().ch, '█');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let state = GameState::new(1);
    let snap = state.snapshot();
    assert!(snap.next.is_some());

    let fb = GameView::default().render(&snap, Phase::Playing, Viewport::new(60, 22));
    let all: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(all.contains("NEXT"));
    assert!(all.contains("q quit"));

    // Nothing to the right of a frame that fills the viewport.
    let fb = GameView::default().render(&snap, Phase::Playing, Viewport::new(22, 22));
    let all: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(!all.contains("NEXT"));
}
