use blockfall::core::{GameSnapshot, Session};
use blockfall::term::{piece_color, AnchorY, FrameBuffer, GameView, Viewport};
use blockfall::types::PieceKind;

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = Session::new(10, 20).snapshot();
    let view = GameView::default();

    // 10 cells * 2 columns + border = 22 wide; 20 rows + border = 22 tall.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.board[19 * 10] = Some(PieceKind::Z);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let (x0, y0) = (1, 1 + 19);
    for x in [x0, x0 + 1] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, piece_color(PieceKind::Z));
    }
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_skips_minos_above_top() {
    let mut snap = GameSnapshot::default();
    snap.active.push((3, -1, PieceKind::T));
    snap.active.push((3, 0, PieceKind::T));

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Row -1 would overwrite the top border.
    assert_eq!(fb.row_text(0), format!("┌{}┐", "─".repeat(20)));
    assert_eq!(fb.get(1 + 3 * 2, 1).unwrap().ch, '█');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = Session::new(10, 20).snapshot();
    snap.score = 1234;
    snap.lines = 10;
    snap.pieces = 42;

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let text = screen_text(&view.render(&snap, Viewport::new(60, 22)));

    for needle in ["SCORE", "1234", "LINES", "10", "PIECES", "42"] {
        assert!(text.contains(needle), "missing {}", needle);
    }
}

#[test]
fn term_view_omits_side_panel_when_narrow() {
    let snap = Session::new(10, 20).snapshot();
    let text = screen_text(&GameView::default().render(&snap, Viewport::new(22, 22)));
    assert!(!text.contains("SCORE"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(!screen_text(&fb).contains("GAME OVER"));

    snap.game_over = true;
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(screen_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_follows_board_size() {
    let snap = Session::new(6, 8).snapshot();
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(14, 10));

    assert_eq!(fb.get(13, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 9).unwrap().ch, '└');
}
