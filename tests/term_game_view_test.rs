use tui_blockfall::core::{EngineConfig, GameState, SequenceSource};
use tui_blockfall::term::{piece_color, GameView, Viewport};
use tui_blockfall::types::PieceKind;

fn session() -> GameState<SequenceSource> {
    GameState::with_source(
        EngineConfig::default(),
        SequenceSource::new([PieceKind::T, PieceKind::L]),
    )
}

fn screen_contains(fb: &tui_blockfall::term::FrameBuffer, needle: &str) -> bool {
    (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
}

#[test]
fn term_view_renders_border_corners() {
    let snap = session().snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1 the 10x20 board is 20x20, plus border 22x22.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = session().snapshot();
    snap.cells[19 * 10] = Some(PieceKind::I);
    snap.active = None;
    snap.ghost = None;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0, y0).unwrap().style.fg, piece_color(PieceKind::I));
}

#[test]
fn term_view_sizes_frame_to_board() {
    let game = GameState::new(EngineConfig {
        width: 6,
        height: 8,
        spawn_x: 1,
        ..EngineConfig::default()
    });
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(14, 10));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(13, 9).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = session().snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;
    snap.hold = Some(PieceKind::T);

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    assert!(screen_contains(&fb, "SCORE"));
    assert!(screen_contains(&fb, "1234"));
    assert!(screen_contains(&fb, "HOLD"));

    // Too narrow: board only.
    let fb = GameView::default().render(&snap, Viewport::new(24, 24));
    assert!(!screen_contains(&fb, "SCORE"));
}

#[test]
fn term_view_shows_game_over() {
    let mut snap = session().snapshot();
    snap.game_over = true;
    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    assert!(screen_contains(&fb, "GAME OVER"));
    assert!(!screen_contains(&fb, "PAUSED"));
}
