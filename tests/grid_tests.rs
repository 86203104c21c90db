//! Grid tests - storage, line clearing and merging

use tui_blockfall::core::{collides, Grid, Piece};
use tui_blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(grid: &mut Grid, y: i8, kind: PieceKind) {
    for x in 0..grid.width() as i8 {
        grid.set(x, y, Some(kind));
    }
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::default();
    assert_eq!(grid.width(), BOARD_WIDTH);
    assert_eq!(grid.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(grid.get(x, y), Some(None), "({x}, {y})");
        }
    }
}

#[test]
fn test_grid_out_of_bounds() {
    let mut grid = Grid::new(6, 8);

    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(6, 0), None);
    assert_eq!(grid.get(0, 8), None);

    assert!(!grid.set(6, 0, Some(PieceKind::T)));
    assert!(!grid.set(0, -1, Some(PieceKind::T)));
    assert_eq!(grid.filled_count(), 0);
}

#[test]
fn test_clear_single_line_shifts_rows_down() {
    let mut grid = Grid::default();
    fill_row(&mut grid, 19, PieceKind::I);
    grid.set(3, 18, Some(PieceKind::T));
    grid.set(7, 17, Some(PieceKind::Z));

    assert_eq!(grid.clear_lines(), 1);

    assert_eq!(grid.get(3, 19), Some(Some(PieceKind::T)));
    assert_eq!(grid.get(7, 18), Some(Some(PieceKind::Z)));
    assert_eq!(grid.filled_count(), 2);
    assert!(grid.row(0).iter().all(|c| c.is_none()));
}

#[test]
fn test_clear_non_adjacent_lines() {
    let mut grid = Grid::default();
    fill_row(&mut grid, 19, PieceKind::I);
    grid.set(0, 18, Some(PieceKind::S));
    fill_row(&mut grid, 17, PieceKind::J);
    grid.set(9, 16, Some(PieceKind::L));

    assert_eq!(grid.clear_lines(), 2);

    // Survivors keep their order and fall by the rows cleared beneath them.
    assert_eq!(grid.get(0, 19), Some(Some(PieceKind::S)));
    assert_eq!(grid.get(9, 18), Some(Some(PieceKind::L)));
    assert_eq!(grid.filled_count(), 2);
}

#[test]
fn test_clear_four_stacked_lines() {
    let mut grid = Grid::default();
    for y in 16..20 {
        fill_row(&mut grid, y, PieceKind::O);
    }
    grid.set(2, 15, Some(PieceKind::T));

    assert_eq!(grid.full_row_count(), 4);
    assert_eq!(grid.clear_lines(), 4);
    assert_eq!(grid.full_row_count(), 0);
    assert_eq!(grid.get(2, 19), Some(Some(PieceKind::T)));
    assert_eq!(grid.cells().len(), 200);
}

#[test]
fn test_clear_removes_exactly_the_full_rows() {
    // Every subset of the bottom five rows made full.
    for mask in 0u8..32 {
        let mut grid = Grid::default();
        for bit in 0..5 {
            let y = 19 - bit as i8;
            if mask & (1 << bit) != 0 {
                fill_row(&mut grid, y, PieceKind::I);
            } else {
                grid.set(bit as i8, y, Some(PieceKind::Z));
            }
        }
        let full = mask.count_ones() as usize;
        let before = grid.filled_count();

        assert_eq!(grid.clear_lines(), full, "mask {mask:05b}");
        assert_eq!(grid.full_row_count(), 0);
        assert_eq!(grid.filled_count(), before - full * 10);
        assert_eq!(grid.cells().len(), 200);
    }
}

#[test]
fn test_merge_legal_placement_stays_in_bounds() {
    let grid = Grid::default();
    for kind in PieceKind::ALL {
        for x in -3..12 {
            for y in -4..21 {
                let piece = Piece::at(kind, x, y);
                if collides(&piece, &grid) {
                    continue;
                }
                let mut merged = grid.clone();
                let visible = piece.cells().iter().filter(|&&(_, cy)| cy >= 0).count();
                assert_eq!(merged.merge(&piece), visible, "{kind:?} at ({x}, {y})");
                assert_eq!(merged.filled_count(), visible);
                for (cx, cy) in piece.cells() {
                    if cy >= 0 {
                        assert_eq!(merged.get(cx, cy), Some(Some(kind)));
                    }
                }
            }
        }
    }
}

#[test]
fn test_merge_drops_cells_above_board() {
    let mut grid = Grid::default();
    // T at y = -1: tip at row -1, base at row 0.
    let piece = Piece::at(PieceKind::T, 3, -1);
    assert_eq!(grid.merge(&piece), 3);
    assert_eq!(grid.filled_count(), 3);
}

#[test]
fn test_clear_resets_cells() {
    let mut grid = Grid::new(8, 8);
    fill_row(&mut grid, 7, PieceKind::L);
    grid.clear();
    assert_eq!(grid.filled_count(), 0);
    assert_eq!((grid.width(), grid.height()), (8, 8));
}
