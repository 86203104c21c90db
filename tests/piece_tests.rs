//! Piece, collision and rotation tests

use tui_blockfall::core::rotation::KICK_OFFSETS;
use tui_blockfall::core::{base_shape, collides, drop_distance, landing, try_rotate, Grid, Piece};
use tui_blockfall::types::{PieceKind, Rotation};

#[test]
fn test_shapes_fit_their_box() {
    for kind in PieceKind::ALL {
        let size = if kind == PieceKind::I { 4 } else { 3 };
        for (x, y) in base_shape(kind) {
            assert!((0..size).contains(&x), "{kind:?}");
            assert!((0..size).contains(&y), "{kind:?}");
        }
    }
}

#[test]
fn test_kick_order() {
    assert_eq!(KICK_OFFSETS, [-1, 1, -2, 2]);
}

#[test]
fn test_rotation_result_always_in_bounds() {
    // A jagged stack so kicks get exercised against cells as well as walls.
    let mut grid = Grid::default();
    for y in 12..20 {
        for x in 0..10 {
            if (x + y) % 3 != 0 {
                grid.set(x, y, Some(PieceKind::Z));
            }
        }
    }

    let mut rotated = 0;
    for kind in PieceKind::ALL {
        for x in -2..10 {
            for y in -3..19 {
                let mut piece = Piece::at(kind, x, y);
                for _ in 0..4 {
                    if collides(&piece, &grid) {
                        break;
                    }
                    let Some(turned) = try_rotate(&piece, &grid) else {
                        break;
                    };
                    rotated += 1;
                    assert!(!collides(&turned, &grid));
                    for (cx, cy) in turned.cells() {
                        assert!((0..10).contains(&cx), "{kind:?} from ({x}, {y})");
                        assert!(cy < 20, "{kind:?} from ({x}, {y})");
                    }
                    assert!((turned.x - piece.x).abs() <= 2);
                    assert_eq!(turned.y, piece.y);
                    piece = turned;
                }
            }
        }
    }
    assert!(rotated > 0);
}

#[test]
fn test_rotation_counts_quarter_turns() {
    let grid = Grid::default();
    let mut piece = Piece::at(PieceKind::L, 4, 8);
    let expected = [Rotation::East, Rotation::South, Rotation::West, Rotation::North];
    for rot in expected {
        piece = try_rotate(&piece, &grid).unwrap();
        assert_eq!(piece.rotation, rot);
    }
    assert_eq!(piece.shape, base_shape(PieceKind::L));
}

#[test]
fn test_o_piece_shifts_when_rotated() {
    // The shared transform is applied to O as well; its cells move.
    let grid = Grid::default();
    let o = Piece::at(PieceKind::O, 4, 8);
    let turned = try_rotate(&o, &grid).unwrap();
    assert_ne!(turned.cells(), o.cells());
    assert_eq!(turned.cells().len(), 4);
}

#[test]
fn test_rotation_near_right_wall_kicks_left() {
    let grid = Grid::default();
    // Vertical I on column 9; flat it would need columns 8..=11.
    let vertical = Piece::at(PieceKind::I, 8, 5).rotated();
    assert!(vertical.cells().iter().all(|&(x, _)| x == 9));
    assert!(!collides(&vertical, &grid));

    let flat = try_rotate(&vertical, &grid).unwrap();
    assert!(flat.cells().iter().all(|&(x, _)| (6..10).contains(&x)));
}

#[test]
fn test_landing_matches_drop_distance() {
    let mut grid = Grid::default();
    grid.set(2, 12, Some(PieceKind::J));
    grid.set(6, 16, Some(PieceKind::J));

    for kind in PieceKind::ALL {
        for x in 0..7 {
            let piece = Piece::at(kind, x, -2);
            if collides(&piece, &grid) {
                continue;
            }
            let d = drop_distance(&piece, &grid);
            let landed = landing(&piece, &grid);
            assert_eq!(landed.y, piece.y + d);
            assert!(!collides(&landed, &grid));
            assert!(collides(&landed.shifted(0, 1), &grid));
        }
    }
}
