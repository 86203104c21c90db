//! Collision checking - the single legality predicate
//!
//! Movement, rotation, gravity, hard drop and the ghost projection all ask
//! [`collides`]; nothing else decides whether a placement is legal.

use crate::grid::Grid;
use crate::piece::Piece;

/// Whether `piece` overlaps a wall, the floor, or a settled cell.
///
/// - x outside `[0, width)` always collides, above the board too.
/// - y at or past the floor collides.
/// - y < 0 is open sky: no settled cell can be there.
pub fn collides(piece: &Piece, grid: &Grid) -> bool {
    piece.cells().iter().any(|&(x, y)| {
        if x < 0 || x >= grid.width() as i8 || y >= grid.height() as i8 {
            return true;
        }
        y >= 0 && grid.is_occupied(x, y)
    })
}

/// How many rows `piece` can fall before it would collide.
pub fn drop_distance(piece: &Piece, grid: &Grid) -> i8 {
    let mut distance = 0;
    while !collides(&piece.shifted(0, distance + 1), grid) {
        distance += 1;
    }
    distance
}

/// Where `piece` would come to rest if dropped straight down.
pub fn landing(piece: &Piece, grid: &Grid) -> Piece {
    piece.shifted(0, drop_distance(piece, grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_cells_above_board_do_not_collide() {
        let mut grid = Grid::default();
        for x in 0..10 {
            grid.set(x, 0, Some(PieceKind::I));
        }
        // Spawned T sits entirely in rows -2 and -1.
        assert!(!collides(&Piece::new(PieceKind::T), &grid));
    }

    #[test]
    fn test_walls_collide_even_above_board() {
        let grid = Grid::default();
        assert!(collides(&Piece::at(PieceKind::O, -2, -2), &grid));
        assert!(collides(&Piece::at(PieceKind::O, 8, -2), &grid));
        assert!(!collides(&Piece::at(PieceKind::O, 7, -2), &grid));
    }

    #[test]
    fn test_floor_collides() {
        let grid = Grid::default();
        // O occupies rows y and y+1.
        assert!(!collides(&Piece::at(PieceKind::O, 3, 18), &grid));
        assert!(collides(&Piece::at(PieceKind::O, 3, 19), &grid));
    }

    #[test]
    fn test_settled_cell_collides() {
        let mut grid = Grid::default();
        grid.set(5, 10, Some(PieceKind::Z));
        assert!(collides(&Piece::at(PieceKind::O, 4, 10), &grid));
        assert!(!collides(&Piece::at(PieceKind::O, 5, 10), &grid));
    }

    #[test]
    fn test_drop_distance_from_spawn_on_empty_grid() {
        let grid = Grid::default();
        // I's cells are on anchor row + 1: from -2 they can fall to row 19.
        let piece = Piece::new(PieceKind::I);
        assert_eq!(drop_distance(&piece, &grid), 20);
        assert_eq!(landing(&piece, &grid).bottom(), 19);
    }

    #[test]
    fn test_landing_stops_on_stack() {
        let mut grid = Grid::default();
        grid.set(4, 15, Some(PieceKind::L));
        let piece = Piece::at(PieceKind::O, 3, 0);
        let landed = landing(&piece, &grid);
        assert_eq!(landed.bottom(), 14);
        assert!(!collides(&landed, &grid));
        assert!(collides(&landed.shifted(0, 1), &grid));
    }
}
