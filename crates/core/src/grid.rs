//! Grid module - the settled-cell matrix
//!
//! The grid is `width x height` cells stored flat in row-major order. Each cell
//! is empty or holds the kind (color tag) of the piece that settled there.
//! Coordinates: (x, y) with x growing to the right and y growing downward.
//! Row 0 is the top visible row; pieces may sit at negative rows, but the
//! grid never stores them.

use crate::piece::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid. Dimensions are fixed for the grid's lifetime.
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell at (x, y), or `None` when out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Write a cell. Returns false (and writes nothing) when out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8
    }

    /// One row as a slice, top row first. Empty for rows outside the grid.
    pub fn row(&self, y: usize) -> &[Cell] {
        if y >= self.height as usize {
            return &[];
        }
        let start = y * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        y < self.height as usize && self.row(y).iter().all(|cell| cell.is_some())
    }

    pub fn full_row_count(&self) -> usize {
        (0..self.height as usize)
            .filter(|&y| self.is_row_full(y))
            .count()
    }

    /// Remove row `y`, shift every row above it down by one and insert an
    /// empty row at the top.
    pub fn remove_row(&mut self, y: usize) {
        if y >= self.height as usize {
            return;
        }
        let width = self.width as usize;
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(None);
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Scans bottom to top. After a removal the same index is checked again,
    /// since the row above has just moved into it.
    pub fn clear_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.height as usize;
        while y > 0 {
            if self.is_row_full(y - 1) {
                self.remove_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Write the piece's cells into the grid with its kind as the color tag.
    ///
    /// Cells above the board (negative rows) are dropped. Returns how many
    /// cells were written.
    pub fn merge(&mut self, piece: &Piece) -> usize {
        let mut written = 0;
        for (x, y) in piece.cells() {
            if y >= 0 && self.set(x, y, Some(piece.kind)) {
                written += 1;
            }
        }
        written
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Count of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Empty every cell (dimensions unchanged)
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
