//! Shared types and rule constants.
//!
//! Everything in this crate is plain data with no dependencies, so it can be
//! used by the engine, the terminal renderer and the input layer alike.
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 20 rows:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: (3, -2), two rows above the visible board
//!
//! Rows with a negative index are "above the board". Pieces may occupy them
//! while spawning or rotating, but the grid never stores them.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Driver frame interval (~60 FPS) |
//! | `BASE_DROP_MS` | 800 | Gravity period at level 1 |
//! | `MIN_DROP_MS` | 80 | Gravity period floor |
//! | `DROP_DECAY` | 0.85 | Gravity multiplier per level-up |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_index(2), PieceKind::T);
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells
pub const BOARD_HEIGHT: u8 = 20;

/// Default spawn column for the piece anchor
pub const SPAWN_X: i8 = 3;

/// Default spawn row for the piece anchor (two rows above the board)
pub const SPAWN_Y: i8 = -2;

/// Driver frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity period at level 1
pub const BASE_DROP_MS: u32 = 800;

/// Gravity never gets faster than this
pub const MIN_DROP_MS: u32 = 80;

/// Gravity period multiplier applied on every level-up
pub const DROP_DECAY: f64 = 0.85;

/// Cleared lines needed per level step
pub const LINES_PER_LEVEL: u32 = 10;

/// Level at session start
pub const START_LEVEL: u32 = 1;

/// Line clear scoring table, indexed by rows cleared in one lock.
///
/// Points are multiplied by the current level (levels start at 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven tetromino kinds
///
/// The kind doubles as the piece's color tag: a settled cell stores the kind
/// that filled it and renderers pick a color from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PieceKind {
    #[default]
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Map an index in `0..7` onto a kind (wraps for larger values).
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

/// Rotation bookkeeping.
///
/// Shapes are not looked up by rotation; each turn transforms the current
/// shape. This only counts quarter turns so renderers and tests can tell how
/// often a piece was turned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Advance one quarter turn clockwise
    ///
    /// ```
    /// use tui_blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }
}

/// Discrete commands an input layer can send to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift piece one cell left
    MoveLeft,
    /// Shift piece one cell right
    MoveRight,
    /// Drop one row, locking if the piece is resting
    SoftDrop,
    /// Drop to the lowest legal row and lock
    HardDrop,
    /// Rotate a quarter turn (with kicks)
    Rotate,
    /// Swap with the hold slot
    Hold,
    /// Toggle pause
    Pause,
    /// Start a fresh session
    Restart,
}

/// A grid cell: `None` is empty, `Some(kind)` is a settled block of that color.
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_defaults() {
        assert_eq!(LINE_SCORES, [0, 40, 100, 300, 1200]);
        assert_eq!(BASE_DROP_MS, 800);
        assert_eq!(MIN_DROP_MS, 80);
        assert_eq!(LINES_PER_LEVEL, 10);
        assert_eq!(START_LEVEL, 1);
        assert_eq!((SPAWN_X, SPAWN_Y), (3, -2));
    }

    #[test]
    fn rotation_cycles_through_four_states() {
        let mut r = Rotation::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(r);
            r = r.rotate_cw();
        }
        assert_eq!(
            seen,
            vec![Rotation::North, Rotation::East, Rotation::South, Rotation::West]
        );
        assert_eq!(r, Rotation::North);
    }

    #[test]
    fn piece_kind_from_index_wraps() {
        assert_eq!(PieceKind::from_index(0), PieceKind::I);
        assert_eq!(PieceKind::from_index(6), PieceKind::L);
        assert_eq!(PieceKind::from_index(7), PieceKind::I);
    }
}
