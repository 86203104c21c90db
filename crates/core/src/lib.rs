//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the falling-block game and the state of one
//! play session. It does no terminal I/O; the only side effects are
//! `tracing` events and reading a config file when asked to.
//!
//! # Module Structure
//!
//! - [`grid`]: settled cells, row removal and line clearing
//! - [`piece`]: shapes and the immutable [`Piece`] placement value
//! - [`collision`]: the single legality predicate plus drop projection
//! - [`rotation`]: quarter-turn transform with the `[-1, 1, -2, 2]` kick list
//! - [`rng`]: uniform piece draws behind the [`PieceSource`] seam
//! - [`scoring`]: line scores, levels and the gravity curve
//! - [`hold`]: the once-per-piece hold slot
//! - [`game_state`]: the session controller
//! - [`config`]: tunables loaded from JSON
//!
//! # Rules in short
//!
//! - Uniform random pieces, no bag, one piece of preview
//! - No lock delay: a piece locks on the first gravity step or soft drop that
//!   cannot move it down
//! - Clearing 1-4 rows scores 40/100/300/1200 times the level
//! - One level per `lines_per_level` cumulative lines; gravity speeds up by
//!   `drop_decay` per level down to `min_drop_ms`
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{EngineConfig, GameState, SequenceSource};
//! use tui_blockfall_core::types::{GameAction, PieceKind};
//!
//! let mut game = GameState::with_source(
//!     EngineConfig::default(),
//!     SequenceSource::new([PieceKind::I, PieceKind::O]),
//! );
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.active().unwrap().kind, PieceKind::O);
//! assert_eq!(game.grid().filled_count(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. Once the accumulated time exceeds the current drop
//! interval the piece falls one row and the accumulator restarts at zero.

pub mod collision;
pub mod config;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod hold;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use collision::{collides, drop_distance, landing};
pub use config::EngineConfig;
pub use error::ConfigError;
pub use game_state::{GameState, LockEvent};
pub use grid::Grid;
pub use hold::HoldSlot;
pub use piece::{base_shape, Piece};
pub use rng::{PieceSource, SequenceSource, SimpleRng, UniformRandomizer};
pub use rotation::try_rotate;
pub use scoring::{calculate_line_score, ClearOutcome, LevelRules, Progress};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
