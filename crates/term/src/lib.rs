//! Terminal game renderer.
//!
//! A small game-oriented rendering layer: [`GameView`] paints a
//! [`GameSnapshot`](crate::core::GameSnapshot) into a [`FrameBuffer`], and
//! [`TerminalRenderer`] flushes framebuffers to the terminal with crossterm.
//! No widget toolkit is involved, which keeps control over cell aspect ratio
//! (two columns per board cell by default).

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{piece_color, FrameRect, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
