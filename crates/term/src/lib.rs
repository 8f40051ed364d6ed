//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders a
//! [`core::GameSnapshot`] into a plain framebuffer which is then flushed to the
//! terminal with `crossterm`.
//!
//! Goals:
//! - Keep `core` free of any presentation concern
//! - Keep view logic pure so it can be tested without a terminal
//! - Control the aspect ratio (2 chars wide per board cell by default)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
