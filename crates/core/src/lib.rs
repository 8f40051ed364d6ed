//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole simulation: board, shapes, piece control,
//! scoring and the session that ties them together. It has **no dependencies**
//! on UI, terminal or I/O, which makes it:
//!
//! - **Deterministic**: the same seed (or piece sequence) replays the same game
//! - **Testable**: every rule is reachable from plain unit tests
//! - **Portable**: any front-end can drive it through a handful of calls
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with collision queries and line clearing
//! - [`pieces`]: shape catalog (precomputed rotation states or analytic rotation)
//! - [`active`]: falling-piece controller and its state machine
//! - [`rng`]: pluggable piece sources (seeded uniform, fixed sequence)
//! - [`scoring`]: fixed per-lock reward table
//! - [`session`]: spawn, fall, lock, clear, respawn cycle and game over
//! - [`snapshot`]: read-only frame data for presentation layers
//!
//! # Game Rules
//!
//! - Pieces are picked uniformly at random, one at a time (no 7-bag)
//! - Rotation is clockwise only and never kicks off walls
//! - A piece locks the moment a downward move is blocked (no lock delay)
//! - 1/2/3/4 lines in one lock score 100/300/500/800
//! - The game ends when a new piece cannot be placed at its spawn position
//!
//! # Example
//!
//! ```
//! use blockfall_core::Session;
//! use blockfall_types::GameAction;
//!
//! let mut session = Session::new(10, 20);
//!
//! session.handle_input(GameAction::MoveRight);
//! session.handle_input(GameAction::Rotate);
//! session.tick();
//!
//! assert_eq!(session.score(), 0);
//! assert!(!session.is_game_over());
//! assert_eq!(session.active_piece_cells().len(), 4);
//! ```
//!
//! # Timing
//!
//! The core has no clock. The caller decides the gravity cadence and calls
//! [`Session::tick`](session::Session::tick) once per interval.

pub mod active;
pub mod board;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use active::{ActivePiece, MoveOutcome, PieceController, PieceState};
pub use board::Board;
pub use pieces::{PieceShape, ShapeCatalog};
pub use rng::{PieceSource, SequenceSource, SimpleRng, UniformRandom};
pub use scoring::{line_clear_score, ScoreTally};
pub use session::{ActiveCells, Session, MAX_PENDING_LOCK_EVENTS};
pub use snapshot::GameSnapshot;
