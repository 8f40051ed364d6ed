//! Session module - one game from first spawn to game over
//!
//! A [`Session`] owns the board, the piece controller, the piece source and the
//! score. It runs the spawn, fall, lock, clear, respawn cycle:
//!
//! - player actions arrive through [`Session::handle_input`]
//! - gravity arrives through [`Session::tick`] (one row per call)
//! - a blocked downward move locks the piece, clears full rows, scores them and
//!   spawns the next piece immediately
//! - a spawn that collides ends the game; afterwards every mutating call is a
//!   no-op and the board keeps its final contents
//!
//! Sessions are plain owned values with no shared state, so any number can run
//! side by side. Callers serialize access to a single session.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use crate::active::{ActivePiece, MoveOutcome, PieceController, PieceState};
use crate::board::Board;
use crate::pieces::ShapeCatalog;
use crate::rng::{PieceSource, UniformRandom};
use crate::scoring::ScoreTally;
use crate::snapshot::GameSnapshot;
use crate::types::{Cell, GameAction, LockEvent, PieceKind};

/// Absolute cells of the falling piece, tagged with its kind
pub type ActiveCells = ArrayVec<(i8, i8, PieceKind), 4>;

/// Undrained lock events kept per session; the oldest is dropped beyond this.
pub const MAX_PENDING_LOCK_EVENTS: usize = 64;

/// Complete game session
#[derive(Debug)]
pub struct Session {
    board: Board,
    controller: PieceController,
    source: Box<dyn PieceSource>,
    tally: ScoreTally,
    /// Number of successfully spawned pieces.
    pieces: u32,
    /// Lock events not yet drained by an observer, oldest first.
    lock_events: VecDeque<LockEvent>,
}

impl Session {
    /// New session on an empty `width x height` board with the default catalog
    /// and seed. The first piece is spawned immediately.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions are outside `MIN_BOARD_DIM..=MAX_BOARD_DIM`.
    pub fn new(width: u8, height: u8) -> Self {
        Self::with_seed(width, height, 1)
    }

    /// Like [`Session::new`] with uniform random pieces drawn from `seed`
    pub fn with_seed(width: u8, height: u8, seed: u32) -> Self {
        Self::with_options(
            Board::new(width, height),
            ShapeCatalog::default(),
            Box::new(UniformRandom::new(seed)),
        )
    }

    /// Start from an arbitrary board, catalog and piece source.
    ///
    /// The board is used as-is (rows that are already full stay until the first
    /// lock clears them). If the first spawn collides the session starts in
    /// game over.
    pub fn with_options(
        board: Board,
        catalog: ShapeCatalog,
        source: Box<dyn PieceSource>,
    ) -> Self {
        let mut session = Self {
            board,
            controller: PieceController::new(catalog),
            source,
            tally: ScoreTally::default(),
            pieces: 0,
            lock_events: VecDeque::new(),
        };
        session.spawn_piece();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn catalog(&self) -> &ShapeCatalog {
        self.controller.catalog()
    }

    pub fn state(&self) -> PieceState {
        self.controller.state()
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.controller.active()
    }

    pub fn score(&self) -> u32 {
        self.tally.score
    }

    pub fn lines(&self) -> u32 {
        self.tally.lines
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn is_game_over(&self) -> bool {
        self.controller.is_game_over()
    }

    pub fn is_running(&self) -> bool {
        !self.is_game_over()
    }

    /// Apply a player action. Returns whether anything changed.
    pub fn handle_input(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0).changed(),
            GameAction::MoveRight => self.try_move(1, 0).changed(),
            GameAction::SoftDrop => self.try_move(0, 1).changed(),
            GameAction::Rotate => self.rotate(),
        }
    }

    /// Advance gravity by one row. Returns whether anything changed.
    pub fn tick(&mut self) -> bool {
        self.try_move(0, 1).changed()
    }

    /// Translate the falling piece; a blocked downward move locks it
    pub fn try_move(&mut self, dx: i8, dy: i8) -> MoveOutcome {
        let outcome = self.controller.try_move(dx, dy, &self.board);
        if outcome == MoveOutcome::Locked {
            self.lock_piece();
        }
        outcome
    }

    /// Rotate the falling piece in place (no wall kicks)
    pub fn rotate(&mut self) -> bool {
        self.controller.rotate(&self.board)
    }

    /// Draw the next kind and try to spawn it
    fn spawn_piece(&mut self) -> bool {
        let kind = self.source.next_kind();
        let spawned = self.controller.spawn(kind, &self.board);
        if spawned {
            self.pieces = self.pieces.wrapping_add(1);
        }
        spawned
    }

    /// Write the locked piece into the board, clear and score rows, respawn
    fn lock_piece(&mut self) {
        let Some(piece) = self.controller.take_locked() else {
            return;
        };

        let shape = piece.shape(self.controller.catalog());
        self.board.place(&shape, piece.x, piece.y, piece.kind);

        let lines_cleared = self.board.clear_full_lines();
        let points = self.tally.record_lock(lines_cleared);

        let spawned = self.spawn_piece();

        if self.lock_events.len() == MAX_PENDING_LOCK_EVENTS {
            self.lock_events.pop_front();
        }
        self.lock_events.push_back(LockEvent {
            kind: piece.kind,
            lines_cleared: lines_cleared as u32,
            points,
            score: self.tally.score,
            game_over: !spawned,
        });
    }

    /// Take the oldest undrained lock event.
    ///
    /// Every lock queues one event, so callers that drain until `None` see all
    /// of them (up to `MAX_PENDING_LOCK_EVENTS` between drains).
    pub fn take_lock_event(&mut self) -> Option<LockEvent> {
        self.lock_events.pop_front()
    }

    /// Copy of the locked grid, top row first
    pub fn board_cells(&self) -> Vec<Vec<Cell>> {
        self.board.to_rows()
    }

    /// Absolute cells of the falling piece.
    ///
    /// Cells above the top row (negative y) are included; renderers skip them.
    /// Empty when no piece is falling.
    pub fn active_piece_cells(&self) -> ActiveCells {
        let Some(piece) = self.controller.active() else {
            return ArrayVec::new();
        };
        piece
            .cells(self.controller.catalog())
            .iter()
            .map(|&(x, y)| (x, y, piece.kind))
            .collect()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.active_piece_cells();
        out.active_kind = self.controller.active().map(|p| p.kind);
        out.score = self.tally.score;
        out.lines = self.tally.lines;
        out.pieces = self.pieces;
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(crate::types::BOARD_WIDTH, crate::types::BOARD_HEIGHT)
    }
}
