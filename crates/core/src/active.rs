//! Active piece controller
//!
//! Tracks the falling piece and validates every move and rotation against the
//! board. The controller never writes to the board: when a downward move is
//! blocked it parks the piece in [`PieceState::Locked`] and the session takes it
//! from there (place, clear, score, respawn).
//!
//! ```text
//! NoPiece --spawn ok--> Falling --blocked fall--> Locked --take_locked--> NoPiece
//!    |                                                                     |
//!    +--spawn collides--> GameOver <-----------------spawn collides--------+
//! ```

use crate::board::Board;
use crate::pieces::{PieceShape, ShapeCatalog};
use crate::types::{PieceKind, Rotation};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece at the catalog's spawn anchor for a board `board_width` wide
    pub fn spawn(kind: PieceKind, catalog: &ShapeCatalog, board_width: u8) -> Self {
        let (x, y) = catalog.spawn_anchor(kind, board_width);
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Relative mino offsets for the current rotation
    pub fn shape(&self, catalog: &ShapeCatalog) -> PieceShape {
        catalog.shape(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the four minos
    pub fn cells(&self, catalog: &ShapeCatalog) -> PieceShape {
        self.shape(catalog)
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check that no mino hits a wall, the floor or a locked cell
    pub fn fits(&self, catalog: &ShapeCatalog, board: &Board) -> bool {
        !board.collides(&self.shape(catalog), self.x, self.y)
    }

    /// Same piece moved by (dx, dy); None if the anchor leaves the `i8` range
    pub fn shifted(&self, dx: i8, dy: i8) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            ..*self
        })
    }

    /// Same anchor, next rotation state
    pub fn rotated(&self, catalog: &ShapeCatalog) -> Self {
        Self {
            rotation: catalog.next_rotation(self.kind, self.rotation),
            ..*self
        }
    }
}

/// Controller state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceState {
    NoPiece,
    Falling(ActivePiece),
    /// A blocked piece waiting to be written into the board.
    Locked(ActivePiece),
    GameOver,
}

/// Result of a translation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved.
    Moved,
    /// Sideways or upward move blocked; nothing changed.
    Rejected,
    /// Downward move blocked; the piece was locked.
    Locked,
    /// No falling piece (between pieces or after game over).
    Inactive,
}

impl MoveOutcome {
    /// Whether the request changed the session
    pub fn changed(&self) -> bool {
        matches!(self, MoveOutcome::Moved | MoveOutcome::Locked)
    }
}

/// Validates and commits piece movement against a board
#[derive(Debug, Clone)]
pub struct PieceController {
    catalog: ShapeCatalog,
    state: PieceState,
}

impl PieceController {
    pub fn new(catalog: ShapeCatalog) -> Self {
        Self {
            catalog,
            state: PieceState::NoPiece,
        }
    }

    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    pub fn state(&self) -> PieceState {
        self.state
    }

    /// The falling piece, if any
    pub fn active(&self) -> Option<ActivePiece> {
        match self.state {
            PieceState::Falling(piece) => Some(piece),
            _ => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.state == PieceState::GameOver
    }

    /// Put a new piece of `kind` at the spawn anchor.
    ///
    /// Returns false (and enters `GameOver`) if the spawn position collides.
    /// Has no effect unless the controller is in `NoPiece`.
    pub fn spawn(&mut self, kind: PieceKind, board: &Board) -> bool {
        if self.state != PieceState::NoPiece {
            return false;
        }
        let piece = ActivePiece::spawn(kind, &self.catalog, board.width());
        if piece.fits(&self.catalog, board) {
            self.state = PieceState::Falling(piece);
            true
        } else {
            self.state = PieceState::GameOver;
            false
        }
    }

    /// Translate the falling piece by (dx, dy).
    ///
    /// A blocked move with `dy > 0` locks the piece; any other blocked move is
    /// rejected silently.
    pub fn try_move(&mut self, dx: i8, dy: i8, board: &Board) -> MoveOutcome {
        let PieceState::Falling(piece) = self.state else {
            return MoveOutcome::Inactive;
        };

        // An anchor that would overflow counts as a collision.
        let candidate = piece
            .shifted(dx, dy)
            .filter(|c| c.fits(&self.catalog, board));
        if let Some(candidate) = candidate {
            self.state = PieceState::Falling(candidate);
            MoveOutcome::Moved
        } else if dy > 0 {
            self.state = PieceState::Locked(piece);
            MoveOutcome::Locked
        } else {
            MoveOutcome::Rejected
        }
    }

    /// Turn the falling piece to its next rotation state in place.
    ///
    /// Returns false when the rotated shape does not fit at the current anchor.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let PieceState::Falling(piece) = self.state else {
            return false;
        };

        let candidate = piece.rotated(&self.catalog);
        if candidate == piece {
            // Single-state piece: nothing to turn.
            return false;
        }
        if candidate.fits(&self.catalog, board) {
            self.state = PieceState::Falling(candidate);
            true
        } else {
            false
        }
    }

    /// Hand over the locked piece and return to `NoPiece`
    pub fn take_locked(&mut self) -> Option<ActivePiece> {
        match self.state {
            PieceState::Locked(piece) => {
                self.state = PieceState::NoPiece;
                Some(piece)
            }
            _ => None,
        }
    }
}
