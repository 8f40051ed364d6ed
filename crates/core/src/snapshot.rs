use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Read-only copy of everything a presentation layer needs to draw a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Locked cells, row-major (y * width + x)
    pub board: Vec<Cell>,
    /// Absolute cells of the falling piece (may include rows above 0)
    pub active: ArrayVec<(i8, i8, PieceKind), 4>,
    pub active_kind: Option<PieceKind>,
    pub score: u32,
    pub lines: u32,
    pub pieces: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Locked cell at (x, y); None when empty or out of bounds
    pub fn cell(&self, x: u8, y: u8) -> Cell {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.board[y as usize * self.width as usize + x as usize]
    }

    /// Falling-piece kind at (x, y), if a mino sits there
    pub fn active_at(&self, x: i8, y: i8) -> Option<PieceKind> {
        self.active
            .iter()
            .find(|&&(ax, ay, _)| ax == x && ay == y)
            .map(|&(_, _, kind)| kind)
    }

    pub fn clear(&mut self) {
        self.board.clear();
        self.board
            .resize(self.width as usize * self.height as usize, None);
        self.active.clear();
        self.active_kind = None;
        self.score = 0;
        self.lines = 0;
        self.pieces = 0;
        self.game_over = false;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: Vec::new(),
            active: ArrayVec::new(),
            active_kind: None,
            score: 0,
            lines: 0,
            pieces: 0,
            game_over: false,
        };
        s.clear();
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_empty_canonical_board() {
        let snap = GameSnapshot::default();
        assert_eq!(snap.board.len(), 200);
        assert!(snap.board.iter().all(Option::is_none));
        assert!(!snap.game_over);
        assert_eq!(snap.cell(10, 0), None);
    }

    #[test]
    fn active_lookup_finds_minos() {
        let mut snap = GameSnapshot::default();
        snap.active.push((3, 4, PieceKind::T));
        assert_eq!(snap.active_at(3, 4), Some(PieceKind::T));
        assert_eq!(snap.active_at(4, 4), None);
    }
}
