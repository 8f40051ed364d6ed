//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or filled with a
//! piece kind. Cells live in a flat row-major vector for cache locality.
//! Coordinates: (x, y) where x ranges 0..width (left to right) and y ranges
//! 0..height (top to bottom).
//!
//! Collision queries treat the side walls and the floor as solid, but the margin
//! above row 0 as open: pieces spawn partly above the board and fall into view.
//! Locking drops the cells that are still above row 0, so the grid itself never
//! holds anything outside its bounds.

use crate::types::{Cell, PieceKind, MAX_BOARD_DIM, MIN_BOARD_DIM};

/// The game board, stored as a flat array of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is outside `MIN_BOARD_DIM..=MAX_BOARD_DIM`.
    pub fn new(width: u8, height: u8) -> Self {
        assert!(
            (MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&width),
            "board width {width} outside {MIN_BOARD_DIM}..={MAX_BOARD_DIM}"
        );
        assert!(
            (MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&height),
            "board height {height} outside {MIN_BOARD_DIM}..={MAX_BOARD_DIM}"
        );
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Build a board from rows, top row first.
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged or the dimensions are unsupported.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|row| row.len() == width),
            "board rows must all have the same width"
        );
        let mut board = Self::new(
            u8::try_from(width).unwrap_or(u8::MAX),
            u8::try_from(height).unwrap_or(u8::MAX),
        );
        for (dst, src) in board.cells.iter_mut().zip(rows.into_iter().flatten()) {
            *dst = src;
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is out of the visible grid
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8
    }

    /// Check if position holds a locked cell (in bounds and filled)
    pub fn is_filled(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Collision query for a single cell.
    ///
    /// Walls and the floor count as occupied. Cells above the top row inside the
    /// side walls count as free.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= self.width as i8 || y >= self.height as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        self.is_filled(x, y)
    }

    /// Check whether a shape anchored at (x, y) hits a wall, the floor or a locked cell.
    ///
    /// Offsets whose coordinates overflow `i8` collide.
    pub fn collides(&self, shape: &[(i8, i8)], x: i8, y: i8) -> bool {
        shape.iter().any(|&(dx, dy)| match (x.checked_add(dx), y.checked_add(dy)) {
            (Some(cx), Some(cy)) => self.is_occupied(cx, cy),
            _ => true,
        })
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Cells of row `y`, or None if the row does not exist
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Write a shape anchored at (x, y) into the grid with the given kind.
    ///
    /// Offsets that land above the top row (or outside the grid) are skipped.
    /// Returns the number of cells written.
    pub fn place(&mut self, shape: &[(i8, i8)], x: i8, y: i8, kind: PieceKind) -> usize {
        let mut written = 0;
        for &(dx, dy) in shape {
            let (Some(cx), Some(cy)) = (x.checked_add(dx), y.checked_add(dy)) else {
                continue;
            };
            if self.set(cx, cy, Some(kind)) {
                written += 1;
            }
        }
        written
    }

    /// Clear all full rows and return how many were removed.
    ///
    /// Rows above the cleared ones shift down keeping their order; the freed rows
    /// at the top become empty. Uses a two-pointer pass with no allocation.
    pub fn clear_full_lines(&mut self) -> usize {
        let width = self.width as usize;
        let mut write_y = self.height as usize;
        let mut cleared = 0;

        // Scan from bottom to top
        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(None);

        cleared
    }

    /// Number of filled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy of the grid as rows, top row first
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.width as usize)
            .map(<[Cell]>::to_vec)
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::BOARD_WIDTH, crate::types::BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_non_square_index_calculation() {
        let board = Board::new(6, 12);
        assert_eq!(board.index(5, 0), Some(5));
        assert_eq!(board.index(0, 1), Some(6));
        assert_eq!(board.index(5, 11), Some(71));
        assert_eq!(board.index(6, 0), None);
    }

    #[test]
    fn test_ceiling_is_open_but_walls_are_not() {
        let board = Board::default();
        assert!(!board.is_occupied(0, -1));
        assert!(!board.is_occupied(9, -3));
        assert!(board.is_occupied(-1, -1));
        assert!(board.is_occupied(10, -1));
        assert!(board.is_occupied(3, 20));
    }

    #[test]
    fn test_place_drops_cells_above_top() {
        let mut board = Board::default();
        let shape = [(0, -1), (1, -1), (0, 0), (1, 0)];

        assert_eq!(board.place(&shape, 4, 0, PieceKind::O), 2);
        assert_eq!(board.filled_count(), 2);
        assert_eq!(board.get(4, 0), Some(Some(PieceKind::O)));
        assert_eq!(board.get(5, 0), Some(Some(PieceKind::O)));
    }

    #[test]
    fn test_overflowing_offsets_collide_and_are_not_placed() {
        let mut board = Board::default();
        let shape = [(0, 0), (0, 1), (1, 0), (1, 1)];

        assert!(board.collides(&shape, 127, 0));
        assert!(board.collides(&shape, 0, 127));
        assert!(!board.collides(&shape, 0, -128));
        assert!(board.collides(&[(0, -1)], 0, -128));

        assert_eq!(board.place(&shape, 127, 0, PieceKind::O), 0);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_from_rows_roundtrip() {
        let mut rows = vec![vec![None; 10]; 20];
        rows[5][3] = Some(PieceKind::O);
        rows[10][7] = Some(PieceKind::L);

        let board = Board::from_rows(rows.clone());
        assert_eq!(board.to_rows(), rows);
    }

    #[test]
    #[should_panic(expected = "board width")]
    fn test_rejects_tiny_board() {
        let _ = Board::new(2, 20);
    }
}
