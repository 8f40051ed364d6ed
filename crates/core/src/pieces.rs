//! Pieces module - tetromino shapes and rotation
//!
//! Two interchangeable shape representations are provided:
//!
//! - [`ShapeCatalog::PrecomputedStates`]: every rotation state is stored as an
//!   offset list inside a square bounding box (4x4 for I, 2x2 for O, 3x3 for the
//!   rest). Consecutive states are the box turned a quarter clockwise.
//! - [`ShapeCatalog::AnalyticRotation`]: one base offset list per kind, centered on
//!   the anchor, turned with `(x, y) -> (-y, x)` once per rotation step.
//!
//! The catalog is chosen when a session is built; everything downstream only
//! asks it for offsets, state counts and the spawn anchor.
//!
//! No wall kicks: a rotation either fits where the piece is or it is rejected.

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to piece anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

/// Source of piece geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeCatalog {
    /// Rotation states stored as precomputed offset tables.
    #[default]
    PrecomputedStates,
    /// Base offsets rotated analytically about the anchor.
    AnalyticRotation,
}

impl ShapeCatalog {
    /// Parse a catalog name (`"precomputed"` or `"analytic"`, case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "precomputed" => Some(ShapeCatalog::PrecomputedStates),
            "analytic" => Some(ShapeCatalog::AnalyticRotation),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeCatalog::PrecomputedStates => "precomputed",
            ShapeCatalog::AnalyticRotation => "analytic",
        }
    }

    /// Number of distinct rotation states for a kind (1 for O, 4 otherwise)
    pub fn rotation_count(&self, kind: PieceKind) -> u8 {
        match kind {
            PieceKind::O => 1,
            _ => 4,
        }
    }

    /// Reduce a rotation to the states this kind actually has
    pub fn normalize(&self, kind: PieceKind, rotation: Rotation) -> Rotation {
        Rotation::from_index(rotation.index() % self.rotation_count(kind))
    }

    /// Rotation that follows `rotation` for this kind (wraps around)
    pub fn next_rotation(&self, kind: PieceKind, rotation: Rotation) -> Rotation {
        let count = self.rotation_count(kind);
        Rotation::from_index((rotation.index() + 1) % count)
    }

    /// Get the shape (mino offsets) for a piece kind and rotation
    pub fn shape(&self, kind: PieceKind, rotation: Rotation) -> PieceShape {
        let rotation = self.normalize(kind, rotation);
        match self {
            ShapeCatalog::PrecomputedStates => precomputed_shape(kind, rotation),
            ShapeCatalog::AnalyticRotation => {
                let mut shape = analytic_base(kind);
                for _ in 0..rotation.index() {
                    shape = rotate_about_anchor(shape);
                }
                shape
            }
        }
    }

    /// Anchor of a freshly spawned piece on a board `board_width` cells wide.
    ///
    /// Precomputed shapes are boxed, so the box is centered; analytic shapes are
    /// already centered on their anchor.
    pub fn spawn_anchor(&self, kind: PieceKind, board_width: u8) -> (i8, i8) {
        let center = (board_width / 2) as i8;
        match self {
            ShapeCatalog::PrecomputedStates => (center - box_size(kind) / 2, 0),
            ShapeCatalog::AnalyticRotation => (center, 0),
        }
    }
}

/// Side of the bounding box used by the precomputed tables
pub fn box_size(kind: PieceKind) -> i8 {
    match kind {
        PieceKind::I => 4,
        PieceKind::O => 2,
        _ => 3,
    }
}

/// Quarter turn clockwise about the anchor (screen coordinates, y down)
pub fn rotate_about_anchor(shape: PieceShape) -> PieceShape {
    shape.map(|(x, y)| (-y, x))
}

/// Quarter turn clockwise inside an `n x n` box
pub fn rotate_in_box(shape: PieceShape, n: i8) -> PieceShape {
    shape.map(|(x, y)| (n - 1 - y, x))
}

fn precomputed_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => get_i_shape(rotation),
        PieceKind::J => get_j_shape(rotation),
        PieceKind::L => get_l_shape(rotation),
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::S => get_s_shape(rotation),
        PieceKind::T => get_t_shape(rotation),
        PieceKind::Z => get_z_shape(rotation),
    }
}

/// I piece shapes (4x4 box)
fn get_i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 1), (1, 1), (2, 1), (3, 1)],
        Rotation::East => [(2, 0), (2, 1), (2, 2), (2, 3)],
        Rotation::South => [(0, 2), (1, 2), (2, 2), (3, 2)],
        Rotation::West => [(1, 0), (1, 1), (1, 2), (1, 3)],
    }
}

fn get_j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (2, 0), (1, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (2, 2)],
        Rotation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

fn get_l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (0, 2)],
        Rotation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

fn get_s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Rotation::South => [(1, 1), (2, 1), (0, 2), (1, 2)],
        Rotation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn get_t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (1, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn get_z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::East => [(2, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (1, 2), (2, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

/// Spawn-orientation offsets for the analytic catalog, centered on the anchor
fn analytic_base(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(-1, 0), (0, 0), (1, 0), (2, 0)],
        PieceKind::J => [(-1, -1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::L => [(1, -1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::S => [(-1, 0), (0, 0), (0, -1), (1, -1)],
        PieceKind::T => [(-1, 0), (0, 0), (1, 0), (0, -1)],
        PieceKind::Z => [(-1, -1), (0, -1), (0, 0), (1, 0)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut shape: PieceShape) -> PieceShape {
        shape.sort();
        shape
    }

    #[test]
    fn precomputed_states_are_box_rotations() {
        let catalog = ShapeCatalog::PrecomputedStates;
        for kind in PieceKind::ALL {
            let n = box_size(kind);
            let mut rotation = Rotation::North;
            for _ in 0..4 {
                let next = catalog.next_rotation(kind, rotation);
                let turned = rotate_in_box(catalog.shape(kind, rotation), n);
                assert_eq!(
                    sorted(turned),
                    sorted(catalog.shape(kind, next)),
                    "{kind:?} {rotation:?} -> {next:?}"
                );
                rotation = next;
            }
        }
    }

    #[test]
    fn analytic_four_turns_return_to_base() {
        let catalog = ShapeCatalog::AnalyticRotation;
        for kind in PieceKind::ALL {
            let base = catalog.shape(kind, Rotation::North);
            let mut shape = base;
            for _ in 0..4 {
                shape = rotate_about_anchor(shape);
            }
            assert_eq!(shape, base);
        }
    }

    #[test]
    fn precomputed_cells_stay_inside_their_box() {
        let catalog = ShapeCatalog::PrecomputedStates;
        for kind in PieceKind::ALL {
            let n = box_size(kind);
            for i in 0..4 {
                for (x, y) in catalog.shape(kind, Rotation::from_index(i)) {
                    assert!((0..n).contains(&x) && (0..n).contains(&y));
                }
            }
        }
    }

    #[test]
    fn o_piece_has_single_state() {
        for catalog in [ShapeCatalog::PrecomputedStates, ShapeCatalog::AnalyticRotation] {
            assert_eq!(catalog.rotation_count(PieceKind::O), 1);
            assert_eq!(
                catalog.next_rotation(PieceKind::O, Rotation::North),
                Rotation::North
            );
            let north = catalog.shape(PieceKind::O, Rotation::North);
            assert_eq!(catalog.shape(PieceKind::O, Rotation::South), north);
        }
    }

    #[test]
    fn spawn_anchor_centers_shapes() {
        let pre = ShapeCatalog::PrecomputedStates;
        assert_eq!(pre.spawn_anchor(PieceKind::I, 10), (3, 0));
        assert_eq!(pre.spawn_anchor(PieceKind::O, 10), (4, 0));
        assert_eq!(pre.spawn_anchor(PieceKind::T, 10), (4, 0));

        let analytic = ShapeCatalog::AnalyticRotation;
        assert_eq!(analytic.spawn_anchor(PieceKind::I, 10), (5, 0));
        assert_eq!(analytic.spawn_anchor(PieceKind::T, 12), (6, 0));
    }

    #[test]
    fn catalog_names_parse() {
        assert_eq!(
            ShapeCatalog::from_str("Analytic"),
            Some(ShapeCatalog::AnalyticRotation)
        );
        assert_eq!(
            ShapeCatalog::from_str(ShapeCatalog::PrecomputedStates.as_str()),
            Some(ShapeCatalog::PrecomputedStates)
        );
        assert_eq!(ShapeCatalog::from_str("srs"), None);
    }
}
