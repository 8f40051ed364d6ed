//! Shape catalog tests through the facade crate

use blockfall::core::pieces::{box_size, rotate_in_box};
use blockfall::core::ShapeCatalog;
use blockfall::types::{PieceKind, Rotation};

const ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

#[test]
fn test_every_shape_has_four_distinct_cells() {
    for catalog in [ShapeCatalog::PrecomputedStates, ShapeCatalog::AnalyticRotation] {
        for kind in PieceKind::ALL {
            for rotation in ROTATIONS {
                let shape = catalog.shape(kind, rotation);
                for i in 0..4 {
                    for j in i + 1..4 {
                        assert_ne!(shape[i], shape[j], "{:?} {:?} {:?}", catalog, kind, rotation);
                    }
                }
            }
        }
    }
}

#[test]
fn test_precomputed_states_are_box_rotations() {
    let catalog = ShapeCatalog::PrecomputedStates;
    for kind in PieceKind::ALL {
        if kind == PieceKind::O {
            continue;
        }
        for rotation in ROTATIONS {
            let mut turned = rotate_in_box(catalog.shape(kind, rotation), box_size(kind));
            let mut next = catalog.shape(kind, rotation.rotate_cw());
            turned.sort();
            next.sort();
            assert_eq!(turned, next, "{:?} {:?}", kind, rotation);
        }
    }
}

#[test]
fn test_o_piece_has_one_state_in_both_catalogs() {
    for catalog in [ShapeCatalog::PrecomputedStates, ShapeCatalog::AnalyticRotation] {
        assert_eq!(catalog.rotation_count(PieceKind::O), 1);
        let north = catalog.shape(PieceKind::O, Rotation::North);
        for rotation in ROTATIONS {
            assert_eq!(catalog.shape(PieceKind::O, rotation), north);
        }
    }
}

#[test]
fn test_analytic_east_is_quarter_turn_of_north() {
    let catalog = ShapeCatalog::AnalyticRotation;
    let north = catalog.shape(PieceKind::T, Rotation::North);
    let east = catalog.shape(PieceKind::T, Rotation::East);
    assert_eq!(north, [(-1, 0), (0, 0), (1, 0), (0, -1)]);
    assert_eq!(east, [(0, -1), (0, 0), (0, 1), (1, 0)]);
}

#[test]
fn test_catalog_names() {
    assert_eq!(ShapeCatalog::from_str("Analytic"), Some(ShapeCatalog::AnalyticRotation));
    assert_eq!(ShapeCatalog::from_str("precomputed"), Some(ShapeCatalog::PrecomputedStates));
    assert_eq!(ShapeCatalog::from_str("srs"), None);
    assert_eq!(ShapeCatalog::default().as_str(), "precomputed");
}
