use rand::Rng;

use crate::basic::{BoardDim, Cell};

/// Board size in whole cells for a window of the given pixel size
/// (integer division, any partial tile at the edge is unused)
pub fn dim_from_window(width_px: f32, height_px: f32, tile_size: f32) -> BoardDim {
    BoardDim {
        x: (width_px / tile_size) as isize,
        y: (height_px / tile_size) as isize,
    }
}

pub fn contains(board_dim: BoardDim, cell: Cell) -> bool {
    (0..board_dim.x).contains(&cell.x) && (0..board_dim.y).contains(&cell.y)
}

/// Uniform over the whole board, occupied cells are not excluded
pub fn random_cell(board_dim: BoardDim, rng: &mut impl Rng) -> Cell {
    Cell {
        x: rng.gen_range(0..board_dim.x),
        y: rng.gen_range(0..board_dim.y),
    }
}

#[test]
fn test_dim_from_window() {
    assert_eq!(
        dim_from_window(600., 600., 25.),
        BoardDim { x: 24, y: 24 }
    );
    // partial tiles are cut off
    assert_eq!(
        dim_from_window(610., 340., 25.),
        BoardDim { x: 24, y: 13 }
    );
}

#[test]
fn test_random_cell_in_bounds() {
    let board_dim = BoardDim { x: 24, y: 24 };
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        assert!(contains(board_dim, random_cell(board_dim, &mut rng)));
    }
}
