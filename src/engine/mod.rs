//! Engine module: the 4x4 board, pure shift/merge ops, and the grid
//! transforms they are built from.
//!
//! - `Board` is a `Copy` 4x4 grid with useful methods.
//! - Free functions mirror the methods when convenient (e.g., `shift`).
//! - Line-level steps (`compress`, `merge`, `slide_left`) and grid-level
//!   transforms (`transpose`, `mirror`) are public so they can be tested
//!   on their own.

mod ops;
pub mod state;

pub use state::{format_val, Board, Line, Move, Score, Shifted, Tile, SIZE};

pub use ops::{
    compress, count_empty, empty_cells, insert_random_tile, is_game_over, merge, mirror, shift,
    slide_left, slide_right, transpose,
};
