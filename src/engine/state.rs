use rand::Rng;
use std::fmt;

use super::ops;
use serde::{Deserialize, Serialize};

/// Side length of the square grid.
pub const SIZE: usize = 4;

/// Cell value: 0 for empty, otherwise a power of two.
pub type Tile = u32;
/// Accumulated merge score.
pub type Score = u64;
/// One row (or, after a transpose, one column) of the grid.
pub type Line = [Tile; SIZE];

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];
}

/// Outcome of sliding a board without any random insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shifted {
    pub board: Board,
    /// Sum of the doubled values produced by every merge in the move.
    pub gained: Score,
}

/// 4x4 2048 board stored row-major as plain tile values.
///
/// Boards are small `Copy` values; every move produces a new board rather
/// than mutating the old one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board(pub(crate) [Line; SIZE]);

impl Board {
    /// A constant empty board (all zeros).
    pub const EMPTY: Board = Board([[0; SIZE]; SIZE]);

    /// Construct a `Board` from its rows, top to bottom.
    #[inline]
    pub fn from_rows(rows: [Line; SIZE]) -> Self {
        Board(rows)
    }

    /// Borrow the rows, top to bottom.
    #[inline]
    pub fn rows(&self) -> &[Line; SIZE] {
        &self.0
    }

    /// Value at `(row, col)`; 0 when empty.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.0[row][col]
    }

    /// Return the board resulting from sliding/merging tiles in `dir` (no random insert).
    ///
    /// ```
    /// use slide_2048::engine::{Board, Move};
    /// let b = Board::from_rows([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
    /// let out = b.shift(Move::Left);
    /// assert_eq!(out.board.rows()[0], [4, 4, 0, 0]);
    /// assert_eq!(out.gained, 8);
    /// ```
    #[inline]
    pub fn shift(self, dir: Move) -> Shifted {
        ops::shift(self, dir)
    }

    /// Insert a tile into a uniformly random empty cell, using the provided RNG.
    ///
    /// The value is 4 with probability `four_probability`, otherwise 2.
    /// A full board is returned unchanged.
    ///
    /// Deterministic example using a seeded RNG:
    /// ```
    /// use slide_2048::engine::Board;
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let mut rng = StdRng::seed_from_u64(123);
    /// let b = Board::EMPTY
    ///     .with_random_tile(&mut rng, 0.5)
    ///     .with_random_tile(&mut rng, 0.5);
    /// assert_eq!(b.count_empty(), 14);
    /// ```
    #[inline]
    pub fn with_random_tile<R: Rng + ?Sized>(self, rng: &mut R, four_probability: f64) -> Self {
        ops::insert_random_tile(self, rng, four_probability)
    }

    /// Return true if no legal moves remain.
    ///
    /// ```
    /// use slide_2048::engine::Board;
    /// // An empty board still has room, so the game is not over.
    /// assert!(!Board::EMPTY.is_game_over());
    /// ```
    #[inline]
    pub fn is_game_over(self) -> bool {
        ops::is_game_over(self)
    }

    /// Return the highest tile value (e.g., 2048) present on the board.
    #[inline]
    pub fn highest_tile(self) -> Tile {
        self.tiles().max().unwrap_or(0)
    }

    /// Count the number of empty cells on the board.
    #[inline]
    pub fn count_empty(self) -> usize {
        ops::count_empty(self)
    }

    /// Count the number of occupied cells on the board.
    #[inline]
    pub fn count_tiles(self) -> usize {
        SIZE * SIZE - ops::count_empty(self)
    }

    /// Iterate over tile values in row-major order.
    #[inline]
    pub fn tiles(self) -> impl Iterator<Item = Tile> {
        self.0.into_iter().flatten()
    }

    /// Return a copy with `(row, col)` set to `value`.
    #[inline]
    pub fn with_tile(mut self, row: usize, col: usize, value: Tile) -> Self {
        self.0[row][col] = value;
        self
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Board").field(&self.0).finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f, "-------------------------------")?;
            }
            let cells: Vec<String> = row.iter().map(|&v| format_val(v)).collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

/// Center a tile value in a 7-character cell; empty cells are blank.
pub fn format_val(val: Tile) -> String {
    match val {
        0 => String::from("       "),
        x => {
            let mut x = x.to_string();
            while x.len() < 7 {
                match x.len() {
                    6 => x = format!(" {}", x),
                    _ => x = format!(" {} ", x),
                }
            }
            x
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_format_val() {
        assert_eq!(format_val(0), "       ");
        assert_eq!(format_val(2), "   2   ");
        assert_eq!(format_val(2048), "  2048 ");
        assert_eq!(format_val(16), "   16  ");
        assert_eq!(format_val(131072), " 131072");
    }

    #[test]
    fn display_draws_four_rows() {
        let b = Board::from_rows([[2, 0, 0, 0], [0, 4, 0, 0], [0, 0, 8, 0], [0, 0, 0, 16]]);
        let text = b.to_string();
        assert_eq!(text.lines().filter(|l| l.contains('|')).count(), 4);
        assert!(text.contains("   2   |"));
        assert!(text.contains("|   16  "));
    }

    #[test]
    fn queries() {
        let b = Board::from_rows([[2, 0, 0, 0], [0, 4, 0, 0], [0, 0, 2048, 0], [0; 4]]);
        assert_eq!(b.count_empty(), 13);
        assert_eq!(b.count_tiles(), 3);
        assert_eq!(b.highest_tile(), 2048);
        assert_eq!(b.get(1, 1), 4);
        assert_eq!(Board::EMPTY.highest_tile(), 0);
        assert_eq!(b.with_tile(3, 3, 8).get(3, 3), 8);
    }
}
