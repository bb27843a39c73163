use rand::Rng;

use super::state::{Board, Line, Move, Score, Shifted, Tile, SIZE};

/// Slide/merge tiles in the given direction. No randomness.
///
/// Left is the only direction with its own line logic; the other three are
/// expressed through `mirror` and `transpose` around it.
pub fn shift(board: Board, direction: Move) -> Shifted {
    match direction {
        Move::Left => shift_rows_left(board),
        Move::Right => map_board(shift_rows_left(mirror(board)), mirror),
        Move::Up => map_board(shift_rows_left(transpose(board)), transpose),
        Move::Down => map_board(shift(transpose(board), Move::Right), transpose),
    }
}

/// Swap rows and columns. Applying it twice yields the original board.
pub fn transpose(board: Board) -> Board {
    let mut out = [[0; SIZE]; SIZE];
    for (r, row) in board.0.iter().enumerate() {
        for (c, &val) in row.iter().enumerate() {
            out[c][r] = val;
        }
    }
    Board(out)
}

/// Reverse every row (left-right reflection).
pub fn mirror(board: Board) -> Board {
    let mut out = board.0;
    for row in out.iter_mut() {
        row.reverse();
    }
    Board(out)
}

/// Drop empty cells and pack the remaining values to the left.
pub fn compress(line: Line) -> Line {
    let mut out = [0; SIZE];
    for (slot, val) in out.iter_mut().zip(line.into_iter().filter(|&v| v != 0)) {
        *slot = val;
    }
    out
}

/// Single left-to-right pass combining equal neighbours.
///
/// The left cell of a pair doubles and the right cell is zeroed, so a tile
/// produced by a merge cannot take part in the next comparison.
pub fn merge(mut line: Line) -> (Line, Score) {
    let mut gained = 0;
    for i in 0..SIZE - 1 {
        if line[i] != 0 && line[i] == line[i + 1] {
            line[i] *= 2;
            gained += Score::from(line[i]);
            line[i + 1] = 0;
        }
    }
    (line, gained)
}

/// compress → merge → compress for one line moving left.
pub fn slide_left(line: Line) -> (Line, Score) {
    let (merged, gained) = merge(compress(line));
    (compress(merged), gained)
}

/// Same as `slide_left` for a line moving right.
pub fn slide_right(mut line: Line) -> (Line, Score) {
    line.reverse();
    let (mut out, gained) = slide_left(line);
    out.reverse();
    (out, gained)
}

/// True iff the board is full and no two orthogonal neighbours are equal.
pub fn is_game_over(board: Board) -> bool {
    let g = &board.0;
    for r in 0..SIZE {
        for c in 0..SIZE {
            if g[r][c] == 0 {
                return false;
            }
            if c + 1 < SIZE && g[r][c] == g[r][c + 1] {
                return false;
            }
            if r + 1 < SIZE && g[r][c] == g[r + 1][c] {
                return false;
            }
        }
    }
    true
}

/// Count the number of zero tiles.
pub fn count_empty(board: Board) -> usize {
    board.tiles().filter(|&v| v == 0).count()
}

/// Coordinates of every empty cell in row-major order.
pub fn empty_cells(board: Board) -> Vec<(usize, usize)> {
    let mut cells = Vec::with_capacity(SIZE * SIZE);
    for (r, row) in board.0.iter().enumerate() {
        for (c, &val) in row.iter().enumerate() {
            if val == 0 {
                cells.push((r, c));
            }
        }
    }
    cells
}

/// Place a 2 or 4 in a uniformly chosen empty cell; a full board is a no-op.
pub fn insert_random_tile<R: Rng + ?Sized>(board: Board, rng: &mut R, four_probability: f64) -> Board {
    let cells = empty_cells(board);
    if cells.is_empty() {
        return board;
    }
    let (r, c) = cells[rng.gen_range(0..cells.len())];
    board.with_tile(r, c, generate_random_tile(rng, four_probability))
}

fn generate_random_tile<R: Rng + ?Sized>(rng: &mut R, four_probability: f64) -> Tile {
    if rng.gen_bool(four_probability.clamp(0.0, 1.0)) { 4 } else { 2 }
}

fn shift_rows_left(board: Board) -> Shifted {
    let mut rows = board.0;
    let mut gained = 0;
    for row in rows.iter_mut() {
        let (line, score) = slide_left(*row);
        *row = line;
        gained += score;
    }
    Shifted { board: Board(rows), gained }
}

fn map_board(shifted: Shifted, f: fn(Board) -> Board) -> Shifted {
    Shifted { board: f(shifted.board), gained: shifted.gained }
}
