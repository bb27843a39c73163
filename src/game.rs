//! The game-state engine: board, running score, game-over flag and best score.
//!
//! `Game` is generic over its random source so tests can drive it with a
//! seeded `StdRng` while the binary uses OS entropy.
//!
//! ```
//! use slide_2048::engine::Move;
//! use slide_2048::game::Game;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut game = Game::new(StdRng::seed_from_u64(42), 0);
//! assert_eq!(game.board().count_tiles(), 2);
//! for dir in [Move::Left, Move::Up, Move::Right, Move::Down] {
//!     game.apply_move(dir);
//! }
//! assert!(game.board().tiles().any(|v| v != 0));
//! ```

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::engine::{Board, Move, Score, Tile};

/// How new tiles are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpawnPolicy {
    /// Chance that a spawned tile is a 4 instead of a 2.
    #[serde(default = "SpawnPolicy::default_four_probability")]
    pub four_probability: f64,
}

impl SpawnPolicy {
    fn default_four_probability() -> f64 {
        0.5
    }
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        Self { four_probability: Self::default_four_probability() }
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub score: Score,
    pub best_score: Score,
    pub game_over: bool,
    pub highest_tile: Tile,
}

pub struct Game<R> {
    board: Board,
    score: Score,
    game_over: bool,
    best_score: Score,
    spawn: SpawnPolicy,
    rng: R,
}

impl<R: Rng> Game<R> {
    /// Start a fresh game seeded with two tiles. `best_score` is the
    /// previously persisted record.
    pub fn new(rng: R, best_score: Score) -> Self {
        Self::with_policy(rng, best_score, SpawnPolicy::default())
    }

    pub fn with_policy(rng: R, best_score: Score, spawn: SpawnPolicy) -> Self {
        let mut game = Game {
            board: Board::EMPTY,
            score: 0,
            game_over: false,
            best_score,
            spawn,
            rng,
        };
        game.reset();
        game
    }

    /// Resume from an explicit position instead of a random start.
    pub fn from_position(rng: R, board: Board, score: Score, best_score: Score) -> Self {
        Game {
            board,
            score,
            game_over: board.is_game_over(),
            best_score,
            spawn: SpawnPolicy::default(),
            rng,
        }
    }

    /// Clear the board and score, then place the two opening tiles.
    /// The best score is left untouched.
    pub fn reset(&mut self) {
        self.board = Board::EMPTY;
        self.score = 0;
        self.game_over = false;
        self.spawn_tile();
        self.spawn_tile();
        debug!("new game started");
    }

    /// Shift the board in `direction`. Returns whether anything moved.
    ///
    /// A move that changes the board adds its merge score, spawns one tile
    /// (if a cell is free) and refreshes the game-over flag. A move that
    /// changes nothing leaves the game exactly as it was.
    pub fn apply_move(&mut self, direction: Move) -> bool {
        let shifted = self.board.shift(direction);
        if shifted.board == self.board {
            debug!("{direction:?} changed nothing");
            return false;
        }
        self.board = shifted.board;
        self.score += shifted.gained;
        self.spawn_tile();
        self.game_over = self.is_terminal();
        debug!(
            "{direction:?}: +{} (score {}){}",
            shifted.gained,
            self.score,
            if self.game_over { ", game over" } else { "" }
        );
        true
    }

    fn spawn_tile(&mut self) {
        self.board = self
            .board
            .with_random_tile(&mut self.rng, self.spawn.four_probability);
    }
}

impl<R> Game<R> {
    /// True iff the board is full and has no equal neighbours.
    pub fn is_terminal(&self) -> bool {
        self.board.is_game_over()
    }

    /// Raise the best score to the current score if it was beaten.
    /// Returns the new record when one was set.
    pub fn record_best(&mut self) -> Option<Score> {
        if self.score > self.best_score {
            self.best_score = self.score;
            Some(self.score)
        } else {
            None
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn best_score(&self) -> Score {
        self.best_score
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn spawn_policy(&self) -> SpawnPolicy {
        self.spawn
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            score: self.score,
            best_score: self.best_score,
            game_over: self.game_over,
            highest_tile: self.board.highest_tile(),
        }
    }
}
