//! slide-2048: the 2048 sliding-tile game
//!
//! This crate provides:
//! - A small `Copy` `Board` type with pure methods (`shift`, `with_random_tile`, `is_game_over`, ...)
//! - `Game`, the state engine: score, game-over flag, best score, injectable RNG
//! - `HighScoreStore` with a plain-text file implementation
//! - `Session`, the input → move → redraw → game-over → save loop, and a crossterm `tui` frontend
//!
//! Quick start:
//! ```
//! use slide_2048::engine::{Board, Move};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Deterministic board initialization with a seeded RNG
//! let mut rng = StdRng::seed_from_u64(42);
//! let b0 = Board::EMPTY.with_random_tile(&mut rng, 0.5).with_random_tile(&mut rng, 0.5);
//! let b1 = b0.shift(Move::Left).board;
//! assert!(b1.count_tiles() <= 2);
//! ```
//!
//! Full loop (simplest possible)
//! ```
//! use slide_2048::engine::Move;
//! use slide_2048::game::Game;
//! use slide_2048::highscore::{HighScoreStore, MemoryHighScore};
//! use slide_2048::session::{Intent, Session};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let store = MemoryHighScore::new(0);
//! let game = Game::new(StdRng::seed_from_u64(123), store.load());
//! let mut session = Session::new(game, store, 2048);
//!
//! let mut turns = 0;
//! while !session.game().is_over() && turns < 8 {
//!     session.handle(Intent::Move(Move::ALL[turns % 4]));
//!     turns += 1;
//! }
//! let _frame = session.frame();
//! ```
//!
pub mod config;
pub mod engine;
pub mod game;
pub mod highscore;
pub mod session;
pub mod tui;
