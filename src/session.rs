//! One play session: routes intents into the engine, redraws after every
//! accepted change and persists a new best score when a game ends.

use std::io;

use log::{debug, info, warn};
use rand::Rng;

use crate::engine::{Move, Tile};
use crate::game::{Game, Snapshot};
use crate::highscore::HighScoreStore;

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Move(Move),
    Restart,
    Quit,
}

/// Result of handling a single intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// The move changed nothing; no redraw is needed.
    Unchanged,
    Moved { game_over: bool },
    Restarted,
    Quit,
}

/// The presentation side: a source of intents and a sink for frames.
pub trait Frontend {
    fn next_intent(&mut self) -> io::Result<Intent>;
    fn draw(&mut self, frame: &Frame) -> io::Result<()>;
}

/// A snapshot plus the session-level flags a renderer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub snapshot: Snapshot,
    pub target_tile: Tile,
    pub reached_target: bool,
}

pub struct Session<R, S> {
    game: Game<R>,
    store: S,
    target_tile: Tile,
}

impl<R: Rng, S: HighScoreStore> Session<R, S> {
    /// Wrap a game. The game's best score should already come from `store`.
    pub fn new(game: Game<R>, store: S, target_tile: Tile) -> Self {
        Self { game, store, target_tile }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn frame(&self) -> Frame {
        let snapshot = self.game.snapshot();
        Frame {
            snapshot,
            target_tile: self.target_tile,
            reached_target: snapshot.highest_tile >= self.target_tile,
        }
    }

    pub fn handle(&mut self, intent: Intent) -> Update {
        match intent {
            Intent::Move(dir) => {
                if !self.game.apply_move(dir) {
                    return Update::Unchanged;
                }
                let game_over = self.game.is_terminal();
                if game_over {
                    self.finish_game();
                }
                Update::Moved { game_over }
            }
            Intent::Restart => {
                self.game.reset();
                Update::Restarted
            }
            Intent::Quit => Update::Quit,
        }
    }

    /// Drive the session until the frontend asks to quit.
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> io::Result<()> {
        frontend.draw(&self.frame())?;
        loop {
            let intent = frontend.next_intent()?;
            match self.handle(intent) {
                Update::Unchanged => {}
                Update::Moved { .. } | Update::Restarted => frontend.draw(&self.frame())?,
                Update::Quit => {
                    debug!("quit requested at score {}", self.game.score());
                    return Ok(());
                }
            }
        }
    }

    fn finish_game(&mut self) {
        debug!("game over with score {}", self.game.score());
        if let Some(best) = self.game.record_best() {
            info!("new high score {best}");
            if let Err(e) = self.store.save(best) {
                warn!("failed to save high score: {e}");
            }
        }
    }
}
