//! Presentation-side session state.
//!
//! `PlaySession` is the small state object a front end keeps next to the
//! core: the current selection, the destinations highlighted for it, and an
//! input lock that holds for a cooldown after each applied move. It talks to
//! the core only through `apply_move`, `undo` and `reset`, plus a boxed
//! [`MoveGenerator`] that supplies the highlighted destinations.
//!
//! All time-dependent operations take `now` explicitly; the session never
//! reads the clock itself.

use std::fmt;
use std::time::Instant;

use log::{debug, warn};

use crate::chess_errors::ChessResult;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::move_generator::{MoveGenerator, MoveSet, PseudoLegalMoveGenerator};
use crate::session::session_config::{OpponentMode, SessionConfig};

/// Side the engine plays when the opponent mode is not `Human`.
pub const ENGINE_COLOR: Color = Color::Black;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Input arrived during the post-move cooldown.
    Locked,
    /// Empty square or a piece of the side not on turn.
    NotSelectable,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::Locked => write!(f, "input locked during cooldown"),
            IgnoreReason::NotSelectable => write!(f, "no piece of the side to move there"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Selected {
        origin: Square,
        destinations: MoveSet,
    },
    Deselected,
    Moved(MoveRecord),
    Ignored(IgnoreReason),
}

pub struct PlaySession {
    game: GameState,
    config: SessionConfig,
    selection: Option<Square>,
    highlights: MoveSet,
    locked_until: Option<Instant>,
    engine: Box<dyn Engine>,
    generator: Box<dyn MoveGenerator>,
}

impl PlaySession {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_engine(config, Box::new(RandomEngine::new()))
    }

    pub fn with_engine(config: SessionConfig, engine: Box<dyn Engine>) -> Self {
        Self {
            game: GameState::new_game(),
            config,
            selection: None,
            highlights: MoveSet::new(),
            locked_until: None,
            engine,
            generator: Box::new(PseudoLegalMoveGenerator),
        }
    }

    /// Swap the generator used for highlights.
    pub fn with_generator(mut self, generator: Box<dyn MoveGenerator>) -> Self {
        self.generator = generator;
        self
    }

    #[inline]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        self.config.set_option(name, value)
    }

    #[inline]
    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    #[inline]
    pub fn highlights(&self) -> &MoveSet {
        &self.highlights
    }

    #[inline]
    pub fn is_locked(&self, now: Instant) -> bool {
        self.locked_until.is_some_and(|until| now < until)
    }

    /// Handle a square being chosen.
    pub fn select(&mut self, square: Square, now: Instant) -> ChessResult<SelectionOutcome> {
        if self.is_locked(now) {
            debug!("select {square} ignored during cooldown");
            return Ok(SelectionOutcome::Ignored(IgnoreReason::Locked));
        }

        if let Some(origin) = self.selection {
            if square == origin {
                self.clear_selection();
                return Ok(SelectionOutcome::Deselected);
            }
            if self.highlights.contains(&square) {
                let record = self.commit(origin, square, now)?;
                return Ok(SelectionOutcome::Moved(record));
            }
            if !self.is_selectable(square) {
                self.clear_selection();
                return Ok(SelectionOutcome::Deselected);
            }
        } else if !self.is_selectable(square) {
            return Ok(SelectionOutcome::Ignored(IgnoreReason::NotSelectable));
        }

        self.selection = Some(square);
        self.highlights = self.generator.generate_moves(self.game.board(), square);
        Ok(SelectionOutcome::Selected {
            origin: square,
            destinations: self.highlights.clone(),
        })
    }

    /// Apply `from -> to` directly, as a text front end does. Goes through
    /// the strict path when `strict_moves` is set.
    pub fn play(&mut self, from: Square, to: Square, now: Instant) -> ChessResult<SelectionOutcome> {
        if self.is_locked(now) {
            warn!("move {from}{to} ignored during cooldown");
            return Ok(SelectionOutcome::Ignored(IgnoreReason::Locked));
        }
        let record = self.commit(from, to, now)?;
        Ok(SelectionOutcome::Moved(record))
    }

    /// Let the engine move if it is its turn and input is not locked.
    pub fn play_opponent(&mut self, now: Instant) -> ChessResult<Option<MoveRecord>> {
        if self.config.opponent == OpponentMode::Human
            || self.game.turn() != ENGINE_COLOR
            || self.is_locked(now)
        {
            return Ok(None);
        }

        let Some((from, to)) = self.engine.choose_move(&self.game) else {
            warn!("{} has no moves for {}", self.engine.name(), ENGINE_COLOR);
            return Ok(None);
        };
        self.commit(from, to, now).map(Some)
    }

    /// Undo the last move; against an engine, also undo its reply so the
    /// human is on turn again. Refused during the cooldown.
    pub fn undo(&mut self, now: Instant) -> Option<MoveRecord> {
        if self.is_locked(now) {
            warn!("undo ignored during cooldown");
            return None;
        }
        self.clear_selection();

        let mut undone = self.game.undo();
        if self.config.opponent != OpponentMode::Human
            && self.game.turn() == ENGINE_COLOR
            && self.game.can_undo()
        {
            undone = self.game.undo();
        }
        undone
    }

    /// Start a new game. Always allowed; clears the cooldown.
    pub fn reset(&mut self) {
        self.game.reset();
        self.engine.new_game();
        self.clear_selection();
        self.locked_until = None;
    }

    /// Replace the game, for example with one loaded from FEN.
    pub fn load(&mut self, game: GameState) {
        self.game = game;
        self.engine.new_game();
        self.clear_selection();
        self.locked_until = None;
    }

    fn is_selectable(&self, square: Square) -> bool {
        self.game.board().is_own(square, self.game.turn())
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.highlights.clear();
    }

    fn commit(&mut self, from: Square, to: Square, now: Instant) -> ChessResult<MoveRecord> {
        let record = if self.config.strict_moves {
            self.game.apply_checked_move(from, to)?
        } else {
            self.game.apply_move(from, to)?
        };
        self.clear_selection();
        self.locked_until = Some(now + self.config.cooldown);
        Ok(record)
    }
}
