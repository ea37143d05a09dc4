//! A board session: oracle, theme and interaction state under one owner.

use chess_core::{GameOutcome, MoveOracle, MoveRecord, Position};
use tracing::{debug, warn};

use crate::arrows::Arrow;
use crate::config::{SessionConfig, Theme};
use crate::event::{BoardEvent, EventOutput};
use crate::layers::StyleMapping;
use crate::state::BoardInteractionState;

pub struct BoardSession<O> {
    oracle: O,
    theme: Theme,
    start_position: Position,
    state: BoardInteractionState,
}

impl<O: MoveOracle> BoardSession<O> {
    pub fn new(oracle: O, config: SessionConfig) -> Self {
        Self {
            oracle,
            theme: config.theme,
            state: BoardInteractionState::new(config.start_position.clone()),
            start_position: config.start_position,
        }
    }

    /// Run one event to completion.
    pub fn dispatch(&mut self, event: BoardEvent) -> EventOutput {
        debug!(?event, "dispatching board event");

        let state = std::mem::take(&mut self.state);
        let (state, output) = state.handle(&self.oracle, event);
        self.state = state;

        debug!(
            ?output,
            armed = ?self.state.selection().armed(),
            arrows = self.state.arrows().len(),
            "board event handled"
        );
        output
    }

    pub fn new_game(&mut self) -> EventOutput {
        self.dispatch(BoardEvent::NewGame(self.start_position.clone()))
    }

    pub fn state(&self) -> &BoardInteractionState {
        &self.state
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn start_position(&self) -> &Position {
        &self.start_position
    }

    pub fn position(&self) -> &Position {
        self.state.position()
    }

    pub fn arrows(&self) -> &[Arrow] {
        self.state.arrows()
    }

    pub fn history(&self) -> &[MoveRecord] {
        self.state.history()
    }

    pub fn square_styles(&self) -> StyleMapping {
        self.state.square_styles(&self.theme)
    }

    pub fn is_game_over(&self) -> bool {
        self.oracle
            .is_game_over(self.state.position())
            .unwrap_or_else(|e| {
                warn!(error = %e, "game-over check failed");
                false
            })
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.oracle.outcome(self.state.position()).unwrap_or_else(|e| {
            warn!(error = %e, "outcome check failed");
            None
        })
    }
}
