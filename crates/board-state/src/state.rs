//! The board interaction state machine.
//!
//! [`BoardInteractionState`] aggregates everything the board derives its
//! highlights from. [`BoardInteractionState::handle`] is the single
//! transition: it consumes the state and an event and returns the next state
//! with a reply. Rule questions go to the [`MoveOracle`].

use chess_core::{format_descriptor, MoveOracle, MoveRecord, Position};
use shakmaty::{Piece, Square};
use tracing::{debug, info, warn};

use crate::annotations::AnnotationMap;
use crate::arrows::{Arrow, ArrowTracker};
use crate::config::Theme;
use crate::error::InteractionError;
use crate::event::{BoardEvent, EventOutput};
use crate::layers::{compose, LastMove, LayerInputs, StyleMapping};
use crate::selection::{is_promotion_move, promotion_hint, SelectionState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardInteractionState {
    position: Position,
    selection: SelectionState,
    arrows: ArrowTracker,
    annotations: AnnotationMap,
    last_move: Option<LastMove>,
    history: Vec<MoveRecord>,
}

impl BoardInteractionState {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn arrows(&self) -> &[Arrow] {
        self.arrows.arrows()
    }

    pub fn annotations(&self) -> &AnnotationMap {
        &self.annotations
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Completed moves, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Composed highlight styles for the current state.
    pub fn square_styles(&self, theme: &Theme) -> StyleMapping {
        let inputs = LayerInputs {
            selection: &self.selection,
            annotations: &self.annotations,
            last_move: self.last_move,
        };
        compose(inputs, theme)
    }

    /// Apply one event. Every change the event causes is visible in the
    /// returned state; nothing is left half-applied.
    pub fn handle<O: MoveOracle>(mut self, oracle: &O, event: BoardEvent) -> (Self, EventOutput) {
        let output = match event {
            BoardEvent::DragBegin { square } => EventOutput::DragAllowed(self.begin_drag(oracle, square)),
            BoardEvent::Drop { from, to, piece } => {
                EventOutput::Move(self.attempt_move(oracle, from, to, piece))
            }
            BoardEvent::PromotionQuery { from, to, piece } => EventOutput::PromotionNeeded(
                piece.is_some_and(|p| is_promotion_move(p, from, to)),
            ),
            BoardEvent::Click(square) => self.click_square(oracle, square),
            BoardEvent::RightClick(square) => {
                let annotated = self.annotations.right_click(square);
                EventOutput::Annotation { square, annotated }
            }
            BoardEvent::ArrowsChanged(arrows) => EventOutput::Arrows(self.arrows.set_arrows(arrows)),
            BoardEvent::NewGame(position) => {
                self = Self::new(position);
                EventOutput::NewGame
            }
        };

        (self, output)
    }

    /// Early check when a piece is picked up. Has no effect on state; the
    /// oracle rejects the eventual drop regardless.
    pub fn begin_drag<O: MoveOracle>(&self, oracle: &O, square: Square) -> bool {
        let check = || -> Result<bool, InteractionError> {
            if oracle.is_game_over(&self.position)? {
                return Ok(false);
            }
            let Some(piece) = oracle.piece_at(&self.position, square)? else {
                return Ok(false);
            };
            Ok(piece.color == oracle.side_to_move(&self.position)?)
        };

        check().unwrap_or_else(|e| {
            warn!(%square, error = %e, "drag check failed");
            false
        })
    }

    /// Try `from`-`to`. On success the position advances and the selection,
    /// destinations and annotations are cleared together while the last-move
    /// highlight moves to this move. On failure nothing changes.
    pub fn attempt_move<O: MoveOracle>(
        &mut self,
        oracle: &O,
        from: Square,
        to: Square,
        piece: Option<Piece>,
    ) -> Result<MoveRecord, InteractionError> {
        let mover = oracle.piece_at(&self.position, from)?;
        let promotion = promotion_hint(mover, from, to, piece);

        let applied = oracle
            .apply_move(&self.position, from, to, promotion)
            .map_err(|e| {
                debug!(%from, %to, error = %e, "move rejected");
                InteractionError::from(e)
            })?;

        self.position = applied.position;
        self.selection.clear();
        self.annotations.clear_all();
        self.last_move = Some(LastMove { from, to });
        self.history.push(applied.record.clone());

        info!(
            san = %applied.record.san,
            piece = ?mover.map(format_descriptor),
            ply = self.history.len(),
            fen = %self.position,
            "move played"
        );

        Ok(applied.record)
    }

    /// Left click: completes a move onto a legal destination, otherwise
    /// (re)selects `square`. Annotations are dismissed either way.
    pub fn click_square<O: MoveOracle>(&mut self, oracle: &O, square: Square) -> EventOutput {
        self.annotations.clear_all();

        if let Some(armed) = self.selection.armed() {
            if self.selection.is_destination(square) {
                let result = oracle
                    .piece_at(&self.position, armed)
                    .map_err(InteractionError::from)
                    .and_then(|piece| self.attempt_move(oracle, armed, square, piece));
                return EventOutput::Move(result);
            }
        }

        self.selection.clear();
        EventOutput::Selection(self.select(oracle, square))
    }

    fn select<O: MoveOracle>(&mut self, oracle: &O, square: Square) -> Result<Square, InteractionError> {
        let destinations = oracle.legal_moves(&self.position, square)?;
        let count = destinations.len();

        if !self.selection.arm(square, destinations) {
            return Err(InteractionError::EmptySquareSelection(square));
        }

        debug!(%square, destinations = count, "square armed");
        Ok(square)
    }
}
