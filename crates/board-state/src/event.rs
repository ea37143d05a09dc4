//! Gesture events in and replies out.

use chess_core::{MoveRecord, Position};
use shakmaty::{Piece, Square};

use crate::arrows::Arrow;
use crate::error::InteractionError;

/// One user gesture, already parsed into board terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// A piece was picked up on `square`.
    DragBegin { square: Square },
    /// A dragged piece was released. `piece` is what the renderer says it
    /// dropped, if it said anything usable.
    Drop {
        from: Square,
        to: Square,
        piece: Option<Piece>,
    },
    /// The renderer asks whether to open its promotion dialog.
    PromotionQuery {
        from: Square,
        to: Square,
        piece: Option<Piece>,
    },
    Click(Square),
    RightClick(Square),
    ArrowsChanged(Vec<Arrow>),
    /// Start over from the given position.
    NewGame(Position),
}

/// Reply to a single [`BoardEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutput {
    DragAllowed(bool),
    /// A move attempt from a drop or a click on a legal destination.
    Move(Result<MoveRecord, InteractionError>),
    PromotionNeeded(bool),
    /// A click that did not complete a move: the newly armed square, or why
    /// nothing is armed.
    Selection(Result<Square, InteractionError>),
    Annotation { square: Square, annotated: bool },
    Arrows(Result<(), InteractionError>),
    NewGame,
}

impl EventOutput {
    /// Whether a drop should stay on its target square.
    pub fn accepted(&self) -> bool {
        matches!(self, EventOutput::Move(Ok(_)))
    }
}
