//! Board interaction error types

use chess_core::{OracleError, PositionError};
use shakmaty::Square;
use thiserror::Error;

/// Outcomes of a gesture that did not change the board the way the user
/// asked. None of these are fatal; each is recovered where it occurs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InteractionError {
    #[error("Illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },

    #[error("No legal moves from {0}")]
    EmptySquareSelection(Square),

    #[error("Arrow list unchanged")]
    StaleArrowUpdate,

    #[error("Oracle error: {0}")]
    Oracle(OracleError),
}

impl From<OracleError> for InteractionError {
    fn from(err: OracleError) -> Self {
        match err {
            OracleError::IllegalMove { from, to } => InteractionError::IllegalMove { from, to },
            other => InteractionError::Oracle(other),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("BOARD_START_FEN is invalid: {0}")]
    StartFen(#[from] PositionError),
}

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Malformed gesture: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown square '{0}'")]
    Square(String),

    #[error("Invalid position: {0}")]
    Position(#[from] PositionError),
}
