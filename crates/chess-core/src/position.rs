//! Opaque game position, stored as a validated FEN string.

use serde::Serialize;
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, EnPassantMode};

pub const STANDARD_START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("Invalid FEN '{fen}': {reason}")]
    Malformed { fen: String, reason: String },

    #[error("Illegal setup '{fen}': {reason}")]
    IllegalSetup { fen: String, reason: String },
}

/// A game position as handed to the renderer.
///
/// Only constructible from a FEN that `shakmaty` accepts, so any `Position`
/// can be decoded back into a playable board. The stored text is always the
/// canonical FEN of that board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Position(String);

impl Position {
    pub fn starting() -> Self {
        Self(STANDARD_START_FEN.to_string())
    }

    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        Ok(Self::from_chess(&decode(fen.trim())?))
    }

    pub(crate) fn from_chess(pos: &Chess) -> Self {
        Self(Fen::from_position(pos, EnPassantMode::Legal).to_string())
    }

    pub fn fen(&self) -> &str {
        &self.0
    }

    pub(crate) fn to_chess(&self) -> Result<Chess, PositionError> {
        decode(&self.0)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::starting()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn decode(fen: &str) -> Result<Chess, PositionError> {
    let parsed: Fen = fen.parse().map_err(|e: shakmaty::fen::ParseFenError| {
        PositionError::Malformed {
            fen: fen.to_string(),
            reason: e.to_string(),
        }
    })?;

    parsed
        .into_position(CastlingMode::Standard)
        .map_err(|e| PositionError::IllegalSetup {
            fen: fen.to_string(),
            reason: e.to_string(),
        })
}
