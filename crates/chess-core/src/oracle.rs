//! Move legality oracle.
//!
//! All chess-rule knowledge lives behind [`MoveOracle`]. Callers hand it an
//! opaque [`Position`] and squares; it answers with legal destinations, the
//! result of applying a move, and game status. [`ShakmatyOracle`] is the
//! implementation backed by shakmaty.

use serde::Serialize;
use shakmaty::san::San;
use shakmaty::{Color, File, KnownOutcome, Move, Piece, Position as _, Role, Square};

use crate::position::{Position, PositionError};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum OracleError {
    #[error("Illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },

    #[error(transparent)]
    InvalidPosition(#[from] PositionError),
}

/// One reachable destination from a given square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMove {
    pub to: Square,
    /// The destination holds a piece of the opposing color.
    pub is_capture: bool,
}

/// Metadata for a move the oracle accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    #[serde(serialize_with = "serialize_square")]
    pub from: Square,
    #[serde(serialize_with = "serialize_square")]
    pub to: Square,
    #[serde(serialize_with = "serialize_role")]
    pub promotion: Option<Role>,
    pub san: String,
}

#[derive(Debug, Clone)]
pub struct AppliedMove {
    pub position: Position,
    pub record: MoveRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Draw,
}

pub trait MoveOracle {
    /// Legal destinations from `from`, in generation order, one entry per
    /// target square. Empty when the square is empty or belongs to the side
    /// not on move.
    fn legal_moves(&self, position: &Position, from: Square) -> Result<Vec<LegalMove>, OracleError>;

    /// Play `from`-`to`. A promotion hint is required for promotions and
    /// ignored otherwise.
    fn apply_move(
        &self,
        position: &Position,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> Result<AppliedMove, OracleError>;

    fn is_game_over(&self, position: &Position) -> Result<bool, OracleError>;

    fn side_to_move(&self, position: &Position) -> Result<Color, OracleError>;

    fn piece_at(&self, position: &Position, square: Square) -> Result<Option<Piece>, OracleError>;

    fn outcome(&self, position: &Position) -> Result<Option<GameOutcome>, OracleError>;
}

/// Standard chess rules via shakmaty.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShakmatyOracle;

impl ShakmatyOracle {
    pub fn new() -> Self {
        Self
    }
}

impl MoveOracle for ShakmatyOracle {
    fn legal_moves(&self, position: &Position, from: Square) -> Result<Vec<LegalMove>, OracleError> {
        let pos = position.to_chess()?;
        let mover = pos.turn();
        let mut moves: Vec<LegalMove> = Vec::new();

        for mv in pos.legal_moves().iter().filter(|m| m.from() == Some(from)) {
            let to = destination(mv);
            // Promotions produce one move per role on the same square
            if moves.iter().any(|m| m.to == to) {
                continue;
            }
            let is_capture = pos
                .board()
                .piece_at(to)
                .is_some_and(|p| p.color != mover);
            moves.push(LegalMove { to, is_capture });
        }

        Ok(moves)
    }

    fn apply_move(
        &self,
        position: &Position,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> Result<AppliedMove, OracleError> {
        let mut pos = position.to_chess()?;

        let legal = pos
            .legal_moves()
            .iter()
            .find(|m| {
                m.from() == Some(from)
                    && destination(m) == to
                    && (m.promotion().is_none() || m.promotion() == promotion)
            })
            .cloned()
            .ok_or(OracleError::IllegalMove { from, to })?;

        let san = San::from_move(&pos, legal.clone()).to_string();
        pos.play_unchecked(legal.clone());

        tracing::trace!(%from, %to, %san, "oracle applied move");

        Ok(AppliedMove {
            position: Position::from_chess(&pos),
            record: MoveRecord {
                from,
                to,
                promotion: legal.promotion(),
                san,
            },
        })
    }

    fn is_game_over(&self, position: &Position) -> Result<bool, OracleError> {
        Ok(position.to_chess()?.is_game_over())
    }

    fn side_to_move(&self, position: &Position) -> Result<Color, OracleError> {
        Ok(position.to_chess()?.turn())
    }

    fn piece_at(&self, position: &Position, square: Square) -> Result<Option<Piece>, OracleError> {
        Ok(position.to_chess()?.board().piece_at(square))
    }

    fn outcome(&self, position: &Position) -> Result<Option<GameOutcome>, OracleError> {
        let pos = position.to_chess()?;
        Ok(pos.outcome().known().map(|outcome| match outcome {
            KnownOutcome::Decisive { winner: Color::White } => GameOutcome::WhiteWins,
            KnownOutcome::Decisive { winner: Color::Black } => GameOutcome::BlackWins,
            KnownOutcome::Draw => GameOutcome::Draw,
        }))
    }
}

/// Square a move lands on from the user's point of view. Castling is reported
/// as the king's destination rather than the rook's square.
fn destination(mv: &Move) -> Square {
    match mv {
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() { File::G } else { File::C };
            Square::from_coords(file, king.rank())
        }
        other => other.to(),
    }
}

fn serialize_square<S: serde::Serializer>(square: &Square, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(square)
}

fn serialize_role<S: serde::Serializer>(role: &Option<Role>, s: S) -> Result<S::Ok, S::Error> {
    match role {
        Some(r) => s.serialize_some(&r.char().to_string()),
        None => s.serialize_none(),
    }
}
