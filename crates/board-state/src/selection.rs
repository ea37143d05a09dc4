//! Armed-square selection and the promotion rule shared by every move path.

use chess_core::LegalMove;
use shakmaty::{Color, Piece, Rank, Role, Square};

/// The armed square and where it can go.
///
/// Either nothing is armed and there are no destinations, or a square is
/// armed with at least one destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    armed: Option<Square>,
    destinations: Vec<LegalMove>,
}

impl SelectionState {
    pub fn armed(&self) -> Option<Square> {
        self.armed
    }

    pub fn destinations(&self) -> &[LegalMove] {
        &self.destinations
    }

    pub fn is_destination(&self, square: Square) -> bool {
        self.destinations.iter().any(|d| d.to == square)
    }

    /// Arm `square`. With no destinations the selection is cleared instead.
    pub(crate) fn arm(&mut self, square: Square, destinations: Vec<LegalMove>) -> bool {
        if destinations.is_empty() {
            self.clear();
            return false;
        }
        self.armed = Some(square);
        self.destinations = destinations;
        true
    }

    pub(crate) fn clear(&mut self) {
        self.armed = None;
        self.destinations.clear();
    }
}

/// A pawn stepping from its seventh rank onto its last rank, at most one
/// file sideways.
pub fn is_promotion_move(piece: Piece, from: Square, to: Square) -> bool {
    if piece.role != Role::Pawn {
        return false;
    }

    let (from_rank, to_rank) = match piece.color {
        Color::White => (Rank::Seventh, Rank::Eighth),
        Color::Black => (Rank::Second, Rank::First),
    };
    let file_diff = (to.file() as i32 - from.file() as i32).abs();

    from.rank() == from_rank && to.rank() == to_rank && file_diff <= 1
}

/// Promotion role to hand the oracle for `from`-`to`.
///
/// `mover` is the piece standing on `from`. `override_piece` is whatever the
/// renderer reported for the gesture; after a promotion dialog it names the
/// chosen piece. Outside promotion moves no hint is given. A missing or
/// non-promotable override falls back to a queen.
pub fn promotion_hint(
    mover: Option<Piece>,
    from: Square,
    to: Square,
    override_piece: Option<Piece>,
) -> Option<Role> {
    let mover = mover?;
    if !is_promotion_move(mover, from, to) {
        return None;
    }

    match override_piece.map(|p| p.role) {
        Some(role @ (Role::Knight | Role::Bishop | Role::Rook | Role::Queen)) => Some(role),
        _ => Some(Role::Queen),
    }
}
