//! Right-click square annotations.

use std::collections::BTreeMap;

use shakmaty::Square;

/// Per-square annotated flag. A missing entry means "not annotated".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationMap {
    marks: BTreeMap<Square, bool>,
}

impl AnnotationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag for `square` and return the new state.
    pub fn right_click(&mut self, square: Square) -> bool {
        if self.is_annotated(square) {
            self.marks.remove(&square);
            false
        } else {
            self.marks.insert(square, true);
            true
        }
    }

    pub fn clear_all(&mut self) {
        self.marks.clear();
    }

    pub fn is_annotated(&self, square: Square) -> bool {
        self.marks.get(&square).copied().unwrap_or(false)
    }

    /// Annotated squares in board order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.marks
            .iter()
            .filter(|(_, on)| **on)
            .map(|(&sq, _)| sq)
    }

    pub fn is_empty(&self) -> bool {
        self.squares().next().is_none()
    }
}
