//! User-drawn arrows.

use shakmaty::Square;

use crate::error::InteractionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arrow {
    pub from: Square,
    pub to: Square,
}

impl Arrow {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

/// Arrow list in drawing order. Duplicates are kept as drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrowTracker {
    arrows: Vec<Arrow>,
}

impl ArrowTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list. Renderers re-report arrows they already
    /// drew, so a list equal to the current one is refused with
    /// `StaleArrowUpdate` and nothing changes.
    pub fn set_arrows(&mut self, arrows: Vec<Arrow>) -> Result<(), InteractionError> {
        if arrows == self.arrows {
            return Err(InteractionError::StaleArrowUpdate);
        }
        self.arrows = arrows;
        Ok(())
    }

    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }
}
