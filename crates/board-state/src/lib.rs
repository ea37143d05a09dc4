//! Interactive chess board state.
//!
//! Turns drag, click, right-click and arrow gestures into a consistent set
//! of square highlights: the armed square, its legal destinations, the last
//! move and right-click annotations. Chess rules are delegated to a
//! [`chess_core::MoveOracle`].

pub mod adapter;
pub mod annotations;
pub mod arrows;
pub mod config;
pub mod error;
pub mod event;
pub mod layers;
pub mod selection;
pub mod session;
pub mod state;

pub use annotations::AnnotationMap;
pub use arrows::{Arrow, ArrowTracker};
pub use config::{SessionConfig, Theme};
pub use error::{AdapterError, ConfigError, InteractionError};
pub use event::{BoardEvent, EventOutput};
pub use layers::{compose, LastMove, SquareStyle, StyleLayer, StyleMapping, PRECEDENCE};
pub use selection::SelectionState;
pub use session::BoardSession;
pub use state::BoardInteractionState;
