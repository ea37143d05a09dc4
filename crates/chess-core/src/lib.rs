//! Chess primitives shared by the board crates.
//!
//! Wraps shakmaty behind a small move-oracle interface so the interaction
//! layer never touches rule logic or position internals.

pub mod descriptor;
pub mod oracle;
pub mod position;

pub use descriptor::{format_descriptor, parse_descriptor, DescriptorError};
pub use oracle::{AppliedMove, GameOutcome, LegalMove, MoveOracle, MoveRecord, OracleError, ShakmatyOracle};
pub use position::{Position, PositionError, STANDARD_START_FEN};
