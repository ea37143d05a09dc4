use board_state::{BoardEvent, BoardInteractionState, EventOutput};
use chess_core::{Position, ShakmatyOracle};
use shakmaty::Square;

pub const ORACLE: ShakmatyOracle = ShakmatyOracle;

/// Fresh state at the standard starting position.
pub fn start() -> BoardInteractionState {
    BoardInteractionState::new(Position::starting())
}

pub fn from_fen(fen: &str) -> BoardInteractionState {
    BoardInteractionState::new(Position::from_fen(fen).unwrap())
}

/// Feed a sequence of events, returning the final state and every reply.
pub fn run(state: BoardInteractionState, events: Vec<BoardEvent>) -> (BoardInteractionState, Vec<EventOutput>) {
    let mut outputs = Vec::new();
    let mut state = state;
    for event in events {
        let (next, output) = state.handle(&ORACLE, event);
        state = next;
        outputs.push(output);
    }
    (state, outputs)
}

/// Parse a square name, for readable test tables.
pub fn sq(name: &str) -> Square {
    name.parse().unwrap()
}
