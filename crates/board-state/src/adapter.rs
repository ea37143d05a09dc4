//! Renderer boundary.
//!
//! Renderers speak JSON with square names and piece descriptors such as
//! `"wP"`. Gestures are parsed here, once, into [`BoardEvent`]s; the session
//! state is rendered back out as a [`Frame`].

use std::collections::BTreeMap;

use chess_core::{parse_descriptor, GameOutcome, MoveOracle, MoveRecord, Position};
use serde::{Deserialize, Serialize};
use shakmaty::{Piece, Square};
use tracing::warn;

use crate::arrows::Arrow;
use crate::error::AdapterError;
use crate::event::{BoardEvent, EventOutput};
use crate::layers::SquareStyle;
use crate::session::BoardSession;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Gesture {
    DragBegin {
        square: String,
    },
    Drop {
        from: String,
        to: String,
        #[serde(default)]
        piece: Option<String>,
    },
    PromotionCheck {
        from: String,
        to: String,
        piece: String,
    },
    Click {
        square: String,
    },
    RightClick {
        square: String,
    },
    Arrows {
        arrows: Vec<[String; 2]>,
    },
    NewGame {
        #[serde(default)]
        fen: Option<String>,
    },
}

impl Gesture {
    /// Translate into a board event. `start` is used for a new game without
    /// an explicit FEN.
    pub fn into_event(self, start: &Position) -> Result<BoardEvent, AdapterError> {
        let event = match self {
            Gesture::DragBegin { square } => BoardEvent::DragBegin {
                square: parse_square(&square)?,
            },
            Gesture::Drop { from, to, piece } => BoardEvent::Drop {
                from: parse_square(&from)?,
                to: parse_square(&to)?,
                piece: piece.as_deref().and_then(lenient_descriptor),
            },
            Gesture::PromotionCheck { from, to, piece } => BoardEvent::PromotionQuery {
                from: parse_square(&from)?,
                to: parse_square(&to)?,
                piece: lenient_descriptor(&piece),
            },
            Gesture::Click { square } => BoardEvent::Click(parse_square(&square)?),
            Gesture::RightClick { square } => BoardEvent::RightClick(parse_square(&square)?),
            Gesture::Arrows { arrows } => BoardEvent::ArrowsChanged(
                arrows
                    .iter()
                    .map(|[from, to]| Ok(Arrow::new(parse_square(from)?, parse_square(to)?)))
                    .collect::<Result<Vec<_>, AdapterError>>()?,
            ),
            Gesture::NewGame { fen } => BoardEvent::NewGame(match fen {
                Some(fen) => Position::from_fen(&fen)?,
                None => start.clone(),
            }),
        };
        Ok(event)
    }
}

fn parse_square(name: &str) -> Result<Square, AdapterError> {
    name.trim()
        .to_ascii_lowercase()
        .parse()
        .map_err(|_| AdapterError::Square(name.to_string()))
}

/// A bad descriptor only costs the promotion override, never the gesture.
fn lenient_descriptor(raw: &str) -> Option<Piece> {
    match parse_descriptor(raw) {
        Ok(piece) => Some(piece),
        Err(e) => {
            warn!(descriptor = raw, error = %e, "ignoring piece descriptor");
            None
        }
    }
}

/// Answer to the gesture that produced a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply {
    DragAllowed {
        allowed: bool,
    },
    Move {
        accepted: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        record: Option<MoveRecord>,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
    PromotionNeeded {
        needed: bool,
    },
    Selection {
        armed: Option<String>,
    },
    Annotation {
        square: String,
        annotated: bool,
    },
    Arrows {
        changed: bool,
    },
    NewGame,
}

impl From<&EventOutput> for Reply {
    fn from(output: &EventOutput) -> Self {
        match output {
            EventOutput::DragAllowed(allowed) => Reply::DragAllowed { allowed: *allowed },
            EventOutput::Move(Ok(record)) => Reply::Move {
                accepted: true,
                record: Some(record.clone()),
                reason: None,
            },
            EventOutput::Move(Err(e)) => Reply::Move {
                accepted: false,
                record: None,
                reason: Some(e.to_string()),
            },
            EventOutput::PromotionNeeded(needed) => Reply::PromotionNeeded { needed: *needed },
            EventOutput::Selection(result) => Reply::Selection {
                armed: result.as_ref().ok().map(|sq| sq.to_string()),
            },
            EventOutput::Annotation { square, annotated } => Reply::Annotation {
                square: square.to_string(),
                annotated: *annotated,
            },
            EventOutput::Arrows(result) => Reply::Arrows {
                changed: result.is_ok(),
            },
            EventOutput::NewGame => Reply::NewGame,
        }
    }
}

/// Everything a renderer needs to draw the board after one gesture.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub position: Position,
    pub arrows: Vec<[String; 2]>,
    pub square_styles: BTreeMap<String, SquareStyle>,
    pub light_square_color: String,
    pub dark_square_color: String,
    pub reply: Reply,
    pub game_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<GameOutcome>,
}

impl Frame {
    pub fn render<O: MoveOracle>(session: &BoardSession<O>, output: &EventOutput) -> Self {
        Self {
            position: session.position().clone(),
            arrows: session
                .arrows()
                .iter()
                .map(|a| [a.from.to_string(), a.to.to_string()])
                .collect(),
            square_styles: session
                .square_styles()
                .into_iter()
                .map(|(sq, style)| (sq.to_string(), style))
                .collect(),
            light_square_color: session.theme().light_square_color.clone(),
            dark_square_color: session.theme().dark_square_color.clone(),
            reply: Reply::from(output),
            game_over: session.is_game_over(),
            outcome: session.outcome(),
        }
    }
}

/// Parse one JSON gesture, run it, and render the resulting frame.
pub fn step<O: MoveOracle>(session: &mut BoardSession<O>, line: &str) -> Result<Frame, AdapterError> {
    let gesture: Gesture = serde_json::from_str(line)?;
    let event = gesture.into_event(session.start_position())?;
    let output = session.dispatch(event);
    Ok(Frame::render(session, &output))
}
