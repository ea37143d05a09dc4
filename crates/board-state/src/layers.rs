//! Highlight layers and style composition.
//!
//! Four layers each map squares to a style. They are rebuilt from state on
//! every call and overlaid in [`PRECEDENCE`] order, so a later layer replaces
//! an earlier layer's style on the same square.

use std::collections::BTreeMap;

use serde::Serialize;
use shakmaty::Square;

use crate::annotations::AnnotationMap;
use crate::config::Theme;
use crate::selection::SelectionState;

/// Marker radius for quiet destinations, as a percentage of the square.
const QUIET_MARKER_RADIUS: u8 = 25;
/// Capturing destinations get a ring that nearly fills the square.
const CAPTURE_MARKER_RADIUS: u8 = 85;

/// CSS-like style for one square.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquareStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
}

impl SquareStyle {
    fn fill(color: &str) -> Self {
        Self {
            background: Some(color.to_string()),
            ..Self::default()
        }
    }

    fn marker(color: &str, radius: u8) -> Self {
        Self {
            background: Some(format!(
                "radial-gradient(circle, {color} {radius}%, transparent {radius}%)"
            )),
            border_radius: Some("50%".to_string()),
            ..Self::default()
        }
    }

    fn tint(color: &str) -> Self {
        Self {
            background_color: Some(color.to_string()),
            ..Self::default()
        }
    }
}

pub type StyleMapping = BTreeMap<Square, SquareStyle>;

/// The most recent completed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMove {
    pub from: Square,
    pub to: Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleLayer {
    LegalDestination,
    Selection,
    LastMove,
    Annotation,
}

/// Overlay order, lowest first.
pub const PRECEDENCE: [StyleLayer; 4] = [
    StyleLayer::LegalDestination,
    StyleLayer::Selection,
    StyleLayer::LastMove,
    StyleLayer::Annotation,
];

/// Everything the layers are derived from.
#[derive(Debug, Clone, Copy)]
pub struct LayerInputs<'a> {
    pub selection: &'a SelectionState,
    pub annotations: &'a AnnotationMap,
    pub last_move: Option<LastMove>,
}

/// Build a single layer.
pub fn layer(kind: StyleLayer, inputs: LayerInputs<'_>, theme: &Theme) -> StyleMapping {
    match kind {
        StyleLayer::LegalDestination => inputs
            .selection
            .destinations()
            .iter()
            .map(|d| {
                let radius = if d.is_capture {
                    CAPTURE_MARKER_RADIUS
                } else {
                    QUIET_MARKER_RADIUS
                };
                (d.to, SquareStyle::marker(&theme.marker_color, radius))
            })
            .collect(),
        StyleLayer::Selection => inputs
            .selection
            .armed()
            .map(|sq| (sq, SquareStyle::fill(&theme.selection_color)))
            .into_iter()
            .collect(),
        StyleLayer::LastMove => inputs
            .last_move
            .map(|lm| {
                let style = SquareStyle::fill(&theme.last_move_color);
                [(lm.from, style.clone()), (lm.to, style)]
            })
            .into_iter()
            .flatten()
            .collect(),
        StyleLayer::Annotation => inputs
            .annotations
            .squares()
            .map(|sq| (sq, SquareStyle::tint(&theme.annotation_color)))
            .collect(),
    }
}

/// Overlay every layer in precedence order.
pub fn compose(inputs: LayerInputs<'_>, theme: &Theme) -> StyleMapping {
    let mut styles = StyleMapping::new();
    for kind in PRECEDENCE {
        styles.extend(layer(kind, inputs, theme));
    }
    styles
}
