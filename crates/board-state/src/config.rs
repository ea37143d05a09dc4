//! Session configuration from environment variables

use std::env;

use chess_core::Position;

use crate::error::ConfigError;

/// Colors used when composing square styles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub selection_color: String,
    pub last_move_color: String,
    pub annotation_color: String,
    /// Fill of the legal-destination dot/ring.
    pub marker_color: String,
    pub light_square_color: String,
    pub dark_square_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selection_color: "rgba(255, 255, 0, 0.4)".to_string(),
            last_move_color: "rgba(255, 255, 0, 0.4)".to_string(),
            annotation_color: "rgba(0, 0, 255, 0.4)".to_string(),
            marker_color: "rgba(0,0,0,.1)".to_string(),
            light_square_color: "#e6dbf1".to_string(),
            dark_square_color: "#997db5".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Position a new game starts from
    pub start_position: Position,

    pub theme: Theme,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_position: Position::starting(),
            theme: Theme::default(),
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Theme::default();
        let color = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        let theme = Theme {
            selection_color: color("BOARD_SELECTION_COLOR", defaults.selection_color),
            last_move_color: color("BOARD_LAST_MOVE_COLOR", defaults.last_move_color),
            annotation_color: color("BOARD_ANNOTATION_COLOR", defaults.annotation_color),
            marker_color: color("BOARD_MARKER_COLOR", defaults.marker_color),
            light_square_color: color("BOARD_LIGHT_SQUARE_COLOR", defaults.light_square_color),
            dark_square_color: color("BOARD_DARK_SQUARE_COLOR", defaults.dark_square_color),
        };

        let start_position = match lookup("BOARD_START_FEN") {
            Some(fen) if !fen.trim().is_empty() => Position::from_fen(&fen)?,
            _ => Position::starting(),
        };

        Ok(Self {
            start_position,
            theme,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SessionConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.start_position, Position::starting());
        assert_eq!(config.theme, Theme::default());
    }

    #[test]
    fn test_overrides() {
        let config = SessionConfig::from_lookup(lookup_from(&[
            ("BOARD_ANNOTATION_COLOR", "red"),
            ("BOARD_SELECTION_COLOR", "  "),
            ("BOARD_START_FEN", "4k3/8/8/8/8/8/8/4K3 w - - 0 1"),
        ]))
        .unwrap();
        assert_eq!(config.theme.annotation_color, "red");
        assert_eq!(config.theme.selection_color, Theme::default().selection_color);
        assert_eq!(config.start_position.fen(), "4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    }

    #[test]
    fn test_invalid_start_fen() {
        let result = SessionConfig::from_lookup(lookup_from(&[("BOARD_START_FEN", "nonsense")]));
        assert!(matches!(result, Err(ConfigError::StartFen(_))));
    }
}
