//! Two-character piece descriptors ("wP", "bQ") as used by board renderers.

use shakmaty::{Color, Piece, Role};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("Piece descriptor must be two characters, got '{0}'")]
    Length(String),

    #[error("Unknown color '{0}' in piece descriptor")]
    Color(char),

    #[error("Unknown piece type '{0}' in piece descriptor")]
    Role(char),
}

/// Parse a descriptor like `"wP"` into a structured piece.
/// The role character is case-insensitive.
pub fn parse_descriptor(s: &str) -> Result<Piece, DescriptorError> {
    let mut chars = s.trim().chars();
    let (Some(c), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(DescriptorError::Length(s.to_string()));
    };

    let color = Color::from_char(c).ok_or(DescriptorError::Color(c))?;
    let role = Role::from_char(r.to_ascii_lowercase()).ok_or(DescriptorError::Role(r))?;

    Ok(Piece { color, role })
}

/// Format a piece back into descriptor form (`w`/`b` + uppercase role).
pub fn format_descriptor(piece: Piece) -> String {
    format!("{}{}", piece.color.char(), piece.role.upper_char())
}
