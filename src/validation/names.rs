//! Name and extension legality rules.

use crate::error::{ValidationError, ValidationKind};

/// Characters never allowed in a name or extension
pub const FORBIDDEN_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Strip surrounding whitespace, including the byte order mark U+FEFF.
pub fn trim_name(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

pub fn contains_forbidden_chars(value: &str) -> bool {
    value.chars().any(|c| FORBIDDEN_CHARS.contains(&c))
}

fn validate_component(raw: &str, empty_message: &str) -> Result<(), ValidationError> {
    let trimmed = trim_name(raw);

    if trimmed.is_empty() {
        return Err(ValidationError::new(ValidationKind::Empty, empty_message));
    }

    if contains_forbidden_chars(trimmed) {
        return Err(ValidationError::new(
            ValidationKind::Invalid,
            "Contains forbidden characters",
        ));
    }

    Ok(())
}

/// Validate a file or folder name.
pub fn validate_name(raw: &str) -> Result<(), ValidationError> {
    validate_component(raw, "Name cannot be empty")
}

/// Validate a file extension.
pub fn validate_extension(raw: &str) -> Result<(), ValidationError> {
    validate_component(raw, "Extension cannot be empty")
}
