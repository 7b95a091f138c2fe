//! src/domain/registrant_name.rs

use crate::domain::ValidationError;
use unicode_segmentation::UnicodeSegmentation;

const MAX_NAME_GRAPHEMES: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrantName(String);

impl RegistrantName {
    /// Returns an instance of `RegistrantName` if the input is not blank and
    /// at most 256 graphemes long. The name is stored as given.
    pub fn parse(s: String) -> Result<RegistrantName, ValidationError> {
        // `trim()` returns a view over the input `s` without trailing
        // whitespace-like characters.
        let is_empty_or_whitespace = s.trim().is_empty();
        // A grapheme is defined by the Unicode standard as a "user-perceived"
        // character: `å` is a single grapheme, but it is composed of two characters.
        let is_too_long = s.graphemes(true).count() > MAX_NAME_GRAPHEMES;

        if is_empty_or_whitespace || is_too_long {
            Err(ValidationError::InvalidName(s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for RegistrantName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegistrantName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
