use std::str::FromStr;

use crate::foundation::error::{LevelupError, LevelupResult};

/// Characters a glyph sheet provides, in sheet order.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz.!' ";

/// Text shown when the caller does not supply any.
pub const DEFAULT_TEXT: &str = "level up!";

/// What a user sees when their text contains an unsupported character.
pub const SYNTAX_ERROR_MESSAGE: &str = "Syntax Error: For input string, only alpha characters, \".\", \"!\", \"'\" (single quote) and \" \" (space) are allowed.";

/// Position of `ch` in [`ALPHABET`], if it is supported.
pub fn glyph_index(ch: char) -> Option<usize> {
    match ch {
        'a'..='z' => Some(ch as usize - 'a' as usize),
        '.' => Some(26),
        '!' => Some(27),
        '\'' => Some(28),
        ' ' => Some(29),
        _ => None,
    }
}

/// Whether `ch` can be drawn.
pub fn is_supported(ch: char) -> bool {
    glyph_index(ch).is_some()
}

/// Text that has passed the alphabet check (`^[a-z.!' ]*$`).
///
/// Holding one of these is what lets the animation core stay infallible.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RevealText(String);

impl RevealText {
    /// Accept `text` verbatim if every character is in [`ALPHABET`].
    pub fn parse(text: impl Into<String>) -> LevelupResult<Self> {
        let text = text.into();
        if let Some(bad) = text.chars().find(|c| !is_supported(*c)) {
            return Err(LevelupError::validation(format!(
                "unsupported character {bad:?} in reveal text; only a-z, '.', '!', \"'\" and ' ' are allowed"
            )));
        }
        Ok(Self(text))
    }

    /// Lowercase `text` first, then validate it.
    pub fn from_user_input(text: &str) -> LevelupResult<Self> {
        Self::parse(text.to_lowercase())
    }

    /// The validated text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RevealText {
    fn default() -> Self {
        Self(DEFAULT_TEXT.to_string())
    }
}

impl FromStr for RevealText {
    type Err = LevelupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for RevealText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RevealText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/input.rs"]
mod tests;
