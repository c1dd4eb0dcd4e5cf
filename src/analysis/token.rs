//! Token type produced by the tokenizer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A word as it appears in the source text together with its letters-only form.
///
/// ```
/// use spellreport::analysis::token::Token;
///
/// let token = Token::new("don't,");
/// assert_eq!(token.surface(), "don't,");
/// assert_eq!(token.normalized(), "dont");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    surface: String,
    normalized: String,
}

impl Token {
    /// Create a token from a surface form, deriving the normalized form.
    pub fn new<S: Into<String>>(surface: S) -> Self {
        let surface = surface.into();
        let normalized = normalize(&surface);
        Token {
            surface,
            normalized,
        }
    }

    /// The token exactly as written, including casing and punctuation.
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// The surface form with every non `A-Za-z` character removed.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Whether the token carries no ASCII letters at all.
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.surface)
    }
}

/// Strip everything that is not an ASCII letter.
pub fn normalize(surface: &str) -> String {
    surface.chars().filter(char::is_ascii_alphabetic).collect()
}
