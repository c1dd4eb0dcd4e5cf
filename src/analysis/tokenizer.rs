//! Whitespace tokenizer that keeps the surface form of every word.

use crate::analysis::token::Token;

/// Whether `c` separates words.
///
/// Unicode whitespace plus the ASCII file, group, record and unit separators
/// (U+001C..=U+001F), which plain-text exports use between fields.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Split text on separators and pair each piece with its letters-only form.
///
/// Pieces without any ASCII letter are dropped. The result depends only on
/// `text`, so calling it twice yields the same sequence.
///
/// ```
/// use spellreport::analysis::tokenizer::tokenize;
///
/// let tokens = tokenize("Hello, world! 42");
/// let surfaces: Vec<&str> = tokens.iter().map(|t| t.surface()).collect();
/// assert_eq!(surfaces, vec!["Hello,", "world!"]);
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split(is_separator)
        .filter(|piece| !piece.is_empty())
        .map(Token::new)
        .filter(|token| !token.is_empty())
        .collect()
}
