//! Formula tokens
//!
//! A formula reaches the engine as an ordered sequence of [`Token`]s produced
//! by an external tokenizer: numeric literals, the four arithmetic operators,
//! parentheses, cell labels, and whitespace. Tokens are immutable text; the
//! evaluator classifies them structurally and never rewrites a sequence in
//! place.

use std::fmt;

/// A single lexical unit of a formula
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token(String);

impl Token {
    /// Create a new token
    pub fn new<S: Into<String>>(s: S) -> Self {
        Token(s.into())
    }

    /// Get the token text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::new(s)
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token(s)
    }
}

/// Build a token sequence from string slices
///
/// ```rust
/// use tally_sheets_core::tokens;
///
/// let formula = tokens(["3", "+", "4"]);
/// assert_eq!(formula.len(), 3);
/// ```
pub fn tokens<'a, I>(parts: I) -> Vec<Token>
where
    I: IntoIterator<Item = &'a str>,
{
    parts.into_iter().map(Token::from).collect()
}
