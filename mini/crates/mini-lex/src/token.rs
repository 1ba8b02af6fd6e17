//! Token definitions.

use std::fmt;

use mini_util::Span;

/// The category a token belongs to.
///
/// This set is closed: characters that fit none of these categories do not
/// produce a token at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A maximal run of whitespace characters.
    Whitespace,
    /// `(`
    Open,
    /// `)`
    Close,
    /// A maximal run of letters.
    Identifier,
}

impl TokenKind {
    /// Returns the canonical upper-case name of this kind.
    ///
    /// # Example
    ///
    /// ```
    /// use mini_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Identifier.as_str(), "IDENTIFIER");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Open => "OPEN",
            TokenKind::Close => "CLOSE",
            TokenKind::Identifier => "IDENTIFIER",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified span of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    /// What this token is.
    pub kind: TokenKind,
    /// Where it was matched.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token matched in `source`.
    ///
    /// `source` must be the text the token was lexed from.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span.slice(source)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)
    }
}
