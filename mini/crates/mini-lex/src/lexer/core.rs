//! Core lexer implementation.

use mini_util::{SourceText, Span};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::unicode::{is_close, is_letter, is_open, is_whitespace};

/// Lexer for mini source text.
///
/// Produces tokens lazily through [`Iterator`]. Each call scans from the
/// current position, so the lexer never backtracks and holds no state other
/// than its cursor.
///
/// # Example
///
/// ```
/// use mini_lex::{Lexer, TokenKind};
///
/// let kinds: Vec<_> = Lexer::new("(a b)").map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Open,
///         TokenKind::Identifier,
///         TokenKind::Whitespace,
///         TokenKind::Identifier,
///         TokenKind::Close,
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Starting position of the current token (byte offset).
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Characters consumed without producing a token.
    skipped: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            skipped: 0,
        }
    }

    /// Creates a new lexer over the content of a source unit.
    pub fn for_source(source: &'a SourceText) -> Self {
        Self::new(source.content())
    }

    /// Returns the next token, or `None` once the source is exhausted.
    ///
    /// Letters and whitespace are consumed in maximal runs; `(` and `)` are
    /// always single-character tokens. Any other character is consumed
    /// without producing a token.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            if self.cursor.is_at_end() {
                return None;
            }

            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();
            self.token_start_column = self.cursor.column();

            let kind = match self.cursor.current_char() {
                c if is_letter(c) => self.lex_identifier(),
                c if is_whitespace(c) => self.lex_whitespace(),
                c if is_open(c) => {
                    self.cursor.advance();
                    TokenKind::Open
                },
                c if is_close(c) => {
                    self.cursor.advance();
                    TokenKind::Close
                },
                c => {
                    trace!(
                        line = self.token_start_line,
                        column = self.token_start_column,
                        "dropping unclassified character {:?}",
                        c
                    );
                    self.cursor.advance();
                    self.skipped += 1;
                    continue;
                },
            };

            return Some(Token::new(kind, self.token_span()));
        }
    }

    /// Span from the start of the current token to the cursor.
    fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Returns the number of characters dropped so far because they matched
    /// no token category.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // At most one token per remaining character, and chars <= bytes.
        (0, Some(self.cursor.remaining().len()))
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Tokenizes a whole source unit.
///
/// Equivalent to collecting a [`Lexer`] over the source's content. Calling
/// this twice on the same source yields identical vectors.
///
/// # Example
///
/// ```
/// use mini_lex::{tokenize, TokenKind};
/// use mini_util::SourceText;
///
/// let source = SourceText::new("inline", "a+b");
/// let kinds: Vec<_> = tokenize(&source).into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Identifier]);
/// ```
pub fn tokenize(source: &SourceText) -> Vec<Token> {
    let mut lexer = Lexer::for_source(source);
    let tokens: Vec<Token> = lexer.by_ref().collect();

    debug!(
        file = source.name(),
        tokens = tokens.len(),
        skipped = lexer.skipped(),
        "tokenized source"
    );
    tokens
}
