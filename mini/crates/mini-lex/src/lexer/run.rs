//! Run lexing.
//!
//! Identifiers and whitespace are both maximal runs of a single character
//! class. The first character has already been classified by the caller.

use crate::token::TokenKind;
use crate::unicode::{is_letter, is_whitespace};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a run of letters.
    pub(crate) fn lex_identifier(&mut self) -> TokenKind {
        self.cursor.eat_while(is_letter);
        TokenKind::Identifier
    }

    /// Lexes a run of whitespace.
    pub(crate) fn lex_whitespace(&mut self) -> TokenKind {
        self.cursor.eat_while(is_whitespace);
        TokenKind::Whitespace
    }
}
