//! mini-lex - Lexical scanner for mini source text
//!
//! This crate turns source text into a flat stream of classified tokens.
//! There are exactly four token kinds:
//!
//! - **Identifier**: a maximal run of Unicode letters
//! - **Whitespace**: a maximal run of Unicode whitespace
//! - **Open**: `(`
//! - **Close**: `)`
//!
//! Any other character is consumed without producing a token, so `a+b`
//! lexes as two identifiers.
//!
//! # Example Usage
//!
//! ```
//! use mini_lex::{tokenize, Lexer, TokenKind};
//! use mini_util::SourceText;
//!
//! // Eagerly, from a source unit
//! let source = SourceText::new("inline", "foo(bar baz)");
//! let tokens = tokenize(&source);
//! assert_eq!(tokens.len(), 6);
//!
//! // Or lazily, one token at a time
//! let mut lexer = Lexer::new("foo(bar baz)");
//! assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Identifier));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character classes

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod token;
pub mod unicode;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
