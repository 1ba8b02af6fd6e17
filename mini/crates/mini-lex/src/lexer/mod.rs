//! Lexer module.
//!
//! - `core` - Main Lexer struct, dispatch and `tokenize`
//! - `run` - Maximal runs of letters and whitespace

mod core;
mod run;

pub use core::{tokenize, Lexer};
