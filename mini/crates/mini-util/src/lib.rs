//! mini-util - Shared utilities for the mini toolchain
//!
//! This crate holds the pieces every phase needs:
//!
//! - [`source`] - Named, immutable source units and the file loader
//! - [`span`] - Source locations attached to tokens
//! - [`error`] - Error types for loading sources
//!
//! # Example
//!
//! ```
//! use mini_util::SourceText;
//!
//! let source = SourceText::new("inline", "(foo bar)");
//! assert_eq!(source.name(), "inline");
//! assert_eq!(source.content(), "(foo bar)");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod source;
pub mod span;

pub use error::{SourceError, SourceResult};
pub use source::SourceText;
pub use span::Span;
