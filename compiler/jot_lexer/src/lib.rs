//! Scanner for the Jot language.
//!
//! Jot is a small JavaScript-like language; this crate is its lexical
//! analyzer, the first stage of the (future) compiler pipeline. The scanner
//! is pull-based: a [`Scanner`] is bound to a [`SourceBuffer`] and hands out
//! one [`Token`] per call until the end-of-source token, with no buffering
//! of the token stream.
//!
//! This crate is standalone (zero jot_* dependencies) so that external
//! tools (formatter, LSP, highlighter) can depend on it without pulling in
//! the rest of the compiler.
//!
//! # Design
//!
//! The source is copied once into a sentinel-terminated, cache-line-padded
//! [`SourceBuffer`]. A [`Cursor`] advances through it byte-by-byte with no
//! bounds checks in the common case, and the [`Scanner`] dispatches on the
//! current byte to recognize exactly one lexeme per call. Ordinary token
//! lexemes are borrowed slices of the source buffer; error tokens instead
//! borrow a fixed diagnostic message from static storage (see [`ScanError`]).
//!
//! # Example
//!
//! ```
//! use jot_lexer::{Scanner, SourceBuffer, TokenKind};
//!
//! let buffer = SourceBuffer::new("let answer = 42;");
//! let mut scanner = Scanner::new(&buffer);
//!
//! let token = scanner.next_token();
//! assert_eq!(token.kind, TokenKind::Let);
//! assert_eq!(token.lexeme, "let");
//! assert_eq!(token.line, 1);
//! ```

mod cursor;
mod keywords;
mod scanner;
mod source_buffer;
mod token;

pub use cursor::Cursor;
pub use scanner::{tokenize, Scanner};
pub use source_buffer::SourceBuffer;
pub use token::{ScanError, Token, TokenKind};
