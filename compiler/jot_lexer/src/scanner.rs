//! Hand-written pull scanner producing one [`Token`] per call.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! tokens with zero heap allocation: ordinary lexemes are slices of the
//! source buffer, error lexemes are static diagnostic messages. Keywords
//! are resolved through [`keywords::lookup`]; numeric and string values are
//! NOT parsed or unescaped here, that is deferred to the future parser.
//!
//! # Design
//!
//! Each `next_token` call first runs an iterative skip loop over
//! whitespace, newlines (counting lines), and `//` comments; the loop is
//! flat, so a source of N consecutive comment lines scans in constant
//! stack space. It then marks the lexeme start and dispatches on a single
//! consumed byte. The sentinel byte (`0x00`) falls through to the
//! end-of-source check (or, for interior nulls, the error path).

use crate::cursor::Cursor;
use crate::keywords;
use crate::source_buffer::SourceBuffer;
use crate::token::{ScanError, Token, TokenKind};

/// Pull-based scanner over a [`SourceBuffer`].
///
/// Caller-owned state, no process-wide globals: any number of instances may
/// scan independent buffers concurrently without synchronization. The
/// bound buffer must outlive the scanner and every token it produces.
///
/// Restart is by reinitialization: constructing a fresh `Scanner` over the
/// same buffer replays the identical token sequence.
#[derive(Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Start position of the lexeme currently being recognized.
    /// Always `<= cursor.pos()`.
    start: u32,
    /// Current 1-based source line; incremented once per consumed `\n`.
    line: u32,
    /// Line on which the current lexeme's first character occurred.
    token_line: u32,
}

impl<'a> Scanner<'a> {
    /// Bind a scanner to a source buffer: cursor at byte 0, line 1.
    ///
    /// An empty buffer is valid; the first call then yields the
    /// end-of-source token immediately.
    pub fn new(buffer: &'a SourceBuffer) -> Self {
        Self {
            cursor: buffer.cursor(),
            start: 0,
            line: 1,
            token_line: 1,
        }
    }

    /// The current 1-based line number of the scan position.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Produce the next token.
    ///
    /// Skips any interleaving of whitespace and `//` comments, then
    /// recognizes exactly one lexeme. Returns the end-of-source token
    /// (zero-length lexeme) once the source is exhausted; further calls
    /// keep returning it. Malformed input yields an in-stream error token
    /// and the scan resumes at the next byte on the following call; this
    /// function never panics and never fails to produce a token.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_trivia();
        self.start = self.cursor.pos();
        self.token_line = self.line;

        if self.cursor.is_eof() {
            return self.make(TokenKind::Eof);
        }

        let c = self.cursor.current();
        self.cursor.advance();

        match c {
            b'(' => self.make(TokenKind::LeftParen),
            b')' => self.make(TokenKind::RightParen),
            b'{' => self.make(TokenKind::LeftBrace),
            b'}' => self.make(TokenKind::RightBrace),
            b';' => self.make(TokenKind::Semicolon),
            b',' => self.make(TokenKind::Comma),
            b'.' => self.make(TokenKind::Dot),
            b'-' => self.make(TokenKind::Minus),
            b'+' => self.make(TokenKind::Plus),
            b'*' => self.make(TokenKind::Star),
            // `//` was consumed by the skip loop, so a slash here is division.
            b'/' => self.make(TokenKind::Slash),
            b'!' => self.one_or_two(TokenKind::BangEqual, TokenKind::Bang),
            b'=' => self.one_or_two(TokenKind::EqualEqual, TokenKind::Equal),
            b'<' => self.one_or_two(TokenKind::LessEqual, TokenKind::Less),
            b'>' => self.one_or_two(TokenKind::GreaterEqual, TokenKind::Greater),
            b'"' => self.string(),
            b'0'..=b'9' => self.number(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(),
            // Anything else, including non-ASCII bytes and interior nulls.
            _ => self.error(ScanError::UnexpectedCharacter),
        }
    }

    // --- Trivia ---

    /// Consume whitespace, newlines, and `//` comments in any interleaving.
    ///
    /// Iterative by construction; the call stack does not grow with the
    /// length of the skipped run. Comment bodies are skipped with a SIMD
    /// newline search and the terminating `\n` is left for the newline arm,
    /// which owns the line counting.
    fn skip_trivia(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\r' | b'\t' => self.cursor.advance(),
                b'\n' => {
                    self.line += 1;
                    self.cursor.advance();
                }
                b'/' if self.cursor.peek() == b'/' => self.cursor.eat_until_newline_or_eof(),
                _ => break,
            }
        }
    }

    // --- Token construction ---

    /// Token for the current lexeme `start..pos`, attributed to the line of
    /// its first character.
    fn make(&self, kind: TokenKind) -> Token<'a> {
        Token::new(kind, self.cursor.slice_from(self.start), self.token_line)
    }

    /// In-stream error token carrying `error`'s static message.
    fn error(&self, error: ScanError) -> Token<'a> {
        Token::error(error, self.token_line)
    }

    /// Fold an operator and a trailing `=` into the two-character form.
    fn one_or_two(&mut self, two: TokenKind, one: TokenKind) -> Token<'a> {
        let kind = if self.cursor.match_byte(b'=') { two } else { one };
        self.make(kind)
    }

    // --- Literal sub-scanners ---

    /// String literal; the opening `"` is already consumed.
    ///
    /// Strings may span lines (each `\n` counts toward the line number) and
    /// a backslash escapes the following character, so `\"` does not
    /// terminate. Escape sequences are carried through verbatim. Reaching
    /// end-of-source before the closing quote produces an error token
    /// instead of a partial string. On success the lexeme includes both
    /// quote characters.
    fn string(&mut self) -> Token<'a> {
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance();
                    return self.make(TokenKind::String);
                }
                b'\n' => {
                    self.line += 1;
                    self.cursor.advance();
                }
                b'\\' => {
                    self.cursor.advance();
                    // The escaped byte is consumed blindly; an escaped
                    // newline still counts toward the line number.
                    match self.cursor.current() {
                        b'\n' => {
                            self.line += 1;
                            self.cursor.advance();
                        }
                        _ if self.cursor.is_eof() => {}
                        _ => self.cursor.advance(),
                    }
                }
                0 => return self.error(ScanError::UnterminatedString),
                _ => unreachable!("skip_to_string_delim returned unexpected byte"),
            }
        }
    }

    /// Numeric literal; the first digit is already consumed.
    ///
    /// A maximal digit run, optionally followed by either `.` plus at least
    /// one digit (floating form) or a trailing `n` (big-integer form).
    /// No scientific notation, no leading-dot forms, no digit separators.
    fn number(&mut self) -> Token<'a> {
        self.cursor.eat_while(|b| b.is_ascii_digit());

        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(); // the '.'
            self.cursor.eat_while(|b| b.is_ascii_digit());
        } else if self.cursor.match_byte(b'n') {
            return self.make(TokenKind::BigInt);
        }
        self.make(TokenKind::Number)
    }

    /// Identifier or keyword; the first letter/underscore is already
    /// consumed. Reserved words are resolved by exact-length match.
    fn identifier(&mut self) -> Token<'a> {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(self.start);
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
        Token::new(kind, text, self.token_line)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    /// Yields tokens up to (not including) end-of-source.
    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}

/// Convenience: scan a whole buffer and collect every token before
/// end-of-source. For streaming access, construct a [`Scanner`] directly.
pub fn tokenize(buffer: &SourceBuffer) -> Vec<Token<'_>> {
    Scanner::new(buffer).collect()
}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
/// Table lookup replaces the multi-range `matches!` with a single indexed
/// read. The sentinel byte (0x00) maps to `false`, naturally terminating
/// the identifier loop.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` continues an identifier (letter, digit, or
/// underscore). Non-ASCII bytes are never identifier characters.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}
