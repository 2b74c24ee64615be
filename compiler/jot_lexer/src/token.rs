//! Token kinds, token values, and the scan-error taxonomy.
//!
//! [`TokenKind`] is the closed set of classifications the scanner can
//! produce; a future parser matches on it exhaustively. [`Token`] is the
//! per-call scanner output: kind + borrowed lexeme + 1-based line.
//!
//! # Lexeme backing storage
//!
//! Ordinary tokens borrow their lexeme from the source buffer and are only
//! valid while that buffer lives. Error tokens instead borrow one of the
//! fixed diagnostic messages in [`ScanError`], which live in static
//! storage. The two cases share the `&str` representation but have disjoint
//! backing stores; callers must not treat an error token's lexeme as a
//! source location.

/// Classification of a scanned token.
///
/// `repr(u8)` with discriminants grouped into semantic ranges so a parser
/// can range-check categories cheaply:
///
/// - Literals: 0-15
/// - Punctuation: 32-47
/// - One/two-character operators: 48-63
/// - Keywords: 64-95
/// - Specials: 240+
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Literals ===
    /// Name: a maximal run of letters, digits, underscores that is not a
    /// reserved keyword.
    Identifier = 0,
    /// String literal; the lexeme includes both surrounding quotes.
    String = 1,
    /// Numeric literal: integer or `123.45` floating form.
    Number = 2,
    /// Arbitrary-precision integer literal: digits with a trailing `n`,
    /// e.g. `42n`. Distinct from [`Number`](Self::Number) so an evaluator
    /// can route it to unbounded-precision handling.
    BigInt = 3,

    // === Punctuation ===
    LeftParen = 32,
    RightParen = 33,
    LeftBrace = 34,
    RightBrace = 35,
    Comma = 36,
    Dot = 37,
    Minus = 38,
    Plus = 39,
    Semicolon = 40,
    Slash = 41,
    Star = 42,

    // === One/two-character operators ===
    Bang = 48,
    BangEqual = 49,
    Equal = 50,
    EqualEqual = 51,
    Greater = 52,
    GreaterEqual = 53,
    Less = 54,
    LessEqual = 55,

    // === Keywords ===
    And = 64,
    Class = 65,
    Const = 66,
    Else = 67,
    False = 68,
    For = 69,
    Fun = 70,
    If = 71,
    Let = 72,
    Null = 73,
    Or = 74,
    Print = 75,
    Return = 76,
    Super = 77,
    This = 78,
    True = 79,
    Var = 80,
    While = 81,

    // === Specials ===
    /// Malformed input; the token's lexeme is a static diagnostic message.
    Error = 240,
    /// End of source. Zero-length lexeme; scanning past it keeps
    /// producing `Eof`.
    Eof = 255,
}

/// Size assertion: TokenKind is a single byte.
const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);

impl TokenKind {
    /// Returns `true` for reserved-word kinds.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(self as u8, 64..=81)
    }

    /// The fixed source spelling for kinds that have exactly one, `None`
    /// for literals and specials whose lexeme varies per occurrence.
    pub const fn fixed_lexeme(self) -> Option<&'static str> {
        match self {
            Self::LeftParen => Some("("),
            Self::RightParen => Some(")"),
            Self::LeftBrace => Some("{"),
            Self::RightBrace => Some("}"),
            Self::Comma => Some(","),
            Self::Dot => Some("."),
            Self::Minus => Some("-"),
            Self::Plus => Some("+"),
            Self::Semicolon => Some(";"),
            Self::Slash => Some("/"),
            Self::Star => Some("*"),
            Self::Bang => Some("!"),
            Self::BangEqual => Some("!="),
            Self::Equal => Some("="),
            Self::EqualEqual => Some("=="),
            Self::Greater => Some(">"),
            Self::GreaterEqual => Some(">="),
            Self::Less => Some("<"),
            Self::LessEqual => Some("<="),
            Self::And => Some("and"),
            Self::Class => Some("class"),
            Self::Const => Some("const"),
            Self::Else => Some("else"),
            Self::False => Some("false"),
            Self::For => Some("for"),
            Self::Fun => Some("fun"),
            Self::If => Some("if"),
            Self::Let => Some("let"),
            Self::Null => Some("null"),
            Self::Or => Some("or"),
            Self::Print => Some("print"),
            Self::Return => Some("return"),
            Self::Super => Some("super"),
            Self::This => Some("this"),
            Self::True => Some("true"),
            Self::Var => Some("var"),
            Self::While => Some("while"),
            Self::Identifier
            | Self::String
            | Self::Number
            | Self::BigInt
            | Self::Error
            | Self::Eof => None,
        }
    }
}

/// What went wrong when the scanner produced an [`Error`](TokenKind::Error)
/// token.
///
/// The scanner never raises errors or halts the stream: both members of
/// this taxonomy surface as in-stream error tokens carrying the fixed
/// message below, and scanning resumes at the next unconsumed byte on the
/// following call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanError {
    /// End of source reached before the closing `"` of a string literal.
    UnterminatedString,
    /// A byte that begins no lexeme (including non-ASCII bytes and
    /// interior nulls).
    UnexpectedCharacter,
}

impl ScanError {
    /// The fixed diagnostic message carried by the error token's lexeme.
    pub const fn message(self) -> &'static str {
        match self {
            Self::UnterminatedString => "Unterminated string.",
            Self::UnexpectedCharacter => "Unexpected character.",
        }
    }
}

/// One classified, located unit of lexical structure.
///
/// Produced fresh by each [`Scanner::next_token`](crate::Scanner::next_token)
/// call. Owns no memory: `lexeme` borrows either the source buffer or (for
/// error tokens) a static diagnostic message, and the token is valid only
/// as long as that backing store. Never mutated after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// Classification of the lexeme.
    pub kind: TokenKind,
    /// The exact text of the token: a view into the source buffer, or the
    /// static diagnostic message for [`TokenKind::Error`] tokens.
    pub lexeme: &'a str,
    /// 1-based source line of the lexeme's first character.
    pub line: u32,
}

/// Size assertion: Token should be <= 24 bytes on 64-bit platforms.
/// &str = 16 (fat pointer), TokenKind = 1, u32 = 4, + padding => 24.
const _: () = assert!(std::mem::size_of::<Token<'static>>() <= 24);

impl<'a> Token<'a> {
    /// Create an ordinary token whose lexeme borrows the source buffer.
    pub fn new(kind: TokenKind, lexeme: &'a str, line: u32) -> Self {
        Self { kind, lexeme, line }
    }

    /// Create an error token carrying `error`'s static diagnostic message
    /// as its lexeme.
    ///
    /// The `'static` lifetime records that error lexemes do NOT borrow the
    /// source buffer; it coerces into any scanner lifetime at the use site.
    pub fn error(error: ScanError, line: u32) -> Token<'static> {
        Token {
            kind: TokenKind::Error,
            lexeme: error.message(),
            line,
        }
    }
}
