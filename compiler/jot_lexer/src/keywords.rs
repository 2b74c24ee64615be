//! Reserved-word resolution for identifier lexemes.
//!
//! The lookup uses the identifier's length as a first-pass filter (Jot
//! keywords range from 2-6 chars), then matches against the specific
//! keywords of that length. This is an exact-match table equivalent to a
//! trie keyed on the leading characters: a prefix is never a match
//! (`forest` stays an identifier), and matching is case-sensitive.

use crate::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns the corresponding `TokenKind` if the text is one of the 18
/// reserved words, `None` if it is a regular identifier.
///
/// Uses length-bucketing for fast rejection: identifiers whose length falls
/// outside the 2-6 range are rejected without any comparison, as are those
/// not starting with a lowercase ASCII letter (every Jot keyword does).
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all keywords are 2-6 chars and start with a lowercase letter
    if !(2..=6).contains(&len) {
        return None;
    }
    if !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "if" => Some(TokenKind::If),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "for" => Some(TokenKind::For),
            "fun" => Some(TokenKind::Fun),
            "let" => Some(TokenKind::Let),
            "var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "null" => Some(TokenKind::Null),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "class" => Some(TokenKind::Class),
            "const" => Some(TokenKind::Const),
            "false" => Some(TokenKind::False),
            "print" => Some(TokenKind::Print),
            "super" => Some(TokenKind::Super),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}
