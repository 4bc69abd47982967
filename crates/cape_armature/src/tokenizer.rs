//! Path tokenizer for route declarations.
//!
//! Declared paths are scanned byte by byte. Empty segments are dropped, so
//! `/members//:id/` and `members/:id` produce the same tokens.

/// Character codes for fast comparison
pub mod char_codes {
    pub const SLASH: u8 = b'/';
    pub const COLON: u8 = b':';
}

use char_codes::*;

/// One non-empty segment of a declared path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text that must appear verbatim.
    Literal(&'a str),
    /// `:name`; the key may be empty, which the compiler rejects.
    Capture(&'a str),
}

impl<'a> Token<'a> {
    #[inline]
    fn classify(segment: &'a str) -> Self {
        match segment.as_bytes().first() {
            Some(&COLON) => Token::Capture(&segment[1..]),
            _ => Token::Literal(segment),
        }
    }
}

/// Split a declared path into tokens.
pub fn tokenize(path: &str) -> Vec<Token<'_>> {
    let bytes = path.as_bytes();
    let mut tokens = Vec::with_capacity(bytes.iter().filter(|&&c| c == SLASH).count() + 1);
    let mut start = 0;

    for (i, &c) in bytes.iter().enumerate() {
        if c == SLASH {
            if i > start {
                tokens.push(Token::classify(&path[start..i]));
            }
            start = i + 1;
        }
    }
    if bytes.len() > start {
        tokens.push(Token::classify(&path[start..]));
    }

    tokens
}
