//! Lexer for tag markup.
//!
//! Splits input into text and tag tokens. A tag is `<name>` or `</name>`
//! where `name` matches `[A-Za-z][A-Za-z0-9_-]*`. Any other `<` or `>` is
//! literal text, so the lexer never fails.

use std::ops::Range;

/// A token produced by the lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal text.
    Text(&'a str),
    /// Opening tag name: `<b>` yields `OpenTag("b")`.
    OpenTag(&'a str),
    /// Closing tag name: `</b>` yields `CloseTag("b")`.
    CloseTag(&'a str),
}

/// A token with its byte range in the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub token: Token<'a>,
    pub range: Range<usize>,
}

/// Lexer for tag markup.
///
/// # Examples
///
/// ```
/// use tagstyle::parser::{Lexer, Token};
///
/// let tokens: Vec<_> = Lexer::new("<b>Hi</b>").map(|l| l.token).collect();
/// assert_eq!(
///     tokens,
///     [Token::OpenTag("b"), Token::Text("Hi"), Token::CloseTag("b")]
/// );
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Try to read a tag starting at `start`. Returns the token and the
    /// position just past the closing `>`.
    fn tag_at(&self, start: usize) -> Option<(Token<'a>, usize)> {
        let bytes = self.input.as_bytes();
        if bytes.get(start) != Some(&b'<') {
            return None;
        }

        let mut i = start + 1;
        let closing = bytes.get(i) == Some(&b'/');
        if closing {
            i += 1;
        }

        let name_start = i;
        match bytes.get(i) {
            Some(b) if b.is_ascii_alphabetic() => i += 1,
            _ => return None,
        }
        while matches!(bytes.get(i), Some(&b) if is_name_byte(b)) {
            i += 1;
        }
        if bytes.get(i) != Some(&b'>') {
            return None;
        }

        // Name bytes are ASCII, so these are char boundaries.
        let name = &self.input[name_start..i];
        let token = if closing {
            Token::CloseTag(name)
        } else {
            Token::OpenTag(name)
        };
        Some((token, i + 1))
    }

    /// Consume text up to the next tag or end of input. Always consumes at
    /// least one character, which may be a literal `<`.
    fn consume_text(&mut self) -> Lexeme<'a> {
        let start = self.pos;
        let rest = &self.input[start..];

        let mut end = self.input.len();
        for (i, _) in rest.match_indices('<').filter(|&(i, _)| i > 0) {
            if self.tag_at(start + i).is_some() {
                end = start + i;
                break;
            }
        }

        self.pos = end;
        Lexeme {
            token: Token::Text(&self.input[start..end]),
            range: start..end,
        }
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        if let Some((token, end)) = self.tag_at(self.pos) {
            let range = self.pos..end;
            self.pos = end;
            return Some(Lexeme { token, range });
        }

        Some(self.consume_text())
    }
}
