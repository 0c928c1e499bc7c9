//! Character streams with push-back.
//!
//! The operator scanner reads ahead one character at a time and hands back
//! whatever it over-read. [`PushBackStream`] is the contract it relies on;
//! [`CharStream`] is the string-backed implementation used by the rest of the
//! lexer and the command-line tools.

use std::str::Chars;

use crate::tables::PUSH_BACK_DEPTH;

/// A source of characters that can take characters back.
///
/// Characters handed to [`push_back`](Self::push_back) are returned by
/// subsequent [`pull`](Self::pull) calls in last-pushed, first-pulled order.
/// A caller that pushes back the characters it read in reverse therefore
/// sees them again in their original source order.
///
/// Implementations must accept at least [`PUSH_BACK_DEPTH`] consecutive
/// push-backs.
#[cfg_attr(test, mockall::automock)]
pub trait PushBackStream {
    /// Returns the next character, or `None` at end of input.
    fn pull(&mut self) -> Option<char>;

    /// Un-reads one character.
    fn push_back(&mut self, c: char);
}

/// A push-back stream over a string slice.
///
/// Tracks the 1-based line number and 0-based character index of the next
/// character to be pulled; both are rewound by push-back.
///
/// # Example
///
/// ```
/// use lsc_lex::{CharStream, PushBackStream};
///
/// let mut stream = CharStream::new("a\nb");
/// assert_eq!(stream.pull(), Some('a'));
/// assert_eq!(stream.pull(), Some('\n'));
/// assert_eq!(stream.line(), 2);
///
/// stream.push_back('\n');
/// assert_eq!(stream.line(), 1);
/// assert_eq!(stream.remaining(), "\nb");
/// ```
#[derive(Debug, Clone)]
pub struct CharStream<'a> {
    /// Characters not yet pulled from the source.
    chars: Chars<'a>,

    /// Pushed-back characters; the top of the stack is pulled next.
    pushed_back: Vec<char>,

    /// Current line number (1-based).
    line: u32,

    /// Number of characters pulled and not pushed back.
    index: usize,
}

impl<'a> CharStream<'a> {
    /// Creates a stream positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars(),
            pushed_back: Vec::with_capacity(PUSH_BACK_DEPTH),
            line: 1,
            index: 0,
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the character index of the next character (0-based).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns true if no characters are left, including pushed-back ones.
    pub fn is_at_end(&self) -> bool {
        self.pushed_back.is_empty() && self.chars.as_str().is_empty()
    }

    /// Returns everything that has not been pulled yet.
    pub fn remaining(&self) -> String {
        let mut rest: String = self.pushed_back.iter().rev().collect();
        rest.push_str(self.chars.as_str());
        rest
    }

    /// Returns the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        let c = self.pull()?;
        self.push_back(c);
        Some(c)
    }

    /// Skips whitespace characters, including newlines.
    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.pull() {
            if !c.is_whitespace() {
                self.push_back(c);
                break;
            }
        }
    }
}

impl PushBackStream for CharStream<'_> {
    fn pull(&mut self) -> Option<char> {
        let c = self.pushed_back.pop().or_else(|| self.chars.next())?;
        self.index += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn push_back(&mut self, c: char) {
        self.index = self.index.saturating_sub(1);
        if c == '\n' {
            self.line = self.line.saturating_sub(1).max(1);
        }
        self.pushed_back.push(c);
    }
}

impl Iterator for CharStream<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        self.pull()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_in_order() {
        let mut stream = CharStream::new("abc");
        assert_eq!(stream.pull(), Some('a'));
        assert_eq!(stream.pull(), Some('b'));
        assert_eq!(stream.pull(), Some('c'));
        assert_eq!(stream.pull(), None);
        assert_eq!(stream.pull(), None);
    }

    #[test]
    fn test_push_back_restores_source_order() {
        let mut stream = CharStream::new("<<=x");
        let pulled: Vec<char> = (0..3).filter_map(|_| stream.pull()).collect();
        assert_eq!(pulled, vec!['<', '<', '=']);

        for &c in pulled.iter().rev() {
            stream.push_back(c);
        }
        assert_eq!(stream.index(), 0);
        assert_eq!(stream.collect::<String>(), "<<=x");
    }

    #[test]
    fn test_push_back_after_end() {
        let mut stream = CharStream::new("<");
        assert_eq!(stream.pull(), Some('<'));
        assert_eq!(stream.pull(), None);
        assert!(stream.is_at_end());

        stream.push_back('<');
        assert!(!stream.is_at_end());
        assert_eq!(stream.pull(), Some('<'));
    }

    #[test]
    fn test_line_tracking() {
        let mut stream = CharStream::new("a\n\nb");
        assert_eq!(stream.line(), 1);
        stream.pull();
        stream.pull();
        assert_eq!(stream.line(), 2);
        stream.pull();
        assert_eq!(stream.line(), 3);

        stream.push_back('\n');
        assert_eq!(stream.line(), 2);
        assert_eq!(stream.index(), 2);
    }

    #[test]
    fn test_remaining_includes_pushed_back() {
        let mut stream = CharStream::new("ab;");
        stream.pull();
        stream.pull();
        stream.push_back('b');
        assert_eq!(stream.remaining(), "b;");
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut stream = CharStream::new("xy");
        assert_eq!(stream.peek(), Some('x'));
        assert_eq!(stream.index(), 0);
        assert_eq!(stream.pull(), Some('x'));
    }

    #[test]
    fn test_skip_whitespace() {
        let mut stream = CharStream::new("  \t\n  +");
        stream.skip_whitespace();
        assert_eq!(stream.line(), 2);
        assert_eq!(stream.remaining(), "+");
    }

    #[test]
    fn test_empty_source() {
        let mut stream = CharStream::new("");
        assert!(stream.is_at_end());
        assert_eq!(stream.pull(), None);
        assert_eq!(stream.remaining(), "");
    }

    #[test]
    fn test_unicode_characters() {
        let mut stream = CharStream::new("é+");
        assert_eq!(stream.pull(), Some('é'));
        assert_eq!(stream.index(), 1);
        stream.push_back('é');
        assert_eq!(stream.remaining(), "é+");
    }
}
