//! Maximal-munch operator scanning.
//!
//! The scanner resolves the longest operator or punctuation spelling at the
//! head of a [`PushBackStream`]. It keeps a range of the sorted operator
//! table that is still consistent with the characters read so far and
//! narrows it one character at a time:
//!
//! ```text
//! input "<<x"
//!   i=0  [ ! != % %= & && ... < << <<= <= = == ... ]   pull '<'
//!   i=1  [ < << <<= <= ]            "<" complete       pull '<'
//!   i=2  [ << <<= ]                 "<<" complete      pull 'x'
//!   i=3  [ ]                                           stop
//!   commit "<<", push back "x"
//! ```
//!
//! Entries sharing a prefix of length `i` are contiguous in the sorted table,
//! and within that run they are ordered by their `i`-th character, with the
//! entry that ends at `i` (if any) first. Narrowing is two binary searches.

use tracing::trace;

use crate::stream::PushBackStream;
use crate::tables::{TokenTables, MAX_OPERATOR_LEN};
use crate::token::ReservedToken;

type Entry = (&'static str, ReservedToken);

impl TokenTables {
    /// Scans the longest operator spelling at the head of `stream`.
    ///
    /// Characters read past the committed spelling are pushed back, so the
    /// stream is left positioned directly after the operator. When nothing
    /// matches, every character read is pushed back and `None` is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use lsc_lex::{CharStream, ReservedToken, TokenTables};
    ///
    /// let tables = TokenTables::new().unwrap();
    /// let mut stream = CharStream::new("<=x");
    /// assert_eq!(tables.scan_operator(&mut stream), Some(ReservedToken::Le));
    /// assert_eq!(stream.remaining(), "x");
    /// ```
    pub fn scan_operator<S>(&self, stream: &mut S) -> Option<ReservedToken>
    where
        S: PushBackStream + ?Sized,
    {
        let mut candidates = self.operator_entries();
        let mut pulled = ['\0'; MAX_OPERATOR_LEN];
        let mut pulled_len = 0;
        let mut best = None;
        let mut match_size = 0;

        loop {
            let idx = pulled_len;

            if let Some(&(spelling, token)) = candidates.first() {
                if spelling.len() == idx {
                    best = Some(token);
                    match_size = idx;
                }
            }

            // Stop once no candidate is longer than what has been read.
            match candidates.last() {
                Some((spelling, _)) if spelling.len() > idx => {},
                _ => break,
            }

            let Some(c) = stream.pull() else {
                break;
            };
            pulled[idx] = c;
            pulled_len += 1;
            candidates = narrow(candidates, idx, c);
        }

        for &c in pulled[match_size..pulled_len].iter().rev() {
            stream.push_back(c);
        }

        trace!(
            token = ?best,
            consumed = match_size,
            pushed_back = pulled_len - match_size,
            "operator scan"
        );

        best
    }
}

/// Scans the longest operator spelling using the process-wide tables.
///
/// See [`TokenTables::scan_operator`].
pub fn scan_operator<S>(stream: &mut S) -> Option<ReservedToken>
where
    S: PushBackStream + ?Sized,
{
    TokenTables::global().scan_operator(stream)
}

/// Keeps the candidates whose character at `idx` is `c`.
fn narrow(candidates: &[Entry], idx: usize, c: char) -> &[Entry] {
    let key = |(spelling, _): &Entry| spelling.as_bytes().get(idx).map(|&b| char::from(b));
    let lower = candidates.partition_point(|entry| key(entry) < Some(c));
    let upper = candidates.partition_point(|entry| key(entry) <= Some(c));
    &candidates[lower..upper]
}
