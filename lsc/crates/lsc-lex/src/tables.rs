//! Reserved token symbol tables.
//!
//! Three tables are derived from the static spelling lists below:
//!
//! - operators: spelling → token, sorted by spelling. The maximal-munch
//!   scanner narrows ranges of this table character by character.
//! - keywords: word → token, hashed, in declaration order.
//! - spellings: token → canonical spelling, used for display.
//!
//! The tables are validated when built and never change afterwards. A
//! process-wide instance is available through [`TokenTables::global`].

use std::sync::LazyLock;

use indexmap::IndexMap;
use lsc_util::Lookup;
use rustc_hash::{FxBuildHasher, FxHashMap};
use static_assertions::{assert_impl_all, const_assert_eq};
use tracing::debug;

use crate::error::{LexError, LexResult};
use crate::token::ReservedToken;

/// Operator and punctuation spellings.
pub const OPERATOR_SPELLINGS: [(&str, ReservedToken); 45] = [
    ("++", ReservedToken::Inc),
    ("--", ReservedToken::Dec),
    ("+", ReservedToken::Add),
    ("-", ReservedToken::Sub),
    ("*", ReservedToken::Mul),
    ("/", ReservedToken::Div),
    ("\\", ReservedToken::Idiv),
    ("%", ReservedToken::Mod),
    ("~", ReservedToken::BitwiseNot),
    ("&", ReservedToken::BitwiseAnd),
    ("|", ReservedToken::BitwiseOr),
    ("^", ReservedToken::BitwiseXor),
    ("<<", ReservedToken::Shiftl),
    (">>", ReservedToken::Shiftr),
    ("=", ReservedToken::Assign),
    ("+=", ReservedToken::AddAssign),
    ("-=", ReservedToken::SubAssign),
    ("*=", ReservedToken::MulAssign),
    ("/=", ReservedToken::DivAssign),
    ("\\=", ReservedToken::IdivAssign),
    ("%=", ReservedToken::ModAssign),
    ("&=", ReservedToken::AndAssign),
    ("|=", ReservedToken::OrAssign),
    ("^=", ReservedToken::XorAssign),
    ("<<=", ReservedToken::ShiftlAssign),
    (">>=", ReservedToken::ShiftrAssign),
    ("!", ReservedToken::LogicalNot),
    ("&&", ReservedToken::LogicalAnd),
    ("||", ReservedToken::LogicalOr),
    ("==", ReservedToken::Eq),
    ("!=", ReservedToken::Ne),
    ("<", ReservedToken::Lt),
    (">", ReservedToken::Gt),
    ("<=", ReservedToken::Le),
    (">=", ReservedToken::Ge),
    ("?", ReservedToken::Question),
    (":", ReservedToken::Colon),
    (",", ReservedToken::Comma),
    (";", ReservedToken::Semicolon),
    ("(", ReservedToken::OpenRound),
    (")", ReservedToken::CloseRound),
    ("{", ReservedToken::OpenCurly),
    ("}", ReservedToken::CloseCurly),
    ("[", ReservedToken::OpenSquare),
    ("]", ReservedToken::CloseSquare),
];

/// Keyword spellings.
pub const KEYWORD_SPELLINGS: [(&str, ReservedToken); 17] = [
    ("if", ReservedToken::KwIf),
    ("else", ReservedToken::KwElse),
    ("elif", ReservedToken::KwElif),
    ("switch", ReservedToken::KwSwitch),
    ("case", ReservedToken::KwCase),
    ("default", ReservedToken::KwDefault),
    ("for", ReservedToken::KwFor),
    ("while", ReservedToken::KwWhile),
    ("do", ReservedToken::KwDo),
    ("break", ReservedToken::KwBreak),
    ("continue", ReservedToken::KwContinue),
    ("return", ReservedToken::KwReturn),
    ("var", ReservedToken::KwVar),
    ("fun", ReservedToken::KwFun),
    ("void", ReservedToken::KwVoid),
    ("number", ReservedToken::KwNumber),
    ("string", ReservedToken::KwString),
];

/// Length of the longest operator spelling.
pub const MAX_OPERATOR_LEN: usize = longest_spelling(&OPERATOR_SPELLINGS);

/// Number of characters a stream must be able to take back for one
/// operator scan.
///
/// After a committed match at most `MAX_OPERATOR_LEN - 1` characters are
/// returned. A scan that matches nothing returns everything it pulled, which
/// is never more than `MAX_OPERATOR_LEN`.
pub const PUSH_BACK_DEPTH: usize = MAX_OPERATOR_LEN;

const_assert_eq!(MAX_OPERATOR_LEN, 3);

const fn longest_spelling(entries: &[(&str, ReservedToken)]) -> usize {
    let mut longest = 0;
    let mut i = 0;
    while i < entries.len() {
        if entries[i].0.len() > longest {
            longest = entries[i].0.len();
        }
        i += 1;
    }
    longest
}

static TOKEN_TABLES: LazyLock<TokenTables> = LazyLock::new(|| {
    TokenTables::new().unwrap_or_else(|err| panic!("invalid reserved token tables: {}", err))
});

type KeywordMap = IndexMap<&'static str, ReservedToken, FxBuildHasher>;

/// Forward and reverse reserved token tables.
#[derive(Debug)]
pub struct TokenTables {
    /// Operator spelling → token, sorted by spelling.
    operators: Lookup<&'static str, ReservedToken>,

    /// Keyword → token, in declaration order.
    keywords: KeywordMap,

    /// Token → canonical spelling.
    spellings: FxHashMap<ReservedToken, &'static str>,
}

assert_impl_all!(TokenTables: Send, Sync);

impl TokenTables {
    /// Builds the tables from the built-in spelling lists.
    pub fn new() -> LexResult<Self> {
        Self::from_entries(&OPERATOR_SPELLINGS, &KEYWORD_SPELLINGS)
    }

    /// Builds the tables from explicit spelling lists.
    ///
    /// Every spelling must be non-empty ASCII and unique within its list, no
    /// operator may be longer than [`MAX_OPERATOR_LEN`], no token may be
    /// registered twice across both lists, and every [`ReservedToken`] must
    /// have a spelling.
    pub fn from_entries(
        operators: &[(&'static str, ReservedToken)],
        keywords: &[(&'static str, ReservedToken)],
    ) -> LexResult<Self> {
        validate_spellings("operator", operators, MAX_OPERATOR_LEN)?;
        validate_spellings("keyword", keywords, usize::MAX)?;

        let operator_table = Lookup::new(operators.to_vec()).map_err(|source| LexError::Table {
            table: "operator",
            source,
        })?;

        let mut keyword_table =
            KeywordMap::with_capacity_and_hasher(keywords.len(), FxBuildHasher::default());
        for &(spelling, token) in keywords {
            if keyword_table.insert(spelling, token).is_some() {
                return Err(LexError::DuplicateSpelling {
                    table: "keyword",
                    spelling,
                });
            }
        }

        let mut spellings = FxHashMap::with_capacity_and_hasher(
            operators.len() + keywords.len(),
            FxBuildHasher::default(),
        );
        for &(spelling, token) in operators.iter().chain(keywords) {
            if let Some(first) = spellings.insert(token, spelling) {
                return Err(LexError::DuplicateToken {
                    token,
                    first,
                    second: spelling,
                });
            }
        }

        if let Some(&token) = ReservedToken::ALL
            .iter()
            .find(|token| !spellings.contains_key(*token))
        {
            return Err(LexError::MissingSpelling(token));
        }

        debug!(
            operators = operator_table.len(),
            keywords = keyword_table.len(),
            max_operator_len = MAX_OPERATOR_LEN,
            "built reserved token tables"
        );

        Ok(Self {
            operators: operator_table,
            keywords: keyword_table,
            spellings,
        })
    }

    /// Returns the process-wide tables, building them on first use.
    ///
    /// # Panics
    ///
    /// Panics on first use if the built-in spelling lists are inconsistent.
    pub fn global() -> &'static TokenTables {
        &TOKEN_TABLES
    }

    /// Resolves an exact operator or keyword spelling.
    pub fn find_by_spelling(&self, spelling: &str) -> Option<ReservedToken> {
        self.find_operator(spelling)
            .or_else(|| self.find_keyword(spelling))
    }

    /// Resolves an exact operator or punctuation spelling.
    pub fn find_operator(&self, spelling: &str) -> Option<ReservedToken> {
        self.operators.get(spelling).copied()
    }

    /// Resolves an exact keyword.
    pub fn find_keyword(&self, word: &str) -> Option<ReservedToken> {
        self.keywords.get(word).copied()
    }

    /// Returns the canonical spelling of `token`.
    ///
    /// Construction guarantees every token has a spelling, so a miss here is
    /// a bug in the tables rather than a runtime condition.
    pub fn find_by_kind(&self, token: ReservedToken) -> &'static str {
        match self.spellings.get(&token) {
            Some(&spelling) => spelling,
            None => unreachable!("reserved token {:?} has no spelling", token),
        }
    }

    /// Operator entries in ascending spelling order.
    pub fn operators(&self) -> impl Iterator<Item = (&'static str, ReservedToken)> + '_ {
        self.operators.iter().copied()
    }

    /// Keyword entries in declaration order.
    pub fn keywords(&self) -> impl Iterator<Item = (&'static str, ReservedToken)> + '_ {
        self.keywords.iter().map(|(&spelling, &token)| (spelling, token))
    }

    /// The sorted operator table as a slice, for range narrowing.
    #[inline]
    pub(crate) fn operator_entries(&self) -> &[(&'static str, ReservedToken)] {
        self.operators.as_slice()
    }

    /// Total number of spellings across both tables.
    pub fn len(&self) -> usize {
        self.spellings.len()
    }

    /// Returns true if no spellings are registered.
    pub fn is_empty(&self) -> bool {
        self.spellings.is_empty()
    }
}

fn validate_spellings(
    table: &'static str,
    entries: &[(&'static str, ReservedToken)],
    max_len: usize,
) -> LexResult<()> {
    match entries.iter().find(|(spelling, _)| {
        spelling.is_empty() || spelling.len() > max_len || !spelling.is_ascii()
    }) {
        Some(&(spelling, _)) => Err(LexError::InvalidSpelling { table, spelling }),
        None => Ok(()),
    }
}
