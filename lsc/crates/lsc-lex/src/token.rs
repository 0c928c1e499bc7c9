//! Reserved token definitions.
//!
//! Every operator, punctuation mark and keyword of LightScript has exactly
//! one `ReservedToken` variant. Spellings live in [`crate::tables`]; this
//! module only describes the closed set of kinds and how they are grouped.

use std::fmt;

use crate::tables::TokenTables;

/// A reserved symbol of the language.
///
/// Rendering a token with `{}` prints its canonical source spelling:
///
/// ```
/// use lsc_lex::ReservedToken;
///
/// assert_eq!(ReservedToken::ShiftlAssign.to_string(), "<<=");
/// assert_eq!(ReservedToken::KwFun.to_string(), "fun");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum ReservedToken {
    // Arithmetic
    Inc,
    Dec,
    Add,
    Sub,
    Mul,
    Div,
    Idiv,
    Mod,

    // Bitwise
    BitwiseNot,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    Shiftl,
    Shiftr,

    // Assignment
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    IdivAssign,
    ModAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    ShiftlAssign,
    ShiftrAssign,

    // Logical
    LogicalNot,
    LogicalAnd,
    LogicalOr,

    // Comparison
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,

    // Punctuation
    Question,
    Colon,
    Comma,
    Semicolon,
    OpenRound,
    CloseRound,
    OpenCurly,
    CloseCurly,
    OpenSquare,
    CloseSquare,

    // Keywords
    KwIf,
    KwElse,
    KwElif,
    KwSwitch,
    KwCase,
    KwDefault,
    KwFor,
    KwWhile,
    KwDo,
    KwBreak,
    KwContinue,
    KwReturn,
    KwVar,
    KwFun,
    KwVoid,
    KwNumber,
    KwString,
}

/// Coarse grouping of reserved tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// Arithmetic, bitwise and logical operators, unary or binary.
    Operator,
    /// `=` and the compound assignment operators.
    Assignment,
    /// Equality and ordering operators.
    Comparison,
    /// Brackets, separators and the ternary marks.
    Punctuation,
    /// Reserved words.
    Keyword,
}

impl ReservedToken {
    /// Every variant, in declaration order.
    pub const ALL: [ReservedToken; 62] = [
        Self::Inc,
        Self::Dec,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Idiv,
        Self::Mod,
        Self::BitwiseNot,
        Self::BitwiseAnd,
        Self::BitwiseOr,
        Self::BitwiseXor,
        Self::Shiftl,
        Self::Shiftr,
        Self::Assign,
        Self::AddAssign,
        Self::SubAssign,
        Self::MulAssign,
        Self::DivAssign,
        Self::IdivAssign,
        Self::ModAssign,
        Self::AndAssign,
        Self::OrAssign,
        Self::XorAssign,
        Self::ShiftlAssign,
        Self::ShiftrAssign,
        Self::LogicalNot,
        Self::LogicalAnd,
        Self::LogicalOr,
        Self::Eq,
        Self::Ne,
        Self::Lt,
        Self::Gt,
        Self::Le,
        Self::Ge,
        Self::Question,
        Self::Colon,
        Self::Comma,
        Self::Semicolon,
        Self::OpenRound,
        Self::CloseRound,
        Self::OpenCurly,
        Self::CloseCurly,
        Self::OpenSquare,
        Self::CloseSquare,
        Self::KwIf,
        Self::KwElse,
        Self::KwElif,
        Self::KwSwitch,
        Self::KwCase,
        Self::KwDefault,
        Self::KwFor,
        Self::KwWhile,
        Self::KwDo,
        Self::KwBreak,
        Self::KwContinue,
        Self::KwReturn,
        Self::KwVar,
        Self::KwFun,
        Self::KwVoid,
        Self::KwNumber,
        Self::KwString,
    ];

    /// Returns the category this token belongs to.
    pub const fn category(self) -> TokenCategory {
        use ReservedToken::*;

        match self {
            Inc | Dec | Add | Sub | Mul | Div | Idiv | Mod | BitwiseNot | BitwiseAnd
            | BitwiseOr | BitwiseXor | Shiftl | Shiftr | LogicalNot | LogicalAnd | LogicalOr => {
                TokenCategory::Operator
            },
            Assign | AddAssign | SubAssign | MulAssign | DivAssign | IdivAssign | ModAssign
            | AndAssign | OrAssign | XorAssign | ShiftlAssign | ShiftrAssign => {
                TokenCategory::Assignment
            },
            Eq | Ne | Lt | Gt | Le | Ge => TokenCategory::Comparison,
            Question | Colon | Comma | Semicolon | OpenRound | CloseRound | OpenCurly
            | CloseCurly | OpenSquare | CloseSquare => TokenCategory::Punctuation,
            KwIf | KwElse | KwElif | KwSwitch | KwCase | KwDefault | KwFor | KwWhile | KwDo
            | KwBreak | KwContinue | KwReturn | KwVar | KwFun | KwVoid | KwNumber | KwString => {
                TokenCategory::Keyword
            },
        }
    }

    /// Returns true for reserved words.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(self.category(), TokenCategory::Keyword)
    }

    /// Returns true for tokens spelled with symbols rather than letters.
    #[inline]
    pub const fn is_operator(self) -> bool {
        !self.is_keyword()
    }

    /// Returns true for `=` and the compound assignments.
    #[inline]
    pub const fn is_assignment(self) -> bool {
        matches!(self.category(), TokenCategory::Assignment)
    }

    /// Returns the canonical source spelling of this token.
    pub fn spelling(self) -> &'static str {
        TokenTables::global().find_by_kind(self)
    }
}

impl fmt::Display for ReservedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

impl TokenCategory {
    /// Lower-case name used in listings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Operator => "operator",
            Self::Assignment => "assignment",
            Self::Comparison => "comparison",
            Self::Punctuation => "punctuation",
            Self::Keyword => "keyword",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for token in ReservedToken::ALL {
            assert!(seen.insert(token), "{:?} listed twice", token);
        }
    }

    #[test]
    fn test_category_counts() {
        let count = |category| {
            ReservedToken::ALL
                .iter()
                .filter(|t| t.category() == category)
                .count()
        };
        assert_eq!(count(TokenCategory::Operator), 17);
        assert_eq!(count(TokenCategory::Assignment), 12);
        assert_eq!(count(TokenCategory::Comparison), 6);
        assert_eq!(count(TokenCategory::Punctuation), 10);
        assert_eq!(count(TokenCategory::Keyword), 17);
    }

    #[test]
    fn test_predicates() {
        assert!(ReservedToken::KwWhile.is_keyword());
        assert!(!ReservedToken::KwWhile.is_operator());
        assert!(ReservedToken::Shiftr.is_operator());
        assert!(ReservedToken::ModAssign.is_assignment());
        assert!(ReservedToken::Assign.is_assignment());
        assert!(!ReservedToken::Eq.is_assignment());
    }

    #[test]
    fn test_display_uses_spelling() {
        assert_eq!(ReservedToken::Idiv.to_string(), "\\");
        assert_eq!(ReservedToken::OpenCurly.to_string(), "{");
        assert_eq!(ReservedToken::KwElif.to_string(), "elif");
        assert_eq!(format!("unexpected '{}'", ReservedToken::Ne), "unexpected '!='");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(TokenCategory::Comparison.to_string(), "comparison");
        assert_eq!(TokenCategory::Keyword.as_str(), "keyword");
    }
}
