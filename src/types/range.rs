// src/types/range.rs
//
// 二つの有理数による閉区間
// 端点は与えられた順のまま保持する。逆転した区間は何も含まない

use std::fmt;

use super::rational::Rational;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RationalRange {
    start: Rational,
    end: Rational,
}

impl RationalRange {
    pub fn new(start: Rational, end: Rational) -> Self {
        RationalRange { start, end }
    }

    pub fn start(&self) -> &Rational {
        &self.start
    }

    pub fn end(&self) -> &Rational {
        &self.end
    }

    /// start <= value <= end をそのまま判定
    pub fn contains(&self, value: &Rational) -> bool {
        self.start.compare_to(value).is_le() && value.compare_to(&self.end).is_le()
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl fmt::Display for RationalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
