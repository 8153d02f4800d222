// src/types/display.rs
//
// 値の表示ロジック
//
// 整数なら "<分子>"、それ以外は "<分子>/<分母>"。

use serde::{Serialize, Serializer};
use std::fmt;

use super::rational::Rational;

pub fn format_rational(value: &Rational) -> String {
    value.to_string()
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::rational::div_by;

    #[test]
    fn test_whole_numbers_drop_denominator() {
        assert_eq!(format_rational(&div_by(2, 1).unwrap()), "2");
        assert_eq!(format_rational(&div_by(-8, 4).unwrap()), "-2");
        assert_eq!(format_rational(&div_by(0, 3).unwrap()), "0");
    }

    #[test]
    fn test_sign_lives_on_numerator() {
        assert_eq!(div_by(-2, 4).unwrap().to_string(), "-1/2");
        assert_eq!(div_by(2, -4).unwrap().to_string(), "-1/2");
        assert_eq!(div_by(-3, -9).unwrap().to_string(), "1/3");
    }

    #[test]
    fn test_serializes_as_canonical_string() {
        let json = serde_json::to_string(&div_by(6, -8).unwrap()).unwrap();
        assert_eq!(json, "\"-3/4\"");
    }
}
