// src/types/parse.rs
//
// 文字列からのパース
//
// 文法: integer ('/' integer)?   integer = '-'? digit+
// BigInt のパーサは '+' や '_' も受け付けるため、先に形を検査する

use num_bigint::BigInt;
use serde::de::{self, Deserialize, Deserializer};
use std::str::FromStr;

use super::rational::Rational;
use crate::error::{RationalError, Result};
use crate::trace::trace_log;

pub fn parse_rational(s: &str) -> Result<Rational> {
    let parts: Vec<&str> = s.split('/').collect();
    match parts.as_slice() {
        [numerator] => Ok(Rational::from_integer(parse_integer(s, numerator, "numerator")?)),
        [numerator, denominator] => Rational::new(
            parse_integer(s, numerator, "numerator")?,
            parse_integer(s, denominator, "denominator")?,
        ),
        _ => {
            trace_log!("parse_rational: {} separators in '{}'", parts.len() - 1, s);
            Err(RationalError::malformed(s, "expected at most one '/'"))
        }
    }
}

pub(crate) fn parse_integer(input: &str, part: &str, role: &str) -> Result<BigInt> {
    let digits = part.strip_prefix('-').unwrap_or(part);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        trace_log!("parse_integer: bad {} '{}' in '{}'", role, part, input);
        return Err(RationalError::malformed(
            input,
            &format!("{} '{}' is not an integer", role, part),
        ));
    }
    BigInt::from_str(part).map_err(|e| RationalError::malformed(input, &e.to_string()))
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self> {
        parse_rational(s)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_rational(&text).map_err(de::Error::custom)
    }
}
