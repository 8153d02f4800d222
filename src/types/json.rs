// src/types/json.rs
//
// JSON との相互変換
//
// JS の安全な整数範囲に収まる整数は JSON 数値、それ以外は正規形の文字列

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use super::parse::parse_rational;
use super::rational::Rational;
use crate::error::{RationalError, Result};

/// 2^53 - 1
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

pub fn to_json(value: &Rational) -> serde_json::Value {
    if value.is_integer() {
        if let Some(i) = value.numerator().to_i64().filter(|i| i.abs() <= MAX_SAFE_INTEGER) {
            return serde_json::Value::Number(serde_json::Number::from(i));
        }
    }
    serde_json::Value::String(value.to_string())
}

pub fn from_json(json_val: &serde_json::Value) -> Result<Rational> {
    match json_val {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Rational::from_integer(BigInt::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Rational::from_integer(BigInt::from(u)))
            } else {
                Err(RationalError::malformed(&n.to_string(), "JSON number is not an integer"))
            }
        }
        serde_json::Value::String(s) => parse_rational(s),
        other => Err(RationalError::malformed(
            &other.to_string(),
            "expected a JSON integer or string",
        )),
    }
}
