// src/error.rs
//
// 有理数エンジンのエラー型定義
// 生成・パースに失敗した場合、値は一切作られない

use std::fmt;

pub type Result<T> = std::result::Result<T, RationalError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    /// 分母ゼロでの生成、またはゼロによる除算
    DivisionByZero,
    /// `integer ('/' integer)?` に一致しない文字列
    MalformedInput { input: String, reason: String },
}

impl RationalError {
    pub fn malformed(input: &str, reason: &str) -> Self {
        RationalError::MalformedInput {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RationalError::DivisionByZero => write!(f, "Division by zero"),
            RationalError::MalformedInput { input, reason } => {
                write!(f, "Malformed rational '{}': {}", input, reason)
            }
        }
    }
}

impl std::error::Error for RationalError {}
