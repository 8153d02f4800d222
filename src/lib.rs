//! Exact rational numbers over arbitrary-precision integers.
//!
//! Values are normalized on construction (positive denominator, reduced
//! terms, zero as `0/1`) and never mutated afterwards. Text form is
//! `"n"` for whole numbers and `"n/d"` otherwise.
//!
//! ```
//! use rationals_core::{div_by, parse_rational};
//!
//! let half = div_by(1, 2).unwrap();
//! let third = div_by(1, 3).unwrap();
//! assert_eq!(half.add(&third), div_by(5, 6).unwrap());
//! assert_eq!(parse_rational("117/1098").unwrap().to_string(), "13/122");
//! assert!(third.range_to(&div_by(2, 3).unwrap()).contains(&half));
//! ```

mod trace;

pub mod error;
pub mod types;
pub mod wasm_api;

pub use error::{RationalError, Result};
pub use types::json::{from_json, to_json};
pub use types::{div_by, format_rational, lcm, parse_rational, Rational, RationalRange};
pub use wasm_api::JsRational;
