// src/types/mod.rs
//
// 厳密な有理数値
//
// すべての Rational は生成時に正規化される：
//
// | 入力      | 内部表現 | 表示   |
// |-----------|----------|--------|
// | 2/4       | 1/2    | 1/2    |
// | 2/-4      | -1/2   | -1/2   |
// | 0/-7      | 0/1    | 0      |
// | 6/3       | 2/1    | 2      |
//
// 生成後に値が変わることはないので、構造的等価性がそのまま値の等価性になる。

pub mod rational;
pub mod range;
pub mod display;
pub mod parse;
pub mod json;

pub use self::rational::{div_by, lcm, Rational};
pub use self::range::RationalRange;
pub use self::display::format_rational;
pub use self::parse::parse_rational;
