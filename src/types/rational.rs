// src/types/rational.rs

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;

use super::range::RationalRange;
use crate::error::{RationalError, Result};
use crate::trace::trace_log;

/// 任意精度整数による厳密な有理数
///
/// 常に正規化済み：分母は正で分子と互いに素、ゼロは `0/1`。
/// フィールドは非公開なので、生成経路は正規化ファクトリとその上の演算のみ。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

/// 任意の整数型の組から `numerator / denominator` を生成
pub fn div_by<N, D>(numerator: N, denominator: D) -> Result<Rational>
where
    N: Into<BigInt>,
    D: Into<BigInt>,
{
    Rational::new(numerator.into(), denominator.into())
}

/// 最小公倍数: a * (b / gcd(a, b))
pub fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }
    (a * (b / a.gcd(b))).abs()
}

impl Rational {
    /// 正規化ファクトリ
    /// 分母がゼロなら DivisionByZero。GCDで約分し、符号は分子に寄せる
    pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Self> {
        if denominator.is_zero() {
            trace_log!("Rational::new: {}/0 rejected", numerator);
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::normalize(numerator, denominator))
    }

    /// 整数 n/1
    pub fn from_integer(n: BigInt) -> Self {
        Rational {
            numerator: n,
            denominator: BigInt::one(),
        }
    }

    // 呼び出し側が分母 != 0 を保証する。gcd(0, d) = |d| なので gcd も非ゼロ
    fn normalize(numerator: BigInt, denominator: BigInt) -> Self {
        let common = numerator.gcd(&denominator);
        let mut num = numerator / &common;
        let mut den = denominator / &common;
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        trace_log!("normalize: reduced by {} to {}/{}", common, num, den);
        Rational {
            numerator: num,
            denominator: den,
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    /// 加算: (a/b) + (c/d) = (ad + cb) / bd
    /// 分母は単純な積（LCMではない）。最後の正規化で既約形になる
    pub fn add(&self, other: &Rational) -> Rational {
        Self::normalize(
            &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    /// 減算: (a/b) - (c/d) = (ad - cb) / bd
    /// 加算と同じく積の分母を使い、正規化に任せる
    pub fn subtract(&self, other: &Rational) -> Rational {
        Self::normalize(
            &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    /// 乗算: (a/b) × (c/d) = ac / bd
    pub fn multiply(&self, other: &Rational) -> Rational {
        Self::normalize(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }

    /// 除算: (a/b) ÷ (c/d) = ad / bc
    /// c = 0 だと新しい分母がゼロになるため DivisionByZero を返す
    pub fn divide(&self, other: &Rational) -> Result<Rational> {
        if other.numerator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::normalize(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        ))
    }

    pub fn checked_div(&self, other: &Rational) -> Option<Rational> {
        self.divide(other).ok()
    }

    /// 符号反転: 分母はそのままなので再正規化は不要
    pub fn negate(&self) -> Rational {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }

    /// 比較: 分母を lcm(b, d) に揃えて分子同士を比べる
    pub fn compare_to(&self, other: &Rational) -> Ordering {
        // 共通分母の場合: 通分不要
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }
        let common = lcm(&self.denominator, &other.denominator);
        let lhs = &self.numerator * (&common / &self.denominator);
        let rhs = &other.numerator * (&common / &other.denominator);
        lhs.cmp(&rhs)
    }

    /// 閉区間 [self, end]。端点は並べ替えない
    pub fn range_to(&self, end: &Rational) -> RationalRange {
        RationalRange::new(self.clone(), end.clone())
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

impl std::ops::Add for Rational {
    type Output = Rational;

    fn add(self, other: Rational) -> Rational {
        Rational::add(&self, &other)
    }
}

impl<'a> std::ops::Add<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn add(self, other: &'a Rational) -> Rational {
        Rational::add(self, other)
    }
}

impl std::ops::Sub for Rational {
    type Output = Rational;

    fn sub(self, other: Rational) -> Rational {
        self.subtract(&other)
    }
}

impl<'a> std::ops::Sub<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn sub(self, other: &'a Rational) -> Rational {
        self.subtract(other)
    }
}

impl std::ops::Mul for Rational {
    type Output = Rational;

    fn mul(self, other: Rational) -> Rational {
        self.multiply(&other)
    }
}

impl<'a> std::ops::Mul<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn mul(self, other: &'a Rational) -> Rational {
        self.multiply(other)
    }
}

impl std::ops::Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl std::ops::Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        self.negate()
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Rational::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::from_integer(BigInt::from(n))
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::from_integer(BigInt::one())
    }
}

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        (&self.numerator / &self.denominator).to_i64()
    }

    /// ゼロ方向への切り捨て後に変換（to_i64 と同じ規則）
    fn to_u64(&self) -> Option<u64> {
        (&self.numerator / &self.denominator).to_u64()
    }

    /// 近似値。分子・分母を個別に f64 化すると 1e308 超で inf になるため、
    /// 商が約64ビットの有効桁を持つようにスケールしてから除算し、指数を戻す。
    fn to_f64(&self) -> Option<f64> {
        let num = self.numerator.magnitude();
        let den = self.denominator.magnitude();
        let shift = num.bits() as i64 - den.bits() as i64 - 64;
        let quotient = if shift >= 0 {
            num / (den << shift as u64)
        } else {
            (num << (-shift) as u64) / den
        };
        // 2^shift を二段階で掛け、途中のアンダーフロー/オーバーフローを避ける
        let half = (shift / 2) as i32;
        let value = quotient.to_f64()? * 2f64.powi(half) * 2f64.powi(shift as i32 - half);
        Some(if self.numerator.is_negative() { -value } else { value })
    }
}
