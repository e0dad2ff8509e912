use bigdecimal::{BigDecimal, FromPrimitive, One, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// Significant digits kept by every arithmetic operation on [`Dec`].
pub const WORKING_PRECISION: u64 = 20;

/// Significant digits of a sigmoid output. This is a deliberate cap, not a
/// shortcut: activations are rounded to 5 digits every forward pass and the
/// whole training trajectory depends on it.
pub const SIGMOID_PRECISION: u64 = 5;

// Guard digits used inside the exp series before the final rounding.
const EXP_GUARD_PRECISION: u64 = WORKING_PRECISION + 10;

/// Arbitrary-precision decimal scalar with a fixed rounding policy.
///
/// Every operator rounds its result to [`WORKING_PRECISION`] significant
/// digits, so the policy cannot drift between call sites. Nothing in this
/// module converts through native floats once a value is constructed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dec(BigDecimal);

impl Dec {
    pub fn zero() -> Dec {
        Dec(BigDecimal::zero())
    }

    pub fn one() -> Dec {
        Dec(BigDecimal::one())
    }

    pub fn from_i64(value: i64) -> Dec {
        Dec(BigDecimal::from(value))
    }

    pub fn from_usize(value: usize) -> Dec {
        Dec(BigDecimal::from(value as u64))
    }

    /// Construction-time conversion from a native float (weight
    /// initialization draws doubles). Returns `None` for NaN/infinity.
    pub fn from_f64(value: f64) -> Option<Dec> {
        BigDecimal::from_f64(value).map(Dec)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn abs(&self) -> Dec {
        Dec(self.0.abs())
    }

    /// Rounds to `prec` significant digits.
    pub fn round_to(&self, prec: u64) -> Dec {
        Dec(self.0.with_prec(prec))
    }

    /// Nearest integer value, as `i64`. Used to read class labels out of
    /// target scalars.
    pub fn round_to_i64(&self) -> i64 {
        self.0
            .round(0)
            .to_i64()
            .expect("decimal out of i64 range")
    }

    /// Square root at working precision. A zero radicand short-circuits to
    /// zero so rounding noise can never push it into the invalid domain.
    /// Negative radicands are a contract violation.
    pub fn sqrt(&self) -> Dec {
        if self.0.is_zero() {
            return Dec::zero();
        }
        let root = self
            .0
            .sqrt()
            .expect("square root of a negative decimal");
        Dec(root.with_prec(WORKING_PRECISION))
    }

    /// Logistic sigmoid `1 / (1 + exp(-x))`, rounded to
    /// [`SIGMOID_PRECISION`] significant digits.
    pub fn sigmoid(&self) -> Dec {
        let e = exp(&(-&self.0));
        let denom = BigDecimal::one() + e;
        Dec((BigDecimal::one() / denom).with_prec(SIGMOID_PRECISION))
    }
}

/// `exp(x)` by Maclaurin series with argument halving.
///
/// The argument is halved until `|t| <= 1` so the series converges in a few
/// dozen terms, then the result is squared once per halving. Intermediate
/// terms carry guard digits beyond the working precision.
fn exp(x: &BigDecimal) -> BigDecimal {
    if x.is_zero() {
        return BigDecimal::one();
    }

    let one = BigDecimal::one();
    let mut t = x.clone();
    let mut halvings = 0u32;
    while t.abs() > one {
        t = t.half();
        halvings += 1;
    }

    let eps: BigDecimal = "1e-32".parse().expect("valid epsilon literal");
    let mut sum = BigDecimal::one();
    let mut term = BigDecimal::one();
    let mut n = 1u32;
    while term.abs() > eps {
        term = (&term * &t / BigDecimal::from(n)).with_prec(EXP_GUARD_PRECISION);
        sum += &term;
        n += 1;
    }

    for _ in 0..halvings {
        sum = sum.square().with_prec(EXP_GUARD_PRECISION);
    }
    sum.with_prec(WORKING_PRECISION)
}

/// Parses a decimal literal, panicking on malformed input. Intended for
/// in-code constants (`dec("0.2")`), the decimal analog of a float literal.
#[track_caller]
pub fn dec(literal: &str) -> Dec {
    literal.parse().expect("invalid decimal literal")
}

impl FromStr for Dec {
    type Err = bigdecimal::ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigDecimal::from_str(s).map(Dec)
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Add for &Dec {
    type Output = Dec;

    fn add(self, rhs: &Dec) -> Dec {
        Dec((&self.0 + &rhs.0).with_prec(WORKING_PRECISION))
    }
}

impl Sub for &Dec {
    type Output = Dec;

    fn sub(self, rhs: &Dec) -> Dec {
        Dec((&self.0 - &rhs.0).with_prec(WORKING_PRECISION))
    }
}

impl Mul for &Dec {
    type Output = Dec;

    fn mul(self, rhs: &Dec) -> Dec {
        Dec((&self.0 * &rhs.0).with_prec(WORKING_PRECISION))
    }
}

impl Div for &Dec {
    type Output = Dec;

    fn div(self, rhs: &Dec) -> Dec {
        Dec((&self.0 / &rhs.0).with_prec(WORKING_PRECISION))
    }
}

impl Neg for &Dec {
    type Output = Dec;

    fn neg(self) -> Dec {
        Dec(-&self.0)
    }
}

impl AddAssign<&Dec> for Dec {
    fn add_assign(&mut self, rhs: &Dec) {
        self.0 = (&self.0 + &rhs.0).with_prec(WORKING_PRECISION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_rounds_to_working_precision() {
        let third = &Dec::one() / &Dec::from_i64(3);
        // 20 significant digits of 1/3.
        assert_eq!(third, dec("0.33333333333333333333"));
    }

    #[test]
    fn equality_ignores_trailing_zeros() {
        assert_eq!(dec("0.2"), dec("0.200"));
        assert_eq!(dec("1e-7"), dec("0.0000001"));
    }

    #[test]
    fn min_max_follow_natural_ordering() {
        let a = dec("-0.3");
        let b = dec("0.1");
        assert_eq!(a.clone().min(b.clone()), a);
        assert_eq!(a.min(b.clone()), b.clone().min(dec("-0.3")));
        assert_eq!(dec("0.5").max(Dec::zero()), dec("0.5"));
    }

    #[test]
    fn sigmoid_of_zero_is_half() {
        assert_eq!(Dec::zero().sigmoid(), dec("0.5"));
    }

    #[test]
    fn sigmoid_is_capped_at_five_digits() {
        // 1 / (1 + e^-1) = 0.73105857863... -> 0.73106 at five digits.
        assert_eq!(Dec::one().sigmoid(), dec("0.73106"));
        // Symmetric tail: 1 / (1 + e^1) = 0.26894142137... -> 0.26894.
        assert_eq!(dec("-1").sigmoid(), dec("0.26894"));
    }

    #[test]
    fn sigmoid_saturates_toward_the_rails() {
        // sigmoid(5) = 0.99330714907... -> 0.99331 at five digits.
        assert_eq!(dec("5").sigmoid(), dec("0.99331"));
        assert_eq!(dec("-5").sigmoid(), dec("0.0066929"));
    }

    #[test]
    fn exp_matches_reference_values() {
        let e1 = exp(&BigDecimal::one());
        // e = 2.71828182845904523536...
        let expected: BigDecimal = "2.7182818284590452354".parse().unwrap();
        assert_eq!(e1, expected);
    }

    #[test]
    fn sqrt_of_zero_short_circuits() {
        assert_eq!(Dec::zero().sqrt(), Dec::zero());
    }

    #[test]
    fn sqrt_of_perfect_square() {
        assert_eq!(dec("4").sqrt(), dec("2"));
        assert_eq!(dec("0.25").sqrt(), dec("0.5"));
    }

    #[test]
    fn label_rounding() {
        assert_eq!(dec("7").round_to_i64(), 7);
        assert_eq!(dec("6.9999").round_to_i64(), 7);
        assert_eq!(Dec::zero().round_to_i64(), 0);
    }
}
