//! Exact rational number type
//!
//! A simple rational number implementation using BigInt for numerator and denominator.
//! Values are always kept in lowest terms with a positive denominator.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Exact rational number (numerator / denominator)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    pub numerator: BigInt,
    pub denominator: BigInt,
}

impl Rational {
    /// Create a new rational number from numerator and denominator
    ///
    /// # Panics
    /// Panics if `den` is zero
    pub fn new(num: BigInt, den: BigInt) -> Self {
        assert!(!den.is_zero(), "rational with zero denominator");
        let mut r = Self {
            numerator: num,
            denominator: den,
        };
        r.reduce();
        r
    }

    /// Create a rational from an integer
    pub fn from_int<T: Into<BigInt>>(n: T) -> Self {
        Self {
            numerator: n.into(),
            denominator: BigInt::one(),
        }
    }

    /// Create zero
    pub fn zero() -> Self {
        Self::from_int(BigInt::zero())
    }

    /// Create one
    pub fn one() -> Self {
        Self::from_int(BigInt::one())
    }

    /// Check if this rational is zero
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Check if the denominator is one
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// The integer value, if this rational has denominator one
    pub fn to_integer(&self) -> Option<BigInt> {
        self.is_integer().then(|| self.numerator.clone())
    }

    /// Exact division, `None` when `other` is zero
    pub fn checked_div(&self, other: &Rational) -> Option<Rational> {
        if other.is_zero() {
            return None;
        }
        Some(Self::new(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        ))
    }

    /// Reduce to lowest terms
    fn reduce(&mut self) {
        if self.numerator.is_zero() {
            self.denominator = BigInt::one();
            return;
        }

        let g = self.numerator.gcd(&self.denominator);
        self.numerator = &self.numerator / &g;
        self.denominator = &self.denominator / &g;

        // Ensure denominator is positive
        if self.denominator.is_negative() {
            self.numerator = -&self.numerator;
            self.denominator = -&self.denominator;
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_int(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_int(n)
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Self::from_int(n)
    }
}

impl From<&BigInt> for Rational {
    fn from(n: &BigInt) -> Self {
        Self::from_int(n.clone())
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, other: Self) -> Rational {
        let num = &self.numerator * &other.denominator + &other.numerator * &self.denominator;
        let den = &self.denominator * &other.denominator;
        Rational::new(num, den)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        &self - &other
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, other: Self) -> Rational {
        let num = &self.numerator * &other.denominator - &other.numerator * &self.denominator;
        let den = &self.denominator * &other.denominator;
        Rational::new(num, den)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        &self * &other
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, other: Self) -> Rational {
        let num = &self.numerator * &other.numerator;
        let den = &self.denominator * &other.denominator;
        Rational::new(num, den)
    }
}

/// # Panics
/// Panics on division by zero, like integer division; use
/// [`Rational::checked_div`] to handle a zero divisor.
impl Div for Rational {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        &self / &other
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, other: Self) -> Rational {
        self.checked_div(other)
            .unwrap_or_else(|| panic!("attempt to divide {} by zero", self))
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational::zero()
    }

    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(num: i64, den: i64) -> Rational {
        Rational::new(BigInt::from(num), BigInt::from(den))
    }

    #[test]
    fn test_rational_arithmetic() {
        let a = rat(1, 2);
        let b = rat(1, 3);

        let sum = a.clone() + b.clone();
        assert_eq!(sum, rat(5, 6));

        let diff = &a - &b;
        assert_eq!(diff, rat(1, 6));

        let prod = a.clone() * b.clone();
        assert_eq!(prod, rat(1, 6));

        let quot = a / b;
        assert_eq!(quot, rat(3, 2));
    }

    #[test]
    fn test_rational_reduction() {
        let r = rat(4, 8);
        assert_eq!(r, rat(1, 2));

        // Sign moves to the numerator
        let r = rat(3, -6);
        assert_eq!(r.numerator, BigInt::from(-1));
        assert_eq!(r.denominator, BigInt::from(2));

        // Zero is normalized to 0/1
        let r = rat(0, -5);
        assert_eq!(r, Rational::zero());
        assert!(r.is_integer());
    }

    #[test]
    fn test_checked_div_by_zero() {
        assert_eq!(rat(3, 4).checked_div(&Rational::zero()), None);
        assert_eq!(rat(3, 4).checked_div(&rat(3, 2)), Some(rat(1, 2)));
    }

    #[test]
    #[should_panic(expected = "divide")]
    fn test_div_by_zero_panics() {
        let _ = rat(1, 2) / Rational::zero();
    }

    #[test]
    fn test_to_integer() {
        assert_eq!(rat(10, 5).to_integer(), Some(BigInt::from(2)));
        assert_eq!(rat(10, 4).to_integer(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(rat(-6, 4).to_string(), "-3/2");
        assert_eq!(rat(8, 4).to_string(), "2");
        assert_eq!(rat(0, -5).to_string(), "0");
    }
}
