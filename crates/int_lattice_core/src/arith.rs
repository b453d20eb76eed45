//! Integer arithmetic helpers
//!
//! Euclidean GCD over arbitrary-precision integers, used to build the
//! per-coordinate GCD vector of a lattice basis.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Greatest common divisor by the iterative Euclidean algorithm
///
/// Repeatedly replaces `(a, b)` with `(b, a mod b)` until `b` is zero.
/// The result is non-negative, and `gcd(0, 0) = 0`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a.abs()
}

/// GCD of every value yielded by `values` (zero for an empty iterator)
pub fn gcd_all<'a, I>(values: I) -> BigInt
where
    I: IntoIterator<Item = &'a BigInt>,
{
    values
        .into_iter()
        .fold(BigInt::zero(), |acc, x| gcd(&acc, x))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_gcd_basic() {
        assert_eq!(gcd(&big(1), &big(1)), big(1));
        assert_eq!(gcd(&big(5), &big(5)), big(5));
        assert_eq!(gcd(&big(12), &big(18)), big(6));
        assert_eq!(gcd(&big(17), &big(5)), big(1));
    }

    #[test]
    fn test_gcd_with_zero() {
        assert_eq!(gcd(&big(7), &big(0)), big(7));
        assert_eq!(gcd(&big(0), &big(7)), big(7));
        assert_eq!(gcd(&big(0), &big(0)), big(0));
    }

    #[test]
    fn test_gcd_negative_inputs() {
        assert_eq!(gcd(&big(-4), &big(6)), big(2));
        assert_eq!(gcd(&big(4), &big(-6)), big(2));
        assert_eq!(gcd(&big(-4), &big(0)), big(4));
    }

    #[test]
    fn test_gcd_all() {
        let values = [big(259), big(0), big(0), big(0), big(0)];
        assert_eq!(gcd_all(&values), big(259));

        let values = [big(12), big(18), big(30)];
        assert_eq!(gcd_all(&values), big(6));

        assert_eq!(gcd_all(std::iter::empty()), big(0));
    }
}
