//! Fixed-length vectors over an exact numeric ring
//!
//! [`Vector<T>`] is an immutable value type: every operation returns a new
//! vector. The ring is fixed at compile time, either [`BigInt`] for lattice
//! bases and candidate points or [`Rational`] for Gram-Schmidt output.
//! Integer vectors upcast to rational ones, never the other way around.

use crate::rational::Rational;
use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

/// Exact numeric ring usable as a vector coordinate
pub trait Ring: Clone + PartialEq + fmt::Debug + fmt::Display + Zero {
    fn add_ref(&self, other: &Self) -> Self;
    fn sub_ref(&self, other: &Self) -> Self;
    fn mul_ref(&self, other: &Self) -> Self;
    fn neg_ref(&self) -> Self;
}

impl Ring for BigInt {
    fn add_ref(&self, other: &Self) -> Self {
        self + other
    }

    fn sub_ref(&self, other: &Self) -> Self {
        self - other
    }

    fn mul_ref(&self, other: &Self) -> Self {
        self * other
    }

    fn neg_ref(&self) -> Self {
        -self
    }
}

impl Ring for Rational {
    fn add_ref(&self, other: &Self) -> Self {
        self + other
    }

    fn sub_ref(&self, other: &Self) -> Self {
        self - other
    }

    fn mul_ref(&self, other: &Self) -> Self {
        self * other
    }

    fn neg_ref(&self) -> Self {
        -self
    }
}

/// An ordered, fixed-length sequence of ring elements
///
/// Binary operations require operands of equal length and panic otherwise,
/// the same way slice indexing panics out of bounds.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Vector<T> {
    coords: Vec<T>,
}

impl<T: Ring> Vector<T> {
    pub fn new(coords: Vec<T>) -> Self {
        Self { coords }
    }

    pub fn from_slice(coords: &[T]) -> Self {
        Self::new(coords.to_vec())
    }

    /// The zero vector of length `n`
    pub fn zeros(n: usize) -> Self {
        Self::new(vec![T::zero(); n])
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&T> {
        self.coords.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coords.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.coords
    }

    pub fn into_inner(self) -> Vec<T> {
        self.coords
    }

    /// Multiply every coordinate by `scalar`
    pub fn scale(&self, scalar: &T) -> Self {
        self.coords.iter().map(|x| x.mul_ref(scalar)).collect()
    }

    /// Sum of coordinate-wise products
    pub fn inner_product(&self, other: &Self) -> T {
        self.check_len(other);
        self.coords
            .iter()
            .zip(other.coords.iter())
            .fold(T::zero(), |acc, (a, b)| acc.add_ref(&a.mul_ref(b)))
    }

    /// `<v, v>`
    pub fn norm_squared(&self) -> T {
        self.inner_product(self)
    }

    pub fn is_zero(&self) -> bool {
        self.coords.iter().all(|x| x.is_zero())
    }

    fn zip_with(&self, other: &Self, f: impl Fn(&T, &T) -> T) -> Self {
        self.check_len(other);
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| f(a, b))
            .collect()
    }

    fn check_len(&self, other: &Self) {
        assert_eq!(
            self.len(),
            other.len(),
            "vector length mismatch: {} vs {}",
            self.len(),
            other.len()
        );
    }
}

impl Vector<BigInt> {
    /// Upcast to the rational ring
    pub fn to_rational(&self) -> Vector<Rational> {
        self.coords.iter().map(Rational::from).collect()
    }

    /// Scale by a rational, producing a rational vector
    pub fn scale_rational(&self, scalar: &Rational) -> Vector<Rational> {
        self.to_rational().scale(scalar)
    }
}

impl From<Vector<BigInt>> for Vector<Rational> {
    fn from(v: Vector<BigInt>) -> Self {
        v.coords.into_iter().map(Rational::from).collect()
    }
}

impl<T: Ring> From<Vec<T>> for Vector<T> {
    fn from(coords: Vec<T>) -> Self {
        Self::new(coords)
    }
}

impl<T: Ring> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.coords[i]
    }
}

impl<T: Ring> Add for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, other: Self) -> Vector<T> {
        self.zip_with(other, T::add_ref)
    }
}

impl<T: Ring> Sub for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, other: Self) -> Vector<T> {
        self.zip_with(other, T::sub_ref)
    }
}

impl<T: Ring> Mul<&T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, scalar: &T) -> Vector<T> {
        self.scale(scalar)
    }
}

impl<T: Ring> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        self.coords.iter().map(T::neg_ref).collect()
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, ")")
    }
}

impl<T: fmt::Display> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector([")?;
        for (i, x) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "])")
    }
}

/// Build a `Vector<BigInt>` from integer literals
///
/// ```
/// use int_lattice_core::vector;
///
/// let v = vector![1, -2, 3];
/// assert_eq!(v.len(), 3);
/// ```
#[macro_export]
macro_rules! vector {
    ($($x:expr),* $(,)?) => {
        $crate::Vector::<$crate::num_bigint::BigInt>::new(
            vec![$($crate::num_bigint::BigInt::from($x)),*]
        )
    };
}
