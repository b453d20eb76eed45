//! Integer lattice representation
//!
//! A lattice L(B) = {Σ x_i b_i : x_i ∈ Z} spanned by a finite, non-empty
//! set of equal-length integer basis vectors.

use crate::arith::gcd;
use crate::error::{LatticeError, Result};
use crate::rational::Rational;
use crate::vector::Vector;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use rand::Rng;
use std::fmt;
use tracing::debug;

/// Anything that exposes an ordered basis of equal-length integer vectors
pub trait SpanningSet {
    fn basis(&self) -> &[Vector<BigInt>];
}

impl SpanningSet for [Vector<BigInt>] {
    fn basis(&self) -> &[Vector<BigInt>] {
        self
    }
}

impl SpanningSet for Vec<Vector<BigInt>> {
    fn basis(&self) -> &[Vector<BigInt>] {
        self
    }
}

/// A lattice over the integers
///
/// Each basis vector b_i lives in Z^n. The basis is validated at
/// construction and never mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct IntegerLattice {
    basis: Vec<Vector<BigInt>>,
    /// Coordinate i is the GCD of coordinate i across every basis vector
    gcd_vector: Vector<BigInt>,
}

impl IntegerLattice {
    /// Create a lattice from an ordered, non-empty collection of basis vectors
    ///
    /// Fails with [`LatticeError::EmptyBasis`] for an empty collection and
    /// [`LatticeError::DimensionMismatch`] when a vector's length differs from
    /// the first one's.
    pub fn new(basis: Vec<Vector<BigInt>>) -> Result<Self> {
        let first = basis.first().ok_or(LatticeError::EmptyBasis)?;
        let n = first.len();
        if let Some((index, v)) = basis.iter().enumerate().find(|(_, v)| v.len() != n) {
            return Err(LatticeError::DimensionMismatch {
                index,
                expected: n,
                actual: v.len(),
            });
        }

        let gcd_vector = gcd_fold(&basis);
        debug!(
            rank = basis.len(),
            dimension = n,
            gcd_vector = %gcd_vector,
            "constructed integer lattice"
        );

        Ok(Self { basis, gcd_vector })
    }

    /// Create a lattice from integer rows
    pub fn from_rows<T: Into<BigInt> + Clone>(rows: &[Vec<T>]) -> Result<Self> {
        let basis = rows
            .iter()
            .map(|row| row.iter().map(|x| x.clone().into()).collect())
            .collect();
        Self::new(basis)
    }

    /// Create a lattice from rational vectors whose coordinates are all integers
    ///
    /// Lengths are checked before integrality, so a basis that is both ragged
    /// and fractional reports [`LatticeError::DimensionMismatch`].
    pub fn try_from_rational(basis: Vec<Vector<Rational>>) -> Result<Self> {
        let first = basis.first().ok_or(LatticeError::EmptyBasis)?;
        let n = first.len();
        if let Some((index, v)) = basis.iter().enumerate().find(|(_, v)| v.len() != n) {
            return Err(LatticeError::DimensionMismatch {
                index,
                expected: n,
                actual: v.len(),
            });
        }

        let mut integer_basis = Vec::with_capacity(basis.len());
        for (index, v) in basis.iter().enumerate() {
            let coords = v
                .iter()
                .enumerate()
                .map(|(coordinate, x)| {
                    x.to_integer().ok_or_else(|| LatticeError::NonIntegerBasis {
                        index,
                        coordinate,
                        value: x.to_string(),
                    })
                })
                .collect::<Result<Vec<BigInt>>>()?;
            integer_basis.push(Vector::new(coords));
        }

        Self::new(integer_basis)
    }

    /// Create a random lattice for testing
    ///
    /// # Arguments
    /// * `rank` - Number of basis vectors
    /// * `dimension` - Dimension of ambient space
    /// * `bits` - Maximum bit size of entries (clamped to 1..=63)
    pub fn random<R: Rng>(
        rank: usize,
        dimension: usize,
        bits: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let bits = bits.clamp(1, 63);
        let bound = 1i64 << (bits - 1);

        let basis = (0..rank)
            .map(|_| {
                (0..dimension)
                    .map(|_| BigInt::from(rng.gen_range(-bound..bound)))
                    .collect()
            })
            .collect();

        Self::new(basis)
    }

    /// Number of basis vectors
    pub fn rank(&self) -> usize {
        self.basis.len()
    }

    /// Dimension of the ambient space
    pub fn dimension(&self) -> usize {
        self.gcd_vector.len()
    }

    pub fn basis(&self) -> &[Vector<BigInt>] {
        &self.basis
    }

    pub fn gcd_vector(&self) -> &Vector<BigInt> {
        &self.gcd_vector
    }

    /// Fast lattice-membership filter
    ///
    /// Returns true when every coordinate of `v` is a multiple of the
    /// matching GCD-vector coordinate. Every lattice point passes, but in
    /// dimension above one some non-points pass too: this is a necessary
    /// condition only. Exact membership would need a Hermite normal form.
    ///
    /// A zero GCD coordinate admits only zero in that coordinate. A `v` of
    /// the wrong length fails with [`LatticeError::LengthMismatch`].
    pub fn is_point(&self, v: &Vector<BigInt>) -> Result<bool> {
        if v.len() != self.dimension() {
            return Err(LatticeError::LengthMismatch {
                expected: self.dimension(),
                actual: v.len(),
            });
        }

        Ok(v.iter().zip(self.gcd_vector.iter()).all(|(x, g)| {
            if g.is_zero() {
                x.is_zero()
            } else {
                (x % g).is_zero()
            }
        }))
    }

    /// The lattice point Σ c_i b_i, one coefficient per basis vector
    pub fn combination(&self, coeffs: &[BigInt]) -> Result<Vector<BigInt>> {
        if coeffs.len() != self.rank() {
            return Err(LatticeError::LengthMismatch {
                expected: self.rank(),
                actual: coeffs.len(),
            });
        }

        Ok(self
            .basis
            .iter()
            .zip(coeffs)
            .fold(Vector::zeros(self.dimension()), |acc, (b, c)| &acc + &(b * c)))
    }

    /// Get maximum absolute entry
    pub fn max_entry(&self) -> BigInt {
        self.basis
            .iter()
            .flat_map(|v| v.iter())
            .map(|x| x.abs())
            .max()
            .unwrap_or_else(BigInt::zero)
    }
}

impl SpanningSet for IntegerLattice {
    fn basis(&self) -> &[Vector<BigInt>] {
        &self.basis
    }
}

/// Element-wise GCD folded across the basis, starting from the first vector
fn gcd_fold(basis: &[Vector<BigInt>]) -> Vector<BigInt> {
    let mut running: Vector<BigInt> = basis[0].iter().map(|x| x.abs()).collect();
    for b in &basis[1..] {
        running = b.iter().zip(running.iter()).map(|(x, acc)| gcd(x, acc)).collect();
    }
    running
}

impl fmt::Display for IntegerLattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer Lattice with {} basis [", self.rank())?;
        for (i, v) in self.basis.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

/// Renders as the constructor call that rebuilds this lattice
impl fmt::Debug for IntegerLattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntegerLattice::new(vec![")?;
        for (i, v) in self.basis.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "vector![")?;
            for (j, x) in v.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", x)?;
            }
            write!(f, "]")?;
        }
        write!(f, "])")
    }
}

/// Build an [`IntegerLattice`] from basis vectors given as arguments
///
/// ```
/// use int_lattice_core::{lattice, vector};
///
/// let l = lattice![vector![2, 0], vector![0, 3]].unwrap();
/// assert_eq!(l.rank(), 2);
/// ```
#[macro_export]
macro_rules! lattice {
    ($($v:expr),+ $(,)?) => {
        $crate::IntegerLattice::new(vec![$($v),+])
    };
}
