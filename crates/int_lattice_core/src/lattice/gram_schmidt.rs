//! Gram-Schmidt orthogonalization in exact rational arithmetic
//!
//! # The Gram-Schmidt Process
//!
//! Given basis B = [b_0, ..., b_{k-1}], compute orthogonal vectors u_j and coefficients μ_ji:
//!
//! ```text
//! u_0 = b_0
//! u_j = b_j - Σ_{i<j} μ_ji u_i
//! μ_ji = <b_j, u_i> / <u_i, u_i>
//! ```
//!
//! The output is orthogonal but not normalized, and each prefix u_0..u_j spans
//! the same rational subspace as b_0..b_j. Every value is an exact rational;
//! the cancellations in this process are too sensitive for floating point.

use super::basis::SpanningSet;
use crate::error::{LatticeError, Result};
use crate::rational::Rational;
use crate::vector::Vector;
use tracing::{debug, trace};

/// Gram-Schmidt orthogonalization data (exact rational representation)
#[derive(Debug, Clone)]
pub struct GramSchmidt {
    /// Orthogonal vectors u_0..u_{k-1}
    vectors: Vec<Vector<Rational>>,
    /// Gram-Schmidt coefficients μ_ji (i < j)
    /// Stored as lower triangular matrix: mu[j][i] for i < j
    mu: Vec<Vec<Rational>>,
    /// Squared norms ||u_i||^2
    norms_sq: Vec<Rational>,
}

impl GramSchmidt {
    /// Orthogonalize the basis of `lattice`
    ///
    /// A linearly dependent basis makes some u_j the zero vector, whose
    /// squared norm is the divisor of every later projection onto it. That
    /// is reported as [`LatticeError::DegenerateBasis`] as soon as u_j is
    /// produced; independence is never checked up front.
    pub fn compute<S: SpanningSet + ?Sized>(lattice: &S) -> Result<Self> {
        let basis: Vec<Vector<Rational>> =
            lattice.basis().iter().map(|b| b.to_rational()).collect();
        let k = basis.len();

        let mut vectors: Vec<Vector<Rational>> = Vec::with_capacity(k);
        let mut mu: Vec<Vec<Rational>> = Vec::with_capacity(k);
        let mut norms_sq: Vec<Rational> = Vec::with_capacity(k);

        for (j, b_j) in basis.iter().enumerate() {
            let mut projection = Vector::zeros(b_j.len());
            let mut row = Vec::with_capacity(j);

            for (u_i, norm_sq) in vectors.iter().zip(norms_sq.iter()) {
                let coeff = &b_j.inner_product(u_i) / norm_sq;
                projection = &projection + &u_i.scale(&coeff);
                row.push(coeff);
            }

            let u_j = b_j - &projection;
            let norm_sq = u_j.norm_squared();
            if norm_sq.is_zero() {
                debug!(index = j, rank = k, "orthogonal vector vanished");
                return Err(LatticeError::DegenerateBasis { index: j });
            }
            trace!(step = j, norm_sq = %norm_sq, "orthogonalized basis vector");

            vectors.push(u_j);
            mu.push(row);
            norms_sq.push(norm_sq);
        }

        Ok(Self {
            vectors,
            mu,
            norms_sq,
        })
    }

    /// The orthogonal vectors u_0..u_{k-1}
    pub fn vectors(&self) -> &[Vector<Rational>] {
        &self.vectors
    }

    pub fn into_vectors(self) -> Vec<Vector<Rational>> {
        self.vectors
    }

    /// Number of orthogonal vectors
    pub fn rank(&self) -> usize {
        self.vectors.len()
    }

    /// Get μ_ji (`None` unless i < j < rank)
    pub fn mu(&self, j: usize, i: usize) -> Option<&Rational> {
        self.mu.get(j).and_then(|row| row.get(i))
    }

    /// Get ||u_i||^2 (`None` unless i < rank)
    pub fn norm_sq(&self, i: usize) -> Option<&Rational> {
        self.norms_sq.get(i)
    }

    /// Exact pairwise orthogonality check of the output
    pub fn is_orthogonal(&self) -> bool {
        self.vectors.iter().enumerate().all(|(i, u_i)| {
            self.vectors[i + 1..]
                .iter()
                .all(|u_j| u_i.inner_product(u_j).is_zero())
        })
    }

    /// Product of the squared norms ||u_i||^2
    ///
    /// Equals det(B B^T), the squared covolume of the lattice.
    pub fn gram_determinant(&self) -> Rational {
        self.norms_sq
            .iter()
            .fold(Rational::one(), |acc, n| &acc * n)
    }
}

/// Orthogonal (not orthonormal) basis for the rational span of `lattice`'s basis
pub fn gram_schmidt_orthogonalization<S: SpanningSet + ?Sized>(
    lattice: &S,
) -> Result<Vec<Vector<Rational>>> {
    GramSchmidt::compute(lattice).map(GramSchmidt::into_vectors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::basis::IntegerLattice;
    use crate::{lattice, vector};
    use num_bigint::BigInt;

    fn rat(num: i64, den: i64) -> Rational {
        Rational::new(BigInt::from(num), BigInt::from(den))
    }

    #[test]
    fn test_gram_schmidt_basic() {
        // Simple 2D basis
        let lattice = lattice![vector![3, 1], vector![2, 2]].unwrap();
        let gs = GramSchmidt::compute(&lattice).unwrap();

        // ||u_0||^2 = <b_0, b_0> = 9 + 1 = 10
        assert_eq!(gs.norm_sq(0), Some(&Rational::from(10)));

        // μ_10 = <b_1, u_0> / ||u_0||^2 = (6 + 2) / 10 = 4/5
        assert_eq!(gs.mu(1, 0), Some(&rat(4, 5)));

        // u_1 = (2, 2) - 4/5 (3, 1) = (-2/5, 6/5)
        assert_eq!(gs.vectors()[1], Vector::new(vec![rat(-2, 5), rat(6, 5)]));
        assert_eq!(gs.norm_sq(1), Some(&rat(8, 5)));
        assert_eq!(gs.norm_sq(2), None);
        assert_eq!(gs.mu(2, 0), None);

        // det = 3*2 - 1*2 = 4
        assert_eq!(gs.gram_determinant(), Rational::from(16));
    }

    #[test]
    fn test_gram_schmidt_3d() {
        let lattice = lattice![
            vector![1, 1, 1],
            vector![-1, 0, 2],
            vector![3, 5, 6],
        ]
        .unwrap();
        let gs = GramSchmidt::compute(&lattice).unwrap();

        assert_eq!(gs.rank(), 3);
        assert!(gs.is_orthogonal());
        for i in 0..3 {
            let norm = gs.norm_sq(i).unwrap();
            assert!(
                norm.numerator > BigInt::from(0),
                "Norm at {} should be positive: {:?}",
                i,
                norm
            );
        }

        // |det B| = 1*(0*6 - 2*5) - 1*(-1*6 - 2*3) + 1*(-5 - 0) = -10 + 12 - 5 = -3
        assert_eq!(gs.gram_determinant(), Rational::from(9));
    }

    #[test]
    fn test_first_vector_unchanged() {
        let lattice = lattice![vector![4, -2, 7], vector![1, 1, 1]].unwrap();
        let ortho = gram_schmidt_orthogonalization(&lattice).unwrap();
        assert_eq!(ortho[0], vector![4, -2, 7].to_rational());
    }

    #[test]
    fn test_prefix_reconstruction() {
        let lattice = lattice![
            vector![2, 1, 0, 3],
            vector![1, 4, 1, 0],
            vector![0, 2, 5, 1],
        ]
        .unwrap();
        let gs = GramSchmidt::compute(&lattice).unwrap();

        // b_j = u_j + Σ_{i<j} μ_ji u_i
        for (j, b_j) in lattice.basis().iter().enumerate() {
            let mut rebuilt = gs.vectors()[j].clone();
            for i in 0..j {
                let coeff = gs.mu(j, i).unwrap();
                rebuilt = &rebuilt + &gs.vectors()[i].scale(coeff);
            }
            assert_eq!(rebuilt, b_j.to_rational());
        }
        assert_eq!(gs.mu(0, 0), None);
        assert_eq!(gs.mu(1, 1), None);
    }

    #[test]
    fn test_scenario_two_orthogonality() {
        let lattice = lattice![
            vector![1, 0, 0, 0, 12345],
            vector![0, 1, 0, 0, 13333],
            vector![0, 0, 1, 0, 10058],
            vector![0, 0, 0, 1, 1033],
            vector![0, 0, 0, 0, 15432],
        ]
        .unwrap();
        assert!(lattice.is_point(&vector![-2, -3, 5, -1, 0]).unwrap());

        let ortho = gram_schmidt_orthogonalization(&lattice).unwrap();
        assert_eq!(ortho.len(), 5);
        assert_eq!(ortho[1].inner_product(&ortho[3]), Rational::zero());

        let gs = GramSchmidt::compute(&lattice).unwrap();
        assert!(gs.is_orthogonal());
        // Upper triangular with diagonal (1, 1, 1, 1, 15432)
        assert_eq!(gs.gram_determinant(), Rational::from(15432i64 * 15432));
    }

    #[test]
    fn test_degenerate_basis() {
        let lattice = lattice![vector![2, 0], vector![4, 0]].unwrap();
        let err = gram_schmidt_orthogonalization(&lattice).unwrap_err();
        assert!(matches!(err, LatticeError::DegenerateBasis { index: 1 }));
    }

    #[test]
    fn test_degenerate_before_last() {
        let basis = vec![vector![1, 1, 0], vector![2, 2, 0], vector![0, 0, 1]];
        let err = GramSchmidt::compute(&basis).unwrap_err();
        assert!(matches!(err, LatticeError::DegenerateBasis { index: 1 }));
    }

    #[test]
    fn test_plain_basis_slice() {
        let basis = vec![vector![1, 2], vector![3, 4]];
        let from_slice = gram_schmidt_orthogonalization(basis.as_slice()).unwrap();
        let lattice = IntegerLattice::new(basis).unwrap();
        assert_eq!(from_slice, gram_schmidt_orthogonalization(&lattice).unwrap());
    }

    #[test]
    fn test_input_untouched() {
        let lattice = lattice![vector![3, 1], vector![2, 2]].unwrap();
        let before = lattice.clone();
        let first = gram_schmidt_orthogonalization(&lattice).unwrap();
        let second = gram_schmidt_orthogonalization(&lattice).unwrap();
        assert_eq!(lattice, before);
        assert_eq!(first, second);
    }
}
