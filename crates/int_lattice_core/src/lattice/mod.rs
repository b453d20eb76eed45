//! Integer lattices and exact orthogonalization
//!
//! # Key Components
//!
//! - [`IntegerLattice`] - Validated integer basis with a GCD membership filter
//! - [`GramSchmidt`] - Exact rational Gram-Schmidt orthogonalization
//!
//! # Example
//!
//! ```
//! use int_lattice_core::lattice::{gram_schmidt_orthogonalization, IntegerLattice};
//! use int_lattice_core::vector;
//!
//! let lattice = IntegerLattice::new(vec![
//!     vector![1, 0, 3],
//!     vector![0, 1, 5],
//!     vector![0, 0, 7],
//! ])?;
//!
//! assert!(lattice.is_point(&vector![2, -1, 1])?);
//!
//! let ortho = gram_schmidt_orthogonalization(&lattice)?;
//! assert!(ortho[0].inner_product(&ortho[2]).is_zero());
//! # Ok::<(), int_lattice_core::LatticeError>(())
//! ```

pub mod basis;
pub mod gram_schmidt;

pub use basis::{IntegerLattice, SpanningSet};
pub use gram_schmidt::{gram_schmidt_orthogonalization, GramSchmidt};
