//! Int Lattice Core Library
//!
//! Exact integer and rational linear algebra for integer lattices.
//!
//! # Overview
//!
//! This library builds lattices from integer basis vectors, filters candidate
//! points with a per-coordinate GCD test, and orthogonalizes bases with
//! Gram-Schmidt in exact rational arithmetic. Nothing here touches floating
//! point.
//!
//! # Key Components
//!
//! - [`arith`] - Euclidean GCD
//! - [`rational`] - Exact rational number type
//! - [`vector`] - Fixed-length vectors over an exact ring
//! - [`lattice`] - Integer lattices and Gram-Schmidt orthogonalization
//! - [`parse`] - JSON basis and point literals
//! - [`error`] - Error taxonomy

pub mod arith;
pub mod error;
pub mod lattice;
pub mod parse;
pub mod rational;
pub mod vector;

pub use num_bigint;

pub use arith::{gcd, gcd_all};
pub use error::{LatticeError, Result};
pub use lattice::{gram_schmidt_orthogonalization, GramSchmidt, IntegerLattice, SpanningSet};
pub use parse::{parse_basis, parse_point};
pub use rational::Rational;
pub use vector::{Ring, Vector};
