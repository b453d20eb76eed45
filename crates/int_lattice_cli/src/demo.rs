//! Reference demonstration
//!
//! Builds two literal lattices, checks a known point in each, and prints the
//! inner product of two Gram-Schmidt vectors of the second lattice.

use anyhow::{ensure, Context, Result};
use int_lattice_core::{gram_schmidt_orthogonalization, lattice, vector, IntegerLattice};
use tracing::info;

pub fn run_demo() -> Result<()> {
    let first: IntegerLattice = lattice![
        vector![1, 122, 133, 58, 203],
        vector![0, 259, 0, 0, 0],
        vector![0, 0, 259, 0, 0],
        vector![0, 0, 0, 259, 0],
        vector![0, 0, 0, 0, 259],
    ]
    .context("building first lattice")?;
    info!(lattice = %first, "first lattice");

    let x = vector![-4, 30, -14, 27, -35];
    ensure!(first.is_point(&x)?, "{} should be a point of {}", x, first);

    let second = lattice![
        vector![1, 0, 0, 0, 12345],
        vector![0, 1, 0, 0, 13333],
        vector![0, 0, 1, 0, 10058],
        vector![0, 0, 0, 1, 1033],
        vector![0, 0, 0, 0, 15432],
    ]
    .context("building second lattice")?;
    info!(lattice = %second, "second lattice");

    let x = vector![-2, -3, 5, -1, 0];
    ensure!(second.is_point(&x)?, "{} should be a point of {}", x, second);

    let ortho = gram_schmidt_orthogonalization(&second).context("orthogonalizing second lattice")?;
    println!("{}", ortho[1].inner_product(&ortho[3]));

    Ok(())
}
