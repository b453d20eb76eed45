//! Lattice inspection commands
//!
//! Each command parses its basis from a JSON literal, runs one core operation
//! and prints the result to stdout.

use anyhow::{bail, Context, Result};
use int_lattice_core::{parse_basis, parse_point, GramSchmidt, IntegerLattice};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::debug;

/// Print whether `point` passes the membership filter of `basis`
pub fn run_check(basis: &str, point: &str) -> Result<()> {
    let lattice = parse_basis(basis).context("invalid --basis")?;
    let point = parse_point(point).context("invalid --point")?;
    debug!(lattice = %lattice, gcd_vector = %lattice.gcd_vector(), "checking point");

    println!("{}", lattice.is_point(&point)?);
    Ok(())
}

/// Print the Gram-Schmidt vectors of `basis`, or one inner product between them
pub fn run_orthogonalize(basis: &str, inner: Option<(usize, usize)>) -> Result<()> {
    let lattice = parse_basis(basis).context("invalid --basis")?;
    let gs = GramSchmidt::compute(&lattice)?;
    let vectors = gs.vectors();

    match inner {
        Some((i, j)) => {
            if i >= vectors.len() || j >= vectors.len() {
                bail!(
                    "--inner indices must be below the basis count {}",
                    vectors.len()
                );
            }
            println!("{}", vectors[i].inner_product(&vectors[j]));
        }
        None => {
            for (i, u) in vectors.iter().enumerate() {
                println!("u_{}: {}", i, u);
            }
        }
    }

    Ok(())
}

/// Orthogonalize a random lattice and report whether the output checks out
pub fn run_random(rank: usize, dim: usize, bits: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let lattice = IntegerLattice::random(rank, dim, bits, &mut rng)?;
    println!("Random lattice: rank {}, dimension {}, {} bits", rank, dim, bits);
    println!("Max entry: {}", lattice.max_entry());

    let start = Instant::now();
    let gs = GramSchmidt::compute(&lattice)?;
    let elapsed = start.elapsed().as_secs_f64() * 1000.0;

    println!("Gram-Schmidt: {:.3} ms", elapsed);
    println!("Orthogonal: {}", gs.is_orthogonal());
    println!("Gram determinant: {}", gs.gram_determinant());

    Ok(())
}
