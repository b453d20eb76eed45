// benches/gram_schmidt.rs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use int_lattice_core::num_bigint::BigInt;
use int_lattice_core::{GramSchmidt, IntegerLattice, Vector};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Random bases are dependent with negligible probability at these sizes.
fn random_lattice(n: usize, bits: usize) -> IntegerLattice {
    let mut rng = StdRng::seed_from_u64(0x1a77);
    IntegerLattice::random(n, n, bits, &mut rng).unwrap()
}

fn bench_gram_schmidt(c: &mut Criterion) {
    let mut group = c.benchmark_group("gram_schmidt");
    for n in [4usize, 8, 16] {
        let lattice = random_lattice(n, 16);
        group.bench_with_input(BenchmarkId::from_parameter(n), &lattice, |b, lattice| {
            b.iter(|| black_box(GramSchmidt::compute(black_box(lattice)).unwrap()))
        });
    }
    group.finish();
}

fn bench_is_point(c: &mut Criterion) {
    let lattice = random_lattice(32, 20);
    let coeffs: Vec<BigInt> = (0..32).map(|i| BigInt::from(i - 16)).collect();
    let point: Vector<BigInt> = lattice.combination(&coeffs).unwrap();

    c.bench_function("is_point_32d", |b| {
        b.iter(|| black_box(lattice.is_point(black_box(&point)).unwrap()))
    });
}

criterion_group!(benches, bench_gram_schmidt, bench_is_point);
criterion_main!(benches);
