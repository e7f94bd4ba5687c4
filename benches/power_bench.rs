use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use orbit_core::algebra::power::{power, power_left_associated};

fn modmul(x: u64, y: u64) -> u64 {
    (x as u128 * y as u128 % 0xffff_fffb_u128) as u64
}

fn bench_power(c: &mut Criterion) {
    let mut group = c.benchmark_group("associative_power");

    for &n in &[64u64, 4096, 1 << 20] {
        group.bench_with_input(BenchmarkId::new("logarithmic", n), &n, |b, &n| {
            b.iter(|| black_box(power(black_box(3u64), n, modmul)));
        });
        if n <= 4096 {
            group.bench_with_input(BenchmarkId::new("linear_fold", n), &n, |b, &n| {
                b.iter(|| black_box(power_left_associated(black_box(3u64), n, modmul)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_power);
criterion_main!(benches);
