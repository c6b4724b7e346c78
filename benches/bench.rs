use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use strategy_sort::comparator::{self, Comparator};
use strategy_sort::merge_sort;
use strategy_sort::patterns;

fn bench_pattern(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: fn(usize) -> Vec<i32>,
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&format!("strategy_sort-{pattern_name}-{test_size}"), |b| {
        b.iter_batched(
            || pattern_provider(test_size),
            |test_data| merge_sort::sort(black_box(test_data)),
            batch_size,
        )
    });

    // Same strategy through a non-trivial comparator, to measure the cost
    // of the pluggable-ordering indirection.
    let descending = comparator::natural::<i32>().reversed();
    c.bench_function(
        &format!("strategy_sort_rev-{pattern_name}-{test_size}"),
        |b| {
            b.iter_batched(
                || pattern_provider(test_size),
                |test_data| merge_sort::sort_with(black_box(test_data), &descending),
                batch_size,
            )
        },
    );

    // Stdlib stable sort as the baseline.
    c.bench_function(&format!("rust_std_stable-{pattern_name}-{test_size}"), |b| {
        b.iter_batched(
            || pattern_provider(test_size),
            |mut test_data| black_box(test_data.as_mut_slice()).sort(),
            batch_size,
        )
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    // Distinct inputs per batch, a fixed seed would sort the same vector
    // over and over.
    patterns::disable_fixed_seed();

    let test_sizes = [20, 200, 10_000, 100_000];

    let pattern_providers: [(&str, fn(usize) -> Vec<i32>); 5] = [
        ("random", patterns::random),
        ("random_d20", |size| patterns::random_uniform(size, 0..20)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("all_equal", patterns::all_equal),
    ];

    for test_size in test_sizes {
        for (pattern_name, pattern_provider) in pattern_providers {
            bench_pattern(c, test_size, pattern_name, pattern_provider);
        }
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
