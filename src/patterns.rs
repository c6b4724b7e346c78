//! Input shapes for testing and benchmarking the sort. Limited to `i32`
//! values.
//!
//! All randomness flows through one process-wide seed so that failures are
//! reproducible from the seed printed by the test harness. Benchmarks call
//! [`disable_fixed_seed`] to get fresh inputs per invocation.

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;

pub fn random(size: usize) -> Vec<i32> {
    let mut rng = seeded_rng();

    (0..size).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    let mut rng = seeded_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn all_equal(size: usize) -> Vec<i32> {
    vec![66; size]
}

pub fn ascending(size: usize) -> Vec<i32> {
    (0..size as i32).collect()
}

pub fn descending(size: usize) -> Vec<i32> {
    (0..size as i32).rev().collect()
}

pub fn ascending_saw(size: usize, saw_count: usize) -> Vec<i32> {
    saw(size, saw_count, |chunk| chunk.sort())
}

pub fn descending_saw(size: usize, saw_count: usize) -> Vec<i32> {
    saw(size, saw_count, |chunk| {
        chunk.sort_by_key(|&val| std::cmp::Reverse(val))
    })
}

/// Sawtooth with a randomly chosen direction per tooth.
pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<i32> {
    if size == 0 {
        return Vec::new();
    }

    let chunk_size = (size / saw_count.max(1)).max(1);
    let directions = random_uniform(size / chunk_size + 1, 0..=1);

    let mut vals = random(size);
    for (direction, chunk) in directions.iter().zip(vals.chunks_mut(chunk_size)) {
        if *direction == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&val| std::cmp::Reverse(val));
        }
    }

    vals
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    let mut vals = random(size);

    let (rising, falling) = vals.split_at_mut(size / 2);
    rising.sort();
    falling.sort_by_key(|&val| std::cmp::Reverse(val));

    vals
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

/// The seed behind every pattern. Fixed per process by default, print it
/// before testing so crashes are reproducible.
pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| thread_rng().gen())
    } else {
        thread_rng().gen()
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn saw(size: usize, saw_count: usize, sort_chunk: impl Fn(&mut [i32])) -> Vec<i32> {
    if size == 0 {
        return Vec::new();
    }

    let chunk_size = (size / saw_count.max(1)).max(1);

    let mut vals = random(size);
    for chunk in vals.chunks_mut(chunk_size) {
        sort_chunk(chunk);
    }

    vals
}
