//! Compile-time benchmark parameters.

use std::ops::RangeInclusive;

/// Logical vectors in each fixed-capacity (inline) container.
pub const SMALL_COUNT: usize = 1024;

/// Logical vectors in each run-time sized (heap) container.
pub const LARGE_COUNT: usize = 1024 * 1024;

/// Lanes per wide batch.
pub const LANES: usize = packed_vec::LANES;

/// Kernel passes per measurement. The reported time is the fastest pass.
pub const REPETITIONS: usize = 1024;

/// Lower bound of the random component range (inclusive).
pub const RANDOM_MIN: f32 = -100.0;

/// Upper bound of the random component range (inclusive).
pub const RANDOM_MAX: f32 = 100.0;

pub const RANDOM_RANGE: RangeInclusive<f32> = RANDOM_MIN..=RANDOM_MAX;

/// Wide batches in a small container.
pub const SMALL_BATCHES: usize = SMALL_COUNT / LANES;

/// Wide batches in a large container.
pub const LARGE_BATCHES: usize = LARGE_COUNT / LANES;

const _: () = assert!(SMALL_COUNT % LANES == 0 && LARGE_COUNT % LANES == 0);
