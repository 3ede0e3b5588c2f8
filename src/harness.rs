//! Repeated timing of the kernel over a whole container.
//!
//! A measurement runs the kernel over every element, in index order, a fixed
//! number of times. Each pass is timed on its own with [`Instant`]; the
//! fastest pass is the reported result, which filters out passes that were
//! interrupted by scheduling or other noise.

use std::hint::black_box;
use std::time::{Duration, Instant};

use packed_vec::Kernel;

use crate::storage::Storage;

/// Per-pass durations of one measurement, in execution order.
#[derive(Debug, Clone, Default)]
pub struct Samples {
    durations: Vec<Duration>,
}

impl Samples {
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Duration> {
        self.durations.iter()
    }

    /// Fastest pass, or zero when nothing was timed.
    pub fn min(&self) -> Duration {
        self.durations.iter().copied().min().unwrap_or(Duration::ZERO)
    }

    pub fn median(&self) -> Duration {
        self.percentile(0.5)
    }

    pub fn p95(&self) -> Duration {
        self.percentile(0.95)
    }

    fn percentile(&self, q: f64) -> Duration {
        if self.durations.is_empty() {
            return Duration::ZERO;
        }
        let mut sorted = self.durations.clone();
        sorted.sort_unstable();
        let n = sorted.len();
        let idx = ((n as f64 * q).ceil() as usize).saturating_sub(1);
        sorted[idx.min(n - 1)]
    }
}

impl FromIterator<Duration> for Samples {
    fn from_iter<I: IntoIterator<Item = Duration>>(iter: I) -> Self {
        Self {
            durations: iter.into_iter().collect(),
        }
    }
}

/// Run `pass` exactly `reps` times, timing each call separately.
pub fn time_repeated<F: FnMut()>(reps: usize, mut pass: F) -> Samples {
    let mut durations = Vec::with_capacity(reps);
    for _ in 0..reps {
        let start = Instant::now();
        pass();
        durations.push(start.elapsed());
    }
    Samples { durations }
}

/// One kernel pass over every element, in place.
#[inline(never)]
pub fn kernel_pass<T: Kernel>(items: &mut [T]) {
    for item in items.iter_mut() {
        item.apply();
    }
}

/// Time `reps` kernel passes over `storage`.
///
/// Each pass reads the values the previous pass wrote; the first pass reads
/// whatever the caller filled in.
pub fn measure<S: Storage + ?Sized>(storage: &mut S, reps: usize) -> Samples {
    time_repeated(reps, || {
        kernel_pass(black_box(storage.elements_mut()));
    })
}
