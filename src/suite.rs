//! The benchmark case table and the driver that runs it.
//!
//! Every case owns a fresh container: it is allocated, randomized once with
//! the shared generator, timed, reported and dropped before the next case
//! starts. Nothing is carried between cases except the generator state.

use packed_vec::{Kernel, Vec3, Vec3Wide, Vec4, Vec4Wide};

use crate::constants::{LANES, LARGE_BATCHES, LARGE_COUNT, REPETITIONS, SMALL_BATCHES, SMALL_COUNT};
use crate::harness::measure;
use crate::randomize::{fill_random, BenchRng, Randomize};
use crate::report::Measurement;
use crate::storage::{HeapStorage, InlineStorage, Storage, StorageKind};
use crate::util::Timed;

/// One layout/container combination.
pub struct Case {
    pub kind: StorageKind,
    /// Element name as printed inside the label.
    pub element: &'static str,
    /// Logical vectors covered by the container (lanes count individually).
    pub logical_count: usize,
    run: fn(&str, &mut BenchRng) -> Measurement,
}

impl Case {
    /// `<container><<element>>`, e.g. `array<vec3_wide<8>>`.
    pub fn label(&self) -> String {
        format!("{}<{}>", self.kind, self.element)
    }

    pub fn matches(&self, filter: Option<&str>) -> bool {
        filter.map_or(true, |f| self.label().contains(f))
    }

    pub fn run(&self, rng: &mut BenchRng) -> Measurement {
        let label = self.label();
        let _t = Timed::debug(label.clone());
        (self.run)(&label, rng)
    }
}

/// Randomize `storage` once, then time `reps` kernel passes over it.
pub fn bench_storage<S>(storage: &mut S, label: &str, rng: &mut BenchRng, reps: usize) -> Measurement
where
    S: Storage + ?Sized,
    S::Elem: Randomize,
{
    fill_random(storage, rng);
    let samples = measure(storage, reps);
    log::debug!(
        "{}: {} passes over {} elements, min {:.3?} median {:.3?} p95 {:.3?}",
        label,
        samples.len(),
        storage.len(),
        samples.min(),
        samples.median(),
        samples.p95()
    );
    Measurement::new(label, &samples, storage.footprint())
}

fn inline_case<T, const LEN: usize>(label: &str, rng: &mut BenchRng) -> Measurement
where
    T: Kernel + Randomize + Default,
{
    let mut storage = InlineStorage::<T, LEN>::new();
    bench_storage(&mut storage, label, rng, REPETITIONS)
}

fn heap_case<T, const LEN: usize>(label: &str, rng: &mut BenchRng) -> Measurement
where
    T: Kernel + Randomize + Default + Clone,
{
    let mut storage = HeapStorage::<T>::new(LEN);
    bench_storage(&mut storage, label, rng, REPETITIONS)
}

/// Every case, in the order they are run and printed.
pub static CASES: &[Case] = &[
    Case {
        kind: StorageKind::Inline,
        element: "vec3",
        logical_count: SMALL_COUNT,
        run: inline_case::<Vec3, SMALL_COUNT>,
    },
    Case {
        kind: StorageKind::Inline,
        element: "vec4",
        logical_count: SMALL_COUNT,
        run: inline_case::<Vec4, SMALL_COUNT>,
    },
    Case {
        kind: StorageKind::Inline,
        element: "vec3_wide<8>",
        logical_count: SMALL_COUNT,
        run: inline_case::<Vec3Wide<LANES>, SMALL_BATCHES>,
    },
    Case {
        kind: StorageKind::Inline,
        element: "vec4_wide<8>",
        logical_count: SMALL_COUNT,
        run: inline_case::<Vec4Wide<LANES>, SMALL_BATCHES>,
    },
    Case {
        kind: StorageKind::Heap,
        element: "vec3",
        logical_count: LARGE_COUNT,
        run: heap_case::<Vec3, LARGE_COUNT>,
    },
    Case {
        kind: StorageKind::Heap,
        element: "vec4",
        logical_count: LARGE_COUNT,
        run: heap_case::<Vec4, LARGE_COUNT>,
    },
    Case {
        kind: StorageKind::Heap,
        element: "vec3_wide<8>",
        logical_count: LARGE_COUNT,
        run: heap_case::<Vec3Wide<LANES>, LARGE_BATCHES>,
    },
    Case {
        kind: StorageKind::Heap,
        element: "vec4_wide<8>",
        logical_count: LARGE_COUNT,
        run: heap_case::<Vec4Wide<LANES>, LARGE_BATCHES>,
    },
    Case {
        kind: StorageKind::Heap,
        element: "glam::Vec3",
        logical_count: LARGE_COUNT,
        run: heap_case::<glam::Vec3, LARGE_COUNT>,
    },
    Case {
        kind: StorageKind::Heap,
        element: "glam::Vec3A",
        logical_count: LARGE_COUNT,
        run: heap_case::<glam::Vec3A, LARGE_COUNT>,
    },
    Case {
        kind: StorageKind::Heap,
        element: "glam::Vec4",
        logical_count: LARGE_COUNT,
        run: heap_case::<glam::Vec4, LARGE_COUNT>,
    },
];

/// Run every case whose label contains `filter` (all cases when `None`),
/// handing each result to `sink` as soon as it is measured.
///
/// Returns the number of cases run.
pub fn run_suite<F>(rng: &mut BenchRng, filter: Option<&str>, mut sink: F) -> usize
where
    F: FnMut(Measurement),
{
    let mut ran = 0;
    for case in CASES.iter().filter(|c| c.matches(filter)) {
        sink(case.run(rng));
        ran += 1;
    }
    ran
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use std::mem::size_of;

    #[test]
    fn test_labels_are_unique() {
        let labels: HashSet<String> = CASES.iter().map(Case::label).collect();
        assert_eq!(labels.len(), CASES.len());
        assert!(labels.contains("array<vec3>"));
        assert!(labels.contains("vector<vec4_wide<8>>"));
    }

    #[test]
    fn test_filter_matching() {
        let wide: Vec<String> = CASES
            .iter()
            .filter(|c| c.matches(Some("_wide")))
            .map(Case::label)
            .collect();
        assert_eq!(wide.len(), 4);
        assert_eq!(CASES.iter().filter(|c| c.matches(None)).count(), CASES.len());
        assert_eq!(CASES.iter().filter(|c| c.matches(Some("nope"))).count(), 0);
    }

    #[test]
    fn test_element_names_match_lane_width() {
        assert!(CASES
            .iter()
            .filter(|c| c.element.contains("wide"))
            .all(|c| c.element.ends_with(&format!("<{}>", LANES))));
    }

    #[test]
    fn test_small_inline_vec3_case() {
        let mut rng = BenchRng::seed_from_u64(12345);
        let m = CASES[0].run(&mut rng);
        assert_eq!(m.label, "array<vec3>");
        assert!(m.seconds >= 0.0);
        assert_eq!(m.footprint, size_of::<[f32; 3]>() * SMALL_COUNT);
    }

    #[test]
    fn test_run_suite_with_filter() {
        let mut rng = BenchRng::seed_from_u64(7);
        let mut seen = Vec::new();
        let ran = run_suite(&mut rng, Some("array<vec4"), |m| seen.push(m));
        assert_eq!(ran, 2);
        let labels: Vec<&str> = seen.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, ["array<vec4>", "array<vec4_wide<8>>"]);
        assert_eq!(seen[0].footprint, 16 * SMALL_COUNT);
        assert_eq!(seen[1].footprint, size_of::<Vec4Wide<LANES>>() * SMALL_BATCHES);
    }
}
