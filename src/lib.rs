//! Data-layout benchmark for small `f32` vectors.
//!
//! Compares 3- and 4-component vectors, interleaved and in wide batches,
//! stored inline (fixed capacity) and on the heap (run-time size), under a
//! repeated in-place kernel. See [`suite`] for the case table.

pub mod constants;
pub mod harness;
pub mod randomize;
pub mod report;
pub mod storage;
pub mod suite;
pub mod util;

pub use harness::{measure, time_repeated, Samples};
pub use randomize::{bench_rng, fill_random, BenchRng, Randomize};
pub use report::Measurement;
pub use storage::{HeapStorage, InlineStorage, Storage, StorageKind};
pub use suite::{run_suite, Case, CASES};
