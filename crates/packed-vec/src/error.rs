use thiserror::Error;

/// Errors from converting between interleaved and wide-batch layouts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("cannot split {len} vectors into batches of {lanes} lanes")]
    RaggedBatch { len: usize, lanes: usize },

    #[error("wide batches need at least one lane")]
    ZeroLanes,
}
