//! Error types returned at the crate's external interfaces.

use thiserror::Error;

/// Failure modes for [`crate::reduce_lll`], [`crate::reduce_lll_deep`] and
/// [`crate::reduce_bkz`].
#[derive(Debug, Error)]
pub enum ReductionError {
    #[error("basis must be square: got {rows} row(s) and {cols} column(s)")]
    NotSquare { rows: usize, cols: usize },

    #[error("basis is not full rank")]
    RankDeficient,

    #[error("delta must lie in (1/4, 1), got {0}")]
    InvalidDelta(f64),

    #[error("block size must lie in [1, {n}], got {block_size}")]
    InvalidBlockSize { block_size: usize, n: usize },
}
