//! Working precision (C10): a single, process-wide bound on how large a
//! size-reduction multiplier is allowed to grow before a stage is considered
//! numerically untrustworthy and replayed.

use crate::matrix::Matrix;
use crate::vector::IntVector;

/// Number of consecutive precision-flag trips at one stage before a stage
/// walk logs a warning that the working precision may be too low.
pub const PRECISION_WARN_STREAK: usize = 3;

/// Coarse precision knob, mirroring the `--precision` choices of the
/// reference implementation this crate's algorithms are grounded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Low,
    Default,
    High,
}

impl Default for Precision {
    fn default() -> Self {
        Precision::Default
    }
}

/// The computed threshold tau, clamped to a precision-dependent range.
#[derive(Debug, Clone, Copy)]
pub struct Tau(i32);

impl Tau {
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Derive tau from the mean column norm of the *starting* basis. Computed
    /// once per top-level call and threaded down to every GSO operation —
    /// never recomputed mid-run, so a run's numerical behaviour doesn't
    /// drift as the basis itself is reduced.
    pub fn from_basis(basis: &Matrix<IntVector>, precision: Precision) -> Self {
        let n = basis.width();
        let avg_norm = if n == 0 {
            1.0
        } else {
            let total: f64 = (0..n)
                .map(|i| basis[i].dot(&basis[i]).to_f64().sqrt())
                .sum();
            (total / n as f64).max(f64::MIN_POSITIVE)
        };

        let log2_norm = avg_norm.log2();
        let (raw, lo, hi) = match precision {
            Precision::Low => (log2_norm, 10, 40),
            Precision::Default => (log2_norm * 1.5, 20, 60),
            Precision::High => (log2_norm * 2.0, 30, 80),
        };

        Tau(raw.trunc().clamp(lo as f64, hi as f64) as i32)
    }
}
