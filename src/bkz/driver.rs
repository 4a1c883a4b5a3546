//! The BKZ tour (C8).

use rug::Integer;

use crate::bkz::guard;
use crate::enumeration::{self, BlockView, EnumVariant};
use crate::error::ReductionError;
use crate::gso::Gso;
use crate::lll;
use crate::matrix::Matrix;
use crate::precision::{Precision, Tau};
use crate::vector::IntVector;

/// LLL's delta is relaxed to run fast on every un-accepted block; tours
/// instead re-verify with this stricter delta, matching the reference
/// algorithm's `Lovasz_cond_param=0.99` re-reduction pass.
const TOUR_RELOCK_DELTA: f64 = 0.99;

/// Parameters for a BKZ run.
#[derive(Debug, Clone)]
pub struct BkzParams {
    /// Width of the sliding enumeration window, `1 <= block_size <= n`.
    pub block_size: usize,
    /// LLL/Lovász parameter, `1/4 < delta < 1`.
    pub delta: f64,
    /// Which enumeration strategy to run on each block.
    pub variant: EnumVariant,
    /// Working precision used to derive tau (C10).
    pub precision: Precision,
    /// Whether to run the false-progress guard (C9). Disabling this recovers
    /// the original, unguarded Schnorr-Euchner tour.
    pub guard_progress: bool,
}

impl Default for BkzParams {
    fn default() -> Self {
        BkzParams {
            block_size: 20,
            delta: 0.75,
            variant: EnumVariant::Se94,
            precision: Precision::Default,
            guard_progress: true,
        }
    }
}

/// Run BKZ reduction on `basis` in place, returning the final Gram-Schmidt
/// state. `basis` always ends at its original width: any column injected
/// mid-tour is matched by exactly one deletion once it collapses to zero.
pub fn run(basis: &mut Matrix<IntVector>, params: &BkzParams) -> Result<Gso, ReductionError> {
    let n = basis.width();
    if n != basis.row_dimension() {
        return Err(ReductionError::NotSquare {
            rows: basis.row_dimension(),
            cols: n,
        });
    }
    if !basis.is_full_rank() {
        return Err(ReductionError::RankDeficient);
    }
    if !(0.25 < params.delta && params.delta < 1.0) {
        return Err(ReductionError::InvalidDelta(params.delta));
    }
    if params.block_size == 0 || params.block_size > n {
        return Err(ReductionError::InvalidBlockSize {
            block_size: params.block_size,
            n,
        });
    }

    let tau = Tau::from_basis(basis, params.precision);

    let mut gso = Gso::fresh(n);
    lll::core::run(basis, &mut gso, 1, n, params.delta, &tau);

    let m = n - 1;
    if m == 0 {
        return Ok(gso);
    }

    let mut z = 0usize;
    let mut j: usize = 0;
    let mut first = true;

    while z < m {
        let mut k;
        if first {
            first = false;
        } else {
            j += 1;
        }
        k = (j + params.block_size - 1).min(m);
        if j == m {
            j = 0;
            k = params.block_size;
        }

        let block_end = (k + 1).min(m);

        log::debug!(
            "bkz: tour step j={} k={} block_end={} z={}/{}",
            j,
            k,
            block_end,
            z,
            m
        );

        let view = BlockView::new(&gso, j, k + 1);
        let result = enumeration::enumerate(params.variant, view);

        let mut accepted = false;

        if params.delta * gso.c(j) > result.rho {
            let block_len = k + 1 - j;
            let before: Vec<f64> = (j..=k).map(|idx| gso.c(idx)).collect();

            let mut b_new = IntVector::zero(basis.row_dimension());
            for (idx, &coeff) in result.u.iter().enumerate() {
                if coeff != 0 {
                    b_new = b_new.add(&basis[j + idx].mulf(&Integer::from(coeff)));
                }
            }

            log::debug!("bkz: injecting candidate at column {}", j);
            basis.insert(j, b_new);
            gso.insert_blank(j);

            let deep_end = block_end + 2;
            lll::deep::run(basis, &mut gso, j, deep_end, params.delta, &tau, true);

            let after: Vec<f64> = (j..=k).map(|idx| gso.c(idx)).collect();

            let no_progress = params.guard_progress && guard::no_material_change(&before, &after, block_len);

            if no_progress {
                log::warn!(
                    "bkz: progress guard suppressed a stall reset for block [{}, {}]",
                    j,
                    k
                );
            } else {
                z = 0;
                accepted = true;
            }
        }

        if !accepted {
            z += 1;
            let prefix_end = block_end + 1;
            let stage = block_end - 1;
            lll::core::run(basis, &mut gso, stage, prefix_end, TOUR_RELOCK_DELTA, &tau);
        }
    }

    Ok(gso)
}
