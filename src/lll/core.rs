//! Classic LLL stage-walk (C5).

use crate::gso::Gso;
use crate::matrix::Matrix;
use crate::precision::{Tau, PRECISION_WARN_STREAK};
use crate::vector::IntVector;

/// Run the LLL stage-walk over `basis[0..end)`, mutating `basis` and `gso`
/// in place. Columns below `start_stage` are assumed to already carry valid
/// Gram-Schmidt data; everything from `start_stage` onward is (re)computed
/// as the walk proceeds, so stale leftover values there are harmless.
///
/// `start_stage == 0` is treated as "start fresh from stage 1" — column 0
/// never goes through [`Gso::step`] itself, its norm is seeded as a side
/// effect of processing column 1.
pub fn run(
    basis: &mut Matrix<IntVector>,
    gso: &mut Gso,
    start_stage: usize,
    end: usize,
    delta: f64,
    tau: &Tau,
) {
    let mut stage = start_stage.max(1);
    let mut fc_streak = 0usize;

    while stage < end {
        let mut fc = false;
        gso.step(basis, stage);
        gso.size_reduce(basis, stage, tau.value(), &mut fc);

        if fc {
            fc_streak += 1;
            if fc_streak >= PRECISION_WARN_STREAK {
                log::warn!(
                    "lll: precision flag fired {} times in a row at stage {}",
                    fc_streak,
                    stage
                );
            }
            stage = stage.saturating_sub(1).max(1);
            continue;
        }
        fc_streak = 0;

        let mu_prev = gso.mu(stage - 1, stage);
        let lovasz_lhs = delta * gso.c(stage - 1);
        let lovasz_rhs = gso.c(stage) + mu_prev * mu_prev * gso.c(stage - 1);

        if lovasz_lhs > lovasz_rhs {
            basis.swap(stage - 1, stage);
            log::debug!("lll: swapped columns {} and {}", stage - 1, stage);
            stage = stage.saturating_sub(1).max(1);
        } else {
            stage += 1;
        }
    }
}
