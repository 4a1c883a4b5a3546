//! LLL with deep insertion (C6): a generalization of the classic swap step
//! that can move a column past several neighbors in a single structural
//! move, plus the bookkeeping needed when a just-injected candidate
//! collapses a column to zero.

use crate::gso::Gso;
use crate::matrix::Matrix;
use crate::precision::{Tau, PRECISION_WARN_STREAK};
use crate::vector::IntVector;

/// Run the deep-insertion stage-walk over `basis[0..end)`.
///
/// `fc` is the caller's initial "don't trust the prefix" flag: BKZ always
/// seeds this `true` right after injecting a candidate, forcing one
/// discard-and-replay cycle before genuine precision drift is allowed to
/// trigger replays of its own.
pub fn run(
    basis: &mut Matrix<IntVector>,
    gso: &mut Gso,
    start_stage: usize,
    mut end: usize,
    delta: f64,
    tau: &Tau,
    mut fc: bool,
) {
    let mut stage = start_stage.max(1);
    let mut fc_streak = 0usize;

    while stage < end {
        gso.step(basis, stage);
        gso.size_reduce(basis, stage, tau.value(), &mut fc);

        if fc {
            fc_streak += 1;
            if fc_streak >= PRECISION_WARN_STREAK {
                log::warn!(
                    "lll-deep: precision flag fired {} times in a row at stage {}",
                    fc_streak,
                    stage
                );
            }
            fc = false;
            stage = stage.saturating_sub(1).max(1);
            continue;
        }
        fc_streak = 0;

        if basis[stage].is_zero() {
            log::debug!("lll-deep: deleting zero column at stage {}", stage);
            basis.remove(stage);
            gso.remove(stage);
            end -= 1;
            stage = 1;
            continue;
        }

        let mut projected_norm = basis[stage].dot(&basis[stage]).to_f64();
        let mut i = 0;
        let mut reordered = false;

        while i < stage {
            if delta * gso.c(i) <= projected_norm {
                let mu_i = gso.mu(i, stage);
                projected_norm -= mu_i * mu_i * gso.c(i);
                i += 1;
            } else {
                let column = basis.remove(stage);
                basis.insert(i, column);
                log::debug!("lll-deep: moved column {} to position {}", stage, i);
                stage = if i >= 2 { i - 1 } else { 1 };
                reordered = true;
                break;
            }
        }

        if !reordered {
            stage += 1;
        }
    }
}
