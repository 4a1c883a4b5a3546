//! Schnorr-Euchner 1994 enumeration: centered rounding with an alternating
//! zigzag step, and a pruning slope `alpha = min(1.05*(k-t+1)/k, 1)` applied
//! at every depth — widest near the root, strictest near the leaves.

use super::BlockView;
use crate::enumeration::EnumResult;

pub(crate) fn enumerate(block: BlockView) -> EnumResult {
    let b = block.len();
    let k = b - 1;

    if k == 0 {
        return EnumResult {
            rho: block.c(0),
            u: vec![1],
        };
    }

    let mut tilde_c = vec![0.0f64; k + 2];
    let mut tilde_u = vec![0.0f64; k + 2];
    let mut u = vec![0i64; k + 1];
    let mut y = vec![0.0f64; k + 1];
    let mut tri = vec![0.0f64; k + 2];
    let mut v = vec![0.0f64; k + 2];
    let mut step_dir = vec![1.0f64; k + 2];
    let mut s = 0usize;
    let mut t = 0usize;
    let mut rho = block.c(0);

    tilde_u[0] = 1.0;
    u[0] = 1;

    while t <= k {
        tilde_c[t] = tilde_c[t + 1] + (y[t] + tilde_u[t]).powi(2) * block.c(t);
        let alpha = (1.05 * (k - t + 1) as f64 / k as f64).min(1.0);

        if tilde_c[t] < alpha * rho {
            if t > 0 {
                t -= 1;
                y[t] = (t + 1..=s).map(|i| tilde_u[i] * block.mu(t, i)).sum();
                tilde_u[t] = (-y[t]).round();
                v[t] = tilde_u[t];
                tri[t] = 0.0;
                step_dir[t] = if tilde_u[t] > -y[t] { -1.0 } else { 1.0 };
            } else {
                rho = tilde_c[0];
                for i in 0..=k {
                    u[i] = tilde_u[i].round() as i64;
                }
            }
        } else {
            t += 1;
            s = s.max(t);
            if t < s {
                tri[t] = -tri[t];
            }
            if tri[t] * step_dir[t] >= 0.0 {
                tri[t] += step_dir[t];
            }
            tilde_u[t] = v[t] + tri[t];
        }
    }

    EnumResult { rho, u }
}
