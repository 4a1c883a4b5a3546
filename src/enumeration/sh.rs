//! Schnorr-Hörner enumeration: round-to-nearest descent, with an alternating
//! `next(a, r)` step when re-ascending into already-explored territory
//! instead of a plain increment.

use super::BlockView;
use crate::enumeration::EnumResult;

fn next(a: f64, r: f64) -> f64 {
    if r > a {
        a - 1.0
    } else {
        a + 1.0
    }
}

pub(crate) fn enumerate(block: BlockView) -> EnumResult {
    let k = block.len();

    let mut tilde_c = vec![0.0f64; k + 1];
    let mut tilde_u = vec![0.0f64; k + 1];
    let mut u = vec![0i64; k];
    let mut y = vec![0.0f64; k];
    let mut t_max = 0usize;
    let mut t = 0usize;
    let mut search_radius = block.c(0);

    tilde_u[0] = 1.0;
    u[0] = 1;

    while t < k {
        tilde_c[t] = tilde_c[t + 1] + (y[t] + tilde_u[t]).powi(2) * block.c(t);

        if tilde_c[t] < search_radius {
            if t > 0 {
                t -= 1;
                y[t] = (t + 1..=t_max).map(|i| tilde_u[i] * block.mu(t, i)).sum();
                tilde_u[t] = (-y[t]).round();
            } else {
                search_radius = tilde_c[0];
                for i in 0..k {
                    u[i] = tilde_u[i].round() as i64;
                }
            }
        } else {
            t += 1;
            t_max = t_max.max(t);
            if t == t_max {
                tilde_u[t] += 1.0;
            } else {
                tilde_u[t] = next(tilde_u[t], -y[t]);
            }
        }
    }

    EnumResult {
        rho: search_radius,
        u,
    }
}
