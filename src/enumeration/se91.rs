//! Schnorr-Euchner 1991 enumeration: ceiling-bound stepping, no pruning
//! slope — the search radius only ever shrinks when a strictly better
//! candidate is found.

use super::BlockView;
use crate::enumeration::EnumResult;

pub(crate) fn enumerate(block: BlockView) -> EnumResult {
    let b = block.len();
    let k = b - 1;

    let mut search_radius = block.c(0);
    let mut tilde_c = vec![0.0f64; k + 2];
    let mut tilde_u = vec![0.0f64; k + 2];
    let mut u = vec![0i64; k + 1];
    let mut y = vec![0.0f64; k + 1];
    let mut t = k;

    u[0] = 1;
    y[t] = 0.0;
    tilde_u[t] = (-(search_radius / block.c(t)).sqrt()).ceil();

    loop {
        tilde_c[t] = tilde_c[t + 1] + (y[t] + tilde_u[t]).powi(2) * block.c(t);

        if tilde_c[t] < search_radius {
            if t > 0 {
                t -= 1;
                y[t] = (t + 1..=k).map(|i| tilde_u[i] * block.mu(t, i)).sum();
                tilde_u[t] = (-y[t] - ((search_radius - tilde_c[t + 1]) / block.c(t)).sqrt()).ceil();
                continue;
            } else if tilde_u[..=k].iter().any(|&x| x != 0.0) {
                search_radius = tilde_c[0];
                for i in 0..=k {
                    u[i] = tilde_u[i].round() as i64;
                }
            }
        } else {
            t += 1;
        }

        if t <= k {
            tilde_u[t] += 1.0;
        } else {
            break;
        }
    }

    EnumResult { rho: search_radius, u }
}
