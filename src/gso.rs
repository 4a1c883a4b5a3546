//! Gram-Schmidt orthogonalization bookkeeping (C1-C4).
//!
//! `Gso` keeps the running Gram-Schmidt coefficients (`mu`) and squared norms
//! (`c`) of a basis in double precision. It never reads the basis except
//! through exact integer dot products, which are cast down to `f64` only at
//! the last moment — the same discipline the floating-point LLL variant this
//! crate descends from uses throughout.

use rug::Integer;

use crate::matrix::Matrix;
use crate::vector::IntVector;

pub struct Gso {
    /// `mu[j][k]` is the Gram-Schmidt coefficient of column `k` against
    /// column `j`, defined (and only meaningful) for `j <= k`.
    mu: Vec<Vec<f64>>,
    /// `c[k]` is the squared norm of the `k`-th Gram-Schmidt vector.
    c: Vec<f64>,
}

impl Gso {
    /// A fresh, empty Gram-Schmidt state for a basis of the given width.
    pub fn fresh(width: usize) -> Self {
        let mut mu = vec![vec![0.0; width]; width];
        if width > 0 {
            mu[0][0] = 1.0;
        }
        Gso {
            mu,
            c: vec![0.0; width],
        }
    }

    pub fn width(&self) -> usize {
        self.c.len()
    }

    pub fn c(&self, k: usize) -> f64 {
        self.c[k]
    }

    pub fn mu(&self, j: usize, k: usize) -> f64 {
        self.mu[j][k]
    }

    /// Insert a blank row/column at position `at`, growing the width by one.
    /// The new entries are never read before being overwritten: whichever
    /// stage walk triggered the insertion always recomputes every column
    /// from `at` onward before relying on it.
    pub fn insert_blank(&mut self, at: usize) {
        for row in self.mu.iter_mut() {
            row.insert(at, 0.0);
        }
        let width = self.mu.len() + 1;
        let mut blank_row = vec![0.0; width];
        blank_row[at] = 1.0;
        self.mu.insert(at, blank_row);
        self.c.insert(at, 0.0);
    }

    /// C3 — remove the (now-dependent) column `at`, shrinking the width by
    /// one.
    pub fn remove(&mut self, at: usize) {
        log::debug!("gso: removing column {}", at);
        self.mu.remove(at);
        for row in self.mu.iter_mut() {
            row.remove(at);
        }
        self.c.remove(at);
    }

    /// C1 — incremental Gram-Schmidt update for column `k` (`k >= 1`).
    pub fn step(&mut self, basis: &Matrix<IntVector>, k: usize) {
        log::trace!("gso: step k={}", k);
        if k == 1 {
            self.c[0] = basis[0].dot(&basis[0]).to_f64();
        }

        let mut c_k = basis[k].dot(&basis[k]).to_f64();
        for j in 0..k {
            let dot_kj = basis[k].dot(&basis[j]).to_f64();
            let correction: f64 = (0..j).map(|i| self.mu[i][j] * self.mu[i][k] * self.c[i]).sum();
            let mu_jk = (dot_kj - correction) / self.c[j];
            self.mu[j][k] = mu_jk;
            c_k -= mu_jk * mu_jk * self.c[j];
        }
        self.c[k] = c_k;
        self.mu[k][k] = 1.0;
    }

    /// C2 — size-reduce column `k` against every column below it, in a
    /// single descending pass. Sets `*fc` if any multiplier used was large
    /// enough to suggest the running `mu`/`c` values are no longer
    /// trustworthy at the working precision.
    pub fn size_reduce(&mut self, basis: &mut Matrix<IntVector>, k: usize, tau: i32, fc: &mut bool) {
        log::trace!("gso: size-reduce k={}", k);
        for l in (0..k).rev() {
            let mu_lk = self.mu[l][k];
            if mu_lk.abs() > 0.5 {
                let m = mu_lk.round();
                if m.abs() > 2f64.powf(f64::from(tau) / 2.0) {
                    *fc = true;
                }

                let m_int = Integer::from_f64(m).unwrap_or_else(|| Integer::from(0));
                let scaled = basis[l].mulf(&m_int);
                basis[k] = basis[k].sub(&scaled);

                for j in 0..l {
                    self.mu[j][k] -= m * self.mu[j][l];
                }
                self.mu[l][k] -= m;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn basis_from(rows: &[[i64; 2]]) -> Matrix<IntVector> {
        let columns: Vec<IntVector> = rows
            .iter()
            .map(|r| IntVector::from_vec(r.iter().map(|&x| Integer::from(x)).collect()))
            .collect();
        Matrix::from_columns(columns, 2)
    }

    #[test]
    fn step_reproduces_orthogonal_basis_norms() {
        let basis = basis_from(&[[1, 0], [0, 1]]);
        let mut gso = Gso::fresh(2);
        gso.step(&basis, 1);
        assert_eq!(gso.c(0), 1.0);
        assert_eq!(gso.c(1), 1.0);
        assert_eq!(gso.mu(0, 1), 0.0);
    }

    #[test]
    fn size_reduce_shrinks_overhanging_column() {
        let mut basis = basis_from(&[[1, 0], [10, 1]]);
        let mut gso = Gso::fresh(2);
        gso.step(&basis, 1);
        assert!(gso.mu(0, 1).abs() > 0.5);

        let mut fc = false;
        gso.size_reduce(&mut basis, 1, 40, &mut fc);
        assert!(!fc);
        assert_eq!(basis[1][0], 0);
        assert_eq!(basis[1][1], 1);
    }

    #[test]
    fn insert_remove_blank_round_trips_width() {
        let mut gso = Gso::fresh(3);
        gso.insert_blank(1);
        assert_eq!(gso.width(), 4);
        gso.remove(1);
        assert_eq!(gso.width(), 3);
    }
}
