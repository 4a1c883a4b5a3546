//! Floating-point lattice basis reduction: LLL (classic and deep-insertion)
//! and block-wise BKZ, with a choice of three Schnorr-Euchner/Schnorr-Hörner
//! enumeration strategies for the inner SVP search.
//!
//! # Examples
//!
//! ```rust
//! use bkz_rs::{reduce_lll, Matrix};
//! use rug::Integer;
//!
//! let mut basis: Matrix<bkz_rs::vector::IntVector> = Matrix::from_columns(
//!     vec![
//!         bkz_rs::vector::IntVector::from_vec(vec![Integer::from(1), Integer::from(0)]),
//!         bkz_rs::vector::IntVector::from_vec(vec![Integer::from(23), Integer::from(1)]),
//!     ],
//!     2,
//! );
//!
//! let reduced = reduce_lll(&mut basis, 0.75).unwrap();
//! assert_eq!(reduced.gso.width(), 2);
//! ```

pub mod bkz;
pub mod enumeration;
pub mod error;
pub mod gso;
pub mod lll;
pub mod matrix;
pub mod precision;
pub mod vector;

pub use bkz::BkzParams;
pub use enumeration::{enumerate, EnumVariant};
pub use error::ReductionError;
pub use matrix::Matrix;
pub use precision::Precision;

use gso::Gso;
use matrix::Matrix as MatrixT;
use precision::Tau;
use vector::IntVector;

/// A reduced basis together with the Gram-Schmidt state it was reduced
/// under, returned by every top-level entry point.
pub struct ReducedBasis {
    pub basis: MatrixT<IntVector>,
    pub gso: Gso,
}

fn validate_square(basis: &MatrixT<IntVector>) -> Result<(), ReductionError> {
    if basis.width() != basis.row_dimension() {
        return Err(ReductionError::NotSquare {
            rows: basis.row_dimension(),
            cols: basis.width(),
        });
    }
    Ok(())
}

fn validate_delta(delta: f64) -> Result<(), ReductionError> {
    if !(0.25 < delta && delta < 1.0) {
        return Err(ReductionError::InvalidDelta(delta));
    }
    Ok(())
}

fn validate_full_rank(basis: &MatrixT<IntVector>) -> Result<(), ReductionError> {
    if !basis.is_full_rank() {
        return Err(ReductionError::RankDeficient);
    }
    Ok(())
}

/// Classic LLL reduction (C5), delta-reduced and size-reduced on return.
pub fn reduce_lll(basis: &mut MatrixT<IntVector>, delta: f64) -> Result<ReducedBasis, ReductionError> {
    validate_square(basis)?;
    validate_full_rank(basis)?;
    validate_delta(delta)?;

    let tau = Tau::from_basis(basis, Precision::Default);
    let n = basis.width();
    let mut gso = Gso::fresh(n);
    lll::core::run(basis, &mut gso, 1, n, delta, &tau);

    Ok(ReducedBasis {
        basis: basis.clone(),
        gso,
    })
}

/// LLL reduction with deep insertion (C6), starting fresh from column 1.
pub fn reduce_lll_deep(
    basis: &mut MatrixT<IntVector>,
    delta: f64,
) -> Result<ReducedBasis, ReductionError> {
    validate_square(basis)?;
    validate_full_rank(basis)?;
    validate_delta(delta)?;

    let tau = Tau::from_basis(basis, Precision::Default);
    let n = basis.width();
    let mut gso = Gso::fresh(n);
    lll::deep::run(basis, &mut gso, 1, n, delta, &tau, false);

    Ok(ReducedBasis {
        basis: basis.clone(),
        gso,
    })
}

/// Block Korkine-Zolotarev reduction (C8).
pub fn reduce_bkz(
    basis: &mut MatrixT<IntVector>,
    params: &BkzParams,
) -> Result<ReducedBasis, ReductionError> {
    let gso = bkz::run(basis, params)?;
    Ok(ReducedBasis {
        basis: basis.clone(),
        gso,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use rug::Integer;

    fn col(values: &[i64]) -> IntVector {
        IntVector::from_vec(values.iter().map(|&x| Integer::from(x)).collect())
    }

    #[test]
    fn reduce_lll_shrinks_a_skewed_basis() {
        let mut basis = MatrixT::from_columns(vec![col(&[1, 0]), col(&[23, 1])], 2);
        let reduced = reduce_lll(&mut basis, 0.75).expect("valid input");
        let norms: Vec<f64> = (0..2)
            .map(|i| reduced.basis[i].dot(&reduced.basis[i]).to_f64())
            .collect();
        assert!(norms.iter().all(|&n| n <= 2.0));
    }

    #[test]
    fn reduce_lll_rejects_non_square_basis() {
        let mut basis = MatrixT::from_columns(vec![col(&[1, 0, 0])], 3);
        assert!(matches!(
            reduce_lll(&mut basis, 0.75),
            Err(ReductionError::NotSquare { .. })
        ));
    }

    #[test]
    fn reduce_lll_rejects_rank_deficient_basis() {
        let mut basis = MatrixT::from_columns(vec![col(&[1, 0]), col(&[1, 0])], 2);
        assert!(matches!(
            reduce_lll(&mut basis, 0.75),
            Err(ReductionError::RankDeficient)
        ));
    }

    #[test]
    fn reduce_lll_rejects_bad_delta() {
        let mut basis = MatrixT::from_columns(vec![col(&[1, 0]), col(&[0, 1])], 2);
        assert!(matches!(
            reduce_lll(&mut basis, 1.5),
            Err(ReductionError::InvalidDelta(_))
        ));
    }

    #[test]
    fn reduce_bkz_keeps_basis_width() {
        let mut basis = MatrixT::from_columns(
            vec![col(&[1, 0, 0]), col(&[0, 1, 0]), col(&[23, 41, 1])],
            3,
        );
        let params = BkzParams {
            block_size: 2,
            ..BkzParams::default()
        };
        let reduced = reduce_bkz(&mut basis, &params).expect("valid input");
        assert_eq!(reduced.basis.width(), 3);
    }
}
