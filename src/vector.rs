//! Integer lattice vectors (basis columns).

use rug::Integer;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A single column of a lattice basis, with arbitrary-precision integer
/// coefficients. Arithmetic here is exact; conversion to `f64` is only ever
/// used to feed the (double-precision) Gram-Schmidt bookkeeping in
/// [`crate::gso`] — the basis itself is never rounded.
#[derive(Clone, PartialEq)]
pub struct IntVector {
    coefficients: Vec<Integer>,
}

impl IntVector {
    /// The all-zero vector of the given dimension.
    pub fn zero(dimension: usize) -> Self {
        Self {
            coefficients: vec![Integer::from(0); dimension],
        }
    }

    /// The `position`-th standard basis vector of the given dimension.
    pub fn basis_vector(dimension: usize, position: usize) -> Self {
        assert!(position < dimension);

        let mut coefficients = vec![Integer::from(0); dimension];
        coefficients[position] = Integer::from(1);
        Self { coefficients }
    }

    /// Build a vector from its coefficients.
    pub fn from_vec(coefficients: Vec<Integer>) -> Self {
        Self { coefficients }
    }

    pub fn dimension(&self) -> usize {
        self.coefficients.len()
    }

    pub fn add(&self, other: &Self) -> Self {
        let n = self.dimension();
        assert_eq!(n, other.dimension());

        Self::from_vec(
            (0..n)
                .map(|i| Integer::from(&self.coefficients[i] + &other.coefficients[i]))
                .collect(),
        )
    }

    pub fn sub(&self, other: &Self) -> Self {
        let n = self.dimension();
        assert_eq!(n, other.dimension());

        Self::from_vec(
            (0..n)
                .map(|i| Integer::from(&self.coefficients[i] - &other.coefficients[i]))
                .collect(),
        )
    }

    /// Multiplication by an integer scalar.
    pub fn mulf(&self, scalar: &Integer) -> Self {
        let n = self.dimension();

        Self::from_vec(
            (0..n)
                .map(|i| Integer::from(&self.coefficients[i] * scalar))
                .collect(),
        )
    }

    pub fn dot(&self, other: &Self) -> Integer {
        let n = self.dimension();
        assert_eq!(n, other.dimension());

        (0..n)
            .map(|i| Integer::from(&self.coefficients[i] * &other.coefficients[i]))
            .sum()
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| *c == 0)
    }
}

impl Index<usize> for IntVector {
    type Output = Integer;

    fn index(&self, index: usize) -> &Integer {
        &self.coefficients[index]
    }
}

impl IndexMut<usize> for IntVector {
    fn index_mut(&mut self, index: usize) -> &mut Integer {
        &mut self.coefficients[index]
    }
}

impl fmt::Debug for IntVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.coefficients)
    }
}
