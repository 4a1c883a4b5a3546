//! Short-vector enumeration over a projected block (C7): three interchangeable
//! strategies plugged into the same BKZ driver.

pub mod se91;
pub mod se94;
pub mod sh;

use crate::gso::Gso;

/// Which enumeration strategy the BKZ driver should call for each block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumVariant {
    /// Schnorr-Euchner 1991: ceiling-bound stepping, no pruning.
    Se91,
    /// Schnorr-Euchner 1994: centered rounding with a widening pruning slope.
    Se94,
    /// Schnorr-Hörner: round-to-nearest descent, alternating ascent.
    Sh,
}

/// The result of enumerating one block: the best squared norm found and the
/// integer coordinates (in the block's local basis) that achieve it.
#[derive(Debug, Clone)]
pub struct EnumResult {
    pub rho: f64,
    pub u: Vec<i64>,
}

/// A read-only view of the Gram-Schmidt state restricted to the half-open
/// column range `[a, b)`. The enumerator only ever sees `c` and `mu` through
/// this window — it never touches the integer basis directly.
#[derive(Clone, Copy)]
pub struct BlockView<'a> {
    gso: &'a Gso,
    a: usize,
    b: usize,
}

impl<'a> BlockView<'a> {
    pub fn new(gso: &'a Gso, a: usize, b: usize) -> Self {
        BlockView { gso, a, b }
    }

    pub fn len(&self) -> usize {
        self.b - self.a
    }

    pub fn c(&self, local: usize) -> f64 {
        self.gso.c(self.a + local)
    }

    pub fn mu(&self, row_local: usize, col_local: usize) -> f64 {
        self.gso.mu(self.a + row_local, self.a + col_local)
    }
}

pub fn enumerate(variant: EnumVariant, block: BlockView) -> EnumResult {
    match variant {
        EnumVariant::Se91 => se91::enumerate(block),
        EnumVariant::Se94 => se94::enumerate(block),
        EnumVariant::Sh => sh::enumerate(block),
    }
}
