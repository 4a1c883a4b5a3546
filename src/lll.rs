//! Floating-point LLL reduction, classic and deep-insertion variants.
//!
//! Both variants share the same incremental Gram-Schmidt state ([`crate::gso::Gso`])
//! and the same stage-walk shape: update the current column's GSO data,
//! size-reduce it against everything below it, and either advance or step
//! back, depending on whether a swap (or, for deep insertion, a reordering)
//! was warranted.

pub mod core;
pub mod deep;
