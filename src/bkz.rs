//! Block Korkine-Zolotarev reduction (C8): an outer tour over overlapping
//! blocks, each handed to an enumerator; accepted candidates are injected
//! and deep-inserted, rejected blocks fall back to a stricter-delta LLL
//! re-reduction of the same prefix.

pub mod driver;
pub mod guard;

pub use driver::{run, BkzParams};
