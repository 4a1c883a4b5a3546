//! Progress guard (C9): a scale-aware check that a block's accepted
//! candidate actually changed the Gram-Schmidt norms, guarding against a
//! candidate being injected and immediately deep-inserted back out, which
//! would otherwise look like acceptance forever without ever making
//! progress.

/// True if `before` and `after` agree within an absolute, scale- and
/// block-size-aware tolerance — i.e. no material change occurred.
pub fn no_material_change(before: &[f64], after: &[f64], block_size: usize) -> bool {
    debug_assert_eq!(before.len(), after.len());

    let scale = before
        .iter()
        .chain(after.iter())
        .cloned()
        .fold(1.0_f64, f64::max);
    let tol = block_size as f64 * 1e-12 * scale;

    before
        .iter()
        .zip(after.iter())
        .all(|(b, a)| (b - a).abs() <= tol)
}
