//! Subcommand implementations

pub(crate) mod analyse;
pub(crate) mod evaluate;
pub(crate) mod list;
pub(crate) mod train;

use sentir::toolkit::Toolkit;

/// Requested sentence-level indices, or every registered one.
pub(crate) fn selected_indices(toolkit: &Toolkit, requested: &[usize]) -> Vec<usize> {
    if requested.is_empty() {
        (0..toolkit.sentence_levels().len()).collect()
    } else {
        requested.to_vec()
    }
}
