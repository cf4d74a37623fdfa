//! Stateless helpers: SKU decomposition and sort-key ordering.

use std::cmp::Ordering;

use crate::conf::{C_SKU_DELIMITER, N_SKU_PARTS_MAX};
use crate::spec::SpecDecomposedSku;

////////////////////////////////////////////////////////////////////////////////
// #region SkuDecomposition

/// Split a composite SKU into `(style, color, size, extra)`.
///
/// Missing trailing parts are `None`; segments past the fourth are dropped.
/// An empty SKU yields all parts `None`. Never fails.
pub fn decompose_sku(sku: &str) -> SpecDecomposedSku {
    if sku.is_empty() {
        return SpecDecomposedSku::default();
    }

    let mut l_parts = sku
        .split(C_SKU_DELIMITER)
        .take(N_SKU_PARTS_MAX)
        .map(str::to_string);

    SpecDecomposedSku {
        style: l_parts.next(),
        color: l_parts.next(),
        size: l_parts.next(),
        extra: l_parts.next(),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SortKeys

/// Text used for ordering and grouping; absent sorts as the empty string.
pub fn derive_key_text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Lexicographic, case-sensitive `(style, color, size)` comparison.
pub fn compare_style_color_size(
    lhs: (&Option<String>, &Option<String>, &Option<String>),
    rhs: (&Option<String>, &Option<String>, &Option<String>),
) -> Ordering {
    derive_key_text(lhs.0)
        .cmp(derive_key_text(rhs.0))
        .then_with(|| derive_key_text(lhs.1).cmp(derive_key_text(rhs.1)))
        .then_with(|| derive_key_text(lhs.2).cmp(derive_key_text(rhs.2)))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
