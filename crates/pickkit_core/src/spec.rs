//! Record, view and error models shared by the engine and its adapters.

use std::fmt;

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////
// #region RecordSpecification

/// One input row of the order export.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecRawRecord {
    /// Marketplace order identifier.
    pub order_id: String,
    /// Ship-to recipient.
    pub recipient_name: String,
    /// Composite SKU (`STYLE-COLOR-SIZE-EXTRA`).
    pub sku: String,
    /// Ordered quantity. Totals are summed as `u64`, so they cannot overflow.
    pub quantity_purchased: u32,
}

/// SKU split into its semantic parts.
///
/// `None` marks a part the SKU does not have. An empty segment between two
/// delimiters (`"A--M"`) is kept as `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecDecomposedSku {
    pub style: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub extra: Option<String>,
}

/// Raw record plus canonicalized SKU parts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecNormalizedRecord {
    pub order_id: String,
    pub recipient_name: String,
    /// Original SKU text, untouched by canonicalization.
    pub sku: String,
    pub quantity_purchased: u32,
    /// Canonical style.
    pub style: Option<String>,
    /// Canonical color.
    pub color: Option<String>,
    /// Size after literal substitution.
    pub size: Option<String>,
    pub extra: Option<String>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ViewSpecification

/// Order View row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecOrderRow {
    pub order_id: String,
    pub recipient_name: String,
    pub sku: String,
    pub quantity_purchased: u32,
}

/// One line item of the Pick View.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecPickItem {
    pub style: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub quantity_purchased: u32,
    /// Free-text column filled in by hand on the printed sheet. Always blank.
    pub pack_note: String,
}

/// Pick View row: an item or a blank group separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnumPickRow {
    /// Line item.
    Item(SpecPickItem),
    /// Blank row between two style groups.
    Separator,
}

impl EnumPickRow {
    /// Return the item when this row is not a separator.
    pub fn item(&self) -> Option<&SpecPickItem> {
        match self {
            Self::Item(item) => Some(item),
            Self::Separator => None,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }
}

/// Canonical View row (inventory-matching extract).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecCanonicalRow {
    pub style: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub quantity_purchased: u32,
}

/// Synthetic total row appended to the Order and Pick views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SpecTotalRow {
    pub quantity_sum: u64,
}

/// Order View: input order, original SKU, grand total.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SpecOrderView {
    pub rows: Vec<SpecOrderRow>,
    pub total: SpecTotalRow,
}

/// Pick View: sorted, grouped by style with separators, grand total.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SpecPickView {
    pub rows: Vec<EnumPickRow>,
    pub total: SpecTotalRow,
}

impl SpecPickView {
    /// Iterate over non-separator rows.
    pub fn items(&self) -> impl Iterator<Item = &SpecPickItem> {
        self.rows.iter().filter_map(EnumPickRow::item)
    }
}

/// Canonical View: sorted items, no separators, no total.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SpecCanonicalView {
    pub rows: Vec<SpecCanonicalRow>,
}

/// The three views produced by one conversion call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SpecPickListViews {
    pub order_view: SpecOrderView,
    pub pick_view: SpecPickView,
    pub canonical_view: SpecCanonicalView,
}

/// Switches of the shared grouped-view derivation.
///
/// The Pick View and the Canonical View are the same sorted projection; they
/// differ only in these flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecGroupedViewPolicy {
    /// Insert a blank row between consecutive rows whose style differs.
    pub if_insert_separators: bool,
    /// Compute the total row.
    pub if_append_total: bool,
}

impl SpecGroupedViewPolicy {
    /// Policy of the Pick View.
    pub const PICK: Self = Self {
        if_insert_separators: true,
        if_append_total: true,
    };
    /// Policy of the Canonical View.
    pub const CANONICAL: Self = Self {
        if_insert_separators: false,
        if_append_total: false,
    };
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region TableSpecification

/// Behavior when an alias table defines the same key twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumDuplicateKeyPolicy {
    /// Keep the last definition and log the collision (default).
    #[default]
    LastWins,
    /// Fail table construction.
    Reject,
}

/// Authored table data, as read from a TOML override file.
///
/// Entries are ordered pairs so duplicate keys survive parsing. Missing
/// fields fall back to the built-in data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecCanonicalTableSource {
    /// `style -> canonical style`.
    pub style_aliases: Option<Vec<(String, String)>>,
    /// `raw color -> canonical color`.
    pub color_aliases: Option<Vec<(String, String)>>,
    /// `style -> override style`, valid only for `exception_sizes`.
    pub size_exceptions: Option<Vec<(String, String)>>,
    /// Sizes that trigger `size_exceptions`.
    pub exception_sizes: Option<Vec<String>>,
    /// `raw size -> size` literal rewrites.
    pub size_substitutions: Option<Vec<(String, String)>>,
}

/// One key defined more than once in an authored table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecDuplicateKey {
    /// Table name (`style_aliases`, `color_aliases`, ...).
    pub table: String,
    pub key: String,
    /// Value that was overwritten.
    pub value_dropped: String,
    /// Value that is kept.
    pub value_kept: String,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Fatal conversion errors. Anything not listed here is handled per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickListError {
    /// A required column is absent from the whole input table.
    MissingColumn {
        /// Expected column name.
        column: String,
    },
    /// A quantity cell is null, negative or not integral.
    InvalidQuantity {
        /// 1-based data row index.
        row_idx: usize,
        /// Cell text as read.
        value: String,
    },
    /// Alias table override could not be loaded.
    InvalidTable(String),
    /// The tabular reader failed.
    ReadFailed(String),
}

impl fmt::Display for PickListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn { column } => {
                write!(f, "Required column is missing: {column:?}")
            }
            Self::InvalidQuantity { row_idx, value } => write!(
                f,
                "Invalid quantity at data row {row_idx}: {value:?} (expected a non-negative integer)"
            ),
            Self::InvalidTable(msg) => write!(f, "Invalid alias table: {msg}"),
            Self::ReadFailed(msg) => write!(f, "Failed to read order table: {msg}"),
        }
    }
}

impl std::error::Error for PickListError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_view_items_skip_separators() {
        let item = SpecPickItem {
            style: Some("A".to_string()),
            color: None,
            size: None,
            quantity_purchased: 1,
            pack_note: String::new(),
        };
        let view = SpecPickView {
            rows: vec![
                EnumPickRow::Item(item.clone()),
                EnumPickRow::Separator,
                EnumPickRow::Item(item),
            ],
            total: SpecTotalRow { quantity_sum: 2 },
        };

        assert_eq!(view.items().count(), 2);
        assert!(view.rows[1].is_separator());
        assert!(view.rows[1].item().is_none());
    }

    #[test]
    fn test_error_display_names_the_column() {
        let err = PickListError::MissingColumn {
            column: "sku".to_string(),
        };
        assert_eq!(err.to_string(), "Required column is missing: \"sku\"");
    }
}
