//! Input column names and read options.

use std::path::Path;

/// Source column names for the four fields the engine consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecOrderColumns {
    /// Order id column (required).
    pub order_id: String,
    /// Recipient column (optional; blank when absent).
    pub recipient_name: String,
    /// SKU column (required).
    pub sku: String,
    /// Quantity column (required).
    pub quantity_purchased: String,
}

impl Default for SpecOrderColumns {
    fn default() -> Self {
        Self {
            order_id: "order-id".to_string(),
            recipient_name: "recipient-name".to_string(),
            sku: "sku".to_string(),
            quantity_purchased: "quantity-purchased".to_string(),
        }
    }
}

impl SpecOrderColumns {
    /// Columns whose absence aborts the conversion, in check order.
    pub fn required(&self) -> [&str; 3] {
        [&self.order_id, &self.sku, &self.quantity_purchased]
    }
}

/// Field separator of delimited text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumFieldSeparator {
    /// `.txt`/`.tsv` -> tab, anything else -> comma.
    #[default]
    Infer,
    Tab,
    Comma,
}

impl EnumFieldSeparator {
    /// Resolve to a byte, inferring from `path` when needed.
    pub fn resolve(self, path: Option<&Path>) -> u8 {
        match self {
            Self::Tab => b'\t',
            Self::Comma => b',',
            Self::Infer => {
                let c_ext = path
                    .and_then(Path::extension)
                    .and_then(|ext| ext.to_str())
                    .map(str::to_ascii_lowercase);
                match c_ext.as_deref() {
                    Some("txt") | Some("tsv") => b'\t',
                    _ => b',',
                }
            }
        }
    }
}

/// Options for [`crate::reader::read_raw_records_from_path`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecOrderReadOptions {
    /// Source column names.
    pub columns: SpecOrderColumns,
    /// Separator for delimited text input.
    pub rule_separator: EnumFieldSeparator,
}
