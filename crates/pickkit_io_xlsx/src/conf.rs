//! Excel limits, sheet vocabulary and default format presets.

use std::collections::BTreeMap;

use crate::spec::{EnumFmtKey, SpecCellFormat};

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];

/// Sheet holding the Canonical View.
pub const C_SHEET_NAME_CANONICAL: &str = "Fx5Reformatted";
/// Suffix after the date stamp in the workbook file name.
pub const C_REPORT_FILE_STEM_SUFFIX: &str = " - Amazon Order Report";

pub const TUP_HEADER_ORDER: [&str; 4] = ["order-id", "recipient-name", "sku", "Qty"];
pub const TUP_HEADER_PICK: [&str; 5] = ["Style", "Color", "Size", "Qty", "Packs from #1 or No Inv."];
pub const TUP_HEADER_CANONICAL: [&str; 4] = ["Style", "Color", "Size", "Qty"];

pub const TUP_WIDTH_ORDER: [f64; 4] = [30.0, 30.0, 30.0, 10.0];
pub const TUP_WIDTH_PICK: [f64; 5] = [20.0, 20.0, 15.0, 10.0, 45.0];
pub const TUP_WIDTH_CANONICAL: [f64; 4] = [20.0, 15.0, 15.0, 10.0];

/// Zero-based column of the total label.
pub const N_COL_TOTAL_LABEL: usize = 2;
/// Zero-based column of the total quantity.
pub const N_COL_TOTAL_SUM: usize = 3;

/// Build default named format presets used by [`crate::writer::PickListXlsxWriter`].
pub fn derive_default_xlsx_formats() -> BTreeMap<EnumFmtKey, SpecCellFormat> {
    let cfg_base_fmt_spec = SpecCellFormat {
        font_size: Some(14),
        align: Some("center".to_string()),
        valign: Some("vcenter".to_string()),
        ..Default::default()
    };

    let mut dict_fmt = BTreeMap::new();
    dict_fmt.insert(
        EnumFmtKey::Header,
        cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            font_color: Some("#FF0000".to_string()),
            border: Some(1),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::Body,
        cfg_base_fmt_spec.with_(SpecCellFormat {
            border: Some(1),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::Total,
        cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            border: Some(1),
            ..Default::default()
        }),
    );

    dict_fmt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_presets_are_bordered_size_14() {
        let dict_fmt = derive_default_xlsx_formats();
        for key in [EnumFmtKey::Header, EnumFmtKey::Body, EnumFmtKey::Total] {
            let fmt = &dict_fmt[&key];
            assert_eq!(fmt.border, Some(1), "{key:?}");
            assert_eq!(fmt.font_size, Some(14), "{key:?}");
        }
        assert_eq!(dict_fmt[&EnumFmtKey::Total].bold, Some(true));
        assert_eq!(dict_fmt[&EnumFmtKey::Body].bold, None);
    }
}
