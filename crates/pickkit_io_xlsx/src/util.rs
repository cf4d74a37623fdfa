//! Naming helpers and view-to-sheet planning.

use chrono::NaiveDate;
use pickkit_core::util::derive_key_text;
use pickkit_core::{
    C_TOTAL_LABEL, EnumPickRow, SpecCanonicalView, SpecOrderView, SpecPickView, SpecTotalRow,
};

use crate::conf::{
    C_REPORT_FILE_STEM_SUFFIX, C_SHEET_NAME_CANONICAL, N_COL_TOTAL_LABEL, N_COL_TOTAL_SUM,
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL, TUP_HEADER_CANONICAL,
    TUP_HEADER_ORDER, TUP_HEADER_PICK, TUP_WIDTH_CANONICAL, TUP_WIDTH_ORDER, TUP_WIDTH_PICK,
};
use crate::spec::{
    EnumCellValue, EnumSheetRowKind, SpecSheetLayout, SpecSheetRow, SpecXlsxWriteOptions,
};

////////////////////////////////////////////////////////////////////////////////
// #region Naming

/// Normalize sheet name to Excel-safe text.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

/// `YYYYMMDD`.
pub fn derive_date_stamp(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Sheet names for the Order, Pick and Canonical views.
pub fn derive_sheet_names(date: NaiveDate) -> [String; 3] {
    let c_stamp = derive_date_stamp(date);
    [
        c_stamp.clone(),
        format!("{c_stamp}-"),
        C_SHEET_NAME_CANONICAL.to_string(),
    ]
}

/// `"{YYYYMMDD} - Amazon Order Report.{ext}"`.
pub fn derive_report_file_name(date: NaiveDate, ext: &str) -> String {
    format!(
        "{}{C_REPORT_FILE_STEM_SUFFIX}.{ext}",
        derive_date_stamp(date)
    )
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetPlanning

/// Order View: one row per record, then the total row.
pub fn plan_order_sheet(view: &SpecOrderView, sheet_name: &str) -> SpecSheetLayout {
    let mut l_rows: Vec<SpecSheetRow> = view
        .rows
        .iter()
        .map(|row| SpecSheetRow {
            kind: EnumSheetRowKind::Data,
            cells: vec![
                EnumCellValue::from_text(Some(&row.order_id)),
                EnumCellValue::from_text(Some(&row.recipient_name)),
                EnumCellValue::from_text(Some(&row.sku)),
                EnumCellValue::from_quantity(u64::from(row.quantity_purchased)),
            ],
        })
        .collect();
    l_rows.push(derive_total_row(TUP_HEADER_ORDER.len(), &view.total));

    derive_layout(sheet_name, &TUP_HEADER_ORDER, &TUP_WIDTH_ORDER, l_rows)
}

/// Pick View: items with blank separator rows, then the total row.
pub fn plan_pick_sheet(view: &SpecPickView, sheet_name: &str) -> SpecSheetLayout {
    let n_width = TUP_HEADER_PICK.len();
    let mut l_rows: Vec<SpecSheetRow> = view
        .rows
        .iter()
        .map(|row| match row {
            EnumPickRow::Item(item) => SpecSheetRow {
                kind: EnumSheetRowKind::Data,
                cells: vec![
                    EnumCellValue::from_text(Some(derive_key_text(&item.style))),
                    EnumCellValue::from_text(Some(derive_key_text(&item.color))),
                    EnumCellValue::from_text(Some(derive_key_text(&item.size))),
                    EnumCellValue::from_quantity(u64::from(item.quantity_purchased)),
                    EnumCellValue::from_text(Some(&item.pack_note)),
                ],
            },
            EnumPickRow::Separator => SpecSheetRow {
                kind: EnumSheetRowKind::Separator,
                cells: vec![EnumCellValue::None; n_width],
            },
        })
        .collect();
    l_rows.push(derive_total_row(n_width, &view.total));

    derive_layout(sheet_name, &TUP_HEADER_PICK, &TUP_WIDTH_PICK, l_rows)
}

/// Canonical View: items only.
pub fn plan_canonical_sheet(view: &SpecCanonicalView, sheet_name: &str) -> SpecSheetLayout {
    let l_rows = view
        .rows
        .iter()
        .map(|row| SpecSheetRow {
            kind: EnumSheetRowKind::Data,
            cells: vec![
                EnumCellValue::from_text(Some(derive_key_text(&row.style))),
                EnumCellValue::from_text(Some(derive_key_text(&row.color))),
                EnumCellValue::from_text(Some(derive_key_text(&row.size))),
                EnumCellValue::from_quantity(u64::from(row.quantity_purchased)),
            ],
        })
        .collect();

    derive_layout(
        sheet_name,
        &TUP_HEADER_CANONICAL,
        &TUP_WIDTH_CANONICAL,
        l_rows,
    )
}

fn derive_layout(
    sheet_name: &str,
    header: &[&str],
    widths: &[f64],
    rows: Vec<SpecSheetRow>,
) -> SpecSheetLayout {
    SpecSheetLayout {
        sheet_name: sheet_name.to_string(),
        header: header.iter().map(ToString::to_string).collect(),
        rows,
        widths: widths.to_vec(),
    }
}

fn derive_total_row(width: usize, total: &SpecTotalRow) -> SpecSheetRow {
    let mut l_cells = vec![EnumCellValue::None; width];
    l_cells[N_COL_TOTAL_LABEL] = EnumCellValue::String(C_TOTAL_LABEL.to_string());
    l_cells[N_COL_TOTAL_SUM] = EnumCellValue::from_quantity(total.quantity_sum);
    SpecSheetRow {
        kind: EnumSheetRowKind::Total,
        cells: l_cells,
    }
}

/// Reject layouts taller than one Excel sheet.
pub fn validate_sheet_height(layout: &SpecSheetLayout) -> Result<(), String> {
    if layout.height() > N_NROWS_EXCEL_MAX {
        return Err(format!(
            "Sheet {:?} needs {} rows; Excel allows at most {N_NROWS_EXCEL_MAX}.",
            layout.sheet_name,
            layout.height()
        ));
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Autofit

/// Column widths inferred from header and cell text.
pub fn plan_autofit_widths(layout: &SpecSheetLayout, options: &SpecXlsxWriteOptions) -> Vec<f64> {
    (0..layout.width())
        .map(|n_idx_col| {
            let n_len_header = estimate_unicode_string_width(&layout.header[n_idx_col]);
            let n_len_cells = layout
                .rows
                .iter()
                .filter_map(|row| row.cells.get(n_idx_col))
                .map(estimate_width_len)
                .max()
                .unwrap_or(0);
            let n_width = usize::max(n_len_header, n_len_cells) + options.width_cell_padding;
            usize::min(n_width, options.width_cell_max) as f64
        })
        .collect()
}

/// Estimate displayed width units for one cell value.
pub fn estimate_width_len(value: &EnumCellValue) -> usize {
    match value {
        EnumCellValue::None => 0,
        EnumCellValue::String(s) => estimate_unicode_string_width(s),
        EnumCellValue::Number(n) => (*n as u64).to_string().len(),
    }
}

fn estimate_unicode_string_width(s: &str) -> usize {
    let n_ascii = s.chars().filter(|chr| chr.is_ascii()).count();
    let n_non_ascii = s.chars().count().saturating_sub(n_ascii);
    n_ascii + (n_non_ascii as f64 * 1.6).round() as usize
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
