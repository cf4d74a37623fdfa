//! Workbook writer that lays the three views out as formatted worksheets.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use pickkit_core::SpecPickListViews;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};
use tracing::info;

use crate::conf::{N_LEN_EXCEL_SHEET_NAME_MAX, derive_default_xlsx_formats};
use crate::spec::{
    EnumCellValue, EnumFmtKey, EnumSheetRowKind, SpecCellFormat, SpecSheetLayout,
    SpecSheetReport, SpecXlsxReport, SpecXlsxWriteOptions,
};
use crate::util::{
    derive_report_file_name, derive_sheet_names, plan_autofit_widths, plan_canonical_sheet,
    plan_order_sheet, plan_pick_sheet, sanitize_sheet_name, validate_sheet_height,
};

/// Stateful workbook writer.
pub struct PickListXlsxWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    fmt_header: SpecCellFormat,
    fmt_body: SpecCellFormat,
    fmt_total: SpecCellFormat,
    write_options: SpecXlsxWriteOptions,
    set_sheet_names_existing: BTreeSet<String>,
    report: SpecXlsxReport,
    if_closed: bool,
}

impl PickListXlsxWriter {
    /// Create writer bound to output path and format presets.
    ///
    /// The workbook is buffered in memory until [`Self::close`] is called.
    pub fn new(
        path_file_out: PathBuf,
        fmt_header: SpecCellFormat,
        fmt_body: SpecCellFormat,
        fmt_total: SpecCellFormat,
        write_options: SpecXlsxWriteOptions,
    ) -> Self {
        Self {
            path_file_out,
            workbook: Workbook::new(),
            fmt_header,
            fmt_body,
            fmt_total,
            write_options,
            set_sheet_names_existing: BTreeSet::new(),
            report: SpecXlsxReport::default(),
            if_closed: false,
        }
    }

    /// Create writer with the default header/body/total presets.
    pub fn with_default_formats(path_file_out: PathBuf, write_options: SpecXlsxWriteOptions) -> Self {
        let mut dict_fmt: BTreeMap<EnumFmtKey, SpecCellFormat> = derive_default_xlsx_formats();
        let mut take = |key: EnumFmtKey| dict_fmt.remove(&key).unwrap_or_default();
        let fmt_header = take(EnumFmtKey::Header);
        let fmt_body = take(EnumFmtKey::Body);
        let fmt_total = take(EnumFmtKey::Total);
        Self::new(path_file_out, fmt_header, fmt_body, fmt_total, write_options)
    }

    /// Return snapshot of the write report.
    pub fn report(&self) -> SpecXlsxReport {
        self.report.clone()
    }

    /// Flush workbook to disk. Idempotent.
    pub fn close(&mut self) -> Result<(), String> {
        if self.if_closed {
            return Ok(());
        }
        self.workbook
            .save(&self.path_file_out)
            .map_err(derive_xlsx_error_text)?;
        self.if_closed = true;
        info!(path = %self.path_file_out.display(), sheets = self.report.sheets.len(), "workbook written");
        Ok(())
    }

    /// Serialize the workbook to bytes without touching disk.
    pub fn save_to_buffer(&mut self) -> Result<Vec<u8>, String> {
        self.workbook
            .save_to_buffer()
            .map_err(derive_xlsx_error_text)
    }

    /// Write the Order, Pick and Canonical views as three sheets.
    pub fn write_views(&mut self, views: &SpecPickListViews) -> Result<(), String> {
        let [c_sheet_order, c_sheet_pick, c_sheet_canonical] =
            derive_sheet_names(self.write_options.report_date);
        self.write_sheet(&plan_order_sheet(&views.order_view, &c_sheet_order))?;
        self.write_sheet(&plan_pick_sheet(&views.pick_view, &c_sheet_pick))?;
        self.write_sheet(&plan_canonical_sheet(
            &views.canonical_view,
            &c_sheet_canonical,
        ))?;
        Ok(())
    }

    /// Write one planned sheet.
    pub fn write_sheet(&mut self, layout: &SpecSheetLayout) -> Result<(), String> {
        if self.if_closed {
            return Err("Cannot write after close().".to_string());
        }
        validate_sheet_height(layout)?;

        let sheet_name_unique =
            self.derive_unique_sheet_name(&sanitize_sheet_name(&layout.sheet_name, "_"));
        if sheet_name_unique != layout.sheet_name {
            self.report.warn(format!(
                "Sheet {:?} written as {sheet_name_unique:?}.",
                layout.sheet_name
            ));
        }

        let fmt_header = derive_rust_xlsx_format(&self.fmt_header);
        let fmt_body = derive_rust_xlsx_format(&self.fmt_body);
        let fmt_total = derive_rust_xlsx_format(&self.fmt_total);
        let l_widths = if self.write_options.if_autofit {
            plan_autofit_widths(layout, &self.write_options)
        } else {
            layout.widths.clone()
        };

        let worksheet = self.workbook.add_worksheet();
        worksheet
            .set_name(&sheet_name_unique)
            .map_err(derive_xlsx_error_text)?;

        write_header(worksheet, &layout.header, &fmt_header)?;
        for (n_idx_row, row) in layout.rows.iter().enumerate() {
            let format = match row.kind.fmt_key() {
                EnumFmtKey::Total => &fmt_total,
                EnumFmtKey::Header => &fmt_header,
                EnumFmtKey::Body => &fmt_body,
            };
            for (n_idx_col, value) in row.cells.iter().enumerate() {
                if row.kind == EnumSheetRowKind::Total && *value == EnumCellValue::None {
                    continue;
                }
                write_cell_with_format(worksheet, n_idx_row + 1, n_idx_col, value, format)?;
            }
        }

        for (n_idx_col, n_width) in l_widths.iter().enumerate() {
            worksheet
                .set_column_width(cast_col_num(n_idx_col)?, *n_width)
                .map_err(derive_xlsx_error_text)?;
        }
        if self.write_options.if_freeze_header {
            worksheet
                .set_freeze_panes(1, 0)
                .map_err(derive_xlsx_error_text)?;
        }

        self.report.sheets.push(SpecSheetReport {
            sheet_name: sheet_name_unique,
            cnt_rows_data: layout.count_rows(EnumSheetRowKind::Data),
            cnt_rows_separator: layout.count_rows(EnumSheetRowKind::Separator),
            if_has_total: layout.count_rows(EnumSheetRowKind::Total) > 0,
        });
        Ok(())
    }

    fn derive_unique_sheet_name(&mut self, name: &str) -> String {
        if !self.set_sheet_names_existing.contains(name) {
            self.set_sheet_names_existing.insert(name.to_string());
            return name.to_string();
        }

        let base_name: String = name
            .chars()
            .take(usize::max(1, N_LEN_EXCEL_SHEET_NAME_MAX - 3))
            .collect();

        let mut n_idx = 2usize;
        loop {
            let candidate: String = format!("{base_name}__{n_idx}")
                .chars()
                .take(N_LEN_EXCEL_SHEET_NAME_MAX)
                .collect();
            if !self.set_sheet_names_existing.contains(&candidate) {
                self.set_sheet_names_existing.insert(candidate.clone());
                return candidate;
            }
            n_idx += 1;
        }
    }
}

/// Write `views` to `"{YYYYMMDD} - Amazon Order Report.xlsx"` under `dir_out`.
pub fn write_pick_list_workbook(
    dir_out: &Path,
    views: &SpecPickListViews,
    write_options: SpecXlsxWriteOptions,
) -> Result<(PathBuf, SpecXlsxReport), String> {
    let path_file_out = dir_out.join(derive_report_file_name(write_options.report_date, "xlsx"));
    let mut writer = PickListXlsxWriter::with_default_formats(path_file_out, write_options);
    writer.write_views(views)?;
    writer.close()?;
    Ok((writer.path_file_out.clone(), writer.report()))
}

fn write_header(
    worksheet: &mut Worksheet,
    header: &[String],
    fmt_header: &Format,
) -> Result<(), String> {
    for (n_idx_col, c_label) in header.iter().enumerate() {
        worksheet
            .write_string_with_format(0, cast_col_num(n_idx_col)?, c_label, fmt_header)
            .map_err(derive_xlsx_error_text)?;
    }
    Ok(())
}

fn write_cell_with_format(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_idx: usize,
    value: &EnumCellValue,
    format: &Format,
) -> Result<(), String> {
    match value {
        EnumCellValue::None => {
            worksheet
                .write_blank(cast_row_num(row_idx)?, cast_col_num(col_idx)?, format)
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::String(val) => {
            worksheet
                .write_string_with_format(
                    cast_row_num(row_idx)?,
                    cast_col_num(col_idx)?,
                    val,
                    format,
                )
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::Number(val) => {
            worksheet
                .write_number_with_format(
                    cast_row_num(row_idx)?,
                    cast_col_num(col_idx)?,
                    *val,
                    format,
                )
                .map_err(derive_xlsx_error_text)?;
        }
    }
    Ok(())
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }

    if let Some(val) = &spec.align
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }
    if let Some(val) = &spec.valign
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }

    if let Some(val) = &spec.font_color {
        format = format.set_font_color(val.as_str());
    }
    if let Some(val) = spec.border {
        format = format.set_border(derive_format_border(val));
    }

    format
}

fn derive_format_border(border: i64) -> FormatBorder {
    match border {
        1 => FormatBorder::Thin,
        _ => FormatBorder::None,
    }
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    match align.trim().to_ascii_lowercase().as_str() {
        "center" => Some(FormatAlign::Center),
        "vcenter" => Some(FormatAlign::VerticalCenter),
        _ => None,
    }
}

fn cast_row_num(value: usize) -> Result<u32, String> {
    u32::try_from(value).map_err(|_| format!("row index overflow: {value}"))
}

fn cast_col_num(value: usize) -> Result<u16, String> {
    u16::try_from(value).map_err(|_| format!("column index overflow: {value}"))
}

fn derive_xlsx_error_text(err: XlsxError) -> String {
    format!("xlsx write error: {err}")
}
