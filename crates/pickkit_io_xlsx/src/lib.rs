//! `pickkit_io_xlsx` v1:
//! Workbook output adapter for the three pick-list views.
//!
//! Architecture:
//! - `conf`   : Excel limits, sheet headers, widths and default formats
//! - `spec`   : cell format, sheet layout, options and report models
//! - `util`   : naming helpers and view-to-sheet planning
//! - `writer` : rust_xlsxwriter-backed workbook writer
pub mod conf;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    C_SHEET_NAME_CANONICAL, N_LEN_EXCEL_SHEET_NAME_MAX, N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL,
    derive_default_xlsx_formats,
};
pub use spec::{
    EnumCellValue, EnumFmtKey, EnumSheetRowKind, SpecCellFormat, SpecSheetLayout,
    SpecSheetReport, SpecSheetRow, SpecXlsxReport, SpecXlsxWriteOptions,
};
pub use util::{
    derive_date_stamp, derive_report_file_name, derive_sheet_names, plan_autofit_widths,
    plan_canonical_sheet, plan_order_sheet, plan_pick_sheet, sanitize_sheet_name,
};
pub use writer::{PickListXlsxWriter, write_pick_list_workbook};
