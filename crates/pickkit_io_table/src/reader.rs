//! Order table readers: DataFrame / IPC / CSV into engine records.

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use pickkit_core::{PickListError, SpecRawRecord};
use polars::prelude::{
    AnyValue, Column, CsvParseOptions, CsvReadOptions, DataFrame, IpcReader, NamedFrom,
    SerReader, Series,
};
use tracing::info;

use crate::spec::{EnumFieldSeparator, SpecOrderColumns, SpecOrderReadOptions};

////////////////////////////////////////////////////////////////////////////////
// #region Readers

/// Read an order export file into raw records.
///
/// `.xlsx`/`.xlsm`/`.xlsb`/`.xls`/`.ods` are read from their first sheet,
/// `.arrow`/`.ipc`/`.feather` as Arrow IPC, anything else as delimited text.
/// Every column of a workbook or text file is kept as text.
pub fn read_raw_records_from_path(
    path: &Path,
    options: &SpecOrderReadOptions,
) -> Result<Vec<SpecRawRecord>, PickListError> {
    let c_ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let df = match c_ext.as_deref() {
        Some("xlsx") | Some("xlsm") | Some("xlsb") | Some("xls") | Some("ods") => {
            read_dataframe_from_excel_path(path)?
        }
        Some("arrow") | Some("ipc") | Some("feather") => {
            let v_bytes = std::fs::read(path).map_err(|err| {
                PickListError::ReadFailed(format!("{}: {err}", path.display()))
            })?;
            read_dataframe_from_ipc_bytes(&v_bytes)?
        }
        _ => read_dataframe_from_csv_path(path, options.rule_separator)?,
    };
    info!(
        path = %path.display(),
        rows = df.height(),
        cols = df.width(),
        "order table loaded"
    );
    read_raw_records_from_dataframe(&df, &options.columns)
}

/// Read the first sheet of a workbook; the first row holds column names.
pub fn read_dataframe_from_excel_path(path: &Path) -> Result<DataFrame, PickListError> {
    let derive_read_failed =
        |msg: String| PickListError::ReadFailed(format!("{}: {msg}", path.display()));

    let mut workbook = open_workbook_auto(path).map_err(|err| derive_read_failed(err.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| derive_read_failed("workbook has no sheets".to_string()))?
        .map_err(|err| derive_read_failed(err.to_string()))?;

    let mut l_rows = range.rows();
    let Some(l_header) = l_rows.next() else {
        return Ok(DataFrame::empty());
    };
    let l_names: Vec<String> = l_header
        .iter()
        .enumerate()
        .map(|(n_idx_col, cell)| match convert_excel_cell(cell) {
            Some(c_name) if !c_name.is_empty() => c_name,
            _ => format!("column_{}", n_idx_col + 1),
        })
        .collect();

    let mut l_values: Vec<Vec<Option<String>>> =
        vec![Vec::with_capacity(range.height().saturating_sub(1)); l_names.len()];
    for l_row in l_rows {
        for (n_idx_col, l_col) in l_values.iter_mut().enumerate() {
            l_col.push(l_row.get(n_idx_col).and_then(convert_excel_cell));
        }
    }

    let l_columns: Vec<Column> = l_names
        .iter()
        .zip(l_values)
        .map(|(c_name, l_col)| Series::new(c_name.as_str().into(), l_col).into())
        .collect();
    DataFrame::new(l_columns).map_err(|err| derive_read_failed(err.to_string()))
}

/// Read delimited text from disk. All columns are kept as text.
pub fn read_dataframe_from_csv_path(
    path: &Path,
    rule_separator: EnumFieldSeparator,
) -> Result<DataFrame, PickListError> {
    derive_csv_read_options(rule_separator.resolve(Some(path)))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|err| PickListError::ReadFailed(format!("{}: {err}", path.display())))
}

/// Read delimited text from memory. All columns are kept as text.
pub fn read_dataframe_from_csv_bytes(
    v_bytes: &[u8],
    separator: u8,
) -> Result<DataFrame, PickListError> {
    derive_csv_read_options(separator)
        .into_reader_with_file_handle(Cursor::new(v_bytes.to_vec()))
        .finish()
        .map_err(|err| PickListError::ReadFailed(err.to_string()))
}

/// Read an Arrow IPC buffer produced by any DataFrame library.
pub fn read_dataframe_from_ipc_bytes(v_bytes: &[u8]) -> Result<DataFrame, PickListError> {
    IpcReader::new(Cursor::new(v_bytes))
        .finish()
        .map_err(|err| PickListError::ReadFailed(format!("Failed to decode IPC DataFrame: {err}")))
}

/// Project `df` onto raw records, one per row, in row order.
///
/// Missing required columns fail before any row is read. A missing recipient
/// column yields blank recipients. Extra columns are ignored.
pub fn read_raw_records_from_dataframe(
    df: &DataFrame,
    columns: &SpecOrderColumns,
) -> Result<Vec<SpecRawRecord>, PickListError> {
    for c_col in columns.required() {
        if df.column(c_col).is_err() {
            return Err(PickListError::MissingColumn {
                column: c_col.to_string(),
            });
        }
    }

    let col_order_id = derive_column(df, &columns.order_id)?;
    let col_sku = derive_column(df, &columns.sku)?;
    let col_qty = derive_column(df, &columns.quantity_purchased)?;
    let col_recipient = df.column(&columns.recipient_name).ok();

    let mut l_records = Vec::with_capacity(df.height());
    for n_idx_row in 0..df.height() {
        let n_row = n_idx_row + 1;
        let recipient_name = match col_recipient {
            Some(col) => derive_text_from_any_value(derive_cell(col, n_idx_row)?),
            None => String::new(),
        };
        let v_qty = derive_cell(col_qty, n_idx_row)?;
        let quantity_purchased =
            convert_quantity(&v_qty).ok_or_else(|| PickListError::InvalidQuantity {
                row_idx: n_row,
                value: derive_text_from_any_value(v_qty.clone()),
            })?;

        l_records.push(SpecRawRecord {
            order_id: derive_text_from_any_value(derive_cell(col_order_id, n_idx_row)?),
            recipient_name,
            sku: derive_text_from_any_value(derive_cell(col_sku, n_idx_row)?),
            quantity_purchased,
        });
    }

    Ok(l_records)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellConversion

fn derive_csv_read_options(separator: u8) -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_parse_options(CsvParseOptions::default().with_separator(separator))
}

fn derive_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, PickListError> {
    df.column(name).map_err(|_| PickListError::MissingColumn {
        column: name.to_string(),
    })
}

fn derive_cell<'a>(col: &'a Column, n_idx_row: usize) -> Result<AnyValue<'a>, PickListError> {
    col.get(n_idx_row).map_err(|err| {
        PickListError::ReadFailed(format!(
            "Failed to read column {:?} at data row {}: {err}",
            col.name().as_str(),
            n_idx_row + 1
        ))
    })
}

/// Workbook cell as text; empty cells are null. Whole floats print without
/// a fraction (`5.0` -> `"5"`).
fn convert_excel_cell(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(val) => Some(val.clone()),
        other => Some(other.to_string()),
    }
}

/// Text of a cell; null reads as blank.
fn derive_text_from_any_value(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(val) => val.to_string(),
        AnyValue::StringOwned(val) => val.to_string(),
        _ => value.to_string(),
    }
}

/// Non-negative integral quantity from an integer, an integral float or text
/// spelling either. Values above `u32::MAX` are rejected.
fn convert_quantity(value: &AnyValue<'_>) -> Option<u32> {
    match value {
        AnyValue::UInt8(val) => Some(u32::from(*val)),
        AnyValue::UInt16(val) => Some(u32::from(*val)),
        AnyValue::UInt32(val) => Some(*val),
        AnyValue::UInt64(val) => u32::try_from(*val).ok(),
        AnyValue::Int8(val) => u32::try_from(*val).ok(),
        AnyValue::Int16(val) => u32::try_from(*val).ok(),
        AnyValue::Int32(val) => u32::try_from(*val).ok(),
        AnyValue::Int64(val) => u32::try_from(*val).ok(),
        AnyValue::Float32(val) => convert_quantity_f64(f64::from(*val)),
        AnyValue::Float64(val) => convert_quantity_f64(*val),
        AnyValue::String(val) => convert_quantity_text(val),
        AnyValue::StringOwned(val) => convert_quantity_text(val.as_str()),
        _ => None,
    }
}

fn convert_quantity_text(text: &str) -> Option<u32> {
    let c_text = text.trim();
    c_text
        .parse::<u32>()
        .ok()
        .or_else(|| c_text.parse::<f64>().ok().and_then(convert_quantity_f64))
}

fn convert_quantity_f64(val: f64) -> Option<u32> {
    if val.is_finite() && val >= 0.0 && val.fract() == 0.0 && val <= f64::from(u32::MAX) {
        Some(val as u32)
    } else {
        None
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
