//! `pickkit_io_table` v1:
//! Input adapter turning an order-export table into engine records.
//!
//! Architecture:
//! - `spec`   : column names and read options
//! - `reader` : DataFrame / workbook / IPC / CSV readers and cell conversion
pub mod reader;
pub mod spec;

pub use reader::{
    read_dataframe_from_csv_bytes, read_dataframe_from_csv_path, read_dataframe_from_excel_path,
    read_dataframe_from_ipc_bytes, read_raw_records_from_dataframe, read_raw_records_from_path,
};
pub use spec::{EnumFieldSeparator, SpecOrderColumns, SpecOrderReadOptions};
