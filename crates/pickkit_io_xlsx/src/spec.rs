//! Shared XLSX specification models.

use chrono::{Local, NaiveDate};

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Cell format specification; `None` fields leave the Excel default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,

    /// Horizontal alignment.
    pub align: Option<String>,
    /// Vertical alignment.
    pub valign: Option<String>,
    /// Border style for all sides.
    pub border: Option<i64>,

    /// Font color.
    pub font_color: Option<String>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            align: other.align.clone().or_else(|| self.align.clone()),
            valign: other.valign.clone().or_else(|| self.valign.clone()),
            border: other.border.or(self.border),
            font_color: other.font_color.clone().or_else(|| self.font_color.clone()),
        }
    }
}

/// Format preset keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnumFmtKey {
    /// Header row.
    Header,
    /// Data and separator rows.
    Body,
    /// Grand total row.
    Total,
}

/// Normalized cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Blank cell.
    None,
    /// Text value.
    String(String),
    /// Numeric value.
    Number(f64),
}

impl EnumCellValue {
    /// Text cell, blank when `value` is absent or empty.
    pub fn from_text(value: Option<&str>) -> Self {
        match value {
            Some(val) if !val.is_empty() => Self::String(val.to_string()),
            _ => Self::None,
        }
    }

    /// Quantity cell.
    pub fn from_quantity(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetLayoutSpecification

/// Role of one planned body row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumSheetRowKind {
    /// View data row.
    Data,
    /// Blank row between style groups.
    Separator,
    /// Grand total row.
    Total,
}

impl EnumSheetRowKind {
    /// Format preset applied to cells of this row.
    pub fn fmt_key(self) -> EnumFmtKey {
        match self {
            Self::Data | Self::Separator => EnumFmtKey::Body,
            Self::Total => EnumFmtKey::Total,
        }
    }
}

/// One planned body row.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecSheetRow {
    pub kind: EnumSheetRowKind,
    /// One value per header column.
    pub cells: Vec<EnumCellValue>,
}

/// A view projected onto a worksheet grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecSheetLayout {
    /// Requested sheet name (sanitized and de-duplicated at write time).
    pub sheet_name: String,
    /// Header labels.
    pub header: Vec<String>,
    /// Body rows in write order.
    pub rows: Vec<SpecSheetRow>,
    /// Fixed column widths, one per header column.
    pub widths: Vec<f64>,
}

impl SpecSheetLayout {
    /// Sheet height including the header row.
    pub fn height(&self) -> usize {
        self.rows.len() + 1
    }

    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Count rows of one kind.
    pub fn count_rows(&self, kind: EnumSheetRowKind) -> usize {
        self.rows.iter().filter(|row| row.kind == kind).count()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region OptionSpecification

/// Workbook-wide write options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecXlsxWriteOptions {
    /// Date stamped into sheet and file names.
    pub report_date: NaiveDate,
    /// Replace fixed widths with widths inferred from cell text.
    pub if_autofit: bool,
    /// Freeze the header row.
    pub if_freeze_header: bool,
    /// Autofit width cap.
    pub width_cell_max: usize,
    /// Autofit padding added to the widest cell.
    pub width_cell_padding: usize,
}

impl Default for SpecXlsxWriteOptions {
    fn default() -> Self {
        Self {
            report_date: Local::now().date_naive(),
            if_autofit: false,
            if_freeze_header: true,
            width_cell_max: 60,
            width_cell_padding: 2,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// One written worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSheetReport {
    /// Actual unique sheet name in workbook.
    pub sheet_name: String,
    pub cnt_rows_data: usize,
    pub cnt_rows_separator: usize,
    pub if_has_total: bool,
}

/// Workbook write report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecXlsxReport {
    /// Sheets written so far, in write order.
    pub sheets: Vec<SpecSheetReport>,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecXlsxReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_right_side_values() {
        let base = SpecCellFormat {
            font_size: Some(14),
            bold: Some(false),
            ..Default::default()
        };
        let fmt = base.with_(SpecCellFormat {
            bold: Some(true),
            ..Default::default()
        });
        assert_eq!(fmt.font_size, Some(14));
        assert_eq!(fmt.bold, Some(true));
    }

    #[test]
    fn test_text_cells_blank_when_absent_or_empty() {
        assert_eq!(EnumCellValue::from_text(None), EnumCellValue::None);
        assert_eq!(EnumCellValue::from_text(Some("")), EnumCellValue::None);
        assert_eq!(
            EnumCellValue::from_text(Some("RED")),
            EnumCellValue::String("RED".to_string())
        );
    }
}
