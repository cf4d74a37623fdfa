//! Conversion report model and mutable report builder.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

/// Counters and diagnostics for one conversion call.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPickList {
    /// Number of input records.
    pub cnt_records: u64,
    /// Records whose SKU was empty.
    pub cnt_malformed_sku: u64,
    /// Records rewritten by a plus-size style exception.
    pub cnt_style_exception: u64,
    /// Records whose style passed through the alias table unchanged.
    pub cnt_style_unrecognized: u64,
    /// Records whose color passed through the alias table unchanged.
    pub cnt_color_unrecognized: u64,
    /// Distinct styles missing from the alias table.
    pub styles_unrecognized: BTreeSet<String>,
    /// Distinct colors missing from the alias table.
    pub colors_unrecognized: BTreeSet<String>,
    /// Non-fatal per-record warnings.
    pub warnings: Vec<String>,
}

impl ReportPickList {
    /// Number of collected warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Whether any style or color fell through its alias table.
    pub fn has_unrecognized_aliases(&self) -> bool {
        !self.styles_unrecognized.is_empty() || !self.colors_unrecognized.is_empty()
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_records".to_string(), self.cnt_records);
        dict_counts.insert("cnt_malformed_sku".to_string(), self.cnt_malformed_sku);
        dict_counts.insert("cnt_style_exception".to_string(), self.cnt_style_exception);
        dict_counts.insert(
            "cnt_style_unrecognized".to_string(),
            self.cnt_style_unrecognized,
        );
        dict_counts.insert(
            "cnt_color_unrecognized".to_string(),
            self.cnt_color_unrecognized,
        );
        dict_counts.insert("cnt_warnings".to_string(), self.warning_count() as u64);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        let dict_counts = self.to_dict();
        format!(
            "{prefix} records={} malformed_sku={} style_exception={} style_unrecognized={} color_unrecognized={} warnings={}",
            dict_counts["cnt_records"],
            dict_counts["cnt_malformed_sku"],
            dict_counts["cnt_style_exception"],
            dict_counts["cnt_style_unrecognized"],
            dict_counts["cnt_color_unrecognized"],
            dict_counts["cnt_warnings"]
        )
    }
}

impl fmt::Display for ReportPickList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[PICK]"))
    }
}

/// Mutable accumulator filled while records are normalized.
#[derive(Debug, Default, Clone)]
pub struct ReportPickListBuilder {
    /// See [`ReportPickList::cnt_records`].
    pub cnt_records: u64,
    /// See [`ReportPickList::cnt_malformed_sku`].
    pub cnt_malformed_sku: u64,
    /// See [`ReportPickList::cnt_style_exception`].
    pub cnt_style_exception: u64,
    /// See [`ReportPickList::cnt_style_unrecognized`].
    pub cnt_style_unrecognized: u64,
    /// See [`ReportPickList::cnt_color_unrecognized`].
    pub cnt_color_unrecognized: u64,
    /// See [`ReportPickList::styles_unrecognized`].
    pub styles_unrecognized: BTreeSet<String>,
    /// See [`ReportPickList::colors_unrecognized`].
    pub colors_unrecognized: BTreeSet<String>,
    /// See [`ReportPickList::warnings`].
    pub warnings: Vec<String>,
}

impl ReportPickListBuilder {
    pub fn add_record(&mut self) {
        self.cnt_records += 1;
    }

    /// Record an empty SKU at 1-based data row `row_idx`.
    pub fn add_malformed_sku(&mut self, row_idx: usize, order_id: &str) {
        self.cnt_malformed_sku += 1;
        self.warnings.push(format!(
            "Empty SKU at data row {row_idx} (order {order_id:?}); style/color/size left blank."
        ));
    }

    pub fn add_style_exception(&mut self) {
        self.cnt_style_exception += 1;
    }

    /// Count a pass-through style. Returns `true` the first time `style` is seen.
    pub fn add_style_unrecognized(&mut self, style: &str) -> bool {
        self.cnt_style_unrecognized += 1;
        self.styles_unrecognized.insert(style.to_string())
    }

    /// Count a pass-through color. Returns `true` the first time `color` is seen.
    pub fn add_color_unrecognized(&mut self, color: &str) -> bool {
        self.cnt_color_unrecognized += 1;
        self.colors_unrecognized.insert(color.to_string())
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportPickList {
        ReportPickList {
            cnt_records: self.cnt_records,
            cnt_malformed_sku: self.cnt_malformed_sku,
            cnt_style_exception: self.cnt_style_exception,
            cnt_style_unrecognized: self.cnt_style_unrecognized,
            cnt_color_unrecognized: self.cnt_color_unrecognized,
            styles_unrecognized: self.styles_unrecognized,
            colors_unrecognized: self.colors_unrecognized,
            warnings: self.warnings,
        }
    }
}
