//! Record normalizer: decomposition followed by table canonicalization.

use tracing::{debug, warn};

use crate::report::ReportPickListBuilder;
use crate::spec::{SpecNormalizedRecord, SpecRawRecord};
use crate::table::{EnumStyleLookup, SpecCanonicalTables};
use crate::util::decompose_sku;

/// What happened to one record during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct SpecNormalizeTrace {
    if_malformed_sku: bool,
    if_style_exception: bool,
    if_style_unrecognized: bool,
    if_color_unrecognized: bool,
}

/// Normalize one record. Total over any input; absent parts stay absent.
pub fn normalize_record(
    raw: &SpecRawRecord,
    tables: &SpecCanonicalTables,
) -> SpecNormalizedRecord {
    derive_normalized_record(raw, tables).0
}

/// Normalize a batch in input order, recording per-record diagnostics.
pub fn normalize_records(
    raws: &[SpecRawRecord],
    tables: &SpecCanonicalTables,
    report: &mut ReportPickListBuilder,
) -> Vec<SpecNormalizedRecord> {
    let mut l_records = Vec::with_capacity(raws.len());

    for (n_idx, raw) in raws.iter().enumerate() {
        let (record, trace) = derive_normalized_record(raw, tables);
        report.add_record();

        if trace.if_malformed_sku {
            warn!(row = n_idx + 1, order_id = %raw.order_id, "empty SKU; record kept with blank parts");
            report.add_malformed_sku(n_idx + 1, &raw.order_id);
        }
        if trace.if_style_exception {
            report.add_style_exception();
        }
        if trace.if_style_unrecognized
            && let Some(c_style) = &record.style
            && report.add_style_unrecognized(c_style)
        {
            debug!(style = %c_style, "style not in alias table; passed through");
        }
        if trace.if_color_unrecognized
            && let Some(c_color) = &record.color
            && report.add_color_unrecognized(c_color)
        {
            debug!(color = %c_color, "color not in alias table; passed through");
        }

        l_records.push(record);
    }

    l_records
}

fn derive_normalized_record(
    raw: &SpecRawRecord,
    tables: &SpecCanonicalTables,
) -> (SpecNormalizedRecord, SpecNormalizeTrace) {
    let sku = decompose_sku(&raw.sku);
    let mut trace = SpecNormalizeTrace {
        if_malformed_sku: sku.style.is_none(),
        ..Default::default()
    };

    let style = sku.style.as_deref().map(|c_style| {
        match tables.lookup_style(c_style, sku.size.as_deref()) {
            EnumStyleLookup::SizeException(c_override) => {
                trace.if_style_exception = true;
                c_override.to_string()
            }
            EnumStyleLookup::Alias(c_alias) => c_alias.to_string(),
            EnumStyleLookup::PassThrough => {
                trace.if_style_unrecognized = !c_style.is_empty();
                c_style.to_string()
            }
        }
    });

    let color = sku.color.as_deref().map(|c_color| match tables.lookup_color(c_color) {
        Some(c_alias) => c_alias.to_string(),
        None => {
            trace.if_color_unrecognized = !c_color.is_empty();
            c_color.to_string()
        }
    });

    let size = sku
        .size
        .as_deref()
        .map(|c_size| tables.substitute_size(c_size).to_string());

    let record = SpecNormalizedRecord {
        order_id: raw.order_id.clone(),
        recipient_name: raw.recipient_name.clone(),
        sku: raw.sku.clone(),
        quantity_purchased: raw.quantity_purchased,
        style,
        color,
        size,
        extra: sku.extra,
    };
    (record, trace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(order_id: &str, sku: &str, qty: u32) -> SpecRawRecord {
        SpecRawRecord {
            order_id: order_id.to_string(),
            recipient_name: "R".to_string(),
            sku: sku.to_string(),
            quantity_purchased: qty,
        }
    }

    #[test]
    fn test_normalize_applies_exception_alias_color_and_size() {
        let tables = SpecCanonicalTables::default();

        let record = normalize_record(&raw("O1", "MK3514-RED-2X", 3), &tables);
        assert_eq!(record.style.as_deref(), Some("MK3514PL"));
        assert_eq!(record.color.as_deref(), Some("RED"));
        assert_eq!(record.size.as_deref(), Some("2X"));
        assert_eq!(record.sku, "MK3514-RED-2X");
        assert_eq!(record.quantity_purchased, 3);

        let record = normalize_record(&raw("O2", "CO129-BLU-S/M-BD", 5), &tables);
        assert_eq!(record.style.as_deref(), Some("CO129Y"));
        assert_eq!(record.color.as_deref(), Some("BLUE"));
        assert_eq!(record.size.as_deref(), Some("SM"));
        assert_eq!(record.extra.as_deref(), Some("BD"));
    }

    #[test]
    fn test_normalize_empty_sku_passes_through() {
        let tables = SpecCanonicalTables::default();
        let record = normalize_record(&raw("O1", "", 2), &tables);
        assert_eq!(record.style, None);
        assert_eq!(record.color, None);
        assert_eq!(record.size, None);
        assert_eq!(record.extra, None);
        assert_eq!(record.quantity_purchased, 2);
    }

    #[test]
    fn test_normalize_records_preserves_order_and_reports() {
        let tables = SpecCanonicalTables::default();
        let l_raw = vec![
            raw("O1", "ABC-GRN-S", 2),
            raw("O2", "", 1),
            raw("O3", "ABC-ZZZ-M", 1),
            raw("O4", "CO078-BLK-3X", 4),
            raw("O5", "ABC-ZZZ-L", 1),
        ];
        let mut builder = ReportPickListBuilder::default();
        let l_records = normalize_records(&l_raw, &tables, &mut builder);
        let report = builder.build();

        let l_order_ids: Vec<&str> = l_records.iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(l_order_ids, ["O1", "O2", "O3", "O4", "O5"]);
        assert_eq!(l_records[3].style.as_deref(), Some("CO078PL"));

        assert_eq!(report.cnt_records, 5);
        assert_eq!(report.cnt_malformed_sku, 1);
        assert_eq!(report.cnt_style_exception, 1);
        assert_eq!(report.cnt_style_unrecognized, 3);
        assert_eq!(report.cnt_color_unrecognized, 2);
        assert_eq!(
            report.styles_unrecognized.iter().collect::<Vec<_>>(),
            ["ABC"]
        );
        assert_eq!(
            report.colors_unrecognized.iter().collect::<Vec<_>>(),
            ["ZZZ"]
        );
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("data row 2"));
    }
}
