//! View builder: Order, Pick and Canonical views from normalized records.

use tracing::{info, warn};

use crate::normalize::normalize_records;
use crate::report::{ReportPickList, ReportPickListBuilder};
use crate::spec::{
    EnumPickRow, SpecCanonicalRow, SpecCanonicalView, SpecGroupedViewPolicy,
    SpecNormalizedRecord, SpecOrderRow, SpecOrderView, SpecPickItem, SpecPickListViews,
    SpecPickView, SpecRawRecord, SpecTotalRow,
};
use crate::table::SpecCanonicalTables;
use crate::util::{compare_style_color_size, derive_key_text};

////////////////////////////////////////////////////////////////////////////////
// #region Pipeline

/// Run one conversion: normalize `raws` and derive all three views.
///
/// Never fails once records exist; per-record problems land in the report.
pub fn build_pick_list(
    raws: &[SpecRawRecord],
    tables: &SpecCanonicalTables,
) -> (SpecPickListViews, ReportPickList) {
    let mut builder = ReportPickListBuilder::default();
    let l_records = normalize_records(raws, tables, &mut builder);
    let views = derive_views(&l_records);
    let report = builder.build();

    if report.has_unrecognized_aliases() {
        warn!(
            styles = ?report.styles_unrecognized,
            colors = ?report.colors_unrecognized,
            "values missing from alias tables were passed through"
        );
    }
    info!(
        records = report.cnt_records,
        quantity = views.order_view.total.quantity_sum,
        "pick list built"
    );

    (views, report)
}

/// Derive the three views from already normalized records.
pub fn derive_views(records: &[SpecNormalizedRecord]) -> SpecPickListViews {
    SpecPickListViews {
        order_view: derive_order_view(records),
        pick_view: derive_pick_view(records),
        canonical_view: derive_canonical_view(records),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Views

/// Order View: input order, original SKU, grand total.
pub fn derive_order_view(records: &[SpecNormalizedRecord]) -> SpecOrderView {
    let rows: Vec<SpecOrderRow> = records
        .iter()
        .map(|record| SpecOrderRow {
            order_id: record.order_id.clone(),
            recipient_name: record.recipient_name.clone(),
            sku: record.sku.clone(),
            quantity_purchased: record.quantity_purchased,
        })
        .collect();
    let total = SpecTotalRow {
        quantity_sum: rows.iter().map(|row| u64::from(row.quantity_purchased)).sum(),
    };
    SpecOrderView { rows, total }
}

/// Pick View: sorted items, style-group separators, grand total.
pub fn derive_pick_view(records: &[SpecNormalizedRecord]) -> SpecPickView {
    let (rows, total) = derive_grouped_rows(records, SpecGroupedViewPolicy::PICK);
    SpecPickView {
        rows,
        total: total.unwrap_or_default(),
    }
}

/// Canonical View: sorted items only, without pack note, separators or total.
pub fn derive_canonical_view(records: &[SpecNormalizedRecord]) -> SpecCanonicalView {
    let (l_rows, _) = derive_grouped_rows(records, SpecGroupedViewPolicy::CANONICAL);
    let rows = l_rows
        .into_iter()
        .filter_map(|row| match row {
            EnumPickRow::Item(item) => Some(SpecCanonicalRow {
                style: item.style,
                color: item.color,
                size: item.size,
                quantity_purchased: item.quantity_purchased,
            }),
            EnumPickRow::Separator => None,
        })
        .collect();
    SpecCanonicalView { rows }
}

/// Shared sorted projection behind the Pick and Canonical views.
///
/// Items are stably sorted by `(style, color, size)`. With separators on, a
/// blank row precedes every item whose style differs from the previous item.
pub fn derive_grouped_rows(
    records: &[SpecNormalizedRecord],
    policy: SpecGroupedViewPolicy,
) -> (Vec<EnumPickRow>, Option<SpecTotalRow>) {
    let mut l_items: Vec<SpecPickItem> = records
        .iter()
        .map(|record| SpecPickItem {
            style: record.style.clone(),
            color: record.color.clone(),
            size: record.size.clone(),
            quantity_purchased: record.quantity_purchased,
            pack_note: String::new(),
        })
        .collect();
    l_items.sort_by(|lhs, rhs| {
        compare_style_color_size(
            (&lhs.style, &lhs.color, &lhs.size),
            (&rhs.style, &rhs.color, &rhs.size),
        )
    });

    let total = policy.if_append_total.then(|| SpecTotalRow {
        quantity_sum: l_items
            .iter()
            .map(|item| u64::from(item.quantity_purchased))
            .sum(),
    });

    if !policy.if_insert_separators {
        return (l_items.into_iter().map(EnumPickRow::Item).collect(), total);
    }

    let mut l_rows = Vec::with_capacity(l_items.len() * 2);
    let mut c_style_prev: Option<String> = None;
    for item in l_items {
        let c_style = derive_key_text(&item.style);
        if let Some(c_prev) = &c_style_prev
            && c_prev != c_style
        {
            l_rows.push(EnumPickRow::Separator);
        }
        c_style_prev = Some(c_style.to_string());
        l_rows.push(EnumPickRow::Item(item));
    }
    (l_rows, total)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn record(style: Option<&str>, color: Option<&str>, size: Option<&str>, qty: u32) -> SpecNormalizedRecord {
        SpecNormalizedRecord {
            order_id: "O".to_string(),
            recipient_name: "R".to_string(),
            sku: String::new(),
            quantity_purchased: qty,
            style: style.map(ToString::to_string),
            color: color.map(ToString::to_string),
            size: size.map(ToString::to_string),
            extra: None,
        }
    }

    fn derive_layout(view: &SpecPickView) -> Vec<String> {
        view.rows
            .iter()
            .map(|row| match row {
                EnumPickRow::Separator => "|".to_string(),
                EnumPickRow::Item(item) => format!(
                    "{}/{}/{}",
                    derive_key_text(&item.style),
                    derive_key_text(&item.color),
                    derive_key_text(&item.size)
                ),
            })
            .collect()
    }

    #[test]
    fn test_pick_view_sorts_and_separates_style_groups() {
        let l_records = vec![
            record(Some("B"), Some("RED"), Some("M"), 1),
            record(Some("A"), Some("RED"), Some("S"), 2),
            record(Some("B"), Some("BLUE"), Some("S"), 3),
            record(Some("A"), Some("BLUE"), Some("L"), 4),
            record(Some("C"), None, None, 5),
        ];
        let view = derive_pick_view(&l_records);

        assert_eq!(
            derive_layout(&view),
            ["A/BLUE/L", "A/RED/S", "|", "B/BLUE/S", "B/RED/M", "|", "C//"]
        );
        assert_eq!(view.total.quantity_sum, 15);
        assert!(view.items().all(|item| item.pack_note.is_empty()));
    }

    #[test]
    fn test_pick_view_sort_is_stable_for_equal_keys() {
        let l_records = vec![
            record(Some("A"), Some("X"), Some("M"), 1),
            record(Some("A"), Some("X"), Some("M"), 2),
            record(Some("A"), Some("X"), Some("M"), 3),
        ];
        let view = derive_pick_view(&l_records);
        let l_qty: Vec<u32> = view.items().map(|item| item.quantity_purchased).collect();
        assert_eq!(l_qty, [1, 2, 3]);
        assert!(view.rows.iter().all(|row| !row.is_separator()));
    }

    #[test]
    fn test_absent_style_groups_with_empty_style_and_sorts_first() {
        let l_records = vec![
            record(Some("A"), None, None, 1),
            record(None, None, None, 1),
            record(Some(""), Some("Z"), None, 1),
        ];
        let view = derive_pick_view(&l_records);
        assert_eq!(derive_layout(&view), ["//", "/Z/", "|", "A//"]);
    }

    #[test]
    fn test_separators_never_lead_trail_or_repeat() {
        let l_records: Vec<_> = ["D", "A", "C", "A", "B", "D", "B"]
            .into_iter()
            .map(|c_style| record(Some(c_style), None, None, 1))
            .collect();
        let view = derive_pick_view(&l_records);

        assert!(!view.rows.first().is_some_and(EnumPickRow::is_separator));
        assert!(!view.rows.last().is_some_and(EnumPickRow::is_separator));
        for l_pair in view.rows.windows(2) {
            assert!(!(l_pair[0].is_separator() && l_pair[1].is_separator()));
            if let (Some(lhs), Some(rhs)) = (l_pair[0].item(), l_pair[1].item()) {
                assert_eq!(lhs.style, rhs.style);
            }
        }
        for l_triple in view.rows.windows(3) {
            if l_triple[1].is_separator() {
                let (Some(lhs), Some(rhs)) = (l_triple[0].item(), l_triple[2].item()) else {
                    panic!("separator must sit between two items");
                };
                assert_ne!(lhs.style, rhs.style);
            }
        }
        assert_eq!(view.rows.iter().filter(|row| row.is_separator()).count(), 3);
    }

    #[test]
    fn test_canonical_view_matches_pick_items_without_extras() {
        let l_records = vec![
            record(Some("B"), Some("RED"), Some("M"), 1),
            record(Some("A"), Some("RED"), Some("S"), 2),
        ];
        let pick = derive_pick_view(&l_records);
        let canonical = derive_canonical_view(&l_records);

        assert_eq!(canonical.rows.len(), 2);
        for (item, row) in pick.items().zip(&canonical.rows) {
            assert_eq!(item.style, row.style);
            assert_eq!(item.color, row.color);
            assert_eq!(item.size, row.size);
            assert_eq!(item.quantity_purchased, row.quantity_purchased);
        }
    }

    #[test]
    fn test_order_view_keeps_input_order() {
        let mut l_records = vec![
            record(Some("B"), None, None, 1),
            record(Some("A"), None, None, 2),
        ];
        l_records[0].order_id = "O2".to_string();
        l_records[1].order_id = "O1".to_string();

        let view = derive_order_view(&l_records);
        assert_eq!(view.rows[0].order_id, "O2");
        assert_eq!(view.rows[1].order_id, "O1");
        assert_eq!(view.total.quantity_sum, 3);
    }

    #[test]
    fn test_empty_input_yields_empty_views_with_zero_totals() {
        let (views, report) = build_pick_list(&[], &SpecCanonicalTables::default());
        assert!(views.order_view.rows.is_empty());
        assert!(views.pick_view.rows.is_empty());
        assert!(views.canonical_view.rows.is_empty());
        assert_eq!(views.order_view.total.quantity_sum, 0);
        assert_eq!(views.pick_view.total.quantity_sum, 0);
        assert_eq!(report.cnt_records, 0);
    }
}
