//! `pickkit_core` v1:
//! Order-export to pick-list conversion engine.
//!
//! Architecture:
//! - `conf`      : constants and built-in canonicalization data
//! - `spec`      : records/views/options/errors
//! - `util`      : pure helpers (SKU decomposition, sort keys)
//! - `table`     : immutable canonicalization tables and lookup policy
//! - `normalize` : raw record -> normalized record
//! - `view`      : Order/Pick/Canonical view derivation
//! - `report`    : per-conversion report model
//!
//! No file format lives here; input and output adapters are separate crates.
pub mod conf;
pub mod normalize;
pub mod report;
pub mod spec;
pub mod table;
pub mod util;
pub mod view;

pub use conf::{C_SKU_DELIMITER, C_TOTAL_LABEL, N_SKU_PARTS_MAX};
pub use normalize::{normalize_record, normalize_records};
pub use report::{ReportPickList, ReportPickListBuilder};
pub use spec::{
    EnumDuplicateKeyPolicy, EnumPickRow, PickListError, SpecCanonicalRow,
    SpecCanonicalTableSource, SpecCanonicalView, SpecDecomposedSku, SpecDuplicateKey,
    SpecGroupedViewPolicy, SpecNormalizedRecord, SpecOrderRow, SpecOrderView, SpecPickItem,
    SpecPickListViews, SpecPickView, SpecRawRecord, SpecTotalRow,
};
pub use table::{EnumStyleLookup, SpecCanonicalTables};
pub use util::decompose_sku;
pub use view::{
    build_pick_list, derive_canonical_view, derive_grouped_rows, derive_order_view,
    derive_pick_view, derive_views,
};
