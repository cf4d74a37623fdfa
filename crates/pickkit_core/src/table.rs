//! Canonicalization tables: style aliases, plus-size style exceptions,
//! color aliases and size substitutions.
//!
//! Tables are built once into immutable maps and shared by reference across
//! conversions. Lookups never fail; a key missing from a table passes through.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::warn;

use crate::conf::{
    TUP_COLOR_ALIASES, TUP_EXCEPTION_SIZES, TUP_SIZE_SUBSTITUTIONS, TUP_STYLE_ALIASES,
    TUP_STYLE_SIZE_EXCEPTIONS,
};
use crate::spec::{
    EnumDuplicateKeyPolicy, PickListError, SpecCanonicalTableSource, SpecDuplicateKey,
};

/// How a style was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumStyleLookup<'a> {
    /// `(style, size)` matched a plus-size exception.
    SizeException(&'a str),
    /// `style` matched the generic alias table.
    Alias(&'a str),
    /// No table entry; the style is kept as is.
    PassThrough,
}

/// Read-only canonicalization configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecCanonicalTables {
    style_aliases: BTreeMap<String, String>,
    color_aliases: BTreeMap<String, String>,
    /// `style -> size -> override style`.
    size_exceptions: BTreeMap<String, BTreeMap<String, String>>,
    size_substitutions: BTreeMap<String, String>,
    duplicate_keys: Vec<SpecDuplicateKey>,
}

impl Default for SpecCanonicalTables {
    /// Built-in deployment tables from [`crate::conf`].
    fn default() -> Self {
        let l_exception_sizes = TUP_EXCEPTION_SIZES.map(ToString::to_string);
        Self {
            style_aliases: derive_owned_pairs(&TUP_STYLE_ALIASES).into_iter().collect(),
            color_aliases: derive_owned_pairs(&TUP_COLOR_ALIASES).into_iter().collect(),
            size_exceptions: derive_size_exceptions(
                derive_owned_pairs(&TUP_STYLE_SIZE_EXCEPTIONS)
                    .into_iter()
                    .collect(),
                &l_exception_sizes,
            ),
            size_substitutions: derive_owned_pairs(&TUP_SIZE_SUBSTITUTIONS)
                .into_iter()
                .collect(),
            duplicate_keys: Vec::new(),
        }
    }
}

impl SpecCanonicalTables {
    /// Build tables from authored data, filling missing parts from built-ins.
    pub fn from_source(
        source: SpecCanonicalTableSource,
        rule_duplicate: EnumDuplicateKeyPolicy,
    ) -> Result<Self, PickListError> {
        derive_canonical_tables(source, rule_duplicate)
    }

    /// Parse a TOML override document.
    pub fn from_toml_str(
        text: &str,
        rule_duplicate: EnumDuplicateKeyPolicy,
    ) -> Result<Self, PickListError> {
        let source: SpecCanonicalTableSource =
            toml::from_str(text).map_err(|err| PickListError::InvalidTable(err.to_string()))?;
        Self::from_source(source, rule_duplicate)
    }

    /// Read and parse a TOML override file.
    pub fn from_toml_path(
        path: &Path,
        rule_duplicate: EnumDuplicateKeyPolicy,
    ) -> Result<Self, PickListError> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            PickListError::InvalidTable(format!("{}: {err}", path.display()))
        })?;
        Self::from_toml_str(&text, rule_duplicate)
    }

    /// Resolve a style, checking size exceptions before generic aliases.
    pub fn lookup_style(&self, style: &str, size: Option<&str>) -> EnumStyleLookup<'_> {
        if let Some(c_size) = size
            && let Some(c_override) = self
                .size_exceptions
                .get(style)
                .and_then(|dict_by_size| dict_by_size.get(c_size))
        {
            return EnumStyleLookup::SizeException(c_override);
        }
        match self.style_aliases.get(style) {
            Some(c_alias) => EnumStyleLookup::Alias(c_alias),
            None => EnumStyleLookup::PassThrough,
        }
    }

    /// Canonical style for `(style, size)`.
    pub fn canonicalize_style<'a>(&'a self, style: &'a str, size: Option<&str>) -> &'a str {
        match self.lookup_style(style, size) {
            EnumStyleLookup::SizeException(c_style) | EnumStyleLookup::Alias(c_style) => c_style,
            EnumStyleLookup::PassThrough => style,
        }
    }

    /// Alias target for `color`, if the table has one.
    pub fn lookup_color(&self, color: &str) -> Option<&str> {
        self.color_aliases.get(color).map(String::as_str)
    }

    /// Canonical color; unknown colors pass through.
    pub fn canonicalize_color<'a>(&'a self, color: &'a str) -> &'a str {
        self.lookup_color(color).unwrap_or(color)
    }

    /// Apply the literal size substitutions (`S/M -> SM`, ...).
    pub fn substitute_size<'a>(&'a self, size: &'a str) -> &'a str {
        self.size_substitutions
            .get(size)
            .map(String::as_str)
            .unwrap_or(size)
    }

    /// Keys defined more than once while building these tables.
    pub fn duplicate_keys(&self) -> &[SpecDuplicateKey] {
        &self.duplicate_keys
    }

    /// Number of `(style_aliases, color_aliases, size_exception styles)` entries.
    pub fn entry_counts(&self) -> (usize, usize, usize) {
        (
            self.style_aliases.len(),
            self.color_aliases.len(),
            self.size_exceptions.len(),
        )
    }
}

fn derive_canonical_tables(
    source: SpecCanonicalTableSource,
    rule_duplicate: EnumDuplicateKeyPolicy,
) -> Result<SpecCanonicalTables, PickListError> {
    let mut l_duplicates = Vec::new();
    let l_style_aliases = source
        .style_aliases
        .unwrap_or_else(|| derive_owned_pairs(&TUP_STYLE_ALIASES));
    let l_color_aliases = source
        .color_aliases
        .unwrap_or_else(|| derive_owned_pairs(&TUP_COLOR_ALIASES));
    let l_size_exceptions = source
        .size_exceptions
        .unwrap_or_else(|| derive_owned_pairs(&TUP_STYLE_SIZE_EXCEPTIONS));
    let l_exception_sizes = source.exception_sizes.unwrap_or_else(|| {
        TUP_EXCEPTION_SIZES
            .iter()
            .map(ToString::to_string)
            .collect()
    });
    let l_size_substitutions = source
        .size_substitutions
        .unwrap_or_else(|| derive_owned_pairs(&TUP_SIZE_SUBSTITUTIONS));

    let style_aliases =
        derive_alias_map("style_aliases", l_style_aliases, rule_duplicate, &mut l_duplicates)?;
    let color_aliases =
        derive_alias_map("color_aliases", l_color_aliases, rule_duplicate, &mut l_duplicates)?;
    let dict_exception_by_style = derive_alias_map(
        "size_exceptions",
        l_size_exceptions,
        rule_duplicate,
        &mut l_duplicates,
    )?;
    let size_substitutions = derive_alias_map(
        "size_substitutions",
        l_size_substitutions,
        rule_duplicate,
        &mut l_duplicates,
    )?;

    let size_exceptions = derive_size_exceptions(dict_exception_by_style, &l_exception_sizes);

    Ok(SpecCanonicalTables {
        style_aliases,
        color_aliases,
        size_exceptions,
        size_substitutions,
        duplicate_keys: l_duplicates,
    })
}

fn derive_alias_map(
    table: &str,
    entries: Vec<(String, String)>,
    rule_duplicate: EnumDuplicateKeyPolicy,
    duplicates: &mut Vec<SpecDuplicateKey>,
) -> Result<BTreeMap<String, String>, PickListError> {
    let mut dict_alias = BTreeMap::new();
    for (n_idx, (c_key, c_value)) in entries.into_iter().enumerate() {
        if c_key.is_empty() {
            return Err(PickListError::InvalidTable(format!(
                "{table}: empty key at entry {n_idx}"
            )));
        }

        let Some(c_value_dropped) = dict_alias.insert(c_key.clone(), c_value.clone()) else {
            continue;
        };

        if rule_duplicate == EnumDuplicateKeyPolicy::Reject {
            return Err(PickListError::InvalidTable(format!(
                "{table}: duplicate key {c_key:?} ({c_value_dropped:?} vs {c_value:?})"
            )));
        }
        warn!(
            table,
            key = %c_key,
            dropped = %c_value_dropped,
            kept = %c_value,
            "duplicate alias key; last definition wins"
        );
        duplicates.push(SpecDuplicateKey {
            table: table.to_string(),
            key: c_key,
            value_dropped: c_value_dropped,
            value_kept: c_value,
        });
    }
    Ok(dict_alias)
}

fn derive_size_exceptions(
    dict_exception_by_style: BTreeMap<String, String>,
    exception_sizes: &[String],
) -> BTreeMap<String, BTreeMap<String, String>> {
    dict_exception_by_style
        .into_iter()
        .map(|(c_style, c_override)| {
            let dict_by_size = exception_sizes
                .iter()
                .map(|c_size| (c_size.clone(), c_override.clone()))
                .collect::<BTreeMap<_, _>>();
            (c_style, dict_by_size)
        })
        .collect()
}

fn derive_owned_pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(c_key, c_value)| (c_key.to_string(), c_value.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TUP_SIZES_SAMPLE: [Option<&str>; 8] = [
        None,
        Some("S"),
        Some("M"),
        Some("1X"),
        Some("2X"),
        Some("3X"),
        Some("4X"),
        Some("XL"),
    ];

    #[test]
    fn test_size_exception_beats_style_alias() {
        let tables = SpecCanonicalTables::default();
        assert_eq!(tables.canonicalize_style("CO129", Some("2X")), "CO129PL222");
        assert_eq!(tables.canonicalize_style("CO129", Some("M")), "CO129Y");
        assert_eq!(tables.canonicalize_style("CO129", None), "CO129Y");
        assert_eq!(tables.canonicalize_style("MK3514", Some("2X")), "MK3514PL");
        assert_eq!(
            tables.lookup_style("MK3636", Some("1X")),
            EnumStyleLookup::SizeException("MK3636Y")
        );
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let tables = SpecCanonicalTables::default();
        assert_eq!(tables.lookup_style("ABC", Some("S")), EnumStyleLookup::PassThrough);
        assert_eq!(tables.canonicalize_style("ABC", Some("2X")), "ABC");
        assert_eq!(tables.canonicalize_color("NOPE"), "NOPE");
        assert_eq!(tables.lookup_color("NOPE"), None);
        assert_eq!(tables.substitute_size("L"), "L");
    }

    #[test]
    fn test_color_aliases_collapse_and_stay_case_sensitive() {
        let tables = SpecCanonicalTables::default();
        assert_eq!(tables.canonicalize_color("BLK"), "BLACK");
        assert_eq!(tables.canonicalize_color("BLACK"), "BLACK");
        assert_eq!(tables.canonicalize_color("GRAY"), "GREY");
        assert_eq!(tables.canonicalize_color("GREY"), "GREY");
        assert_eq!(tables.canonicalize_color("Sage"), "SAGE");
        assert_eq!(tables.canonicalize_color("blk"), "blk");
    }

    #[test]
    fn test_size_substitutions() {
        let tables = SpecCanonicalTables::default();
        assert_eq!(tables.substitute_size("S/M"), "SM");
        assert_eq!(tables.substitute_size("M/L"), "ML");
    }

    #[test]
    fn test_canonicalization_is_idempotent_for_builtin_keys() {
        let tables = SpecCanonicalTables::default();
        let l_styles = TUP_STYLE_ALIASES
            .iter()
            .chain(TUP_STYLE_SIZE_EXCEPTIONS.iter())
            .map(|(c_style, _)| *c_style);
        for c_style in l_styles {
            for size in TUP_SIZES_SAMPLE {
                let c_once = tables.canonicalize_style(c_style, size);
                let c_twice = tables.canonicalize_style(c_once, size);
                assert_eq!(c_once, c_twice, "{c_style} / {size:?}");
            }
        }
        for (c_color, _) in TUP_COLOR_ALIASES {
            let c_once = tables.canonicalize_color(c_color);
            assert_eq!(tables.canonicalize_color(c_once), c_once, "{c_color}");
        }
    }

    #[test]
    fn test_builtin_tables_report_no_duplicates() {
        let tables = SpecCanonicalTables::default();
        assert!(tables.duplicate_keys().is_empty());
        assert_eq!(
            tables.entry_counts(),
            (
                TUP_STYLE_ALIASES.len(),
                TUP_COLOR_ALIASES.len(),
                TUP_STYLE_SIZE_EXCEPTIONS.len()
            )
        );
    }

    #[test]
    fn test_toml_override_last_definition_wins_and_is_recorded() {
        let txt = r#"
            color_aliases = [["GRY", "GREY"], ["GRY", "GRAY"], ["BLK", "BLACK"]]
            style_aliases = [["ABC", "ABC1"]]
        "#;
        let tables =
            SpecCanonicalTables::from_toml_str(txt, EnumDuplicateKeyPolicy::LastWins).unwrap();

        assert_eq!(tables.canonicalize_color("GRY"), "GRAY");
        assert_eq!(tables.canonicalize_color("GREY"), "GREY");
        assert_eq!(tables.canonicalize_style("ABC", None), "ABC1");
        // size exceptions fall back to the built-in data
        assert_eq!(tables.canonicalize_style("CO129", Some("3X")), "CO129PL222");
        // generic aliases were replaced, so CO129 no longer maps to CO129Y
        assert_eq!(tables.canonicalize_style("CO129", Some("S")), "CO129");

        assert_eq!(
            tables.duplicate_keys(),
            &[SpecDuplicateKey {
                table: "color_aliases".to_string(),
                key: "GRY".to_string(),
                value_dropped: "GREY".to_string(),
                value_kept: "GRAY".to_string(),
            }]
        );
    }

    #[test]
    fn test_toml_override_reject_policy_fails_on_duplicates() {
        let txt = r#"color_aliases = [["GRY", "GREY"], ["GRY", "GRAY"]]"#;
        let err = SpecCanonicalTables::from_toml_str(txt, EnumDuplicateKeyPolicy::Reject)
            .unwrap_err();
        assert!(matches!(err, PickListError::InvalidTable(_)));
        assert!(err.to_string().contains("GRY"));
    }

    #[test]
    fn test_toml_override_custom_exception_sizes() {
        let txt = r#"
            size_exceptions = [["ZZ1", "ZZ1PL"]]
            exception_sizes = ["5X"]
        "#;
        let tables =
            SpecCanonicalTables::from_toml_str(txt, EnumDuplicateKeyPolicy::LastWins).unwrap();
        assert_eq!(tables.canonicalize_style("ZZ1", Some("5X")), "ZZ1PL");
        assert_eq!(tables.canonicalize_style("ZZ1", Some("2X")), "ZZ1");
        assert_eq!(tables.canonicalize_style("CO129", Some("2X")), "CO129Y");
    }

    #[test]
    fn test_toml_override_rejects_empty_keys_and_bad_documents() {
        let err = SpecCanonicalTables::from_toml_str(
            r#"style_aliases = [["", "X"]]"#,
            EnumDuplicateKeyPolicy::LastWins,
        )
        .unwrap_err();
        assert!(matches!(err, PickListError::InvalidTable(_)));

        let err = SpecCanonicalTables::from_toml_str(
            "unknown_table = 1",
            EnumDuplicateKeyPolicy::LastWins,
        )
        .unwrap_err();
        assert!(matches!(err, PickListError::InvalidTable(_)));
    }
}
