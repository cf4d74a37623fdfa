//! `pickkit convert`: read, build views, write the report.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate};
use pickkit_core::{
    EnumDuplicateKeyPolicy, ReportPickList, SpecCanonicalTables, SpecPickListViews,
    build_pick_list,
};
use pickkit_io_table::{EnumFieldSeparator, SpecOrderReadOptions, read_raw_records_from_path};
use pickkit_io_xlsx::{
    SpecXlsxWriteOptions, derive_date_stamp, derive_report_file_name, write_pick_list_workbook,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cli::{ConvertArgs, EnumReportFormat};

/// JSON document written by `--format json`.
#[derive(Debug, Serialize)]
struct SpecJsonReport<'a> {
    report_date: String,
    #[serde(flatten)]
    views: &'a SpecPickListViews,
    report: &'a ReportPickList,
}

/// Outcome of one conversion.
#[derive(Debug)]
pub struct SpecConvertOutcome {
    pub path_file_out: PathBuf,
    pub report: ReportPickList,
}

/// Load the alias tables named on the command line, or the built-in ones.
pub fn load_tables(args: &ConvertArgs) -> Result<SpecCanonicalTables> {
    let Some(path) = &args.alias_table else {
        return Ok(SpecCanonicalTables::default());
    };
    let rule_duplicate = if args.reject_duplicate_keys {
        EnumDuplicateKeyPolicy::Reject
    } else {
        EnumDuplicateKeyPolicy::LastWins
    };
    let tables = SpecCanonicalTables::from_toml_path(path, rule_duplicate)
        .with_context(|| format!("Failed to load alias table {}", path.display()))?;
    let (n_styles, n_colors, n_exceptions) = tables.entry_counts();
    debug!(
        path = %path.display(),
        styles = n_styles,
        colors = n_colors,
        size_exceptions = n_exceptions,
        duplicates = tables.duplicate_keys().len(),
        "alias table loaded"
    );
    Ok(tables)
}

/// Run one conversion end to end.
pub fn run_convert(args: &ConvertArgs) -> Result<SpecConvertOutcome> {
    let tables = load_tables(args)?;

    let read_options = SpecOrderReadOptions {
        rule_separator: args
            .separator
            .map(EnumFieldSeparator::from)
            .unwrap_or_default(),
        ..Default::default()
    };
    let l_raw = read_raw_records_from_path(&args.input, &read_options)
        .with_context(|| format!("Failed to read order export {}", args.input.display()))?;
    if l_raw.is_empty() {
        warn!(path = %args.input.display(), "order export has no data rows");
    }

    let (views, report) = build_pick_list(&l_raw, &tables);
    let report_date: NaiveDate = args.date.unwrap_or_else(|| Local::now().date_naive());

    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!("Failed to create output directory {}", args.output_dir.display())
    })?;

    let path_file_out = match args.format {
        EnumReportFormat::Xlsx => {
            let write_options = SpecXlsxWriteOptions {
                report_date,
                if_autofit: args.autofit,
                ..Default::default()
            };
            let (path_file_out, xlsx_report) =
                write_pick_list_workbook(&args.output_dir, &views, write_options)
                    .map_err(|err| anyhow!(err))
                    .context("Failed to write workbook")?;
            for c_warning in &xlsx_report.warnings {
                warn!("{c_warning}");
            }
            path_file_out
        }
        EnumReportFormat::Json => write_json_report(&args.output_dir, report_date, &views, &report)?,
    };

    info!(path = %path_file_out.display(), "{report}");
    Ok(SpecConvertOutcome {
        path_file_out,
        report,
    })
}

fn write_json_report(
    dir_out: &std::path::Path,
    report_date: NaiveDate,
    views: &SpecPickListViews,
    report: &ReportPickList,
) -> Result<PathBuf> {
    let path_file_out = dir_out.join(derive_report_file_name(report_date, "json"));
    let doc = SpecJsonReport {
        report_date: derive_date_stamp(report_date),
        views,
        report,
    };
    let text = serde_json::to_string_pretty(&doc).context("Failed to serialize report")?;
    fs::write(&path_file_out, text)
        .with_context(|| format!("Failed to write {}", path_file_out.display()))?;
    Ok(path_file_out)
}
