//! Command line definition.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use pickkit_io_table::EnumFieldSeparator;

/// Turn a marketplace order export into a warehouse pick-list report
#[derive(Parser, Debug)]
#[command(name = "pickkit", version)]
#[command(about = "Convert order exports into Order, Pick and Canonical views", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert one order export into a report file
    Convert(ConvertArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Order export (XLSX/XLS workbook, CSV, tab-separated TXT/TSV, or Arrow IPC)
    pub input: PathBuf,

    /// Directory receiving the report
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Report date stamped into sheet and file names (default: today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Report format
    #[arg(long, value_enum, default_value_t = EnumReportFormat::Xlsx)]
    pub format: EnumReportFormat,

    /// TOML file replacing the built-in alias tables
    #[arg(long, value_name = "FILE")]
    pub alias_table: Option<PathBuf>,

    /// Fail when the alias table repeats a key instead of keeping the last entry
    #[arg(long)]
    pub reject_duplicate_keys: bool,

    /// Field separator for delimited input (default: inferred from extension)
    #[arg(long, value_enum)]
    pub separator: Option<EnumSeparatorArg>,

    /// Fit column widths to content instead of the fixed report widths
    #[arg(long)]
    pub autofit: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumReportFormat {
    Xlsx,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumSeparatorArg {
    Tab,
    Comma,
}

impl From<EnumSeparatorArg> for EnumFieldSeparator {
    fn from(value: EnumSeparatorArg) -> Self {
        match value {
            EnumSeparatorArg::Tab => EnumFieldSeparator::Tab,
            EnumSeparatorArg::Comma => EnumFieldSeparator::Comma,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_convert_args_parse() {
        let cli = Cli::parse_from([
            "pickkit",
            "-vv",
            "convert",
            "orders.txt",
            "--date",
            "2024-03-07",
            "--format",
            "json",
            "--separator",
            "tab",
            "--reject-duplicate-keys",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Convert(args) = cli.command;
        assert_eq!(args.input, PathBuf::from("orders.txt"));
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2024, 3, 7));
        assert_eq!(args.format, EnumReportFormat::Json);
        assert_eq!(args.separator, Some(EnumSeparatorArg::Tab));
        assert!(args.reject_duplicate_keys);
        assert_eq!(args.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let result = Cli::try_parse_from(["pickkit", "convert", "a.csv", "--date", "03/07/2024"]);
        assert!(result.is_err());
    }
}
