mod cli;
mod run;

use clap::Parser;
use tracing::{debug, error, trace};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::run::run_convert;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Convert(args) => run_convert(args),
    };

    match result {
        Ok(outcome) => {
            println!("{}", outcome.report);
            println!("{}", outcome.path_file_out.display());
        }
        Err(err) => {
            error!("Fatal error: {err:#}");
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();

    debug!("pickkit started with verbosity level: {verbose}");
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
