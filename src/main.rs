//! oc-cobs - COBS / COBS/R encoder and decoder
//!
//! Usage:
//!   oc-cobs encode [--variant cobsr] [-i FILE] [-o FILE] [--hex]
//!   oc-cobs decode [--variant cobsr] [-i FILE] [-o FILE] [--hex]
//!   oc-cobs sizes <LEN> [--variant cobsr]

use clap::Parser;
use oc_cobs::cli::Cli;
use oc_cobs::{logging, tool};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    debug!("{:?}", cli.command);

    match tool::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
