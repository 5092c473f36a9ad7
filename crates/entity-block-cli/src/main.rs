//! entity-block CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use entity_block_cli::{Args, error_adapter::Report};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting entity-block");
    debug!(args:?; "Parsed arguments");

    match entity_block_cli::run(&args) {
        Ok(output) => {
            info!(output = output.display().to_string(); "Completed successfully");
        }
        Err(err) => {
            let mut writer = String::new();
            miette::GraphicalReportHandler::new()
                .render_report(&mut writer, &Report::new(&err))
                .expect("Writing to String buffer is infallible");
            error!("{writer}");

            process::exit(1);
        }
    }
}
