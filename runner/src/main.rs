use std::process::ExitCode;

use clap::Parser;
use processor::{format_run, Processor, Statistics};
use scheduler::{workload, Policy};
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;

use crate::config::Config;

fn main() -> ExitCode {
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(error) => {
            let _ = error.print();
            // usage errors exit with 1, --help and --version with 0
            return if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    set_logger(config.log_level);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let mut jobs = workload::load(&config.trace)?;

    let policy = match config.policy.parse::<Policy>() {
        Ok(policy) => policy,
        Err(unknown) => {
            info!(%unknown, "nothing to replay");
            return Ok(());
        }
    };
    let timeslice = config.timeslice(policy)?;

    let mut scheduler = scheduler::for_policy(policy, timeslice);
    let trace = Processor::run(scheduler.as_mut(), &mut jobs);
    let statistics = if config.analysis() {
        Some(Statistics::collect(&jobs)?)
    } else {
        None
    };

    print!("{}", format_run(&trace, statistics.as_ref()));
    Ok(())
}

/// Installs the global `tracing` subscriber. Logs go to stderr so the trace
/// on stdout stays untouched.
fn set_logger(level: Option<LevelFilter>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests;
