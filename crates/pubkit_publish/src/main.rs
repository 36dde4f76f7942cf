use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use pubkit_publish::{Cli, prepare_publish};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let spec_publish_conf = cli.into_config().context("invalid arguments")?;
    let report = prepare_publish(&spec_publish_conf)?;
    info!(
        files = report.report_mirror.cnt_files_copied,
        bytes = report.report_mirror.cnt_bytes_copied,
        "Build files copied to {}",
        spec_publish_conf.dir_destination.display()
    );
    Ok(())
}

fn init_logging(if_verbose: bool) {
    let level_default = if if_verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level_default));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
