//! heatprops CLI entrypoint

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use heatprops::cli::{handle_parse_error, Cli};
use heatprops::config::load_settings;
use heatprops::HeatPropsError;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(err),
    };

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(err) => return fail(HeatPropsError::Config(err)),
    };

    // Initialize tracing (stderr, stdout is for usage and summaries)
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    debug!(?settings, "Resolved settings");

    match cli.execute(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(err),
    }
}

fn fail(err: HeatPropsError) -> ExitCode {
    debug!(?err, "Run failed");
    eprintln!("error: {err}");
    ExitCode::from(err.exit_code())
}
