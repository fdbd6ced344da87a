use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod cli;
mod summary;

const DEFAULT_LOG_FILTER: &str = "loadgate=info,loadgate_core=info,check_baseline=info";

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    init_tracing();

    // Anything unexpected still has to fail the gate with the ordinary failure code.
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        default_panic(info);
        error!("Panic occurred: {info}");
        std::process::exit(1);
    }));

    match cli::run(&args, &mut std::io::stdout().lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
