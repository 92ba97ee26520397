// Entrypoint for darc.
// - Keeps `main` small: parse the command line, run one upload, print the URL.
// - Every failure ends up here and is mapped to an exit status.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::debug;

use darc::api;
use darc::cli::Cli;
use darc::config::Config;
use darc::error::UploadError;

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_cli(&cli)?;
    let url = api::upload(&config)?;

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", url).context("Failed to write URL to stdout")?;
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // clap prints usage, help or version and exits on its own.
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("darc: {:#}", e);
            let code = e.downcast_ref::<UploadError>().map_or(1, UploadError::exit_code);
            ExitCode::from(code)
        }
    }
}
