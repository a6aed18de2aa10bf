//! Snapchat Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use snapchat_downloader::{
    api::Snapchat,
    cli::Args,
    download::run,
    error::{exit_codes, Error, Result},
    output::print_error,
};

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::MissingDirectory(_) | Error::Authentication => {
                    ExitCode::from(exit_codes::PRECONDITION_ERROR as u8)
                }
                Error::Api(_) | Error::Http(_) | Error::Json(_) => {
                    ExitCode::from(exit_codes::API_ERROR as u8)
                }
                Error::Io(_) | Error::Zip(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
            }
        }
    }
}

fn run_cli() -> Result<()> {
    let mut args = Args::parse();

    // Set up logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    let password = match args.password.take() {
        Some(password) => password,
        None => rpassword::prompt_password("Password: ")?,
    };
    let options = args.into_options(password);

    let mut client = Snapchat::new()?;
    run(&mut client, &options)
}
