mod args;
mod generate;
mod interrupt;

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use crate::error::MalsitesError;

pub fn run() -> ExitCode {
    if let Err(err) = interrupt::install_handler() {
        report(&err);
        return ExitCode::from(err.exit_code());
    }

    let cli = match args::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let exit = clap_error_exit_code(&err);
            let _ = err.print();
            return ExitCode::from(exit);
        }
    };

    if let Err(err) = crate::logging::init(cli.log_level.into()) {
        report(&err);
        return ExitCode::from(err.exit_code());
    }

    match generate::run_generate_command(cli.count) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

#[allow(clippy::print_stderr)]
fn report(err: &MalsitesError) {
    eprintln!("{}", render_error(err));
}

fn render_error(err: &MalsitesError) -> String {
    format!("{} error: {err}", err.class().label())
}

fn clap_error_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 2,
    }
}
