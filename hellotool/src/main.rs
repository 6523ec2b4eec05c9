use std::process::ExitCode;

use clap::Parser;

mod cli;
mod cmd_greet;
mod error;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    cli.apply_print_options();

    let stdout = std::io::stdout();
    match cmd_greet::run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error::format_report(&e, cli.trace));
            ExitCode::FAILURE
        }
    }
}
