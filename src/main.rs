use std::process::ExitCode;

use clap::Parser;
use clusterpull::command::{expand_two_letter_flags, Commands};
use clusterpull::runtime::{setup_global_logger, LogLevel};

#[derive(Parser)]
#[command(version, about, arg_required_else_help = true)]
struct Cli {
    /// Diagnostic verbosity: trace, debug, info, warn, error or off
    #[arg(long = "log-level", global = true, default_value = "info")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let mut cli = Cli::parse_from(expand_two_letter_flags(std::env::args_os()));
    setup_global_logger(cli.log_level);

    if let Err(e) = cli.command.try_execute() {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
