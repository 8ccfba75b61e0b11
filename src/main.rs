use std::io;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use flash_mcu::args::Args;
use flash_mcu::commands;

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level()))
        .format_timestamp(None)
        .init();

    let stdout = io::stdout();
    match commands::run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
