//! Main application entry point.

use clap::Parser;
use printdraft_app::{AppResult, CliArgs, ShortcutRegistry, load_config, run_session};
use std::process::ExitCode;

fn run(args: CliArgs) -> AppResult<()> {
    if args.shortcuts {
        ShortcutRegistry::print_all();
    }
    let Some(script) = args.script else {
        return Ok(());
    };
    let config = load_config(args.config.as_deref())?;
    let json = run_session(config, &script)?;
    println!("{json}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting PrintDraft");

    // Parse CLI arguments
    let args = CliArgs::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
