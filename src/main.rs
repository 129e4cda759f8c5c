use std::env;
use std::process;

use tracing::info;

mod cli;
mod clipboard;
mod error;
mod exits;
mod form;
mod logging;
mod pass;
mod settings;
mod terminal;
mod tui;

use error::AppError;
use settings::Settings;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    if let Err(e) = run(&args) {
        cli::prompts::error(&e.to_string());
        process::exit(e.exit_code());
    }
}

fn run(args: &[String]) -> Result<(), AppError> {
    let flags = cli::parse(args)?;

    if flags.help {
        cli::prompts::print_help();
        return Ok(());
    }
    if flags.version {
        cli::prompts::print_version();
        return Ok(());
    }

    let settings = Settings::from_flags(&flags);
    logging::init_logging(&settings.log)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting password form");

    tui::run(&settings)?;
    Ok(())
}
