use std::process;

use clap::Parser;

use scriptboard::cli::{self, Cli, Command};
use scriptboard::config::Config;
use scriptboard::{logging, tui};

fn main() {
    let args = Cli::parse();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            process::exit(1);
        }
    };

    let locale = match config.resolve_locale(args.locale.map(cli::LocaleArg::to_domain)) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let result = match args.command {
        None | Some(Command::Board) => {
            // Held until the board closes so buffered events reach the file.
            let _guard = config
                .log_dir()
                .and_then(|dir| logging::init_file(&config.logging, &dir));
            tui::run(locale).map_err(|e| e.to_string())
        }
        Some(command) => {
            logging::init_stderr(&config.logging);
            cli::run(command, locale)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
