use std::env;
use std::process::ExitCode;

use clap::Parser;

use passgen::cli::{self, Args};
use passgen::{exits, logging, tui};

fn main() -> ExitCode {
    exits::install_handlers();
    exits::disable_core_dumps();

    let args = Args::parse();
    logging::init(args.quiet);

    if env::args_os().len() == 1 || args.interactive {
        return match tui::run(args.config(), args.source()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(error = %e, "interactive mode failed");
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    cli::run(args)
}
