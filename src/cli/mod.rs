//! Non-interactive command-line mode.

mod args;
mod context;
mod prompts;
mod quiet;

use std::process::ExitCode;

pub use args::Args;
pub use context::{CliError, Context};

/// Run CLI mode and map the outcome to a process exit code.
pub fn run(args: Args) -> ExitCode {
    quiet::set(args.quiet);

    let mut ctx = Context::new(args);
    match ctx.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Config(_)) => {
            prompts::no_class_selected();
            ExitCode::from(2)
        }
        Err(CliError::Io(e)) => {
            prompts::error(&format!("Output error: {e}"));
            ExitCode::FAILURE
        }
    }
}
