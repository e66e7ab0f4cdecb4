//! CLI context - bundles arguments, sampler, and clipboard.

use std::io::{self, BufWriter, Write};

use thiserror::Error;
use zeroize::Zeroize;

use super::{Args, prompts};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::entropy::Sampler;
use crate::pass::{self, ConfigError, GenerationConfig, Password};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Application context for CLI mode.
pub struct Context {
    config: GenerationConfig,
    count: usize,
    sampler: Box<dyn Sampler>,
    clipboard: Option<Box<dyn Clipboard>>,
}

impl Context {
    pub fn new(args: Args) -> Self {
        let clipboard = args
            .clipboard
            .then(|| Box::new(SystemClipboard::new()) as Box<dyn Clipboard>);

        let source = args.source();
        tracing::debug!(source = source.name(), "cli context ready");

        Self {
            config: args.config(),
            count: args.number,
            sampler: source.sampler(),
            clipboard,
        }
    }

    /// Generate and emit to stdout (or the clipboard).
    pub fn run(&mut self) -> Result<(), CliError> {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        match self.emit(&mut out).and_then(|()| out.flush().map_err(CliError::from)) {
            Err(CliError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            other => other,
        }
    }

    fn emit<W: Write>(&mut self, out: &mut W) -> Result<(), CliError> {
        let passwords = pass::generate_batch(&self.config, self.count, &mut *self.sampler)?;

        if let Some(clipboard) = self.clipboard.as_mut() {
            let mut joined = join(&passwords);
            let copied = clipboard.write(&joined);
            joined.zeroize();
            match copied {
                Ok(()) => {
                    prompts::clipboard_copied(passwords.len());
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "clipboard write failed");
                    prompts::clipboard_fallback(&e.to_string());
                }
            }
        }

        for password in &passwords {
            out.write_all(password.as_str().as_bytes())?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

fn join(passwords: &[Password]) -> String {
    let mut joined = String::new();
    for (i, password) in passwords.iter().enumerate() {
        if i > 0 {
            joined.push('\n');
        }
        joined.push_str(password.as_str());
    }
    joined
}
