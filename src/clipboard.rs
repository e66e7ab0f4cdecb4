//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use zeroize::Zeroize;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by copypasta. The context is opened on first write.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the context now so callers can detect a missing clipboard up front.
    pub fn open() -> Result<Self, ClipboardError> {
        let ctx = ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { ctx: Some(ctx) })
    }
}

impl Clipboard for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.ctx.is_none() {
            *self = Self::open()?;
        }
        let Some(ctx) = self.ctx.as_mut() else {
            return Err(ClipboardError::Unavailable("no context".into()));
        };

        ctx.set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;

        // Round-trip, then wipe the copy handed back.
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        tracing::debug!(chars = text.chars().count(), "clipboard updated");
        Ok(())
    }
}
