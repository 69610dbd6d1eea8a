//! System clipboard access
//!
//! The page's copy button writes the credential to the clipboard of the
//! machine running the server, which for this tool is the user's own
//! machine. Access goes through the [`Clipboard`] trait so handlers and tests
//! can swap the backend.

/// Clipboard errors
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard could be opened (headless host, missing display)
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard rejected the write
    #[error("Failed to write to clipboard: {0}")]
    Write(String),
}

/// Destination for copied text
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send {
    /// Replace the clipboard contents with `text`
    ///
    /// # Errors
    ///
    /// Returns error if the clipboard cannot be opened or written
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by the operating system via `arboard`
///
/// The handle is opened lazily on first use and kept alive afterwards; on
/// X11 and Wayland the copied text only survives as long as its owner does.
/// A long-running server owns it for its lifetime; a short-lived process
/// should use [`SystemClipboard::persistent`].
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    hold_until_replaced: bool,
}

impl SystemClipboard {
    /// Create a clipboard that opens the system handle on first write
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: None,
            hold_until_replaced: false,
        }
    }

    /// Create a clipboard whose writes block until another application
    /// takes over the selection (a clipboard manager, or the next copy)
    ///
    /// On Linux the process owns the copied text, so a command that exits
    /// right after copying would take the text with it. Elsewhere this is
    /// the same as [`SystemClipboard::new`].
    #[must_use]
    pub const fn persistent() -> Self {
        Self {
            inner: None,
            hold_until_replaced: true,
        }
    }

    /// Whether writes block until the selection is taken over
    #[must_use]
    pub const fn holds_until_replaced(&self) -> bool {
        self.hold_until_replaced && cfg!(target_os = "linux")
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard handle missing".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    #[cfg(target_os = "linux")]
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        use arboard::SetExtLinux;

        let wait = self.hold_until_replaced;
        let set = self.handle()?.set();
        let set = if wait { set.wait() } else { set };
        set.text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }

    #[cfg(not(target_os = "linux"))]
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.inner.is_some())
            .field("hold_until_replaced", &self.hold_until_replaced)
            .finish()
    }
}
