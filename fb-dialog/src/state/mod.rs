//! Application state management
//!
//! The page has a single actor, so the server holds one [`ViewState`] behind
//! a lock and every handler moves it forward through [`FbDialogState::dispatch`].

use parking_lot::Mutex;
use std::sync::Arc;

use crate::{
    clipboard::{Clipboard, SystemClipboard},
    config::FbDialogConfig,
    error::FbDialogError,
    oauth2::{copy_credential, Action, ViewState},
};

/// Application state shared by all handlers
///
/// Combines:
/// - Configuration (read-only after startup)
/// - The current view
/// - The clipboard backend used by the copy button
///
/// # Example
///
/// ```rust
/// use fb_dialog::{config::FbDialogConfig, oauth2::Action, state::FbDialogState};
///
/// let state = FbDialogState::new(FbDialogConfig::default());
/// assert!(state.view().is_idle());
///
/// let view = state.dispatch(Action::Reset);
/// assert!(view.is_idle());
/// ```
#[derive(Clone)]
pub struct FbDialogState {
    /// Application configuration
    config: Arc<FbDialogConfig>,

    /// What the page currently shows
    view: Arc<Mutex<ViewState>>,

    /// Where the copy button writes
    clipboard: Arc<Mutex<Box<dyn Clipboard>>>,
}

impl FbDialogState {
    /// Create state backed by the system clipboard
    #[must_use]
    pub fn new(config: FbDialogConfig) -> Self {
        Self::with_clipboard(config, SystemClipboard::new())
    }

    /// Create state with a custom clipboard backend
    ///
    /// # Example
    ///
    /// ```rust
    /// use fb_dialog::{
    ///     clipboard::{Clipboard, ClipboardError},
    ///     config::FbDialogConfig,
    ///     state::FbDialogState,
    /// };
    ///
    /// struct Discard;
    ///
    /// impl Clipboard for Discard {
    ///     fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let state = FbDialogState::with_clipboard(FbDialogConfig::default(), Discard);
    /// # let _ = state;
    /// ```
    #[must_use]
    pub fn with_clipboard(config: FbDialogConfig, clipboard: impl Clipboard + 'static) -> Self {
        Self {
            config: Arc::new(config),
            view: Arc::new(Mutex::new(ViewState::default())),
            clipboard: Arc::new(Mutex::new(Box::new(clipboard))),
        }
    }

    /// Get application configuration
    #[must_use]
    pub fn config(&self) -> &FbDialogConfig {
        &self.config
    }

    /// Snapshot of the current view
    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view.lock().clone()
    }

    /// Apply `action` to the current view and return the result
    pub fn dispatch(&self, action: Action) -> ViewState {
        let mut view = self.view.lock();
        let current = std::mem::take(&mut *view);
        let from = current.name();

        *view = current.update(action, &self.config.facebook.state);
        tracing::debug!(from, to = view.name(), "View updated");

        view.clone()
    }

    /// Copy the held credential to the clipboard
    ///
    /// Clipboard access blocks, so it runs on the blocking pool. A failed
    /// write leaves the view unchanged.
    ///
    /// # Errors
    ///
    /// Returns error if the blocking task panics or is cancelled
    pub async fn copy(&self) -> Result<ViewState, FbDialogError> {
        let view = Arc::clone(&self.view);
        let clipboard = Arc::clone(&self.clipboard);
        let expected_state = self.config.facebook.state.clone();

        let next = tokio::task::spawn_blocking(move || {
            let mut clipboard = clipboard.lock();
            let mut view = view.lock();
            let current = std::mem::take(&mut *view);
            *view = copy_credential(&mut **clipboard, current, &expected_state);
            view.clone()
        })
        .await?;

        Ok(next)
    }
}

impl std::fmt::Debug for FbDialogState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FbDialogState")
            .field("view", &self.view.lock().name())
            .finish_non_exhaustive()
    }
}
