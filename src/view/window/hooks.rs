//! Notification hooks fired by the main window
//!
//! Hooks are one-way and fire-and-forget: the window invokes them
//! synchronously on the UI thread in response to user interaction, and an
//! unregistered hook is a silent no-op. Hooks that need to inspect the
//! window receive a shared reference to it; the activation hook receives a
//! mutable one so the controller can push its initial state into the
//! widgets.

use super::thumbnails::ThumbnailId;
use super::MainWindow;

/// A window-close veto object. The window creates one per close attempt
/// with `allow` set; the close-request hook may clear it to cancel the
/// close.
#[derive(Debug)]
pub struct CloseRequest {
    pub allow: bool,
}

impl Default for CloseRequest {
    fn default() -> Self {
        Self { allow: true }
    }
}

impl CloseRequest {
    pub fn new() -> Self {
        Self::default()
    }
}

pub(crate) type Hook = Box<dyn FnMut()>;
pub(crate) type ViewHook = Box<dyn FnMut(&MainWindow)>;

/// Registered notification hooks, all optional.
#[derive(Default)]
pub(crate) struct WindowHooks {
    pub application_exit_requested: Option<Hook>,
    pub window_activated: Option<Box<dyn FnMut(&mut MainWindow)>>,
    pub window_minimized: Option<Hook>,
    pub window_close_requested: Option<Box<dyn FnMut(&MainWindow, &mut CloseRequest)>>,
    pub settings_changed: Option<ViewHook>,
    pub thumbnails_size_changed: Option<ViewHook>,
    pub thumbnail_state_changed: Option<Box<dyn FnMut(ThumbnailId)>>,
    pub forum_link_activated: Option<Hook>,
}

impl std::fmt::Debug for WindowHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowHooks")
            .field(
                "application_exit_requested",
                &self.application_exit_requested.is_some(),
            )
            .field("window_activated", &self.window_activated.is_some())
            .field("window_minimized", &self.window_minimized.is_some())
            .field(
                "window_close_requested",
                &self.window_close_requested.is_some(),
            )
            .field("settings_changed", &self.settings_changed.is_some())
            .field(
                "thumbnails_size_changed",
                &self.thumbnails_size_changed.is_some(),
            )
            .field(
                "thumbnail_state_changed",
                &self.thumbnail_state_changed.is_some(),
            )
            .field("forum_link_activated", &self.forum_link_activated.is_some())
            .finish()
    }
}
