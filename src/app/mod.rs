//! Application controller
//!
//! The in-process consumer of the main window facade. Owns the client
//! thumbnail descriptors, registers the notification hooks, and decides
//! what close and exit requests mean. Reactions that must mutate the
//! window from inside a hook go through the view request queue, which the
//! event loop drains once per iteration.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};

use crate::config::{Config, ViewDefaults};
use crate::view::theme::Theme;
use crate::view::window::{
    MainWindow, ThumbnailDescription, ThumbnailId, ThumbnailRef, ViewRequest,
};

/// Controller-owned descriptor of one tracked client window
pub struct ClientThumbnail {
    title: String,
    id: ThumbnailId,
    disabled: bool,
}

impl ClientThumbnail {
    pub fn new(title: impl Into<String>, id: ThumbnailId) -> Self {
        Self {
            title: title.into(),
            id,
            disabled: false,
        }
    }

    pub fn into_ref(self) -> ThumbnailRef {
        Rc::new(RefCell::new(self))
    }
}

impl ThumbnailDescription for ClientThumbnail {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn id(&self) -> ThumbnailId {
        self.id
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

/// The application: a main window plus the hook wiring around it
pub struct App {
    window: MainWindow,
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        let window = MainWindow::new(Theme::by_name(&config.theme));
        Self { window, config }
    }

    /// Wire the hooks and block on the window's event loop until the user
    /// closes the window or requests exit.
    pub fn run(mut self) -> Result<()> {
        self.wire_hooks();
        self.window.show().context("terminal event loop failed")
    }

    fn wire_hooks(&mut self) {
        let requests = self.window.request_queue();

        // Activation pushes the configured state into the widgets and
        // registers the startup client roster. Settings-change
        // notifications are suppressed for its duration.
        let clients: Vec<ThumbnailRef> = self
            .config
            .clients
            .iter()
            .enumerate()
            .map(|(index, title)| {
                ClientThumbnail::new(title.clone(), ThumbnailId(index as u64 + 1)).into_ref()
            })
            .collect();
        {
            let defaults = self.config.defaults.clone();
            let min = self.config.min_thumbnail_size;
            let max = self.config.max_thumbnail_size;
            let forum_url = self.config.forum_url.clone();
            self.window.on_window_activated(move |view| {
                view.set_thumbnail_size_limitations(min, max);
                view.set_forum_url(forum_url.clone());
                apply_defaults(view, &defaults);
                view.add_thumbnails(&clients);
                tracing::info!(clients = clients.len(), "window activated");
            });
        }

        {
            let requests = Rc::clone(&requests);
            self.window.on_application_exit_requested(move || {
                tracing::info!("application exit requested");
                requests.borrow_mut().push_back(ViewRequest::Exit);
            });
        }

        {
            let requests = Rc::clone(&requests);
            self.window.on_window_close_requested(move |view, request| {
                if view.minimize_to_tray() {
                    request.allow = false;
                    requests.borrow_mut().push_back(ViewRequest::Minimize);
                    tracing::debug!("close vetoed, minimizing instead");
                } else {
                    tracing::info!("window closing");
                }
            });
        }

        self.window
            .on_window_minimized(|| tracing::debug!("window minimized"));

        self.window.on_settings_changed(|view| {
            tracing::debug!(
                minimize_to_tray = view.minimize_to_tray(),
                track_client_layouts = view.track_client_layouts(),
                always_on_top = view.thumbnails_always_on_top(),
                opacity = view.thumbnails_opacity(),
                zoom = view.thumbnail_zoom_enabled(),
                zoom_factor = view.thumbnail_zoom_factor(),
                zoom_anchor = ?view.thumbnail_zoom_anchor(),
                "settings changed"
            );
        });

        self.window.on_thumbnails_size_changed(|view| {
            let size = view.thumbnail_size();
            tracing::debug!(width = size.width, height = size.height, "thumbnail size changed");
        });

        self.window
            .on_thumbnail_state_changed(|id| tracing::info!(%id, "thumbnail toggled"));

        {
            let url = self.config.forum_url.clone();
            self.window
                .on_forum_link_activated(move || tracing::info!(url = %url, "forum link activated"));
        }
    }
}

fn apply_defaults(view: &mut MainWindow, defaults: &ViewDefaults) {
    view.set_minimize_to_tray(defaults.minimize_to_tray);
    view.set_track_client_layouts(defaults.track_client_layouts);
    view.set_hide_active_client_thumbnail(defaults.hide_active_client_thumbnail);
    view.set_thumbnails_always_on_top(defaults.thumbnails_always_on_top);
    view.set_hide_thumbnails_on_lost_focus(defaults.hide_thumbnails_on_lost_focus);
    view.set_per_client_layouts(defaults.per_client_layouts);
    view.set_show_thumbnail_overlays(defaults.show_thumbnail_overlays);
    view.set_show_thumbnail_frames(defaults.show_thumbnail_frames);
    view.set_thumbnails_opacity(defaults.thumbnails_opacity);
    view.set_thumbnail_size(defaults.thumbnail_size);
    view.set_thumbnail_zoom_enabled(defaults.enable_thumbnail_zoom);
    view.set_thumbnail_zoom_factor(defaults.thumbnail_zoom_factor);
    view.set_thumbnail_zoom_anchor(defaults.thumbnail_zoom_anchor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use crate::view::window::{PixelSize, WindowState, ZoomAnchor};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn wired_app(config: Config) -> App {
        let mut app = App::new(config);
        app.wire_hooks();
        app.window.activate();
        app
    }

    #[test]
    fn activation_applies_config_to_the_window() {
        let config = Config {
            clients: vec!["Alpha".to_string(), "Beta".to_string()],
            forum_url: "https://example.org/board".to_string(),
            defaults: ViewDefaults {
                thumbnails_opacity: 0.5,
                thumbnail_zoom_anchor: ZoomAnchor::C,
                enable_thumbnail_zoom: true,
                ..ViewDefaults::default()
            },
            ..Config::default()
        };
        let app = wired_app(config);

        assert_eq!(app.window.thumbnail_list().len(), 2);
        assert_eq!(app.window.forum_url(), "https://example.org/board");
        assert!((app.window.thumbnails_opacity() - 0.5).abs() < 1e-9);
        assert_eq!(app.window.thumbnail_zoom_anchor(), ZoomAnchor::C);
        assert!(app.window.thumbnail_zoom_enabled());
    }

    #[test]
    fn size_limitations_bound_later_writes() {
        let config = Config {
            min_thumbnail_size: PixelSize::new(100, 100),
            max_thumbnail_size: PixelSize::new(200, 200),
            ..Config::default()
        };
        let mut app = wired_app(config);
        app.window.set_thumbnail_size(PixelSize::new(5000, 50));
        assert_eq!(app.window.thumbnail_size(), PixelSize::new(200, 100));
    }

    #[test]
    fn close_with_tray_enabled_minimizes_instead() {
        let mut app = wired_app(Config::default());
        app.window.set_minimize_to_tray(true);
        app.window.handle_event(key(KeyCode::Esc));
        assert!(!app.window.is_closing());
        app.window.drain_requests();
        assert_eq!(app.window.window_state(), WindowState::Minimized);
    }

    #[test]
    fn close_without_tray_is_allowed() {
        let mut app = wired_app(Config::default());
        app.window.handle_event(key(KeyCode::Esc));
        assert!(app.window.is_closing());
    }

    #[test]
    fn exit_request_terminates_after_drain() {
        let mut app = wired_app(Config::default());
        app.window
            .handle_event(Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)));
        assert!(!app.window.is_closing());
        app.window.drain_requests();
        assert!(app.window.is_closing());
    }
}
