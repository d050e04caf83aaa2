//! Main window facade
//!
//! `MainWindow` exposes the thumbnail manager's settings as typed
//! accessors and forwards user intent to the controller through
//! notification hooks. Widget state is the source of truth for every
//! setting; the facade itself stores nothing besides a cached last-known
//! zoom anchor used as a fast-path lookup.
//!
//! `show` blocks on the terminal event loop for the lifetime of the
//! application. Everything here runs on the one UI thread.

mod input;
mod render;

pub mod hooks;
pub mod thumbnails;

pub use hooks::CloseRequest;
pub use thumbnails::{ThumbnailDescription, ThumbnailId, ThumbnailListState, ThumbnailRef};

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::{DefaultTerminal, Frame};
use serde::{Deserialize, Serialize};

use crate::view::controls::{
    AnchorGridState, FocusState, LinkLabelState, NumberInputState, SliderState, ToggleState,
};
use crate::view::theme::Theme;
use hooks::WindowHooks;
use render::WindowLayouts;

/// Compass position a zoomed thumbnail grows from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomAnchor {
    #[default]
    Nw,
    N,
    Ne,
    W,
    C,
    E,
    Sw,
    S,
    Se,
}

impl ZoomAnchor {
    pub const ALL: [ZoomAnchor; 9] = [
        ZoomAnchor::Nw,
        ZoomAnchor::N,
        ZoomAnchor::Ne,
        ZoomAnchor::W,
        ZoomAnchor::C,
        ZoomAnchor::E,
        ZoomAnchor::Sw,
        ZoomAnchor::S,
        ZoomAnchor::Se,
    ];
}

/// Thumbnail dimensions in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Window presentation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
}

/// Controller-to-view request, usable from inside hooks while the event
/// loop holds the window. Drained once per loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewRequest {
    /// Terminate the event loop
    Exit,
    /// Collapse the window to its minimized placeholder
    Minimize,
}

/// Cloneable handle for enqueueing [`ViewRequest`]s
pub type ViewRequestQueue = Rc<RefCell<VecDeque<ViewRequest>>>;

/// Focusable controls, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusId {
    MinimizeToTray,
    TrackClientLayouts,
    HideActiveClientThumbnail,
    ThumbnailsAlwaysOnTop,
    HideThumbnailsOnLostFocus,
    PerClientLayouts,
    ShowThumbnailOverlays,
    ShowThumbnailFrames,
    ThumbnailWidth,
    ThumbnailHeight,
    ThumbnailsOpacity,
    ThumbnailZoom,
    ThumbnailZoomFactor,
    ZoomAnchorGrid,
    ThumbnailList,
    ForumLink,
}

const FOCUS_ORDER: [FocusId; 16] = [
    FocusId::MinimizeToTray,
    FocusId::TrackClientLayouts,
    FocusId::HideActiveClientThumbnail,
    FocusId::ThumbnailsAlwaysOnTop,
    FocusId::HideThumbnailsOnLostFocus,
    FocusId::PerClientLayouts,
    FocusId::ShowThumbnailOverlays,
    FocusId::ShowThumbnailFrames,
    FocusId::ThumbnailWidth,
    FocusId::ThumbnailHeight,
    FocusId::ThumbnailsOpacity,
    FocusId::ThumbnailZoom,
    FocusId::ThumbnailZoomFactor,
    FocusId::ZoomAnchorGrid,
    FocusId::ThumbnailList,
    FocusId::ForumLink,
];

/// The main settings window
pub struct MainWindow {
    pub(crate) theme: Theme,

    pub(crate) minimize_to_tray_check: ToggleState,
    pub(crate) track_client_layouts_check: ToggleState,
    pub(crate) hide_active_client_thumbnail_check: ToggleState,
    pub(crate) thumbnails_always_on_top_check: ToggleState,
    pub(crate) hide_thumbnails_on_lost_focus_check: ToggleState,
    pub(crate) per_client_layouts_check: ToggleState,
    pub(crate) show_thumbnail_overlays_check: ToggleState,
    pub(crate) show_thumbnail_frames_check: ToggleState,
    pub(crate) thumbnail_zoom_check: ToggleState,

    pub(crate) opacity_slider: SliderState,
    pub(crate) width_input: NumberInputState,
    pub(crate) height_input: NumberInputState,
    pub(crate) zoom_factor_input: NumberInputState,
    pub(crate) anchor_grid: AnchorGridState,
    pub(crate) forum_link_label: LinkLabelState,
    pub(crate) thumbnail_list: ThumbnailListState,

    anchor_map: [(ZoomAnchor, usize); 9],
    cached_zoom_anchor: Cell<ZoomAnchor>,

    pub(crate) suppress_events: bool,
    window_state: WindowState,
    should_close: bool,
    focused: FocusId,

    pub(crate) hooks: WindowHooks,
    requests: ViewRequestQueue,
    pub(crate) layouts: WindowLayouts,
}

impl MainWindow {
    pub fn new(theme: Theme) -> Self {
        // Row-major over the 3x3 grid, matching ZoomAnchor::ALL.
        let mut anchor_map = [(ZoomAnchor::Nw, 0); 9];
        for (cell, anchor) in ZoomAnchor::ALL.into_iter().enumerate() {
            anchor_map[cell] = (anchor, cell);
        }

        let mut window = Self {
            theme,
            minimize_to_tray_check: ToggleState::new("Minimize to tray", false),
            track_client_layouts_check: ToggleState::new("Track client layouts", true),
            hide_active_client_thumbnail_check: ToggleState::new(
                "Hide active client thumbnail",
                false,
            ),
            thumbnails_always_on_top_check: ToggleState::new("Always on top", true),
            hide_thumbnails_on_lost_focus_check: ToggleState::new(
                "Hide when clients lose focus",
                false,
            ),
            per_client_layouts_check: ToggleState::new("Per-client layouts", false),
            show_thumbnail_overlays_check: ToggleState::new("Show overlays", true),
            show_thumbnail_frames_check: ToggleState::new("Show frames", false),
            thumbnail_zoom_check: ToggleState::new("Zoom on hover", false),
            opacity_slider: SliderState::new("Opacity", 100, 0, 100).with_step(5),
            width_input: NumberInputState::new("Width ", 192).with_step(16),
            height_input: NumberInputState::new("Height", 108).with_step(16),
            zoom_factor_input: NumberInputState::new("Factor", 2).with_bounds(2, 10),
            anchor_grid: AnchorGridState::default(),
            forum_link_label: LinkLabelState::default(),
            thumbnail_list: ThumbnailListState::default(),
            anchor_map,
            cached_zoom_anchor: Cell::new(ZoomAnchor::Nw),
            suppress_events: false,
            window_state: WindowState::Normal,
            should_close: false,
            focused: FocusId::MinimizeToTray,
            hooks: WindowHooks::default(),
            requests: Rc::new(RefCell::new(VecDeque::new())),
            layouts: WindowLayouts::default(),
        };
        window.sync_focus();
        window
    }

    // ---- settings accessors ------------------------------------------------

    pub fn minimize_to_tray(&self) -> bool {
        self.minimize_to_tray_check.checked
    }

    pub fn set_minimize_to_tray(&mut self, value: bool) {
        self.minimize_to_tray_check.set_checked(value);
    }

    pub fn track_client_layouts(&self) -> bool {
        self.track_client_layouts_check.checked
    }

    pub fn set_track_client_layouts(&mut self, value: bool) {
        self.track_client_layouts_check.set_checked(value);
    }

    pub fn hide_active_client_thumbnail(&self) -> bool {
        self.hide_active_client_thumbnail_check.checked
    }

    pub fn set_hide_active_client_thumbnail(&mut self, value: bool) {
        self.hide_active_client_thumbnail_check.set_checked(value);
    }

    pub fn thumbnails_always_on_top(&self) -> bool {
        self.thumbnails_always_on_top_check.checked
    }

    pub fn set_thumbnails_always_on_top(&mut self, value: bool) {
        self.thumbnails_always_on_top_check.set_checked(value);
    }

    pub fn hide_thumbnails_on_lost_focus(&self) -> bool {
        self.hide_thumbnails_on_lost_focus_check.checked
    }

    pub fn set_hide_thumbnails_on_lost_focus(&mut self, value: bool) {
        self.hide_thumbnails_on_lost_focus_check.set_checked(value);
    }

    pub fn per_client_layouts(&self) -> bool {
        self.per_client_layouts_check.checked
    }

    pub fn set_per_client_layouts(&mut self, value: bool) {
        self.per_client_layouts_check.set_checked(value);
    }

    pub fn show_thumbnail_overlays(&self) -> bool {
        self.show_thumbnail_overlays_check.checked
    }

    pub fn set_show_thumbnail_overlays(&mut self, value: bool) {
        self.show_thumbnail_overlays_check.set_checked(value);
    }

    pub fn show_thumbnail_frames(&self) -> bool {
        self.show_thumbnail_frames_check.checked
    }

    pub fn set_show_thumbnail_frames(&mut self, value: bool) {
        self.show_thumbnail_frames_check.set_checked(value);
    }

    /// Thumbnail opacity as a fraction in `0.0..=1.0`. The widget stores
    /// integer percent.
    pub fn thumbnails_opacity(&self) -> f64 {
        (self.opacity_slider.value as f64 / 100.0).min(1.0)
    }

    pub fn set_thumbnails_opacity(&mut self, value: f64) {
        self.opacity_slider.set_value(((100.0 * value) as i64).min(100));
    }

    pub fn thumbnail_size(&self) -> PixelSize {
        PixelSize::new(self.width_input.value as u32, self.height_input.value as u32)
    }

    pub fn set_thumbnail_size(&mut self, size: PixelSize) {
        self.width_input.set_value(size.width as i64);
        self.height_input.set_value(size.height as i64);
    }

    pub fn thumbnail_zoom_enabled(&self) -> bool {
        self.thumbnail_zoom_check.checked
    }

    /// Enables or disables hover zoom and refreshes the dependent
    /// controls.
    pub fn set_thumbnail_zoom_enabled(&mut self, value: bool) {
        self.thumbnail_zoom_check.set_checked(value);
        self.refresh_zoom_settings();
    }

    pub fn thumbnail_zoom_factor(&self) -> i64 {
        self.zoom_factor_input.value
    }

    pub fn set_thumbnail_zoom_factor(&mut self, value: i64) {
        self.zoom_factor_input.set_value(value);
    }

    /// Current zoom anchor, resolved from the grid cells.
    ///
    /// The cached anchor is checked first so the common case is a single
    /// lookup. When the cache misses, the map is scanned in fixed order and
    /// the first checked cell wins; with no checked cell at all the
    /// north-west anchor is reported.
    pub fn thumbnail_zoom_anchor(&self) -> ZoomAnchor {
        let cached = self.cached_zoom_anchor.get();
        if self.anchor_grid.is_checked(self.anchor_cell(cached)) {
            return cached;
        }
        for (anchor, cell) in self.anchor_map {
            if self.anchor_grid.is_checked(cell) {
                self.cached_zoom_anchor.set(anchor);
                return anchor;
            }
        }
        ZoomAnchor::Nw
    }

    /// Writes the cache, then selects the matching cell. Unchecking the
    /// other cells is the grid's job.
    pub fn set_thumbnail_zoom_anchor(&mut self, anchor: ZoomAnchor) {
        self.cached_zoom_anchor.set(anchor);
        self.anchor_grid.select(self.anchor_cell(anchor));
    }

    fn anchor_cell(&self, anchor: ZoomAnchor) -> usize {
        self.anchor_map
            .iter()
            .find(|(candidate, _)| *candidate == anchor)
            .map(|(_, cell)| *cell)
            .unwrap_or(0)
    }

    // ---- bounds and cosmetics ----------------------------------------------

    /// Set min/max bounds on the width and height inputs. Componentwise
    /// `min <= max` is the caller's responsibility.
    pub fn set_thumbnail_size_limitations(&mut self, min: PixelSize, max: PixelSize) {
        self.width_input.set_bounds(min.width as i64, max.width as i64);
        self.height_input.set_bounds(min.height as i64, max.height as i64);
    }

    pub fn set_forum_url(&mut self, url: impl Into<String>) {
        self.forum_link_label.set_text(url);
    }

    pub fn forum_url(&self) -> &str {
        &self.forum_link_label.text
    }

    /// Enable or disable the zoom factor input and the anchor grid as a
    /// unit, driven by the zoom toggle.
    pub fn refresh_zoom_settings(&mut self) {
        let focus = if self.thumbnail_zoom_check.checked {
            FocusState::Normal
        } else {
            FocusState::Disabled
        };
        self.zoom_factor_input.focus = focus;
        self.anchor_grid.focus = focus;
        self.sync_focus();
    }

    // ---- thumbnail collection ----------------------------------------------

    pub fn add_thumbnails(&mut self, thumbnails: &[ThumbnailRef]) {
        self.thumbnail_list.add(thumbnails);
    }

    pub fn update_thumbnails(&mut self, thumbnails: &[ThumbnailRef]) {
        self.thumbnail_list.update(thumbnails);
    }

    pub fn remove_thumbnails(&mut self, thumbnails: &[ThumbnailRef]) {
        self.thumbnail_list.remove(thumbnails);
    }

    // ---- lifecycle ---------------------------------------------------------

    /// Take over the terminal and run the event loop. Does not return
    /// until a close is allowed or the controller requests exit.
    pub fn show(&mut self) -> io::Result<()> {
        let mut terminal = ratatui::init();
        let _ = execute!(io::stdout(), EnableMouseCapture);
        self.activate();
        let result = self.run_event_loop(&mut terminal);
        let _ = execute!(io::stdout(), DisableMouseCapture);
        ratatui::restore();
        result
    }

    /// Run the activation sequence with settings-change notifications
    /// suppressed, so the controller's widget initialization is not
    /// reported back to it as user edits. `show` calls this before
    /// entering the event loop; embedders driving the window manually can
    /// call it themselves.
    pub fn activate(&mut self) {
        self.suppress_events = true;
        self.fire_window_activated();
        self.refresh_zoom_settings();
        self.suppress_events = false;
    }

    fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        loop {
            self.drain_requests();
            if self.should_close {
                return Ok(());
            }
            terminal.draw(|frame| render::draw(frame, self))?;
            let event = crossterm::event::read()?;
            self.handle_event(event);
        }
    }

    /// Render one frame. Also records the hit-test layouts used by mouse
    /// dispatch.
    pub fn draw(&mut self, frame: &mut Frame) {
        render::draw(frame, self);
    }

    /// Force the window into its minimized placeholder state.
    pub fn minimize(&mut self) {
        if self.window_state != WindowState::Minimized {
            self.window_state = WindowState::Minimized;
            self.fire_window_minimized();
        }
    }

    pub(crate) fn restore(&mut self) {
        self.window_state = WindowState::Normal;
    }

    pub fn window_state(&self) -> WindowState {
        self.window_state
    }

    /// True once a close was allowed or an exit request was drained.
    pub fn is_closing(&self) -> bool {
        self.should_close
    }

    /// Handle for enqueueing controller-to-view requests.
    pub fn request_queue(&self) -> ViewRequestQueue {
        Rc::clone(&self.requests)
    }

    pub(crate) fn drain_requests(&mut self) {
        loop {
            let request = self.requests.borrow_mut().pop_front();
            match request {
                Some(ViewRequest::Exit) => self.should_close = true,
                Some(ViewRequest::Minimize) => self.minimize(),
                None => return,
            }
        }
    }

    // ---- hook registration -------------------------------------------------

    pub fn on_application_exit_requested(&mut self, hook: impl FnMut() + 'static) {
        self.hooks.application_exit_requested = Some(Box::new(hook));
    }

    pub fn on_window_activated(&mut self, hook: impl FnMut(&mut MainWindow) + 'static) {
        self.hooks.window_activated = Some(Box::new(hook));
    }

    pub fn on_window_minimized(&mut self, hook: impl FnMut() + 'static) {
        self.hooks.window_minimized = Some(Box::new(hook));
    }

    pub fn on_window_close_requested(
        &mut self,
        hook: impl FnMut(&MainWindow, &mut CloseRequest) + 'static,
    ) {
        self.hooks.window_close_requested = Some(Box::new(hook));
    }

    pub fn on_settings_changed(&mut self, hook: impl FnMut(&MainWindow) + 'static) {
        self.hooks.settings_changed = Some(Box::new(hook));
    }

    pub fn on_thumbnails_size_changed(&mut self, hook: impl FnMut(&MainWindow) + 'static) {
        self.hooks.thumbnails_size_changed = Some(Box::new(hook));
    }

    pub fn on_thumbnail_state_changed(&mut self, hook: impl FnMut(ThumbnailId) + 'static) {
        self.hooks.thumbnail_state_changed = Some(Box::new(hook));
    }

    pub fn on_forum_link_activated(&mut self, hook: impl FnMut() + 'static) {
        self.hooks.forum_link_activated = Some(Box::new(hook));
    }

    // ---- hook firing -------------------------------------------------------
    //
    // Hooks that inspect the window are temporarily taken out of their
    // slot so the window can be passed to them without aliasing.

    pub(crate) fn fire_settings_changed(&mut self) {
        if self.suppress_events {
            return;
        }
        if let Some(mut hook) = self.hooks.settings_changed.take() {
            hook(self);
            self.hooks.settings_changed = Some(hook);
        }
    }

    pub(crate) fn fire_thumbnails_size_changed(&mut self) {
        if self.suppress_events {
            return;
        }
        if let Some(mut hook) = self.hooks.thumbnails_size_changed.take() {
            hook(self);
            self.hooks.thumbnails_size_changed = Some(hook);
        }
    }

    fn fire_window_activated(&mut self) {
        if let Some(mut hook) = self.hooks.window_activated.take() {
            hook(self);
            self.hooks.window_activated = Some(hook);
        }
    }

    pub(crate) fn fire_window_minimized(&mut self) {
        if let Some(hook) = self.hooks.window_minimized.as_mut() {
            hook();
        }
    }

    pub(crate) fn fire_application_exit_requested(&mut self) {
        if let Some(hook) = self.hooks.application_exit_requested.as_mut() {
            hook();
        }
    }

    pub(crate) fn fire_thumbnail_state_changed(&mut self, id: ThumbnailId) {
        if let Some(hook) = self.hooks.thumbnail_state_changed.as_mut() {
            hook(id);
        }
    }

    pub(crate) fn fire_forum_link_activated(&mut self) {
        if let Some(hook) = self.hooks.forum_link_activated.as_mut() {
            hook();
        }
    }

    /// Run the close-veto protocol. The window closes unless a registered
    /// hook clears the request.
    pub(crate) fn request_close(&mut self) {
        let mut request = CloseRequest::new();
        if let Some(mut hook) = self.hooks.window_close_requested.take() {
            hook(self, &mut request);
            self.hooks.window_close_requested = Some(hook);
        }
        if request.allow {
            self.should_close = true;
        }
    }

    // ---- focus management --------------------------------------------------

    pub fn focused(&self) -> FocusId {
        self.focused
    }

    fn focus_disabled(&self, id: FocusId) -> bool {
        matches!(id, FocusId::ThumbnailZoomFactor | FocusId::ZoomAnchorGrid)
            && !self.thumbnail_zoom_check.checked
    }

    pub(crate) fn focus_next(&mut self) {
        self.focused = self.step_focus(1);
        self.sync_focus();
    }

    pub(crate) fn focus_previous(&mut self) {
        self.focused = self.step_focus(FOCUS_ORDER.len() - 1);
        self.sync_focus();
    }

    pub(crate) fn focus(&mut self, id: FocusId) {
        if !self.focus_disabled(id) {
            self.focused = id;
        }
        self.sync_focus();
    }

    fn step_focus(&self, step: usize) -> FocusId {
        let start = FOCUS_ORDER
            .iter()
            .position(|id| *id == self.focused)
            .unwrap_or(0);
        let mut position = start;
        for _ in 0..FOCUS_ORDER.len() {
            position = (position + step) % FOCUS_ORDER.len();
            if !self.focus_disabled(FOCUS_ORDER[position]) {
                return FOCUS_ORDER[position];
            }
        }
        self.focused
    }

    /// Reapply per-widget focus states after any focus or enablement
    /// change.
    pub(crate) fn sync_focus(&mut self) {
        if self.focus_disabled(self.focused) {
            self.focused = self.step_focus(1);
        }
        for id in FOCUS_ORDER {
            let focus = if self.focus_disabled(id) {
                FocusState::Disabled
            } else if id == self.focused {
                FocusState::Focused
            } else {
                FocusState::Normal
            };
            self.apply_focus(id, focus);
        }
    }

    fn apply_focus(&mut self, id: FocusId, focus: FocusState) {
        match id {
            FocusId::MinimizeToTray => self.minimize_to_tray_check.focus = focus,
            FocusId::TrackClientLayouts => self.track_client_layouts_check.focus = focus,
            FocusId::HideActiveClientThumbnail => {
                self.hide_active_client_thumbnail_check.focus = focus;
            }
            FocusId::ThumbnailsAlwaysOnTop => self.thumbnails_always_on_top_check.focus = focus,
            FocusId::HideThumbnailsOnLostFocus => {
                self.hide_thumbnails_on_lost_focus_check.focus = focus;
            }
            FocusId::PerClientLayouts => self.per_client_layouts_check.focus = focus,
            FocusId::ShowThumbnailOverlays => self.show_thumbnail_overlays_check.focus = focus,
            FocusId::ShowThumbnailFrames => self.show_thumbnail_frames_check.focus = focus,
            FocusId::ThumbnailWidth => self.width_input.focus = focus,
            FocusId::ThumbnailHeight => self.height_input.focus = focus,
            FocusId::ThumbnailsOpacity => self.opacity_slider.focus = focus,
            FocusId::ThumbnailZoom => self.thumbnail_zoom_check.focus = focus,
            FocusId::ThumbnailZoomFactor => self.zoom_factor_input.focus = focus,
            FocusId::ZoomAnchorGrid => self.anchor_grid.focus = focus,
            FocusId::ThumbnailList => self.thumbnail_list.focus = focus,
            FocusId::ForumLink => self.forum_link_label.focus = focus,
        }
    }

    // ---- read access for consumers and tests -------------------------------

    pub fn anchor_grid(&self) -> &AnchorGridState {
        &self.anchor_grid
    }

    pub fn thumbnail_list(&self) -> &ThumbnailListState {
        &self.thumbnail_list
    }

    pub fn zoom_factor_input(&self) -> &NumberInputState {
        &self.zoom_factor_input
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}
