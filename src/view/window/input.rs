//! Event dispatch for the main window
//!
//! Translates crossterm key and mouse events into widget mutations and
//! notification hooks. User edits fire the settings hooks; programmatic
//! writes through the accessors never come through here, so they stay
//! silent.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::view::controls::{rect_contains, FocusState, NumberInputState};

use super::{FocusId, MainWindow, WindowState};

impl MainWindow {
    /// Dispatch one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.window_state() == WindowState::Minimized {
            self.restore();
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                self.fire_application_exit_requested();
                return;
            }
            (KeyCode::Char('m'), KeyModifiers::CONTROL) => {
                self.minimize();
                return;
            }
            _ => {}
        }

        if self.handle_numeric_editing(key.code) {
            return;
        }

        match key.code {
            KeyCode::Esc => self.request_close(),
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_previous(),
            KeyCode::Up => match self.focused {
                FocusId::ThumbnailList => self.thumbnail_list.select_previous(),
                FocusId::ZoomAnchorGrid => self.anchor_grid.arm_up(),
                _ => self.focus_previous(),
            },
            KeyCode::Down => match self.focused {
                FocusId::ThumbnailList => self.thumbnail_list.select_next(),
                FocusId::ZoomAnchorGrid => self.anchor_grid.arm_down(),
                _ => self.focus_next(),
            },
            KeyCode::Left | KeyCode::Char('-') => self.adjust_focused(-1),
            KeyCode::Right | KeyCode::Char('+') => self.adjust_focused(1),
            KeyCode::Char(' ') | KeyCode::Enter => self.activate_focused(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(input) = self.focused_number_input_mut() {
                    input.start_editing();
                    input.insert_char(c);
                }
            }
            _ => {}
        }
    }

    /// Route keys to an in-progress numeric edit. Returns true when the
    /// key was consumed.
    fn handle_numeric_editing(&mut self, code: KeyCode) -> bool {
        let editing = self
            .focused_number_input()
            .map(|input| input.editing)
            .unwrap_or(false);
        if !editing {
            return false;
        }

        match code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(input) = self.focused_number_input_mut() {
                    input.insert_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = self.focused_number_input_mut() {
                    input.backspace();
                }
            }
            KeyCode::Enter => {
                let mut changed = false;
                if let Some(input) = self.focused_number_input_mut() {
                    let before = input.value;
                    input.confirm_editing();
                    changed = input.value != before;
                }
                if changed {
                    self.fire_focused_numeric_changed();
                }
            }
            KeyCode::Esc => {
                if let Some(input) = self.focused_number_input_mut() {
                    input.cancel_editing();
                }
            }
            _ => {}
        }
        true
    }

    fn focused_number_input(&self) -> Option<&NumberInputState> {
        match self.focused {
            FocusId::ThumbnailWidth => Some(&self.width_input),
            FocusId::ThumbnailHeight => Some(&self.height_input),
            FocusId::ThumbnailZoomFactor => Some(&self.zoom_factor_input),
            _ => None,
        }
    }

    fn focused_number_input_mut(&mut self) -> Option<&mut NumberInputState> {
        match self.focused {
            FocusId::ThumbnailWidth => Some(&mut self.width_input),
            FocusId::ThumbnailHeight => Some(&mut self.height_input),
            FocusId::ThumbnailZoomFactor => Some(&mut self.zoom_factor_input),
            _ => None,
        }
    }

    /// Width and height edits report a size change, every other numeric
    /// edit is a plain settings change.
    fn fire_focused_numeric_changed(&mut self) {
        match self.focused {
            FocusId::ThumbnailWidth | FocusId::ThumbnailHeight => {
                self.fire_thumbnails_size_changed();
            }
            _ => self.fire_settings_changed(),
        }
    }

    /// Step the focused control. Hooks fire only when the value actually
    /// moved, mirroring change events of widgets pinned at a bound.
    fn adjust_focused(&mut self, delta: i64) {
        match self.focused {
            FocusId::ThumbnailWidth | FocusId::ThumbnailHeight | FocusId::ThumbnailZoomFactor => {
                let mut changed = false;
                if let Some(input) = self.focused_number_input_mut() {
                    let before = input.value;
                    if delta < 0 {
                        input.decrement();
                    } else {
                        input.increment();
                    }
                    changed = input.value != before;
                }
                if changed {
                    self.fire_focused_numeric_changed();
                }
            }
            FocusId::ThumbnailsOpacity => {
                let before = self.opacity_slider.value;
                if delta < 0 {
                    self.opacity_slider.decrement();
                } else {
                    self.opacity_slider.increment();
                }
                if self.opacity_slider.value != before {
                    self.fire_settings_changed();
                }
            }
            FocusId::ZoomAnchorGrid => {
                if delta < 0 {
                    self.anchor_grid.arm_left();
                } else {
                    self.anchor_grid.arm_right();
                }
            }
            _ => {}
        }
    }

    fn activate_focused(&mut self) {
        match self.focused {
            FocusId::MinimizeToTray
            | FocusId::TrackClientLayouts
            | FocusId::HideActiveClientThumbnail
            | FocusId::ThumbnailsAlwaysOnTop
            | FocusId::HideThumbnailsOnLostFocus
            | FocusId::PerClientLayouts
            | FocusId::ShowThumbnailOverlays
            | FocusId::ShowThumbnailFrames
            | FocusId::ThumbnailZoom => self.toggle_setting(self.focused),
            FocusId::ThumbnailWidth | FocusId::ThumbnailHeight | FocusId::ThumbnailZoomFactor => {
                if let Some(input) = self.focused_number_input_mut() {
                    input.start_editing();
                }
            }
            FocusId::ZoomAnchorGrid => {
                let changed = !self.anchor_grid.is_checked(self.anchor_grid.armed);
                self.anchor_grid.select_armed();
                if changed {
                    self.fire_settings_changed();
                }
            }
            FocusId::ThumbnailList => {
                if let Some(id) = self.thumbnail_list.toggle_selected() {
                    self.fire_thumbnail_state_changed(id);
                }
            }
            FocusId::ForumLink => self.fire_forum_link_activated(),
            FocusId::ThumbnailsOpacity => {}
        }
    }

    fn toggle_setting(&mut self, id: FocusId) {
        let toggle = match id {
            FocusId::MinimizeToTray => &mut self.minimize_to_tray_check,
            FocusId::TrackClientLayouts => &mut self.track_client_layouts_check,
            FocusId::HideActiveClientThumbnail => &mut self.hide_active_client_thumbnail_check,
            FocusId::ThumbnailsAlwaysOnTop => &mut self.thumbnails_always_on_top_check,
            FocusId::HideThumbnailsOnLostFocus => &mut self.hide_thumbnails_on_lost_focus_check,
            FocusId::PerClientLayouts => &mut self.per_client_layouts_check,
            FocusId::ShowThumbnailOverlays => &mut self.show_thumbnail_overlays_check,
            FocusId::ShowThumbnailFrames => &mut self.show_thumbnail_frames_check,
            FocusId::ThumbnailZoom => &mut self.thumbnail_zoom_check,
            _ => return,
        };
        if toggle.focus == FocusState::Disabled {
            return;
        }
        toggle.toggle();
        if id == FocusId::ThumbnailZoom {
            self.refresh_zoom_settings();
        }
        self.fire_settings_changed();
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.window_state() == WindowState::Minimized {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                self.restore();
            }
            return;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            MouseEventKind::ScrollUp => self.handle_scroll(mouse.column, mouse.row, 1),
            MouseEventKind::ScrollDown => self.handle_scroll(mouse.column, mouse.row, -1),
            _ => {}
        }
    }

    fn handle_click(&mut self, x: u16, y: u16) {
        let layouts = self.layouts.clone();

        for (id, layout) in &layouts.toggles {
            if layout.contains(x, y) {
                self.focus(*id);
                self.toggle_setting(*id);
                return;
            }
        }

        let numerics = [
            (FocusId::ThumbnailWidth, layouts.width),
            (FocusId::ThumbnailHeight, layouts.height),
            (FocusId::ThumbnailZoomFactor, layouts.zoom_factor),
        ];
        for (id, layout) in numerics {
            if self.focus_disabled(id) {
                continue;
            }
            if layout.is_decrement(x, y) {
                self.focus(id);
                self.adjust_focused(-1);
                return;
            }
            if layout.is_increment(x, y) {
                self.focus(id);
                self.adjust_focused(1);
                return;
            }
            if layout.contains(x, y) {
                self.focus(id);
                return;
            }
        }

        if layouts.opacity.contains(x, y) {
            self.focus(FocusId::ThumbnailsOpacity);
            let (min, max) = (self.opacity_slider.min, self.opacity_slider.max);
            if let Some(value) = layouts.opacity.value_at(x, min, max) {
                let before = self.opacity_slider.value;
                self.opacity_slider.set_value(value);
                if self.opacity_slider.value != before {
                    self.fire_settings_changed();
                }
            }
            return;
        }

        if !self.focus_disabled(FocusId::ZoomAnchorGrid) {
            if let Some(cell) = layouts.anchor_grid.cell_at(x, y) {
                self.focus(FocusId::ZoomAnchorGrid);
                let changed = !self.anchor_grid.is_checked(cell);
                self.anchor_grid.select(cell);
                if changed {
                    self.fire_settings_changed();
                }
                return;
            }
        }

        if layouts.forum_link.contains(x, y) {
            self.focus(FocusId::ForumLink);
            self.fire_forum_link_activated();
            return;
        }

        if rect_contains(layouts.list_inner, x, y) {
            self.focus(FocusId::ThumbnailList);
            let index = (y - layouts.list_inner.y) as usize + self.thumbnail_list.cursor.offset();
            if index < self.thumbnail_list.len() {
                self.thumbnail_list.select_index(index);
                // Clicks on the leading checkbox cell flip the row.
                if x < layouts.list_inner.x + 3 {
                    if let Some(id) = self.thumbnail_list.toggle_selected() {
                        self.fire_thumbnail_state_changed(id);
                    }
                }
            }
        }
    }

    fn handle_scroll(&mut self, x: u16, y: u16, delta: i64) {
        let layouts = self.layouts.clone();
        if layouts.opacity.contains(x, y) {
            self.focus(FocusId::ThumbnailsOpacity);
            self.adjust_focused(delta);
        } else if rect_contains(layouts.list_inner, x, y) {
            if delta > 0 {
                self.thumbnail_list.select_previous();
            } else {
                self.thumbnail_list.select_next();
            }
        }
    }

}
