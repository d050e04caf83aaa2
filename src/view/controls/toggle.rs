//! Toggle (checkbox) control for boolean settings
//!
//! Renders as: `[x] Label` or `[ ] Label`

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::{rect_contains, FocusState};
use crate::view::theme::Theme;

/// State for a toggle control
#[derive(Debug, Clone)]
pub struct ToggleState {
    /// Current value
    pub checked: bool,
    /// Label displayed after the checkbox
    pub label: String,
    /// Focus state
    pub focus: FocusState,
}

impl ToggleState {
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        Self {
            checked,
            label: label.into(),
            focus: FocusState::Normal,
        }
    }

    /// Flip the value. Disabled toggles do not change.
    pub fn toggle(&mut self) {
        if self.focus != FocusState::Disabled {
            self.checked = !self.checked;
        }
    }

    /// Write the value directly, ignoring the focus state. Used by the
    /// window's settings setters, which must work while the control is
    /// disabled.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }
}

/// Colors for the toggle control
#[derive(Debug, Clone, Copy)]
pub struct ToggleColors {
    pub bracket: Color,
    pub mark: Color,
    pub label: Color,
    pub focused: Color,
    pub disabled: Color,
}

impl ToggleColors {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            bracket: theme.border,
            mark: theme.mark_fg,
            label: theme.fg,
            focused: theme.accent,
            disabled: theme.disabled,
        }
    }
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleLayout {
    /// The checkbox cell area
    pub checkbox_area: Rect,
    /// The checkbox plus label
    pub full_area: Rect,
}

impl ToggleLayout {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.full_area, x, y)
    }
}

/// Render a toggle and report its clickable areas.
pub fn render_toggle(
    frame: &mut Frame,
    area: Rect,
    state: &ToggleState,
    colors: &ToggleColors,
) -> ToggleLayout {
    if area.height == 0 || area.width < 4 {
        return ToggleLayout {
            checkbox_area: Rect::default(),
            full_area: area,
        };
    }

    let (bracket, mark, label) = match state.focus {
        FocusState::Normal => (colors.bracket, colors.mark, colors.label),
        FocusState::Focused => (colors.focused, colors.mark, colors.focused),
        FocusState::Disabled => (colors.disabled, colors.disabled, colors.disabled),
    };

    let mark_text = if state.checked { "x" } else { " " };
    let line = Line::from(vec![
        Span::styled("[", Style::default().fg(bracket)),
        Span::styled(mark_text, Style::default().fg(mark)),
        Span::styled("]", Style::default().fg(bracket)),
        Span::raw(" "),
        Span::styled(state.label.as_str(), Style::default().fg(label)),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let label_width = state.label.as_str().width() as u16;
    let full_width = (3 + 1 + label_width).min(area.width);
    ToggleLayout {
        checkbox_area: Rect::new(area.x, area.y, 3.min(area.width), 1),
        full_area: Rect::new(area.x, area.y, full_width, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn test_frame<F>(width: u16, height: u16, f: F)
    where
        F: FnOnce(&mut Frame, Rect),
    {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = Rect::new(0, 0, width, height);
                f(frame, area);
            })
            .unwrap();
    }

    #[test]
    fn toggle_flips_value() {
        let mut state = ToggleState::new("Tray", false);
        state.toggle();
        assert!(state.checked);
        state.toggle();
        assert!(!state.checked);
    }

    #[test]
    fn disabled_toggle_keeps_value() {
        let mut state = ToggleState::new("Tray", false);
        state.focus = FocusState::Disabled;
        state.toggle();
        assert!(!state.checked);
    }

    #[test]
    fn set_checked_ignores_disabled_state() {
        let mut state = ToggleState::new("Tray", false);
        state.focus = FocusState::Disabled;
        state.set_checked(true);
        assert!(state.checked);
    }

    #[test]
    fn layout_covers_checkbox_and_label() {
        test_frame(30, 1, |frame, area| {
            let state = ToggleState::new("Tray", true);
            let colors = ToggleColors::from_theme(&Theme::default());
            let layout = render_toggle(frame, area, &state, &colors);

            assert_eq!(layout.checkbox_area.width, 3);
            // "[x] Tray"
            assert_eq!(layout.full_area.width, 8);
            assert!(layout.contains(0, 0));
            assert!(layout.contains(6, 0));
            assert!(!layout.contains(12, 0));
        });
    }

    #[test]
    fn narrow_area_yields_empty_checkbox() {
        test_frame(3, 1, |frame, area| {
            let state = ToggleState::new("Tray", true);
            let colors = ToggleColors::from_theme(&Theme::default());
            let layout = render_toggle(frame, area, &state, &colors);
            assert_eq!(layout.checkbox_area.width, 0);
        });
    }
}
