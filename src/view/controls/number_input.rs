//! Bounded numeric input with increment/decrement buttons
//!
//! Renders as: `Label [ 128] [-] [+]`. Digits typed while the control is
//! focused start a direct edit; Enter confirms, Escape restores the old
//! value.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::{rect_contains, FocusState};
use crate::view::theme::Theme;

/// State for a number input control
#[derive(Debug, Clone)]
pub struct NumberInputState {
    /// Current value, always within `min..=max`
    pub value: i64,
    /// Lower bound
    pub min: i64,
    /// Upper bound
    pub max: i64,
    /// Step applied by increment/decrement
    pub step: i64,
    /// Label displayed before the value
    pub label: String,
    /// Focus state
    pub focus: FocusState,
    /// Whether a direct edit is in progress
    pub editing: bool,
    /// Digits typed so far while editing
    pub edit_text: String,
}

impl NumberInputState {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            value,
            min: i64::MIN,
            max: i64::MAX,
            step: 1,
            label: label.into(),
            focus: FocusState::Normal,
            editing: false,
            edit_text: String::new(),
        }
    }

    pub fn with_bounds(mut self, min: i64, max: i64) -> Self {
        self.set_bounds(min, max);
        self
    }

    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    /// Replace the bounds and clamp the current value into them.
    pub fn set_bounds(&mut self, min: i64, max: i64) {
        self.min = min;
        self.max = max;
        self.value = self.value.clamp(min, max);
    }

    pub fn increment(&mut self) {
        if self.focus == FocusState::Disabled {
            return;
        }
        self.value = self.value.saturating_add(self.step).min(self.max);
    }

    pub fn decrement(&mut self) {
        if self.focus == FocusState::Disabled {
            return;
        }
        self.value = self.value.saturating_sub(self.step).max(self.min);
    }

    /// Write a value, clamped to the bounds. Works while disabled so the
    /// window's setters can always push state into the widget.
    pub fn set_value(&mut self, value: i64) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn start_editing(&mut self) {
        if self.focus == FocusState::Disabled {
            return;
        }
        self.editing = true;
        self.edit_text.clear();
    }

    /// Abandon the edit, keeping the previous value.
    pub fn cancel_editing(&mut self) {
        self.editing = false;
        self.edit_text.clear();
    }

    /// Apply the typed digits if they parse, then leave editing mode.
    pub fn confirm_editing(&mut self) {
        if !self.editing {
            return;
        }
        if let Ok(value) = self.edit_text.parse::<i64>() {
            self.set_value(value);
        }
        self.editing = false;
        self.edit_text.clear();
    }

    /// Accept one typed character. Only digits are meaningful here; the
    /// sizes and factors this control backs are never negative.
    pub fn insert_char(&mut self, c: char) {
        if self.editing && c.is_ascii_digit() && self.edit_text.len() < 9 {
            self.edit_text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.editing {
            self.edit_text.pop();
        }
    }

    fn display_text(&self) -> String {
        if self.editing {
            format!("{}_", self.edit_text)
        } else {
            format!("{:>4}", self.value)
        }
    }
}

/// Colors for the number input control
#[derive(Debug, Clone, Copy)]
pub struct NumberInputColors {
    pub label: Color,
    pub value: Color,
    pub bracket: Color,
    pub button: Color,
    pub focused: Color,
    pub disabled: Color,
}

impl NumberInputColors {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            label: theme.fg,
            value: theme.value_fg,
            bracket: theme.border,
            button: theme.accent,
            focused: theme.accent,
            disabled: theme.disabled,
        }
    }
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberInputLayout {
    /// The bracketed value area
    pub value_area: Rect,
    /// The `[-]` button
    pub decrement_area: Rect,
    /// The `[+]` button
    pub increment_area: Rect,
    /// The whole control
    pub full_area: Rect,
}

impl NumberInputLayout {
    pub fn is_decrement(&self, x: u16, y: u16) -> bool {
        rect_contains(self.decrement_area, x, y)
    }

    pub fn is_increment(&self, x: u16, y: u16) -> bool {
        rect_contains(self.increment_area, x, y)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.full_area, x, y)
    }
}

/// Render a number input and report its clickable areas.
pub fn render_number_input(
    frame: &mut Frame,
    area: Rect,
    state: &NumberInputState,
    colors: &NumberInputColors,
) -> NumberInputLayout {
    if area.height == 0 || area.width < 12 {
        return NumberInputLayout {
            full_area: area,
            ..NumberInputLayout::default()
        };
    }

    let (label, value, bracket, button) = match state.focus {
        FocusState::Normal => (colors.label, colors.value, colors.bracket, colors.button),
        FocusState::Focused => (colors.focused, colors.value, colors.focused, colors.focused),
        FocusState::Disabled => (
            colors.disabled,
            colors.disabled,
            colors.disabled,
            colors.disabled,
        ),
    };

    let value_text = state.display_text();
    let line = Line::from(vec![
        Span::styled(state.label.as_str(), Style::default().fg(label)),
        Span::raw(" "),
        Span::styled("[", Style::default().fg(bracket)),
        Span::styled(value_text.clone(), Style::default().fg(value)),
        Span::styled("]", Style::default().fg(bracket)),
        Span::raw(" "),
        Span::styled("[-]", Style::default().fg(button)),
        Span::raw(" "),
        Span::styled("[+]", Style::default().fg(button)),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let label_width = state.label.as_str().width() as u16;
    let value_start = area.x + label_width + 1;
    let value_width = value_text.width() as u16 + 2;
    let dec_start = value_start + value_width + 1;
    let inc_start = dec_start + 4;

    NumberInputLayout {
        value_area: Rect::new(value_start, area.y, value_width, 1),
        decrement_area: Rect::new(dec_start, area.y, 3, 1),
        increment_area: Rect::new(inc_start, area.y, 3, 1),
        full_area: Rect::new(area.x, area.y, (inc_start + 3 - area.x).min(area.width), 1),
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
    fn increment_and_decrement_respect_bounds() {
        let mut state = NumberInputState::new("Width", 9).with_bounds(8, 10);
        state.increment();
        assert_eq!(state.value, 10);
        state.increment();
        assert_eq!(state.value, 10);
        state.decrement();
        state.decrement();
        state.decrement();
        assert_eq!(state.value, 8);
    }

    #[test]
    fn set_bounds_clamps_current_value() {
        let mut state = NumberInputState::new("Width", 500);
        state.set_bounds(64, 256);
        assert_eq!(state.value, 256);
        state.set_bounds(300, 400);
        assert_eq!(state.value, 300);
    }

    #[test]
    fn step_applies_to_increment() {
        let mut state = NumberInputState::new("Width", 0).with_bounds(0, 100).with_step(16);
        state.increment();
        assert_eq!(state.value, 16);
    }

    #[test]
    fn disabled_input_ignores_user_mutation() {
        let mut state = NumberInputState::new("Zoom", 3).with_bounds(1, 10);
        state.focus = FocusState::Disabled;
        state.increment();
        state.decrement();
        state.start_editing();
        assert_eq!(state.value, 3);
        assert!(!state.editing);
    }

    #[test]
    fn editing_confirm_applies_clamped_value() {
        let mut state = NumberInputState::new("Width", 100).with_bounds(64, 256);
        state.start_editing();
        state.insert_char('9');
        state.insert_char('9');
        state.insert_char('9');
        state.confirm_editing();
        assert_eq!(state.value, 256);
        assert!(!state.editing);
    }

    #[test]
    fn editing_cancel_restores_value() {
        let mut state = NumberInputState::new("Width", 100).with_bounds(64, 256);
        state.start_editing();
        state.insert_char('7');
        state.cancel_editing();
        assert_eq!(state.value, 100);
    }

    #[test]
    fn editing_rejects_non_digits() {
        let mut state = NumberInputState::new("Width", 100);
        state.start_editing();
        state.insert_char('a');
        state.insert_char('-');
        state.insert_char('5');
        assert_eq!(state.edit_text, "5");
        state.backspace();
        assert_eq!(state.edit_text, "");
        state.backspace();
        assert_eq!(state.edit_text, "");
    }

    #[test]
    fn editing_empty_text_keeps_value() {
        let mut state = NumberInputState::new("Width", 100);
        state.start_editing();
        state.confirm_editing();
        assert_eq!(state.value, 100);
    }

    #[test]
    fn hit_areas_are_distinct() {
        test_frame(40, 1, |frame, area| {
            let state = NumberInputState::new("Width", 128);
            let colors = NumberInputColors::from_theme(&Theme::default());
            let layout = render_number_input(frame, area, &state, &colors);

            let dec_x = layout.decrement_area.x;
            let inc_x = layout.increment_area.x;
            assert!(layout.is_decrement(dec_x, 0));
            assert!(!layout.is_increment(dec_x, 0));
            assert!(layout.is_increment(inc_x, 0));
            assert!(!layout.is_decrement(inc_x, 0));
        });
    }
}
