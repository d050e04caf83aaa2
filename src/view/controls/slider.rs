//! Bounded integer slider
//!
//! Renders as: `Label ████████░░░░  66%`. Used for the thumbnail opacity
//! percentage. Clicking the track jumps to the corresponding value,
//! arrow keys and the mouse wheel step it.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::{rect_contains, FocusState};
use crate::view::theme::Theme;

const TRACK_WIDTH: u16 = 12;

/// State for a slider control
#[derive(Debug, Clone)]
pub struct SliderState {
    /// Current value, always within `min..=max`
    pub value: i64,
    /// Lower bound
    pub min: i64,
    /// Upper bound
    pub max: i64,
    /// Step applied by increment/decrement
    pub step: i64,
    /// Label displayed before the track
    pub label: String,
    /// Focus state
    pub focus: FocusState,
}

impl SliderState {
    pub fn new(label: impl Into<String>, value: i64, min: i64, max: i64) -> Self {
        debug_assert!(min < max);
        Self {
            value: value.clamp(min, max),
            min,
            max,
            step: 1,
            label: label.into(),
            focus: FocusState::Normal,
        }
    }

    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    pub fn increment(&mut self) {
        if self.focus != FocusState::Disabled {
            self.value = self.value.saturating_add(self.step).min(self.max);
        }
    }

    pub fn decrement(&mut self) {
        if self.focus != FocusState::Disabled {
            self.value = self.value.saturating_sub(self.step).max(self.min);
        }
    }

    /// Write a value, clamped to the bounds. Works while disabled.
    pub fn set_value(&mut self, value: i64) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Fraction of the track that is filled, in `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        (self.value - self.min) as f64 / (self.max - self.min) as f64
    }
}

/// Colors for the slider control
#[derive(Debug, Clone, Copy)]
pub struct SliderColors {
    pub label: Color,
    pub fill: Color,
    pub track: Color,
    pub value: Color,
    pub focused: Color,
    pub disabled: Color,
}

impl SliderColors {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            label: theme.fg,
            fill: theme.value_fg,
            track: theme.border,
            value: theme.value_fg,
            focused: theme.accent,
            disabled: theme.disabled,
        }
    }
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Copy, Default)]
pub struct SliderLayout {
    /// The track area
    pub track_area: Rect,
    /// The whole control
    pub full_area: Rect,
}

impl SliderLayout {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.full_area, x, y)
    }

    /// Map a click on the track to a slider value.
    pub fn value_at(&self, x: u16, min: i64, max: i64) -> Option<i64> {
        if !rect_contains(self.track_area, x, self.track_area.y) || self.track_area.width < 2 {
            return None;
        }
        let offset = (x - self.track_area.x) as i64;
        let span = (self.track_area.width - 1) as i64;
        Some(min + (max - min) * offset / span)
    }
}

/// Render a slider and report its clickable areas.
pub fn render_slider(
    frame: &mut Frame,
    area: Rect,
    state: &SliderState,
    colors: &SliderColors,
) -> SliderLayout {
    if area.height == 0 || area.width < TRACK_WIDTH + 6 {
        return SliderLayout {
            full_area: area,
            ..SliderLayout::default()
        };
    }

    let (label, fill, track, value) = match state.focus {
        FocusState::Normal => (colors.label, colors.fill, colors.track, colors.value),
        FocusState::Focused => (colors.focused, colors.fill, colors.focused, colors.value),
        FocusState::Disabled => (
            colors.disabled,
            colors.disabled,
            colors.disabled,
            colors.disabled,
        ),
    };

    let filled = (state.ratio() * TRACK_WIDTH as f64).round() as u16;
    let filled = filled.min(TRACK_WIDTH);
    let line = Line::from(vec![
        Span::styled(state.label.as_str(), Style::default().fg(label)),
        Span::raw(" "),
        Span::styled("█".repeat(filled as usize), Style::default().fg(fill)),
        Span::styled(
            "░".repeat((TRACK_WIDTH - filled) as usize),
            Style::default().fg(track),
        ),
        Span::raw(" "),
        Span::styled(format!("{:>3}%", state.value), Style::default().fg(value)),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let label_width = state.label.as_str().width() as u16;
    let track_start = area.x + label_width + 1;
    SliderLayout {
        track_area: Rect::new(track_start, area.y, TRACK_WIDTH, 1),
        full_area: Rect::new(
            area.x,
            area.y,
            (label_width + 1 + TRACK_WIDTH + 5).min(area.width),
            1,
        ),
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
    fn value_stays_within_bounds() {
        let mut state = SliderState::new("Opacity", 98, 0, 100).with_step(5);
        state.increment();
        assert_eq!(state.value, 100);
        state.set_value(-20);
        assert_eq!(state.value, 0);
    }

    #[test]
    fn disabled_slider_ignores_steps() {
        let mut state = SliderState::new("Opacity", 50, 0, 100);
        state.focus = FocusState::Disabled;
        state.increment();
        assert_eq!(state.value, 50);
    }

    #[test]
    fn ratio_spans_the_range() {
        let state = SliderState::new("Opacity", 25, 0, 100);
        assert!((state.ratio() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn track_click_maps_to_value() {
        test_frame(40, 1, |frame, area| {
            let state = SliderState::new("Opacity", 50, 0, 100);
            let colors = SliderColors::from_theme(&Theme::default());
            let layout = render_slider(frame, area, &state, &colors);

            let left = layout.track_area.x;
            let right = layout.track_area.x + layout.track_area.width - 1;
            assert_eq!(layout.value_at(left, 0, 100), Some(0));
            assert_eq!(layout.value_at(right, 0, 100), Some(100));
            assert_eq!(layout.value_at(right + 5, 0, 100), None);
        });
    }
}
