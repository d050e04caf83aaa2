//! Activatable URL label
//!
//! A line of underlined text the user can click or press Enter on. The
//! label itself carries no behavior; the window fires a notification hook
//! when it is activated.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::{rect_contains, FocusState};
use crate::view::theme::Theme;

/// State for a link label
#[derive(Debug, Clone, Default)]
pub struct LinkLabelState {
    /// Displayed text, usually a URL
    pub text: String,
    /// Focus state
    pub focus: FocusState,
}

impl LinkLabelState {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            focus: FocusState::Normal,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// Colors for a link label
#[derive(Debug, Clone, Copy)]
pub struct LinkLabelColors {
    pub link: Color,
    pub focused: Color,
    pub disabled: Color,
}

impl LinkLabelColors {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            link: theme.link_fg,
            focused: theme.accent,
            disabled: theme.disabled,
        }
    }
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkLabelLayout {
    pub full_area: Rect,
}

impl LinkLabelLayout {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.full_area, x, y)
    }
}

/// Render the label and report its clickable area.
pub fn render_link_label(
    frame: &mut Frame,
    area: Rect,
    state: &LinkLabelState,
    colors: &LinkLabelColors,
) -> LinkLabelLayout {
    if area.height == 0 || state.text.is_empty() {
        return LinkLabelLayout {
            full_area: Rect::default(),
        };
    }

    let color = match state.focus {
        FocusState::Normal => colors.link,
        FocusState::Focused => colors.focused,
        FocusState::Disabled => colors.disabled,
    };
    let style = Style::default()
        .fg(color)
        .add_modifier(Modifier::UNDERLINED);
    frame.render_widget(Paragraph::new(state.text.as_str()).style(style), area);

    let width = (state.text.as_str().width() as u16).min(area.width);
    LinkLabelLayout {
        full_area: Rect::new(area.x, area.y, width, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn layout_matches_text_width() {
        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let state = LinkLabelState::new("https://example.org/forum");
                let colors = LinkLabelColors::from_theme(&Theme::default());
                let layout =
                    render_link_label(frame, Rect::new(0, 0, 40, 1), &state, &colors);
                assert_eq!(layout.full_area.width, 25);
                assert!(layout.contains(5, 0));
                assert!(!layout.contains(30, 0));
            })
            .unwrap();
    }

    #[test]
    fn empty_text_has_no_hit_area() {
        let backend = TestBackend::new(10, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let state = LinkLabelState::default();
                let colors = LinkLabelColors::from_theme(&Theme::default());
                let layout =
                    render_link_label(frame, Rect::new(0, 0, 10, 1), &state, &colors);
                assert!(!layout.contains(0, 0));
            })
            .unwrap();
    }
}
