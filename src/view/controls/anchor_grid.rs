//! 3x3 group of mutually exclusive toggle cells
//!
//! Backs the zoom anchor selection. The group owns the exclusivity rule:
//! selecting one cell unchecks the rest. One cell is "armed" for keyboard
//! navigation; arrow keys move the armed cell, Space or Enter selects it.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{rect_contains, FocusState};
use crate::view::theme::Theme;

/// Number of cells in the group
pub const CELL_COUNT: usize = 9;

const CELL_LABELS: [&str; CELL_COUNT] = ["NW", "N", "NE", "W", "C", "E", "SW", "S", "SE"];
const CELL_WIDTH: u16 = 5;

/// State for the anchor grid control
#[derive(Debug, Clone)]
pub struct AnchorGridState {
    /// Check flag per cell, row-major from the top-left
    checked: [bool; CELL_COUNT],
    /// Cell the keyboard cursor rests on
    pub armed: usize,
    /// Focus state
    pub focus: FocusState,
}

impl Default for AnchorGridState {
    fn default() -> Self {
        let mut checked = [false; CELL_COUNT];
        checked[0] = true;
        Self {
            checked,
            armed: 0,
            focus: FocusState::Normal,
        }
    }
}

impl AnchorGridState {
    /// Check one cell and uncheck every other. Out-of-range indices are
    /// ignored. Works while disabled so programmatic writes always land.
    pub fn select(&mut self, index: usize) {
        if index >= CELL_COUNT {
            return;
        }
        self.checked = [false; CELL_COUNT];
        self.checked[index] = true;
        self.armed = index;
    }

    /// Select the armed cell. Keyboard path, so disabled groups ignore it.
    pub fn select_armed(&mut self) {
        if self.focus != FocusState::Disabled {
            self.select(self.armed);
        }
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    /// Number of checked cells. The group keeps this at one.
    pub fn checked_count(&self) -> usize {
        self.checked.iter().filter(|c| **c).count()
    }

    /// Uncheck every cell, breaking the group invariant on purpose.
    #[cfg(test)]
    pub(crate) fn clear_checks(&mut self) {
        self.checked = [false; CELL_COUNT];
    }

    /// Move the armed cell one column left, clamped at the grid edge.
    pub fn arm_left(&mut self) {
        if self.focus != FocusState::Disabled && self.armed % 3 > 0 {
            self.armed -= 1;
        }
    }

    pub fn arm_right(&mut self) {
        if self.focus != FocusState::Disabled && self.armed % 3 < 2 {
            self.armed += 1;
        }
    }

    pub fn arm_up(&mut self) {
        if self.focus != FocusState::Disabled && self.armed >= 3 {
            self.armed -= 3;
        }
    }

    pub fn arm_down(&mut self) {
        if self.focus != FocusState::Disabled && self.armed + 3 < CELL_COUNT {
            self.armed += 3;
        }
    }
}

/// Colors for the anchor grid control
#[derive(Debug, Clone, Copy)]
pub struct AnchorGridColors {
    pub cell: Color,
    pub selected: Color,
    pub armed: Color,
    pub disabled: Color,
}

impl AnchorGridColors {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            cell: theme.fg,
            selected: theme.mark_fg,
            armed: theme.accent,
            disabled: theme.disabled,
        }
    }
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorGridLayout {
    /// One rectangle per cell, row-major
    pub cells: [Rect; CELL_COUNT],
    /// The whole grid
    pub full_area: Rect,
}

impl AnchorGridLayout {
    /// Cell index under the given terminal position, if any.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.width > 0 && rect_contains(*cell, x, y))
    }
}

/// Render the grid and report per-cell clickable areas. Needs three rows.
pub fn render_anchor_grid(
    frame: &mut Frame,
    area: Rect,
    state: &AnchorGridState,
    colors: &AnchorGridColors,
) -> AnchorGridLayout {
    let mut layout = AnchorGridLayout {
        full_area: area,
        ..AnchorGridLayout::default()
    };
    if area.height < 3 || area.width < CELL_WIDTH * 3 {
        return layout;
    }

    let disabled = state.focus == FocusState::Disabled;
    for row in 0..3u16 {
        let mut spans = Vec::with_capacity(3);
        for col in 0..3u16 {
            let index = (row * 3 + col) as usize;
            let selected = state.is_checked(index);
            let armed = state.focus == FocusState::Focused && state.armed == index;

            let mut style = Style::default().fg(if disabled {
                colors.disabled
            } else if selected {
                colors.selected
            } else {
                colors.cell
            });
            if armed {
                style = style.fg(colors.armed).add_modifier(Modifier::REVERSED);
            }

            let mark = if selected { "*" } else { " " };
            spans.push(Span::styled(
                format!("{}{:<3} ", mark, CELL_LABELS[index]),
                style,
            ));

            layout.cells[index] = Rect::new(
                area.x + col * CELL_WIDTH,
                area.y + row,
                CELL_WIDTH,
                1,
            );
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(area.x, area.y + row, area.width, 1),
        );
    }
    layout.full_area = Rect::new(area.x, area.y, CELL_WIDTH * 3, 3);
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn select_is_mutually_exclusive() {
        let mut state = AnchorGridState::default();
        state.select(4);
        assert!(state.is_checked(4));
        assert_eq!(state.checked_count(), 1);
        state.select(8);
        assert!(!state.is_checked(4));
        assert_eq!(state.checked_count(), 1);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut state = AnchorGridState::default();
        state.select(42);
        assert!(state.is_checked(0));
        assert_eq!(state.checked_count(), 1);
    }

    #[test]
    fn arming_moves_within_the_grid() {
        let mut state = AnchorGridState::default();
        state.arm_left();
        state.arm_up();
        assert_eq!(state.armed, 0);
        state.arm_right();
        state.arm_down();
        assert_eq!(state.armed, 4);
        state.arm_down();
        state.arm_down();
        assert_eq!(state.armed, 7);
    }

    #[test]
    fn disabled_group_ignores_keyboard_selection() {
        let mut state = AnchorGridState::default();
        state.focus = FocusState::Disabled;
        state.armed = 5;
        state.select_armed();
        assert!(state.is_checked(0));
        state.arm_right();
        assert_eq!(state.armed, 5);
    }

    #[test]
    fn cells_are_hit_testable_after_render() {
        let backend = TestBackend::new(30, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let state = AnchorGridState::default();
                let colors = AnchorGridColors::from_theme(&Theme::default());
                let area = Rect::new(2, 0, 25, 3);
                let layout = render_anchor_grid(frame, area, &state, &colors);

                assert_eq!(layout.cell_at(2, 0), Some(0));
                assert_eq!(layout.cell_at(2 + CELL_WIDTH, 1), Some(4));
                assert_eq!(layout.cell_at(2 + 2 * CELL_WIDTH, 2), Some(8));
                assert_eq!(layout.cell_at(29, 3), None);
            })
            .unwrap();
    }
}
