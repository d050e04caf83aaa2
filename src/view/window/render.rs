//! Frame rendering for the main window
//!
//! Draws the settings pane, the client list, and the footer, and records
//! the hit-test layouts mouse dispatch works from.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::view::controls::{
    render_anchor_grid, render_link_label, render_number_input, render_slider, render_toggle,
    AnchorGridColors, AnchorGridLayout, FocusState, LinkLabelColors, LinkLabelLayout,
    NumberInputColors, NumberInputLayout, SliderColors, SliderLayout, ToggleColors, ToggleLayout,
};

use super::{FocusId, MainWindow, WindowState};

const SETTINGS_PANE_WIDTH: u16 = 36;

/// Clickable areas recorded by the last render pass
#[derive(Clone, Default)]
pub(crate) struct WindowLayouts {
    pub toggles: Vec<(FocusId, ToggleLayout)>,
    pub width: NumberInputLayout,
    pub height: NumberInputLayout,
    pub opacity: SliderLayout,
    pub zoom_factor: NumberInputLayout,
    pub anchor_grid: AnchorGridLayout,
    pub forum_link: LinkLabelLayout,
    pub list_inner: Rect,
}

/// Row slice of a pane's inner area, empty when it does not fit.
fn section_row(inner: Rect, row: u16, height: u16) -> Rect {
    if row + height > inner.height {
        Rect::default()
    } else {
        Rect::new(inner.x, inner.y + row, inner.width, height)
    }
}

pub(crate) fn draw(frame: &mut Frame, window: &mut MainWindow) {
    if window.window_state() == WindowState::Minimized {
        draw_minimized(frame, window);
        window.layouts = WindowLayouts::default();
        return;
    }

    let theme = *window.theme();
    let mut layouts = WindowLayouts::default();

    let outer = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(frame.area());
    let panes =
        Layout::horizontal([Constraint::Length(SETTINGS_PANE_WIDTH), Constraint::Min(20)])
            .split(outer[0]);

    // settings pane
    let settings_block = Block::bordered()
        .title("Settings")
        .border_style(Style::default().fg(theme.border));
    let inner = settings_block.inner(panes[0]);
    frame.render_widget(settings_block, panes[0]);

    let section_style = Style::default()
        .fg(theme.section_fg)
        .add_modifier(Modifier::BOLD);
    let toggle_colors = ToggleColors::from_theme(&theme);
    let number_colors = NumberInputColors::from_theme(&theme);
    let slider_colors = SliderColors::from_theme(&theme);
    let grid_colors = AnchorGridColors::from_theme(&theme);

    let mut row = 0u16;
    frame.render_widget(
        Paragraph::new("General").style(section_style),
        section_row(inner, row, 1),
    );
    row += 1;

    let general_toggles = [
        (FocusId::MinimizeToTray, &window.minimize_to_tray_check),
        (FocusId::TrackClientLayouts, &window.track_client_layouts_check),
        (
            FocusId::HideActiveClientThumbnail,
            &window.hide_active_client_thumbnail_check,
        ),
        (
            FocusId::ThumbnailsAlwaysOnTop,
            &window.thumbnails_always_on_top_check,
        ),
        (
            FocusId::HideThumbnailsOnLostFocus,
            &window.hide_thumbnails_on_lost_focus_check,
        ),
        (FocusId::PerClientLayouts, &window.per_client_layouts_check),
        (
            FocusId::ShowThumbnailOverlays,
            &window.show_thumbnail_overlays_check,
        ),
        (
            FocusId::ShowThumbnailFrames,
            &window.show_thumbnail_frames_check,
        ),
    ];
    for (id, state) in general_toggles {
        let layout = render_toggle(frame, section_row(inner, row, 1), state, &toggle_colors);
        layouts.toggles.push((id, layout));
        row += 1;
    }
    row += 1;

    frame.render_widget(
        Paragraph::new("Thumbnail").style(section_style),
        section_row(inner, row, 1),
    );
    row += 1;
    layouts.width = render_number_input(
        frame,
        section_row(inner, row, 1),
        &window.width_input,
        &number_colors,
    );
    row += 1;
    layouts.height = render_number_input(
        frame,
        section_row(inner, row, 1),
        &window.height_input,
        &number_colors,
    );
    row += 1;
    layouts.opacity = render_slider(
        frame,
        section_row(inner, row, 1),
        &window.opacity_slider,
        &slider_colors,
    );
    row += 2;

    frame.render_widget(
        Paragraph::new("Zoom").style(section_style),
        section_row(inner, row, 1),
    );
    row += 1;
    let zoom_layout = render_toggle(
        frame,
        section_row(inner, row, 1),
        &window.thumbnail_zoom_check,
        &toggle_colors,
    );
    layouts.toggles.push((FocusId::ThumbnailZoom, zoom_layout));
    row += 1;
    layouts.zoom_factor = render_number_input(
        frame,
        section_row(inner, row, 1),
        &window.zoom_factor_input,
        &number_colors,
    );
    row += 1;
    layouts.anchor_grid = render_anchor_grid(
        frame,
        section_row(inner, row, 3),
        &window.anchor_grid,
        &grid_colors,
    );

    layouts.list_inner = draw_client_list(frame, panes[1], window, &theme);
    layouts.forum_link = draw_footer(frame, outer[1], window, &theme);

    window.layouts = layouts;
}

fn draw_client_list(
    frame: &mut Frame,
    area: Rect,
    window: &mut MainWindow,
    theme: &crate::view::theme::Theme,
) -> Rect {
    let focused = window.thumbnail_list.focus == FocusState::Focused;
    let border = if focused { theme.accent } else { theme.border };
    let block = Block::bordered()
        .title("Clients")
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if window.thumbnail_list.is_empty() {
        frame.render_widget(
            Paragraph::new("No clients attached").style(Style::default().fg(theme.disabled)),
            inner,
        );
        return inner;
    }

    let rows: Vec<ListItem> = window
        .thumbnail_list
        .entries()
        .iter()
        .map(|entry| {
            let descriptor = entry.borrow();
            let mark = if descriptor.is_disabled() { "x" } else { " " };
            ListItem::new(format!("[{}] {}", mark, descriptor.title()))
        })
        .collect();
    let list = List::new(rows)
        .style(Style::default().fg(theme.fg))
        .highlight_style(Style::default().bg(theme.list_highlight_bg));
    frame.render_stateful_widget(list, inner, &mut window.thumbnail_list.cursor);
    inner
}

fn draw_footer(
    frame: &mut Frame,
    area: Rect,
    window: &MainWindow,
    theme: &crate::view::theme::Theme,
) -> LinkLabelLayout {
    const HINTS: &str = "Tab focus / Space toggle / Esc close / Ctrl+Q quit";
    let columns = Layout::horizontal([
        Constraint::Min(10),
        Constraint::Length(HINTS.len() as u16),
    ])
    .split(area);

    let link_colors = LinkLabelColors::from_theme(theme);
    let layout = render_link_label(frame, columns[0], &window.forum_link_label, &link_colors);
    frame.render_widget(
        Paragraph::new(HINTS).style(Style::default().fg(theme.disabled)),
        columns[1],
    );
    layout
}

fn draw_minimized(frame: &mut Frame, window: &MainWindow) {
    let theme = window.theme();
    let text = format!(
        "previewdeck minimized, {} client(s) tracked. Press any key to restore.",
        window.thumbnail_list().len()
    );
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(theme.disabled)),
        frame.area(),
    );
}
