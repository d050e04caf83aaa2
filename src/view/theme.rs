//! Color themes for the control panel
//!
//! A theme is a flat set of named colors. Controls project the subset they
//! need through their `*Colors::from_theme` constructors.

use ratatui::style::Color;

/// Named colors used across the window
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Window background
    pub bg: Color,
    /// Default text
    pub fg: Color,
    /// Pane borders and control brackets
    pub border: Color,
    /// Focused control highlight
    pub accent: Color,
    /// Disabled control text
    pub disabled: Color,
    /// Numeric values and slider fill
    pub value_fg: Color,
    /// Checkmarks and selected anchor cells
    pub mark_fg: Color,
    /// Activatable link text
    pub link_fg: Color,
    /// Section headers
    pub section_fg: Color,
    /// Highlighted list row background
    pub list_highlight_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            border: Color::DarkGray,
            accent: Color::Cyan,
            disabled: Color::DarkGray,
            value_fg: Color::Yellow,
            mark_fg: Color::Green,
            link_fg: Color::Blue,
            section_fg: Color::Magenta,
            list_highlight_bg: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Look up a theme preset by name. Unknown names fall back to the
    /// default theme.
    pub fn by_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            "high-contrast" => Self::high_contrast(),
            _ => Self::default(),
        }
    }

    fn dark() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::Gray,
            border: Color::Rgb(60, 60, 60),
            accent: Color::LightBlue,
            disabled: Color::Rgb(90, 90, 90),
            value_fg: Color::LightYellow,
            mark_fg: Color::LightGreen,
            link_fg: Color::LightBlue,
            section_fg: Color::LightMagenta,
            list_highlight_bg: Color::Rgb(40, 40, 40),
        }
    }

    fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            border: Color::White,
            accent: Color::Yellow,
            disabled: Color::Gray,
            value_fg: Color::Yellow,
            mark_fg: Color::Green,
            link_fg: Color::Cyan,
            section_fg: Color::Yellow,
            list_highlight_bg: Color::Blue,
        }
    }
}
