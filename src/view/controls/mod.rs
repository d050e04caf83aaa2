//! Reusable form controls for the settings window
//!
//! ## Available Controls
//! - `Toggle` - Boolean on/off checkbox
//! - `NumberInput` - Bounded numeric input with increment/decrement
//! - `Slider` - Bounded integer slider with a filled track
//! - `AnchorGrid` - 3x3 group of mutually exclusive cells
//! - `LinkLabel` - Activatable URL label
//!
//! ## Pattern
//! Each control follows a consistent pattern:
//! - `*State` struct containing the control's data
//! - `*Colors` struct for theming
//! - `render_*` function that renders to a frame and returns hit areas

pub mod anchor_grid;
pub mod link_label;
pub mod number_input;
pub mod slider;
pub mod toggle;

pub use anchor_grid::{render_anchor_grid, AnchorGridColors, AnchorGridLayout, AnchorGridState};
pub use link_label::{render_link_label, LinkLabelColors, LinkLabelLayout, LinkLabelState};
pub use number_input::{
    render_number_input, NumberInputColors, NumberInputLayout, NumberInputState,
};
pub use slider::{render_slider, SliderColors, SliderLayout, SliderState};
pub use toggle::{render_toggle, ToggleColors, ToggleLayout, ToggleState};

/// Focus state for controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Normal,
    Focused,
    Disabled,
}

/// True when a rectangle contains the given terminal cell.
pub(crate) fn rect_contains(area: ratatui::layout::Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}
