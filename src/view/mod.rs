//! View and UI layer
//!
//! Presentation components for the control panel: reusable form controls,
//! color themes, and the main window facade.

pub mod controls;
pub mod theme;
pub mod window;
