//! previewdeck library
//!
//! Terminal control panel for a live client-window thumbnail manager.
//! The `view` module holds the main window facade and its form controls;
//! the `app` module is the controller that wires notification hooks and
//! drives the window; `config` is the startup configuration file.

pub mod app;
pub mod config;
pub mod view;
