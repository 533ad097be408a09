//! TUI: app state, event loop, layout, screens, widgets.

pub mod action;
pub mod app;
pub mod error;
pub mod layout;
pub mod screens;
pub mod widgets;

pub use app::App;
pub use error::AppError;
