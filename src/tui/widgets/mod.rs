//! Reusable TUI widgets.

pub mod form;
pub mod map_view;
pub mod message;
pub mod user_panel;

pub use form::{Form, FormField, draw_form, form_height};
pub use map_view::{Direction, MapState, draw_map};
pub use message::{draw_message, draw_spinner};
pub use user_panel::{UserPanelContext, draw_user_panel};
