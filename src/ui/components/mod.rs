//! Reusable UI components.

mod button;
mod focus;
mod help_bar;
mod input;
mod toast;

pub use button::{choice_line, link_line, render_button};
pub use focus::FocusRing;
pub use help_bar::render_footer;
pub use input::TextInput;
pub use toast::Toasts;
