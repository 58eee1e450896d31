//! Reusable UI components

mod button;
mod menu_toggle;
mod modal;
mod reveal;

pub use button::*;
pub use menu_toggle::*;
pub use modal::*;
pub use reveal::*;
