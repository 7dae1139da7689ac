mod use_keyboard_navigation;
mod use_orbit;
mod use_scroll_progress;

pub use use_keyboard_navigation::use_keyboard_navigation;
pub use use_orbit::*;
pub use use_scroll_progress::use_scroll_progress;
