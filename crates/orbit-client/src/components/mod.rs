//! UI components for the orbit-folio page.

mod focus_view;
mod progress_dots;
mod scroll_view;
mod section_panel;

pub use focus_view::FocusView;
pub use progress_dots::ProgressDots;
pub use scroll_view::ScrollView;
pub use section_panel::SectionPanel;
