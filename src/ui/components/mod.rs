//! UI Components
//!
//! GTK4 widgets for the course information viewer.
//!
//! # Components
//!
//! - `info_display.rs` - Scrollable read-only text display
//! - `topic_bar.rs` - Row of topic buttons

mod info_display;
mod topic_bar;

pub use info_display::InfoDisplay;
pub use topic_bar::TopicBar;
