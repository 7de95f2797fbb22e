//! Reusable UI components
//!
//! All components take plain props and report interaction through
//! `EventHandler`s.

mod button;
mod cursor;
mod detail_panel;
mod info_bubble;
mod message_dialog;
mod progress_dots;

pub use button::*;
pub use cursor::*;
pub use detail_panel::*;
pub use info_bubble::*;
pub use message_dialog::*;
pub use progress_dots::*;
