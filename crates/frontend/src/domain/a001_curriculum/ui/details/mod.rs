//! Chapter editor modal
//!
//! - view_model.rs: session-backed commands (save, cancel, lesson edits)
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ChapterDetails;
pub use view_model::{chapter_title, ChapterDetailsViewModel};
