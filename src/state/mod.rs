//! UI state machine.
//!
//! Transitions are plain functions over [`AppState`], testable without a
//! terminal. Time enters only as explicit `Instant` arguments.

pub mod app_state;
pub mod project_handler;
pub mod scroll_handler;
pub mod section_handler;

pub use app_state::{AppState, PageMetrics, TypingOptions};
pub use project_handler::handle_project_action;
pub use scroll_handler::handle_scroll_action;
pub use section_handler::handle_section_action;
