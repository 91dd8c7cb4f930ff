//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Widest the content column gets, in cells.
///
/// Wider terminals center the column and leave the sides empty.
pub const CONTENT_MAX_WIDTH: u16 = 76;

/// Widest a project card gets, in cells (borders included).
pub const CARD_MAX_WIDTH: usize = 60;

/// Narrowest a project card gets, in cells (borders included).
pub const CARD_MIN_WIDTH: usize = 8;

/// Width percentage for help overlay popup.
///
/// Percentage of screen width (0-100) for the help overlay modal.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
///
/// Percentage of screen height (0-100) for the help overlay modal.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// How long the event loop sleeps when no timer is pending.
pub const IDLE_POLL_INTERVAL_MS: u64 = 250;
