//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive the real key handling, timers and
//! rendering through a TestBackend with a virtual clock.

mod help_overlay_tests;
