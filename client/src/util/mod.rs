//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate input checks and task lifetime handling from page
//! and component logic to improve reuse and testability.

pub mod lifecycle;
pub mod validation;
