//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome while reading dependencies from Leptos
//! context providers.

pub mod auth_form;
