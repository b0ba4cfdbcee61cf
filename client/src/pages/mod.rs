//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates form rendering to
//! `components::auth_form`.

pub mod home;
pub mod login;
pub mod signup;
