//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`credentials`, `form`, `landing`) so pages can
//! depend on small focused models; `services` bundles the injected
//! dependencies every page reads from context.

pub mod credentials;
pub mod form;
pub mod landing;
pub mod services;
