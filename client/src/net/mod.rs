//! Networking modules for the external authentication API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the transport seam, `types` defines the JSON bodies, and
//! `outcome` turns a finished request into the result a form reacts to.

pub mod http;
pub mod outcome;
pub mod types;
