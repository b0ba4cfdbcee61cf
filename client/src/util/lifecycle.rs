//! Page-scoped liveness flag for async work.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form submissions and the landing fetch spawn local tasks that outlive the
//! event handler that started them. Each page holds one `ScopeFlag`, released
//! from `on_cleanup`, and every task checks it after each await point so a
//! late response or a pending redirect timer does nothing once the page is
//! gone.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct ScopeFlag {
    live: Arc<AtomicBool>,
}

impl Default for ScopeFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeFlag {
    /// Create a flag that starts live.
    #[must_use]
    pub fn new() -> Self {
        Self { live: Arc::new(AtomicBool::new(true)) }
    }

    /// Create a flag released when the current reactive owner is cleaned up.
    #[must_use]
    pub fn bound_to_owner() -> Self {
        let flag = Self::new();
        let released = flag.clone();
        leptos::prelude::on_cleanup(move || released.release());
        flag
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Relaxed)
    }

    /// Mark the scope as torn down. Idempotent.
    pub fn release(&self) {
        self.live.store(false, Ordering::Relaxed);
    }
}
