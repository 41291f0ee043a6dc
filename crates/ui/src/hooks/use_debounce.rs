//! # Debounce Hook
//!
//! Cancel-and-reschedule timer for the search box.
//!
//! Every call to [`UseDebounce::schedule`] cancels the pending task (if any)
//! and spawns a new one. Only the task that survives the whole delay runs
//! the settle callback. The core [`Debouncer`] ticket is checked as well, so
//! a task that was already past its sleep when cancelled still does nothing.
//! Tasks belong to the calling component's scope and die with it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let debounce = use_debounce(Duration::from_millis(500), move |()| {
//!     // commit the typed text
//! });
//!
//! // In the input handler:
//! debounce.schedule();
//! ```

use std::time::Duration;

use catalog_core::Debouncer;
use dioxus::prelude::*;

// ============================================================================
// Hook
// ============================================================================

/// Handle returned by [`use_debounce`]
#[derive(Clone, Copy)]
pub struct UseDebounce {
    debouncer: CopyValue<Debouncer>,
    /// Task waiting out the delay, if any
    pending: Signal<Option<Task>>,
    on_settle: Callback<()>,
}

impl UseDebounce {
    /// Restart the delay. The previously scheduled callback will not run.
    pub fn schedule(&self) {
        let mut pending = self.pending;
        if let Some(task) = pending.take() {
            task.cancel();
        }

        let debouncer = self.debouncer.cloned();
        let ticket = debouncer.schedule();
        let on_settle = self.on_settle;

        let task = spawn(async move {
            if debouncer.settle(ticket).await {
                pending.set(None);
                on_settle.call(());
            }
        });
        pending.set(Some(task));
    }

    /// Drop the pending callback without running it
    pub fn cancel(&self) {
        let mut pending = self.pending;
        if let Some(task) = pending.take() {
            task.cancel();
        }
        self.debouncer.read().cancel();
    }

    /// Check if a callback is waiting out the delay
    pub fn is_pending(&self) -> bool {
        self.pending.read().is_some()
    }
}

/// Debounce `on_settle` by `delay`
pub fn use_debounce(delay: Duration, on_settle: impl FnMut(()) + 'static) -> UseDebounce {
    let debouncer = use_hook(|| CopyValue::new(Debouncer::new(delay)));
    let pending = use_signal(|| None);
    let on_settle = use_callback(on_settle);

    UseDebounce {
        debouncer,
        pending,
        on_settle,
    }
}
