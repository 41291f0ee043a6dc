//! Cancel-and-reschedule debouncer
//!
//! Every call to [`Debouncer::schedule`] cancels whatever was pending and
//! hands out a new ticket. A ticket fires only if nothing else was
//! scheduled (and nothing cancelled it) before its delay elapsed.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Handle for one scheduled callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Generation-counter debouncer, cheap to clone and share between tasks
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Create a debouncer with a quiet period in milliseconds
    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    /// Cancel the pending ticket (if any) and issue a new one
    pub fn schedule(&self) -> DebounceTicket {
        DebounceTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Cancel the pending ticket without issuing a new one
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Check if `ticket` is still the latest one
    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Wait out the quiet period and report whether `ticket` survived it
    pub async fn settle(&self, ticket: DebounceTicket) -> bool {
        tokio::time::sleep(self.delay).await;
        self.is_current(ticket)
    }
}

// ============================================================================
// Tests
// ============================================================================
