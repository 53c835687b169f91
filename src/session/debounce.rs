//! Quiet-period gating for keystroke-driven requests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Identifies one request registered with a [`Debouncer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Lets only the most recent request through.
///
/// Every new request takes a ticket, which invalidates all earlier ones. A
/// request waits out the quiet period and proceeds only if its ticket is
/// still current; it checks again before committing its result so a slow
/// earlier response can never overwrite a newer one.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    latest: AtomicU64,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            latest: AtomicU64::new(0),
        }
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    pub fn ticket(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Sleep for the quiet period, then report whether `ticket` survived it.
    pub async fn settle(&self, ticket: Ticket) -> bool {
        tokio::time::sleep(self.quiet).await;
        self.is_current(ticket)
    }
}
