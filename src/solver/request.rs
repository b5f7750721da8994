//! Superseding of in-flight solves
//!
//! A front end driven by sliders may ask for a new run before the previous
//! one finished. Each request takes a [`RequestTicket`] from a shared
//! [`RequestGate`]; issuing a ticket makes every older ticket stale, and a
//! gated solve that sees its ticket go stale stops early.
//!
//! ```rust
//! use laser_rs::solver::RequestGate;
//!
//! let gate = RequestGate::new();
//! let first = gate.issue();
//! assert!(!first.is_superseded());
//!
//! let second = gate.issue();
//! assert!(first.is_superseded());
//! assert!(!second.is_superseded());
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out request tickets; cheap to clone and share across threads
#[derive(Debug, Clone, Default)]
pub struct RequestGate {
    latest: Arc<AtomicU64>,
}

/// Identity of one request
#[derive(Debug, Clone)]
pub struct RequestTicket {
    id: u64,
    latest: Arc<AtomicU64>,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, superseding all previous ones
    pub fn issue(&self) -> RequestTicket {
        let id = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        RequestTicket {
            id,
            latest: Arc::clone(&self.latest),
        }
    }

    /// Id of the newest ticket (0 before the first issue)
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::Acquire)
    }
}

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// True once a newer ticket has been issued by the same gate
    pub fn is_superseded(&self) -> bool {
        self.latest.load(Ordering::Acquire) != self.id
    }
}
