use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Shared generation counter identifying the newest ranking session.
///
/// Beginning a session bumps the counter, which invalidates every token
/// issued before it. The cell is shared with the search worker so that
/// in-flight matching for a superseded query can stop early.
#[derive(Debug, Clone, Default)]
pub struct SessionCounter {
    latest: Arc<AtomicU64>,
}

impl SessionCounter {
    /// Start a new session, superseding any previous one.
    pub fn begin(&self) -> QueryToken {
        let id = self.latest.fetch_add(1, AtomicOrdering::AcqRel) + 1;
        QueryToken {
            id,
            latest: Arc::clone(&self.latest),
        }
    }

    pub(crate) fn from_cell(latest: Arc<AtomicU64>) -> Self {
        Self { latest }
    }
}

/// Single-use cancellation flag owned by one ranking session.
#[derive(Debug, Clone)]
pub struct QueryToken {
    id: u64,
    latest: Arc<AtomicU64>,
}

impl QueryToken {
    /// Identifier correlating worker responses with this session.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether a newer session has started since this token was issued.
    ///
    /// Checked immediately before output is delivered; a superseded
    /// session's output is discarded, never merged with a newer query's.
    #[must_use]
    pub fn is_superseded(&self) -> bool {
        self.latest.load(AtomicOrdering::Acquire) != self.id
    }
}
