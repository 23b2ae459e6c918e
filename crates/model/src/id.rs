use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out question identifiers, starting at 1.
///
/// Questions do not reach into hidden global state for their ids; the host
/// owns an allocator and passes it to
/// [`QuestionBuilder::build`](crate::QuestionBuilder::build). Sharing one
/// allocator (behind an `Arc` if needed) yields ids that are unique across
/// every question built from it, including under concurrent construction —
/// the counter is a lock-free atomic.
#[derive(Debug)]
pub struct QuestionIdAllocator {
    next: AtomicU64,
}

impl QuestionIdAllocator {
    /// Creates an allocator whose first id is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Returns the next unused identifier.
    pub fn allocate(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for QuestionIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
