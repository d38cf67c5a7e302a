//! Per-execution operation context.

use crate::events::{EventSink, MemoryEventLog, TreasuryEvent};
use mintage_types::{IdAllocator, ObjectId};
use std::sync::Arc;

/// The creation context threaded through every operation that allocates
/// object identity or reports an event.
///
/// The embedding substrate constructs one context per atomic execution and
/// owns the choice of allocator seed and event sink.
pub struct OpContext {
    ids: IdAllocator,
    sink: Arc<dyn EventSink>,
}

impl OpContext {
    pub fn new(ids: IdAllocator, sink: Arc<dyn EventSink>) -> Self {
        Self { ids, sink }
    }

    /// Context wired to a fresh [`MemoryEventLog`]; returns the log handle
    /// alongside so the caller can inspect what was emitted.
    pub fn recording(ids: IdAllocator) -> (Self, Arc<MemoryEventLog>) {
        let log = Arc::new(MemoryEventLog::new());
        let ctx = Self::new(ids, log.clone());
        (ctx, log)
    }

    /// Allocate a fresh object identifier.
    pub fn fresh_id(&mut self) -> ObjectId {
        self.ids.fresh()
    }

    /// Report a committed state transition.
    pub fn emit(&self, event: TreasuryEvent) {
        self.sink.emit(event);
    }
}
