//! Treasury event reporting.
//!
//! Every committed state transition emits one event through the context's
//! [`EventSink`]. Delivery is fire-and-forget: the core's correctness never
//! depends on an event being observed, only on it being emitted whenever
//! the corresponding transition commits.

use crate::authority::AuthorityId;
use mintage_types::{Amount, ObjectId};
use serde::Serialize;
use std::sync::Mutex;

/// A state transition notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TreasuryEvent {
    TreasuryCreated {
        currency: &'static str,
        treasury_id: ObjectId,
    },
    AuthorityAdded {
        authority: AuthorityId,
        currency: &'static str,
        treasury_id: ObjectId,
    },
    AuthorityRemoved {
        authority: AuthorityId,
        currency: &'static str,
        treasury_id: ObjectId,
    },
    SupplyMinted {
        currency: &'static str,
        treasury_id: ObjectId,
        value: Amount,
    },
    SupplyBurned {
        /// The acting registered authority. Absent for facility
        /// settlements, where the treasury itself is the actor.
        authority: Option<AuthorityId>,
        currency: &'static str,
        treasury_id: ObjectId,
        value: Amount,
    },
    BurnFacilityOpened {
        currency: &'static str,
        treasury_id: ObjectId,
        facility_id: ObjectId,
    },
    BurnFacilityRetired {
        currency: &'static str,
        treasury_id: ObjectId,
        facility_id: ObjectId,
        value: Amount,
    },
}

/// Receives treasury events. Fire-and-forget; implementations must not
/// fail the emitting operation.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: TreasuryEvent);
}

/// Records every event for later inspection. Meant for tests and for
/// substrates that drain the log into their own delivery pipeline.
#[derive(Debug, Default)]
pub struct MemoryEventLog {
    events: Mutex<Vec<TreasuryEvent>>,
}

impl MemoryEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn snapshot(&self) -> Vec<TreasuryEvent> {
        self.lock().clone()
    }

    /// Drain the log.
    pub fn take(&self) -> Vec<TreasuryEvent> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<TreasuryEvent>> {
        match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl EventSink for MemoryEventLog {
    fn emit(&self, event: TreasuryEvent) {
        self.lock().push(event);
    }
}

/// Reports each event as a structured `tracing` record.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: TreasuryEvent) {
        match event {
            TreasuryEvent::TreasuryCreated {
                currency,
                treasury_id,
            } => {
                tracing::info!(target: "mintage_treasury", currency, %treasury_id, "treasury created");
            }
            TreasuryEvent::AuthorityAdded {
                authority,
                currency,
                treasury_id,
            } => {
                tracing::info!(target: "mintage_treasury", %authority, currency, %treasury_id, "authority added");
            }
            TreasuryEvent::AuthorityRemoved {
                authority,
                currency,
                treasury_id,
            } => {
                tracing::info!(target: "mintage_treasury", %authority, currency, %treasury_id, "authority removed");
            }
            TreasuryEvent::SupplyMinted {
                currency,
                treasury_id,
                value,
            } => {
                tracing::info!(target: "mintage_treasury", currency, %treasury_id, %value, "supply minted");
            }
            TreasuryEvent::SupplyBurned {
                authority,
                currency,
                treasury_id,
                value,
            } => {
                tracing::info!(target: "mintage_treasury", ?authority, currency, %treasury_id, %value, "supply burned");
            }
            TreasuryEvent::BurnFacilityOpened {
                currency,
                treasury_id,
                facility_id,
            } => {
                tracing::info!(target: "mintage_treasury", currency, %treasury_id, %facility_id, "burn facility opened");
            }
            TreasuryEvent::BurnFacilityRetired {
                currency,
                treasury_id,
                facility_id,
                value,
            } => {
                tracing::info!(target: "mintage_treasury", currency, %treasury_id, %facility_id, %value, "burn facility retired");
            }
        }
    }
}
