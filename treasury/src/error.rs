//! Treasury-specific errors.

use crate::authority::AuthorityId;
use crate::role::Role;
use mintage_ledger::LedgerError;
use mintage_types::ObjectId;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TreasuryError {
    #[error("authority {0} holds no registered role")]
    KeyNotFound(AuthorityId),

    #[error("role {role} does not permit {action}")]
    Unauthorized { role: Role, action: &'static str },

    #[error("treasury still tracks {remaining} burn facilities")]
    BurnFacilitiesNotEmpty { remaining: usize },

    #[error("admin capability is bound to treasury {bound_to}, not {treasury}")]
    AdminCapMismatch {
        treasury: ObjectId,
        bound_to: ObjectId,
    },

    #[error("burn facility {0} is not tracked by this treasury")]
    FacilityNotTracked(ObjectId),

    #[error("right value overflow during merge")]
    RightOverflow,

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// A failed operation that would otherwise have consumed its inputs.
///
/// Rust ownership stands in for the substrate's abort-and-rollback: a
/// consuming operation that fails hands the untouched resources back to the
/// caller inside the error, so no abort path ever destroys value.
#[derive(Debug)]
pub struct Rejected<T> {
    pub resource: T,
    pub error: TreasuryError,
}

impl<T> Rejected<T> {
    pub(crate) fn new(resource: T, error: TreasuryError) -> Self {
        Self { resource, error }
    }

    pub fn into_parts(self) -> (T, TreasuryError) {
        (self.resource, self.error)
    }
}

impl<T> fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<T: fmt::Debug> std::error::Error for Rejected<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
