//! Authority registry.

use crate::authority::AuthorityId;
use crate::error::TreasuryError;
use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The mapping from authority identity to granted [`Role`].
///
/// Owned exclusively by one treasury and mutated only through its
/// admin-gated operations.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AuthorityRegistry {
    roles: HashMap<AuthorityId, Role>,
}

impl AuthorityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant `role` to `authority`, replacing any prior grant.
    /// Returns the role that was replaced, if any.
    pub(crate) fn grant(&mut self, authority: AuthorityId, role: Role) -> Option<Role> {
        self.roles.insert(authority, role)
    }

    /// Revoke the grant for `authority`, returning the role it held.
    pub(crate) fn revoke(&mut self, authority: AuthorityId) -> Result<Role, TreasuryError> {
        self.roles
            .remove(&authority)
            .ok_or(TreasuryError::KeyNotFound(authority))
    }

    /// The role currently granted to `authority`.
    pub fn role_of(&self, authority: AuthorityId) -> Result<Role, TreasuryError> {
        self.roles
            .get(&authority)
            .copied()
            .ok_or(TreasuryError::KeyNotFound(authority))
    }

    pub fn contains(&self, authority: AuthorityId) -> bool {
        self.roles.contains_key(&authority)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
