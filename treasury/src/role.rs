//! Supply-control roles.

use crate::error::TreasuryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a registered authority is allowed to do to the supply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// May retire units.
    Burn,
    /// May create units.
    Mint,
    /// May do both.
    MintBurn,
}

impl Role {
    pub fn new_burn() -> Self {
        Role::Burn
    }

    pub fn new_mint() -> Self {
        Role::Mint
    }

    pub fn new_mint_burn() -> Self {
        Role::MintBurn
    }

    pub fn can_mint(&self) -> bool {
        matches!(self, Role::Mint | Role::MintBurn)
    }

    pub fn can_burn(&self) -> bool {
        matches!(self, Role::Burn | Role::MintBurn)
    }

    pub fn assert_can_mint(&self) -> Result<(), TreasuryError> {
        if self.can_mint() {
            Ok(())
        } else {
            Err(TreasuryError::Unauthorized {
                role: *self,
                action: "mint",
            })
        }
    }

    pub fn assert_can_burn(&self) -> Result<(), TreasuryError> {
        if self.can_burn() {
            Ok(())
        } else {
            Err(TreasuryError::Unauthorized {
                role: *self,
                action: "burn",
            })
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Burn => "burn",
            Role::Mint => "mint",
            Role::MintBurn => "mint+burn",
        };
        write!(f, "{}", name)
    }
}
