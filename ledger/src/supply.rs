//! Supply authority for a currency.

use crate::error::LedgerError;
use crate::unit::AssetUnit;
use mintage_types::{Amount, Currency};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// The sole object able to create and retire units of currency `C`.
///
/// The authority is move-only and must be created exactly once per
/// currency, at genesis. Whoever holds it controls the supply; wrapping it
/// in a treasury is how that control gets gated behind roles.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SupplyAuthority<C: Currency> {
    total_supply: Amount,
    _currency: PhantomData<C>,
}

impl<C: Currency> SupplyAuthority<C> {
    /// Create the authority for `C` with zero supply.
    pub fn new() -> Self {
        Self {
            total_supply: Amount::ZERO,
            _currency: PhantomData,
        }
    }

    /// Units of `C` in circulation.
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Create `amount` new units, growing total supply by exactly `amount`.
    pub fn mint(&mut self, amount: Amount) -> Result<AssetUnit<C>, LedgerError> {
        let next = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::SupplyOverflow {
                current: self.total_supply,
                attempted: amount,
            })?;
        self.total_supply = next;
        Ok(AssetUnit::new(amount))
    }

    /// Retire `unit`, shrinking total supply by exactly its value.
    ///
    /// Underflow means `unit` did not descend from this authority (a
    /// corruption of the embedding substrate); the unit rides back to the
    /// caller in the error and nothing changes.
    pub fn burn(&mut self, unit: AssetUnit<C>) -> Result<Amount, (AssetUnit<C>, LedgerError)> {
        match self.total_supply.checked_sub(unit.value()) {
            Some(remaining) => {
                self.total_supply = remaining;
                Ok(unit.into_raw())
            }
            None => {
                let err = LedgerError::SupplyUnderflow {
                    current: self.total_supply,
                    attempted: unit.value(),
                };
                Err((unit, err))
            }
        }
    }
}

impl<C: Currency> Default for SupplyAuthority<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Currency> fmt::Debug for SupplyAuthority<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SupplyAuthority({}, total_supply: {})",
            C::SYMBOL,
            self.total_supply
        )
    }
}
