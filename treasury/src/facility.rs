//! Burn facilities.

use crate::context::OpContext;
use crate::error::Rejected;
use mintage_ledger::AssetUnit;
use mintage_types::{Amount, Currency, ObjectId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A deposit-only escrow for value headed out of circulation.
///
/// Anyone may deposit; deposits are permissionless and irreversible from
/// the depositor's side. Only the treasury that spawned the facility can
/// settle or retire the accumulated balance.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct BurnFacility<C: Currency> {
    id: ObjectId,
    balance: AssetUnit<C>,
}

impl<C: Currency> BurnFacility<C> {
    pub(crate) fn new(ctx: &mut OpContext) -> Self {
        Self {
            id: ctx.fresh_id(),
            balance: AssetUnit::zero(),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Value accumulated so far.
    pub fn balance_value(&self) -> Amount {
        self.balance.value()
    }

    /// Fold `unit` into the accumulated balance; returns the deposited
    /// amount. No authorization check: deposits are open to everyone.
    pub fn deposit(&mut self, unit: AssetUnit<C>) -> Result<Amount, Rejected<AssetUnit<C>>> {
        let amount = unit.value();
        match self.balance.join(unit) {
            Ok(_) => Ok(amount),
            Err((unit, err)) => Err(Rejected::new(unit, err.into())),
        }
    }

    /// Atomically zero the balance and return everything accumulated.
    /// Treasury settlement only.
    pub(crate) fn withdraw_all(&mut self) -> AssetUnit<C> {
        std::mem::replace(&mut self.balance, AssetUnit::zero())
    }

    /// Put a withdrawn balance back. Settlement-rollback only; the balance
    /// must still be the zero left behind by [`withdraw_all`].
    pub(crate) fn restore(&mut self, unit: AssetUnit<C>) {
        debug_assert!(self.balance.is_zero());
        self.balance = unit;
    }

    /// Delete the facility's identity, yielding whatever balance remains.
    pub(crate) fn destroy(self) -> AssetUnit<C> {
        self.balance
    }
}

impl<C: Currency> fmt::Debug for BurnFacility<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BurnFacility({:?}, balance: {} {})",
            self.id,
            self.balance.value(),
            C::SYMBOL
        )
    }
}
