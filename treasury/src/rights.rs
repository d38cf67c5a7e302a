//! Deferred-mint rights.
//!
//! A right is a transferable, unforgeable record of "N units of pending
//! minting". The permission check happened when the right was issued; from
//! then on the object's existence is the authorization, and redeeming it
//! consumes the object. Rights of the same kind can be merged, conserving
//! their aggregate value.

use crate::context::OpContext;
use crate::error::{Rejected, TreasuryError};
use mintage_types::{Amount, Currency, ObjectId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Marker distinguishing the two right kinds. Sealed: the treasury defines
/// exactly which kinds exist and where each is redeemed.
pub trait RightKind: sealed::Sealed + 'static {
    /// Name used in debug output.
    const LABEL: &'static str;
}

/// Kind tag for [`MintOption`].
pub enum OptionKind {}

/// Kind tag for [`Warrant`].
pub enum WarrantKind {}

impl RightKind for OptionKind {
    const LABEL: &'static str = "mint-option";
}

impl RightKind for WarrantKind {
    const LABEL: &'static str = "warrant";
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::OptionKind {}
    impl Sealed for super::WarrantKind {}
}

/// A right to mint `value` units of currency `C`, redeemable exactly once.
///
/// Move-only: merging or redeeming consumes the object, so a spent right
/// cannot be presented again. The two kinds are structurally identical but
/// not interchangeable; each has its own issuance and redemption path on
/// the treasury.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MintRight<C: Currency, K: RightKind> {
    id: ObjectId,
    value: Amount,
    _marker: PhantomData<(C, K)>,
}

/// Deferred-mint right issued against the treasury's admin capability.
pub type MintOption<C> = MintRight<C, OptionKind>;

/// Deferred-mint right issued to a registered Mint authority.
pub type Warrant<C> = MintRight<C, WarrantKind>;

impl<C: Currency, K: RightKind> MintRight<C, K> {
    pub(crate) fn new(value: Amount, ctx: &mut OpContext) -> Self {
        Self {
            id: ctx.fresh_id(),
            value,
            _marker: PhantomData,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn value(&self) -> Amount {
        self.value
    }

    /// Consume the right, yielding its value. Redemption and merge only.
    pub(crate) fn into_value(self) -> Amount {
        self.value
    }

    /// Merge `rights` into a single freshly identified right carrying their
    /// summed value. An empty input yields a zero-value right.
    ///
    /// All-or-nothing: on overflow the inputs ride back to the caller
    /// untouched.
    pub fn merge(
        rights: Vec<Self>,
        ctx: &mut OpContext,
    ) -> Result<Self, Rejected<Vec<Self>>> {
        let total = rights
            .iter()
            .try_fold(Amount::ZERO, |sum, right| sum.checked_add(right.value));
        let total = match total {
            Some(total) => total,
            None => return Err(Rejected::new(rights, TreasuryError::RightOverflow)),
        };
        for right in rights {
            right.into_value();
        }
        Ok(Self::new(total, ctx))
    }
}

impl<C: Currency, K: RightKind> fmt::Debug for MintRight<C, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:?}, {} {})",
            K::LABEL,
            self.id,
            self.value,
            C::SYMBOL
        )
    }
}
