//! Move-only asset units.

use crate::error::LedgerError;
use mintage_types::{Amount, Currency};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// A quantity of currency `C` held as an owned resource.
///
/// An `AssetUnit` is actual value, not a claim: it exists only because a
/// [`SupplyAuthority`](crate::SupplyAuthority) minted it, and value moves by
/// moving the unit. The type implements neither `Clone` nor `Copy`;
/// duplicating a unit would duplicate supply.
///
/// Deserialization is reserved for the durable-storage substrate, which is
/// trusted to restore exactly the objects it persisted.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct AssetUnit<C: Currency> {
    value: Amount,
    _currency: PhantomData<C>,
}

impl<C: Currency> AssetUnit<C> {
    pub(crate) fn new(value: Amount) -> Self {
        Self {
            value,
            _currency: PhantomData,
        }
    }

    /// A unit holding no value.
    pub fn zero() -> Self {
        Self::new(Amount::ZERO)
    }

    pub fn value(&self) -> Amount {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Fold `other` into this unit, returning the new total.
    ///
    /// On overflow nothing changes and `other` rides back to the caller in
    /// the error. Units descended from a single supply authority cannot
    /// overflow a `u128` (the supply itself is overflow-checked at mint);
    /// the check guards against units of foreign provenance.
    pub fn join(&mut self, other: Self) -> Result<Amount, (Self, LedgerError)> {
        match self.value.checked_add(other.value) {
            Some(total) => {
                self.value = total;
                Ok(total)
            }
            None => Err((other, LedgerError::ValueOverflow)),
        }
    }

    /// Split `amount` out of this unit into a new one.
    pub fn split(&mut self, amount: Amount) -> Result<Self, LedgerError> {
        match self.value.checked_sub(amount) {
            Some(remaining) => {
                self.value = remaining;
                Ok(Self::new(amount))
            }
            None => Err(LedgerError::Insufficient {
                needed: amount,
                available: self.value,
            }),
        }
    }

    /// Destroy a zero-value unit. A unit still holding value is handed back
    /// untouched; retiring value goes through the supply authority.
    pub fn destroy_zero(self) -> Result<(), Self> {
        if self.value.is_zero() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Consume the unit, yielding its raw value. Supply-retirement only.
    pub(crate) fn into_raw(self) -> Amount {
        self.value
    }
}

impl<C: Currency> fmt::Debug for AssetUnit<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetUnit({} {})", self.value, C::SYMBOL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tst;
    impl Currency for Tst {
        const SYMBOL: &'static str = "TST";
        const DECIMALS: u8 = 0;
    }

    #[test]
    fn zero_unit_is_zero() {
        let unit = AssetUnit::<Tst>::zero();
        assert!(unit.is_zero());
        assert_eq!(unit.value(), Amount::ZERO);
    }

    #[test]
    fn join_accumulates_value() {
        let mut a = AssetUnit::<Tst>::new(Amount::new(40));
        let b = AssetUnit::new(Amount::new(2));
        let total = a.join(b).unwrap();
        assert_eq!(total, Amount::new(42));
        assert_eq!(a.value(), Amount::new(42));
    }

    #[test]
    fn join_overflow_returns_other_untouched() {
        let mut a = AssetUnit::<Tst>::new(Amount::MAX);
        let b = AssetUnit::new(Amount::new(1));
        let (returned, err) = a.join(b).unwrap_err();
        assert_eq!(err, LedgerError::ValueOverflow);
        assert_eq!(returned.value(), Amount::new(1));
        assert_eq!(a.value(), Amount::MAX);
    }

    #[test]
    fn split_conserves_value() {
        let mut unit = AssetUnit::<Tst>::new(Amount::new(100));
        let part = unit.split(Amount::new(30)).unwrap();
        assert_eq!(part.value(), Amount::new(30));
        assert_eq!(unit.value(), Amount::new(70));
    }

    #[test]
    fn split_more_than_held_fails() {
        let mut unit = AssetUnit::<Tst>::new(Amount::new(10));
        let err = unit.split(Amount::new(11)).unwrap_err();
        assert_eq!(
            err,
            LedgerError::Insufficient {
                needed: Amount::new(11),
                available: Amount::new(10),
            }
        );
        assert_eq!(unit.value(), Amount::new(10));
    }

    #[test]
    fn destroy_zero_rejects_valued_unit() {
        let unit = AssetUnit::<Tst>::new(Amount::new(1));
        let returned = unit.destroy_zero().unwrap_err();
        assert_eq!(returned.value(), Amount::new(1));
        assert!(AssetUnit::<Tst>::zero().destroy_zero().is_ok());
    }
}
