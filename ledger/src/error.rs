//! Ledger-specific errors.

use mintage_types::Amount;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("total supply overflow: cannot mint {attempted} on top of {current}")]
    SupplyOverflow { current: Amount, attempted: Amount },

    #[error("total supply underflow: cannot retire {attempted} from {current}")]
    SupplyUnderflow { current: Amount, attempted: Amount },

    #[error("asset value overflow while joining units")]
    ValueOverflow,

    #[error("insufficient value: need {needed}, have {available}")]
    Insufficient { needed: Amount, available: Amount },
}
