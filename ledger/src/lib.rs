//! Fungible asset substrate.
//!
//! This crate is the raw token ledger the treasury layer builds on:
//! - [`SupplyAuthority`]: the sole object able to create and retire units
//!   of a currency, tracking its total supply.
//! - [`AssetUnit`]: a move-only quantity of the asset. Units can be joined
//!   and split, always conserving value; they cannot be cloned, so a unit
//!   cannot be spent twice.
//!
//! Nothing here performs authorization. Gating mint/burn behind roles and
//! capabilities is the treasury layer's job.

pub mod error;
pub mod supply;
pub mod unit;

pub use error::LedgerError;
pub use supply::SupplyAuthority;
pub use unit::AssetUnit;
