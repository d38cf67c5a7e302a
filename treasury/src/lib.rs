//! The permissioned ledger-control layer.
//!
//! A [`Treasury`] wraps the sole supply authority of a currency and gates
//! every change to total supply behind capability checks:
//! - an authority registry maps unforgeable [`AuthorityToken`] identities to
//!   a [`Role`] ({Burn, Mint, MintBurn}); `mint`/`burn` consult it on every
//!   call
//! - [`Warrant`]s and [`MintOption`]s are transferable deferred-mint rights:
//!   the permission check happens once at issuance and is carried by the
//!   object itself until redemption
//! - [`BurnFacility`] inverts the pattern: anyone may deposit value, only
//!   the treasury can settle the accumulated balance into a burn
//! - a [`TreasuryAdminCap`], bound to its treasury at creation, is required
//!   for registry mutation and treasury destruction
//!
//! Every committed state transition is reported through an [`EventSink`].

pub mod authority;
pub mod context;
pub mod error;
pub mod events;
pub mod facility;
pub mod registry;
pub mod rights;
pub mod role;
pub mod treasury;

pub use authority::{AuthorityId, AuthorityToken};
pub use context::OpContext;
pub use error::{Rejected, TreasuryError};
pub use events::{EventSink, MemoryEventLog, TracingEventSink, TreasuryEvent};
pub use facility::BurnFacility;
pub use registry::AuthorityRegistry;
pub use rights::{MintOption, MintRight, OptionKind, RightKind, Warrant, WarrantKind};
pub use role::Role;
pub use treasury::{Treasury, TreasuryAdminCap};
