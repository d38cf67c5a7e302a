//! The treasury: authority-gated control of a currency's supply.

use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::authority::{AuthorityId, AuthorityToken};
use crate::context::OpContext;
use crate::error::{Rejected, TreasuryError};
use crate::events::TreasuryEvent;
use crate::facility::BurnFacility;
use crate::registry::AuthorityRegistry;
use crate::rights::{MintOption, MintRight, RightKind, Warrant};
use crate::role::Role;
use mintage_ledger::{AssetUnit, SupplyAuthority};
use mintage_types::{Amount, Currency, ObjectId};

/// Admin capability for one treasury.
///
/// Created together with its treasury and bound to it by id; every
/// privileged call checks the binding, so a cap for one treasury is inert
/// against any other.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TreasuryAdminCap<C: Currency> {
    id: ObjectId,
    treasury_id: ObjectId,
    _currency: PhantomData<C>,
}

impl<C: Currency> TreasuryAdminCap<C> {
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// The treasury this capability administers.
    pub fn treasury_id(&self) -> ObjectId {
        self.treasury_id
    }
}

impl<C: Currency> fmt::Debug for TreasuryAdminCap<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TreasuryAdminCap({:?}, treasury: {:?})",
            self.id, self.treasury_id
        )
    }
}

/// The root resource: wraps the sole [`SupplyAuthority`] for `C` and gates
/// every supply change behind the authority registry or a capability.
///
/// Constructing a treasury consumes the supply authority, so at most one
/// treasury exists per authority object; destroying the treasury hands the
/// authority back.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Treasury<C: Currency> {
    id: ObjectId,
    supply: SupplyAuthority<C>,
    registry: AuthorityRegistry,
    facilities: HashSet<ObjectId>,
}

impl<C: Currency> Treasury<C> {
    /// Wrap `supply` in a new treasury. Returns the treasury together with
    /// its admin capability.
    pub fn new(supply: SupplyAuthority<C>, ctx: &mut OpContext) -> (Self, TreasuryAdminCap<C>) {
        let id = ctx.fresh_id();
        let cap = TreasuryAdminCap {
            id: ctx.fresh_id(),
            treasury_id: id,
            _currency: PhantomData,
        };
        let treasury = Self {
            id,
            supply,
            registry: AuthorityRegistry::new(),
            facilities: HashSet::new(),
        };
        ctx.emit(TreasuryEvent::TreasuryCreated {
            currency: C::SYMBOL,
            treasury_id: id,
        });
        (treasury, cap)
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Units of `C` in circulation.
    pub fn total_supply(&self) -> Amount {
        self.supply.total_supply()
    }

    /// Read-only view of the authority registry.
    pub fn registry(&self) -> &AuthorityRegistry {
        &self.registry
    }

    /// Whether `facility_id` is tracked as one of this treasury's burn
    /// facilities.
    pub fn tracks_facility(&self, facility_id: ObjectId) -> bool {
        self.facilities.contains(&facility_id)
    }

    pub fn facility_count(&self) -> usize {
        self.facilities.len()
    }

    fn check_admin(&self, cap: &TreasuryAdminCap<C>) -> Result<(), TreasuryError> {
        if cap.treasury_id == self.id {
            Ok(())
        } else {
            Err(TreasuryError::AdminCapMismatch {
                treasury: self.id,
                bound_to: cap.treasury_id,
            })
        }
    }

    /// Grant `role` to `authority`, replacing any prior grant.
    pub fn add_authority(
        &mut self,
        cap: &TreasuryAdminCap<C>,
        authority: &AuthorityToken,
        role: Role,
        ctx: &mut OpContext,
    ) -> Result<(), TreasuryError> {
        self.check_admin(cap)?;
        self.registry.grant(authority.id(), role);
        ctx.emit(TreasuryEvent::AuthorityAdded {
            authority: authority.id(),
            currency: C::SYMBOL,
            treasury_id: self.id,
        });
        Ok(())
    }

    /// Revoke whatever role `authority` holds, returning it.
    pub fn remove_authority(
        &mut self,
        cap: &TreasuryAdminCap<C>,
        authority: AuthorityId,
        ctx: &mut OpContext,
    ) -> Result<Role, TreasuryError> {
        self.check_admin(cap)?;
        let role = self.registry.revoke(authority)?;
        ctx.emit(TreasuryEvent::AuthorityRemoved {
            authority,
            currency: C::SYMBOL,
            treasury_id: self.id,
        });
        Ok(role)
    }

    /// Mint `value` fresh units under a registered Mint authority.
    pub fn mint(
        &mut self,
        authority: &AuthorityToken,
        value: Amount,
        ctx: &mut OpContext,
    ) -> Result<AssetUnit<C>, TreasuryError> {
        let role = self.registry.role_of(authority.id())?;
        role.assert_can_mint()?;
        let unit = self.supply.mint(value)?;
        ctx.emit(TreasuryEvent::SupplyMinted {
            currency: C::SYMBOL,
            treasury_id: self.id,
            value,
        });
        Ok(unit)
    }

    /// Retire `unit` under a registered Burn authority; returns the retired
    /// value. On failure the unit rides back to the caller.
    pub fn burn(
        &mut self,
        authority: &AuthorityToken,
        unit: AssetUnit<C>,
        ctx: &mut OpContext,
    ) -> Result<Amount, Rejected<AssetUnit<C>>> {
        let role = match self.registry.role_of(authority.id()) {
            Ok(role) => role,
            Err(err) => return Err(Rejected::new(unit, err)),
        };
        if let Err(err) = role.assert_can_burn() {
            return Err(Rejected::new(unit, err));
        }
        let value = match self.supply.burn(unit) {
            Ok(value) => value,
            Err((unit, err)) => return Err(Rejected::new(unit, err.into())),
        };
        ctx.emit(TreasuryEvent::SupplyBurned {
            authority: Some(authority.id()),
            currency: C::SYMBOL,
            treasury_id: self.id,
            value,
        });
        Ok(value)
    }

    /// Issue a warrant for `value` under a registered Mint authority.
    ///
    /// The permission check happens here, once; whoever ends up holding the
    /// warrant can redeem it without being registered.
    pub fn new_warrant(
        &self,
        authority: &AuthorityToken,
        value: Amount,
        ctx: &mut OpContext,
    ) -> Result<Warrant<C>, TreasuryError> {
        let role = self.registry.role_of(authority.id())?;
        role.assert_can_mint()?;
        Ok(Warrant::new(value, ctx))
    }

    /// Redeem a warrant: consume it and mint its value. No registry check;
    /// the warrant is the capability.
    pub fn mint_with_warrant(
        &mut self,
        warrant: Warrant<C>,
        ctx: &mut OpContext,
    ) -> Result<AssetUnit<C>, Rejected<Warrant<C>>> {
        self.redeem_right(warrant, ctx)
    }

    /// Issue a mint option for `value` against the admin capability.
    pub fn new_mint_option(
        &self,
        cap: &TreasuryAdminCap<C>,
        value: Amount,
        ctx: &mut OpContext,
    ) -> Result<MintOption<C>, TreasuryError> {
        self.check_admin(cap)?;
        Ok(MintOption::new(value, ctx))
    }

    /// Redeem a mint option: consume it and mint its value.
    pub fn mint_with_option(
        &mut self,
        option: MintOption<C>,
        ctx: &mut OpContext,
    ) -> Result<AssetUnit<C>, Rejected<MintOption<C>>> {
        self.redeem_right(option, ctx)
    }

    fn redeem_right<K: RightKind>(
        &mut self,
        right: MintRight<C, K>,
        ctx: &mut OpContext,
    ) -> Result<AssetUnit<C>, Rejected<MintRight<C, K>>> {
        let unit = match self.supply.mint(right.value()) {
            Ok(unit) => unit,
            Err(err) => return Err(Rejected::new(right, err.into())),
        };
        let value = right.into_value();
        ctx.emit(TreasuryEvent::SupplyMinted {
            currency: C::SYMBOL,
            treasury_id: self.id,
            value,
        });
        Ok(unit)
    }

    /// Spawn a burn facility and track its id. The facility is meant to be
    /// shared with arbitrary depositors.
    pub fn new_burn_facility(&mut self, ctx: &mut OpContext) -> BurnFacility<C> {
        let facility = BurnFacility::new(ctx);
        self.facilities.insert(facility.id());
        ctx.emit(TreasuryEvent::BurnFacilityOpened {
            currency: C::SYMBOL,
            treasury_id: self.id,
            facility_id: facility.id(),
        });
        facility
    }

    /// Settle a facility: burn its entire accumulated balance, returning
    /// the retired value. The facility stays open and tracked for further
    /// deposits.
    pub fn burn_with_facility(
        &mut self,
        facility: &mut BurnFacility<C>,
        ctx: &mut OpContext,
    ) -> Result<Amount, TreasuryError> {
        if !self.facilities.contains(&facility.id()) {
            return Err(TreasuryError::FacilityNotTracked(facility.id()));
        }
        self.settle(facility, ctx)
    }

    /// Settle a facility one last time, then deregister and destroy it.
    /// Returns the value retired in this final settlement.
    pub fn retire_burn_facility(
        &mut self,
        mut facility: BurnFacility<C>,
        ctx: &mut OpContext,
    ) -> Result<Amount, Rejected<BurnFacility<C>>> {
        if !self.facilities.contains(&facility.id()) {
            let id = facility.id();
            return Err(Rejected::new(
                facility,
                TreasuryError::FacilityNotTracked(id),
            ));
        }
        let value = match self.settle(&mut facility, ctx) {
            Ok(value) => value,
            Err(err) => return Err(Rejected::new(facility, err)),
        };
        let facility_id = facility.id();
        self.facilities.remove(&facility_id);
        let residual = facility.destroy();
        // settle() drained the facility; the residual is structurally zero
        let _ = residual.destroy_zero();
        ctx.emit(TreasuryEvent::BurnFacilityRetired {
            currency: C::SYMBOL,
            treasury_id: self.id,
            facility_id,
            value,
        });
        Ok(value)
    }

    fn settle(
        &mut self,
        facility: &mut BurnFacility<C>,
        ctx: &mut OpContext,
    ) -> Result<Amount, TreasuryError> {
        let unit = facility.withdraw_all();
        match self.supply.burn(unit) {
            Ok(value) => {
                ctx.emit(TreasuryEvent::SupplyBurned {
                    authority: None,
                    currency: C::SYMBOL,
                    treasury_id: self.id,
                    value,
                });
                Ok(value)
            }
            Err((unit, err)) => {
                facility.restore(unit);
                Err(err.into())
            }
        }
    }

    /// Unwrap the treasury, returning the supply authority.
    ///
    /// Requires the matching admin capability and an empty set of tracked
    /// burn facilities; a failed destroy hands both objects back untouched.
    pub fn destroy(
        self,
        cap: TreasuryAdminCap<C>,
    ) -> Result<SupplyAuthority<C>, Rejected<(Self, TreasuryAdminCap<C>)>> {
        if cap.treasury_id != self.id {
            let err = TreasuryError::AdminCapMismatch {
                treasury: self.id,
                bound_to: cap.treasury_id,
            };
            return Err(Rejected::new((self, cap), err));
        }
        if !self.facilities.is_empty() {
            let err = TreasuryError::BurnFacilitiesNotEmpty {
                remaining: self.facilities.len(),
            };
            return Err(Rejected::new((self, cap), err));
        }
        Ok(self.supply)
    }
}

impl<C: Currency> fmt::Debug for Treasury<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Treasury({}, {:?}, supply: {}, authorities: {}, facilities: {})",
            C::SYMBOL,
            self.id,
            self.supply.total_supply(),
            self.registry.len(),
            self.facilities.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mintage_types::IdAllocator;

    struct Tst;
    impl Currency for Tst {
        const SYMBOL: &'static str = "TST";
        const DECIMALS: u8 = 0;
    }

    fn ctx() -> OpContext {
        OpContext::recording(IdAllocator::new([3u8; 32])).0
    }

    fn new_treasury(ctx: &mut OpContext) -> (Treasury<Tst>, TreasuryAdminCap<Tst>) {
        Treasury::new(SupplyAuthority::new(), ctx)
    }

    fn registered(
        treasury: &mut Treasury<Tst>,
        cap: &TreasuryAdminCap<Tst>,
        role: Role,
        ctx: &mut OpContext,
    ) -> AuthorityToken {
        let token = AuthorityToken::new(ctx);
        treasury.add_authority(cap, &token, role, ctx).unwrap();
        token
    }

    #[test]
    fn mint_requires_registration() {
        let mut ctx = ctx();
        let (mut treasury, _cap) = new_treasury(&mut ctx);
        let stranger = AuthorityToken::new(&mut ctx);

        let err = treasury
            .mint(&stranger, Amount::new(10), &mut ctx)
            .unwrap_err();
        assert_eq!(err, TreasuryError::KeyNotFound(stranger.id()));
        assert_eq!(treasury.total_supply(), Amount::ZERO);
    }

    #[test]
    fn mint_and_burn_move_total_supply() {
        let mut ctx = ctx();
        let (mut treasury, cap) = new_treasury(&mut ctx);
        let minter = registered(&mut treasury, &cap, Role::MintBurn, &mut ctx);

        let unit = treasury.mint(&minter, Amount::new(100), &mut ctx).unwrap();
        assert_eq!(treasury.total_supply(), Amount::new(100));

        let retired = treasury.burn(&minter, unit, &mut ctx).unwrap();
        assert_eq!(retired, Amount::new(100));
        assert_eq!(treasury.total_supply(), Amount::ZERO);
    }

    #[test]
    fn permission_matrix_enforced() {
        let mut ctx = ctx();
        let (mut treasury, cap) = new_treasury(&mut ctx);
        let source = registered(&mut treasury, &cap, Role::MintBurn, &mut ctx);

        for (role, may_mint, may_burn) in [
            (Role::Burn, false, true),
            (Role::Mint, true, false),
            (Role::MintBurn, true, true),
        ] {
            let token = registered(&mut treasury, &cap, role, &mut ctx);

            let minted = treasury.mint(&token, Amount::new(5), &mut ctx);
            assert_eq!(minted.is_ok(), may_mint, "mint under {role}");
            if let Ok(unit) = minted {
                treasury.burn(&source, unit, &mut ctx).unwrap();
            }

            let coin = treasury.mint(&source, Amount::new(5), &mut ctx).unwrap();
            match treasury.burn(&token, coin, &mut ctx) {
                Ok(_) => assert!(may_burn, "burn under {role}"),
                Err(rejected) => {
                    assert!(!may_burn, "burn under {role}");
                    assert!(matches!(
                        rejected.error,
                        TreasuryError::Unauthorized { action: "burn", .. }
                    ));
                    // the unit comes back; clean it up through the source
                    treasury.burn(&source, rejected.resource, &mut ctx).unwrap();
                }
            }
        }
    }

    #[test]
    fn burn_rejection_returns_the_unit() {
        let mut ctx = ctx();
        let (mut treasury, cap) = new_treasury(&mut ctx);
        let minter = registered(&mut treasury, &cap, Role::Mint, &mut ctx);

        let unit = treasury.mint(&minter, Amount::new(40), &mut ctx).unwrap();
        let rejected = treasury.burn(&minter, unit, &mut ctx).unwrap_err();
        assert_eq!(
            rejected.error,
            TreasuryError::Unauthorized {
                role: Role::Mint,
                action: "burn",
            }
        );
        assert_eq!(rejected.resource.value(), Amount::new(40));
        assert_eq!(treasury.total_supply(), Amount::new(40));
    }

    #[test]
    fn removed_authority_loses_access() {
        let mut ctx = ctx();
        let (mut treasury, cap) = new_treasury(&mut ctx);
        let minter = registered(&mut treasury, &cap, Role::Mint, &mut ctx);

        assert_eq!(
            treasury
                .remove_authority(&cap, minter.id(), &mut ctx)
                .unwrap(),
            Role::Mint
        );
        let err = treasury
            .mint(&minter, Amount::new(1), &mut ctx)
            .unwrap_err();
        assert_eq!(err, TreasuryError::KeyNotFound(minter.id()));
    }

    #[test]
    fn remove_unknown_authority_fails() {
        let mut ctx = ctx();
        let (mut treasury, cap) = new_treasury(&mut ctx);
        let stranger = AuthorityToken::new(&mut ctx);
        assert_eq!(
            treasury
                .remove_authority(&cap, stranger.id(), &mut ctx)
                .unwrap_err(),
            TreasuryError::KeyNotFound(stranger.id())
        );
    }

    #[test]
    fn regrant_replaces_role() {
        let mut ctx = ctx();
        let (mut treasury, cap) = new_treasury(&mut ctx);
        let token = registered(&mut treasury, &cap, Role::Burn, &mut ctx);

        assert!(treasury.mint(&token, Amount::new(1), &mut ctx).is_err());
        treasury
            .add_authority(&cap, &token, Role::MintBurn, &mut ctx)
            .unwrap();
        assert!(treasury.mint(&token, Amount::new(1), &mut ctx).is_ok());
        assert_eq!(treasury.registry().len(), 1);
    }

    #[test]
    fn foreign_admin_cap_is_rejected() {
        let mut ctx = ctx();
        let (mut treasury_a, _cap_a) = new_treasury(&mut ctx);
        let (_treasury_b, cap_b) = new_treasury(&mut ctx);
        let token = AuthorityToken::new(&mut ctx);

        let err = treasury_a
            .add_authority(&cap_b, &token, Role::Mint, &mut ctx)
            .unwrap_err();
        assert!(matches!(err, TreasuryError::AdminCapMismatch { .. }));
        assert!(treasury_a.registry().is_empty());
    }

    #[test]
    fn warrant_carries_authorization() {
        let mut ctx = ctx();
        let (mut treasury, cap) = new_treasury(&mut ctx);
        let minter = registered(&mut treasury, &cap, Role::Mint, &mut ctx);

        let warrant = treasury
            .new_warrant(&minter, Amount::new(250), &mut ctx)
            .unwrap();
        assert_eq!(treasury.total_supply(), Amount::ZERO);

        // redemption needs no registry membership
        let unit = treasury.mint_with_warrant(warrant, &mut ctx).unwrap();
        assert_eq!(unit.value(), Amount::new(250));
        assert_eq!(treasury.total_supply(), Amount::new(250));
    }

    #[test]
    fn warrant_issuance_respects_roles() {
        let mut ctx = ctx();
        let (mut treasury, cap) = new_treasury(&mut ctx);
        let burner = registered(&mut treasury, &cap, Role::Burn, &mut ctx);

        let err = treasury
            .new_warrant(&burner, Amount::new(1), &mut ctx)
            .unwrap_err();
        assert_eq!(
            err,
            TreasuryError::Unauthorized {
                role: Role::Burn,
                action: "mint",
            }
        );
    }

    #[test]
    fn mint_option_is_admin_gated() {
        let mut ctx = ctx();
        let (mut treasury_a, cap_a) = new_treasury(&mut ctx);
        let (_treasury_b, cap_b) = new_treasury(&mut ctx);

        assert!(matches!(
            treasury_a
                .new_mint_option(&cap_b, Amount::new(1), &mut ctx)
                .unwrap_err(),
            TreasuryError::AdminCapMismatch { .. }
        ));

        let option = treasury_a
            .new_mint_option(&cap_a, Amount::new(60), &mut ctx)
            .unwrap();
        let unit = treasury_a.mint_with_option(option, &mut ctx).unwrap();
        assert_eq!(unit.value(), Amount::new(60));
        assert_eq!(treasury_a.total_supply(), Amount::new(60));
        let burner = registered(&mut treasury_a, &cap_a, Role::Burn, &mut ctx);
        treasury_a.burn(&burner, unit, &mut ctx).unwrap();
    }

    #[test]
    fn warrant_redemption_overflow_returns_warrant() {
        let mut ctx = ctx();
        let (mut treasury, cap) = new_treasury(&mut ctx);
        let minter = registered(&mut treasury, &cap, Role::Mint, &mut ctx);

        treasury.mint(&minter, Amount::MAX, &mut ctx).unwrap();
        let warrant = treasury
            .new_warrant(&minter, Amount::new(1), &mut ctx)
            .unwrap();

        let rejected = treasury.mint_with_warrant(warrant, &mut ctx).unwrap_err();
        assert!(matches!(rejected.error, TreasuryError::Ledger(_)));
        assert_eq!(rejected.resource.value(), Amount::new(1));
        assert_eq!(treasury.total_supply(), Amount::MAX);
    }

    #[test]
    fn facility_settlement_burns_accumulated_balance() {
        let mut ctx = ctx();
        let (mut treasury, cap) = new_treasury(&mut ctx);
        let minter = registered(&mut treasury, &cap, Role::Mint, &mut ctx);

        let mut facility = treasury.new_burn_facility(&mut ctx);
        assert!(treasury.tracks_facility(facility.id()));

        let a = treasury.mint(&minter, Amount::new(70), &mut ctx).unwrap();
        let b = treasury.mint(&minter, Amount::new(30), &mut ctx).unwrap();
        facility.deposit(a).unwrap();
        facility.deposit(b).unwrap();
        assert_eq!(treasury.total_supply(), Amount::new(100));

        let settled = treasury
            .burn_with_facility(&mut facility, &mut ctx)
            .unwrap();
        assert_eq!(settled, Amount::new(100));
        assert_eq!(treasury.total_supply(), Amount::ZERO);
        assert_eq!(facility.balance_value(), Amount::ZERO);
        // still open for further deposits
        assert!(treasury.tracks_facility(facility.id()));
    }

    #[test]
    fn foreign_facility_is_rejected() {
        let mut ctx = ctx();
        let (mut treasury_a, _cap_a) = new_treasury(&mut ctx);
        let (mut treasury_b, _cap_b) = new_treasury(&mut ctx);

        let mut foreign = treasury_b.new_burn_facility(&mut ctx);
        let err = treasury_a
            .burn_with_facility(&mut foreign, &mut ctx)
            .unwrap_err();
        assert_eq!(err, TreasuryError::FacilityNotTracked(foreign.id()));

        let rejected = treasury_a
            .retire_burn_facility(foreign, &mut ctx)
            .unwrap_err();
        assert!(matches!(
            rejected.error,
            TreasuryError::FacilityNotTracked(_)
        ));
        // the facility survives for its real owner
        treasury_b
            .retire_burn_facility(rejected.resource, &mut ctx)
            .unwrap();
    }

    #[test]
    fn retire_deregisters_and_burns_residual() {
        let mut ctx = ctx();
        let (mut treasury, cap) = new_treasury(&mut ctx);
        let minter = registered(&mut treasury, &cap, Role::Mint, &mut ctx);

        let mut facility = treasury.new_burn_facility(&mut ctx);
        let unit = treasury.mint(&minter, Amount::new(55), &mut ctx).unwrap();
        facility.deposit(unit).unwrap();

        let facility_id = facility.id();
        let value = treasury.retire_burn_facility(facility, &mut ctx).unwrap();
        assert_eq!(value, Amount::new(55));
        assert_eq!(treasury.total_supply(), Amount::ZERO);
        assert!(!treasury.tracks_facility(facility_id));
        assert_eq!(treasury.facility_count(), 0);
    }

    #[test]
    fn destroy_blocked_while_facilities_tracked() {
        let mut ctx = ctx();
        let (mut treasury, cap) = new_treasury(&mut ctx);
        let facility = treasury.new_burn_facility(&mut ctx);

        let rejected = treasury.destroy(cap).unwrap_err();
        assert_eq!(
            rejected.error,
            TreasuryError::BurnFacilitiesNotEmpty { remaining: 1 }
        );

        // everything comes back; retire the facility and try again
        let (mut treasury, cap) = rejected.resource;
        treasury.retire_burn_facility(facility, &mut ctx).unwrap();
        let supply = treasury.destroy(cap).unwrap();
        assert_eq!(supply.total_supply(), Amount::ZERO);
    }

    #[test]
    fn destroy_requires_matching_cap() {
        let mut ctx = ctx();
        let (treasury_a, cap_a) = new_treasury(&mut ctx);
        let (_treasury_b, cap_b) = new_treasury(&mut ctx);

        let rejected = treasury_a.destroy(cap_b).unwrap_err();
        assert!(matches!(
            rejected.error,
            TreasuryError::AdminCapMismatch { .. }
        ));
        let (treasury_a, _cap_b) = rejected.resource;
        treasury_a.destroy(cap_a).unwrap();
    }

    #[test]
    fn destroy_returns_authority_with_supply_intact() {
        let mut ctx = ctx();
        let (mut treasury, cap) = new_treasury(&mut ctx);
        let minter = registered(&mut treasury, &cap, Role::Mint, &mut ctx);
        let _unit = treasury.mint(&minter, Amount::new(12), &mut ctx).unwrap();

        let supply = treasury.destroy(cap).unwrap();
        assert_eq!(supply.total_supply(), Amount::new(12));
    }
}
