//! Currency tag trait.

/// A zero-sized tag identifying one fungible currency.
///
/// Every resource object in the workspace (`SupplyAuthority`, `AssetUnit`,
/// `Treasury`, rights, facilities) is generic over its currency, so objects
/// of different currencies cannot be mixed at compile time.
///
/// ```
/// use mintage_types::Currency;
///
/// struct Gld;
///
/// impl Currency for Gld {
///     const SYMBOL: &'static str = "GLD";
///     const DECIMALS: u8 = 9;
/// }
/// ```
pub trait Currency: 'static {
    /// Short symbol used in events and display output.
    const SYMBOL: &'static str;

    /// Number of decimal places between the raw unit and the
    /// human-facing denomination.
    const DECIMALS: u8;
}
