use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Uint128};
use cw_storage_plus::Item;

/// Scale of `fee_percent`: `PRECISION` is 100%.
pub const PRECISION: Uint128 = Uint128::new(1_000_000_000_000_000_000u128);

/// Highest fee the owner can configure, 3% of `PRECISION`.
pub const MAX_FEE_PERCENT: Uint128 = Uint128::new(30_000_000_000_000_000u128);

/// Stores the contract config at the given key
pub const CONFIG: Item<Config> = Item::new("config");

/// Fee policy applied to every swap routed through this contract
#[cw_serde]
pub struct Config {
    /// Address allowed to change this config
    pub owner: Addr,
    /// Address where all fees will go to
    pub fee_address: Addr,
    /// Share of the realized output kept as fee, scaled by `PRECISION`
    pub fee_percent: Uint128,
    /// Bank denom used for the native legs of a swap
    pub native_denom: String,
}

impl Config {
    /// Splits a realized output into `(fee_amount, return_amount)`.
    /// The fee rounds down so the two parts always add up to `amount`.
    pub fn split(&self, amount: Uint128) -> StdResult<(Uint128, Uint128)> {
        let fee_amount = amount.multiply_ratio(self.fee_percent, PRECISION);
        Ok((fee_amount, amount.checked_sub(fee_amount)?))
    }
}
