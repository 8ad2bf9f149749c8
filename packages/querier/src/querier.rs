use cosmwasm_std::{Addr, QuerierWrapper, StdResult, Uint128};
use models::asset_info::AssetInfo;

use super::msg::{Cw20BalanceResponse, Cw20QueryMsg};

pub fn query_native_balance(
    querier: &QuerierWrapper,
    addr: &Addr,
    denom: &String,
) -> StdResult<Uint128> {
    Ok(querier.query_balance(addr, denom)?.amount)
}

/// Balance of `addr` on a CW20 contract. A token that cannot answer the
/// query is an error, so a bad output token aborts the swap instead of
/// reading as zero.
pub fn query_token_balance(
    querier: &QuerierWrapper,
    addr: &Addr,
    token: &String,
) -> StdResult<Uint128> {
    let res: Cw20BalanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: addr.into(),
        },
    )?;
    Ok(res.balance)
}

pub fn query_balance(
    querier: &QuerierWrapper,
    addr: &Addr,
    asset_info: &AssetInfo,
) -> StdResult<Uint128> {
    match &asset_info {
        AssetInfo::NativeToken { denom } => query_native_balance(querier, addr, denom),
        AssetInfo::Token { contract_addr } => {
            query_token_balance(querier, addr, &contract_addr.to_string())
        }
    }
}
