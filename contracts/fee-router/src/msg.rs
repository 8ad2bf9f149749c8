use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use models::asset_info::AssetInfo;

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: Option<String>,
    pub fee_percent: Uint128,
    pub fee_address: String,
    pub native_denom: String,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    SetFeePercent {
        fee_percent: Uint128,
    },
    SetFeeAddress {
        fee_address: String,
    },
    TransferOwnership {
        new_owner: String,
    },
    SwapExactTokensForTokens {
        router: String,
        amount_in: Uint128,
        amount_out_min: Uint128,
        path: Vec<String>,
        to: String,
        deadline: u64,
    },
    /// Input is the native coin attached to the message
    SwapExactNativeForTokens {
        router: String,
        amount_out_min: Uint128,
        path: Vec<String>,
        to: String,
        deadline: u64,
    },
    SwapExactTokensForNative {
        router: String,
        amount_in: Uint128,
        amount_out_min: Uint128,
        path: Vec<String>,
        to: String,
        deadline: u64,
    },
    /// Internal step dispatched after the router swap. Splits whatever the
    /// router delivered on top of `prev_balance` between the fee collector
    /// and `to`.
    DisburseOutput {
        return_asset_info: AssetInfo,
        prev_balance: Uint128,
        to: Addr,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(Uint128)]
    FeePercent {},
    #[returns(Addr)]
    FeeAddress {},
    #[returns(Addr)]
    Owner {},
    /// Fee and net amount the current config takes from a realized output
    #[returns(FeeSplitResponse)]
    FeeSplit { amount: Uint128 },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub fee_address: Addr,
    pub fee_percent: Uint128,
    pub max_fee_percent: Uint128,
    pub native_denom: String,
}

#[cw_serde]
pub struct FeeSplitResponse {
    pub fee_amount: Uint128,
    pub return_amount: Uint128,
}

/// Swap entry points of the AMM router this contract forwards to.
/// The router is expected to revert on a missed deadline or when the
/// output falls below `amount_out_min`.
#[cw_serde]
pub enum RouterExecuteMsg {
    SwapExactTokensForTokens {
        amount_in: Uint128,
        amount_out_min: Uint128,
        path: Vec<String>,
        to: String,
        deadline: u64,
    },
    SwapExactNativeForTokens {
        amount_out_min: Uint128,
        path: Vec<String>,
        to: String,
        deadline: u64,
    },
    SwapExactTokensForNative {
        amount_in: Uint128,
        amount_out_min: Uint128,
        path: Vec<String>,
        to: String,
        deadline: u64,
    },
}
