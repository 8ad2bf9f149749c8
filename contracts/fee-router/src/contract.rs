#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Api, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::Cw20ExecuteMsg;
use models::asset::Asset;
use models::asset_info::AssetInfo;
use querier::querier::query_balance;

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, FeeSplitResponse, InstantiateMsg, MigrateMsg, QueryMsg,
    RouterExecuteMsg,
};
use crate::state::{Config, CONFIG, MAX_FEE_PERCENT};

const CONTRACT_NAME: &str = "crates.io:fee-router";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.fee_percent > MAX_FEE_PERCENT {
        return Err(ContractError::FeeExceedsMaximum {});
    }
    if msg.native_denom.is_empty() {
        return Err(ContractError::InvalidDenom {});
    }

    let config = Config {
        owner: match msg.owner {
            Some(owner) => validate_address(deps.api, &owner)?,
            None => info.sender,
        },
        fee_address: validate_address(deps.api, &msg.fee_address)?,
        fee_percent: msg.fee_percent,
        native_denom: msg.native_denom,
    };

    CONFIG.save(deps.storage, &config)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("fee_address", config.fee_address)
        .add_attribute("fee_percent", config.fee_percent))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetFeePercent { fee_percent } => set_fee_percent(deps, info, fee_percent),
        ExecuteMsg::SetFeeAddress { fee_address } => set_fee_address(deps, info, fee_address),
        ExecuteMsg::TransferOwnership { new_owner } => transfer_ownership(deps, info, new_owner),
        ExecuteMsg::SwapExactTokensForTokens {
            router,
            amount_in,
            amount_out_min,
            path,
            to,
            deadline,
        } => swap_exact_tokens_for_tokens(
            deps.as_ref(),
            env,
            info,
            router,
            amount_in,
            amount_out_min,
            path,
            to,
            deadline,
        ),
        ExecuteMsg::SwapExactNativeForTokens {
            router,
            amount_out_min,
            path,
            to,
            deadline,
        } => swap_exact_native_for_tokens(
            deps.as_ref(),
            env,
            info,
            router,
            amount_out_min,
            path,
            to,
            deadline,
        ),
        ExecuteMsg::SwapExactTokensForNative {
            router,
            amount_in,
            amount_out_min,
            path,
            to,
            deadline,
        } => swap_exact_tokens_for_native(
            deps.as_ref(),
            env,
            info,
            router,
            amount_in,
            amount_out_min,
            path,
            to,
            deadline,
        ),
        ExecuteMsg::DisburseOutput {
            return_asset_info,
            prev_balance,
            to,
        } => disburse_output(deps.as_ref(), env, info.sender, return_asset_info, prev_balance, to),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    match msg {
        QueryMsg::Config {} => Ok(to_json_binary(&ConfigResponse {
            owner: config.owner,
            fee_address: config.fee_address,
            fee_percent: config.fee_percent,
            max_fee_percent: MAX_FEE_PERCENT,
            native_denom: config.native_denom,
        })?),
        QueryMsg::FeePercent {} => Ok(to_json_binary(&config.fee_percent)?),
        QueryMsg::FeeAddress {} => Ok(to_json_binary(&config.fee_address)?),
        QueryMsg::Owner {} => Ok(to_json_binary(&config.owner)?),
        QueryMsg::FeeSplit { amount } => {
            let (fee_amount, return_amount) = config.split(amount)?;
            Ok(to_json_binary(&FeeSplitResponse {
                fee_amount,
                return_amount,
            })?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

fn set_fee_percent(
    deps: DepsMut,
    info: MessageInfo,
    fee_percent: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }
    if fee_percent > MAX_FEE_PERCENT {
        return Err(ContractError::FeeExceedsMaximum {});
    }

    let previous_fee_percent = config.fee_percent;
    config.fee_percent = fee_percent;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("action", "set_fee_percent")
        .add_attribute("previous_fee_percent", previous_fee_percent)
        .add_attribute("fee_percent", fee_percent))
}

fn set_fee_address(
    deps: DepsMut,
    info: MessageInfo,
    fee_address: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }
    let fee_address = validate_address(deps.api, &fee_address)?;
    if fee_address == config.fee_address {
        return Err(ContractError::SameAddress {});
    }

    let previous_fee_address = std::mem::replace(&mut config.fee_address, fee_address);
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("action", "set_fee_address")
        .add_attribute("previous_fee_address", previous_fee_address)
        .add_attribute("fee_address", config.fee_address))
}

fn transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }
    let new_owner = validate_address(deps.api, &new_owner)?;
    if new_owner == config.owner {
        return Err(ContractError::SameAddress {});
    }

    let previous_owner = std::mem::replace(&mut config.owner, new_owner);
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("previous_owner", previous_owner)
        .add_attribute("owner", config.owner))
}

#[allow(clippy::too_many_arguments)]
fn swap_exact_tokens_for_tokens(
    deps: Deps,
    env: Env,
    info: MessageInfo,
    router: String,
    amount_in: Uint128,
    amount_out_min: Uint128,
    path: Vec<String>,
    to: String,
    deadline: u64,
) -> Result<Response, ContractError> {
    assert_no_funds(&info)?;
    if amount_in.is_zero() {
        return Err(ContractError::ZeroAmount {});
    }
    let router = validate_address(deps.api, &router)?;
    let to = validate_address(deps.api, &to)?;
    let (offer_token, return_token) = path_ends(deps.api, &path)?;

    let mut msgs = pull_offer_token(&env, &info.sender, &offer_token, &router, amount_in)?;
    msgs.push(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: router.to_string(),
        funds: vec![],
        msg: to_json_binary(&RouterExecuteMsg::SwapExactTokensForTokens {
            amount_in,
            amount_out_min,
            path,
            to: env.contract.address.to_string(),
            deadline,
        })?,
    }));

    forward_swap(
        deps,
        env,
        msgs,
        AssetInfo::Token {
            contract_addr: return_token,
        },
        to,
    )
    .map(|res| {
        res.add_attribute("action", "swap_exact_tokens_for_tokens")
            .add_attribute("router", router)
            .add_attribute("offer_asset", offer_token)
            .add_attribute("offer_amount", amount_in)
    })
}

#[allow(clippy::too_many_arguments)]
fn swap_exact_native_for_tokens(
    deps: Deps,
    env: Env,
    info: MessageInfo,
    router: String,
    amount_out_min: Uint128,
    path: Vec<String>,
    to: String,
    deadline: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let amount_in = must_pay_native(&info, &config.native_denom)?;
    let router = validate_address(deps.api, &router)?;
    let to = validate_address(deps.api, &to)?;
    let (_, return_token) = path_ends(deps.api, &path)?;

    let msgs = vec![CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: router.to_string(),
        funds: info.funds,
        msg: to_json_binary(&RouterExecuteMsg::SwapExactNativeForTokens {
            amount_out_min,
            path,
            to: env.contract.address.to_string(),
            deadline,
        })?,
    })];

    forward_swap(
        deps,
        env,
        msgs,
        AssetInfo::Token {
            contract_addr: return_token,
        },
        to,
    )
    .map(|res| {
        res.add_attribute("action", "swap_exact_native_for_tokens")
            .add_attribute("router", router)
            .add_attribute("offer_asset", config.native_denom)
            .add_attribute("offer_amount", amount_in)
    })
}

#[allow(clippy::too_many_arguments)]
fn swap_exact_tokens_for_native(
    deps: Deps,
    env: Env,
    info: MessageInfo,
    router: String,
    amount_in: Uint128,
    amount_out_min: Uint128,
    path: Vec<String>,
    to: String,
    deadline: u64,
) -> Result<Response, ContractError> {
    // Attached coins would sit in the native balance snapshot and never leave
    assert_no_funds(&info)?;
    if amount_in.is_zero() {
        return Err(ContractError::ZeroAmount {});
    }
    let config = CONFIG.load(deps.storage)?;
    let router = validate_address(deps.api, &router)?;
    let to = validate_address(deps.api, &to)?;
    let (offer_token, _) = path_ends(deps.api, &path)?;

    let mut msgs = pull_offer_token(&env, &info.sender, &offer_token, &router, amount_in)?;
    msgs.push(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: router.to_string(),
        funds: vec![],
        msg: to_json_binary(&RouterExecuteMsg::SwapExactTokensForNative {
            amount_in,
            amount_out_min,
            path,
            to: env.contract.address.to_string(),
            deadline,
        })?,
    }));

    forward_swap(
        deps,
        env,
        msgs,
        AssetInfo::NativeToken {
            denom: config.native_denom,
        },
        to,
    )
    .map(|res| {
        res.add_attribute("action", "swap_exact_tokens_for_native")
            .add_attribute("router", router)
            .add_attribute("offer_asset", offer_token)
            .add_attribute("offer_amount", amount_in)
    })
}

/// Appends the disbursement step to the swap messages. The output balance is
/// snapshotted here, before the router runs, so `DisburseOutput` only hands
/// out what this swap produced.
fn forward_swap(
    deps: Deps,
    env: Env,
    mut msgs: Vec<CosmosMsg>,
    return_asset_info: AssetInfo,
    to: Addr,
) -> Result<Response, ContractError> {
    let prev_balance = query_balance(&deps.querier, &env.contract.address, &return_asset_info)?;
    msgs.push(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: env.contract.address.to_string(),
        funds: vec![],
        msg: to_json_binary(&ExecuteMsg::DisburseOutput {
            return_asset_info: return_asset_info.clone(),
            prev_balance,
            to: to.clone(),
        })?,
    }));

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("return_asset", return_asset_info.id())
        .add_attribute("receiver", to))
}

/// Sends the fee share to the fee collector and the rest to `to`.
fn disburse_output(
    deps: Deps,
    env: Env,
    sender: Addr,
    return_asset_info: AssetInfo,
    prev_balance: Uint128,
    to: Addr,
) -> Result<Response, ContractError> {
    // This is an internal function that's not meant to be executed by users
    if env.contract.address != sender {
        return Err(ContractError::NotSelf {});
    }

    let config = CONFIG.load(deps.storage)?;
    let balance = query_balance(&deps.querier, &env.contract.address, &return_asset_info)?;
    let realized_amount = balance.checked_sub(prev_balance)?;
    let (fee_amount, return_amount) = config.split(realized_amount)?;

    let mut msgs: Vec<CosmosMsg> = vec![];
    for (recipient, amount) in [(&config.fee_address, fee_amount), (&to, return_amount)] {
        if !amount.is_zero() {
            let asset = Asset {
                info: return_asset_info.clone(),
                amount,
            };
            msgs.push(asset.to_send_msg(recipient.to_string())?);
        }
    }

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "disburse")
        .add_attribute("return_asset", return_asset_info.id())
        .add_attribute("realized_amount", realized_amount)
        .add_attribute("return_amount", return_amount)
        .add_attribute("receiver", to)
        .add_attribute("fee_amount", fee_amount)
        .add_attribute("fee_address", config.fee_address))
}

/// Moves `amount` of the offer token from `owner` into this contract and lets
/// `router` spend it.
fn pull_offer_token(
    env: &Env,
    owner: &Addr,
    token: &Addr,
    router: &Addr,
    amount: Uint128,
) -> StdResult<Vec<CosmosMsg>> {
    Ok(vec![
        CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: token.to_string(),
            funds: vec![],
            msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                owner: owner.to_string(),
                recipient: env.contract.address.to_string(),
                amount,
            })?,
        }),
        CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: token.to_string(),
            funds: vec![],
            msg: to_json_binary(&Cw20ExecuteMsg::IncreaseAllowance {
                spender: router.to_string(),
                amount,
                expires: None,
            })?,
        }),
    ])
}

/// Rejects empty or malformed addresses; this chain's equivalent of the zero address.
fn validate_address(api: &dyn Api, addr: &str) -> Result<Addr, ContractError> {
    if addr.is_empty() {
        return Err(ContractError::InvalidAddress {});
    }
    api.addr_validate(addr)
        .map_err(|_| ContractError::InvalidAddress {})
}

/// Returns the first and last token of a swap path.
fn path_ends(api: &dyn Api, path: &[String]) -> Result<(Addr, Addr), ContractError> {
    match path {
        [first, .., last] => Ok((validate_address(api, first)?, validate_address(api, last)?)),
        _ => Err(ContractError::InvalidPath {}),
    }
}

fn assert_no_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if info.funds.is_empty() {
        Ok(())
    } else {
        Err(ContractError::InvalidFunds {
            expected: "no funds".to_string(),
        })
    }
}

fn must_pay_native(info: &MessageInfo, denom: &str) -> Result<Uint128, ContractError> {
    match info.funds.as_slice() {
        [coin] if coin.denom == denom && !coin.amount.is_zero() => Ok(coin.amount),
        _ => Err(ContractError::InvalidFunds {
            expected: denom.to_string(),
        }),
    }
}
