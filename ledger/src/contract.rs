//! Zwap Ledger Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `registry`, `payments`, `transfer` - the bookkeeping components

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_deposit, execute_pay, execute_pay_token, execute_receive, execute_set_chain,
    execute_set_min_amount, execute_transfer_ownership,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_active_chains, query_chain, query_chain_at, query_chain_by_address, query_config,
    query_paid,
};
use crate::state::{Config, ACTIVE_COUNT, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;

    let config = Config {
        owner,
        denom: msg.denom,
        min_amount: msg.min_amount,
        scale_down: msg.scale_down,
        payout_source: msg.payout_source,
        home_chain_id: msg.home_chain_id,
    };
    CONFIG.save(deps.storage, &config)?;

    ACTIVE_COUNT.save(deps.storage, &0u32)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("denom", config.denom)
        .add_attribute("min_amount", config.min_amount.to_string())
        .add_attribute("scale_down", config.scale_down.to_string())
        .add_attribute("home_chain_id", config.home_chain_id.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Receive path
        ExecuteMsg::Deposit {
            dest_chain_id,
            depositor,
        } => execute_deposit(deps, info, dest_chain_id, depositor),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),

        // Registry & configuration
        ExecuteMsg::SetChain {
            chain_id,
            receive_address,
            listen_height,
        } => execute_set_chain(deps, info, chain_id, receive_address, listen_height),
        ExecuteMsg::SetMinAmount { amount } => execute_set_min_amount(deps, info, amount),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }

        // Payouts
        ExecuteMsg::Pay {
            recipient,
            amount,
            tx_hash,
            log_index,
            src_chain_id,
        } => execute_pay(
            deps,
            env,
            info,
            recipient,
            amount,
            tx_hash,
            log_index,
            src_chain_id,
        ),
        ExecuteMsg::PayToken {
            token,
            recipient,
            amount,
            tx_hash,
            log_index,
            src_chain_id,
        } => execute_pay_token(
            deps,
            env,
            info,
            token,
            recipient,
            amount,
            tx_hash,
            log_index,
            src_chain_id,
        ),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Chain { chain_id } => to_json_binary(&query_chain(deps, chain_id)?),
        QueryMsg::ActiveChains {} => to_json_binary(&query_active_chains(deps)?),
        QueryMsg::ChainAt { index } => to_json_binary(&query_chain_at(deps, index)?),
        QueryMsg::ChainByAddress { address } => {
            to_json_binary(&query_chain_by_address(deps, address)?)
        }
        QueryMsg::Paid { tx_hash, log_index } => {
            to_json_binary(&query_paid(deps, tx_hash, log_index)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
