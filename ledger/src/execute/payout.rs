//! Payout handlers.
//!
//! Order of checks, both entry points: owner gate, chain active, replay
//! record, funds check, then the transfer message. The record is written
//! before the transfer message is dispatched, but the host executes response
//! messages inside the same transaction and reverts every state write of the
//! call when one fails: a failed transfer does not consume the replay key.

use cosmwasm_std::{Addr, Binary, DepsMut, Env, MessageInfo, Response, Uint128};

use common::AssetInfo;

use crate::error::ContractError;
use crate::payments::record_if_new;
use crate::registry;
use crate::state::{PayoutSource, CHAINS, CONFIG};
use crate::transfer::ensure_funds;

/// Pay out custodied native coins for an observed source-chain event.
pub fn execute_pay(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
    tx_hash: Binary,
    log_index: u64,
    src_chain_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    super::ensure_owner(&config, &info.sender)?;

    let recipient = deps.api.addr_validate(&recipient)?;
    ensure_chain_allowed(deps.as_ref().storage, src_chain_id)?;
    record_if_new(deps.storage, &tx_hash, log_index, src_chain_id)?;

    let asset = AssetInfo::Native {
        denom: config.denom.clone(),
    };
    ensure_funds(deps.as_ref(), &asset, &env.contract.address, amount)?;
    let transfer = asset.transfer_msg(&recipient, amount)?;

    Ok(paid_response(&tx_hash, log_index, src_chain_id)
        .add_message(transfer)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string()))
}

/// Pay out CW20 tokens for an observed source-chain event. Funds come from
/// the contract's custody or from the source chain's registered custodian,
/// per the configured payout source.
#[allow(clippy::too_many_arguments)]
pub fn execute_pay_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    recipient: String,
    amount: Uint128,
    tx_hash: Binary,
    log_index: u64,
    src_chain_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    super::ensure_owner(&config, &info.sender)?;

    let recipient = deps.api.addr_validate(&recipient)?;
    let token_addr = deps.api.addr_validate(&token)?;
    ensure_chain_allowed(deps.as_ref().storage, src_chain_id)?;
    record_if_new(deps.storage, &tx_hash, log_index, src_chain_id)?;

    let asset = AssetInfo::Cw20 {
        contract_addr: token_addr,
    };
    let transfer = match config.payout_source {
        PayoutSource::Custody => {
            ensure_funds(deps.as_ref(), &asset, &env.contract.address, amount)?;
            asset.transfer_msg(&recipient, amount)?
        }
        PayoutSource::Custodians => {
            // Custodian selection happens at call time: whichever receive
            // address the registry holds for the source chain right now.
            let custodian = custodian_for_chain(&deps, src_chain_id)?;
            ensure_funds(deps.as_ref(), &asset, &custodian, amount)?;
            asset.transfer_from_msg(&custodian, &recipient, amount)?
        }
    };

    Ok(paid_response(&tx_hash, log_index, src_chain_id)
        .add_message(transfer)
        .add_attribute("token", token)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string()))
}

fn ensure_chain_allowed(
    storage: &dyn cosmwasm_std::Storage,
    src_chain_id: u64,
) -> Result<(), ContractError> {
    if !registry::is_active(storage, src_chain_id)? {
        return Err(ContractError::ChainNotAllowed {
            chain_id: src_chain_id,
        });
    }
    Ok(())
}

fn custodian_for_chain(deps: &DepsMut, src_chain_id: u64) -> Result<Addr, ContractError> {
    let info = CHAINS
        .may_load(deps.storage, src_chain_id)?
        .ok_or(ContractError::ChainNotAllowed {
            chain_id: src_chain_id,
        })?;
    Ok(info.receive_address)
}

fn paid_response(tx_hash: &Binary, log_index: u64, src_chain_id: u64) -> Response {
    Response::new()
        .add_attribute("action", "paid")
        .add_attribute("tx_hash", format!("0x{}", hex::encode(tx_hash.as_slice())))
        .add_attribute("log_index", log_index.to_string())
        .add_attribute("src_chain_id", src_chain_id.to_string())
}
