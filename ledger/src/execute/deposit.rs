//! Deposit handlers (native receive path and CW20 receive hook).
//!
//! Deposits have no caller restriction. The destination chain id comes from
//! the caller context: a forwarding facade passes its fixed tag, direct
//! deposits fall back to the configured home tag.

use cosmwasm_std::{from_json, Addr, DepsMut, MessageInfo, Response, Uint128};
use cw20::Cw20ReceiveMsg;

use crate::error::ContractError;
use crate::msg::ReceiveMsg;
use crate::state::CONFIG;
use crate::transfer::accept_deposit;

/// Native deposit. The attached coins of the configured denom become
/// custodied funds; the emitted amount is post-scaling.
pub fn execute_deposit(
    deps: DepsMut,
    info: MessageInfo,
    dest_chain_id: Option<u64>,
    depositor: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let raw = info
        .funds
        .iter()
        .find(|c| c.denom == config.denom)
        .map(|c| c.amount)
        .unwrap_or(Uint128::zero());
    if raw.is_zero() {
        return Err(ContractError::NoFundsSent);
    }

    let depositor = match depositor {
        Some(addr) => deps.api.addr_validate(&addr)?,
        None => info.sender,
    };
    let dest_chain_id = dest_chain_id.unwrap_or(config.home_chain_id);

    let amount = accept_deposit(&config, raw)?;

    Ok(receive_response(&depositor, amount, dest_chain_id))
}

/// CW20 deposit via the receiver interface. The sending token contract has
/// already moved the funds into custody; this handler validates and emits.
pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let depositor = deps.api.addr_validate(&cw20_msg.sender)?;

    let receive_msg: ReceiveMsg = from_json(&cw20_msg.msg)?;
    match receive_msg {
        ReceiveMsg::Deposit { dest_chain_id } => {
            let dest_chain_id = dest_chain_id.unwrap_or(config.home_chain_id);
            let amount = accept_deposit(&config, cw20_msg.amount)?;

            Ok(receive_response(&depositor, amount, dest_chain_id)
                .add_attribute("token", info.sender))
        }
    }
}

fn receive_response(depositor: &Addr, amount: Uint128, dest_chain_id: u64) -> Response {
    Response::new()
        .add_attribute("action", "receive")
        .add_attribute("depositor", depositor)
        .add_attribute("amount", amount.to_string())
        .add_attribute("dest_chain_id", dest_chain_id.to_string())
}
