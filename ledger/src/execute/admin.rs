//! Owner-gated configuration handlers.

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::CONFIG;

/// Change the minimum deposit threshold (raw external units).
pub fn execute_set_min_amount(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    super::ensure_owner(&config, &info.sender)?;

    config.min_amount = amount;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_min_amount")
        .add_attribute("min_amount", amount.to_string()))
}

/// Transfer ownership to a new address (single-step, single-owner).
pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    super::ensure_owner(&config, &info.sender)?;

    let new_owner_addr = deps.api.addr_validate(&new_owner)?;
    config.owner = new_owner_addr.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("new_owner", new_owner_addr))
}
