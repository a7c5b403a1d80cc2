//! Chain registry handler.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::registry::{activate_chain, deactivate_chain};
use crate::state::CONFIG;

/// Register, update, or deactivate an allowed remote chain.
pub fn execute_set_chain(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    receive_address: Option<String>,
    listen_height: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    super::ensure_owner(&config, &info.sender)?;

    let active = match receive_address {
        Some(addr) => {
            let receive_address = deps.api.addr_validate(&addr)?;
            activate_chain(deps.storage, chain_id, receive_address, listen_height)?;
            true
        }
        None => {
            deactivate_chain(deps.storage, chain_id)?;
            false
        }
    };

    Ok(Response::new()
        .add_attribute("action", "set_chain")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("active", active.to_string())
        .add_attribute("listen_height", listen_height.to_string()))
}
