use cosmwasm_std::{
    entry_point, to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, WasmMsg,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let ledger = deps.api.addr_validate(&msg.ledger)?;
    let config = Config {
        ledger,
        dest_chain_id: msg.dest_chain_id,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("ledger", config.ledger)
        .add_attribute("dest_chain_id", config.dest_chain_id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Forward {} => execute_forward(deps, info),
    }
}

fn execute_forward(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    if info.funds.is_empty() {
        return Err(ContractError::NoFundsSent);
    }

    let config = CONFIG.load(deps.storage)?;

    let deposit = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.ledger.to_string(),
        msg: to_json_binary(&ledger::msg::ExecuteMsg::Deposit {
            dest_chain_id: Some(config.dest_chain_id),
            depositor: Some(info.sender.to_string()),
        })?,
        funds: info.funds,
    });

    Ok(Response::new()
        .add_message(deposit)
        .add_attribute("action", "forward")
        .add_attribute("depositor", info.sender)
        .add_attribute("dest_chain_id", config.dest_chain_id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        ledger: config.ledger.to_string(),
        dest_chain_id: config.dest_chain_id,
    })
}
