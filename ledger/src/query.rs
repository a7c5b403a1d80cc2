//! Query message handlers.

use cosmwasm_std::{Binary, Deps, StdError, StdResult};

use crate::msg::{
    ActiveChainsResponse, ChainAtResponse, ChainByAddressResponse, ChainResponse, ConfigResponse,
    PaidResponse,
};
use crate::payments::paid_source_chain;
use crate::registry;
use crate::state::{CHAINS, CONFIG};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner.to_string(),
        denom: config.denom,
        min_amount: config.min_amount,
        scale_down: config.scale_down,
        payout_source: config.payout_source,
        home_chain_id: config.home_chain_id,
    })
}

pub fn query_chain(deps: Deps, chain_id: u64) -> StdResult<ChainResponse> {
    match CHAINS.may_load(deps.storage, chain_id)? {
        Some(info) => Ok(ChainResponse {
            chain_id,
            active: true,
            receive_address: Some(info.receive_address.to_string()),
            listen_height: info.listen_height,
        }),
        None => Ok(ChainResponse {
            chain_id,
            active: false,
            receive_address: None,
            listen_height: 0,
        }),
    }
}

pub fn query_active_chains(deps: Deps) -> StdResult<ActiveChainsResponse> {
    let count = registry::active_count(deps.storage)?;
    let chain_ids = (0..count)
        .map(|i| {
            registry::active_chain_at(deps.storage, i)
                .map_err(|e| StdError::generic_err(e.to_string()))
        })
        .collect::<StdResult<Vec<u64>>>()?;
    Ok(ActiveChainsResponse { chain_ids })
}

pub fn query_chain_at(deps: Deps, index: u32) -> StdResult<ChainAtResponse> {
    let chain_id = registry::active_chain_at(deps.storage, index)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(ChainAtResponse { chain_id })
}

pub fn query_chain_by_address(deps: Deps, address: String) -> StdResult<ChainByAddressResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let chain_id = registry::chain_id_by_address(deps.storage, &addr)?;
    Ok(ChainByAddressResponse { chain_id })
}

pub fn query_paid(deps: Deps, tx_hash: Binary, log_index: u64) -> StdResult<PaidResponse> {
    let src_chain_id = paid_source_chain(deps.storage, &tx_hash, log_index)?;
    Ok(PaidResponse { src_chain_id })
}
