//! Chain registry operations.
//!
//! The registry keeps three structures in lockstep: the forward map
//! `chain id -> ChainInfo`, a dense array of active chain ids with an
//! `id -> position` index table, and a `receive address -> chain id` reverse
//! index. Removal swaps the last array element into the freed slot and
//! shrinks, so positions among active entries are not stable across
//! deactivations; consumers must re-fetch rather than cache positions.

use cosmwasm_std::{Addr, StdResult, Storage};

use crate::error::ContractError;
use crate::state::{ChainInfo, ACTIVE_CHAINS, ACTIVE_COUNT, ADDR_CHAIN, CHAINS, CHAIN_SLOT};

/// Activate a chain or update its entry in place.
///
/// A previously inactive chain id is appended to the active sequence. For an
/// already active id the address and listen height are updated in place, and
/// the reverse index follows the address.
pub fn activate_chain(
    storage: &mut dyn Storage,
    chain_id: u64,
    receive_address: Addr,
    listen_height: u64,
) -> StdResult<()> {
    match CHAINS.may_load(storage, chain_id)? {
        Some(existing) => {
            if existing.receive_address != receive_address {
                ADDR_CHAIN.remove(storage, &existing.receive_address);
                ADDR_CHAIN.save(storage, &receive_address, &chain_id)?;
            }
        }
        None => {
            let count = ACTIVE_COUNT.load(storage)?;
            ACTIVE_CHAINS.save(storage, count, &chain_id)?;
            CHAIN_SLOT.save(storage, chain_id, &count)?;
            ACTIVE_COUNT.save(storage, &(count + 1))?;
            ADDR_CHAIN.save(storage, &receive_address, &chain_id)?;
        }
    }

    CHAINS.save(
        storage,
        chain_id,
        &ChainInfo {
            receive_address,
            listen_height,
        },
    )?;
    Ok(())
}

/// Deactivate a chain: clear its reverse index entry, remove it from the
/// active sequence via swap-with-last-and-shrink, and drop the forward entry.
///
/// Deactivating an already inactive chain id is a no-op, not an error.
pub fn deactivate_chain(storage: &mut dyn Storage, chain_id: u64) -> StdResult<()> {
    let Some(existing) = CHAINS.may_load(storage, chain_id)? else {
        return Ok(());
    };

    ADDR_CHAIN.remove(storage, &existing.receive_address);

    let slot = CHAIN_SLOT.load(storage, chain_id)?;
    let count = ACTIVE_COUNT.load(storage)?;
    let last = count - 1;

    if slot != last {
        let moved = ACTIVE_CHAINS.load(storage, last)?;
        ACTIVE_CHAINS.save(storage, slot, &moved)?;
        CHAIN_SLOT.save(storage, moved, &slot)?;
    }
    ACTIVE_CHAINS.remove(storage, last);
    ACTIVE_COUNT.save(storage, &last)?;

    CHAIN_SLOT.remove(storage, chain_id);
    CHAINS.remove(storage, chain_id);
    Ok(())
}

/// Whether the chain id currently has an active registry entry.
pub fn is_active(storage: &dyn Storage, chain_id: u64) -> StdResult<bool> {
    Ok(CHAINS.may_load(storage, chain_id)?.is_some())
}

/// The i-th entry of the active sequence.
pub fn active_chain_at(storage: &dyn Storage, index: u32) -> Result<u64, ContractError> {
    let count = ACTIVE_COUNT.load(storage)?;
    if index >= count {
        return Err(ContractError::IndexOutOfRange { index, count });
    }
    Ok(ACTIVE_CHAINS.load(storage, index)?)
}

/// Number of active chains.
pub fn active_count(storage: &dyn Storage) -> StdResult<u32> {
    ACTIVE_COUNT.load(storage)
}

/// Reverse lookup: the active chain id registered for this address, if any.
pub fn chain_id_by_address(storage: &dyn Storage, address: &Addr) -> StdResult<Option<u64>> {
    ADDR_CHAIN.may_load(storage, address)
}
