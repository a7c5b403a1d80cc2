//! Payment ledger: replay protection for payout instructions.
//!
//! One observed event on a source chain is identified by the composite key
//! `(transaction hash, log index)`. The ledger records which source chain id
//! was credited for that event, exactly once; the map is append-only and
//! entries are never mutated or removed.

use cosmwasm_std::{Binary, StdResult, Storage};

use crate::error::ContractError;
use crate::state::PAID;

/// Length of a source-chain transaction hash in bytes.
pub const TX_HASH_LEN: usize = 32;

/// Validate that a relayed transaction hash is exactly 32 bytes.
pub fn validate_tx_hash(tx_hash: &Binary) -> Result<(), ContractError> {
    if tx_hash.len() != TX_HASH_LEN {
        return Err(ContractError::InvalidHashLength { got: tx_hash.len() });
    }
    Ok(())
}

/// Atomic check-and-set for a source event key.
///
/// Fails with `AlreadyPaid` if the key was ever recorded, regardless of which
/// chain id the earlier record credited.
pub fn record_if_new(
    storage: &mut dyn Storage,
    tx_hash: &Binary,
    log_index: u64,
    src_chain_id: u64,
) -> Result<(), ContractError> {
    validate_tx_hash(tx_hash)?;

    let key = (tx_hash.as_slice(), log_index);
    if PAID.may_load(storage, key)?.is_some() {
        return Err(ContractError::AlreadyPaid {
            tx_hash: format!("0x{}", hex::encode(tx_hash.as_slice())),
            log_index,
        });
    }

    PAID.save(storage, key, &src_chain_id)?;
    Ok(())
}

/// The source chain id recorded for an event key, or `None` if the event was
/// never paid.
pub fn paid_source_chain(
    storage: &dyn Storage,
    tx_hash: &Binary,
    log_index: u64,
) -> StdResult<Option<u64>> {
    PAID.may_load(storage, (tx_hash.as_slice(), log_index))
}
