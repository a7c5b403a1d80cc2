//! State definitions for the Zwap Ledger contract.
//!
//! This module defines the contract configuration, the chain registry maps,
//! and the payment ledger storage.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Where `PayToken` sources the funds it pays out.
#[cw_serde]
pub enum PayoutSource {
    /// Pay from the contract's own custodied token balance
    Custody,
    /// Pull from the receive address registered for the payout's source
    /// chain, using a pre-granted allowance
    Custodians,
}

/// Contract configuration, fixed at instantiation except where an owner-gated
/// setter exists.
#[cw_serde]
pub struct Config {
    /// Owner address with exclusive rights over registry, threshold, payouts
    pub owner: Addr,
    /// Native denom custodied by this ledger
    pub denom: String,
    /// Minimum deposit threshold, in raw external units
    pub min_amount: Uint128,
    /// Divide deposit amounts by 1e10 (18 to 8 decimals) when true
    pub scale_down: bool,
    /// Funding source for token payouts
    pub payout_source: PayoutSource,
    /// Implicit destination tag for deposits that carry no explicit one
    pub home_chain_id: u64,
}

/// Registry entry for an allowed remote chain.
#[cw_serde]
pub struct ChainInfo {
    /// Payout/forwarding destination address for that chain
    pub receive_address: Addr,
    /// Minimum remote block height above which relayed events are trusted
    pub listen_height: u64,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:zwap-ledger";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Forward registry entries. Presence means the chain is active; deactivation
/// removes the entry (listen height is cleared with it).
/// Key: chain id, Value: ChainInfo
pub const CHAINS: Map<u64, ChainInfo> = Map::new("chains");

/// Dense ordered sequence of active chain ids. Positions are reused by
/// swap-with-last removal, so order is not stable across deactivations.
/// Key: array position, Value: chain id
pub const ACTIVE_CHAINS: Map<u32, u64> = Map::new("active_chains");

/// Number of entries in ACTIVE_CHAINS
pub const ACTIVE_COUNT: Item<u32> = Item::new("active_count");

/// Index table kept in lockstep with ACTIVE_CHAINS for O(1) removal.
/// Key: chain id, Value: array position
pub const CHAIN_SLOT: Map<u64, u32> = Map::new("chain_slot");

/// Reverse index. At most one active chain id per address; cleared whenever
/// that chain id is deactivated or its address changes.
/// Key: receive address, Value: chain id
pub const ADDR_CHAIN: Map<&Addr, u64> = Map::new("addr_chain");

/// Payment ledger: source events already honored by a payout. Append-only,
/// entries are never mutated or removed.
/// Key: (32-byte tx hash, log index), Value: source chain id
pub const PAID: Map<(&[u8], u64), u64> = Map::new("paid");
