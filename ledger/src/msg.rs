//! Message types for the Zwap Ledger contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};

use crate::state::PayoutSource;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address with exclusive rights over registry, threshold, payouts
    pub owner: String,
    /// Native denom custodied by this ledger
    pub denom: String,
    /// Minimum deposit threshold, in raw external units
    pub min_amount: Uint128,
    /// Divide deposit amounts by 1e10 before emitting them (fixed for the
    /// contract's lifetime)
    pub scale_down: bool,
    /// Where `PayToken` sources its funds
    pub payout_source: PayoutSource,
    /// Implicit destination tag for deposits carrying no explicit one
    pub home_chain_id: u64,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Deposit native coins for bridging
    ///
    /// Authorization: Anyone (funds attached to the message)
    Deposit {
        /// Destination chain id; defaults to the configured home tag
        dest_chain_id: Option<u64>,
        /// Depositor credited in the emitted event; defaults to the caller.
        /// Used by forwarding facades to preserve the original sender.
        /// Affects event attribution only, never custody.
        depositor: Option<String>,
    },

    /// Deposit CW20 tokens for bridging (called via CW20 send)
    Receive(cw20::Cw20ReceiveMsg),

    /// Register, update, or deactivate an allowed remote chain.
    /// `receive_address: None` deactivates the chain id (a no-op if it is
    /// already inactive).
    ///
    /// Authorization: Owner only
    SetChain {
        chain_id: u64,
        receive_address: Option<String>,
        listen_height: u64,
    },

    /// Change the minimum deposit threshold (raw external units)
    ///
    /// Authorization: Owner only
    SetMinAmount { amount: Uint128 },

    /// Transfer ownership to a new address
    ///
    /// Authorization: Owner only
    TransferOwnership { new_owner: String },

    /// Pay out custodied native coins for an observed source-chain event
    ///
    /// Authorization: Owner only
    Pay {
        recipient: String,
        amount: Uint128,
        /// 32-byte transaction hash of the source event
        tx_hash: Binary,
        log_index: u64,
        src_chain_id: u64,
    },

    /// Pay out CW20 tokens for an observed source-chain event. Funds come
    /// from custody or from the source chain's registered custodian,
    /// depending on the configured payout source.
    ///
    /// Authorization: Owner only
    PayToken {
        /// CW20 token contract address
        token: String,
        recipient: String,
        amount: Uint128,
        /// 32-byte transaction hash of the source event
        tx_hash: Binary,
        log_index: u64,
        src_chain_id: u64,
    },
}

/// Message embedded in a CW20 `Send`
#[cw_serde]
pub enum ReceiveMsg {
    /// Deposit the sent tokens for bridging
    Deposit {
        /// Destination chain id; defaults to the configured home tag
        dest_chain_id: Option<u64>,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Contract configuration
    #[returns(ConfigResponse)]
    Config {},
    /// Registry entry for a chain id (active flag plus entry fields)
    #[returns(ChainResponse)]
    Chain { chain_id: u64 },
    /// All currently active chain ids, in dense-sequence order
    #[returns(ActiveChainsResponse)]
    ActiveChains {},
    /// The chain id at a position of the active sequence; fails when the
    /// index is beyond the current active count
    #[returns(ChainAtResponse)]
    ChainAt { index: u32 },
    /// Reverse lookup: the active chain id registered for an address
    #[returns(ChainByAddressResponse)]
    ChainByAddress { address: String },
    /// The source chain id recorded for a paid event key, if any
    #[returns(PaidResponse)]
    Paid { tx_hash: Binary, log_index: u64 },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: String,
    pub denom: String,
    pub min_amount: Uint128,
    pub scale_down: bool,
    pub payout_source: PayoutSource,
    pub home_chain_id: u64,
}

#[cw_serde]
pub struct ChainResponse {
    pub chain_id: u64,
    pub active: bool,
    /// Receive address; `None` when the chain is inactive
    pub receive_address: Option<String>,
    /// Listen height; cleared (zero) when the chain is inactive
    pub listen_height: u64,
}

#[cw_serde]
pub struct ActiveChainsResponse {
    pub chain_ids: Vec<u64>,
}

#[cw_serde]
pub struct ChainAtResponse {
    pub chain_id: u64,
}

#[cw_serde]
pub struct ChainByAddressResponse {
    /// `None` means no active chain id maps to the address
    pub chain_id: Option<u64>,
}

#[cw_serde]
pub struct PaidResponse {
    /// `None` means the event key was never paid
    pub src_chain_id: Option<u64>,
}
