//! Error types for the Zwap Ledger contract.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only the owner can perform this action")]
    NotOwner,

    #[error("Deposit below minimum: minimum amount is {min_amount}")]
    BelowMinimum { min_amount: String },

    #[error("Chain id is not allowed: {chain_id}")]
    ChainNotAllowed { chain_id: u64 },

    #[error("Transaction hash and log index were already paid: {tx_hash} at log {log_index}")]
    AlreadyPaid { tx_hash: String, log_index: u64 },

    #[error("Not enough funds")]
    InsufficientFunds,

    #[error("Active chain index out of range: index {index}, active count {count}")]
    IndexOutOfRange { index: u32, count: u32 },

    #[error("Invalid transaction hash length: expected 32 bytes, got {got}")]
    InvalidHashLength { got: usize },

    #[error("No funds sent")]
    NoFundsSent,
}
