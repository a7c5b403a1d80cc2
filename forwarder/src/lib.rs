//! Deposit Forwarder - Fixed-Tag Relay to a Zwap Ledger
//!
//! Multiple chain-specific deposit addresses can share one ledger's custody
//! and bookkeeping: each forwarder holds an immutable `(ledger,
//! dest_chain_id)` pair and, on receiving native funds, re-sends them to the
//! ledger's deposit entry point tagged with its fixed destination chain id
//! and the original sender as depositor. It has no other state or behavior.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
