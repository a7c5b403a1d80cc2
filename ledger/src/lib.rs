//! Zwap Ledger Contract - Custodial Cross-Chain Value Bridging
//!
//! The ledger custodies funds on this chain and keeps the bookkeeping a
//! relayer needs to move value across chains.
//!
//! # Deposit Flow
//! 1. A depositor sends native coins (or CW20 tokens via the receive hook)
//!    tagged with a destination chain id
//! 2. The ledger validates the minimum amount, takes custody, and emits a
//!    `receive` event with the scaled amount
//! 3. A relayer observes the event and credits the depositor on the
//!    destination chain
//!
//! # Payout Flow
//! 1. The relayer observes a deposit event on a remote chain
//! 2. The owner submits `Pay` / `PayToken` with the source event key
//!    `(tx_hash, log_index)` and the source chain id
//! 3. The ledger records the key (rejecting replays), moves the funds, and
//!    emits a `paid` event
//!
//! # Bookkeeping
//! - Chain registry: dense ordered set of allowed remote chains, each with a
//!   receive address and a listen height, plus an address reverse index
//! - Payment ledger: append-only `(tx_hash, log_index)` replay protection
//! - Scaled transfers: fixed 1e10 decimal conversion between external and
//!   internal accounting units, configured at instantiation

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
pub mod payments;
mod query;
pub mod registry;
pub mod state;
pub mod transfer;

pub use crate::error::ContractError;
pub use crate::transfer::{scaled_amount, SCALE_FACTOR};
