//! Execute message handlers.

mod admin;
mod deposit;
mod payout;
mod registry;

pub use admin::{execute_set_min_amount, execute_transfer_ownership};
pub use deposit::{execute_deposit, execute_receive};
pub use payout::{execute_pay, execute_pay_token};
pub use registry::execute_set_chain;

use cosmwasm_std::Addr;

use crate::error::ContractError;
use crate::state::Config;

/// Owner gate, checked first in every privileged handler before any state
/// mutation.
pub(crate) fn ensure_owner(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.owner {
        return Err(ContractError::NotOwner);
    }
    Ok(())
}
