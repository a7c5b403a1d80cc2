use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:zwap-forwarder";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Immutable pair set at instantiation.
#[cw_serde]
pub struct Config {
    /// The ledger receiving forwarded deposits
    pub ledger: Addr,
    /// Fixed destination chain tag applied to every forwarded deposit
    pub dest_chain_id: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");
