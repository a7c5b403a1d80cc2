use cosmwasm_schema::{cw_serde, QueryResponses};

#[cw_serde]
pub struct InstantiateMsg {
    /// Ledger contract address receiving forwarded deposits
    pub ledger: String,
    /// Fixed destination chain tag for every forwarded deposit
    pub dest_chain_id: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Forward the attached native funds to the ledger's deposit entry
    /// point, tagged with the fixed destination chain id and the caller as
    /// depositor
    Forward {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the immutable (ledger, dest_chain_id) pair
    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub ledger: String,
    pub dest_chain_id: u64,
}
