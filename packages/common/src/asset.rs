//! Asset abstraction over native bank denoms and CW20 token contracts.
//!
//! The ledger moves value through exactly two kinds of assets: native coins
//! held in the contract's bank balance, and CW20 tokens. `AssetInfo` names an
//! asset and knows how to build the transfer messages and balance queries for
//! it, so the contracts never branch on asset kind themselves.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

/// Identifies a transferable asset.
#[cw_serde]
pub enum AssetInfo {
    /// Native coin identified by its bank denom
    Native { denom: String },
    /// CW20 token identified by its contract address
    Cw20 { contract_addr: Addr },
}

impl AssetInfo {
    /// Build a message transferring `amount` of this asset from the calling
    /// contract's own balance to `recipient`.
    pub fn transfer_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        match self {
            AssetInfo::Native { denom } => Ok(CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient.to_string(),
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount,
                }],
            })),
            AssetInfo::Cw20 { contract_addr } => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient.to_string(),
                    amount,
                })?,
                funds: vec![],
            })),
        }
    }

    /// Build a message pulling `amount` of a CW20 asset from `owner` to
    /// `recipient` using a pre-granted allowance. Native coins cannot be
    /// pulled on behalf of another account.
    pub fn transfer_from_msg(
        &self,
        owner: &Addr,
        recipient: &Addr,
        amount: Uint128,
    ) -> StdResult<CosmosMsg> {
        match self {
            AssetInfo::Native { denom } => Err(cosmwasm_std::StdError::generic_err(format!(
                "cannot transfer native {} on behalf of another account",
                denom
            ))),
            AssetInfo::Cw20 { contract_addr } => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                    owner: owner.to_string(),
                    recipient: recipient.to_string(),
                    amount,
                })?,
                funds: vec![],
            })),
        }
    }

    /// Query the balance of this asset held by `account`.
    pub fn query_balance(&self, querier: &QuerierWrapper, account: &Addr) -> StdResult<Uint128> {
        match self {
            AssetInfo::Native { denom } => {
                Ok(querier.query_balance(account.to_string(), denom)?.amount)
            }
            AssetInfo::Cw20 { contract_addr } => {
                let response: BalanceResponse = querier.query_wasm_smart(
                    contract_addr,
                    &Cw20QueryMsg::Balance {
                        address: account.to_string(),
                    },
                )?;
                Ok(response.balance)
            }
        }
    }
}
