//! Integration tests for the deposit receive path.
//!
//! Covers the 1e10 decimal scaling, the raw-unit minimum threshold, the home
//! tag default, the depositor override, and CW20 deposits via the receive
//! hook.

use cosmwasm_std::{coins, to_json_binary, Addr, Uint128};
use cw20::Cw20Coin;
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use ledger::msg::{ExecuteMsg, InstantiateMsg, ReceiveMsg};
use ledger::state::PayoutSource;

// ============================================================================
// Test Setup
// ============================================================================

/// 10 units at 18 decimals
const TEN_RAW: u128 = 10_000_000_000_000_000_000;
/// 0.99 units at 18 decimals (0.99 scaled, expressed in raw external units)
const MIN_RAW: u128 = 990_000_000_000_000_000;
/// 0.5 units at 18 decimals
const HALF_RAW: u128 = 500_000_000_000_000_000;

fn contract_ledger() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        ledger::contract::execute,
        ledger::contract::instantiate,
        ledger::contract::query,
    );
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

fn setup(scale_down: bool, min_amount: u128) -> (App, Addr) {
    let mut app = App::default();
    let owner = Addr::unchecked("owner");
    let user = Addr::unchecked("user");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &user, coins(100_000_000_000_000_000_000, "uzwap"))
            .unwrap();
    });

    let code_id = app.store_code(contract_ledger());
    let contract_addr = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                denom: "uzwap".to_string(),
                min_amount: Uint128::from(min_amount),
                scale_down,
                payout_source: PayoutSource::Custody,
                home_chain_id: 1,
            },
            &[],
            "zwap-ledger",
            Some(owner.to_string()),
        )
        .unwrap();

    (app, contract_addr)
}

fn event_attr(res: &AppResponse, key: &str) -> String {
    res.events
        .iter()
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
        .unwrap_or_else(|| panic!("attribute {} not found", key))
}

// ============================================================================
// Native Deposits
// ============================================================================

#[test]
fn test_deposit_emits_scaled_amount() {
    let (mut app, contract) = setup(true, MIN_RAW);
    let user = Addr::unchecked("user");

    let res = app
        .execute_contract(
            user.clone(),
            contract.clone(),
            &ExecuteMsg::Deposit {
                dest_chain_id: Some(11155111),
                depositor: None,
            },
            &coins(TEN_RAW, "uzwap"),
        )
        .unwrap();

    assert_eq!(event_attr(&res, "action"), "receive");
    assert_eq!(event_attr(&res, "depositor"), "user");
    // 10e18 / 1e10 = 10e8
    assert_eq!(event_attr(&res, "amount"), "1000000000");
    assert_eq!(event_attr(&res, "dest_chain_id"), "11155111");

    // Custody holds the raw amount
    let balance = app.wrap().query_balance(&contract, "uzwap").unwrap();
    assert_eq!(balance.amount, Uint128::from(TEN_RAW));
}

#[test]
fn test_deposit_below_minimum_rejected() {
    let (mut app, contract) = setup(true, MIN_RAW);
    let user = Addr::unchecked("user");

    let res = app.execute_contract(
        user,
        contract.clone(),
        &ExecuteMsg::Deposit {
            dest_chain_id: Some(11155111),
            depositor: None,
        },
        &coins(HALF_RAW, "uzwap"),
    );

    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("minimum"),
        "Expected below-minimum error, got: {}",
        err_str
    );

    let balance = app.wrap().query_balance(&contract, "uzwap").unwrap();
    assert_eq!(balance.amount, Uint128::zero());
}

#[test]
fn test_deposit_unscaled_mode_passes_through() {
    let (mut app, contract) = setup(false, 1_000);
    let user = Addr::unchecked("user");

    let res = app
        .execute_contract(
            user,
            contract,
            &ExecuteMsg::Deposit {
                dest_chain_id: None,
                depositor: None,
            },
            &coins(5_000, "uzwap"),
        )
        .unwrap();

    assert_eq!(event_attr(&res, "amount"), "5000");
    // Home tag applied when no destination given
    assert_eq!(event_attr(&res, "dest_chain_id"), "1");
}

#[test]
fn test_deposit_without_funds_rejected() {
    let (mut app, contract) = setup(false, 1_000);
    let user = Addr::unchecked("user");

    let res = app.execute_contract(
        user,
        contract,
        &ExecuteMsg::Deposit {
            dest_chain_id: None,
            depositor: None,
        },
        &[],
    );
    assert!(res.is_err());
}

#[test]
fn test_deposit_depositor_override() {
    let (mut app, contract) = setup(false, 1_000);
    let user = Addr::unchecked("user");

    let res = app
        .execute_contract(
            user,
            contract,
            &ExecuteMsg::Deposit {
                dest_chain_id: Some(7),
                depositor: Some("original_sender".to_string()),
            },
            &coins(5_000, "uzwap"),
        )
        .unwrap();

    assert_eq!(event_attr(&res, "depositor"), "original_sender");
}

// ============================================================================
// CW20 Deposits
// ============================================================================

#[test]
fn test_cw20_deposit_via_receive_hook() {
    let (mut app, contract) = setup(false, 1_000);
    let owner = Addr::unchecked("owner");
    let user = Addr::unchecked("user");

    let cw20_code = app.store_code(contract_cw20());
    let token = app
        .instantiate_contract(
            cw20_code,
            owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Wrapped Test".to_string(),
                symbol: "WTEST".to_string(),
                decimals: 8,
                initial_balances: vec![Cw20Coin {
                    address: user.to_string(),
                    amount: Uint128::from(1_000_000u128),
                }],
                mint: None,
                marketing: None,
            },
            &[],
            "wtest",
            None,
        )
        .unwrap();

    let res = app
        .execute_contract(
            user.clone(),
            token.clone(),
            &cw20::Cw20ExecuteMsg::Send {
                contract: contract.to_string(),
                amount: Uint128::from(50_000u128),
                msg: to_json_binary(&ReceiveMsg::Deposit {
                    dest_chain_id: Some(11155111),
                })
                .unwrap(),
            },
            &[],
        )
        .unwrap();

    assert_eq!(event_attr(&res, "action"), "receive");
    assert_eq!(event_attr(&res, "depositor"), "user");
    assert_eq!(event_attr(&res, "amount"), "50000");
    assert_eq!(event_attr(&res, "dest_chain_id"), "11155111");

    // Token custody moved to the ledger
    let balance: cw20::BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            &token,
            &cw20::Cw20QueryMsg::Balance {
                address: contract.to_string(),
            },
        )
        .unwrap();
    assert_eq!(balance.balance, Uint128::from(50_000u128));
}

#[test]
fn test_cw20_deposit_below_minimum_rejected() {
    let (mut app, contract) = setup(false, 1_000);
    let owner = Addr::unchecked("owner");
    let user = Addr::unchecked("user");

    let cw20_code = app.store_code(contract_cw20());
    let token = app
        .instantiate_contract(
            cw20_code,
            owner,
            &cw20_base::msg::InstantiateMsg {
                name: "Wrapped Test".to_string(),
                symbol: "WTEST".to_string(),
                decimals: 8,
                initial_balances: vec![Cw20Coin {
                    address: user.to_string(),
                    amount: Uint128::from(1_000_000u128),
                }],
                mint: None,
                marketing: None,
            },
            &[],
            "wtest",
            None,
        )
        .unwrap();

    let res = app.execute_contract(
        user,
        token,
        &cw20::Cw20ExecuteMsg::Send {
            contract: contract.to_string(),
            amount: Uint128::from(500u128),
            msg: to_json_binary(&ReceiveMsg::Deposit {
                dest_chain_id: None,
            })
            .unwrap(),
        },
        &[],
    );

    assert!(res.is_err());
}
