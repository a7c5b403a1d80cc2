//! Scaled transfer engine.
//!
//! Deposits arrive in the externally observed precision (commonly 18
//! decimals) while the relayed accounting unit uses 8 decimals. When the
//! contract is instantiated with `scale_down`, every deposit amount is
//! divided by 1e10 before it is emitted; integer division truncates any
//! remainder. The minimum-deposit threshold is expressed and checked in raw
//! external units, uniformly for every deposit path.

use cosmwasm_std::{Addr, Deps, Uint128};

use common::AssetInfo;

use crate::error::ContractError;
use crate::state::Config;

/// Fixed ratio between external (18-decimal) and internal (8-decimal) units.
pub const SCALE_FACTOR: u128 = 10_000_000_000;

/// Convert a raw external amount to the emitted accounting unit.
pub fn scaled_amount(raw: Uint128, scale_down: bool) -> Uint128 {
    if scale_down {
        Uint128::new(raw.u128() / SCALE_FACTOR)
    } else {
        raw
    }
}

/// Validate a deposit amount against the configured threshold and return the
/// amount to emit. The comparison is raw-vs-raw; only the emitted amount is
/// scaled.
pub fn accept_deposit(config: &Config, raw: Uint128) -> Result<Uint128, ContractError> {
    if raw < config.min_amount {
        return Err(ContractError::BelowMinimum {
            min_amount: config.min_amount.to_string(),
        });
    }
    Ok(scaled_amount(raw, config.scale_down))
}

/// Fail with `InsufficientFunds` unless `holder` holds at least `amount` of
/// `asset`. Checked before any transfer message is emitted so a short balance
/// never consumes a replay key.
pub fn ensure_funds(
    deps: Deps,
    asset: &AssetInfo,
    holder: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let balance = asset.query_balance(&deps.querier, holder)?;
    if balance < amount {
        return Err(ContractError::InsufficientFunds);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PayoutSource;

    fn config(scale_down: bool, min_amount: u128) -> Config {
        Config {
            owner: Addr::unchecked("owner"),
            denom: "uzwap".to_string(),
            min_amount: Uint128::new(min_amount),
            scale_down,
            payout_source: PayoutSource::Custody,
            home_chain_id: 1,
        }
    }

    #[test]
    fn test_scaled_amount() {
        // 10 units at 18 decimals -> 10 units at 8 decimals
        assert_eq!(
            scaled_amount(Uint128::new(10_000_000_000_000_000_000), true),
            Uint128::new(1_000_000_000)
        );
        // No conversion mode passes through
        assert_eq!(
            scaled_amount(Uint128::new(10_000_000_000_000_000_000), false),
            Uint128::new(10_000_000_000_000_000_000)
        );
        // Truncation: sub-factor remainder is dropped
        assert_eq!(scaled_amount(Uint128::new(SCALE_FACTOR + 7), true), Uint128::new(1));
        assert_eq!(scaled_amount(Uint128::new(9_999_999_999), true), Uint128::zero());
    }

    #[test]
    fn test_accept_deposit_scaling_round_trip() {
        // min 0.99 at 18 decimals, deposit 10 at 18 decimals
        let config = config(true, 990_000_000_000_000_000);
        let emitted = accept_deposit(&config, Uint128::new(10_000_000_000_000_000_000)).unwrap();
        assert_eq!(emitted, Uint128::new(1_000_000_000));
    }

    #[test]
    fn test_accept_deposit_below_minimum() {
        let config = config(true, 990_000_000_000_000_000);
        // 0.5 at 18 decimals
        let err = accept_deposit(&config, Uint128::new(500_000_000_000_000_000)).unwrap_err();
        assert!(matches!(err, ContractError::BelowMinimum { .. }));
    }

    #[test]
    fn test_accept_deposit_unscaled_mode() {
        let config = config(false, 1_000);
        assert_eq!(
            accept_deposit(&config, Uint128::new(5_000)).unwrap(),
            Uint128::new(5_000)
        );
        assert!(accept_deposit(&config, Uint128::new(999)).is_err());
    }
}
