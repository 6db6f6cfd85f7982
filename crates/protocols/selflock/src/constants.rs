//! Self-lock form defaults and fee parameters

use restart_core::constants::{BPS_DENOM, MIST_PER_SUI};
use restart_core::Mist;

/// Default minimum lock period: 24 hours
pub const DEFAULT_MIN_LOCK_PERIOD_SECS: u64 = 86_400;

/// Default daily withdrawal cap: 1 SUI
pub const DEFAULT_MAX_WITHDRAWAL_PER_DAY: Mist = MIST_PER_SUI;

/// Default withdrawal fee: 1%
pub const DEFAULT_FEE_RATE_BPS: u64 = 100;

/// Upper bound for the withdrawal fee rate (100%)
pub const MAX_FEE_RATE_BPS: u64 = BPS_DENOM;

/// Calculate the withdrawal fee for an amount at the given rate.
/// Rates above 100% are capped.
pub fn calculate_withdrawal_fee(amount: Mist, fee_rate_bps: u64) -> Mist {
    let rate = fee_rate_bps.min(MAX_FEE_RATE_BPS);
    ((amount as u128 * rate as u128) / BPS_DENOM as u128) as Mist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_one_percent() {
        assert_eq!(calculate_withdrawal_fee(1_000_000_000, 100), 10_000_000);
    }

    #[test]
    fn test_fee_zero_rate() {
        assert_eq!(calculate_withdrawal_fee(1_000_000_000, 0), 0);
    }

    #[test]
    fn test_fee_capped_at_full_amount() {
        assert_eq!(calculate_withdrawal_fee(500, 20_000), 500);
    }

    #[test]
    fn test_fee_rounds_down() {
        // (35 * 100) / 10000 = 0.35 → 0
        assert_eq!(calculate_withdrawal_fee(35, 100), 0);
        assert_eq!(calculate_withdrawal_fee(u64::MAX, MAX_FEE_RATE_BPS), u64::MAX);
    }
}
