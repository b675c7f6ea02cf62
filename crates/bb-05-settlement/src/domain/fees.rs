//! Platform fee arithmetic.

use shared_types::Amount;

/// Platform fee retained on release, as a percentage of the bounty.
pub const FEE_RATE_PERCENT: u64 = 3;

/// The fee/payout split applied when a bounty is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoutSplit {
    /// Amount paid to the worker.
    pub worker_payout: Amount,
    /// Fee retained in escrow.
    pub platform_fee: Amount,
}

/// Splits `amount` into worker payout and platform fee.
///
/// The fee is `FEE_RATE_PERCENT` of the bounty, rounded half-up at
/// micro-unit precision (i.e. to 6 decimal places); the worker receives
/// the remainder, so the two parts always sum to the original amount.
pub fn split_payout(amount: Amount) -> PayoutSplit {
    let fee_micros = (amount.micros() * FEE_RATE_PERCENT + 50) / 100;
    let platform_fee = Amount::from_micros(fee_micros);
    PayoutSplit {
        worker_payout: amount.saturating_sub(platform_fee),
        platform_fee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_unit_split() {
        let split = split_payout(Amount::from_units(100));
        assert_eq!(split.platform_fee, Amount::from_units(3));
        assert_eq!(split.worker_payout, Amount::from_units(97));
    }

    #[test]
    fn test_ten_unit_split() {
        let split = split_payout(Amount::from_units(10));
        assert_eq!(split.platform_fee.to_string(), "0.3");
        assert_eq!(split.worker_payout.to_string(), "9.7");
    }

    #[test]
    fn test_rounds_half_up_at_micro_precision() {
        // 33 micros * 3% = 0.99 micros, rounds up to 1.
        let split = split_payout(Amount::from_micros(33));
        assert_eq!(split.platform_fee, Amount::from_micros(1));
        assert_eq!(split.worker_payout, Amount::from_micros(32));

        // 16 micros * 3% = 0.48 micros, rounds down to 0.
        let split = split_payout(Amount::from_micros(16));
        assert_eq!(split.platform_fee, Amount::ZERO);
        assert_eq!(split.worker_payout, Amount::from_micros(16));

        // 50 micros * 3% = 1.5 micros, half rounds up to 2.
        let split = split_payout(Amount::from_micros(50));
        assert_eq!(split.platform_fee, Amount::from_micros(2));
    }

    #[test]
    fn test_split_parts_sum_to_amount() {
        for micros in [1u64, 16, 33, 999_999, 1_000_000, 10_000_000, 123_456_789] {
            let amount = Amount::from_micros(micros);
            let split = split_payout(amount);
            assert_eq!(
                split.worker_payout.checked_add(split.platform_fee),
                Some(amount)
            );
        }
    }

    #[test]
    fn test_zero_amount() {
        let split = split_payout(Amount::ZERO);
        assert_eq!(split.platform_fee, Amount::ZERO);
        assert_eq!(split.worker_payout, Amount::ZERO);
    }
}
