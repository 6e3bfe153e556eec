#![no_std]

use common_constants::{BPS, PERCENT, RAY};

multiversx_sc::imports!();

/// Integer helpers shared by the ledger. Every division rounds down, so any
/// remainder stays with the pool.
#[multiversx_sc::module]
pub trait SharedMathModule {
    /// `amount * percent / 100`
    fn percent_of(&self, amount: &BigUint, percent: u64) -> BigUint {
        amount * &BigUint::from(percent) / PERCENT
    }

    /// `value * 100 / denominator`. The caller guarantees a non-zero denominator.
    fn ratio_percent(&self, value: &BigUint, denominator: &BigUint) -> BigUint {
        value * &BigUint::from(PERCENT) / denominator
    }

    /// `value * 10_000 / denominator`. The caller guarantees a non-zero denominator.
    fn ratio_bps(&self, value: &BigUint, denominator: &BigUint) -> BigUint {
        value * &BigUint::from(BPS) / denominator
    }

    /// Splits `amount` into `(admin_cut, lender_credit)`; the two always add up to `amount`.
    fn split_admin_fee(&self, amount: &BigUint, admin_fee_percent: u64) -> (BigUint, BigUint) {
        let admin_cut = self.percent_of(amount, admin_fee_percent);
        let lender_credit = amount - &admin_cut;

        (admin_cut, lender_credit)
    }

    fn ray_div(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a * &BigUint::from(RAY) / b
    }

    /// True when `value * 100 / denominator >= threshold_percent`. A zero denominator
    /// carries no risk and always passes.
    fn meets_ratio(&self, value: &BigUint, denominator: &BigUint, threshold_percent: u64) -> bool {
        if denominator == &BigUint::zero() {
            return true;
        }

        self.ratio_percent(value, denominator) >= BigUint::from(threshold_percent)
    }

    fn get_min(self, a: BigUint, b: BigUint) -> BigUint {
        if a < b {
            a
        } else {
            b
        }
    }

    fn get_max(self, a: BigUint, b: BigUint) -> BigUint {
        if a > b {
            a
        } else {
            b
        }
    }
}
