multiversx_sc::imports!();

use common_constants::{
    MAX_ADMIN_FEE_PERCENT, MAX_LIQUIDATION_BONUS_PERCENT, MIN_COLLATERAL_RATIO, MIN_LOAN_DURATION,
};
use common_structs::PoolConfig;

use crate::{
    storage, ERROR_ADDRESS_IS_ZERO, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO,
    ERROR_INVALID_ADMIN_FEE, ERROR_INVALID_ASSET_PAIR, ERROR_INVALID_COLLATERAL_FACTOR,
    ERROR_INVALID_LIQUIDATION_BONUS, ERROR_INVALID_LIQUIDATION_THRESHOLD,
    ERROR_INVALID_LOAN_DURATION, ERROR_THRESHOLD_ABOVE_COLLATERAL_FACTOR, ERROR_TRANSFER_FAILED,
};

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage {
    /// Reads the single fungible payment attached to the call and checks it is a
    /// non-zero amount of `expected_token`.
    ///
    /// # Returns
    /// - `(caller, amount)`
    fn validate_payment(
        &self,
        expected_token: &EgldOrEsdtTokenIdentifier,
    ) -> (ManagedAddress, BigUint) {
        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        self.require_amount_greater_than_zero(&amount);
        require!(&token == expected_token, ERROR_TRANSFER_FAILED);

        (self.blockchain().get_caller(), amount)
    }

    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(
            amount > &BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );
    }

    fn require_non_zero_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERROR_ADDRESS_IS_ZERO);
    }

    fn require_distinct_assets(
        &self,
        loan_token: &EgldOrEsdtTokenIdentifier,
        collateral_token: &EgldOrEsdtTokenIdentifier,
    ) {
        require!(loan_token.is_valid(), ERROR_INVALID_ASSET_PAIR);
        require!(collateral_token.is_valid(), ERROR_INVALID_ASSET_PAIR);
        require!(loan_token != collateral_token, ERROR_INVALID_ASSET_PAIR);
    }

    fn require_valid_collateral_factor(&self, collateral_factor: u64) {
        require!(
            collateral_factor >= MIN_COLLATERAL_RATIO,
            ERROR_INVALID_COLLATERAL_FACTOR
        );
    }

    fn require_valid_liquidation_threshold(&self, liquidation_threshold: u64) {
        require!(
            liquidation_threshold >= MIN_COLLATERAL_RATIO,
            ERROR_INVALID_LIQUIDATION_THRESHOLD
        );
    }

    /// A loan opened exactly at the collateral factor must not start out liquidatable.
    fn require_threshold_within_factor(&self, collateral_factor: u64, liquidation_threshold: u64) {
        require!(
            liquidation_threshold <= collateral_factor,
            ERROR_THRESHOLD_ABOVE_COLLATERAL_FACTOR
        );
    }

    fn require_valid_liquidation_bonus(&self, liquidation_bonus: u64) {
        require!(
            liquidation_bonus <= MAX_LIQUIDATION_BONUS_PERCENT,
            ERROR_INVALID_LIQUIDATION_BONUS
        );
    }

    fn require_valid_loan_duration(&self, loan_duration: u64) {
        require!(
            loan_duration >= MIN_LOAN_DURATION,
            ERROR_INVALID_LOAN_DURATION
        );
    }

    fn require_valid_admin_fee(&self, admin_fee_percent: u64) {
        require!(
            admin_fee_percent <= MAX_ADMIN_FEE_PERCENT,
            ERROR_INVALID_ADMIN_FEE
        );
    }

    /// Interest rate is unconstrained; every other parameter has a bound.
    fn validate_pool_config(&self, config: &PoolConfig) {
        self.require_valid_collateral_factor(config.collateral_factor);
        self.require_valid_liquidation_threshold(config.liquidation_threshold);
        self.require_threshold_within_factor(
            config.collateral_factor,
            config.liquidation_threshold,
        );
        self.require_valid_liquidation_bonus(config.liquidation_bonus);
        self.require_valid_loan_duration(config.loan_duration);
        self.require_valid_admin_fee(config.admin_fee_percent);
    }
}
