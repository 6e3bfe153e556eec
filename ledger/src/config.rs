multiversx_sc::imports!();

use common_structs::PoolConfig;

use crate::{cache::Cache, storage, utils, validation, ERROR_NO_FEES};

#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + validation::ValidationModule
    + utils::LedgerUtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Minimum collateral ratio, in percent, for opening debt and withdrawing collateral.
    #[only_owner]
    #[endpoint(setCollateralFactor)]
    fn set_collateral_factor(&self, collateral_factor: u64) {
        self.require_valid_collateral_factor(collateral_factor);
        let mut config = self.pool_config().get();
        self.require_threshold_within_factor(collateral_factor, config.liquidation_threshold);
        config.collateral_factor = collateral_factor;
        self.store_pool_config(&config);
    }

    #[only_owner]
    #[endpoint(setLiquidationThreshold)]
    fn set_liquidation_threshold(&self, liquidation_threshold: u64) {
        self.require_valid_liquidation_threshold(liquidation_threshold);
        let mut config = self.pool_config().get();
        self.require_threshold_within_factor(config.collateral_factor, liquidation_threshold);
        config.liquidation_threshold = liquidation_threshold;
        self.store_pool_config(&config);
    }

    /// Discount, in percent, on the collateral value liquidators pay.
    #[only_owner]
    #[endpoint(setLiquidationBonus)]
    fn set_liquidation_bonus(&self, liquidation_bonus: u64) {
        self.require_valid_liquidation_bonus(liquidation_bonus);
        let mut config = self.pool_config().get();
        config.liquidation_bonus = liquidation_bonus;
        self.store_pool_config(&config);
    }

    /// Applies to loans taken after the change only.
    #[only_owner]
    #[endpoint(setInterestRate)]
    fn set_interest_rate(&self, interest_rate: u64) {
        let mut config = self.pool_config().get();
        config.interest_rate = interest_rate;
        self.store_pool_config(&config);
    }

    #[only_owner]
    #[endpoint(setLoanDuration)]
    fn set_loan_duration(&self, loan_duration: u64) {
        self.require_valid_loan_duration(loan_duration);
        let mut config = self.pool_config().get();
        config.loan_duration = loan_duration;
        self.store_pool_config(&config);
    }

    #[only_owner]
    #[endpoint(setAdminFeePercent)]
    fn set_admin_fee_percent(&self, admin_fee_percent: u64) {
        self.require_valid_admin_fee(admin_fee_percent);
        let mut config = self.pool_config().get();
        config.admin_fee_percent = admin_fee_percent;
        self.store_pool_config(&config);
    }

    /// Pays every accrued admin fee to `to`.
    ///
    /// # Errors
    /// - `ERROR_NO_FEES`: nothing accrued.
    #[only_owner]
    #[endpoint(withdrawAdminFees)]
    fn withdraw_admin_fees(&self, to: ManagedAddress) {
        self.require_non_zero_address(&to);

        let mut cache = Cache::new(self);
        let amount = cache.admin_fees_accrued.clone();
        require!(amount > BigUint::zero(), ERROR_NO_FEES);

        cache.admin_fees_accrued = BigUint::zero();
        self.withdraw_admin_fees_event(&to, &amount);
        self.emit_pool_state(&cache);

        let loan_token = cache.loan_token.clone();
        drop(cache);

        self.send_tokens(&to, &loan_token, &amount);
    }

    fn store_pool_config(&self, config: &PoolConfig) {
        self.pool_config().set(config);
        self.update_pool_config_event(config);
    }
}
