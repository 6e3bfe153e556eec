#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod config;
pub mod lending;
pub mod oracle;
pub mod positions;
pub mod storage;
pub mod utils;
pub mod validation;
pub mod views;

use cache::Cache;
pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait Ledger:
    lending::supply::LenderSupplyModule
    + lending::withdraw::LenderWithdrawModule
    + lending::yields::LenderYieldModule
    + positions::collateral::PositionCollateralModule
    + positions::borrow::PositionBorrowModule
    + positions::repay::PositionRepayModule
    + positions::liquidation::PositionLiquidationModule
    + config::ConfigModule
    + common_events::EventsModule
    + storage::Storage
    + oracle::OracleModule
    + validation::ValidationModule
    + utils::LedgerUtilsModule
    + views::ViewsModule
    + common_math::SharedMathModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Creates the pool for one loan token and one collateral token.
    ///
    /// # Arguments
    /// - `loan_token`: Asset lent by lenders and borrowed by borrowers.
    /// - `collateral_token`: Asset posted as collateral. Must differ from `loan_token`.
    /// - `value_oracle_address`: Contract valuing both assets in loan token units.
    /// - `collateral_factor`, `liquidation_threshold`: Percent, at least 100. The
    ///   threshold cannot exceed the factor.
    /// - `liquidation_bonus`: Percent discount on seized collateral, at most 15.
    /// - `interest_rate`: Flat percent charged per borrow.
    /// - `loan_duration`: Seconds, at least one day.
    /// - `admin_fee_percent`: At most 50.
    #[init]
    fn init(
        &self,
        loan_token: EgldOrEsdtTokenIdentifier,
        collateral_token: EgldOrEsdtTokenIdentifier,
        value_oracle_address: ManagedAddress,
        collateral_factor: u64,
        liquidation_threshold: u64,
        liquidation_bonus: u64,
        interest_rate: u64,
        loan_duration: u64,
        admin_fee_percent: u64,
    ) {
        self.require_distinct_assets(&loan_token, &collateral_token);
        self.require_non_zero_address(&value_oracle_address);

        let config = PoolConfig {
            collateral_factor,
            liquidation_threshold,
            liquidation_bonus,
            interest_rate,
            loan_duration,
            admin_fee_percent,
        };
        self.validate_pool_config(&config);

        self.loan_token().set(&loan_token);
        self.collateral_token().set(&collateral_token);
        self.value_oracle_address().set(&value_oracle_address);
        self.store_pool_config(&config);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Supplies loan tokens to the pool.
    ///
    /// # Payment
    /// - A non-zero amount of the loan token.
    #[payable]
    #[endpoint(depositLoanToken)]
    fn deposit_loan_token(&self) {
        self.require_not_paused();

        let mut cache = Cache::new(self);
        let (caller, amount) = self.validate_payment(&cache.loan_token);

        self.process_deposit_loan(&caller, &amount, &mut cache);
        self.emit_pool_state(&cache);
    }

    /// Withdraws `amount` of the caller's principal.
    #[endpoint(withdrawLoanToken)]
    fn withdraw_loan_token(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        let mut cache = Cache::new(self);

        self.process_withdraw_loan(&caller, &amount, &mut cache);
        self.emit_pool_state(&cache);

        let loan_token = cache.loan_token.clone();
        drop(cache);

        self.send_tokens(&caller, &loan_token, &amount);
    }

    /// Pays the caller's accrued share of the lender yield.
    #[endpoint(claimYield)]
    fn claim_yield(&self) {
        let caller = self.blockchain().get_caller();
        let mut cache = Cache::new(self);

        let claimed = self.process_claim_yield(&caller, &mut cache);
        self.emit_pool_state(&cache);

        let loan_token = cache.loan_token.clone();
        drop(cache);

        self.send_tokens(&caller, &loan_token, &claimed);
    }

    /// Posts collateral for the caller's position.
    ///
    /// # Payment
    /// - A non-zero amount of the collateral token.
    #[payable]
    #[endpoint(depositCollateral)]
    fn deposit_collateral(&self) {
        self.require_not_paused();

        let collateral_token = self.collateral_token().get();
        let (caller, amount) = self.validate_payment(&collateral_token);

        self.process_deposit_collateral(&caller, &amount);
    }

    /// Borrows `amount` loan tokens against the caller's collateral.
    #[endpoint(borrow)]
    fn borrow(&self, amount: BigUint) {
        self.require_not_paused();

        let caller = self.blockchain().get_caller();
        let mut cache = Cache::new(self);

        self.process_borrow(&caller, &amount, &mut cache);
        self.emit_pool_state(&cache);

        let loan_token = cache.loan_token.clone();
        drop(cache);

        self.send_tokens(&caller, &loan_token, &amount);
    }

    /// Repays the caller's interest first, then principal.
    ///
    /// # Payment
    /// - Loan token, at most the outstanding debt plus interest.
    #[payable]
    #[endpoint(repay)]
    fn repay(&self) {
        let mut cache = Cache::new(self);
        let (caller, amount) = self.validate_payment(&cache.loan_token);

        self.process_repay(&caller, &amount, &mut cache);
        self.emit_pool_state(&cache);
    }

    /// Withdraws `amount` of the caller's collateral while keeping any debt covered.
    #[endpoint(withdrawCollateral)]
    fn withdraw_collateral(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        let cache = Cache::new(self);

        self.process_withdraw_collateral(&caller, &amount, &cache);

        let collateral_token = cache.collateral_token.clone();
        drop(cache);

        self.send_tokens(&caller, &collateral_token, &amount);
    }

    /// Liquidates an expired or undercollateralized position.
    ///
    /// The caller pays the settlement amount in loan token and receives the whole
    /// collateral. Any overpayment is refunded.
    ///
    /// # Arguments
    /// - `borrower`: Owner of the position to close.
    ///
    /// # Payment
    /// - Loan token covering the settlement amount.
    #[payable]
    #[endpoint(liquidate)]
    fn liquidate(&self, borrower: ManagedAddress) {
        let mut cache = Cache::new(self);
        let position = self.require_open_debt(&borrower);
        let (caller, payment) = self.validate_payment(&cache.loan_token);

        let (collateral_seized, refund) =
            self.process_liquidation(&caller, &borrower, position, &payment, &mut cache);
        self.emit_pool_state(&cache);

        let loan_token = cache.loan_token.clone();
        let collateral_token = cache.collateral_token.clone();
        drop(cache);

        self.send_tokens(&caller, &collateral_token, &collateral_seized);
        self.send_tokens(&caller, &loan_token, &refund);
    }
}
