use common_constants::PERCENT;
use common_structs::{BorrowPosition, PoolConfig};

use crate::{
    cache::Cache, oracle, storage, utils, validation, ERROR_INSUFFICIENT_LIQUIDATION_PAYMENT,
    ERROR_NOT_LIQUIDATABLE, ERROR_NO_DEBT,
};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionLiquidationModule:
    storage::Storage
    + oracle::OracleModule
    + utils::LedgerUtilsModule
    + validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// A position is liquidatable once its loan expired or its collateral ratio fell
    /// under the liquidation threshold. A zero debt value is never underwater.
    ///
    /// # Returns
    /// - `(expired, underwater)`
    fn liquidation_status(
        &self,
        position: &BorrowPosition<Self::Api>,
        collateral_value: &BigUint,
        debt_value: &BigUint,
        config: &PoolConfig,
        now: u64,
    ) -> (bool, bool) {
        let expired = position.is_expired(now, config.loan_duration);
        let underwater = debt_value > &BigUint::zero()
            && !self.meets_ratio(collateral_value, debt_value, config.liquidation_threshold);

        (expired, underwater)
    }

    /// Position of `borrower`, which must carry debt to be liquidated.
    fn require_open_debt(&self, borrower: &ManagedAddress) -> BorrowPosition<Self::Api> {
        let position = self.get_position(borrower);
        require!(position.has_debt(), ERROR_NO_DEBT);

        position
    }

    /// Price a liquidator pays for the whole collateral.
    ///
    /// The collateral is sold at `liquidation_bonus` percent under its value, but never
    /// for less than the total debt, so the pool always recovers principal and interest.
    fn settlement_amount(
        &self,
        total_debt: &BigUint,
        collateral_value: &BigUint,
        liquidation_bonus: u64,
    ) -> BigUint {
        let discounted_value = self.percent_of(collateral_value, PERCENT - liquidation_bonus);
        self.get_max(total_debt.clone(), discounted_value)
    }

    /// Closes the borrower's position against a loan token payment of `payment`.
    ///
    /// The principal part returns to the pool. The interest part and whatever the
    /// settlement brings in above the debt are split between the admin and the lenders.
    ///
    /// # Returns
    /// - `(collateral_seized, refund)`: collateral owed to the liquidator and the
    ///   unused part of `payment`.
    ///
    /// # Errors
    /// - `ERROR_NOT_LIQUIDATABLE`
    /// - `ERROR_INSUFFICIENT_LIQUIDATION_PAYMENT`: `payment` below the settlement amount.
    fn process_liquidation(
        &self,
        liquidator: &ManagedAddress,
        borrower: &ManagedAddress,
        position: BorrowPosition<Self::Api>,
        payment: &BigUint,
        cache: &mut Cache<Self>,
    ) -> (BigUint, BigUint) {
        let total_debt = position.total_debt();
        let collateral_value = self.get_value(&cache.collateral_token, &position.collateral_amount);
        let debt_value = self.get_value(&cache.loan_token, &total_debt);

        let (expired, underwater) = self.liquidation_status(
            &position,
            &collateral_value,
            &debt_value,
            &cache.config,
            cache.timestamp,
        );
        require!(expired || underwater, ERROR_NOT_LIQUIDATABLE);

        let settlement =
            self.settlement_amount(&total_debt, &collateral_value, cache.config.liquidation_bonus);
        require!(payment >= &settlement, ERROR_INSUFFICIENT_LIQUIDATION_PAYMENT);
        let refund = payment - &settlement;

        cache.total_borrows -= &position.debt_amount;
        self.distribute_fee(cache, &position.interest_owed);
        if settlement > total_debt {
            let surplus = &settlement - &total_debt;
            self.distribute_fee(cache, &surplus);
        }

        let mut position = position;
        let collateral_seized = position.collateral_amount.clone();
        position.reset();
        self.position(borrower).set(&position);

        self.liquidation_event(
            liquidator,
            borrower,
            &total_debt,
            &collateral_seized,
            &settlement,
            expired,
        );

        (collateral_seized, refund)
    }
}
