multiversx_sc::imports!();

use common_structs::BorrowPosition;

use crate::{
    cache::Cache, oracle, storage, utils, validation, ERROR_INSUFFICIENT_LIQUIDITY,
    ERROR_UNDERCOLLATERALIZED,
};

#[multiversx_sc::module]
pub trait PositionBorrowModule:
    storage::Storage
    + oracle::OracleModule
    + utils::LedgerUtilsModule
    + validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Opens or extends a loan of `amount` loan tokens.
    ///
    /// Flat interest of `amount * interest_rate / 100` is owed immediately, and the
    /// loan clock restarts for the whole position.
    ///
    /// # Errors
    /// - `ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO`
    /// - `ERROR_UNDERCOLLATERALIZED`: `collateral_value * 100 / new_debt < collateral_factor`.
    /// - `ERROR_INSUFFICIENT_LIQUIDITY`
    fn process_borrow(
        &self,
        borrower: &ManagedAddress,
        amount: &BigUint,
        cache: &mut Cache<Self>,
    ) -> BorrowPosition<Self::Api> {
        self.require_amount_greater_than_zero(amount);

        let mut position = self.get_position(borrower);
        let new_debt = &position.debt_amount + amount;

        let collateral_value = self.get_value(&cache.collateral_token, &position.collateral_amount);
        require!(
            self.meets_ratio(&collateral_value, &new_debt, cache.config.collateral_factor),
            ERROR_UNDERCOLLATERALIZED
        );
        require!(cache.has_liquidity(amount), ERROR_INSUFFICIENT_LIQUIDITY);

        let interest = self.percent_of(amount, cache.config.interest_rate);

        position.debt_amount = new_debt;
        position.interest_owed += &interest;
        position.borrow_timestamp = cache.timestamp;
        cache.total_borrows += amount;

        self.position(borrower).set(&position);
        self.borrow_event(borrower, amount, &interest, &position);

        position
    }
}
