multiversx_sc::imports!();

use common_structs::BorrowPosition;

use crate::{
    cache::Cache, oracle, storage, utils, validation, ERROR_INSUFFICIENT_COLLATERAL_BALANCE,
    ERROR_UNDERCOLLATERALIZED,
};

#[multiversx_sc::module]
pub trait PositionCollateralModule:
    storage::Storage
    + oracle::OracleModule
    + utils::LedgerUtilsModule
    + validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Adds `amount` of collateral token to the borrower's position and registers the
    /// borrower for liquidation discovery.
    fn process_deposit_collateral(
        &self,
        borrower: &ManagedAddress,
        amount: &BigUint,
    ) -> BorrowPosition<Self::Api> {
        let mut position = self.get_position(borrower);
        position.collateral_amount += amount;

        self.position(borrower).set(&position);
        if self.borrowers().insert(borrower.clone()) {
            self.register_borrower_event(borrower);
        }
        self.deposit_collateral_event(borrower, amount, &position);

        position
    }

    /// Removes `amount` of collateral. With outstanding debt the remaining collateral
    /// must still cover `debt + interest` at the collateral factor.
    ///
    /// # Errors
    /// - `ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO`
    /// - `ERROR_INSUFFICIENT_COLLATERAL_BALANCE`
    /// - `ERROR_UNDERCOLLATERALIZED`
    fn process_withdraw_collateral(
        &self,
        borrower: &ManagedAddress,
        amount: &BigUint,
        cache: &Cache<Self>,
    ) -> BorrowPosition<Self::Api> {
        self.require_amount_greater_than_zero(amount);

        let mut position = self.get_position(borrower);
        require!(
            &position.collateral_amount >= amount,
            ERROR_INSUFFICIENT_COLLATERAL_BALANCE
        );

        let remaining_collateral = &position.collateral_amount - amount;
        let total_debt = position.total_debt();
        if total_debt > BigUint::zero() {
            let remaining_value = self.get_value(&cache.collateral_token, &remaining_collateral);
            require!(
                self.meets_ratio(
                    &remaining_value,
                    &total_debt,
                    cache.config.collateral_factor
                ),
                ERROR_UNDERCOLLATERALIZED
            );
        }

        position.collateral_amount = remaining_collateral;

        self.position(borrower).set(&position);
        self.withdraw_collateral_event(borrower, amount, &position);

        position
    }
}
