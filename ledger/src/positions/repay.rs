multiversx_sc::imports!();

use common_structs::BorrowPosition;

use crate::{cache::Cache, storage, utils, ERROR_OVERPAYMENT};

#[multiversx_sc::module]
pub trait PositionRepayModule:
    storage::Storage
    + utils::LedgerUtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Applies a repayment of `amount` loan tokens, interest first.
    ///
    /// The interest part is split between the admin and the lenders; the rest
    /// reduces the principal. Once both reach zero the loan clock is cleared.
    fn process_repay(
        &self,
        borrower: &ManagedAddress,
        amount: &BigUint,
        cache: &mut Cache<Self>,
    ) -> BorrowPosition<Self::Api> {
        let mut position = self.get_position(borrower);
        require!(amount <= &position.total_debt(), ERROR_OVERPAYMENT);

        let interest_paid = self.get_min(amount.clone(), position.interest_owed.clone());
        let principal_paid = amount - &interest_paid;

        self.distribute_fee(cache, &interest_paid);
        position.interest_owed -= &interest_paid;

        position.debt_amount -= &principal_paid;
        cache.total_borrows -= &principal_paid;

        if position.total_debt() == BigUint::zero() {
            position.clear_debt();
        }

        self.position(borrower).set(&position);
        self.repay_event(borrower, amount, &position);

        position
    }
}
