multiversx_sc::imports!();

use common_structs::LenderAccount;

use crate::{
    cache::Cache, storage, utils, validation, ERROR_INSUFFICIENT_BALANCE,
    ERROR_INSUFFICIENT_LIQUIDITY,
};

#[multiversx_sc::module]
pub trait LenderWithdrawModule:
    storage::Storage
    + utils::LedgerUtilsModule
    + validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Debits `amount` from the lender's principal. Only liquidity that is not lent
    /// out can leave the pool.
    ///
    /// # Errors
    /// - `ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO`
    /// - `ERROR_INSUFFICIENT_BALANCE`: principal below `amount`.
    /// - `ERROR_INSUFFICIENT_LIQUIDITY`: `total_deposits - total_borrows` below `amount`.
    fn process_withdraw_loan(
        &self,
        lender: &ManagedAddress,
        amount: &BigUint,
        cache: &mut Cache<Self>,
    ) -> LenderAccount<Self::Api> {
        self.require_amount_greater_than_zero(amount);

        let mut account = self.get_lender_account(lender, &cache.yield_index);
        require!(&account.principal >= amount, ERROR_INSUFFICIENT_BALANCE);
        require!(cache.has_liquidity(amount), ERROR_INSUFFICIENT_LIQUIDITY);

        account.checkpoint(&cache.yield_index);
        account.principal -= amount;
        cache.total_deposits -= amount;

        self.lender_account(lender).set(&account);
        self.withdraw_loan_event(lender, amount, &account.principal);

        account
    }
}
