multiversx_sc::imports!();

use common_structs::LenderAccount;

use crate::{cache::Cache, storage, utils};

#[multiversx_sc::module]
pub trait LenderSupplyModule:
    storage::Storage
    + utils::LedgerUtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Credits `amount` of loan token to the lender's principal.
    ///
    /// Pending yield is checkpointed first, so the new principal only earns yield
    /// credited from now on.
    fn process_deposit_loan(
        &self,
        lender: &ManagedAddress,
        amount: &BigUint,
        cache: &mut Cache<Self>,
    ) -> LenderAccount<Self::Api> {
        let mut account = self.get_lender_account(lender, &cache.yield_index);
        account.checkpoint(&cache.yield_index);

        account.principal += amount;
        cache.total_deposits += amount;

        self.lender_account(lender).set(&account);
        self.deposit_loan_event(lender, amount, &account.principal);

        account
    }
}
