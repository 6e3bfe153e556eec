multiversx_sc::imports!();

use crate::{cache::Cache, storage, utils, ERROR_NO_YIELD};

#[multiversx_sc::module]
pub trait LenderYieldModule:
    storage::Storage
    + utils::LedgerUtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Moves the lender's accrued yield out of `total_yield` and returns the amount
    /// to pay. The claimed share is zeroed, so claiming twice pays once.
    fn process_claim_yield(&self, lender: &ManagedAddress, cache: &mut Cache<Self>) -> BigUint {
        let mut account = self.get_lender_account(lender, &cache.yield_index);
        account.checkpoint(&cache.yield_index);

        let claimed = self.get_min(account.pending_yield.clone(), cache.total_yield.clone());
        require!(claimed > BigUint::zero(), ERROR_NO_YIELD);

        account.pending_yield = BigUint::zero();
        cache.total_yield -= &claimed;

        self.lender_account(lender).set(&account);
        self.claim_yield_event(lender, &claimed);

        claimed
    }
}
