multiversx_sc::imports!();

use common_structs::{BorrowPosition, LenderAccount};

use crate::{cache::Cache, storage};

/// Shared pool bookkeeping used by the lender, borrower and liquidation flows.
///
/// Every credit to the pool goes through `distribute_fee` so the admin and lender
/// shares always add up to the amount received.
#[multiversx_sc::module]
pub trait LedgerUtilsModule:
    storage::Storage + common_events::EventsModule + common_math::SharedMathModule
{
    /// Lender account of `lender`, or a fresh one checkpointed at `yield_index` so
    /// that a new lender does not share yield credited before it joined.
    fn get_lender_account(
        &self,
        lender: &ManagedAddress,
        yield_index: &BigUint,
    ) -> LenderAccount<Self::Api> {
        let mapper = self.lender_account(lender);
        if mapper.is_empty() {
            LenderAccount::new(yield_index.clone())
        } else {
            mapper.get()
        }
    }

    fn get_position(&self, borrower: &ManagedAddress) -> BorrowPosition<Self::Api> {
        let mapper = self.position(borrower);
        if mapper.is_empty() {
            BorrowPosition::default()
        } else {
            mapper.get()
        }
    }

    /// Adds `amount` to the yield owed to lenders and moves the yield index.
    ///
    /// With no deposits there is nobody to credit, so the amount goes to the admin.
    fn credit_lenders(&self, cache: &mut Cache<Self>, amount: &BigUint) {
        if amount == &BigUint::zero() {
            return;
        }

        if cache.total_deposits == BigUint::zero() {
            cache.admin_fees_accrued += amount;
            return;
        }

        let index_delta = self.ray_div(amount, &cache.total_deposits);
        cache.yield_index += &index_delta;
        cache.total_yield += amount;
    }

    /// Splits `amount` between the admin and the lenders using the configured fee.
    ///
    /// # Returns
    /// - `(admin_cut, lender_credit)`
    fn distribute_fee(&self, cache: &mut Cache<Self>, amount: &BigUint) -> (BigUint, BigUint) {
        let (admin_cut, lender_credit) =
            self.split_admin_fee(amount, cache.config.admin_fee_percent);

        cache.admin_fees_accrued += &admin_cut;
        self.credit_lenders(cache, &lender_credit);

        if amount > &BigUint::zero() {
            self.fee_split_event(amount, &admin_cut, &lender_credit);
        }

        (admin_cut, lender_credit)
    }

    fn emit_pool_state(&self, cache: &Cache<Self>) {
        self.update_pool_state_event(
            cache.timestamp,
            &cache.total_deposits,
            &cache.total_borrows,
            &cache.total_yield,
            &cache.admin_fees_accrued,
            &cache.yield_index,
        );
    }

    #[inline]
    fn send_tokens(&self, to: &ManagedAddress, token: &EgldOrEsdtTokenIdentifier, amount: &BigUint) {
        let payment = EgldOrEsdtTokenPayment::new(token.clone(), 0, amount.clone());
        self.tx().to(to).payment(&payment).transfer_if_not_empty();
    }
}
