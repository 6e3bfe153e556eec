use common_structs::PoolConfig;

multiversx_sc::imports!();

/// In-memory snapshot of the pool totals, loaded at the start of an operation.
///
/// Mutations happen on the snapshot and are written back to storage when the
/// cache is dropped. Endpoints drop it explicitly before pushing tokens out, so
/// every transfer happens against committed state.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub total_deposits: BigUint<C::Api>,
    pub total_borrows: BigUint<C::Api>,
    pub total_yield: BigUint<C::Api>,
    pub admin_fees_accrued: BigUint<C::Api>,
    /// RAY scaled yield per unit of principal.
    pub yield_index: BigUint<C::Api>,
    pub config: PoolConfig,
    pub loan_token: EgldOrEsdtTokenIdentifier<C::Api>,
    pub collateral_token: EgldOrEsdtTokenIdentifier<C::Api>,
    /// Block timestamp in seconds.
    pub timestamp: u64,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        Cache {
            total_deposits: sc_ref.total_deposits().get(),
            total_borrows: sc_ref.total_borrows().get(),
            total_yield: sc_ref.total_yield().get(),
            admin_fees_accrued: sc_ref.admin_fees_accrued().get(),
            yield_index: sc_ref.yield_index().get(),
            config: sc_ref.pool_config().get(),
            loan_token: sc_ref.loan_token().get(),
            collateral_token: sc_ref.collateral_token().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            sc_ref,
        }
    }

    /// Loan tokens that are deposited and not lent out.
    pub fn available_liquidity(&self) -> BigUint<C::Api> {
        if self.total_deposits > self.total_borrows {
            &self.total_deposits - &self.total_borrows
        } else {
            BigUint::zero()
        }
    }

    pub fn has_liquidity(&self, amount: &BigUint<C::Api>) -> bool {
        &self.available_liquidity() >= amount
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        // commit changes to storage for the mutable fields
        self.sc_ref.total_deposits().set(&self.total_deposits);
        self.sc_ref.total_borrows().set(&self.total_borrows);
        self.sc_ref.total_yield().set(&self.total_yield);
        self.sc_ref.admin_fees_accrued().set(&self.admin_fees_accrued);
        self.sc_ref.yield_index().set(&self.yield_index);
    }
}
