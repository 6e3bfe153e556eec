use common_structs::{BorrowPosition, LenderAccount, PoolConfig};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Asset lent out by the pool and paid back by borrowers.
    #[view(getLoanToken)]
    #[storage_mapper("loan_token")]
    fn loan_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Asset posted by borrowers as collateral.
    #[view(getCollateralToken)]
    #[storage_mapper("collateral_token")]
    fn collateral_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Contract answering `getValue(token, quantity)` in loan token units.
    #[view(getValueOracleAddress)]
    #[storage_mapper("value_oracle_address")]
    fn value_oracle_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getPoolConfig)]
    #[storage_mapper("pool_config")]
    fn pool_config(&self) -> SingleValueMapper<PoolConfig>;

    /// Sum of every lender's principal.
    #[view(getTotalDeposits)]
    #[storage_mapper("total_deposits")]
    fn total_deposits(&self) -> SingleValueMapper<BigUint>;

    /// Outstanding borrowed principal, interest excluded.
    #[view(getTotalBorrows)]
    #[storage_mapper("total_borrows")]
    fn total_borrows(&self) -> SingleValueMapper<BigUint>;

    /// Yield credited to lenders and not yet claimed.
    #[view(getTotalYield)]
    #[storage_mapper("total_yield")]
    fn total_yield(&self) -> SingleValueMapper<BigUint>;

    #[view(getAdminFeesAccrued)]
    #[storage_mapper("admin_fees_accrued")]
    fn admin_fees_accrued(&self) -> SingleValueMapper<BigUint>;

    /// Cumulative yield per unit of principal, RAY scaled.
    #[view(getYieldIndex)]
    #[storage_mapper("yield_index")]
    fn yield_index(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("lender_account")]
    fn lender_account(
        &self,
        lender: &ManagedAddress,
    ) -> SingleValueMapper<LenderAccount<Self::Api>>;

    #[storage_mapper("position")]
    fn position(&self, borrower: &ManagedAddress)
        -> SingleValueMapper<BorrowPosition<Self::Api>>;

    /// Every address that ever deposited collateral.
    #[view(getBorrowers)]
    #[storage_mapper("borrowers")]
    fn borrowers(&self) -> UnorderedSetMapper<ManagedAddress>;
}
