#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("deposit_loan")]
    fn deposit_loan_event(
        &self,
        #[indexed] lender: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] principal: &BigUint,
    );

    #[event("withdraw_loan")]
    fn withdraw_loan_event(
        &self,
        #[indexed] lender: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] principal: &BigUint,
    );

    #[event("claim_yield")]
    fn claim_yield_event(&self, #[indexed] lender: &ManagedAddress, #[indexed] amount: &BigUint);

    #[event("deposit_collateral")]
    fn deposit_collateral_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] position: &BorrowPosition<Self::Api>,
    );

    /// First collateral deposit of `borrower`.
    #[event("register_borrower")]
    fn register_borrower_event(&self, #[indexed] borrower: &ManagedAddress);

    #[event("withdraw_collateral")]
    fn withdraw_collateral_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] position: &BorrowPosition<Self::Api>,
    );

    #[event("borrow")]
    fn borrow_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] interest: &BigUint,
        #[indexed] position: &BorrowPosition<Self::Api>,
    );

    #[event("repay")]
    fn repay_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] position: &BorrowPosition<Self::Api>,
    );

    // Emitted for every interest payment and liquidation surplus credited to the pool.
    #[event("fee_split")]
    fn fee_split_event(
        &self,
        #[indexed] amount: &BigUint,
        #[indexed] admin_cut: &BigUint,
        #[indexed] lender_credit: &BigUint,
    );

    #[event("liquidation")]
    fn liquidation_event(
        &self,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] debt_repaid: &BigUint,
        #[indexed] collateral_seized: &BigUint,
        #[indexed] settlement: &BigUint,
        #[indexed] expired: bool,
    );

    #[event("update_pool_config")]
    fn update_pool_config_event(&self, #[indexed] config: &PoolConfig);

    #[event("withdraw_admin_fees")]
    fn withdraw_admin_fees_event(&self, #[indexed] to: &ManagedAddress, #[indexed] amount: &BigUint);

    #[event("update_pool_state")]
    fn update_pool_state_event(
        &self,
        #[indexed] timestamp: u64,
        #[indexed] total_deposits: &BigUint,
        #[indexed] total_borrows: &BigUint,
        #[indexed] total_yield: &BigUint,
        #[indexed] admin_fees_accrued: &BigUint,
        #[indexed] yield_index: &BigUint,
    );
}
