#![no_std]

use common_constants::RAY;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Risk and fee parameters of the pool. Every percent is on a 0-100 scale.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct PoolConfig {
    /// Minimum `collateral value * 100 / debt` required to open or keep debt.
    pub collateral_factor: u64,
    /// Ratio under which a position becomes liquidatable. Never above `collateral_factor`.
    pub liquidation_threshold: u64,
    /// Discount on the collateral value granted to liquidators.
    pub liquidation_bonus: u64,
    /// Flat interest charged on every borrowed amount.
    pub interest_rate: u64,
    /// Maximum age of a position, in seconds.
    pub loan_duration: u64,
    /// Share of every interest or liquidation surplus kept by the admin.
    pub admin_fee_percent: u64,
}

/// A lender's principal and yield checkpoint.
///
/// `yield_index` is the pool yield index at the last checkpoint; everything that
/// accrued before it has been moved into `pending_yield`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct LenderAccount<M: ManagedTypeApi> {
    pub principal: BigUint<M>,
    pub yield_index: BigUint<M>,
    pub pending_yield: BigUint<M>,
}

impl<M: ManagedTypeApi> LenderAccount<M> {
    pub fn new(yield_index: BigUint<M>) -> Self {
        LenderAccount {
            principal: BigUint::zero(),
            yield_index,
            pending_yield: BigUint::zero(),
        }
    }

    /// Yield earned by `principal` since the last checkpoint, rounded down.
    pub fn accrued_since_checkpoint(&self, current_index: &BigUint<M>) -> BigUint<M> {
        if current_index <= &self.yield_index {
            return BigUint::zero();
        }

        let index_delta = current_index - &self.yield_index;
        &self.principal * &index_delta / BigUint::from(RAY)
    }

    pub fn claimable_yield(&self, current_index: &BigUint<M>) -> BigUint<M> {
        &self.pending_yield + &self.accrued_since_checkpoint(current_index)
    }

    pub fn checkpoint(&mut self, current_index: &BigUint<M>) {
        let accrued = self.accrued_since_checkpoint(current_index);
        self.pending_yield += accrued;
        self.yield_index = current_index.clone();
    }
}

/// A borrower's collateral and debt. `borrow_timestamp == 0` means no active loan.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct BorrowPosition<M: ManagedTypeApi> {
    pub collateral_amount: BigUint<M>,
    pub debt_amount: BigUint<M>,
    pub interest_owed: BigUint<M>,
    pub borrow_timestamp: u64,
}

impl<M: ManagedTypeApi> Default for BorrowPosition<M> {
    fn default() -> Self {
        BorrowPosition {
            collateral_amount: BigUint::zero(),
            debt_amount: BigUint::zero(),
            interest_owed: BigUint::zero(),
            borrow_timestamp: 0,
        }
    }
}

impl<M: ManagedTypeApi> BorrowPosition<M> {
    pub fn total_debt(&self) -> BigUint<M> {
        &self.debt_amount + &self.interest_owed
    }

    pub fn has_debt(&self) -> bool {
        self.debt_amount > BigUint::zero()
    }

    pub fn is_expired(&self, now: u64, loan_duration: u64) -> bool {
        self.has_debt() && now > self.borrow_timestamp.saturating_add(loan_duration)
    }

    /// Closes the loan while keeping the posted collateral.
    pub fn clear_debt(&mut self) {
        self.debt_amount = BigUint::zero();
        self.interest_owed = BigUint::zero();
        self.borrow_timestamp = 0;
    }

    pub fn reset(&mut self) {
        self.clear_debt();
        self.collateral_amount = BigUint::zero();
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct YieldBreakdown<M: ManagedTypeApi> {
    pub total_yield_pool: BigUint<M>,
    pub admin_fees: BigUint<M>,
    pub lender_share: BigUint<M>,
    pub lender_percent_bps: BigUint<M>,
}

/// Valued snapshot of a borrower's position.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct PositionView<M: ManagedTypeApi> {
    pub collateral: BigUint<M>,
    pub debt: BigUint<M>,
    pub interest_owed: BigUint<M>,
    pub collateral_value: BigUint<M>,
    pub debt_value: BigUint<M>,
    /// `collateral_value * 10_000 / debt_value`, or `HEALTH_FACTOR_INFINITE` without debt value.
    pub health_factor_bps: BigUint<M>,
    pub is_liquidatable: bool,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct UserDashboard<M: ManagedTypeApi> {
    pub position: PositionView<M>,
    pub lender_principal: BigUint<M>,
    pub yield_breakdown: YieldBreakdown<M>,
    pub available_liquidity: BigUint<M>,
    pub admin_fees_accrued: BigUint<M>,
    pub is_admin: bool,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct TimestampedPrice<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    pub timestamp: u64,
}
