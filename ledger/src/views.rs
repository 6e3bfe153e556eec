multiversx_sc::imports!();

use common_constants::HEALTH_FACTOR_INFINITE;
use common_structs::{
    BorrowPosition, LenderAccount, PositionView, UserDashboard, YieldBreakdown,
};

use crate::{oracle, positions, storage, utils, validation};

/// Read-only reporting surface. Views read storage directly and never commit anything.
#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + oracle::OracleModule
    + utils::LedgerUtilsModule
    + validation::ValidationModule
    + positions::liquidation::PositionLiquidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Loan tokens that can be borrowed or withdrawn right now.
    #[view(availableLiquidity)]
    fn available_liquidity(&self) -> BigUint {
        let total_deposits = self.total_deposits().get();
        let total_borrows = self.total_borrows().get();
        if total_deposits > total_borrows {
            total_deposits - total_borrows
        } else {
            BigUint::zero()
        }
    }

    #[view(getLenderAccount)]
    fn get_lender_account_view(&self, lender: ManagedAddress) -> LenderAccount<Self::Api> {
        self.get_lender_account(&lender, &self.yield_index().get())
    }

    #[view(getPosition)]
    fn get_position_view(&self, borrower: ManagedAddress) -> BorrowPosition<Self::Api> {
        self.get_position(&borrower)
    }

    /// Yield `lender` would receive from `claimYield` now.
    #[view(getClaimableYield)]
    fn get_claimable_yield(&self, lender: ManagedAddress) -> BigUint {
        let yield_index = self.yield_index().get();
        let account = self.get_lender_account(&lender, &yield_index);
        let claimable = account.claimable_yield(&yield_index);

        self.get_min(claimable, self.total_yield().get())
    }

    /// Pool yield figures and the lender's part of them.
    ///
    /// `lender_percent_bps` is the lender's share of total deposits in basis points,
    /// 0 while the pool holds no deposits.
    #[view(getYieldBreakdown)]
    fn get_yield_breakdown(&self, lender: ManagedAddress) -> YieldBreakdown<Self::Api> {
        let total_deposits = self.total_deposits().get();
        let account = self.get_lender_account(&lender, &self.yield_index().get());

        let lender_percent_bps = if total_deposits == BigUint::zero() {
            BigUint::zero()
        } else {
            self.ratio_bps(&account.principal, &total_deposits)
        };

        YieldBreakdown {
            total_yield_pool: self.total_yield().get(),
            admin_fees: self.admin_fees_accrued().get(),
            lender_share: self.get_claimable_yield(lender),
            lender_percent_bps,
        }
    }

    /// Borrower position valued through the oracle.
    ///
    /// `health_factor_bps` is `collateral_value * 10_000 / debt_value`, or
    /// `HEALTH_FACTOR_INFINITE` when the debt is worth nothing.
    #[view(getUserPosition)]
    fn get_user_position(&self, user: ManagedAddress) -> PositionView<Self::Api> {
        let position = self.get_position(&user);
        let total_debt = position.total_debt();

        let collateral_value = self.get_collateral_value(&position.collateral_amount);
        let debt_value = self.get_debt_value(&total_debt);

        let health_factor_bps = if debt_value == BigUint::zero() {
            BigUint::from(HEALTH_FACTOR_INFINITE)
        } else {
            self.ratio_bps(&collateral_value, &debt_value)
        };

        let config = self.pool_config().get();
        let now = self.blockchain().get_block_timestamp();
        let (expired, underwater) =
            self.liquidation_status(&position, &collateral_value, &debt_value, &config, now);

        PositionView {
            is_liquidatable: position.has_debt() && (expired || underwater),
            collateral: position.collateral_amount,
            debt: position.debt_amount,
            interest_owed: position.interest_owed,
            collateral_value,
            debt_value,
            health_factor_bps,
        }
    }

    #[view(getUserDashboard)]
    fn get_user_dashboard(&self, user: ManagedAddress) -> UserDashboard<Self::Api> {
        let lender_principal = self
            .get_lender_account(&user, &self.yield_index().get())
            .principal;

        UserDashboard {
            position: self.get_user_position(user.clone()),
            lender_principal,
            yield_breakdown: self.get_yield_breakdown(user.clone()),
            available_liquidity: self.available_liquidity(),
            admin_fees_accrued: self.admin_fees_accrued().get(),
            is_admin: user == self.blockchain().get_owner_address(),
        }
    }
}
