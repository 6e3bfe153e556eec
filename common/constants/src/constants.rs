#![no_std]

/// Scale of every percent parameter (`collateral_factor`, `interest_rate`, ...).
pub const PERCENT: u64 = 100;

/// Basis points for 100%, used by the reporting views.
pub const BPS: u64 = 10_000;

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;

/// Fixed-point scale of oracle prices, one unit of valuation per raw token unit.
pub const PRICE_PRECISION: u128 = 1_000_000_000_000_000_000;

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Collateral and liquidation ratios can never drop below full collateralization.
pub const MIN_COLLATERAL_RATIO: u64 = 100;

pub const MAX_ADMIN_FEE_PERCENT: u64 = 50;

pub const MAX_LIQUIDATION_BONUS_PERCENT: u64 = 15;

pub const MIN_LOAN_DURATION: u64 = SECONDS_PER_DAY;

/// Reported health factor for positions without any debt value.
pub const HEALTH_FACTOR_INFINITE: u64 = u64::MAX;
