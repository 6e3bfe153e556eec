#![no_std]

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_TRANSFER_FAILED: &[u8] = b"Transfer failed: payment token does not match.";

pub static ERROR_INSUFFICIENT_BALANCE: &[u8] = b"Not enough tokens deposited for this account.";

pub static ERROR_INSUFFICIENT_COLLATERAL_BALANCE: &[u8] =
    b"Not enough collateral deposited for this account.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient liquidity available in the pool.";

pub static ERROR_UNDERCOLLATERALIZED: &[u8] =
    b"Position would be under the required collateral factor.";

pub static ERROR_OVERPAYMENT: &[u8] = b"Repayment exceeds outstanding debt and interest.";

pub static ERROR_NO_DEBT: &[u8] = b"Position has no outstanding debt.";

pub static ERROR_NOT_LIQUIDATABLE: &[u8] = b"Position is neither expired nor under the liquidation threshold.";

pub static ERROR_INSUFFICIENT_LIQUIDATION_PAYMENT: &[u8] =
    b"Liquidation payment does not cover the settlement amount.";

pub static ERROR_NO_FEES: &[u8] = b"No admin fees to withdraw.";

pub static ERROR_NO_YIELD: &[u8] = b"No yield to claim.";

pub static ERROR_INVALID_COLLATERAL_FACTOR: &[u8] =
    b"Invalid configuration: collateral factor must be at least 100 percent.";

pub static ERROR_INVALID_LIQUIDATION_THRESHOLD: &[u8] =
    b"Invalid configuration: liquidation threshold must be at least 100 percent.";

pub static ERROR_THRESHOLD_ABOVE_COLLATERAL_FACTOR: &[u8] =
    b"Invalid configuration: liquidation threshold cannot exceed the collateral factor.";

pub static ERROR_INVALID_LIQUIDATION_BONUS: &[u8] =
    b"Invalid configuration: liquidation bonus cannot exceed 15 percent.";

pub static ERROR_INVALID_LOAN_DURATION: &[u8] =
    b"Invalid configuration: loan duration must be at least one day.";

pub static ERROR_INVALID_ADMIN_FEE: &[u8] =
    b"Invalid configuration: admin fee cannot exceed 50 percent.";

pub static ERROR_INVALID_ASSET_PAIR: &[u8] =
    b"Invalid configuration: loan and collateral assets must differ.";

pub static ERROR_ADDRESS_IS_ZERO: &[u8] = b"Address is zero.";

pub static ERROR_PRICE_NOT_SET: &[u8] = b"Price not set for this token.";

pub static ERROR_INVALID_PRICE: &[u8] = b"Price must be greater than zero.";

pub static ERROR_NOT_FEEDER: &[u8] = b"Only the owner or a registered feeder can submit prices.";
