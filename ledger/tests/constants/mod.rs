use multiversx_sc::types::{TestAddress, TestSCAddress};
use multiversx_sc_scenario::imports::{MxscPath, TestTokenIdentifier};

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const START_TIMESTAMP: u64 = 1_000;

pub const COLLATERAL_FACTOR: u64 = 150; // 150%
pub const LIQUIDATION_THRESHOLD: u64 = 120; // 120%
pub const LIQUIDATION_BONUS: u64 = 10; // 10% off the collateral value
pub const INTEREST_RATE: u64 = 5; // 5% flat per borrow
pub const LOAN_DURATION: u64 = SECONDS_PER_DAY * 30;
pub const ADMIN_FEE_PERCENT: u64 = 10; // 10%

/// Oracle price for one raw unit worth one loan token unit.
pub const PRICE_ONE: u64 = 1_000_000_000_000_000_000;

pub const INITIAL_BALANCE: u64 = 1_000_000_000;

pub const LOAN_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("LOAN-abcdef");
pub const COLLATERAL_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("COLL-abcdef");
pub const OTHER_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("OTHER-abcdef");

pub const LEDGER_ADDRESS: TestSCAddress = TestSCAddress::new("ledger");
pub const VALUE_ORACLE_ADDRESS: TestSCAddress = TestSCAddress::new("value-oracle");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const FEEDER_ADDRESS: TestAddress = TestAddress::new("feeder");
pub const TREASURY_ADDRESS: TestAddress = TestAddress::new("treasury");
pub const LENDER_ADDRESS: TestAddress = TestAddress::new("lender");
pub const LENDER_2_ADDRESS: TestAddress = TestAddress::new("lender2");
pub const BORROWER_ADDRESS: TestAddress = TestAddress::new("borrower");
pub const BORROWER_2_ADDRESS: TestAddress = TestAddress::new("borrower2");
pub const LIQUIDATOR_ADDRESS: TestAddress = TestAddress::new("liquidator");

pub const LEDGER_PATH: MxscPath = MxscPath::new("output/ledger.mxsc.json");
pub const VALUE_ORACLE_PATH: MxscPath =
    MxscPath::new("../value_oracle/output/value-oracle.mxsc.json");

pub const ERROR_PAUSED: &[u8] = b"Contract is paused";
pub const ERROR_ONLY_OWNER: &[u8] = b"Endpoint can only be called by owner";
