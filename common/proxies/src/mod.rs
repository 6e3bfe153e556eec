#![no_std]

pub mod proxy_ledger;
pub mod proxy_value_oracle;
