pub mod supply;
pub mod withdraw;
pub mod yields;
