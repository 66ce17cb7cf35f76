pub mod allowance;
pub mod balance;
