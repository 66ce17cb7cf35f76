pub mod liquidity;
pub mod swap;
