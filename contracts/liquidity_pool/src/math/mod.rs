pub mod liquidity_math;
pub mod swap_math;
