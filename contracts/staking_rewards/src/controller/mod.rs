pub mod rewards;
pub mod stake;
