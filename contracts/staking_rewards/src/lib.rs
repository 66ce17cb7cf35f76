#![no_std]

mod contract;
mod controller;
mod events;
mod math;
mod staking_rewards;
pub mod storage;


pub use crate::contract::{StakingRewards, StakingRewardsClient};
pub use crate::staking_rewards::StakingRewardsTrait;
