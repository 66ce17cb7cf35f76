#![no_std]

mod contract;
mod controller;
mod events;
mod liquidity_pool;
mod math;
mod pool;
mod share_token;
pub mod storage;


pub use crate::contract::{LiquidityPool, LiquidityPoolClient};
pub use crate::liquidity_pool::LiquidityPoolTrait;
