use soroban_sdk::{Address, Env, Symbol};

use crate::storage::SwapDirection;

pub struct PoolEvents {}

impl PoolEvents {
    /// Emitted when a provider deposits into the pool
    ///
    /// - topics - `["add_liquidity", provider: Address]`
    /// - data - `[base_amount: i128, quote_amount: i128]`
    pub fn add_liquidity(env: &Env, provider: Address, base_amount: i128, quote_amount: i128) {
        let topics = (Symbol::new(env, "add_liquidity"), provider);
        env.events().publish(topics, (base_amount, quote_amount));
    }

    /// Emitted when a provider burns shares for their slice of the reserves
    ///
    /// - topics - `["remove_liquidity", provider: Address]`
    /// - data - `[base_amount: i128, quote_amount: i128]`
    pub fn remove_liquidity(env: &Env, provider: Address, base_amount: i128, quote_amount: i128) {
        let topics = (Symbol::new(env, "remove_liquidity"), provider);
        env.events().publish(topics, (base_amount, quote_amount));
    }

    /// - topics - `["swap", trader: Address, direction: SwapDirection]`
    /// - data - `[amount_in: i128, amount_out: i128]`
    pub fn swap(
        env: &Env,
        trader: Address,
        direction: SwapDirection,
        amount_in: i128,
        amount_out: i128,
    ) {
        let topics = (Symbol::new(env, "swap"), trader, direction);
        env.events().publish(topics, (amount_in, amount_out));
    }
}
