use kooja::error::ErrorCode;
use soroban_sdk::{Address, BytesN, Env, String};

use crate::storage::{Config, Pool};

/// Entry points of the pool logic. Storage keys are fixed, so any revision
/// implementing this interface can run against state written by an earlier one.
pub trait LiquidityPoolTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn initialize(
        env: Env,
        admin: Address,
        base_token: Address,
        quote_token: Address,
        share_decimals: u32,
        share_name: String,
        share_symbol: String,
    );

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);

    // ################################################################
    //                             USER
    // ################################################################

    /// Deposits `base_amount` of the base asset and up to `quote_amount` of the
    /// quote asset. Only the quote the reserve ratio requires is pulled.
    /// Returns the number of shares minted.
    fn add_liquidity(
        env: Env,
        sender: Address,
        quote_amount: i128,
        base_amount: i128,
    ) -> Result<i128, ErrorCode>;

    /// Burns shares and returns `(base_amount, quote_amount)` paid out.
    fn remove_liquidity(
        env: Env,
        sender: Address,
        share_amount: i128,
    ) -> Result<(i128, i128), ErrorCode>;

    fn swap_base_for_quote(
        env: Env,
        sender: Address,
        base_amount: i128,
        min_quote_out: i128,
    ) -> Result<i128, ErrorCode>;

    fn swap_quote_for_base(
        env: Env,
        sender: Address,
        quote_amount: i128,
        min_base_out: i128,
    ) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    /// Quote asset paid for `base_amount` at the current reserves.
    fn get_token_amount(env: Env, base_amount: i128) -> Result<i128, ErrorCode>;

    /// Base asset paid for `quote_amount` at the current reserves.
    fn get_base_amount(env: Env, quote_amount: i128) -> Result<i128, ErrorCode>;

    fn get_reserve(env: Env) -> i128;

    fn query_pool(env: Env) -> Pool;

    fn query_config(env: Env) -> Config;

    fn query_admin(env: Env) -> Address;

    fn version(env: Env) -> u32;
}
