use kooja::error::ErrorCode;
use soroban_sdk::{Address, BytesN, Env, I256};

use crate::storage::{Config, RewardState, StakerInfo};

pub trait StakingRewardsTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn initialize(
        env: Env,
        admin: Address,
        staking_token: Address,
        reward_token: Address,
        duration: u64,
    );

    /// Funds a new distribution period of `duration` seconds starting now.
    /// Returns the resulting reward rate.
    fn deposit_reward_tokens(env: Env, sender: Address, amount: i128) -> Result<i128, ErrorCode>;

    /// Changes the period length used by the next funding. Only allowed once
    /// the current period has finished.
    fn set_rewards_duration(env: Env, sender: Address, duration: u64) -> Result<(), ErrorCode>;

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);

    // ################################################################
    //                             USER
    // ################################################################

    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode>;

    fn withdraw(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode>;

    fn get_reward(env: Env, sender: Address) -> Result<i128, ErrorCode>;

    fn exit(env: Env, sender: Address) -> Result<i128, ErrorCode>;

    /// Returns the caller's whole stake even when reward accrual cannot be
    /// computed. Banked rewards stay claimable. Returns the amount withdrawn.
    fn emergency_withdraw(env: Env, sender: Address) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn last_time_reward_applicable(env: Env) -> u64;

    fn reward_per_token(env: Env) -> Result<I256, ErrorCode>;

    fn earned(env: Env, account: Address) -> Result<i128, ErrorCode>;

    fn get_reward_for_duration(env: Env) -> Result<i128, ErrorCode>;

    fn total_staked(env: Env) -> i128;

    fn query_staked(env: Env, account: Address) -> StakerInfo;

    fn query_reward_state(env: Env) -> RewardState;

    fn query_config(env: Env) -> Config;

    fn staking_token(env: Env) -> Address;

    fn rewards_token(env: Env) -> Address;

    fn query_admin(env: Env) -> Address;
}
