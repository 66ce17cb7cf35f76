use kooja::{
    constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD},
    error::ErrorCode,
};
use soroban_sdk::{contracttype, log, panic_with_error, Address, Env, I256};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    RewardState,
    Admin,
    Initialized,
    Staker(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Token accepted as stake, normally the share token of a liquidity pool
    pub staking_token: Address,
    pub reward_token: Address,
    /// Length in seconds of every funding period
    pub duration: u64,
}

/// Global accrual state. `reward_per_token_stored` is scaled by `REWARD_PRECISION`
/// and never decreases. It is kept as an `I256` since a small stake alone in a
/// large stream drives it far past `i128::MAX`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardState {
    pub total_staked: i128,
    pub reward_per_token_stored: I256,
    pub last_update_time: u64,
    pub reward_rate: i128,
    pub period_finish: u64,
}

impl RewardState {
    pub fn new(env: &Env) -> Self {
        RewardState {
            total_staked: 0,
            reward_per_token_stored: I256::from_i32(env, 0),
            last_update_time: 0,
            reward_rate: 0,
            period_finish: 0,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakerInfo {
    pub balance: i128,
    /// Snapshot of `reward_per_token_stored` at the last checkpoint
    pub reward_per_token_paid: I256,
    /// Accrued and not yet claimed
    pub rewards: i128,
}

impl StakerInfo {
    pub fn new(env: &Env) -> Self {
        StakerInfo {
            balance: 0,
            reward_per_token_paid: I256::from_i32(env, 0),
            rewards: 0,
        }
    }
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .unwrap_or_else(|| {
            log!(env, "Staking Rewards: Config not set");
            panic_with_error!(env, ErrorCode::NotAuthorized)
        });
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    config
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().persistent().set(&DataKey::Config, config);
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_reward_state(env: &Env) -> RewardState {
    let key = DataKey::RewardState;
    match env.storage().persistent().get(&key) {
        Some(state) => {
            env.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
            state
        }
        None => RewardState::new(env),
    }
}

pub fn save_reward_state(env: &Env, state: &RewardState) {
    let key = DataKey::RewardState;
    env.storage().persistent().set(&key, state);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_staker(env: &Env, staker: &Address) -> StakerInfo {
    let key = DataKey::Staker(staker.clone());
    match env.storage().persistent().get(&key) {
        Some(info) => {
            env.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
            info
        }
        None => StakerInfo::new(env),
    }
}

pub fn save_staker(env: &Env, staker: &Address, info: &StakerInfo) {
    let key = DataKey::Staker(staker.clone());
    env.storage().persistent().set(&key, info);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub mod utils {
    use super::*;

    pub fn is_initialized(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Initialized)
            .unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().instance().set(&DataKey::Initialized, &true);
    }

    pub fn save_admin(env: &Env, admin: &Address) {
        env.storage().instance().set(&DataKey::Admin, admin);
    }

    pub fn get_admin(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .unwrap_or_else(|| {
                log!(env, "Staking Rewards: Admin not set");
                panic_with_error!(env, ErrorCode::NotAuthorized)
            })
    }
}
