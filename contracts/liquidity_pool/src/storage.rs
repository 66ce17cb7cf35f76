use kooja::constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use soroban_sdk::{
    contracttype, log, panic_with_error, Address, ConversionError, Env, TryFromVal, Val,
};

use kooja::error::ErrorCode;

#[derive(Clone, Copy)]
#[repr(u32)]
pub enum DataKey {
    Pool = 0,
    Config = 1,
    Admin = 2,
    Initialized = 3,
}

impl TryFromVal<Env, DataKey> for Val {
    type Error = ConversionError;

    fn try_from_val(_env: &Env, v: &DataKey) -> Result<Self, Self::Error> {
        Ok((*v as u32).into())
    }
}

#[derive(Clone)]
#[contracttype]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

/// Keys of the share-token ledger
#[derive(Clone)]
#[contracttype]
pub enum ShareDataKey {
    Allowance(AllowanceDataKey),
    Balance(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Settlement asset, moved with a plain transfer authorised by the caller
    pub base_token: Address,
    /// Quote asset, pulled against an allowance granted to the pool
    pub quote_token: Address,
}

/// Reserves and outstanding shares. `base_reserve == 0` exactly when `total_shares == 0`.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Pool {
    pub base_reserve: i128,
    pub quote_reserve: i128,
    pub total_shares: i128,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwapDirection {
    BaseToQuote,
    QuoteToBase,
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .unwrap_or_else(|| {
            log!(env, "Liquidity Pool: Config not set");
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

pub fn get_pool(env: &Env) -> Pool {
    let pool = env
        .storage()
        .persistent()
        .get(&DataKey::Pool)
        .unwrap_or_default();
    if env.storage().persistent().has(&DataKey::Pool) {
        env.storage().persistent().extend_ttl(
            &DataKey::Pool,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    pool
}

pub fn save_pool(env: &Env, pool: &Pool) {
    env.storage().persistent().set(&DataKey::Pool, pool);
    env.storage().persistent().extend_ttl(
        &DataKey::Pool,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
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
                log!(env, "Liquidity Pool: Admin not set");
                panic_with_error!(env, ErrorCode::NotAuthorized)
            })
    }
}
