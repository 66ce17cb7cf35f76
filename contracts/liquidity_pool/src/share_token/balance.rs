use kooja::{
    constants::{BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD},
    error::{ErrorCode, KoojaResult},
    math::safe_math::SafeMath,
    validate,
};
use soroban_sdk::{Address, Env};

use crate::storage::ShareDataKey;

pub fn read_balance(env: &Env, addr: Address) -> i128 {
    let key = ShareDataKey::Balance(addr);
    if let Some(balance) = env.storage().persistent().get::<_, i128>(&key) {
        env.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        balance
    } else {
        0
    }
}

fn write_balance(env: &Env, addr: Address, amount: i128) {
    let key = ShareDataKey::Balance(addr);
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn receive_balance(env: &Env, addr: Address, amount: i128) -> KoojaResult {
    let balance = read_balance(env, addr.clone());
    write_balance(env, addr, balance.safe_add(amount, env)?);
    Ok(())
}

pub fn spend_balance(env: &Env, addr: Address, amount: i128) -> KoojaResult {
    let balance = read_balance(env, addr.clone());
    validate!(
        env,
        balance >= amount,
        ErrorCode::InsufficientBalance,
        "share balance {} below {}",
        balance,
        amount
    )?;
    write_balance(env, addr, balance - amount);
    Ok(())
}
