use kooja::{
    error::{ErrorCode, KoojaResult},
    validate,
};
use soroban_sdk::{Address, Env};

use crate::storage::{AllowanceDataKey, AllowanceValue, ShareDataKey};

pub fn read_allowance(env: &Env, from: Address, spender: Address) -> AllowanceValue {
    let key = ShareDataKey::Allowance(AllowanceDataKey { from, spender });
    match env.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger < env.ledger().sequence() => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        Some(allowance) => allowance,
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn write_allowance(
    env: &Env,
    from: Address,
    spender: Address,
    amount: i128,
    expiration_ledger: u32,
) -> KoojaResult {
    let sequence = env.ledger().sequence();
    validate!(
        env,
        amount == 0 || expiration_ledger >= sequence,
        ErrorCode::InvalidExpirationLedger,
        "expiration ledger {} is before ledger {}",
        expiration_ledger,
        sequence
    )?;

    let key = ShareDataKey::Allowance(AllowanceDataKey { from, spender });
    env.storage().temporary().set(
        &key,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );

    if amount > 0 {
        let live_for = expiration_ledger - sequence;
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }

    Ok(())
}

pub fn spend_allowance(env: &Env, from: Address, spender: Address, amount: i128) -> KoojaResult {
    let allowance = read_allowance(env, from.clone(), spender.clone());
    validate!(
        env,
        allowance.amount >= amount,
        ErrorCode::InsufficientAllowance,
        "allowance {} below {}",
        allowance.amount,
        amount
    )?;

    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        )?;
    }

    Ok(())
}
