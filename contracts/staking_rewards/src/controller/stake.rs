use kooja::{
    error::{ErrorCode, KoojaResult},
    safe_decrement, safe_increment, validate, validate_amount,
};
use soroban_sdk::{log, token, Address, Env};

use crate::{
    controller::rewards::checkpoint,
    events::StakingRewardsEvents,
    storage::{get_config, get_reward_state, get_staker, save_reward_state, save_staker},
};

pub fn stake(env: &Env, sender: &Address, amount: i128) -> KoojaResult {
    validate_amount!(env, amount)?;

    let config = get_config(env);
    let mut state = get_reward_state(env);
    let mut staker = get_staker(env, sender);
    checkpoint(env, &mut state, Some(&mut staker), env.ledger().timestamp())?;

    safe_increment!(env, staker.balance, amount);
    safe_increment!(env, state.total_staked, amount);
    save_staker(env, sender, &staker);
    save_reward_state(env, &state);

    token::Client::new(env, &config.staking_token).transfer(
        sender,
        &env.current_contract_address(),
        &amount,
    );

    StakingRewardsEvents::staked(env, sender.clone(), amount);

    Ok(())
}

pub fn withdraw(env: &Env, sender: &Address, amount: i128) -> KoojaResult {
    validate_amount!(env, amount)?;

    let config = get_config(env);
    let mut state = get_reward_state(env);
    let mut staker = get_staker(env, sender);
    checkpoint(env, &mut state, Some(&mut staker), env.ledger().timestamp())?;

    validate!(
        env,
        staker.balance >= amount,
        ErrorCode::InsufficientBalance,
        "staked {} withdrawing {}",
        staker.balance,
        amount
    )?;
    safe_decrement!(env, staker.balance, amount);
    safe_decrement!(env, state.total_staked, amount);
    save_staker(env, sender, &staker);
    save_reward_state(env, &state);

    token::Client::new(env, &config.staking_token).transfer(
        &env.current_contract_address(),
        sender,
        &amount,
    );

    StakingRewardsEvents::withdrawn(env, sender.clone(), amount);

    Ok(())
}

/// Pays out everything accrued to `sender`. Paying nothing is not an error.
pub fn get_reward(env: &Env, sender: &Address) -> KoojaResult<i128> {
    let config = get_config(env);
    let mut state = get_reward_state(env);
    let mut staker = get_staker(env, sender);
    checkpoint(env, &mut state, Some(&mut staker), env.ledger().timestamp())?;

    let reward = staker.rewards;
    staker.rewards = 0;
    save_staker(env, sender, &staker);
    save_reward_state(env, &state);

    if reward > 0 {
        token::Client::new(env, &config.reward_token).transfer(
            &env.current_contract_address(),
            sender,
            &reward,
        );
        StakingRewardsEvents::reward_paid(env, sender.clone(), reward);
    }

    Ok(reward)
}

/// Withdraws the whole stake, then claims.
pub fn exit(env: &Env, sender: &Address) -> KoojaResult<i128> {
    let balance = get_staker(env, sender).balance;
    if balance > 0 {
        withdraw(env, sender, balance)?;
    }

    get_reward(env, sender)
}

/// Returns the whole stake without paying rewards. Accrual is folded in when
/// it can be computed, otherwise the staker keeps only what was already
/// banked. Never fails on reward math.
pub fn emergency_withdraw(env: &Env, sender: &Address) -> KoojaResult<i128> {
    let config = get_config(env);
    let mut state = get_reward_state(env);
    let mut staker = get_staker(env, sender);
    let amount = staker.balance;
    validate!(
        env,
        amount > 0,
        ErrorCode::InsufficientBalance,
        "nothing staked by {}",
        sender.clone()
    )?;

    let mut settled_state = state.clone();
    let mut settled_staker = staker.clone();
    match checkpoint(
        env,
        &mut settled_state,
        Some(&mut settled_staker),
        env.ledger().timestamp(),
    ) {
        Ok(()) => {
            state = settled_state;
            staker = settled_staker;
        }
        Err(error_code) => log!(
            env,
            "Staking Rewards: accrual skipped on emergency withdraw, error {}",
            error_code as u32
        ),
    }

    staker.balance = 0;
    safe_decrement!(env, state.total_staked, amount);
    save_staker(env, sender, &staker);
    save_reward_state(env, &state);

    token::Client::new(env, &config.staking_token).transfer(
        &env.current_contract_address(),
        sender,
        &amount,
    );

    StakingRewardsEvents::withdrawn(env, sender.clone(), amount);

    Ok(amount)
}
