use kooja::{error::KoojaResult, math::safe_math::SafeMath, validate_amount};
use soroban_sdk::{token, Address, Env};

use crate::{
    events::StakingRewardsEvents,
    math::rewards::{earned, last_time_reward_applicable, next_reward_rate, reward_per_token},
    storage::{get_config, get_reward_state, save_reward_state, RewardState, StakerInfo},
};

/// Folds accrual up to `now` into `state`, and into `staker` when given.
/// Must run before any change to balances or to the reward rate.
pub fn checkpoint(
    env: &Env,
    state: &mut RewardState,
    staker: Option<&mut StakerInfo>,
    now: u64,
) -> KoojaResult {
    state.reward_per_token_stored = reward_per_token(env, state, now)?;
    state.last_update_time = last_time_reward_applicable(now, state.period_finish);

    if let Some(staker) = staker {
        staker.rewards = earned(env, staker, &state.reward_per_token_stored)?;
        staker.reward_per_token_paid = state.reward_per_token_stored.clone();
    }

    Ok(())
}

/// Pulls `amount` of the reward token from `sender` and restarts the
/// distribution period at the new rate.
pub fn deposit_reward_tokens(env: &Env, sender: &Address, amount: i128) -> KoojaResult<i128> {
    validate_amount!(env, amount)?;

    let config = get_config(env);
    let now = env.ledger().timestamp();
    let mut state = get_reward_state(env);

    checkpoint(env, &mut state, None, now)?;
    state.reward_rate = next_reward_rate(env, &state, amount, config.duration, now)?;
    state.last_update_time = now;
    state.period_finish = now.safe_add(config.duration, env)?;
    save_reward_state(env, &state);

    token::Client::new(env, &config.reward_token).transfer(
        sender,
        &env.current_contract_address(),
        &amount,
    );

    StakingRewardsEvents::reward_added(env, amount, state.reward_rate, state.period_finish);

    Ok(state.reward_rate)
}
