use kooja::{
    constants::REWARD_PRECISION,
    error::{ErrorCode, KoojaResult},
    math::safe_math::SafeMath,
    validate,
};
use soroban_sdk::{Env, I256};

use crate::storage::{RewardState, StakerInfo};

pub fn last_time_reward_applicable(now: u64, period_finish: u64) -> u64 {
    now.min(period_finish)
}

/// Cumulative reward per staked unit as of `now`, scaled by `REWARD_PRECISION`.
/// Unchanged while nothing is staked.
pub fn reward_per_token(env: &Env, state: &RewardState, now: u64) -> KoojaResult<I256> {
    if state.total_staked == 0 {
        return Ok(state.reward_per_token_stored.clone());
    }
    validate!(env, state.reward_rate >= 0, ErrorCode::MathError)?;

    let elapsed = last_time_reward_applicable(now, state.period_finish)
        .saturating_sub(state.last_update_time);
    let accrued = I256::from_i128(env, elapsed as i128)
        .mul(&I256::from_i128(env, state.reward_rate))
        .mul(&I256::from_i128(env, REWARD_PRECISION))
        .div(&I256::from_i128(env, state.total_staked));

    Ok(state.reward_per_token_stored.add(&accrued))
}

/// Banked rewards plus what `staker.balance` earned since its last snapshot.
pub fn earned(env: &Env, staker: &StakerInfo, reward_per_token: &I256) -> KoojaResult<i128> {
    validate!(
        env,
        *reward_per_token >= staker.reward_per_token_paid,
        ErrorCode::MathError
    )?;

    let accrued = I256::from_i128(env, staker.balance)
        .mul(&reward_per_token.sub(&staker.reward_per_token_paid))
        .div(&I256::from_i128(env, REWARD_PRECISION))
        .to_i128();
    validate!(
        env,
        accrued.is_some(),
        ErrorCode::MathError,
        "accrual for a balance of {} exceeds i128",
        staker.balance
    )?;

    accrued
        .ok_or(ErrorCode::MathError)?
        .safe_add(staker.rewards, env)
}

/// Rate for a new funding of `amount` over `duration` seconds starting `now`.
/// Whatever is still undistributed from an active period is folded in.
pub fn next_reward_rate(
    env: &Env,
    state: &RewardState,
    amount: i128,
    duration: u64,
    now: u64,
) -> KoojaResult<i128> {
    validate!(env, duration > 0, ErrorCode::ZeroDuration)?;

    let total = if now >= state.period_finish {
        amount
    } else {
        let remaining = ((state.period_finish - now) as i128).safe_mul(state.reward_rate, env)?;
        amount.safe_add(remaining, env)?
    };
    let reward_rate = total.safe_div(duration as i128, env)?;
    validate!(
        env,
        reward_rate > 0,
        ErrorCode::RewardRateTooLow,
        "{} over {} seconds truncates to a zero rate",
        total,
        duration
    )?;

    Ok(reward_rate)
}
