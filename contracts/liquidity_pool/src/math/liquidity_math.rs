use kooja::{
    error::{ErrorCode, KoojaResult},
    math::mul_div::MulDivFloor,
    validate,
};
use soroban_sdk::Env;

use crate::storage::Pool;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LiquidityDeposit {
    /// Shares minted to the provider
    pub shares: i128,
    /// Quote amount actually pulled, never above what was offered
    pub quote_amount: i128,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LiquidityWithdrawal {
    pub base_amount: i128,
    pub quote_amount: i128,
}

/// Sizes a deposit of `base_amount` against the current reserves.
///
/// The first deposit adopts both amounts as the initial reserves and mints shares
/// 1:1 with the base amount. Later deposits pull quote in the reserve ratio and
/// mint shares in proportion to the base amount, both rounded down.
pub fn calculate_deposit(
    env: &Env,
    pool: &Pool,
    base_amount: i128,
    quote_offered: i128,
) -> KoojaResult<LiquidityDeposit> {
    if pool.total_shares == 0 {
        validate!(
            env,
            quote_offered > 0,
            ErrorCode::ZeroAmount,
            "first deposit must fund the quote reserve"
        )?;
        return Ok(LiquidityDeposit {
            shares: base_amount,
            quote_amount: quote_offered,
        });
    }

    let quote_required = pool
        .quote_reserve
        .mul_div_floor(env, base_amount, pool.base_reserve)?;
    validate!(
        env,
        quote_offered >= quote_required,
        ErrorCode::InsufficientQuoteAmount,
        "offered {} quote, required {}",
        quote_offered,
        quote_required
    )?;

    let shares = pool
        .total_shares
        .mul_div_floor(env, base_amount, pool.base_reserve)?;
    validate!(
        env,
        shares > 0,
        ErrorCode::ZeroAmount,
        "deposit of {} base mints no shares",
        base_amount
    )?;

    Ok(LiquidityDeposit {
        shares,
        quote_amount: quote_required,
    })
}

/// Proportional, rounded-down slice of both reserves for `shares`.
pub fn calculate_withdrawal(
    env: &Env,
    pool: &Pool,
    shares: i128,
) -> KoojaResult<LiquidityWithdrawal> {
    validate!(env, pool.total_shares > 0, ErrorCode::EmptyReserves)?;
    validate!(
        env,
        shares <= pool.total_shares,
        ErrorCode::InsufficientBalance,
        "burning {} of {} shares",
        shares,
        pool.total_shares
    )?;

    Ok(LiquidityWithdrawal {
        base_amount: pool
            .base_reserve
            .mul_div_floor(env, shares, pool.total_shares)?,
        quote_amount: pool
            .quote_reserve
            .mul_div_floor(env, shares, pool.total_shares)?,
    })
}
