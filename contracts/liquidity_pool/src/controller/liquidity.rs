use kooja::{
    error::{ErrorCode, KoojaResult},
    validate, validate_amount,
};
use soroban_sdk::{token, Address, Env};
use soroban_token_sdk::TokenUtils;

use crate::{
    events::PoolEvents,
    math::liquidity_math::LiquidityWithdrawal,
    share_token::balance::{read_balance, receive_balance, spend_balance},
    storage::{get_config, get_pool, save_pool},
};

/// Deposits `base_amount` and the quote it requires, minting shares to `sender`.
pub fn add_liquidity(
    env: &Env,
    sender: &Address,
    quote_amount: i128,
    base_amount: i128,
) -> KoojaResult<i128> {
    validate_amount!(env, base_amount)?;
    validate!(
        env,
        quote_amount >= 0,
        ErrorCode::NegativeAmount,
        "negative quote amount: {}",
        quote_amount
    )?;

    let config = get_config(env);
    let mut pool = get_pool(env);
    let deposit = pool.deposit(env, base_amount, quote_amount)?;

    save_pool(env, &pool);
    receive_balance(env, sender.clone(), deposit.shares)?;

    let contract = env.current_contract_address();
    token::Client::new(env, &config.base_token).transfer(sender, &contract, &base_amount);
    token::Client::new(env, &config.quote_token).transfer_from(
        &contract,
        sender,
        &contract,
        &deposit.quote_amount,
    );

    TokenUtils::new(env)
        .events()
        .mint(contract, sender.clone(), deposit.shares);
    PoolEvents::add_liquidity(env, sender.clone(), base_amount, deposit.quote_amount);

    Ok(deposit.shares)
}

/// Burns `share_amount` of the sender's shares and pays out both reserves pro rata.
pub fn remove_liquidity(
    env: &Env,
    sender: &Address,
    share_amount: i128,
) -> KoojaResult<LiquidityWithdrawal> {
    validate_amount!(env, share_amount)?;

    let config = get_config(env);
    let mut pool = get_pool(env);
    validate!(env, !pool.is_empty(), ErrorCode::EmptyReserves)?;

    let balance = read_balance(env, sender.clone());
    validate!(
        env,
        balance >= share_amount,
        ErrorCode::InsufficientBalance,
        "holds {} shares, burning {}",
        balance,
        share_amount
    )?;

    let withdrawal = pool.withdraw(env, share_amount)?;
    spend_balance(env, sender.clone(), share_amount)?;
    save_pool(env, &pool);

    let contract = env.current_contract_address();
    if withdrawal.base_amount > 0 {
        token::Client::new(env, &config.base_token).transfer(
            &contract,
            sender,
            &withdrawal.base_amount,
        );
    }
    if withdrawal.quote_amount > 0 {
        token::Client::new(env, &config.quote_token).transfer(
            &contract,
            sender,
            &withdrawal.quote_amount,
        );
    }

    TokenUtils::new(env).events().burn(sender.clone(), share_amount);
    PoolEvents::remove_liquidity(
        env,
        sender.clone(),
        withdrawal.base_amount,
        withdrawal.quote_amount,
    );

    Ok(withdrawal)
}
