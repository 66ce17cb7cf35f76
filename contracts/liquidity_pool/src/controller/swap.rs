use kooja::{error::{ErrorCode, KoojaResult}, validate, validate_amount};
use soroban_sdk::{token, Address, Env};

use crate::{
    events::PoolEvents,
    math::swap_math::get_amount_out,
    storage::{get_config, get_pool, save_pool, SwapDirection},
};

/// Read-only quote on the current reserves
pub fn quote(env: &Env, direction: SwapDirection, amount_in: i128) -> KoojaResult<i128> {
    let (reserve_in, reserve_out) = get_pool(env).reserves(direction);
    get_amount_out(env, amount_in, reserve_in, reserve_out)
}

pub fn swap(
    env: &Env,
    sender: &Address,
    direction: SwapDirection,
    amount_in: i128,
    min_amount_out: i128,
) -> KoojaResult<i128> {
    validate_amount!(env, amount_in)?;
    validate!(
        env,
        min_amount_out >= 0,
        ErrorCode::NegativeAmount,
        "negative minimum output: {}",
        min_amount_out
    )?;

    let config = get_config(env);
    let mut pool = get_pool(env);
    let amount_out = pool.swap(env, direction, amount_in, min_amount_out)?;
    save_pool(env, &pool);

    let contract = env.current_contract_address();
    let base = token::Client::new(env, &config.base_token);
    let quote = token::Client::new(env, &config.quote_token);
    let token_out = match direction {
        SwapDirection::BaseToQuote => {
            base.transfer(sender, &contract, &amount_in);
            quote
        }
        SwapDirection::QuoteToBase => {
            quote.transfer_from(&contract, sender, &contract, &amount_in);
            base
        }
    };
    if amount_out > 0 {
        token_out.transfer(&contract, sender, &amount_out);
    }

    PoolEvents::swap(env, sender.clone(), direction, amount_in, amount_out);

    Ok(amount_out)
}
