use kooja::{
    constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    error::{ErrorCode, KoojaResult},
    math::safe_math::SafeMath,
    validate, validate_amount,
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error,
    token::{self, TokenInterface as _},
    Address, BytesN, Env, String,
};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

use crate::{
    controller,
    liquidity_pool::LiquidityPoolTrait,
    share_token::{
        allowance::{read_allowance, spend_allowance, write_allowance},
        balance::{read_balance, receive_balance, spend_balance},
    },
    storage::{
        get_config, get_pool, save_config, save_pool,
        utils::{get_admin, is_initialized, save_admin, set_initialized},
        Config, Pool, SwapDirection,
    },
};

contractmeta!(
    key = "Description",
    val = "Constant-product pool of a base and a quote asset issuing pool shares"
);

const VERSION: u32 = 1;

#[contract]
pub struct LiquidityPool;

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// Token interface methods cannot return errors
fn or_panic<T>(env: &Env, result: KoojaResult<T>) -> T {
    result.unwrap_or_else(|error| panic_with_error!(env, error))
}

#[contractimpl]
impl LiquidityPoolTrait for LiquidityPool {
    fn initialize(
        env: Env,
        admin: Address,
        base_token: Address,
        quote_token: Address,
        share_decimals: u32,
        share_name: String,
        share_symbol: String,
    ) {
        if is_initialized(&env) {
            log!(
                &env,
                "Liquidity Pool: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }
        if share_decimals > 18 {
            panic!("Decimal must not be greater than 18");
        }

        set_initialized(&env);
        save_admin(&env, &admin);
        save_config(
            &env,
            &Config {
                base_token,
                quote_token,
            },
        );
        save_pool(&env, &Pool::default());

        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata {
            decimal: share_decimals,
            name: share_name,
            symbol: share_symbol,
        });
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin = get_admin(&env);
        admin.require_auth();
        bump_instance(&env);

        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }

    fn add_liquidity(
        env: Env,
        sender: Address,
        quote_amount: i128,
        base_amount: i128,
    ) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::liquidity::add_liquidity(&env, &sender, quote_amount, base_amount)
    }

    fn remove_liquidity(
        env: Env,
        sender: Address,
        share_amount: i128,
    ) -> Result<(i128, i128), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let withdrawal = controller::liquidity::remove_liquidity(&env, &sender, share_amount)?;
        Ok((withdrawal.base_amount, withdrawal.quote_amount))
    }

    fn swap_base_for_quote(
        env: Env,
        sender: Address,
        base_amount: i128,
        min_quote_out: i128,
    ) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::swap::swap(
            &env,
            &sender,
            SwapDirection::BaseToQuote,
            base_amount,
            min_quote_out,
        )
    }

    fn swap_quote_for_base(
        env: Env,
        sender: Address,
        quote_amount: i128,
        min_base_out: i128,
    ) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::swap::swap(
            &env,
            &sender,
            SwapDirection::QuoteToBase,
            quote_amount,
            min_base_out,
        )
    }

    fn get_token_amount(env: Env, base_amount: i128) -> Result<i128, ErrorCode> {
        controller::swap::quote(&env, SwapDirection::BaseToQuote, base_amount)
    }

    fn get_base_amount(env: Env, quote_amount: i128) -> Result<i128, ErrorCode> {
        controller::swap::quote(&env, SwapDirection::QuoteToBase, quote_amount)
    }

    fn get_reserve(env: Env) -> i128 {
        get_pool(&env).quote_reserve
    }

    fn query_pool(env: Env) -> Pool {
        get_pool(&env)
    }

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }

    fn query_admin(env: Env) -> Address {
        get_admin(&env)
    }

    fn version(_env: Env) -> u32 {
        VERSION
    }
}

/// Burning shares outside `remove_liquidity` donates their claim to the
/// remaining holders, so the last outstanding shares cannot be burned this way.
fn burn_shares(env: &Env, from: Address, amount: i128) -> KoojaResult {
    let mut pool = get_pool(env);
    validate!(
        env,
        amount < pool.total_shares,
        ErrorCode::InsufficientBalance,
        "burning {} of {} outstanding shares",
        amount,
        pool.total_shares
    )?;

    spend_balance(env, from, amount)?;
    pool.total_shares = pool.total_shares.safe_sub(amount, env)?;
    save_pool(env, &pool);

    Ok(())
}

#[contractimpl]
impl token::TokenInterface for LiquidityPool {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        bump_instance(&env);
        read_allowance(&env, from, spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        or_panic(
            &env,
            validate!(
                &env,
                amount >= 0,
                ErrorCode::NegativeAmount,
                "negative amount is not allowed: {}",
                amount
            ),
        );
        bump_instance(&env);

        or_panic(
            &env,
            write_allowance(&env, from.clone(), spender.clone(), amount, expiration_ledger),
        );
        TokenUtils::new(&env)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> i128 {
        bump_instance(&env);
        read_balance(&env, id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        or_panic(&env, validate_amount!(&env, amount));
        bump_instance(&env);

        or_panic(&env, spend_balance(&env, from.clone(), amount));
        or_panic(&env, receive_balance(&env, to.clone(), amount));
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        or_panic(&env, validate_amount!(&env, amount));
        bump_instance(&env);

        or_panic(&env, spend_allowance(&env, from.clone(), spender, amount));
        or_panic(&env, spend_balance(&env, from.clone(), amount));
        or_panic(&env, receive_balance(&env, to.clone(), amount));
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();
        or_panic(&env, validate_amount!(&env, amount));
        bump_instance(&env);

        or_panic(&env, burn_shares(&env, from.clone(), amount));
        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        or_panic(&env, validate_amount!(&env, amount));
        bump_instance(&env);

        or_panic(&env, spend_allowance(&env, from.clone(), spender, amount));
        or_panic(&env, burn_shares(&env, from.clone(), amount));
        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn decimals(env: Env) -> u32 {
        TokenUtils::new(&env).metadata().get_metadata().decimal
    }

    fn name(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().name
    }

    fn symbol(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().symbol
    }
}
