extern crate std;

use kooja::error::ErrorCode;
use pretty_assertions::assert_eq;
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation, Events},
    Address, IntoVal, Symbol, Val, Vec,
};

use super::setup::{PoolTest, UNIT};
use crate::storage::Pool;

#[test]
fn first_deposit_sets_reserves_and_mints_base_amount() {
    let test = PoolTest::setup();
    let provider = test.funded_user(1_000 * UNIT, 2_000 * UNIT);

    let shares = test
        .pool
        .add_liquidity(&provider, &(2_000 * UNIT), &(1_000 * UNIT));

    assert_eq!(
        test.env.auths(),
        std::vec![(
            provider.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    test.pool.address.clone(),
                    Symbol::new(&test.env, "add_liquidity"),
                    (&provider, 2_000 * UNIT, 1_000 * UNIT).into_val(&test.env),
                )),
                sub_invocations: std::vec![AuthorizedInvocation {
                    function: AuthorizedFunction::Contract((
                        test.base.address.clone(),
                        symbol_short!("transfer"),
                        (&provider, &test.pool.address, 1_000 * UNIT).into_val(&test.env),
                    )),
                    sub_invocations: std::vec![],
                }],
            },
        )]
    );

    assert_eq!(shares, 1_000 * UNIT);
    assert_eq!(test.pool.balance(&provider), 1_000 * UNIT);
    assert_eq!(test.pool.get_reserve(), 2_000 * UNIT);
    assert_eq!(test.base.balance(&test.pool.address), 1_000 * UNIT);
    assert_eq!(test.quote.balance(&test.pool.address), 2_000 * UNIT);
    assert_eq!(
        test.pool.query_pool(),
        Pool {
            base_reserve: 1_000 * UNIT,
            quote_reserve: 2_000 * UNIT,
            total_shares: 1_000 * UNIT,
        }
    );
}

#[test]
fn add_liquidity_emits_event() {
    let (test, provider) = PoolTest::seeded();

    let (contract, topics, data) = test.env.events().all().last().unwrap();
    assert_eq!(contract, test.pool.address);

    let expected: Vec<Val> =
        (Symbol::new(&test.env, "add_liquidity"), provider).into_val(&test.env);
    assert_eq!(topics, expected);
    let amounts: (i128, i128) = data.into_val(&test.env);
    assert_eq!(amounts, (1_000 * UNIT, 2_000 * UNIT));
}

#[test]
fn second_deposit_pulls_only_the_required_quote() {
    let (test, _) = PoolTest::seeded();
    let provider = test.funded_user(10 * UNIT, 50 * UNIT);

    let shares = test
        .pool
        .add_liquidity(&provider, &(50 * UNIT), &(10 * UNIT));

    assert_eq!(shares, 10 * UNIT);
    assert_eq!(test.quote.balance(&provider), 30 * UNIT);
    assert_eq!(test.base.balance(&provider), 0);
    assert_eq!(test.pool.get_reserve(), 2_020 * UNIT);
    assert_eq!(test.pool.query_pool().total_shares, 1_010 * UNIT);
}

#[test]
fn deposit_below_reserve_ratio_fails() {
    let (test, _) = PoolTest::seeded();
    let provider = test.funded_user(10 * UNIT, 50 * UNIT);

    assert_eq!(
        test.pool
            .try_add_liquidity(&provider, &(20 * UNIT - 1), &(10 * UNIT)),
        Err(Ok(ErrorCode::InsufficientQuoteAmount))
    );
    assert_eq!(test.base.balance(&provider), 10 * UNIT);
    assert_eq!(test.quote.balance(&provider), 50 * UNIT);
    assert_eq!(test.pool.balance(&provider), 0);
}

#[test]
fn zero_base_deposit_fails() {
    let test = PoolTest::setup();
    let provider = test.funded_user(UNIT, UNIT);

    assert_eq!(
        test.pool.try_add_liquidity(&provider, &UNIT, &0),
        Err(Ok(ErrorCode::ZeroAmount))
    );
    assert_eq!(
        test.pool.try_add_liquidity(&provider, &-1, &UNIT),
        Err(Ok(ErrorCode::NegativeAmount))
    );
    assert_eq!(test.pool.query_pool(), Pool::default());
}

#[test]
fn removing_all_shares_empties_the_pool() {
    let (test, provider) = PoolTest::seeded();

    let (base_out, quote_out) = test.pool.remove_liquidity(&provider, &(1_000 * UNIT));

    let (_, topics, data) = test.env.events().all().last().unwrap();
    let expected: Vec<Val> =
        (Symbol::new(&test.env, "remove_liquidity"), provider.clone()).into_val(&test.env);
    assert_eq!(topics, expected);
    let amounts: (i128, i128) = data.into_val(&test.env);
    assert_eq!(amounts, (1_000 * UNIT, 2_000 * UNIT));

    assert_eq!((base_out, quote_out), (1_000 * UNIT, 2_000 * UNIT));
    assert_eq!(test.pool.query_pool(), Pool::default());
    assert_eq!(test.pool.balance(&provider), 0);
    assert_eq!(test.base.balance(&provider), 1_000 * UNIT);
    assert_eq!(test.quote.balance(&provider), 2_000 * UNIT);
    assert_eq!(test.base.balance(&test.pool.address), 0);
    assert_eq!(test.quote.balance(&test.pool.address), 0);
}

#[test]
fn partial_removal_is_proportional() {
    let (test, provider) = PoolTest::seeded();
    let other = test.funded_user(500 * UNIT, 1_000 * UNIT);
    test.pool
        .add_liquidity(&other, &(1_000 * UNIT), &(500 * UNIT));

    let (base_out, quote_out) = test.pool.remove_liquidity(&provider, &(250 * UNIT));

    assert_eq!((base_out, quote_out), (250 * UNIT, 500 * UNIT));
    assert_eq!(test.pool.balance(&provider), 750 * UNIT);
    assert_eq!(
        test.pool.query_pool(),
        Pool {
            base_reserve: 1_250 * UNIT,
            quote_reserve: 2_500 * UNIT,
            total_shares: 1_250 * UNIT,
        }
    );
}

#[test]
fn add_and_remove_keep_the_product_flat() {
    let test = PoolTest::setup();
    let first = test.funded_user(300, 700);
    let second = test.funded_user(90, 500);
    test.pool.add_liquidity(&first, &700, &300);

    let product = |pool: Pool| pool.base_reserve * pool.quote_reserve;
    let product_before = product(test.pool.query_pool());

    // 700 * 90 / 300 = 210 quote, 90 shares
    test.pool.add_liquidity(&second, &500, &90);
    assert_eq!(test.quote.balance(&second), 290);
    let pool = test.pool.query_pool();
    assert_eq!(pool.base_reserve * 700, pool.quote_reserve * 300);

    test.pool.remove_liquidity(&second, &90);
    assert_eq!(product(test.pool.query_pool()), product_before);
    assert_eq!(test.base.balance(&second), 90);
    assert_eq!(test.quote.balance(&second), 500);
}

#[test]
fn round_trip_never_returns_more_than_deposited() {
    let test = PoolTest::setup();
    let first = test.funded_user(3, 7);
    test.pool.add_liquidity(&first, &7, &3);

    let second = test.funded_user(10, 100);
    let shares = test.pool.add_liquidity(&second, &100, &10);
    // 7 * 10 / 3 = 23 quote pulled, 3 * 10 / 3 = 10 shares
    assert_eq!(shares, 10);
    assert_eq!(test.quote.balance(&second), 77);

    let (base_out, quote_out) = test.pool.remove_liquidity(&second, &shares);
    assert!(base_out <= 10);
    assert!(quote_out <= 23);
}

#[test]
fn removing_more_than_held_fails() {
    let (test, provider) = PoolTest::seeded();
    let stranger = Address::generate(&test.env);

    assert_eq!(
        test.pool.try_remove_liquidity(&provider, &(1_000 * UNIT + 1)),
        Err(Ok(ErrorCode::InsufficientBalance))
    );
    assert_eq!(
        test.pool.try_remove_liquidity(&stranger, &1),
        Err(Ok(ErrorCode::InsufficientBalance))
    );
    assert_eq!(
        test.pool.try_remove_liquidity(&provider, &0),
        Err(Ok(ErrorCode::ZeroAmount))
    );
}

#[test]
fn removing_from_empty_pool_fails() {
    let test = PoolTest::setup();
    let provider = Address::generate(&test.env);

    assert_eq!(
        test.pool.try_remove_liquidity(&provider, &1),
        Err(Ok(ErrorCode::EmptyReserves))
    );
}
