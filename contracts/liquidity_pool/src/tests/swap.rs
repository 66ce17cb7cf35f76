use kooja::error::ErrorCode;
use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Events, IntoVal, Symbol, Val, Vec};

use super::setup::{PoolTest, UNIT};
use crate::storage::{Pool, SwapDirection};

#[test]
fn quotes_match_the_fee_adjusted_curve() {
    let (test, _) = PoolTest::seeded();

    assert_eq!(test.pool.get_token_amount(&UNIT), 1_978_041_738_678_708_079);
    assert_eq!(test.pool.get_base_amount(&(2 * UNIT)), 989_020_869_339_354_039);
}

#[test]
fn quoting_an_empty_pool_fails() {
    let test = PoolTest::setup();

    assert_eq!(
        test.pool.try_get_token_amount(&UNIT),
        Err(Ok(ErrorCode::EmptyReserves))
    );
    assert_eq!(
        test.pool.try_get_base_amount(&UNIT),
        Err(Ok(ErrorCode::EmptyReserves))
    );
}

#[test]
fn quoting_zero_fails() {
    let (test, _) = PoolTest::seeded();

    assert_eq!(
        test.pool.try_get_token_amount(&0),
        Err(Ok(ErrorCode::ZeroAmount))
    );
}

#[test]
fn swap_base_for_quote_pays_the_quoted_amount() {
    let (test, _) = PoolTest::seeded();
    let trader = test.funded_user(UNIT, 0);
    let quoted = test.pool.get_token_amount(&UNIT);

    let paid = test.pool.swap_base_for_quote(&trader, &UNIT, &quoted);

    let (_, topics, data) = test.env.events().all().last().unwrap();
    let expected: Vec<Val> = (
        Symbol::new(&test.env, "swap"),
        trader.clone(),
        SwapDirection::BaseToQuote,
    )
        .into_val(&test.env);
    assert_eq!(topics, expected);
    let amounts: (i128, i128) = data.into_val(&test.env);
    assert_eq!(amounts, (UNIT, quoted));

    assert_eq!(paid, quoted);
    assert_eq!(test.base.balance(&trader), 0);
    assert_eq!(test.quote.balance(&trader), quoted);
    assert_eq!(
        test.pool.query_pool(),
        Pool {
            base_reserve: 1_001 * UNIT,
            quote_reserve: 2_000 * UNIT - quoted,
            total_shares: 1_000 * UNIT,
        }
    );
}

#[test]
fn swap_quote_for_base_pulls_against_allowance() {
    let (test, _) = PoolTest::seeded();
    let trader = test.funded_user(0, 2 * UNIT);

    let paid = test.pool.swap_quote_for_base(&trader, &(2 * UNIT), &0);

    assert_eq!(paid, 989_020_869_339_354_039);
    assert_eq!(test.base.balance(&trader), paid);
    assert_eq!(test.quote.balance(&trader), 0);
    assert_eq!(test.quote.allowance(&trader, &test.pool.address), 0);
    assert_eq!(test.pool.get_reserve(), 2_002 * UNIT);
}

#[test]
fn swaps_never_shrink_the_product() {
    let test = PoolTest::setup();
    let provider = test.funded_user(1_000_000, 3_000_000);
    test.pool
        .add_liquidity(&provider, &3_000_000, &1_000_000);
    let trader = test.funded_user(500_000, 2_000_000);

    let product = |pool: Pool| pool.base_reserve * pool.quote_reserve;
    let mut last = product(test.pool.query_pool());

    for amount in [1, 10, 999, 25_000, 400_000] {
        test.pool.swap_base_for_quote(&trader, &amount, &0);
        let current = product(test.pool.query_pool());
        assert!(current >= last);
        last = current;
    }
    for amount in [3, 77, 10_000, 1_500_000] {
        test.pool.swap_quote_for_base(&trader, &amount, &0);
        let current = product(test.pool.query_pool());
        assert!(current >= last);
        last = current;
    }
}

#[test]
fn swap_below_minimum_fails_without_moving_funds() {
    let (test, _) = PoolTest::seeded();
    let trader = test.funded_user(UNIT, 0);
    let quoted = test.pool.get_token_amount(&UNIT);

    assert_eq!(
        test.pool
            .try_swap_base_for_quote(&trader, &UNIT, &(quoted + 1)),
        Err(Ok(ErrorCode::SlippageExceeded))
    );
    assert_eq!(test.base.balance(&trader), UNIT);
    assert_eq!(test.pool.get_reserve(), 2_000 * UNIT);
}

#[test]
fn swap_rejects_bad_amounts() {
    let (test, _) = PoolTest::seeded();
    let trader = test.funded_user(UNIT, UNIT);

    assert_eq!(
        test.pool.try_swap_base_for_quote(&trader, &0, &0),
        Err(Ok(ErrorCode::ZeroAmount))
    );
    assert_eq!(
        test.pool.try_swap_quote_for_base(&trader, &UNIT, &-1),
        Err(Ok(ErrorCode::NegativeAmount))
    );
}

#[test]
fn swap_against_empty_pool_fails() {
    let test = PoolTest::setup();
    let trader = test.funded_user(UNIT, UNIT);

    assert_eq!(
        test.pool.try_swap_base_for_quote(&trader, &UNIT, &0),
        Err(Ok(ErrorCode::EmptyReserves))
    );
}

#[test]
fn fees_grow_the_value_of_shares() {
    let (test, provider) = PoolTest::seeded();
    let trader = test.funded_user(100 * UNIT, 0);

    let quote_paid = test.pool.swap_base_for_quote(&trader, &(100 * UNIT), &0);
    test.quote
        .approve(&trader, &test.pool.address, &quote_paid, &1_000);
    let base_back = test.pool.swap_quote_for_base(&trader, &quote_paid, &0);
    assert!(base_back < 100 * UNIT);

    let (base_out, quote_out) = test.pool.remove_liquidity(&provider, &(1_000 * UNIT));
    assert_eq!(base_out, 1_100 * UNIT - base_back);
    assert_eq!(quote_out, 2_000 * UNIT);
}
