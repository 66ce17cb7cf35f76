use kooja::{
    error::{ErrorCode, KoojaResult},
    safe_decrement, safe_increment, validate,
};
use soroban_sdk::Env;

use crate::{
    math::{
        liquidity_math::{
            calculate_deposit, calculate_withdrawal, LiquidityDeposit, LiquidityWithdrawal,
        },
        swap_math::get_amount_out,
    },
    storage::{Pool, SwapDirection},
};

impl Pool {
    pub fn is_empty(&self) -> bool {
        self.total_shares == 0
    }

    /// `(reserve_in, reserve_out)` as seen by a trade in `direction`
    pub fn reserves(&self, direction: SwapDirection) -> (i128, i128) {
        match direction {
            SwapDirection::BaseToQuote => (self.base_reserve, self.quote_reserve),
            SwapDirection::QuoteToBase => (self.quote_reserve, self.base_reserve),
        }
    }

    pub fn deposit(
        &mut self,
        env: &Env,
        base_amount: i128,
        quote_offered: i128,
    ) -> KoojaResult<LiquidityDeposit> {
        let deposit = calculate_deposit(env, self, base_amount, quote_offered)?;

        safe_increment!(env, self.base_reserve, base_amount);
        safe_increment!(env, self.quote_reserve, deposit.quote_amount);
        safe_increment!(env, self.total_shares, deposit.shares);

        Ok(deposit)
    }

    pub fn withdraw(&mut self, env: &Env, shares: i128) -> KoojaResult<LiquidityWithdrawal> {
        let withdrawal = calculate_withdrawal(env, self, shares)?;

        safe_decrement!(env, self.base_reserve, withdrawal.base_amount);
        safe_decrement!(env, self.quote_reserve, withdrawal.quote_amount);
        safe_decrement!(env, self.total_shares, shares);

        Ok(withdrawal)
    }

    /// Prices `amount_in` on the pre-trade reserves, then moves both reserves.
    pub fn swap(
        &mut self,
        env: &Env,
        direction: SwapDirection,
        amount_in: i128,
        min_amount_out: i128,
    ) -> KoojaResult<i128> {
        let (reserve_in, reserve_out) = self.reserves(direction);
        let amount_out = get_amount_out(env, amount_in, reserve_in, reserve_out)?;
        validate!(
            env,
            amount_out >= min_amount_out,
            ErrorCode::SlippageExceeded,
            "swap pays {} below minimum {}",
            amount_out,
            min_amount_out
        )?;

        match direction {
            SwapDirection::BaseToQuote => {
                safe_increment!(env, self.base_reserve, amount_in);
                safe_decrement!(env, self.quote_reserve, amount_out);
            }
            SwapDirection::QuoteToBase => {
                safe_increment!(env, self.quote_reserve, amount_in);
                safe_decrement!(env, self.base_reserve, amount_out);
            }
        }

        Ok(amount_out)
    }
}
