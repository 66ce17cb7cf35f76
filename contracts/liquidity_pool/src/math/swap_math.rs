use kooja::{
    constants::{FEE_DENOMINATOR, FEE_NUMERATOR},
    error::{ErrorCode, KoojaResult},
    math::{mul_div::MulDivFloor, safe_math::SafeMath},
    validate, validate_amount,
};
use soroban_sdk::Env;

/// Output of a constant-product swap with the fee taken from the input leg.
///
/// `amount_out = amount_in * 99 * reserve_out / (reserve_in * 100 + amount_in * 99)`
pub fn get_amount_out(
    env: &Env,
    amount_in: i128,
    reserve_in: i128,
    reserve_out: i128,
) -> KoojaResult<i128> {
    validate!(
        env,
        reserve_in > 0 && reserve_out > 0,
        ErrorCode::EmptyReserves,
        "reserves are empty: in {} out {}",
        reserve_in,
        reserve_out
    )?;
    validate_amount!(env, amount_in)?;

    let amount_in_with_fee = amount_in.safe_mul(FEE_NUMERATOR, env)?;
    let denominator = reserve_in
        .safe_mul(FEE_DENOMINATOR, env)?
        .safe_add(amount_in_with_fee, env)?;

    amount_in_with_fee.mul_div_floor(env, reserve_out, denominator)
}
