use soroban_sdk::{Env, I256};

use crate::{
    error::{ErrorCode, KoojaResult},
    validate,
};

/// Computes `floor(self * y / denominator)` for non-negative amounts.
///
/// The product is formed as an `I256` on the host, so 18 decimal amounts can be
/// multiplied together before the division brings the result back into range.
/// A quotient that does not fit the output type is a `MathError`.
pub trait MulDivFloor: Sized {
    fn mul_div_floor(self, env: &Env, y: Self, denominator: Self) -> KoojaResult<Self>;
}

impl MulDivFloor for i128 {
    fn mul_div_floor(self, env: &Env, y: i128, denominator: i128) -> KoojaResult<i128> {
        validate!(
            env,
            self >= 0 && y >= 0 && denominator > 0,
            ErrorCode::MathError,
            "mul_div_floor operands out of domain: {} {} {}",
            self,
            y,
            denominator
        )?;

        let quotient = I256::from_i128(env, self)
            .mul(&I256::from_i128(env, y))
            .div(&I256::from_i128(env, denominator))
            .to_i128();
        validate!(
            env,
            quotient.is_some(),
            ErrorCode::MathError,
            "mul_div_floor result exceeds i128: {} {} {}",
            self,
            y,
            denominator
        )?;

        quotient.ok_or(ErrorCode::MathError)
    }
}
