use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{Env, I256};

use crate::{
    error::{ErrorCode, RntResult},
    validate,
};

/// Computes `floor(x * y / denominator)` for non-negative operands.
///
/// The product is first attempted in 128 bits; when it overflows the host
/// 256-bit integer is used so only a quotient that does not fit `i128` fails.
pub fn mul_div_floor(env: &Env, x: i128, y: i128, denominator: i128) -> RntResult<i128> {
    validate!(
        env,
        x >= 0 && y >= 0 && denominator > 0,
        ErrorCode::MathError,
        "mul_div_floor: invalid operands"
    )?;

    if let Some(result) = x.fixed_mul_floor(y, denominator) {
        return Ok(result);
    }

    let wide = I256::from_i128(env, x)
        .mul(&I256::from_i128(env, y))
        .div(&I256::from_i128(env, denominator));

    wide.to_i128().ok_or(ErrorCode::MathError)
}

/// Computes `floor(x * y * z / denominator)` for non-negative operands,
/// widening the full three-way product when it does not fit 128 bits.
pub fn mul_mul_div_floor(
    env: &Env,
    x: i128,
    y: i128,
    z: i128,
    denominator: i128,
) -> RntResult<i128> {
    validate!(
        env,
        x >= 0 && y >= 0 && z >= 0 && denominator > 0,
        ErrorCode::MathError,
        "mul_mul_div_floor: invalid operands"
    )?;

    if let Some(xy) = x.checked_mul(y) {
        return mul_div_floor(env, xy, z, denominator);
    }

    let wide = I256::from_i128(env, x)
        .mul(&I256::from_i128(env, y))
        .mul(&I256::from_i128(env, z))
        .div(&I256::from_i128(env, denominator));

    wide.to_i128().ok_or(ErrorCode::MathError)
}
