use rnt::{
    constants::ONE_DAY,
    error::{ErrorCode, RntResult},
    math::{casting::Cast, mul_div::mul_mul_div_floor, safe_math::SafeMath},
    safe_decrement, safe_increment, validate,
};
use soroban_sdk::Env;

use crate::storage::{Config, StakePosition};

/// Reward earned by `principal` over `elapsed` seconds:
/// `floor(principal * daily_reward * elapsed / (stake_unit * ONE_DAY))`.
///
/// Always rounds down so repeated checkpoints can never mint more than a
/// single settlement over the same interval.
pub fn calculate_reward(
    env: &Env,
    principal: i128,
    daily_reward: i128,
    stake_unit: i128,
    elapsed: u64,
) -> RntResult<i128> {
    if principal == 0 || elapsed == 0 {
        return Ok(0);
    }

    let scale = stake_unit.safe_mul(ONE_DAY.cast::<i128>(env)?, env)?;

    mul_mul_div_floor(
        env,
        principal,
        daily_reward,
        elapsed.cast::<i128>(env)?,
        scale,
    )
}

/// Settles the reward accrued since the last checkpoint into
/// `accrued_unclaimed` and moves the checkpoint to `now`. A clock behind the
/// checkpoint accrues nothing and leaves the checkpoint in place.
pub fn checkpoint(
    env: &Env,
    config: &Config,
    position: &mut StakePosition,
    now: u64,
) -> RntResult<i128> {
    let elapsed = now.saturating_sub(position.last_accrual_time);
    let earned = calculate_reward(
        env,
        position.amount,
        config.daily_reward,
        config.stake_unit,
        elapsed,
    )?;

    safe_increment!(position.accrued_unclaimed, earned);
    position.last_accrual_time = position.last_accrual_time.max(now);

    Ok(earned)
}

pub fn add_stake(
    env: &Env,
    config: &Config,
    position: &mut StakePosition,
    amount: i128,
    now: u64,
) -> RntResult {
    validate!(
        env,
        amount > 0,
        ErrorCode::InvalidAmount,
        "Staking: Stake: amount must be positive"
    )?;

    checkpoint(env, config, position, now)?;
    safe_increment!(position.amount, amount);

    Ok(())
}

pub fn remove_stake(
    env: &Env,
    config: &Config,
    position: &mut StakePosition,
    amount: i128,
    now: u64,
) -> RntResult {
    validate!(
        env,
        amount > 0,
        ErrorCode::InvalidAmount,
        "Staking: Unstake: amount must be positive"
    )?;
    validate!(
        env,
        amount <= position.amount,
        ErrorCode::InsufficientPrincipal,
        "Staking: Unstake: trying to unstake {} with {} staked",
        amount,
        position.amount
    )?;

    checkpoint(env, config, position, now)?;
    safe_decrement!(position.amount, amount);

    Ok(())
}

/// Checkpoints and empties `accrued_unclaimed`, returning what was owed.
pub fn take_reward(
    env: &Env,
    config: &Config,
    position: &mut StakePosition,
    now: u64,
) -> RntResult<i128> {
    checkpoint(env, config, position, now)?;

    let reward = position.accrued_unclaimed;
    position.accrued_unclaimed = 0;

    Ok(reward)
}

/// Reward owed at `now` without persisting a checkpoint.
pub fn pending_reward(
    env: &Env,
    config: &Config,
    position: &StakePosition,
    now: u64,
) -> RntResult<i128> {
    let mut snapshot = position.clone();
    checkpoint(env, config, &mut snapshot, now)?;
    Ok(snapshot.accrued_unclaimed)
}
