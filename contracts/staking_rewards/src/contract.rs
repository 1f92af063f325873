use rnt::{
    constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, MAX_DECIMALS},
    error::ErrorCode,
    safe_decrement, safe_increment, validate,
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, Address, Env, Vec,
};

use crate::{
    controller,
    events::StakingEvents,
    reward_token::RewardTokenClient,
    staking::StakingRewardsTrait,
    storage::{
        get_config, get_stake, get_total_staked, save_config, save_stake, save_total_staked,
        Config, Operation, StakePosition,
    },
};

contractmeta!(
    key = "Description",
    val = "Stake RNT and accrue esRNT rewards at a fixed daily rate"
);

#[contract]
pub struct StakingRewards;

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn check_operation(env: &Env, config: &Config, operation: Operation) -> Result<(), ErrorCode> {
    validate!(
        env,
        !config.is_operation_paused(&operation),
        ErrorCode::OperationPaused,
        "Staking: operation {} is paused",
        operation as u32
    )
}

#[contractimpl]
impl StakingRewards {
    pub fn __constructor(
        env: Env,
        admin: Address,
        staked_token: Address,
        reward_token: Address,
        daily_reward: i128,
    ) {
        if daily_reward <= 0 {
            log!(&env, "Staking: Initialize: daily reward must be positive");
            panic_with_error!(&env, ErrorCode::InvalidAmount);
        }

        let decimals = token::TokenClient::new(&env, &staked_token).decimals();
        if decimals > MAX_DECIMALS {
            log!(&env, "Staking: Initialize: staked token decimals {} too large", decimals);
            panic_with_error!(&env, ErrorCode::InvalidDecimals);
        }
        let stake_unit = 10i128
            .checked_pow(decimals)
            .unwrap_or_else(|| panic_with_error!(&env, ErrorCode::MathError));

        let config = Config {
            admin: admin.clone(),
            staked_token: staked_token.clone(),
            reward_token: reward_token.clone(),
            daily_reward,
            stake_unit,
            paused_operations: Vec::new(&env),
        };
        save_config(&env, &config);
        save_total_staked(&env, 0);

        StakingEvents::initialize(&env, admin, staked_token, reward_token, daily_reward);
    }
}

#[contractimpl]
impl StakingRewardsTrait for StakingRewards {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn set_admin(env: Env, new_admin: Address) -> Result<(), ErrorCode> {
        let mut config = get_config(&env);
        config.admin.require_auth();
        extend_instance_ttl(&env);

        let old_admin = config.admin;
        config.admin = new_admin.clone();
        save_config(&env, &config);

        StakingEvents::set_admin(&env, old_admin, new_admin);
        Ok(())
    }

    fn update_paused_operations(
        env: Env,
        sender: Address,
        to_add: Vec<Operation>,
        to_remove: Vec<Operation>,
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        extend_instance_ttl(&env);

        let mut config = get_config(&env);
        validate!(
            &env,
            sender == config.admin,
            ErrorCode::Unauthorized,
            "Staking: Update paused operations: sender is not the admin"
        )?;

        for operation in to_add.iter() {
            if !config.paused_operations.contains(operation) {
                config.paused_operations.push_back(operation);
            }
        }
        for operation in to_remove.iter() {
            if let Some(index) = config.paused_operations.first_index_of(operation) {
                config.paused_operations.remove(index);
            }
        }
        save_config(&env, &config);

        StakingEvents::paused_operations(&env, sender, config.paused_operations);
        Ok(())
    }

    // ################################################################
    //                             USER
    // ################################################################

    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode> {
        sender.require_auth();
        extend_instance_ttl(&env);

        let config = get_config(&env);
        validate!(
            &env,
            amount > 0,
            ErrorCode::InvalidAmount,
            "Staking: Stake: amount must be positive"
        )?;
        check_operation(&env, &config, Operation::Stake)?;

        let custody = env.current_contract_address();
        let staked_token = token::TokenClient::new(&env, &config.staked_token);
        let allowance = staked_token.allowance(&sender, &custody);
        validate!(
            &env,
            allowance >= amount,
            ErrorCode::InsufficientAllowance,
            "Staking: Stake: allowance {} below amount {}",
            allowance,
            amount
        )?;
        let balance = staked_token.balance(&sender);
        validate!(
            &env,
            balance >= amount,
            ErrorCode::InsufficientBalance,
            "Staking: Stake: balance {} below amount {}",
            balance,
            amount
        )?;

        let now = env.ledger().timestamp();
        let mut position = get_stake(&env, &sender);
        controller::stake::add_stake(&env, &config, &mut position, amount, now)?;

        let mut total_staked = get_total_staked(&env);
        safe_increment!(total_staked, amount);

        staked_token.transfer_from(&custody, &sender, &custody, &amount);

        save_stake(&env, &sender, &position);
        save_total_staked(&env, total_staked);

        StakingEvents::stake(&env, sender, amount, position.amount, now);
        Ok(())
    }

    fn unstake(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode> {
        sender.require_auth();
        extend_instance_ttl(&env);

        let config = get_config(&env);
        check_operation(&env, &config, Operation::Unstake)?;

        let now = env.ledger().timestamp();
        let mut position = get_stake(&env, &sender);
        controller::stake::remove_stake(&env, &config, &mut position, amount, now)?;

        let mut total_staked = get_total_staked(&env);
        safe_decrement!(total_staked, amount);

        save_stake(&env, &sender, &position);
        save_total_staked(&env, total_staked);

        token::TokenClient::new(&env, &config.staked_token).transfer(
            &env.current_contract_address(),
            &sender,
            &amount,
        );

        StakingEvents::unstake(&env, sender, amount, position.amount, now);
        Ok(())
    }

    fn claim_reward(env: Env, sender: Address) -> Result<i128, ErrorCode> {
        sender.require_auth();
        extend_instance_ttl(&env);

        let config = get_config(&env);
        check_operation(&env, &config, Operation::Claim)?;

        let now = env.ledger().timestamp();
        let mut position = get_stake(&env, &sender);
        let reward = controller::stake::take_reward(&env, &config, &mut position, now)?;
        save_stake(&env, &sender, &position);

        if reward > 0 {
            RewardTokenClient::new(&env, &config.reward_token).mint(&sender, &reward);
        }

        StakingEvents::claim(&env, sender, config.reward_token, reward);
        Ok(reward)
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn stakes(env: Env, account: Address) -> StakePosition {
        get_stake(&env, &account)
    }

    fn pending_reward(env: Env, account: Address) -> Result<i128, ErrorCode> {
        let config = get_config(&env);
        let position = get_stake(&env, &account);
        controller::stake::pending_reward(&env, &config, &position, env.ledger().timestamp())
    }

    fn reward_token(env: Env) -> Address {
        get_config(&env).reward_token
    }

    fn staked_token(env: Env) -> Address {
        get_config(&env).staked_token
    }

    fn query_total_staked(env: Env) -> i128 {
        get_total_staked(&env)
    }

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }

    fn query_admin(env: Env) -> Address {
        get_config(&env).admin
    }
}
