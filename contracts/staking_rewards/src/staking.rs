use rnt::error::ErrorCode;
use soroban_sdk::{Address, Env, Vec};

use crate::storage::{Config, Operation, StakePosition};

pub trait StakingRewardsTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn set_admin(env: Env, new_admin: Address) -> Result<(), ErrorCode>;

    fn update_paused_operations(
        env: Env,
        sender: Address,
        to_add: Vec<Operation>,
        to_remove: Vec<Operation>,
    ) -> Result<(), ErrorCode>;

    // ################################################################
    //                             USER
    // ################################################################

    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode>;

    fn unstake(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode>;

    fn claim_reward(env: Env, sender: Address) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn stakes(env: Env, account: Address) -> StakePosition;

    fn pending_reward(env: Env, account: Address) -> Result<i128, ErrorCode>;

    fn reward_token(env: Env) -> Address;

    fn staked_token(env: Env) -> Address;

    fn query_total_staked(env: Env) -> i128;

    fn query_config(env: Env) -> Config;

    fn query_admin(env: Env) -> Address;
}
