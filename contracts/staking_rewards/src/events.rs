use soroban_sdk::{Address, Env, Symbol, Vec};

use crate::storage::Operation;

pub struct StakingEvents {}

impl StakingEvents {
    /// Emitted when the staking contract is constructed
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[staked_token: Address, reward_token: Address, daily_reward: i128]`
    pub fn initialize(
        env: &Env,
        admin: Address,
        staked_token: Address,
        reward_token: Address,
        daily_reward: i128,
    ) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events()
            .publish(topics, (staked_token, reward_token, daily_reward));
    }

    /// Emitted when a user stakes
    ///
    /// - topics - `["stake", user: Address]`
    /// - data - `[amount: i128, principal: i128, ts: u64]`
    pub fn stake(env: &Env, user: Address, amount: i128, principal: i128, ts: u64) {
        let topics = (Symbol::new(env, "stake"), user);
        env.events().publish(topics, (amount, principal, ts));
    }

    /// Emitted when a user unstakes
    ///
    /// - topics - `["unstake", user: Address]`
    /// - data - `[amount: i128, principal: i128, ts: u64]`
    pub fn unstake(env: &Env, user: Address, amount: i128, principal: i128, ts: u64) {
        let topics = (Symbol::new(env, "unstake"), user);
        env.events().publish(topics, (amount, principal, ts));
    }

    /// Emitted when a user claims reward, including zero claims
    ///
    /// - topics - `["claim", user: Address]`
    /// - data - `[reward_token: Address, amount: i128]`
    pub fn claim(env: &Env, user: Address, reward_token: Address, amount: i128) {
        let topics = (Symbol::new(env, "claim"), user);
        env.events().publish(topics, (reward_token, amount));
    }

    /// - topics - `["paused_operations", admin: Address]`
    /// - data - `paused_operations: Vec<Operation>`
    pub fn paused_operations(env: &Env, admin: Address, paused_operations: Vec<Operation>) {
        let topics = (Symbol::new(env, "paused_operations"), admin);
        env.events().publish(topics, paused_operations);
    }

    /// - topics - `["set_admin", admin: Address]`
    /// - data - `new_admin: Address`
    pub fn set_admin(env: &Env, admin: Address, new_admin: Address) {
        let topics = (Symbol::new(env, "set_admin"), admin);
        env.events().publish(topics, new_admin);
    }
}
