#![no_std]

mod contract;
mod controller;
mod events;
mod reward_token;
mod staking;
mod storage;

pub use crate::contract::{StakingRewards, StakingRewardsClient};
pub use crate::storage::{Config, Operation, StakePosition};

#[cfg(test)]
mod tests;
