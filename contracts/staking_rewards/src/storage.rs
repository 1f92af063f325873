use rnt::{
    constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD},
    error::ErrorCode,
};
use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Config,
    Stake(Address),
    TotalStaked,
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub enum Operation {
    Stake,
    Unstake,
    Claim,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    /// Token users stake (RNT)
    pub staked_token: Address,
    /// Token minted as reward (esRNT)
    pub reward_token: Address,
    /// Reward, in the reward token's smallest unit, paid per whole staked
    /// token per day
    pub daily_reward: i128,
    /// One whole staked token in its smallest unit (10^decimals)
    pub stake_unit: i128,
    pub paused_operations: Vec<Operation>,
}

impl Config {
    pub fn is_operation_paused(&self, operation: &Operation) -> bool {
        self.paused_operations.contains(operation)
    }
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().persistent().set(&DataKey::Config, config);
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .persistent()
        .get::<_, Config>(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, ErrorCode::NotInitialized));

    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    config
}

// ################################################################
//                             Stake
// ################################################################

/// Per-account ledger entry. Created zeroed on first use and never removed.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakePosition {
    /// Staked principal
    pub amount: i128,
    /// Ledger timestamp of the last checkpoint
    pub last_accrual_time: u64,
    /// Reward settled by checkpoints but not yet minted
    pub accrued_unclaimed: i128,
}

pub fn get_stake(env: &Env, key: &Address) -> StakePosition {
    let key = DataKey::Stake(key.clone());
    match env.storage().persistent().get::<_, StakePosition>(&key) {
        Some(position) => {
            env.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
            position
        }
        None => StakePosition::default(),
    }
}

pub fn save_stake(env: &Env, key: &Address, position: &StakePosition) {
    let key = DataKey::Stake(key.clone());
    env.storage().persistent().set(&key, position);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

// ################################################################
//                          Total staked
// ################################################################

pub fn get_total_staked(env: &Env) -> i128 {
    let total = env
        .storage()
        .persistent()
        .get::<_, i128>(&DataKey::TotalStaked)
        .unwrap_or(0);
    if env.storage().persistent().has(&DataKey::TotalStaked) {
        env.storage().persistent().extend_ttl(
            &DataKey::TotalStaked,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    total
}

pub fn save_total_staked(env: &Env, total: i128) {
    env.storage().persistent().set(&DataKey::TotalStaked, &total);
    env.storage().persistent().extend_ttl(
        &DataKey::TotalStaked,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}
