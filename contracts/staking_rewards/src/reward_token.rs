use soroban_sdk::{contractclient, Address, Env};

/// Minting capability the staking contract needs from the reward asset.
/// The deployer grants it by making the staking contract the token admin.
#[contractclient(name = "RewardTokenClient")]
pub trait RewardTokenInterface {
    fn mint(env: Env, to: Address, amount: i128);
}
