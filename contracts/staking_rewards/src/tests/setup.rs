use rnt_es_token::{EsToken, EsTokenClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

use crate::contract::{StakingRewards, StakingRewardsClient};

pub const DECIMALS: u32 = 7;
pub const ONE_RNT: i128 = 10_000_000;
/// One esRNT per staked RNT per day
pub const DAILY_REWARD: i128 = ONE_RNT;
pub const INITIAL_BALANCE: i128 = 1_000 * ONE_RNT;
pub const START_TIME: u64 = 1_700_000_000;

pub const ONE_DAY: u64 = 86_400;

pub fn deploy_token_contract<'a>(
    env: &Env,
    admin: &Address,
) -> (token::TokenClient<'a>, token::StellarAssetClient<'a>) {
    let address = env
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    (
        token::TokenClient::new(env, &address),
        token::StellarAssetClient::new(env, &address),
    )
}

pub fn deploy_es_token<'a>(env: &Env, admin: &Address, underlying: &Address) -> EsTokenClient<'a> {
    let address = env.register(
        EsToken,
        (
            admin.clone(),
            underlying.clone(),
            DECIMALS,
            String::from_str(env, "Escrowed RNT"),
            String::from_str(env, "esRNT"),
        ),
    );
    EsTokenClient::new(env, &address)
}

pub fn deploy_staking_contract<'a>(
    env: &Env,
    admin: &Address,
    staked_token: &Address,
    reward_token: &Address,
    daily_reward: i128,
) -> StakingRewardsClient<'a> {
    let address = env.register(
        StakingRewards,
        (
            admin.clone(),
            staked_token.clone(),
            reward_token.clone(),
            daily_reward,
        ),
    );
    StakingRewardsClient::new(env, &address)
}

pub struct Deployment<'a> {
    pub admin: Address,
    pub rnt: token::TokenClient<'a>,
    pub rnt_admin: token::StellarAssetClient<'a>,
    pub es_token: EsTokenClient<'a>,
    pub staking: StakingRewardsClient<'a>,
}

impl<'a> Deployment<'a> {
    /// Generates a user holding `INITIAL_BALANCE` RNT with the staking
    /// contract approved for all of it.
    pub fn funded_user(&self, env: &Env) -> Address {
        let user = Address::generate(env);
        self.rnt_admin.mint(&user, &INITIAL_BALANCE);
        self.rnt
            .approve(&user, &self.staking.address, &INITIAL_BALANCE, &10_000);
        user
    }
}

pub fn deploy<'a>(env: &Env) -> Deployment<'a> {
    env.mock_all_auths();
    set_time(env, START_TIME);

    let admin = Address::generate(env);
    let (rnt, rnt_admin) = deploy_token_contract(env, &admin);
    let es_token = deploy_es_token(env, &admin, &rnt.address);
    let staking =
        deploy_staking_contract(env, &admin, &rnt.address, &es_token.address, DAILY_REWARD);

    // the staking contract mints rewards
    es_token.set_admin(&staking.address);

    Deployment {
        admin,
        rnt,
        rnt_admin,
        es_token,
        staking,
    }
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| li.timestamp = timestamp);
}

pub fn advance_time(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}
