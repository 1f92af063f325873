use soroban_sdk::{token, Address, Env, String};

use crate::contract::{EsToken, EsTokenClient};

pub const DECIMALS: u32 = 7;
pub const ONE_RNT: i128 = 10_000_000;

pub fn deploy_underlying_token<'a>(
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
