use rnt::error::ErrorCode;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage_types::DataKey;

pub fn read_administrator(env: &Env) -> Address {
    let key = DataKey::Admin;
    env.storage()
        .instance()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, ErrorCode::NotInitialized))
}

pub fn write_administrator(env: &Env, id: &Address) {
    let key = DataKey::Admin;
    env.storage().instance().set(&key, id);
}

/// RNT reserve address backing esRNT redemptions
pub fn read_underlying(env: &Env) -> Address {
    let key = DataKey::Underlying;
    env.storage()
        .instance()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, ErrorCode::NotInitialized))
}

pub fn write_underlying(env: &Env, id: &Address) {
    let key = DataKey::Underlying;
    env.storage().instance().set(&key, id);
}
