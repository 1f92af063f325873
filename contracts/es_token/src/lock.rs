use rnt::{
    constants::{LOCK_PERIOD, PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD},
    error::RntResult,
    math::{casting::Cast, mul_div::mul_div_floor},
    safe_increment,
};
use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::storage_types::DataKey;

/// Most locks returned by one `locks` page.
pub const MAX_LOCKS_PAGE: u32 = 50;

/// A batch of esRNT minted at `start_ts`. It vests linearly into RNT over
/// `LOCK_PERIOD`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lock {
    pub amount: i128,
    pub start_ts: u64,
}

impl Lock {
    pub fn new(amount: i128, start_ts: u64) -> Self {
        Lock { amount, start_ts }
    }

    /// RNT claimable for this lock at `now`, floored to the smallest unit.
    pub fn vested(&self, env: &Env, now: u64) -> RntResult<i128> {
        let elapsed = now.saturating_sub(self.start_ts).min(LOCK_PERIOD);
        mul_div_floor(
            env,
            self.amount,
            elapsed.cast::<i128>(env)?,
            LOCK_PERIOD.cast::<i128>(env)?,
        )
    }
}

// Each lock lives under its own key so minting and redeeming touch a
// constant number of entries however many locks an owner has opened.

pub fn read_lock(env: &Env, owner: &Address, lock_id: u32) -> Option<Lock> {
    let key = DataKey::Lock(owner.clone(), lock_id);
    let lock = env.storage().persistent().get::<_, Lock>(&key);
    if lock.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    lock
}

pub fn remove_lock(env: &Env, owner: &Address, lock_id: u32) {
    env.storage()
        .persistent()
        .remove(&DataKey::Lock(owner.clone(), lock_id));
}

/// Id the next lock opened for `owner` will get. Ids are never reused.
pub fn read_next_lock_id(env: &Env, owner: &Address) -> u32 {
    let key = DataKey::NextLockId(owner.clone());
    match env.storage().persistent().get::<_, u32>(&key) {
        Some(next_id) => {
            env.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
            next_id
        }
        None => 0,
    }
}

/// Stores `lock` under a fresh id and returns that id.
pub fn open_lock(env: &Env, owner: &Address, lock: &Lock) -> RntResult<u32> {
    let lock_id = read_next_lock_id(env, owner);
    let mut next_id = lock_id;
    safe_increment!(next_id, 1);

    let key = DataKey::Lock(owner.clone(), lock_id);
    env.storage().persistent().set(&key, lock);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    let key = DataKey::NextLockId(owner.clone());
    env.storage().persistent().set(&key, &next_id);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    Ok(lock_id)
}

/// Open locks with ids in `[start_id, start_id + limit)`, skipping redeemed
/// ones. `limit` is capped at `MAX_LOCKS_PAGE`.
pub fn read_locks_page(
    env: &Env,
    owner: &Address,
    start_id: u32,
    limit: u32,
) -> Vec<(u32, Lock)> {
    let end_id = start_id
        .saturating_add(limit.min(MAX_LOCKS_PAGE))
        .min(read_next_lock_id(env, owner));

    let mut page = Vec::new(env);
    for lock_id in start_id..end_id {
        if let Some(lock) = read_lock(env, owner, lock_id) {
            page.push_back((lock_id, lock));
        }
    }
    page
}
