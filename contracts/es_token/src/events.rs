use soroban_sdk::{Address, Env, Symbol};

pub struct EsTokenEvents {}

impl EsTokenEvents {
    /// Emitted when the token is constructed
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `underlying: Address`
    pub fn initialize(env: &Env, admin: Address, underlying: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, underlying);
    }

    /// Emitted when minted esRNT opens a new vesting lock
    ///
    /// - topics - `["lock", owner: Address]`
    /// - data - `[lock_id: u32, amount: i128, start_ts: u64]`
    pub fn lock(env: &Env, owner: Address, lock_id: u32, amount: i128, start_ts: u64) {
        let topics = (Symbol::new(env, "lock"), owner);
        env.events().publish(topics, (lock_id, amount, start_ts));
    }

    /// Emitted when a lock is burned in exchange for its vested RNT
    ///
    /// - topics - `["redeem", owner: Address]`
    /// - data - `[burned: i128, vested: i128, forfeited: i128]`
    pub fn redeem(env: &Env, owner: Address, burned: i128, vested: i128) {
        let topics = (Symbol::new(env, "redeem"), owner);
        env.events().publish(topics, (burned, vested, burned - vested));
    }
}
