use rnt::{
    constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, MAX_DECIMALS},
    error::ErrorCode,
    validate,
};
use soroban_sdk::token::{self, Interface as _};
use soroban_sdk::{contract, contractimpl, contractmeta, log, panic_with_error, Address, Env, String, Vec};
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;

use crate::admin::{read_administrator, read_underlying, write_administrator, write_underlying};
use crate::allowance::{read_allowance, spend_allowance, write_allowance};
use crate::balance::{read_balance, receive_balance, spend_balance};
use crate::events::EsTokenEvents;
use crate::lock::{open_lock, read_lock, read_locks_page, read_next_lock_id, remove_lock, Lock};
use crate::metadata::{read_decimal, read_name, read_symbol, write_metadata};

fn check_nonnegative_amount(env: &Env, amount: i128) {
    if amount < 0 {
        log!(env, "EsToken: negative amount is not allowed: {}", amount);
        panic_with_error!(env, ErrorCode::InvalidAmount);
    }
}

contractmeta!(
    key = "Description",
    val = "Escrowed RNT reward token, redeemable for RNT over a 30 day linear vesting"
);

#[contract]
pub struct EsToken;

#[contractimpl]
impl EsToken {
    pub fn __constructor(
        env: Env,
        admin: Address,
        underlying: Address,
        decimal: u32,
        name: String,
        symbol: String,
    ) {
        if decimal > MAX_DECIMALS {
            log!(&env, "EsToken: Constructor: decimal must not be greater than 18");
            panic_with_error!(&env, ErrorCode::InvalidDecimals);
        }
        write_administrator(&env, &admin);
        write_underlying(&env, &underlying);
        write_metadata(
            &env,
            TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );

        EsTokenEvents::initialize(&env, admin, underlying);
    }

    /// Mints `amount` esRNT to `to` and opens a vesting lock for it.
    /// Only the admin (the staking contract once handed over) may mint.
    pub fn mint(env: Env, to: Address, amount: i128) {
        if amount <= 0 {
            log!(&env, "EsToken: Mint: amount must be positive");
            panic_with_error!(&env, ErrorCode::InvalidAmount);
        }
        let admin = read_administrator(&env);
        admin.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let now = env.ledger().timestamp();
        receive_balance(&env, to.clone(), amount);
        let lock_id = open_lock(&env, &to, &Lock::new(amount, now))
            .unwrap_or_else(|error| panic_with_error!(&env, error));

        TokenUtils::new(&env).events().mint(admin, to.clone(), amount);
        EsTokenEvents::lock(&env, to, lock_id, amount, now);
    }

    pub fn set_admin(env: Env, new_admin: Address) {
        let admin = read_administrator(&env);
        admin.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        write_administrator(&env, &new_admin);
        TokenUtils::new(&env).events().set_admin(admin, new_admin);
    }

    /// Burns the esRNT of lock `lock_id` and pays out its vested RNT. The
    /// unvested remainder is forfeited to the reserve. The other locks keep
    /// their ids.
    pub fn redeem(env: Env, owner: Address, lock_id: u32) -> Result<i128, ErrorCode> {
        owner.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let lock = match read_lock(&env, &owner, lock_id) {
            Some(lock) => lock,
            None => {
                log!(&env, "EsToken: Redeem: lock {} not found", lock_id);
                return Err(ErrorCode::LockNotFound);
            }
        };

        validate!(
            &env,
            read_balance(&env, owner.clone()) >= lock.amount,
            ErrorCode::InsufficientBalance,
            "EsToken: Redeem: locked esRNT no longer held"
        )?;

        let vested = lock.vested(&env, env.ledger().timestamp())?;

        let underlying = token::TokenClient::new(&env, &read_underlying(&env));
        let reserve = env.current_contract_address();
        validate!(
            &env,
            underlying.balance(&reserve) >= vested,
            ErrorCode::InsufficientBalance,
            "EsToken: Redeem: RNT reserve too small"
        )?;

        spend_balance(&env, owner.clone(), lock.amount);
        remove_lock(&env, &owner, lock_id);

        if vested > 0 {
            underlying.transfer(&reserve, &owner, &vested);
        }

        TokenUtils::new(&env).events().burn(owner.clone(), lock.amount);
        EsTokenEvents::redeem(&env, owner, lock.amount, vested);

        Ok(vested)
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    pub fn lock(env: Env, owner: Address, lock_id: u32) -> Option<Lock> {
        read_lock(&env, &owner, lock_id)
    }

    /// Open locks of `owner` with ids from `start_id`, at most `limit` ids
    /// (capped at 50) per page.
    pub fn locks(env: Env, owner: Address, start_id: u32, limit: u32) -> Vec<(u32, Lock)> {
        read_locks_page(&env, &owner, start_id, limit)
    }

    /// Number of locks ever opened for `owner`, redeemed ones included.
    pub fn next_lock_id(env: Env, owner: Address) -> u32 {
        read_next_lock_id(&env, &owner)
    }

    pub fn vested_amount(env: Env, owner: Address, lock_id: u32) -> Result<i128, ErrorCode> {
        let lock = read_lock(&env, &owner, lock_id).ok_or(ErrorCode::LockNotFound)?;
        lock.vested(&env, env.ledger().timestamp())
    }

    pub fn query_underlying(env: Env) -> Address {
        read_underlying(&env)
    }

    pub fn query_admin(env: Env) -> Address {
        read_administrator(&env)
    }
}

#[contractimpl]
impl token::Interface for EsToken {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        read_allowance(&env, from, spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();

        check_nonnegative_amount(&env, amount);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        write_allowance(&env, from.clone(), spender.clone(), amount, expiration_ledger);
        TokenUtils::new(&env)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        read_balance(&env, id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        check_nonnegative_amount(&env, amount);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        spend_balance(&env, from.clone(), amount);
        receive_balance(&env, to.clone(), amount);
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();

        check_nonnegative_amount(&env, amount);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        spend_allowance(&env, from.clone(), spender, amount);
        spend_balance(&env, from.clone(), amount);
        receive_balance(&env, to.clone(), amount);
        TokenUtils::new(&env).events().transfer(from, to, amount)
    }

    fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();

        check_nonnegative_amount(&env, amount);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        spend_balance(&env, from.clone(), amount);
        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();

        check_nonnegative_amount(&env, amount);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        spend_allowance(&env, from.clone(), spender, amount);
        spend_balance(&env, from.clone(), amount);
        TokenUtils::new(&env).events().burn(from, amount)
    }

    fn decimals(env: Env) -> u32 {
        read_decimal(&env)
    }

    fn name(env: Env) -> String {
        read_name(&env)
    }

    fn symbol(env: Env) -> String {
        read_symbol(&env)
    }
}
