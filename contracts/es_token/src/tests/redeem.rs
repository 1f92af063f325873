use pretty_assertions::assert_eq;
use rnt::{
    constants::{LOCK_PERIOD, ONE_DAY},
    error::ErrorCode,
};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    vec, Address, Env,
};

use super::setup::{deploy_es_token, deploy_underlying_token, ONE_RNT};
use crate::lock::Lock;

#[test]
fn redeem_after_full_lock_period() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (rnt, rnt_admin) = deploy_underlying_token(&env, &admin);
    let es_token = deploy_es_token(&env, &admin, &rnt.address);
    rnt_admin.mint(&es_token.address, &(100 * ONE_RNT));

    es_token.mint(&user, &(10 * ONE_RNT));

    env.ledger().with_mut(|li| {
        li.timestamp += LOCK_PERIOD;
    });
    assert_eq!(es_token.vested_amount(&user, &0), 10 * ONE_RNT);

    assert_eq!(es_token.redeem(&user, &0), 10 * ONE_RNT);

    assert_eq!(rnt.balance(&user), 10 * ONE_RNT);
    assert_eq!(rnt.balance(&es_token.address), 90 * ONE_RNT);
    assert_eq!(es_token.balance(&user), 0);
    assert_eq!(es_token.lock(&user, &0), None);
}

#[test]
fn early_redeem_forfeits_unvested_part() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (rnt, rnt_admin) = deploy_underlying_token(&env, &admin);
    let es_token = deploy_es_token(&env, &admin, &rnt.address);
    rnt_admin.mint(&es_token.address, &(30 * ONE_RNT));

    es_token.mint(&user, &(30 * ONE_RNT));

    env.ledger().with_mut(|li| {
        li.timestamp += 10 * ONE_DAY;
    });

    assert_eq!(es_token.redeem(&user, &0), 10 * ONE_RNT);

    assert_eq!(rnt.balance(&user), 10 * ONE_RNT);
    // forfeited RNT stays in the reserve
    assert_eq!(rnt.balance(&es_token.address), 20 * ONE_RNT);
    assert_eq!(es_token.balance(&user), 0);
}

#[test]
fn immediate_redeem_pays_nothing() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (rnt, rnt_admin) = deploy_underlying_token(&env, &admin);
    let es_token = deploy_es_token(&env, &admin, &rnt.address);
    rnt_admin.mint(&es_token.address, &ONE_RNT);

    es_token.mint(&user, &ONE_RNT);

    assert_eq!(es_token.redeem(&user, &0), 0);
    assert_eq!(rnt.balance(&user), 0);
    assert_eq!(es_token.balance(&user), 0);
}

#[test]
fn redeem_keeps_other_lock_ids() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (rnt, rnt_admin) = deploy_underlying_token(&env, &admin);
    let es_token = deploy_es_token(&env, &admin, &rnt.address);
    rnt_admin.mint(&es_token.address, &(10 * ONE_RNT));

    env.ledger().with_mut(|li| {
        li.timestamp = ONE_DAY;
    });
    es_token.mint(&user, &ONE_RNT);
    env.ledger().with_mut(|li| {
        li.timestamp = 2 * ONE_DAY;
    });
    es_token.mint(&user, &(2 * ONE_RNT));

    env.ledger().with_mut(|li| {
        li.timestamp = ONE_DAY + LOCK_PERIOD;
    });
    assert_eq!(es_token.redeem(&user, &0), ONE_RNT);

    assert_eq!(
        es_token.locks(&user, &0, &10),
        vec![
            &env,
            (
                1u32,
                Lock {
                    amount: 2 * ONE_RNT,
                    start_ts: 2 * ONE_DAY,
                }
            )
        ]
    );
    assert_eq!(es_token.balance(&user), 2 * ONE_RNT);
    assert_eq!(es_token.vested_amount(&user, &1), 2 * ONE_RNT * 29 / 30);
    assert_eq!(
        es_token.try_redeem(&user, &0),
        Err(Ok(ErrorCode::LockNotFound))
    );

    // new locks never reuse a redeemed id
    es_token.mint(&user, &ONE_RNT);
    assert_eq!(es_token.next_lock_id(&user), 3);
    assert_eq!(
        es_token.lock(&user, &2),
        Some(Lock {
            amount: ONE_RNT,
            start_ts: ONE_DAY + LOCK_PERIOD,
        })
    );
}

#[test]
fn redeem_unknown_lock_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (rnt, _) = deploy_underlying_token(&env, &admin);
    let es_token = deploy_es_token(&env, &admin, &rnt.address);

    es_token.mint(&user, &ONE_RNT);

    assert_eq!(
        es_token.try_redeem(&user, &1),
        Err(Ok(ErrorCode::LockNotFound))
    );
    assert_eq!(
        es_token.try_vested_amount(&user, &1),
        Err(Ok(ErrorCode::LockNotFound))
    );
}

#[test]
fn redeem_after_transferring_locked_tokens_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let receiver = Address::generate(&env);
    let (rnt, rnt_admin) = deploy_underlying_token(&env, &admin);
    let es_token = deploy_es_token(&env, &admin, &rnt.address);
    rnt_admin.mint(&es_token.address, &ONE_RNT);

    es_token.mint(&user, &ONE_RNT);
    es_token.transfer(&user, &receiver, &1);

    assert_eq!(
        es_token.try_redeem(&user, &0),
        Err(Ok(ErrorCode::InsufficientBalance))
    );
    assert!(es_token.lock(&user, &0).is_some());
}

#[test]
fn redeem_with_empty_reserve_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (rnt, _) = deploy_underlying_token(&env, &admin);
    let es_token = deploy_es_token(&env, &admin, &rnt.address);

    es_token.mint(&user, &ONE_RNT);
    env.ledger().with_mut(|li| {
        li.timestamp += LOCK_PERIOD;
    });

    assert_eq!(
        es_token.try_redeem(&user, &0),
        Err(Ok(ErrorCode::InsufficientBalance))
    );
    assert_eq!(es_token.balance(&user), ONE_RNT);
}
