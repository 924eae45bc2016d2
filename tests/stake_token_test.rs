//! StakeToken Tests
//!
//! Fixed issuance, transfer and allowance behaviour the ledger relies on.

use odra::casper_types::U256;
use odra::host::{Deployer, HostEnv, HostRef};
use odra::prelude::*;

use stake_ledger::token::{StakeToken, StakeTokenHostRef, StakeTokenInitArgs};

const INITIAL_SUPPLY: u64 = 100_000;

fn deploy(env: &HostEnv) -> StakeTokenHostRef {
    env.set_caller(env.get_account(0));
    StakeToken::deploy(
        env,
        StakeTokenInitArgs {
            symbol: "MTK".to_string(),
            name: "MyToken".to_string(),
            decimals: 18u8,
            initial_supply: U256::from(INITIAL_SUPPLY),
        },
    )
}

#[test]
fn test_initial_supply_minted_to_deployer() {
    let env = odra_test::env();
    let token = deploy(&env);

    assert_eq!(token.name(), "MyToken");
    assert_eq!(token.symbol(), "MTK");
    assert_eq!(token.decimals(), 18);
    assert_eq!(token.total_supply(), U256::from(INITIAL_SUPPLY));
    assert_eq!(token.balance_of(env.get_account(0)), U256::from(INITIAL_SUPPLY));
    assert_eq!(token.balance_of(env.get_account(1)), U256::zero());
}

#[test]
fn test_transfer_keeps_total_supply() {
    let env = odra_test::env();
    let mut token = deploy(&env);
    let user = env.get_account(1);

    token.transfer(user, U256::from(250u64));

    assert_eq!(token.balance_of(user), U256::from(250u64));
    assert_eq!(token.balance_of(env.get_account(0)), U256::from(INITIAL_SUPPLY - 250));
    assert_eq!(token.total_supply(), U256::from(INITIAL_SUPPLY));
}

#[test]
fn test_transfer_from_spends_allowance() {
    let env = odra_test::env();
    let mut token = deploy(&env);
    let owner = env.get_account(0);
    let spender = env.get_account(1);
    let recipient = env.get_account(2);

    token.approve(spender, U256::from(100u64));
    token.increase_allowance(spender, U256::from(50u64));
    token.decrease_allowance(spender, U256::from(30u64));
    assert_eq!(token.allowance(owner, spender), U256::from(120u64));

    env.set_caller(spender);
    token.transfer_from(owner, recipient, U256::from(70u64));

    assert_eq!(token.allowance(owner, spender), U256::from(50u64));
    assert_eq!(token.balance_of(recipient), U256::from(70u64));
}

#[test]
#[should_panic(expected = "InsufficientAllowance")]
fn test_transfer_from_beyond_allowance_reverts() {
    let env = odra_test::env();
    let mut token = deploy(&env);
    let owner = env.get_account(0);
    let spender = env.get_account(1);

    token.approve(spender, U256::from(10u64));

    env.set_caller(spender);
    token.transfer_from(owner, spender, U256::from(11u64));
}

#[test]
#[should_panic(expected = "InsufficientBalance")]
fn test_transfer_beyond_balance_reverts() {
    let env = odra_test::env();
    let mut token = deploy(&env);

    env.set_caller(env.get_account(1));
    token.transfer(env.get_account(2), U256::from(1u64));
}
