//! Stake Ledger — minimal staking contract (Odra)
//!
//! This crate implements a custodial staking ledger on Casper using Odra framework.
//! - StakeToken: Fixed-supply CEP-18 token usable as stake or reward asset
//! - StakingLedger: Deposit/withdraw ledger with owner-injected rewards
//! - PositiveEven: Validation for the ledger's owner-settable config value

#![cfg_attr(target_arch = "wasm32", no_std)]

extern crate alloc;

pub mod asset;
pub mod config;
pub mod staking;
pub mod token;

#[cfg(not(target_arch = "wasm32"))]
pub mod probe;
