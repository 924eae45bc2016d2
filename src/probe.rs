//! Observing token used by the reentrancy tests.
//!
//! Behaves like a plain CEP-18 token, except that a `transfer` issued by the
//! configured ledger first calls back into that ledger and records what it
//! sees for the recipient. Not part of the deployable contract set.

use crate::staking::StakingLedgerContractRef;
use alloc::string::String;
use odra::casper_types::U256;
use odra::prelude::*;
use odra::ContractRef;
use odra_modules::cep18::events::{Mint, SetAllowance, Transfer, TransferFrom};
use odra_modules::cep18_token::Cep18;

/// Ledger state observed from inside a payout
#[odra::odra_type]
#[derive(Default)]
pub struct Observation {
    pub staked: U256,
    pub pending_reward: U256,
    pub total_staked: U256,
    pub amount: U256,
}

#[odra::module(events = [Mint, SetAllowance, Transfer, TransferFrom])]
pub struct ObservingToken {
    token: SubModule<Cep18>,
    ledger: Var<Address>,
    last_observation: Var<Observation>,
}

#[odra::module]
impl ObservingToken {
    pub fn init(&mut self, initial_supply: U256) {
        self.token
            .init("OBS".to_string(), "Observing Token".to_string(), 18u8, initial_supply);
    }

    /// Ledger whose outbound transfers are observed
    pub fn watch(&mut self, ledger: Address) {
        self.ledger.set(ledger);
    }

    pub fn last_observation(&self) -> Option<Observation> {
        self.last_observation.get()
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.token.balance_of(&owner)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.token.allowance(&owner, &spender)
    }

    pub fn approve(&mut self, spender: Address, amount: U256) {
        self.token.approve(&spender, &amount);
    }

    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) {
        self.token.transfer_from(&owner, &recipient, &amount);
    }

    pub fn transfer(&mut self, recipient: Address, amount: U256) {
        let caller = self.env().caller();
        if let Some(ledger) = self.ledger.get() {
            if ledger == caller {
                let ledger_ref = StakingLedgerContractRef::new(self.env().clone(), ledger);
                self.last_observation.set(Observation {
                    staked: ledger_ref.balance_of(recipient),
                    pending_reward: ledger_ref.pending_reward_of(recipient),
                    total_staked: ledger_ref.total_staked(),
                    amount,
                });
            }
        }
        self.token.transfer(&recipient, &amount);
    }
}
