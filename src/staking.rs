//! Staking Ledger Contract
//!
//! Custodies a CEP-18 stake asset for participants and releases pending
//! rewards on withdrawal.
//! - Participants `deposit` (approve -> transfer_from) and `withdraw`
//! - The owner injects rewards for a participant with `add_rewards`, funded
//!   in the reward asset
//! - Rewards are paid out in the stake asset, in the same transfer as the
//!   principal
//! - The owner also maintains a positive even configuration value
//!
//! ## Ordering
//! Every entry point validates, then writes ledger state, then calls the
//! asset contract. An asset that calls back into the ledger mid-transfer only
//! ever sees committed state.

use crate::asset::FungibleAssetContractRef;
use crate::config::{PositiveEven, PositiveEvenError};
use odra::casper_types::U256;
use odra::prelude::*;
use odra::ContractRef;

// ==========================================
// Events
// ==========================================

pub mod events {
    use odra::casper_types::U256;
    use odra::prelude::*;

    #[odra::event]
    pub struct Deposited {
        pub participant: Address,
        pub amount: U256,
        pub new_staked: U256,
    }

    #[odra::event]
    pub struct RewardsAdded {
        pub participant: Address,
        pub amount: U256,
        pub new_pending_reward: U256,
    }

    #[odra::event]
    pub struct Withdrawn {
        pub participant: Address,
        pub amount: U256,
        pub reward: U256,
        pub payout: U256,
    }

    #[odra::event]
    pub struct PositiveEvenSet {
        pub old_value: U256,
        pub new_value: U256,
    }

    #[odra::event]
    pub struct OwnershipTransferred {
        pub previous_owner: Address,
        pub new_owner: Address,
    }
}

// ==========================================
// Types
// ==========================================

/// Participant record returned by `account_of`
#[odra::odra_type]
#[derive(Default)]
pub struct ParticipantAccount {
    pub staked: U256,
    pub pending_reward: U256,
}

// ==========================================
// Errors
// ==========================================

#[odra::odra_error]
pub enum LedgerError {
    Unauthorized = 1,
    InvalidAmount = 2,
    InsufficientBalance = 3,
    TransferFailed = 4,
    SetToZero = 5,
    SetEvenToOdd = 6,
    Overflow = 7,
}

impl From<PositiveEvenError> for LedgerError {
    fn from(err: PositiveEvenError) -> Self {
        match err {
            PositiveEvenError::Zero => LedgerError::SetToZero,
            PositiveEvenError::Odd(_) => LedgerError::SetEvenToOdd,
        }
    }
}

// ==========================================
// Contract
// ==========================================

#[odra::module(
    events = [
        events::Deposited,
        events::RewardsAdded,
        events::Withdrawn,
        events::PositiveEvenSet,
        events::OwnershipTransferred
    ],
    errors = LedgerError
)]
pub struct StakingLedger {
    // Asset references
    stake_token: Var<Address>,
    reward_token: Var<Address>,

    // Per-participant state
    staked: Mapping<Address, U256>,
    pending_rewards: Mapping<Address, U256>,

    // Global state
    total_staked: Var<U256>,
    total_pending_rewards: Var<U256>,

    // Admin
    owner: Var<Address>,
    positive_even: Var<U256>,
}

#[odra::module]
impl StakingLedger {
    // ==========================================
    // Initialization
    // ==========================================

    /// Initialize the ledger.
    /// `reward_token` may equal `stake_token`. The owner defaults to the deployer.
    pub fn init(&mut self, stake_token: Address, reward_token: Address, owner: Option<Address>) {
        self.stake_token.set(stake_token);
        self.reward_token.set(reward_token);
        self.total_staked.set(U256::zero());
        self.total_pending_rewards.set(U256::zero());
        let owner = owner.unwrap_or_else(|| self.env().caller());
        self.owner.set(owner);
        self.positive_even.set(PositiveEven::default().get());
    }

    // ==========================================
    // Participant Functions
    // ==========================================

    /// Stake `amount` of the stake asset.
    /// The caller must have approved the ledger for at least `amount`.
    pub fn deposit(&mut self, amount: U256) {
        let caller = self.env().caller();

        if amount.is_zero() {
            self.env().revert(LedgerError::InvalidAmount);
        }

        let mut stake_token = self.stake_token_ref();
        self.require_pullable(&stake_token, caller, amount);

        let new_staked = self.checked_add(self.balance_of(caller), amount);
        let new_total = self.checked_add(self.total_staked.get_or_default(), amount);
        self.staked.set(&caller, new_staked);
        self.total_staked.set(new_total);

        stake_token.transfer_from(caller, self.env().self_address(), amount);

        self.env().emit_event(events::Deposited {
            participant: caller,
            amount,
            new_staked,
        });
    }

    /// Withdraw `amount` of principal together with the whole pending reward.
    /// Both are paid in the stake asset in a single transfer.
    pub fn withdraw(&mut self, amount: U256) {
        let caller = self.env().caller();

        if amount.is_zero() {
            self.env().revert(LedgerError::InvalidAmount);
        }

        let staked = self.balance_of(caller);
        if amount > staked {
            self.env().revert(LedgerError::InsufficientBalance);
        }

        let reward = self.pending_reward_of(caller);
        let payout = self.checked_add(amount, reward);

        let remaining_staked = self.checked_sub(self.total_staked.get_or_default(), amount);
        let remaining_rewards = self.checked_sub(self.total_pending_rewards.get_or_default(), reward);

        // Custody left behind must still back every other entitlement
        // denominated in the stake asset.
        let mut stake_token = self.stake_token_ref();
        let reserved = if self.rewards_in_stake_asset() {
            self.checked_add(remaining_staked, remaining_rewards)
        } else {
            remaining_staked
        };
        let custody = stake_token.balance_of(self.env().self_address());
        if custody < self.checked_add(payout, reserved) {
            self.env().revert(LedgerError::TransferFailed);
        }

        self.staked.set(&caller, staked - amount);
        self.pending_rewards.set(&caller, U256::zero());
        self.total_staked.set(remaining_staked);
        self.total_pending_rewards.set(remaining_rewards);

        stake_token.transfer(caller, payout);

        self.env().emit_event(events::Withdrawn {
            participant: caller,
            amount,
            reward,
            payout,
        });
    }

    // ==========================================
    // View Functions
    // ==========================================

    /// Staked principal of `participant`
    pub fn balance_of(&self, participant: Address) -> U256 {
        self.staked.get(&participant).unwrap_or_default()
    }

    /// Reward credited to `participant` and not yet withdrawn
    pub fn pending_reward_of(&self, participant: Address) -> U256 {
        self.pending_rewards.get(&participant).unwrap_or_default()
    }

    /// Complete record for `participant`
    pub fn account_of(&self, participant: Address) -> ParticipantAccount {
        ParticipantAccount {
            staked: self.balance_of(participant),
            pending_reward: self.pending_reward_of(participant),
        }
    }

    /// Sum of all staked principal
    pub fn total_staked(&self) -> U256 {
        self.total_staked.get_or_default()
    }

    /// Sum of all pending rewards
    pub fn total_pending_rewards(&self) -> U256 {
        self.total_pending_rewards.get_or_default()
    }

    pub fn stake_token(&self) -> Option<Address> {
        self.stake_token.get()
    }

    pub fn reward_token(&self) -> Option<Address> {
        self.reward_token.get()
    }

    /// Current positive even configuration value
    pub fn positive_even(&self) -> U256 {
        self.positive_even.get_or_default()
    }

    /// Get contract owner
    pub fn owner(&self) -> Option<Address> {
        self.owner.get()
    }

    // ==========================================
    // Admin Functions
    // ==========================================

    /// Credit `amount` of pending reward to `participant` (owner only).
    /// Pulls `amount` of the reward asset from the owner.
    pub fn add_rewards(&mut self, participant: Address, amount: U256) {
        self.require_owner();
        let caller = self.env().caller();

        if amount.is_zero() {
            self.env().revert(LedgerError::InvalidAmount);
        }

        let mut reward_token = self.reward_token_ref();
        self.require_pullable(&reward_token, caller, amount);

        let new_pending_reward = self.checked_add(self.pending_reward_of(participant), amount);
        let new_total = self.checked_add(self.total_pending_rewards.get_or_default(), amount);
        self.pending_rewards.set(&participant, new_pending_reward);
        self.total_pending_rewards.set(new_total);

        reward_token.transfer_from(caller, self.env().self_address(), amount);

        self.env().emit_event(events::RewardsAdded {
            participant,
            amount,
            new_pending_reward,
        });
    }

    /// Replace the positive even configuration value (owner only)
    pub fn set_positive_even(&mut self, new_value: U256) {
        self.require_owner();

        let validated = PositiveEven::new(new_value)
            .unwrap_or_else(|err| self.env().revert(LedgerError::from(err)));

        let old_value = self.positive_even.get_or_default();
        self.positive_even.set(validated.get());

        self.env().emit_event(events::PositiveEvenSet {
            old_value,
            new_value,
        });
    }

    /// Hand admin rights to `new_owner` (owner only)
    pub fn transfer_ownership(&mut self, new_owner: Address) {
        self.require_owner();
        let previous_owner = self.env().caller();
        self.owner.set(new_owner);
        self.env().emit_event(events::OwnershipTransferred {
            previous_owner,
            new_owner,
        });
    }

    // ==========================================
    // Internal Functions
    // ==========================================

    fn require_owner(&self) {
        if self.owner.get() != Some(self.env().caller()) {
            self.env().revert(LedgerError::Unauthorized);
        }
    }

    /// Revert with `TransferFailed` unless `owner` can fund a
    /// `transfer_from` of `amount` to this contract.
    fn require_pullable(&self, asset: &FungibleAssetContractRef, owner: Address, amount: U256) {
        let allowance = asset.allowance(owner, self.env().self_address());
        if allowance < amount || asset.balance_of(owner) < amount {
            self.env().revert(LedgerError::TransferFailed);
        }
    }

    fn rewards_in_stake_asset(&self) -> bool {
        self.stake_token.get() == self.reward_token.get()
    }

    fn checked_add(&self, a: U256, b: U256) -> U256 {
        a.checked_add(b)
            .unwrap_or_else(|| self.env().revert(LedgerError::Overflow))
    }

    fn checked_sub(&self, a: U256, b: U256) -> U256 {
        a.checked_sub(b)
            .unwrap_or_else(|| self.env().revert(LedgerError::Overflow))
    }

    fn stake_token_ref(&self) -> FungibleAssetContractRef {
        let address = self
            .stake_token
            .get()
            .unwrap_or_else(|| self.env().revert(LedgerError::TransferFailed));
        FungibleAssetContractRef::new(self.env().clone(), address)
    }

    fn reward_token_ref(&self) -> FungibleAssetContractRef {
        let address = self
            .reward_token
            .get()
            .unwrap_or_else(|| self.env().revert(LedgerError::TransferFailed));
        FungibleAssetContractRef::new(self.env().clone(), address)
    }
}
