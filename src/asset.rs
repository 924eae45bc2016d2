//! Fungible Asset External Contract Interface
//!
//! The staking ledger talks to its stake and reward assets only through this
//! interface, so any CEP-18 compatible contract can be wired in at
//! construction. Implementations may call back into the ledger while a
//! transfer is in flight; the ledger commits its own state before calling out.

use odra::casper_types::U256;
use odra::prelude::*;

/// Subset of CEP-18 the ledger depends on.
#[odra::external_contract]
pub trait FungibleAsset {
    /// Move `amount` from the calling contract to `recipient`.
    fn transfer(&mut self, recipient: Address, amount: U256);

    /// Move `amount` from `owner` to `recipient`, spending the allowance
    /// `owner` granted to the caller.
    fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256);

    /// Balance held by `owner`.
    fn balance_of(&self, owner: Address) -> U256;

    /// Amount `spender` may still move on behalf of `owner`.
    fn allowance(&self, owner: Address, spender: Address) -> U256;
}
