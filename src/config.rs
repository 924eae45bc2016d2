//! Positive even configuration value.
//!
//! The ledger stores one owner-settable number that must stay strictly
//! positive and even. Validation lives here so it can be exercised without a
//! contract environment; the ledger maps the error onto its revert codes.

use odra::casper_types::U256;

/// Value the ledger starts with.
pub const INITIAL_POSITIVE_EVEN: u64 = 2;

/// Why a candidate value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositiveEvenError {
    /// Candidate was zero.
    Zero,
    /// Candidate was odd; carries the rejected value.
    Odd(U256),
}

/// A `U256` that is known to be `> 0` and divisible by two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveEven(U256);

impl PositiveEven {
    pub fn new(value: U256) -> Result<Self, PositiveEvenError> {
        if value.is_zero() {
            return Err(PositiveEvenError::Zero);
        }
        if value.low_u64() & 1 == 1 {
            return Err(PositiveEvenError::Odd(value));
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> U256 {
        self.0
    }
}

impl Default for PositiveEven {
    fn default() -> Self {
        Self(U256::from(INITIAL_POSITIVE_EVEN))
    }
}

impl From<PositiveEven> for U256 {
    fn from(value: PositiveEven) -> Self {
        value.0
    }
}
