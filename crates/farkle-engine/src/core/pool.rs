use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PoolSizeError;

use super::face::MAX_DICE;

/// Number of dice still available to roll, `0..=6`.
///
/// A pool of zero only appears as the remainder after banking, where it means
/// "hot dice": the whole pool of six is rolled again.
///
/// # Example
///
/// ```
/// use farkle_engine::DicePool;
///
/// let pool = DicePool::starting(3).unwrap();
/// assert_eq!(pool.size(), 3);
/// assert!(DicePool::starting(0).is_err());
/// assert!(DicePool::starting(7).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct DicePool(u8);

impl DicePool {
    /// No dice left.
    pub const EMPTY: Self = Self(0);
    /// The full pool of six dice.
    pub const FULL: Self = Self(6);

    /// Validates a pool the turn may start with (`1..=6`).
    pub const fn starting(size: u8) -> Result<Self, PoolSizeError> {
        if size == 0 || size as usize > MAX_DICE {
            return Err(PoolSizeError { size });
        }
        Ok(Self(size))
    }

    /// Pool left over after `taken` dice are set aside from `self`.
    ///
    /// # Panics
    ///
    /// Panics if more dice are taken than the pool holds.
    #[must_use]
    pub const fn after_taking(self, taken: u8) -> Self {
        assert!(taken <= self.0, "cannot take more dice than the pool holds");
        Self(self.0 - taken)
    }

    #[must_use]
    pub const fn size(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u8> for DicePool {
    type Error = PoolSizeError;

    fn try_from(size: u8) -> Result<Self, Self::Error> {
        if size as usize > MAX_DICE {
            return Err(PoolSizeError { size });
        }
        Ok(Self(size))
    }
}

impl From<DicePool> for u8 {
    fn from(pool: DicePool) -> Self {
        pool.0
    }
}

impl fmt::Display for DicePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
