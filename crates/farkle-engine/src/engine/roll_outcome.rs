use crate::{DicePool, FaceCounts};

/// The result of resolving one roll.
///
/// A farkle is its own variant so it can never be confused with a bank that
/// happened to score zero points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum RollOutcome {
    /// At least one scoring group was set aside.
    Banked {
        /// Points scored by the dice set aside.
        points: u32,
        /// The dice that were set aside.
        set_aside: FaceCounts,
        /// Dice left to roll; empty means hot dice.
        remaining: DicePool,
    },
    /// Nothing in the roll could be scored.
    Farkle,
}

impl RollOutcome {
    /// Points banked by this roll, zero for a farkle.
    #[must_use]
    pub fn points(&self) -> u32 {
        match self {
            RollOutcome::Banked { points, .. } => *points,
            RollOutcome::Farkle => 0,
        }
    }

    /// Dice left to roll, or `None` for a farkle.
    #[must_use]
    pub fn remaining(&self) -> Option<DicePool> {
        match self {
            RollOutcome::Banked { remaining, .. } => Some(*remaining),
            RollOutcome::Farkle => None,
        }
    }
}
