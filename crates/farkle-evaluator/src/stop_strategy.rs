//! Turn-level decision: keep rolling or bank the round.

use std::fmt;

use farkle_engine::{DicePool, MAX_DICE};
use serde::{Deserialize, Serialize};

/// Decides whether to end a turn voluntarily after a scoring roll.
///
/// Consulted only when the turn could continue, that is after a roll that
/// banked points and left dice in the pool.
pub trait StopStrategy: fmt::Debug + Send + Sync {
    fn should_stop(&self, round_points: u32, pool: DicePool) -> bool;
}

impl<S> StopStrategy for &S
where
    S: StopStrategy + ?Sized,
{
    fn should_stop(&self, round_points: u32, pool: DicePool) -> bool {
        (**self).should_stop(round_points, pool)
    }
}

/// Rolls until the turn busts.
///
/// This is the behavior the threshold sweeps measure: every turn ends in a
/// farkle, and what gets compared is how many points were acquired on the way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeverStop;

impl StopStrategy for NeverStop {
    fn should_stop(&self, _round_points: u32, _pool: DicePool) -> bool {
        false
    }
}

/// Stops once the round is worth at least a per-pool-size minimum.
///
/// `min_points[n - 1]` applies when `n` dice are left to roll. A minimum of
/// zero means never stop with that many dice.
///
/// # Example
///
/// ```
/// use farkle_engine::DicePool;
/// use farkle_evaluator::stop_strategy::{PointsTableStop, StopStrategy};
///
/// let strategy = PointsTableStop::new([300, 350, 400, 500, 1000, 0]);
/// let two_dice = DicePool::starting(2).unwrap();
/// assert!(strategy.should_stop(400, two_dice));
/// assert!(!strategy.should_stop(300, two_dice));
/// assert!(!strategy.should_stop(5000, DicePool::FULL));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsTableStop {
    min_points: [u32; MAX_DICE],
}

impl PointsTableStop {
    #[must_use]
    pub const fn new(min_points: [u32; MAX_DICE]) -> Self {
        Self { min_points }
    }

    #[must_use]
    pub const fn min_points(&self) -> &[u32; MAX_DICE] {
        &self.min_points
    }
}

impl StopStrategy for PointsTableStop {
    fn should_stop(&self, round_points: u32, pool: DicePool) -> bool {
        let Some(index) = usize::from(pool.size()).checked_sub(1) else {
            return false;
        };
        match self.min_points[index] {
            0 => false,
            min => round_points >= min,
        }
    }
}
