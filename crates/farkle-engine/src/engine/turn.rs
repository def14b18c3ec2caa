use crate::{DicePool, RollOutcome};

use super::turn_outcome::{TurnOutcome, TurnStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TurnState {
    Rolling,
    Busted,
    Ended,
}

/// What applying a roll outcome did to the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum RollEffect {
    /// Points were banked and some dice are left to roll.
    Continue,
    /// Points were banked and the emptied pool was refilled to six dice.
    HotDice,
    /// The roll farkled and the turn is over.
    Farkle,
}

/// State machine for a single Farkle turn.
#[derive(Debug, Clone)]
pub struct Turn {
    pool: DicePool,
    round_points: u32,
    state: TurnState,
    rolls: u32,
    hot_dice: u32,
}

impl Turn {
    /// Starts a turn rolling `starting_pool` dice.
    ///
    /// # Panics
    ///
    /// Panics if `starting_pool` is empty; build it with
    /// [`DicePool::starting`].
    #[must_use]
    pub fn new(starting_pool: DicePool) -> Self {
        assert!(!starting_pool.is_empty(), "a turn needs dice to roll");
        Self {
            pool: starting_pool,
            round_points: 0,
            state: TurnState::Rolling,
            rolls: 0,
            hot_dice: 0,
        }
    }

    /// Dice to throw on the next roll.
    #[must_use]
    pub fn pool(&self) -> DicePool {
        self.pool
    }

    #[must_use]
    pub fn round_points(&self) -> u32 {
        self.round_points
    }

    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Applies the resolution of the roll just thrown.
    ///
    /// # Panics
    ///
    /// Panics if the turn is no longer rolling.
    pub fn apply(&mut self, outcome: RollOutcome) -> RollEffect {
        assert!(self.state.is_rolling(), "turn is already over");
        self.rolls += 1;
        match outcome {
            RollOutcome::Farkle => {
                self.state = TurnState::Busted;
                RollEffect::Farkle
            }
            RollOutcome::Banked {
                points, remaining, ..
            } => {
                self.round_points += points;
                if remaining.is_empty() {
                    self.hot_dice += 1;
                    self.pool = DicePool::FULL;
                    RollEffect::HotDice
                } else {
                    self.pool = remaining;
                    RollEffect::Continue
                }
            }
        }
    }

    /// Stops rolling and keeps the round points.
    ///
    /// # Panics
    ///
    /// Panics if the turn is no longer rolling.
    pub fn stop(&mut self) {
        assert!(self.state.is_rolling(), "turn is already over");
        self.state = TurnState::Ended;
    }

    /// Final report of the turn.
    ///
    /// # Panics
    ///
    /// Panics if the turn is still rolling.
    #[must_use]
    pub fn outcome(&self) -> TurnOutcome {
        let status = match self.state {
            TurnState::Rolling => panic!("turn is still rolling"),
            TurnState::Busted => TurnStatus::Busted,
            TurnState::Ended => TurnStatus::Ended,
        };
        TurnOutcome {
            round_points: self.round_points,
            status,
            rolls: self.rolls,
            hot_dice: self.hot_dice,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Face, FaceCounts};

    use super::*;

    fn banked(points: u32, remaining: u8) -> RollOutcome {
        RollOutcome::Banked {
            points,
            set_aside: FaceCounts::from_faces([Face::One]),
            remaining: DicePool::try_from(remaining).unwrap(),
        }
    }

    #[test]
    fn test_bank_shrinks_pool() {
        let mut turn = Turn::new(DicePool::FULL);
        assert_eq!(turn.apply(banked(100, 5)), RollEffect::Continue);
        assert_eq!(turn.pool().size(), 5);
        assert_eq!(turn.round_points(), 100);
        assert!(turn.state().is_rolling());
    }

    #[test]
    fn test_hot_dice_refills_pool() {
        let mut turn = Turn::new(DicePool::starting(2).unwrap());
        assert_eq!(turn.apply(banked(150, 0)), RollEffect::HotDice);
        assert_eq!(turn.pool(), DicePool::FULL);
        assert!(turn.state().is_rolling());
    }

    #[test]
    fn test_farkle_busts_and_forfeits() {
        let mut turn = Turn::new(DicePool::FULL);
        turn.apply(banked(100, 5));
        turn.apply(banked(300, 0));
        assert_eq!(turn.apply(RollOutcome::Farkle), RollEffect::Farkle);

        let outcome = turn.outcome();
        assert_eq!(outcome.status, TurnStatus::Busted);
        assert_eq!(outcome.round_points, 400);
        assert_eq!(outcome.scored_points(), 0);
        assert_eq!(outcome.rolls, 3);
        assert_eq!(outcome.hot_dice, 1);
    }

    #[test]
    fn test_stop_keeps_points() {
        let mut turn = Turn::new(DicePool::FULL);
        turn.apply(banked(250, 3));
        turn.stop();
        let outcome = turn.outcome();
        assert!(outcome.status.is_ended());
        assert_eq!(outcome.scored_points(), 250);
    }

    #[test]
    #[should_panic(expected = "already over")]
    fn test_apply_after_bust_panics() {
        let mut turn = Turn::new(DicePool::FULL);
        turn.apply(RollOutcome::Farkle);
        turn.apply(banked(50, 4));
    }

    #[test]
    #[should_panic(expected = "still rolling")]
    fn test_outcome_while_rolling_panics() {
        let turn = Turn::new(DicePool::FULL);
        let _ = turn.outcome();
    }
}
