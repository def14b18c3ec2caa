//! Turn play: driving a whole turn with a roll policy and a stop strategy.
//!
//! This module implements the second level of the evaluator architecture. A
//! [`TurnPlayer`] throws the pool, lets its [`RollPolicy`] resolve each roll,
//! and applies the result to a [`Turn`] until the turn busts or the
//! [`StopStrategy`] banks the round.
//!
//! # Usage
//!
//! ```
//! use farkle_engine::{DiceSeed, DicePool, SeededDieSource};
//! use farkle_evaluator::{
//!     scoring_policy::ThresholdPolicy, thresholds::ScoringThresholds, turn_player::TurnPlayer,
//! };
//!
//! let player = TurnPlayer::new(Box::new(ThresholdPolicy::new(ScoringThresholds::default())));
//! let mut dice = SeededDieSource::with_seed(DiceSeed::from_bytes([7; 16]));
//!
//! // Without a stop strategy every turn runs until it farkles
//! let outcome = player.play_turn(&mut dice, DicePool::FULL);
//! assert!(outcome.status.is_busted());
//! assert!(outcome.rolls >= 1);
//! ```

use farkle_engine::{
    DicePool, DieSource, RollClassification, RollEffect, RollOutcome, Turn, TurnOutcome,
};

use crate::{
    scoring_policy::RollPolicy,
    stop_strategy::{NeverStop, StopStrategy},
};

/// Plays Farkle turns with a fixed roll policy and stop strategy.
#[derive(Debug)]
pub struct TurnPlayer<'a> {
    roll_policy: Box<dyn RollPolicy + 'a>,
    stop_strategy: Box<dyn StopStrategy + 'a>,
}

impl<'a> TurnPlayer<'a> {
    /// Creates a player that never stops voluntarily.
    #[must_use]
    pub fn new(roll_policy: Box<dyn RollPolicy + 'a>) -> Self {
        Self {
            roll_policy,
            stop_strategy: Box::new(NeverStop),
        }
    }

    #[must_use]
    pub fn with_stop_strategy(self, stop_strategy: Box<dyn StopStrategy + 'a>) -> Self {
        Self {
            stop_strategy,
            ..self
        }
    }

    /// Throws the turn's pool once and applies the resolution.
    pub fn play_roll<D>(&self, dice: &mut D, turn: &mut Turn) -> RollEffect
    where
        D: DieSource + ?Sized,
    {
        let roll = dice.roll(turn.pool());
        let outcome = self
            .roll_policy
            .decide(turn.pool(), &RollClassification::new(&roll));
        match outcome {
            RollOutcome::Banked { points, .. } => {
                log::trace!("rolled {roll}: +{points}");
            }
            RollOutcome::Farkle => log::trace!("rolled {roll}: farkle"),
        }
        turn.apply(outcome)
    }

    /// Plays one complete turn starting from `starting_pool` dice.
    ///
    /// # Panics
    ///
    /// Panics if `starting_pool` is empty.
    #[must_use]
    pub fn play_turn<D>(&self, dice: &mut D, starting_pool: DicePool) -> TurnOutcome
    where
        D: DieSource + ?Sized,
    {
        let mut turn = Turn::new(starting_pool);
        loop {
            match self.play_roll(dice, &mut turn) {
                RollEffect::Farkle => break,
                RollEffect::HotDice => {}
                RollEffect::Continue => {
                    if self
                        .stop_strategy
                        .should_stop(turn.round_points(), turn.pool())
                    {
                        turn.stop();
                        break;
                    }
                }
            }
        }
        turn.outcome()
    }
}
