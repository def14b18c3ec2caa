//! Roll resolution: deciding which dice to set aside from a single roll.
//!
//! This module implements the first level of the evaluator architecture: given the
//! dice just thrown, decide which scoring dice to bank and how many dice go back
//! into the pool. A roll that yields nothing is a farkle.
//!
//! # How It Works
//!
//! [`ThresholdPolicy`] resolves a roll in three phases:
//!
//! 1. **Whole-roll combinations** - three pairs, four of a kind with a pair, a
//!    straight, six of a kind and two triplets bank every die at once
//! 2. **Large groups** - five of a kind (2000) or four of a kind (1000) are always banked
//! 3. **Incremental extraction** - triples, lone 1s and lone 5s are banked according to
//!    the [`ScoringThresholds`], and at least one scoring piece is forced when the
//!    roll would otherwise score nothing
//!
//! During extraction, if every die left in the roll scores on its own, the whole
//! remainder is banked at once so the turn earns hot dice.
//!
//! # Scoring Table
//!
//! | Piece                       | Points              |
//! |-----------------------------|---------------------|
//! | single 1                    | 100                 |
//! | single 5                    | 50                  |
//! | triple of 1s                | 300                 |
//! | triple of face `n` (2-6)    | `n` × 100           |
//! | four of a kind              | 1000                |
//! | five of a kind              | 2000                |
//! | three pairs                 | 1500                |
//! | four of a kind + pair       | 1500                |
//! | straight (1-6)              | 2500                |
//! | two triplets                | 2500                |
//! | six of a kind               | 3000                |
//!
//! # Usage
//!
//! ```
//! use farkle_engine::{DicePool, Roll, RollClassification, RollOutcome};
//! use farkle_evaluator::{
//!     scoring_policy::{RollPolicy, ThresholdPolicy},
//!     thresholds::ScoringThresholds,
//! };
//!
//! let policy = ThresholdPolicy::new(ScoringThresholds::default());
//! let roll = Roll::from_values(&[1, 2, 3, 4, 6, 6]).unwrap();
//! let outcome = policy.decide(DicePool::FULL, &RollClassification::new(&roll));
//!
//! // Only a single 1 is available with six dice in hand
//! assert_eq!(outcome.points(), 100);
//! assert_eq!(outcome.remaining(), Some(DicePool::starting(5).unwrap()));
//! ```

use std::fmt;

use farkle_engine::{DicePool, Face, FaceCounts, RollClassification, RollOutcome};

use crate::thresholds::ScoringThresholds;

pub const SINGLE_ONE_POINTS: u32 = 100;
pub const SINGLE_FIVE_POINTS: u32 = 50;
pub const FOUR_OF_A_KIND_POINTS: u32 = 1000;
pub const FIVE_OF_A_KIND_POINTS: u32 = 2000;

/// Decides what a single roll scores and how many dice remain.
pub trait RollPolicy: fmt::Debug + Send + Sync {
    /// Resolves the roll described by `classification`, thrown from `pool`.
    ///
    /// `pool` must hold exactly as many dice as the classified roll.
    fn decide(&self, pool: DicePool, classification: &RollClassification) -> RollOutcome;
}

impl<P> RollPolicy for &P
where
    P: RollPolicy + ?Sized,
{
    fn decide(&self, pool: DicePool, classification: &RollClassification) -> RollOutcome {
        (**self).decide(pool, classification)
    }
}

/// Threshold-driven banking policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThresholdPolicy {
    thresholds: ScoringThresholds,
}

impl ThresholdPolicy {
    #[must_use]
    pub const fn new(thresholds: ScoringThresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub const fn thresholds(&self) -> &ScoringThresholds {
        &self.thresholds
    }
}

impl RollPolicy for ThresholdPolicy {
    fn decide(&self, pool: DicePool, classification: &RollClassification) -> RollOutcome {
        assert_eq!(
            pool.size(),
            classification.dice(),
            "roll size must match the pool it was thrown from"
        );

        if let Some(combination) = classification.combination() {
            return RollOutcome::Banked {
                points: combination.points(),
                set_aside: *classification.counts(),
                remaining: DicePool::EMPTY,
            };
        }

        let mut tally = Tally::new(pool, *classification.counts());
        if let Some(lead) = classification.groups().first() {
            match lead.count {
                5 => tally.bank(lead.face, 5, FIVE_OF_A_KIND_POINTS),
                4 => tally.bank(lead.face, 4, FOUR_OF_A_KIND_POINTS),
                _ => {}
            }
        }

        let thresholds = &self.thresholds;
        loop {
            if let Some(face) = tally
                .triple()
                .filter(|face| tally.pool.size() <= thresholds.triple_cutoff(*face))
            {
                tally.bank_triple(face);
            }

            let ones = tally.lone(Face::One);
            let fives = tally.lone(Face::Five);
            let triple = tally.triple();
            let triple_dice = if triple.is_some() { 3 } else { 0 };

            if ones + fives + triple_dice == tally.pool.size() {
                tally.bank_ones(ones);
                tally.bank_fives(fives);
                if let Some(face) = triple {
                    tally.bank_triple(face);
                }
                return tally.finish();
            }

            let pool_size = tally.pool.size();
            if ones > 0 && pool_size <= thresholds.ones_dice_cutoff() {
                tally.bank_ones(ones);
            } else if fives > 0 && pool_size <= thresholds.fives_dice_cutoff() {
                tally.bank_fives(fives);
            } else if tally.has_banked() {
                return tally.finish();
            } else if ones > 0 {
                tally.bank_ones(1);
            } else if fives > 0 {
                tally.bank_fives(1);
            } else if let Some(face) = triple {
                tally.bank_triple(face);
            } else {
                return RollOutcome::Farkle;
            }
        }
    }
}

/// Dice still on the table for one roll, and what has been set aside so far.
#[derive(Debug)]
struct Tally {
    pool: DicePool,
    unbanked: FaceCounts,
    set_aside: FaceCounts,
    points: u32,
}

impl Tally {
    fn new(pool: DicePool, counts: FaceCounts) -> Self {
        Self {
            pool,
            unbanked: counts,
            set_aside: FaceCounts::EMPTY,
            points: 0,
        }
    }

    fn has_banked(&self) -> bool {
        !self.set_aside.is_empty()
    }

    /// Face of the triple still on the table, if any.
    fn triple(&self) -> Option<Face> {
        self.unbanked
            .leading_group()
            .filter(|group| group.count == 3)
            .map(|group| group.face)
    }

    /// Number of `face` dice that score as singles (a triple does not).
    fn lone(&self, face: Face) -> u8 {
        match self.unbanked.count(face) {
            count @ 0..=2 => count,
            _ => 0,
        }
    }

    fn bank(&mut self, face: Face, count: u8, points: u32) {
        if count == 0 {
            return;
        }
        self.unbanked.remove(face, count);
        self.set_aside.add(face, count);
        self.pool = self.pool.after_taking(count);
        self.points += points;
    }

    fn bank_ones(&mut self, count: u8) {
        self.bank(Face::One, count, u32::from(count) * SINGLE_ONE_POINTS);
    }

    fn bank_fives(&mut self, count: u8) {
        self.bank(Face::Five, count, u32::from(count) * SINGLE_FIVE_POINTS);
    }

    fn bank_triple(&mut self, face: Face) {
        self.bank(face, 3, face.triple_points());
    }

    fn finish(self) -> RollOutcome {
        log::trace!(
            "banked {} for {} points, {} dice remain",
            self.set_aside,
            self.points,
            self.pool
        );
        RollOutcome::Banked {
            points: self.points,
            set_aside: self.set_aside,
            remaining: self.pool,
        }
    }
}

#[cfg(test)]
mod tests {
    use farkle_engine::Roll;

    use super::*;

    fn decide_with(thresholds: ScoringThresholds, values: &[u8]) -> RollOutcome {
        let roll = Roll::from_values(values).unwrap();
        #[expect(clippy::cast_possible_truncation)]
        let pool = DicePool::starting(values.len() as u8).unwrap();
        ThresholdPolicy::new(thresholds).decide(pool, &RollClassification::new(&roll))
    }

    fn decide(values: &[u8]) -> RollOutcome {
        decide_with(ScoringThresholds::default(), values)
    }

    fn banked(points: u32, set_aside: &[u8], remaining: u8) -> RollOutcome {
        RollOutcome::Banked {
            points,
            set_aside: Roll::from_values(set_aside).unwrap().counts(),
            remaining: DicePool::try_from(remaining).unwrap(),
        }
    }

    /// Every roll of every pool size, as face values.
    fn all_rolls() -> impl Iterator<Item = Vec<u8>> {
        (1..=6_u32).flat_map(|len| {
            (0..6_u32.pow(len)).map(move |mut n| {
                (0..len)
                    .map(|_| {
                        #[expect(clippy::cast_possible_truncation)]
                        let value = (n % 6) as u8 + 1;
                        n /= 6;
                        value
                    })
                    .collect()
            })
        })
    }

    #[test]
    fn test_whole_roll_combinations() {
        assert_eq!(
            decide(&[1, 2, 3, 4, 5, 6]),
            banked(2500, &[1, 2, 3, 4, 5, 6], 0)
        );
        assert_eq!(decide(&[2, 2, 3, 3, 6, 6]), banked(1500, &[2, 2, 3, 3, 6, 6], 0));
        assert_eq!(decide(&[4, 4, 4, 4, 2, 2]), banked(1500, &[4, 4, 4, 4, 2, 2], 0));
        assert_eq!(decide(&[3, 3, 3, 3, 3, 3]), banked(3000, &[3, 3, 3, 3, 3, 3], 0));
        assert_eq!(decide(&[2, 2, 2, 6, 6, 6]), banked(2500, &[2, 2, 2, 6, 6, 6], 0));
    }

    #[test]
    fn test_five_of_a_kind_banks_remaining_die() {
        // 2000 for the fives, then the lone 1 completes the roll
        assert_eq!(decide(&[3, 3, 3, 3, 3, 1]), banked(2100, &[3, 3, 3, 3, 3, 1], 0));
        // the leftover 2 cannot score
        assert_eq!(decide(&[6, 6, 6, 6, 6, 2]), banked(2000, &[6, 6, 6, 6, 6], 1));
    }

    #[test]
    fn test_four_of_a_kind_then_singles() {
        // 1000 for the 2s; 1 and 5 remain, the whole remainder scores
        assert_eq!(decide(&[2, 2, 2, 2, 1, 5]), banked(1150, &[2, 2, 2, 2, 1, 5], 0));
        // 1000 for the 6s; with 2 dice left the lone 1 is under the cutoff
        assert_eq!(decide(&[6, 6, 6, 6, 1, 3]), banked(1100, &[6, 6, 6, 6, 1], 1));
        // four 1s score as four of a kind, not singles
        assert_eq!(decide(&[1, 1, 1, 1, 3, 4]), banked(1000, &[1, 1, 1, 1], 2));
    }

    #[test]
    fn test_single_one_forced_with_full_pool() {
        assert_eq!(decide(&[1, 2, 3, 4, 6, 6]), banked(100, &[1], 5));
        assert_eq!(decide(&[1, 1, 2, 3, 4, 6]), banked(100, &[1], 5));
    }

    #[test]
    fn test_single_five_forced_when_no_ones() {
        assert_eq!(decide(&[5, 5, 2, 3, 4, 6]), banked(50, &[5], 5));
    }

    #[test]
    fn test_ones_banked_below_cutoff() {
        // 4 dice <= ones cutoff 4: bank both 1s, the 5 is at fives cutoff 3 after that
        assert_eq!(decide(&[1, 1, 5, 3]), banked(250, &[1, 1, 5], 1));
        // 4 dice, no fives banked while 4 > fives cutoff 3
        assert_eq!(decide(&[5, 2, 3, 4]), banked(50, &[5], 3));
    }

    #[test]
    fn test_triple_cutoff() {
        // triple 2s with cutoff 1 is declined while a 1 is available
        assert_eq!(decide(&[2, 2, 2, 1, 3, 4]), banked(100, &[1], 5));
        // triple 4s with cutoff 6 is banked right away
        // then the lone 1 is under the ones cutoff with 3 dice left
        assert_eq!(decide(&[4, 4, 4, 1, 3, 6]), banked(500, &[4, 4, 4, 1], 2));
        // triple 1s with cutoff 4 is declined on six dice; the 5 is forced instead
        assert_eq!(decide(&[1, 1, 1, 5, 3, 6]), banked(50, &[5], 5));
    }

    #[test]
    fn test_triple_forced_when_only_score() {
        assert_eq!(decide(&[2, 2, 2, 3, 4, 6]), banked(200, &[2, 2, 2], 3));
    }

    #[test]
    fn test_triple_of_ones_scores_300() {
        let thresholds = ScoringThresholds::default()
            .with_triple_cutoff(Face::One, 6)
            .unwrap();
        assert_eq!(
            decide_with(thresholds, &[1, 1, 1, 2, 3, 4]),
            banked(300, &[1, 1, 1], 3)
        );
    }

    #[test]
    fn test_all_scoring_dice_earn_hot_dice() {
        assert_eq!(decide(&[1, 5, 5]), banked(200, &[1, 5, 5], 0));
        // triple 2s declined, but every die scores so the roll is banked whole
        assert_eq!(decide(&[2, 2, 2, 1, 1, 5]), banked(450, &[2, 2, 2, 1, 1, 5], 0));
        assert_eq!(decide(&[5]), banked(50, &[5], 0));
    }

    #[test]
    fn test_one_and_five_with_two_dice() {
        assert_eq!(decide(&[1, 5]), banked(150, &[1, 5], 0));
    }

    #[test]
    fn test_declined_triple_is_banked_when_nothing_else_scores() {
        assert_eq!(decide(&[2, 2, 2]), banked(200, &[2, 2, 2], 0));
    }

    #[test]
    fn test_farkle() {
        assert_eq!(decide(&[2, 3, 4, 6, 6, 2]), RollOutcome::Farkle);
        assert_eq!(decide(&[3]), RollOutcome::Farkle);
        assert_eq!(decide(&[2, 2, 3, 3]), RollOutcome::Farkle);
    }

    #[test]
    fn test_zero_cutoffs_still_force_a_score() {
        let thresholds = ScoringThresholds::new(0, 0, [0; 6]).unwrap();
        assert_eq!(decide_with(thresholds, &[1, 1, 3, 4, 6, 2]), banked(100, &[1], 5));
        assert_eq!(decide_with(thresholds, &[6, 6, 6, 3, 4, 2]), banked(600, &[6, 6, 6], 3));
    }

    #[test]
    fn test_resolution_invariants_hold_for_every_roll() {
        let policies = [
            ScoringThresholds::default(),
            ScoringThresholds::new(0, 0, [0; 6]).unwrap(),
            ScoringThresholds::new(6, 6, [6; 6]).unwrap(),
            ScoringThresholds::new(2, 5, [1, 3, 5, 2, 4, 6]).unwrap(),
        ];
        for thresholds in policies {
            for values in all_rolls() {
                let roll = Roll::from_values(&values).unwrap();
                let counts = roll.counts();
                let outcome = decide_with(thresholds, &values);
                let has_scoring_die = counts.count(Face::One) > 0
                    || counts.count(Face::Five) > 0
                    || counts.leading_group().is_some_and(|g| g.count >= 3)
                    || RollClassification::new(&roll).combination().is_some();
                match outcome {
                    RollOutcome::Farkle => {
                        assert!(!has_scoring_die, "{roll} farkled with a scoring die");
                    }
                    RollOutcome::Banked {
                        points,
                        set_aside,
                        remaining,
                    } => {
                        assert!(points > 0, "{roll} banked nothing");
                        assert!(!set_aside.is_empty());
                        assert!(set_aside.is_subset_of(&counts), "{roll} set aside {set_aside}");
                        assert_eq!(
                            usize::from(set_aside.total() + remaining.size()),
                            roll.len(),
                            "{roll} lost dice"
                        );
                    }
                }
            }
        }
    }
}
