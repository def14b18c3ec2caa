//! Per-batch accumulation of turn outcomes.

use farkle_engine::TurnOutcome;
use farkle_stats::running::RunningStats;
use serde::{Deserialize, Serialize};

/// Which per-turn quantity a batch is judged by.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// Round points acquired before the turn ended, busted or not.
    ///
    /// Without a stop strategy every turn busts, so this is the only
    /// objective that tells threshold configurations apart.
    #[default]
    #[display("acquired")]
    Acquired,
    /// Points the turn actually adds to the score; zero when busted.
    #[display("scored")]
    Scored,
}

/// Totals and running statistics over a set of finished turns.
///
/// Owned by whoever drives the simulation. Accumulators from separate workers
/// combine with [`AggregateStats::merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AggregateStats {
    turns: u64,
    acquired_points: u64,
    scored_points: u64,
    busts: u64,
    rolls: u64,
    hot_dice: u64,
    acquired: RunningStats,
    scored: RunningStats,
}

impl AggregateStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one finished turn.
    pub fn record(&mut self, outcome: &TurnOutcome) {
        let scored = outcome.scored_points();
        self.turns += 1;
        self.acquired_points += u64::from(outcome.round_points);
        self.scored_points += u64::from(scored);
        self.busts += u64::from(outcome.status.is_busted());
        self.rolls += u64::from(outcome.rolls);
        self.hot_dice += u64::from(outcome.hot_dice);
        self.acquired.push(f64::from(outcome.round_points));
        self.scored.push(f64::from(scored));
    }

    pub fn merge(&mut self, other: &Self) {
        self.turns += other.turns;
        self.acquired_points += other.acquired_points;
        self.scored_points += other.scored_points;
        self.busts += other.busts;
        self.rolls += other.rolls;
        self.hot_dice += other.hot_dice;
        self.acquired.merge(&other.acquired);
        self.scored.merge(&other.scored);
    }

    #[must_use]
    pub const fn turns(&self) -> u64 {
        self.turns
    }

    /// Sum of round points over all turns, including busted ones.
    #[must_use]
    pub const fn acquired_points(&self) -> u64 {
        self.acquired_points
    }

    #[must_use]
    pub const fn scored_points(&self) -> u64 {
        self.scored_points
    }

    #[must_use]
    pub const fn busts(&self) -> u64 {
        self.busts
    }

    #[must_use]
    pub const fn rolls(&self) -> u64 {
        self.rolls
    }

    #[must_use]
    pub const fn hot_dice(&self) -> u64 {
        self.hot_dice
    }

    /// Running statistics of the per-turn value `objective` measures.
    #[must_use]
    pub const fn points_stats(&self, objective: Objective) -> &RunningStats {
        match objective {
            Objective::Acquired => &self.acquired,
            Objective::Scored => &self.scored,
        }
    }

    /// Average per-turn value for `objective`, `None` before any turn.
    #[must_use]
    pub fn average(&self, objective: Objective) -> Option<f64> {
        (self.turns > 0).then(|| self.points_stats(objective).mean())
    }

    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn bust_rate(&self) -> Option<f64> {
        (self.turns > 0).then(|| self.busts as f64 / self.turns as f64)
    }

    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn rolls_per_turn(&self) -> Option<f64> {
        (self.turns > 0).then(|| self.rolls as f64 / self.turns as f64)
    }

    /// Plain-data snapshot for reports.
    #[must_use]
    pub fn summary(&self) -> AggregateSummary {
        AggregateSummary {
            turns: self.turns,
            acquired_points: self.acquired_points,
            scored_points: self.scored_points,
            busts: self.busts,
            hot_dice: self.hot_dice,
            average_points: self.average(Objective::Acquired).unwrap_or(0.0),
            average_scored_points: self.average(Objective::Scored).unwrap_or(0.0),
            points_std_dev: self.acquired.std_dev(),
            points_std_error: self.acquired.std_error(),
            bust_rate: self.bust_rate().unwrap_or(0.0),
            rolls_per_turn: self.rolls_per_turn().unwrap_or(0.0),
        }
    }
}

impl Extend<TurnOutcome> for AggregateStats {
    fn extend<T: IntoIterator<Item = TurnOutcome>>(&mut self, iter: T) {
        for outcome in iter {
            self.record(&outcome);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    pub turns: u64,
    pub acquired_points: u64,
    pub scored_points: u64,
    pub busts: u64,
    pub hot_dice: u64,
    pub average_points: f64,
    pub average_scored_points: f64,
    pub points_std_dev: f64,
    pub points_std_error: f64,
    pub bust_rate: f64,
    pub rolls_per_turn: f64,
}
