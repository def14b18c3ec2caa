//! Decision-making for Farkle turns.
//!
//! This crate implements a two-level decision architecture:
//!
//! 1. **Roll Resolution** ([`scoring_policy`]) - Decides which scoring dice to set aside
//!    from a single roll, and how many dice go back into the pool.
//!
//! 2. **Turn Play** ([`turn_player`]) - Drives a whole turn: rolls, resolves each roll with a
//!    policy, and asks a [`stop_strategy`] whether to bank the round.
//!
//! # Architecture
//!
//! ```text
//! Turn Play (roll until farkle or stop)
//!     ↓ uses
//! Roll Resolution (what does this roll score?)
//!     ↓ tuned by
//! Scoring Thresholds (pool-size cutoffs per scoring piece)
//! ```
//!
//! # Design Principles
//!
//! ## Policy Behind a Trait
//!
//! [`scoring_policy::RollPolicy`] and [`stop_strategy::StopStrategy`] are object-safe so a
//! [`turn_player::TurnPlayer`] can be assembled at runtime from configuration. The threshold
//! policy is the only roll policy shipped; its cutoffs are what simulations tune.
//!
//! ## Separation of Concerns
//!
//! - **Thresholds** are plain validated data (what are the knobs?)
//! - **Roll Policy** resolves one roll (what do I keep?)
//! - **Stop Strategy** ends a turn early (should I bank now?)
//! - **Turn Player** runs the loop (what happened this turn?)
//!
//! # Example: Playing a Turn
//!
//! ```
//! use farkle_engine::{DicePool, SeededDieSource};
//! use farkle_evaluator::{
//!     scoring_policy::ThresholdPolicy,
//!     stop_strategy::PointsTableStop,
//!     thresholds::ScoringThresholds,
//!     turn_player::TurnPlayer,
//! };
//!
//! let thresholds = ScoringThresholds::default();
//! let player = TurnPlayer::new(Box::new(ThresholdPolicy::new(thresholds)))
//!     .with_stop_strategy(Box::new(PointsTableStop::new([300, 300, 350, 400, 500, 0])));
//!
//! let mut dice = SeededDieSource::new();
//! let outcome = player.play_turn(&mut dice, DicePool::FULL);
//! assert!(outcome.scored_points() <= outcome.round_points);
//! ```

pub mod scoring_policy;
pub mod stop_strategy;
pub mod thresholds;
pub mod turn_player;
