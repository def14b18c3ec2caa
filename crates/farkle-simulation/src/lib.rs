//! Monte Carlo simulation of Farkle turns.
//!
//! This crate runs large numbers of independent turns and summarizes them:
//!
//! - [`aggregate`] - Accumulates turn outcomes into totals and running statistics
//! - [`batch`] - Splits a batch of turns across scoped worker threads and merges the results
//! - [`sweep`] - Runs one batch per threshold configuration and ranks the configurations
//!
//! # Architecture
//!
//! ```text
//! Threshold Sweep (one cell per configuration)
//!     ↓ runs
//! Batch (N turns over W workers, merged in order)
//!     ↓ plays
//! Turn Player (farkle-evaluator)
//!     ↓ reports
//! Aggregate Stats
//! ```
//!
//! # Reproducibility
//!
//! A batch is fully determined by its seed, turn count and worker count. Sweep
//! cells reuse the same batch configuration, so they are compared on the same
//! stream of worker seeds.
//!
//! # Example
//!
//! ```
//! use farkle_engine::{DicePool, DiceSeed};
//! use farkle_evaluator::{
//!     scoring_policy::ThresholdPolicy, thresholds::ScoringThresholds, turn_player::TurnPlayer,
//! };
//! use farkle_simulation::{
//!     aggregate::Objective,
//!     batch::{BatchConfig, simulate_batch},
//! };
//!
//! let player = TurnPlayer::new(Box::new(ThresholdPolicy::new(ScoringThresholds::default())));
//! let config = BatchConfig::new(1_000, 4, DiceSeed::from_bytes([3; 16])).unwrap();
//!
//! let stats = simulate_batch(&player, DicePool::FULL, &config);
//! assert_eq!(stats.turns(), 1_000);
//! assert!(stats.average(Objective::Acquired).unwrap() > 0.0);
//! ```

pub mod aggregate;
pub mod batch;
pub mod sweep;
