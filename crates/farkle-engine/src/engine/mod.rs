//! Turn mechanics built on the core dice types.
//!
//! This module provides the pieces that move a Farkle turn forward:
//!
//! - [`DieSource`] - Supplies faces, one call per die
//! - [`SeededDieSource`] / [`DiceSeed`] - Reproducible PCG32-backed die source
//! - [`RollOutcome`] - What a scoring decision did with one roll
//! - [`Turn`] - State machine for a single turn (`Rolling`, `Busted`, `Ended`)
//! - [`TurnOutcome`] - Final report of a finished turn
//!
//! # Turn Flow
//!
//! 1. Start a [`Turn`] with a pool of 1-6 dice
//! 2. Roll the pool with a [`DieSource`]
//! 3. A scoring policy resolves the roll into a [`RollOutcome`]
//! 4. [`Turn::apply`] banks the points, refills the pool on hot dice, or busts
//! 5. Repeat until the turn is busted or voluntarily ended
//!
//! # Example
//!
//! ```
//! use farkle_engine::{DicePool, Face, FaceCounts, RollEffect, RollOutcome, Turn};
//!
//! let mut turn = Turn::new(DicePool::FULL);
//!
//! // Bank a single 1, keeping five dice
//! let effect = turn.apply(RollOutcome::Banked {
//!     points: 100,
//!     set_aside: FaceCounts::from_faces([Face::One]),
//!     remaining: DicePool::starting(5).unwrap(),
//! });
//! assert_eq!(effect, RollEffect::Continue);
//! assert_eq!(turn.round_points(), 100);
//!
//! // A farkle forfeits the round
//! turn.apply(RollOutcome::Farkle);
//! assert!(turn.state().is_busted());
//! assert_eq!(turn.outcome().scored_points(), 0);
//! ```

pub use self::{die_source::*, roll_outcome::*, turn::*, turn_outcome::*};

mod die_source;
mod roll_outcome;
mod turn;
mod turn_outcome;
