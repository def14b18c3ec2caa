//! Batch simulation: many independent turns split across worker threads.
//!
//! A batch of `turns` turns is divided into `workers` contiguous shares. Each
//! worker plays its share with its own [`SeededDieSource`] and its own
//! [`AggregateStats`]; the accumulators are merged in worker order once every
//! worker has finished.
//!
//! Worker seeds are drawn from a PCG32 generator seeded with the batch seed,
//! so a batch is reproducible given the same seed, turn count and worker
//! count. Changing the worker count changes which dice each turn sees.

use std::{num::NonZeroUsize, panic, thread};

use farkle_engine::{DicePool, DiceSeed, SeededDieSource};
use farkle_evaluator::turn_player::TurnPlayer;
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::aggregate::AggregateStats;

/// Turns per batch when nothing else is configured.
pub const DEFAULT_TURNS: u64 = 50_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BatchConfigError {
    #[display("a batch needs at least one turn")]
    NoTurns,
    #[display("a batch needs at least one worker")]
    NoWorkers,
}

/// How many turns to play, on how many threads, from which seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchConfig {
    turns: u64,
    workers: NonZeroUsize,
    seed: DiceSeed,
}

impl BatchConfig {
    pub fn new(turns: u64, workers: usize, seed: DiceSeed) -> Result<Self, BatchConfigError> {
        if turns == 0 {
            return Err(BatchConfigError::NoTurns);
        }
        let workers = NonZeroUsize::new(workers).ok_or(BatchConfigError::NoWorkers)?;
        Ok(Self {
            turns,
            workers,
            seed,
        })
    }

    #[must_use]
    pub const fn turns(&self) -> u64 {
        self.turns
    }

    #[must_use]
    pub const fn workers(&self) -> usize {
        self.workers.get()
    }

    #[must_use]
    pub const fn seed(&self) -> DiceSeed {
        self.seed
    }

    /// Turns assigned to each worker, in worker order.
    ///
    /// The first `turns % workers` workers play one extra turn.
    #[must_use]
    pub fn worker_shares(&self) -> Vec<u64> {
        let workers = self.workers.get() as u64;
        let base = self.turns / workers;
        let extra = self.turns % workers;
        (0..workers)
            .map(|worker| base + u64::from(worker < extra))
            .collect()
    }
}

/// Plays `turns` turns in sequence on the calling thread.
pub fn simulate_turns(
    player: &TurnPlayer<'_>,
    dice: &mut SeededDieSource,
    starting_pool: DicePool,
    turns: u64,
) -> AggregateStats {
    let mut stats = AggregateStats::new();
    for _ in 0..turns {
        stats.record(&player.play_turn(dice, starting_pool));
    }
    stats
}

/// Plays a whole batch across scoped worker threads.
///
/// # Panics
///
/// Re-raises the panic of any worker that panicked.
pub fn simulate_batch(
    player: &TurnPlayer<'_>,
    starting_pool: DicePool,
    config: &BatchConfig,
) -> AggregateStats {
    let mut seeds = Pcg32::from_seed(config.seed.to_bytes());
    let shares = config.worker_shares();

    thread::scope(|s| {
        let handles = shares
            .into_iter()
            .enumerate()
            .map(|(worker, turns)| {
                let seed: DiceSeed = seeds.random();
                s.spawn(move || {
                    log::debug!("worker {worker}: {turns} turns from seed {seed}");
                    let mut dice = SeededDieSource::with_seed(seed);
                    simulate_turns(player, &mut dice, starting_pool, turns)
                })
            })
            .collect::<Vec<_>>();

        let mut total = AggregateStats::new();
        for handle in handles {
            match handle.join() {
                Ok(stats) => total.merge(&stats),
                Err(payload) => panic::resume_unwind(payload),
            }
        }
        total
    })
}
