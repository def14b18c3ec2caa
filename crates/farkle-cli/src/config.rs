//! Command-line configuration shared by every mode.

use std::{num::NonZeroUsize, path::PathBuf, thread};

use anyhow::{Context as _, ensure};
use farkle_engine::{DicePool, DiceSeed, Face};
use farkle_evaluator::{
    stop_strategy::{NeverStop, PointsTableStop, StopStrategy},
    thresholds::ScoringThresholds,
};
use farkle_simulation::{
    batch::{BatchConfig, DEFAULT_TURNS},
    sweep::SweepCell,
};
use rand::Rng as _;

use crate::util;

const DEFAULT_STARTING_DICE: u8 = 6;

/// Scoring thresholds: an optional JSON file plus per-field overrides.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ThresholdArgs {
    /// JSON file with `ones_dice_cutoff`, `fives_dice_cutoff` and `triple_cutoffs`
    #[arg(long)]
    thresholds: Option<PathBuf>,
    /// Bank every lone 1 when at most this many dice are in the pool
    #[arg(long)]
    ones_cutoff: Option<u8>,
    /// Bank every lone 5 when at most this many dice are in the pool
    #[arg(long)]
    fives_cutoff: Option<u8>,
    /// Triple cutoffs for faces 1 to 6, comma separated
    #[arg(long, value_delimiter = ',')]
    triple_cutoffs: Option<Vec<u8>>,
    /// Number of dice the turn starts with
    #[arg(long, default_value_t = DEFAULT_STARTING_DICE)]
    starting_dice: u8,
}

impl Default for ThresholdArgs {
    fn default() -> Self {
        Self {
            thresholds: None,
            ones_cutoff: None,
            fives_cutoff: None,
            triple_cutoffs: None,
            starting_dice: DEFAULT_STARTING_DICE,
        }
    }
}

impl ThresholdArgs {
    pub(crate) fn scoring_thresholds(&self) -> anyhow::Result<ScoringThresholds> {
        let mut thresholds = match &self.thresholds {
            Some(path) => util::read_json_file("thresholds", path)?,
            None => ScoringThresholds::default(),
        };
        if let Some(cutoff) = self.ones_cutoff {
            thresholds = thresholds.with_ones_dice_cutoff(cutoff)?;
        }
        if let Some(cutoff) = self.fives_cutoff {
            thresholds = thresholds.with_fives_dice_cutoff(cutoff)?;
        }
        if let Some(cutoffs) = &self.triple_cutoffs {
            ensure!(
                cutoffs.len() == Face::LEN,
                "--triple-cutoffs needs {} values, got {}",
                Face::LEN,
                cutoffs.len()
            );
            for (face, cutoff) in Face::ALL.into_iter().zip(cutoffs) {
                thresholds = thresholds.with_triple_cutoff(face, *cutoff)?;
            }
        }
        Ok(thresholds)
    }

    pub(crate) fn cell(&self) -> anyhow::Result<SweepCell> {
        Ok(SweepCell {
            thresholds: self.scoring_thresholds()?,
            starting_pool: DicePool::starting(self.starting_dice)?,
        })
    }
}

/// Batch size, parallelism and seed.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct BatchArgs {
    /// Number of turns to simulate per configuration
    #[arg(long, default_value_t = DEFAULT_TURNS)]
    turns: u64,
    /// Worker threads (defaults to the available parallelism)
    #[arg(long)]
    workers: Option<usize>,
    /// Seed as 32 hex characters (random when omitted)
    #[arg(long)]
    seed: Option<DiceSeed>,
}

impl Default for BatchArgs {
    fn default() -> Self {
        Self {
            turns: DEFAULT_TURNS,
            workers: None,
            seed: None,
        }
    }
}

impl BatchArgs {
    pub(crate) fn batch_config(&self) -> anyhow::Result<BatchConfig> {
        let workers = self.workers.unwrap_or_else(|| {
            thread::available_parallelism().map_or(1, NonZeroUsize::get)
        });
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        BatchConfig::new(self.turns, workers, seed).context("invalid batch configuration")
    }
}

/// Voluntary stopping.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct StopArgs {
    /// Stop once the round is worth this much, per dice left (1 to 6, comma
    /// separated, 0 = keep rolling); without it every turn rolls until it farkles
    #[arg(long, value_delimiter = ',')]
    stop_table: Option<Vec<u32>>,
}

impl StopArgs {
    pub(crate) fn points_table(&self) -> anyhow::Result<Option<PointsTableStop>> {
        let Some(table) = &self.stop_table else {
            return Ok(None);
        };
        let min_points = <[u32; 6]>::try_from(table.as_slice()).ok().with_context(|| {
            format!("--stop-table needs 6 values, got {}", table.len())
        })?;
        Ok(Some(PointsTableStop::new(min_points)))
    }

    pub(crate) fn stop_strategy(&self) -> anyhow::Result<Box<dyn StopStrategy>> {
        Ok(match self.points_table()? {
            Some(table) => Box::new(table),
            None => Box::new(NeverStop),
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestArgs {
        #[clap(flatten)]
        thresholds: ThresholdArgs,
        #[clap(flatten)]
        batch: BatchArgs,
        #[clap(flatten)]
        stop: StopArgs,
    }

    fn parse(args: &[&str]) -> TestArgs {
        TestArgs::try_parse_from(std::iter::once("farkle").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        let cell = args.thresholds.cell().unwrap();
        assert_eq!(cell.thresholds, ScoringThresholds::default());
        assert_eq!(cell.starting_pool, DicePool::FULL);
        let batch = args.batch.batch_config().unwrap();
        assert_eq!(batch.turns(), 50_000);
        assert!(batch.workers() >= 1);
        assert!(args.stop.points_table().unwrap().is_none());
    }

    #[test]
    fn test_default_impls_match_clap_defaults() {
        let parsed = parse(&[]);
        assert_eq!(
            ThresholdArgs::default().cell().unwrap(),
            parsed.thresholds.cell().unwrap()
        );
        assert_eq!(BatchArgs::default().turns, parsed.batch.turns);
    }

    #[test]
    fn test_threshold_overrides() {
        let args = parse(&[
            "--ones-cutoff",
            "5",
            "--fives-cutoff",
            "2",
            "--triple-cutoffs",
            "3,3,3,5,5,5",
            "--starting-dice",
            "3",
        ]);
        let cell = args.thresholds.cell().unwrap();
        assert_eq!(
            cell.thresholds,
            ScoringThresholds::new(5, 2, [3, 3, 3, 5, 5, 5]).unwrap()
        );
        assert_eq!(cell.starting_pool.size(), 3);
    }

    #[test]
    fn test_thresholds_file_with_override() {
        let path = std::env::temp_dir().join(format!("farkle-thresholds-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"ones_dice_cutoff":3,"fives_dice_cutoff":1,"triple_cutoffs":[6,6,6,6,6,6]}"#,
        )
        .unwrap();
        let path_str = path.to_str().unwrap();

        let thresholds = parse(&["--thresholds", path_str, "--fives-cutoff", "2"])
            .thresholds
            .scoring_thresholds()
            .unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(
            thresholds,
            ScoringThresholds::new(3, 2, [6; 6]).unwrap()
        );
    }

    #[test]
    fn test_missing_thresholds_file() {
        let err = parse(&["--thresholds", "/nonexistent/farkle.json"])
            .thresholds
            .scoring_thresholds()
            .unwrap_err();
        assert!(err.to_string().contains("thresholds"));
    }

    #[test]
    fn test_invalid_thresholds_are_rejected() {
        assert!(parse(&["--ones-cutoff", "7"]).thresholds.cell().is_err());
        assert!(parse(&["--triple-cutoffs", "1,2,3"]).thresholds.cell().is_err());
        assert!(parse(&["--starting-dice", "0"]).thresholds.cell().is_err());
    }

    #[test]
    fn test_batch_options() {
        let args = parse(&[
            "--turns",
            "100",
            "--workers",
            "3",
            "--seed",
            "000102030405060708090a0b0c0d0e0f",
        ]);
        let batch = args.batch.batch_config().unwrap();
        assert_eq!(batch.turns(), 100);
        assert_eq!(batch.workers(), 3);
        assert_eq!(
            batch.seed(),
            DiceSeed::from_bytes([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15])
        );
        assert!(parse(&["--workers", "0"]).batch.batch_config().is_err());
        assert!(TestArgs::try_parse_from(["farkle", "--seed", "xyz"]).is_err());
    }

    #[test]
    fn test_stop_table() {
        let args = parse(&["--stop-table", "300,300,350,400,500,0"]);
        let table = args.stop.points_table().unwrap().unwrap();
        assert_eq!(table.min_points(), &[300, 300, 350, 400, 500, 0]);
        assert!(parse(&["--stop-table", "300,300"]).stop.points_table().is_err());
    }
}
