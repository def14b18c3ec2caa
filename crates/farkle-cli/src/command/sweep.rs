use std::path::PathBuf;

use chrono::Utc;
use farkle_simulation::{
    aggregate::Objective,
    sweep::{AxisRange, CellSummary, SweepCell, SweepResult, ThresholdSweep},
};

use crate::{
    config::{BatchArgs, StopArgs, ThresholdArgs},
    schema::report::SweepReport,
    util,
};

/// Number of cells listed in the ranking.
const RANKING_LEN: usize = 10;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SweepArg {
    #[command(subcommand)]
    preset: SweepPreset,
    /// Base configuration the swept axes are applied to
    #[clap(flatten)]
    thresholds: ThresholdArgs,
    #[clap(flatten)]
    batch: BatchArgs,
    #[clap(flatten)]
    stop: StopArgs,
    /// Rank cells by acquired round points or by points actually scored
    #[arg(long, default_value = "acquired")]
    objective: Objective,
    /// Write a JSON report to this file (`-` for stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Subcommand)]
enum SweepPreset {
    /// Lone 1 cutoff 2-5 against lone 5 cutoff 2-5
    Singles,
    /// Triple cutoffs for 1s (3-6), 2s (3-5) and 3s (3-5)
    Triples,
    /// Starting pool sizes 1-6
    StartingDice,
    /// Arbitrary axes, e.g. `--axis ones=2..=5 --axis triple4=3..=6`
    Custom {
        /// `axis=range` with axis ones, fives, triple1..triple6 or start
        #[arg(long, required = true)]
        axis: Vec<AxisRange>,
    },
}

impl SweepPreset {
    fn build(&self, base: SweepCell) -> anyhow::Result<ThresholdSweep> {
        let sweep = match self {
            SweepPreset::Singles => ThresholdSweep::singles(base),
            SweepPreset::Triples => ThresholdSweep::triples(base),
            SweepPreset::StartingDice => ThresholdSweep::starting_dice(base),
            SweepPreset::Custom { axis } => axis
                .iter()
                .try_fold(ThresholdSweep::new(base), |sweep, range| {
                    sweep.with_axis(*range)
                })?,
        };
        Ok(sweep)
    }
}

pub(crate) fn run(arg: &SweepArg) -> anyhow::Result<()> {
    let base = arg.thresholds.cell()?;
    let sweep = arg.preset.build(base)?;
    let batch = arg.batch.batch_config()?;
    let stop_table = arg.stop.points_table()?;
    let stop_strategy = arg.stop.stop_strategy()?;

    eprintln!(
        "Sweeping {} cells x {} turns on {} workers",
        sweep.cell_count(),
        batch.turns(),
        batch.workers()
    );
    eprintln!("  Seed: {}", batch.seed());
    eprintln!("  Base: {base}");
    for range in sweep.axes() {
        eprintln!("  Axis: {range}");
    }

    let result = sweep.run(&*stop_strategy, &batch, arg.objective);
    print_ranking(&result);

    let report = SweepReport {
        generated_at: Utc::now(),
        batch,
        stop_table,
        objective: arg.objective,
        base,
        axes: sweep.axes().to_vec(),
        cells: result.cells().iter().map(CellSummary::from).collect(),
        best: result.best().map(CellSummary::from),
        averages: result.average_stats(),
    };
    util::save_report(&report, arg.output.as_deref())
}

fn print_ranking(result: &SweepResult) {
    let objective = result.objective();
    println!("Top cells by {objective} points per turn:");
    for (rank, cell) in result.ranked().into_iter().take(RANKING_LEN).enumerate() {
        println!(
            "  {:2}: {:8.2} +/- {:5.2}  {}",
            rank + 1,
            cell.average(objective),
            cell.stats.points_stats(objective).std_error(),
            cell.cell
        );
    }
    if let Some(spread) = result.average_stats() {
        println!(
            "Across {} cells: min {:.2}, median {:.2}, max {:.2} (range {:.2})",
            spread.count,
            spread.min,
            spread.median,
            spread.max,
            spread.range()
        );
    }
    if let Some(best) = result.best() {
        println!("Best: {}", best.cell);
    }
}
